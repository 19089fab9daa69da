//! The S7 → `cli` boundary: the core projects tables, the concrete
//! container/format writers live in the `cli` crate so the library never
//! links against a vector I/O backend (mirrors `reader::SourceReader` on
//! the ingest side).

use anyhow::Result;
use nrn_schema::{Lang, OutputFormat};

use crate::stages::s7_project::PreparedTable;

/// Receives one projected `(format, language, layer)` table and persists
/// it however the concrete format requires (a GeoPackage layer, a
/// Shapefile, a GML feature collection, a KML chunk).
pub trait LayerWriter {
    fn write(&mut self, format: OutputFormat, lang: Lang, table: &PreparedTable) -> Result<()>;

    /// Called once all layers for a (format, language) pair have been
    /// written, so implementations can flush/close a shared container
    /// (a single GeoPackage file backs every layer, unlike SHP/GML/KML
    /// which are one-file-per-layer).
    fn finish(&mut self, format: OutputFormat, lang: Lang) -> Result<()> {
        let _ = (format, lang);
        Ok(())
    }
}
