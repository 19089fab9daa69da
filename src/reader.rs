//! Source ingestion collaborator (§1, §6). The core only knows how to ask
//! a [`SourceReader`] for a layer's rows in their native CRS; concrete
//! readers over vector containers (GeoPackage, Shapefile, ...) live in the
//! `cli` crate, mirroring how the teacher's library crates never open a
//! file themselves.

use std::collections::HashMap;

use anyhow::Result;
use geo::{LineString, Point};

use crate::config::DataConfig;
use crate::value::Scalar;

/// A row's geometry as read from the source, before reprojection to the
/// canonical CRS.
#[derive(Clone, Debug)]
pub enum RawGeometry {
    Point(Point<f64>),
    LineString(LineString<f64>),
}

/// One source layer in column-major form, with arbitrary source column
/// names (S1 has not yet applied the `conform` mapping).
#[derive(Clone, Debug, Default)]
pub struct RawTable {
    pub columns: HashMap<String, Vec<Scalar>>,
    pub geometry: Option<Vec<Option<RawGeometry>>>,
}

impl RawTable {
    pub fn num_rows(&self) -> usize {
        self.columns.values().next().map_or(0, Vec::len)
    }

    /// Materializes one row as a name → value map, the shape the
    /// field-mapping engine consumes.
    pub fn row(&self, index: usize) -> HashMap<String, Scalar> {
        self.columns
            .iter()
            .map(|(name, col)| (name.clone(), col.get(index).cloned().unwrap_or(Scalar::Null)))
            .collect()
    }
}

/// Reads one configured source layer. Implementations live behind this
/// trait so the core never depends on a specific vector I/O library.
pub trait SourceReader {
    fn read(&self, data: &DataConfig) -> Result<RawTable>;
}
