//! One [`nrn_core::writer::LayerWriter`] per delivery format, dispatched
//! by `package` through [`MultiFormatWriter`]. Each sub-writer opens its
//! backing file(s) lazily on first `write()` for a given (format, lang)
//! and flushes in `finish()`.

pub mod gml;
pub mod gpkg;
pub mod kml;
pub mod shp;

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::Result;
use nrn_core::stages::s7_project::PreparedTable;
use nrn_core::writer::LayerWriter;
use nrn_schema::{Lang, OutputFormat};

pub struct MultiFormatWriter {
    out_dir: PathBuf,
    source: String,
    major: u32,
    minor: u32,
    gpkg: HashMap<&'static str, gpkg::GpkgWriter>,
    shp: HashMap<(Lang, String), shp::ShpWriter>,
    gml: HashMap<(OutputFormat, Lang), gml::GmlWriter>,
    kml: HashMap<String, kml::KmlWriter>,
}

impl MultiFormatWriter {
    pub fn new(out_dir: PathBuf, source: String, major: u32, minor: u32) -> Self {
        Self {
            out_dir,
            source,
            major,
            minor,
            gpkg: HashMap::new(),
            shp: HashMap::new(),
            gml: HashMap::new(),
            kml: HashMap::new(),
        }
    }
}

impl LayerWriter for MultiFormatWriter {
    fn write(&mut self, format: OutputFormat, lang: Lang, table: &PreparedTable) -> Result<()> {
        match format {
            OutputFormat::Gpkg => {
                let path = self.out_dir.join(crate::naming::gpkg_filename(&self.source, self.major, self.minor));
                let writer = match self.gpkg.get_mut("gpkg") {
                    Some(w) => w,
                    None => {
                        self.gpkg.insert("gpkg", gpkg::GpkgWriter::open(&path)?);
                        self.gpkg.get_mut("gpkg").unwrap()
                    }
                };
                writer.write_table(lang, table)
            }
            OutputFormat::Shp => {
                let key = (lang, table.layer_name.clone());
                if !self.shp.contains_key(&key) {
                    let path = self.out_dir.join(crate::naming::shp_filename(
                        &self.source,
                        self.major,
                        self.minor,
                        lang,
                        &table.layer_name,
                    ));
                    self.shp.insert(key.clone(), shp::ShpWriter::new(path));
                }
                self.shp.get_mut(&key).unwrap().write_table(table)
            }
            OutputFormat::Gml => {
                let key = (format, lang);
                if !self.gml.contains_key(&key) {
                    let dir = self.out_dir.join(crate::naming::gml_dirname(&self.source, self.major, self.minor, lang));
                    std::fs::create_dir_all(&dir)?;
                    self.gml.insert(key, gml::GmlWriter::new(dir));
                }
                self.gml.get_mut(&key).unwrap().write_table(table)
            }
            OutputFormat::Kml => {
                let stem = table.layer_name.clone();
                if !self.kml.contains_key(&stem) {
                    let path = self.out_dir.join(crate::naming::kml_filename(&stem));
                    self.kml.insert(stem.clone(), kml::KmlWriter::new(path));
                }
                self.kml.get_mut(&stem).unwrap().write_table(table)
            }
        }
    }

    fn finish(&mut self, format: OutputFormat, lang: Lang) -> Result<()> {
        match format {
            OutputFormat::Gpkg => {
                if let Some(w) = self.gpkg.get_mut("gpkg") {
                    w.flush()?;
                }
            }
            OutputFormat::Shp => {
                for ((l, _), w) in self.shp.iter_mut() {
                    if *l == lang {
                        w.finish()?;
                    }
                }
            }
            OutputFormat::Gml => {
                if let Some(w) = self.gml.get_mut(&(format, lang)) {
                    w.finish()?;
                }
            }
            OutputFormat::Kml => {
                for w in self.kml.values_mut() {
                    w.finish()?;
                }
            }
        }
        Ok(())
    }
}

fn sql_type_for_column(values: &[nrn_core::value::AttrValue]) -> &'static str {
    use nrn_core::value::{AttrValue, Scalar};
    for value in values {
        match value {
            AttrValue::Scalar(Scalar::Int(_)) => return "INTEGER",
            AttrValue::Scalar(Scalar::Real(_)) => return "REAL",
            AttrValue::Scalar(Scalar::Str(_)) => return "TEXT",
            _ => continue,
        }
    }
    "TEXT"
}
