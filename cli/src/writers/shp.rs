//! Shapefile delivery writer: one `.shp`/`.dbf`/`.shx` set per (format,
//! language), with a geometry/attribute split the way the `dbase`
//! crate's `Record` models a flat attribute row (c.f. the teacher's
//! read-side use of `shapefile::dbase::{Record, FieldValue}` in
//! `preprocess.rs`, mirrored here for writing).

use std::path::PathBuf;

use anyhow::{bail, Result};
use nrn_core::stages::s7_project::PreparedTable;
use nrn_core::store::Geometry;
use nrn_core::value::{AttrValue, Scalar};
use shapefile::dbase::{FieldValue, Record};
use shapefile::{Point, Polyline, ShapeType, Writer};

pub struct ShpWriter {
    path: PathBuf,
    writer: Option<Writer<std::io::BufWriter<std::fs::File>>>,
}

impl ShpWriter {
    pub fn new(path: PathBuf) -> Self {
        Self { path, writer: None }
    }

    pub fn write_table(&mut self, table: &PreparedTable) -> Result<()> {
        let Some(geometry) = &table.geometry else {
            bail!("layer {} has no geometry column; shapefile output requires one", table.layer_name);
        };
        let num_rows = table.columns.first().map(|(_, v)| v.len()).unwrap_or(0);

        for row in 0..num_rows {
            let Some(geom) = geometry.get(row).and_then(Option::as_ref) else { continue };
            let record = build_record(table, row);
            let writer = self.writer_for(geom)?;
            match geom {
                Geometry::Point(p) => {
                    writer.write_shape_and_record(&Point::new(p.x(), p.y()), &record)?;
                }
                Geometry::LineString(ls) => {
                    let points: Vec<Point> = ls.points().map(|p| Point::new(p.x(), p.y())).collect();
                    writer.write_shape_and_record(&Polyline::new(points), &record)?;
                }
            }
        }
        Ok(())
    }

    fn writer_for(&mut self, geom: &Geometry) -> Result<&mut Writer<std::io::BufWriter<std::fs::File>>> {
        if self.writer.is_none() {
            let shape_type = match geom {
                Geometry::Point(_) => ShapeType::Point,
                Geometry::LineString(_) => ShapeType::Polyline,
            };
            self.writer = Some(Writer::from_path(&self.path, shape_type)?);
        }
        Ok(self.writer.as_mut().unwrap())
    }

    pub fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

fn build_record(table: &PreparedTable, row: usize) -> Record {
    let mut record = Record::default();
    for (name, values) in &table.columns {
        let field = dbase_field_name(name);
        let value = match values.get(row) {
            Some(AttrValue::Scalar(Scalar::Str(s))) => FieldValue::Character(Some(s.clone())),
            Some(AttrValue::Scalar(Scalar::Int(i))) => FieldValue::Numeric(Some(*i as f64)),
            Some(AttrValue::Scalar(Scalar::Real(r))) => FieldValue::Numeric(Some(*r)),
            Some(AttrValue::Scalar(Scalar::Null)) | None => FieldValue::Character(None),
            Some(AttrValue::Pair(..)) => FieldValue::Character(None),
        };
        record.insert(field, value);
    }
    record
}

/// Shapefile DBF field names are capped at 10 characters.
fn dbase_field_name(name: &str) -> String {
    name.chars().take(10).collect()
}
