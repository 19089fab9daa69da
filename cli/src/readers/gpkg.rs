//! Reads a configured GeoPackage source layer (§6 "Configuration
//! (per-source)" `data.driver: gpkg`) into a [`RawTable`]. Non-GPKG
//! drivers are out of scope (spec.md §1 Non-goals: "not a general GIS
//! engine").

use anyhow::{bail, Context, Result};
use nrn_core::reader::{RawGeometry, RawTable, SourceReader};
use nrn_core::value::Scalar;
use rusqlite::{types::ValueRef, Connection};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::gpkg_binary;

pub struct GpkgSourceReader {
    pub base_dir: PathBuf,
}

impl SourceReader for GpkgSourceReader {
    fn read(&self, data: &nrn_core::config::DataConfig) -> Result<RawTable> {
        if data.driver.as_deref().is_some_and(|d| d != "gpkg") {
            bail!("unsupported source driver `{}`; only `gpkg` is implemented", data.driver.as_deref().unwrap_or(""));
        }

        let path = self.base_dir.join(&data.filename);
        let conn = Connection::open(&path).with_context(|| format!("opening {}", path.display()))?;
        let layer = data
            .layer
            .clone()
            .ok_or_else(|| anyhow::anyhow!("source config for {} has no `layer` name", path.display()))?;

        let geom_column = find_geometry_column(&conn, &layer)?;

        let sql = match &data.query {
            Some(q) => format!("SELECT * FROM \"{layer}\" WHERE {q}"),
            None => format!("SELECT * FROM \"{layer}\""),
        };
        let mut stmt = conn.prepare(&sql).with_context(|| format!("preparing read of layer `{layer}`"))?;
        let column_names: Vec<String> = stmt.column_names().iter().map(|s| s.to_string()).collect();

        let mut columns: HashMap<String, Vec<Scalar>> = column_names
            .iter()
            .filter(|n| Some(n.as_str()) != geom_column.as_deref())
            .map(|n| (n.clone(), Vec::new()))
            .collect();
        let mut geometry: Option<Vec<Option<RawGeometry>>> = geom_column.as_ref().map(|_| Vec::new());

        let mut rows = stmt.query([])?;
        while let Some(row) = rows.next()? {
            for (i, name) in column_names.iter().enumerate() {
                if Some(name.as_str()) == geom_column.as_deref() {
                    let blob: Option<Vec<u8>> = row.get(i)?;
                    if let Some(g) = geometry.as_mut() {
                        g.push(blob.as_deref().and_then(decode_raw_geometry));
                    }
                } else if let Some(col) = columns.get_mut(name) {
                    col.push(scalar_from_value(row.get_ref(i)?));
                }
            }
        }

        Ok(RawTable { columns, geometry })
    }
}

fn find_geometry_column(conn: &Connection, layer: &str) -> Result<Option<String>> {
    let found: rusqlite::Result<String> = conn.query_row(
        "SELECT column_name FROM gpkg_geometry_columns WHERE table_name = ?1",
        [layer],
        |r| r.get(0),
    );
    match found {
        Ok(name) => Ok(Some(name)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e).context("reading gpkg_geometry_columns"),
    }
}

fn decode_raw_geometry(blob: &[u8]) -> Option<RawGeometry> {
    let wkb = gpkg_binary::decode_wkb_body(blob)?;
    let coords = gpkg_binary::decode_point_or_linestring(wkb)?;
    if coords.len() == 1 {
        let (x, y) = coords[0];
        Some(RawGeometry::Point(geo::Point::new(x, y)))
    } else {
        Some(RawGeometry::LineString(geo::LineString::from(coords)))
    }
}

fn scalar_from_value(value: ValueRef) -> Scalar {
    match value {
        ValueRef::Null => Scalar::Null,
        ValueRef::Integer(i) => Scalar::Int(i),
        ValueRef::Real(r) => Scalar::Real(r),
        ValueRef::Text(t) => Scalar::Str(String::from_utf8_lossy(t).into_owned()),
        ValueRef::Blob(_) => Scalar::Null,
    }
}
