//! GPKG delivery writer: one bilingual SQLite/GeoPackage file per run,
//! one table per projected layer name, geometry framed the same way as
//! the working checkpoint (`gpkg_binary`, `storefile`).

use std::path::Path;

use anyhow::{Context, Result};
use nrn_core::stages::s7_project::PreparedTable;
use nrn_core::value::{AttrValue, Scalar};
use nrn_schema::Lang;
use rusqlite::{params_from_iter, Connection};

use crate::gpkg_binary;

const WORKING_SRS_ID: i32 = 4617;

pub struct GpkgWriter {
    conn: Connection,
}

impl GpkgWriter {
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path).with_context(|| format!("creating {}", path.display()))?;
        Ok(Self { conn })
    }

    pub fn write_table(&mut self, _lang: Lang, table: &PreparedTable) -> Result<()> {
        let has_geom = table.geometry.is_some();
        let mut cols = Vec::with_capacity(table.columns.len() + 1);
        for (name, values) in &table.columns {
            cols.push(format!("\"{name}\" {}", super::sql_type_for_column(values)));
        }
        if has_geom {
            cols.push("geom BLOB".to_string());
        }
        self.conn.execute(
            &format!("CREATE TABLE IF NOT EXISTS \"{}\" ({})", table.layer_name, cols.join(", ")),
            [],
        )?;

        let mut col_list: Vec<String> = table.columns.iter().map(|(n, _)| format!("\"{n}\"")).collect();
        if has_geom {
            col_list.push("geom".to_string());
        }
        let placeholders = vec!["?"; col_list.len()].join(", ");
        let sql = format!(
            "INSERT INTO \"{}\" ({}) VALUES ({})",
            table.layer_name,
            col_list.join(", "),
            placeholders
        );
        let mut stmt = self.conn.prepare(&sql)?;

        let num_rows = table.columns.first().map(|(_, v)| v.len()).unwrap_or(0);
        for row in 0..num_rows {
            let mut values: Vec<rusqlite::types::Value> =
                table.columns.iter().map(|(_, col)| to_sql_value(col.get(row))).collect();
            if has_geom {
                let blob = table
                    .geometry
                    .as_ref()
                    .and_then(|g| g.get(row))
                    .and_then(Option::as_ref)
                    .map(|g| gpkg_binary::encode(g, WORKING_SRS_ID));
                values.push(match blob {
                    Some(b) => rusqlite::types::Value::Blob(b),
                    None => rusqlite::types::Value::Null,
                });
            }
            stmt.execute(params_from_iter(values))?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

fn to_sql_value(cell: Option<&AttrValue>) -> rusqlite::types::Value {
    use rusqlite::types::Value;
    match cell {
        Some(AttrValue::Scalar(Scalar::Str(s))) => Value::Text(s.clone()),
        Some(AttrValue::Scalar(Scalar::Int(i))) => Value::Integer(*i),
        Some(AttrValue::Scalar(Scalar::Real(r))) => Value::Real(*r),
        Some(AttrValue::Scalar(Scalar::Null)) | None => Value::Null,
        Some(AttrValue::Pair(..)) => Value::Null,
    }
}
