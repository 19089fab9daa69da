//! Checkpoints the whole in-memory `TableStore` to and from a single
//! SQLite file between CLI subcommands (`convert` writes it, `package`
//! and `validate` read it back). Column names and values are internal
//! (`nrn-schema` field names, domain codes rather than labels) — this is
//! a working checkpoint, not a delivery artifact; §4.7 projection still
//! runs entirely inside `package`. Table layout is grounded on
//! `s57-cli/src/index.rs`'s `rusqlite` table-creation pattern.

use std::path::Path;

use anyhow::{Context, Result};
use nrn_core::store::{Geometry, Table, TableStore};
use nrn_core::value::{AttrValue, Scalar};
use nrn_schema::SemanticType;
use rusqlite::{params_from_iter, Connection};

use crate::gpkg_binary;

const WORKING_SRS_ID: i32 = 4617;

pub fn write(store: &TableStore, path: &Path) -> Result<()> {
    if path.exists() {
        std::fs::remove_file(path).with_context(|| format!("removing stale {}", path.display()))?;
    }
    let conn = Connection::open(path).with_context(|| format!("creating {}", path.display()))?;

    for &schema in nrn_schema::ALL_TABLES {
        let Some(table) = store.table(schema.name) else { continue };
        create_table(&conn, schema)?;
        insert_rows(&conn, schema, table)?;
    }
    Ok(())
}

fn create_table(conn: &Connection, schema: &'static nrn_schema::TableSchema) -> Result<()> {
    let mut cols = vec!["uuid TEXT PRIMARY KEY".to_string()];
    for field in schema.fields {
        let sql_type = match field.semantic {
            SemanticType::Str => "TEXT",
            SemanticType::Int => "INTEGER",
            SemanticType::Real => "REAL",
        };
        cols.push(format!("\"{}\" {sql_type}", field.name));
    }
    if schema.geometry != nrn_schema::GeometryKind::None {
        cols.push("geom BLOB".to_string());
    }
    conn.execute(
        &format!("CREATE TABLE \"{}\" ({})", schema.name, cols.join(", ")),
        [],
    )?;
    Ok(())
}

fn insert_rows(conn: &Connection, schema: &'static nrn_schema::TableSchema, table: &Table) -> Result<()> {
    let field_names: Vec<&str> = schema.fields.iter().map(|f| f.name).collect();
    let has_geom = schema.geometry != nrn_schema::GeometryKind::None;

    let mut col_list = vec!["uuid".to_string()];
    col_list.extend(field_names.iter().map(|n| format!("\"{n}\"")));
    if has_geom {
        col_list.push("geom".to_string());
    }
    let placeholders = vec!["?"; col_list.len()].join(", ");
    let sql = format!(
        "INSERT INTO \"{}\" ({}) VALUES ({})",
        schema.name,
        col_list.join(", "),
        placeholders
    );
    let mut stmt = conn.prepare(&sql)?;

    for row in 0..table.num_rows() {
        let mut values: Vec<rusqlite::types::Value> = vec![table.uuid[row].clone().into()];
        for &name in &field_names {
            let cell = table.column(name).and_then(|c| c.get(row));
            values.push(to_sql_value(cell));
        }
        if has_geom {
            let blob = table
                .geometry
                .as_ref()
                .and_then(|g| g.get(row))
                .and_then(Option::as_ref)
                .map(|g: &Geometry| gpkg_binary::encode(g, WORKING_SRS_ID));
            values.push(match blob {
                Some(b) => rusqlite::types::Value::Blob(b),
                None => rusqlite::types::Value::Null,
            });
        }
        stmt.execute(params_from_iter(values))?;
    }
    Ok(())
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

/// Resolves a `--previous` target to a concrete checkpoint file: passes a
/// file through unchanged, or picks the first `.gpkg` found in a
/// directory (the shape `download::resolve_previous` leaves behind after
/// extracting a zip).
pub fn locate(path: &Path) -> Result<std::path::PathBuf> {
    if path.is_file() {
        return Ok(path.to_path_buf());
    }
    std::fs::read_dir(path)
        .with_context(|| format!("reading directory {}", path.display()))?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .find(|p| p.extension().and_then(|e| e.to_str()) == Some("gpkg"))
        .with_context(|| format!("no .gpkg checkpoint found under {}", path.display()))
}

pub fn read(path: &Path) -> Result<TableStore> {
    let conn = Connection::open(path).with_context(|| format!("opening {}", path.display()))?;
    let mut store = TableStore::empty();

    for &schema in nrn_schema::ALL_TABLES {
        let Some(table) = store.table_mut(schema.name) else { continue };
        if !table_exists(&conn, schema.name)? {
            continue;
        }
        load_table(&conn, schema, table)?;
    }
    Ok(store)
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let count: i64 = conn.query_row(
        "SELECT count(*) FROM sqlite_master WHERE type='table' AND name=?1",
        [name],
        |r| r.get(0),
    )?;
    Ok(count > 0)
}

fn load_table(conn: &Connection, schema: &'static nrn_schema::TableSchema, table: &mut Table) -> Result<()> {
    let has_geom = schema.geometry != nrn_schema::GeometryKind::None;
    let mut col_list = vec!["uuid".to_string()];
    col_list.extend(schema.fields.iter().map(|f| format!("\"{}\"", f.name)));
    if has_geom {
        col_list.push("geom".to_string());
    }
    let sql = format!("SELECT {} FROM \"{}\"", col_list.join(", "), schema.name);

    let mut stmt = conn.prepare(&sql)?;
    let mut rows = stmt.query([])?;

    while let Some(sql_row) = rows.next()? {
        let uuid: String = sql_row.get(0)?;
        let idx = table.push_default_row(uuid);
        for (i, field) in schema.fields.iter().enumerate() {
            let value: rusqlite::types::Value = sql_row.get(i + 1)?;
            if let Some(col) = table.column_mut(field.name) {
                col[idx] = AttrValue::Scalar(from_sql_value(value, field.semantic));
            }
        }
        if has_geom {
            let blob: Option<Vec<u8>> = sql_row.get(schema.fields.len() + 1)?;
            if let (Some(blob), Some(geom_col)) = (blob, table.geometry.as_mut()) {
                geom_col[idx] = decode_geometry(&blob, schema.geometry);
            }
        }
    }
    Ok(())
}

fn from_sql_value(value: rusqlite::types::Value, semantic: SemanticType) -> Scalar {
    use rusqlite::types::Value;
    match (value, semantic) {
        (Value::Null, _) => Scalar::Null,
        (Value::Text(s), _) => Scalar::Str(s),
        (Value::Integer(i), _) => Scalar::Int(i),
        (Value::Real(r), _) => Scalar::Real(r),
        (Value::Blob(_), _) => Scalar::Null,
    }
}

fn decode_geometry(blob: &[u8], kind: nrn_schema::GeometryKind) -> Option<Geometry> {
    let wkb = gpkg_binary::decode_wkb_body(blob)?;
    let coords = gpkg_binary::decode_point_or_linestring(wkb)?;
    match kind {
        nrn_schema::GeometryKind::Point => {
            let (x, y) = *coords.first()?;
            Some(Geometry::Point(geo::Point::new(x, y)))
        }
        nrn_schema::GeometryKind::LineString => {
            Some(Geometry::LineString(geo::LineString::from(coords)))
        }
        nrn_schema::GeometryKind::None => None,
    }
}
