//! S7 Project & Emit (§4.7): per-format/per-language column and table
//! renaming, French domain-label materialization, and KML roadseg
//! partitioning by placename under a per-file feature cap.

use std::collections::HashMap;

use nrn_schema::{Lang, OutputFormat, TableSchema};

use crate::store::{Geometry, Table};
use crate::value::{AttrValue, Scalar};

pub const DEFAULT_KML_FEATURE_CAP: usize = 250;

/// A table ready for a concrete writer: external column names, one
/// language's domain labels, geometry untouched.
pub struct PreparedTable {
    pub layer_name: String,
    pub columns: Vec<(String, Vec<AttrValue>)>,
    pub geometry: Option<Vec<Option<Geometry>>>,
}

/// Projects one canonical table into a single (format, language) view
/// (§4.7 steps 1–3): drops columns with no external name in this format,
/// relabels domain-bearing codes into the target language, renames
/// surviving columns and the table itself.
pub fn project(
    table: &Table,
    schema: &'static TableSchema,
    format: OutputFormat,
    lang: Lang,
) -> Option<PreparedTable> {
    let layer_name = schema.layer_name(format, lang)?.to_string();

    let mut columns = Vec::new();
    for field in schema.fields {
        let Some(ext_name) = field.ext.for_format(format).for_lang(lang) else {
            continue;
        };
        let Some(values) = table.column(field.name) else { continue };
        let projected: Vec<AttrValue> = values
            .iter()
            .map(|v| project_value(v, field.domain, lang))
            .collect();
        columns.push((ext_name.to_string(), projected));
    }

    Some(PreparedTable {
        layer_name,
        columns,
        geometry: table.geometry.clone(),
    })
}

fn project_value(value: &AttrValue, domain: Option<&'static nrn_schema::Domain>, lang: Lang) -> AttrValue {
    let Some(domain) = domain else { return value.clone() };
    match value {
        AttrValue::Scalar(Scalar::Int(code)) => match domain.label_for(lang, *code as i32) {
            Some(label) => AttrValue::Scalar(Scalar::Str(label.to_string())),
            None => value.clone(),
        },
        other => other.clone(),
    }
}

/// One emitted KML chunk: a sanitized filename stem (without extension)
/// and the roadseg row indices it carries (§4.7 KML partitioning).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KmlPartition {
    pub filename: String,
    pub row_indices: Vec<usize>,
}

/// Splits `roadseg` into KML-sized chunks, one set of files per distinct
/// placename across `l_placenam`/`r_placenam` (§4.7 steps 1–5).
pub fn partition_roadseg_kml(table: &Table, cap: usize) -> Vec<KmlPartition> {
    let mut by_placename: HashMap<String, Vec<usize>> = HashMap::new();

    for field in ["l_placenam", "r_placenam"] {
        let Some(col) = table.column(field) else { continue };
        for (i, v) in col.iter().enumerate() {
            if let AttrValue::Scalar(Scalar::Str(name)) = v {
                if name.is_empty() || name == "None" {
                    continue;
                }
                by_placename.entry(name.clone()).or_default().push(i);
            }
        }
    }

    let mut partitions = Vec::new();
    let mut names: Vec<&String> = by_placename.keys().collect();
    names.sort();

    for name in names {
        let mut rows = by_placename[name].clone();
        rows.sort_unstable();
        rows.dedup();
        let stem = sanitize_filename(name);

        if rows.len() <= cap {
            partitions.push(KmlPartition { filename: stem, row_indices: rows });
        } else {
            for (chunk_idx, chunk) in rows.chunks(cap).enumerate() {
                partitions.push(KmlPartition {
                    filename: format!("{stem}_{}", chunk_idx + 1),
                    row_indices: chunk.to_vec(),
                });
            }
        }
    }

    partitions
}

fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect()
}

/// Escapes a value for embedding in a SQL-style single-quoted literal
/// filter (§4.7 step 5): doubles embedded single quotes.
pub fn sql_escape(value: &str) -> String {
    value.replace('\'', "''")
}

/// Computes the next (major, minor) version given the previous vintage's
/// declared version and release year (§4.7 Version numbering).
pub fn next_version(prev_major: u32, prev_minor: u32, prev_release_year: i32, current_year: i32) -> (u32, u32) {
    if prev_release_year == current_year {
        (prev_major, prev_minor + 1)
    } else {
        (prev_major + 1, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nrn_schema::table;

    #[test]
    fn partition_splits_large_placename_into_capped_chunks() {
        let mut t = Table::new(table("roadseg").unwrap());
        for _ in 0..501 {
            let idx = t.push_default_row(crate::ids::new_uuid());
            t.column_mut("l_placenam").unwrap()[idx] = AttrValue::Scalar(Scalar::Str("TestTown".into()));
        }
        let partitions = partition_roadseg_kml(&t, 250);
        assert_eq!(partitions.len(), 3);
        assert_eq!(partitions[0].filename, "TestTown_1");
        assert_eq!(partitions[0].row_indices.len(), 250);
        assert_eq!(partitions[2].row_indices.len(), 1);
    }

    #[test]
    fn small_placename_is_a_single_unsuffixed_file() {
        let mut t = Table::new(table("roadseg").unwrap());
        let idx = t.push_default_row(crate::ids::new_uuid());
        t.column_mut("r_placenam").unwrap()[idx] = AttrValue::Scalar(Scalar::Str("Small Town".into()));
        let partitions = partition_roadseg_kml(&t, 250);
        assert_eq!(partitions.len(), 1);
        assert_eq!(partitions[0].filename, "Small_Town");
    }

    #[test]
    fn version_increments_minor_within_the_same_release_year() {
        assert_eq!(next_version(23, 4, 2026, 2026), (23, 5));
        assert_eq!(next_version(23, 4, 2025, 2026), (24, 0));
    }

    #[test]
    fn domain_code_projects_to_the_requested_language_label() {
        let mut t = Table::new(table("roadseg").unwrap());
        let idx = t.push_default_row(crate::ids::new_uuid());
        let code = nrn_schema::domains::ROADCLASS.code_for(Lang::En, "Local / Street").unwrap();
        t.column_mut("roadclass").unwrap()[idx] = AttrValue::Scalar(Scalar::Int(code as i64));

        let schema = table("roadseg").unwrap();
        let prepared = project(&t, schema, OutputFormat::Gpkg, Lang::Fr).unwrap();
        let (_, values) = prepared.columns.iter().find(|(n, _)| n == "CLASSROUT").unwrap();
        let label = nrn_schema::domains::ROADCLASS.label_for(Lang::Fr, code).unwrap();
        assert_eq!(values[idx], AttrValue::Scalar(Scalar::Str(label.to_string())));
    }
}
