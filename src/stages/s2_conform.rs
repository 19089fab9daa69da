//! S2 Conform (§4.1): apply one source layer's declarative mapping into
//! one canonical target table, row by row.

use crate::conform::apply_conform;
use crate::config::ConformDoc;
use crate::error::ConformError;
use crate::ids;
use crate::stages::s1_ingest::IngestedSource;
use crate::store::TableStore;
use crate::value::{AttrValue, Scalar};

/// Maps every row of `source` into `target_table`, appending new rows to
/// the store. `nid` is minted fresh here unless the mapping document
/// explicitly populated it; S6 later overwrites it where a prior-vintage
/// geometry match exists.
pub fn conform_into(
    store: &mut TableStore,
    target_table: &'static str,
    source: &IngestedSource,
    conform: &ConformDoc,
) -> Result<(), ConformError> {
    for i in 0..source.num_rows() {
        let raw_row = source.row(i);
        let mapped = apply_conform(target_table, &raw_row, conform)?;

        let table = store
            .table_mut(target_table)
            .unwrap_or_else(|| panic!("unknown canonical table `{target_table}`"));
        let idx = table.push_default_row(ids::new_uuid());

        for (field, value) in mapped {
            if let Some(col) = table.column_mut(&field) {
                col[idx] = value;
            }
        }

        if let Some(nid_col) = table.column_mut("nid") {
            let needs_mint = nid_col[idx]
                .scalar()
                .map(Scalar::is_none_like)
                .unwrap_or(true);
            if needs_mint {
                nid_col[idx] = AttrValue::Scalar(Scalar::Str(ids::new_nid()));
            }
        }

        if let Some(geom_col) = table.geometry.as_mut() {
            geom_col[idx] = source
                .geometry
                .as_ref()
                .and_then(|geoms| geoms.get(i))
                .cloned()
                .flatten();
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use crate::config::MappingEntry;

    #[test]
    fn conformed_row_count_matches_source_and_mints_nid() {
        let mut columns = HashMap::new();
        columns.insert("RTE".to_string(), vec![Scalar::Str("Main St".into())]);
        let source = IngestedSource {
            uuid: vec![ids::new_uuid()],
            columns,
            geometry: None,
        };

        let mut fields = HashMap::new();
        fields.insert(
            "l_stname_c".to_string(),
            MappingEntry::Direct {
                field: "RTE".to_string(),
                cast_type: None,
            },
        );
        let mut conform = ConformDoc::new();
        conform.insert("roadseg".to_string(), fields);

        let mut store = TableStore::empty();
        conform_into(&mut store, "roadseg", &source, &conform).unwrap();

        let table = store.table("roadseg").unwrap();
        assert_eq!(table.num_rows(), 1);
        assert!(!table.nid_of(0).unwrap().is_empty());
    }
}
