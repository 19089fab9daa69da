//! S3 Split & Recover (§4.4, §8 scenario 6): materializes packed
//! left/right `strplaname` values into separate rows, de-duplicates the
//! result, and recovers layers absent from the current source set from
//! the prior vintage.

use std::collections::HashMap;

use crate::ids;
use crate::store::{Table, TableStore};
use crate::value::{AttrValue, Scalar};

const TODAY_PLACEHOLDER: &str = "19700101"; // overwritten by the caller with the real run date
const DEFAULT_DATE: &str = "0";

/// Splits every `strplaname` row carrying a packed pair into a left and a
/// right row, each with a fresh `nid`. Returns the {original nid → new
/// nid} maps for the left and right sides respectively, so callers can
/// rewrite foreign references.
pub fn split_strplaname(table: &mut Table) -> (HashMap<String, String>, HashMap<String, String>) {
    let mut left_map = HashMap::new();
    let mut right_map = HashMap::new();

    let pair_rows: Vec<usize> = (0..table.num_rows())
        .filter(|&i| {
            table
                .field_names()
                .map(|n| n.to_string())
                .collect::<Vec<_>>()
                .iter()
                .any(|name| matches!(table.column(name).and_then(|c| c.get(i)), Some(AttrValue::Pair(..))))
        })
        .collect();

    for &idx in &pair_rows {
        let original_nid = table.nid_of(idx).unwrap_or_default().to_string();
        let new_right_idx = table.duplicate_row(idx, ids::new_uuid());

        let names: Vec<String> = table.field_names().map(str::to_string).collect();
        for name in &names {
            let Some(col) = table.column_mut(name) else { continue };
            if let AttrValue::Pair(l, r) = col[idx].clone() {
                col[idx] = AttrValue::Scalar(l);
                col[new_right_idx] = AttrValue::Scalar(r);
            }
        }

        let new_left_nid = ids::new_nid();
        let new_right_nid = ids::new_nid();
        if let Some(nid_col) = table.column_mut("nid") {
            nid_col[idx] = AttrValue::Scalar(Scalar::Str(new_left_nid.clone()));
            nid_col[new_right_idx] = AttrValue::Scalar(Scalar::Str(new_right_nid.clone()));
        }

        left_map.insert(original_nid.clone(), new_left_nid);
        right_map.insert(original_nid, new_right_nid);
    }

    (left_map, right_map)
}

/// Duplicates every `altnamlink` row referencing a split `strplaname`
/// row: the original row is repointed at the left side in place, a fresh
/// copy is repointed at the right side.
pub fn split_altnamlink(
    table: &mut Table,
    left_map: &HashMap<String, String>,
    right_map: &HashMap<String, String>,
) {
    let targets: Vec<usize> = (0..table.num_rows())
        .filter(|&i| {
            table
                .column("strnamenid")
                .and_then(|c| c.get(i))
                .and_then(AttrValue::scalar)
                .and_then(Scalar::as_str)
                .map(|s| left_map.contains_key(s))
                .unwrap_or(false)
        })
        .collect();

    for idx in targets {
        let original = table
            .column("strnamenid")
            .and_then(|c| c.get(idx))
            .and_then(AttrValue::scalar)
            .and_then(Scalar::as_str)
            .unwrap_or_default()
            .to_string();

        let new_idx = table.duplicate_row(idx, ids::new_uuid());

        if let Some(col) = table.column_mut("strnamenid") {
            col[idx] = AttrValue::Scalar(Scalar::Str(left_map[&original].clone()));
            col[new_idx] = AttrValue::Scalar(Scalar::Str(right_map[&original].clone()));
        }
        if let Some(col) = table.column_mut("nid") {
            col[idx] = AttrValue::Scalar(Scalar::Str(ids::new_nid()));
            col[new_idx] = AttrValue::Scalar(Scalar::Str(ids::new_nid()));
        }
        if let Some(col) = table.column_mut("credate") {
            col[new_idx] = AttrValue::Scalar(Scalar::Str(TODAY_PLACEHOLDER.to_string()));
        }
        if let Some(col) = table.column_mut("revdate") {
            col[new_idx] = AttrValue::Scalar(Scalar::Str(DEFAULT_DATE.to_string()));
        }
    }
}

/// Collapses `strplaname` rows that are identical across every column
/// except `nid`, keeping the first occurrence. Returns {removed nid →
/// survivor nid}.
pub fn dedupe_strplaname(table: &mut Table) -> HashMap<String, String> {
    let mut seen: HashMap<String, String> = HashMap::new();
    let mut removed_map = HashMap::new();
    let mut remove_idx = Vec::new();

    let mut names: Vec<String> = table.field_names().map(str::to_string).collect();
    names.sort();
    names.retain(|n| n != "nid");

    for i in 0..table.num_rows() {
        let key = row_key(table, &names, i);
        let nid = table.nid_of(i).unwrap_or_default().to_string();
        match seen.get(&key) {
            Some(survivor) => {
                removed_map.insert(nid, survivor.clone());
                remove_idx.push(i);
            }
            None => {
                seen.insert(key, nid);
            }
        }
    }

    table.remove_rows(remove_idx);
    removed_map
}

fn row_key(table: &Table, names: &[String], row: usize) -> String {
    names
        .iter()
        .map(|n| {
            table
                .column(n)
                .and_then(|c| c.get(row))
                .map(fmt_attr)
                .unwrap_or_default()
        })
        .collect::<Vec<_>>()
        .join("\u{1}")
}

fn fmt_attr(v: &AttrValue) -> String {
    match v {
        AttrValue::Scalar(s) => s.to_string(),
        AttrValue::Pair(l, r) => format!("{l}|{r}"),
    }
}

/// Rewrites every occurrence of a mapped nid in `column` to its new value.
pub fn rewrite_references(table: &mut Table, column: &str, map: &HashMap<String, String>) {
    if map.is_empty() {
        return;
    }
    let Some(col) = table.column_mut(column) else { return };
    for cell in col.iter_mut() {
        if let AttrValue::Scalar(Scalar::Str(s)) = cell {
            if let Some(new_nid) = map.get(s.as_str()) {
                *s = new_nid.clone();
            }
        }
    }
}

/// Recovers a missing current-vintage layer by copying it wholesale from
/// the previous vintage (§4.4, GLOSSARY "Recovery").
pub fn recover_missing(store: &mut TableStore, table_name: &'static str, previous: &TableStore) {
    if store.table(table_name).map(Table::num_rows).unwrap_or(0) > 0 {
        return;
    }
    if let Some(prev) = previous.table(table_name) {
        store.tables.insert(table_name, prev.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nrn_schema::table;

    fn new_table() -> Table {
        Table::new(table("strplaname").unwrap())
    }

    #[test]
    fn split_produces_two_rows_with_distinct_nids() {
        let mut t = new_table();
        let idx = t.push_default_row(ids::new_uuid());
        t.column_mut("namebody").unwrap()[idx] =
            AttrValue::Pair(Scalar::Str("Main".into()), Scalar::Str("First".into()));
        let original_nid = t.nid_of(idx).unwrap().to_string();
        t.column_mut("nid").unwrap()[idx] = AttrValue::Scalar(Scalar::Str(original_nid.clone()));

        let (left_map, right_map) = split_strplaname(&mut t);
        assert_eq!(t.num_rows(), 2);
        assert_ne!(t.nid_of(0).unwrap(), t.nid_of(1).unwrap());
        assert_eq!(left_map[&original_nid], t.nid_of(0).unwrap());
        assert_eq!(right_map[&original_nid], t.nid_of(1).unwrap());
    }

    #[test]
    fn dedupe_keeps_first_occurrence() {
        let mut t = new_table();
        let a = t.push_default_row(ids::new_uuid());
        t.column_mut("namebody").unwrap()[a] = AttrValue::Scalar(Scalar::Str("Main".into()));
        let b = t.duplicate_row(a, ids::new_uuid());
        t.column_mut("nid").unwrap()[b] = AttrValue::Scalar(Scalar::Str(ids::new_nid()));

        let removed_nid = t.nid_of(b).unwrap().to_string();
        let survivor_nid = t.nid_of(a).unwrap().to_string();
        let map = dedupe_strplaname(&mut t);
        assert_eq!(t.num_rows(), 1);
        assert_eq!(map[&removed_nid], survivor_nid);
    }
}
