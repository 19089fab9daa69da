//! S6 NID Reconciliation (§4.6, §8 scenario 7): preserves stable `nid`
//! values across vintages for geometrically unchanged rows.

use std::collections::HashMap;

use crate::ids;
use crate::store::{Geometry, Table};
use crate::value::{AttrValue, Scalar};

#[derive(Debug, Clone)]
pub struct ReconcileReport {
    pub added: Vec<String>,
    pub deleted_or_changed: Vec<String>,
}

/// Matches `current`'s rows against `previous`'s by exact post-rounding
/// geometry equality (canonical WKB byte-string keys, §4.6 Notes),
/// copying forward the previous `nid` on a match and minting a fresh one
/// otherwise.
pub fn reconcile(current: &mut Table, previous: &Table) -> ReconcileReport {
    let mut previous_by_wkb: HashMap<Vec<u8>, String> = HashMap::new();
    let mut matched_previous: std::collections::HashSet<String> = std::collections::HashSet::new();

    if let Some(prev_geoms) = previous.geometry.as_ref() {
        for (i, geom) in prev_geoms.iter().enumerate() {
            if let (Some(g), Some(nid)) = (geom, previous.nid_of(i)) {
                previous_by_wkb.insert(g.to_wkb(), nid.to_string());
            }
        }
    }

    let mut added = Vec::new();

    if let Some(cur_geoms) = current.geometry.clone() {
        for i in 0..current.num_rows() {
            let Some(geom) = cur_geoms.get(i).and_then(Option::as_ref) else { continue };
            match previous_by_wkb.get(&geom.to_wkb()) {
                Some(prev_nid) => {
                    current.column_mut("nid").unwrap()[i] = AttrValue::Scalar(Scalar::Str(prev_nid.clone()));
                    matched_previous.insert(prev_nid.clone());
                }
                None => {
                    let fresh = ids::new_nid();
                    current.column_mut("nid").unwrap()[i] = AttrValue::Scalar(Scalar::Str(fresh.clone()));
                    added.push(fresh);
                }
            }
        }
    }

    let deleted_or_changed: Vec<String> = previous_by_wkb
        .values()
        .filter(|nid| !matched_previous.contains(*nid))
        .cloned()
        .collect();

    ReconcileReport { added, deleted_or_changed }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::LineString;
    use nrn_schema::table;

    fn line_table(lines: Vec<LineString<f64>>) -> Table {
        let mut t = Table::new(table("roadseg").unwrap());
        for ls in lines {
            let idx = t.push_default_row(ids::new_uuid());
            t.column_mut("nid").unwrap()[idx] = AttrValue::Scalar(Scalar::Str(ids::new_nid()));
            t.geometry.as_mut().unwrap()[idx] = Some(Geometry::LineString(ls));
        }
        t
    }

    #[test]
    fn exact_geometry_match_preserves_previous_nid() {
        let ls = LineString::from(vec![(-66.0, 45.0), (-66.1, 45.0)]);
        let previous = line_table(vec![ls.clone()]);
        let previous_nid = previous.nid_of(0).unwrap().to_string();

        let mut current = line_table(vec![ls]);
        let report = reconcile(&mut current, &previous);

        assert_eq!(current.nid_of(0).unwrap(), previous_nid);
        assert!(report.added.is_empty());
        assert!(report.deleted_or_changed.is_empty());
    }

    #[test]
    fn rounding_difference_mints_fresh_nid_and_marks_previous_deleted() {
        let a = LineString::from(vec![(-66.0, 45.0), (-66.1, 45.0)]);
        let b = LineString::from(vec![(-66.0, 45.0), (-66.1000001, 45.0)]);
        let previous = line_table(vec![a]);
        let previous_nid = previous.nid_of(0).unwrap().to_string();

        let mut current = line_table(vec![b]);
        let report = reconcile(&mut current, &previous);

        assert_ne!(current.nid_of(0).unwrap(), previous_nid);
        assert_eq!(report.added.len(), 1);
        assert_eq!(report.deleted_or_changed, vec![previous_nid]);
    }
}
