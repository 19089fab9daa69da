//! S1 Ingest (§2, §4.5 inputs): reproject each source layer to EPSG:4617,
//! round coordinates to 7 decimals, and assign fresh row UUIDs.

use std::collections::HashMap;

use anyhow::Result;

use crate::ids;
use crate::reader::{RawGeometry, RawTable};
use crate::reproject::Reprojector;
use crate::store::Geometry;
use crate::value::Scalar;

/// A reprojected, rounded, UUID-tagged source layer, ready for S2's
/// field-mapping engine.
#[derive(Clone, Debug)]
pub struct IngestedSource {
    pub uuid: Vec<String>,
    pub columns: HashMap<String, Vec<Scalar>>,
    pub geometry: Option<Vec<Option<Geometry>>>,
}

impl IngestedSource {
    pub fn num_rows(&self) -> usize {
        self.uuid.len()
    }

    pub fn row(&self, index: usize) -> HashMap<String, Scalar> {
        self.columns
            .iter()
            .map(|(name, col)| (name.clone(), col.get(index).cloned().unwrap_or(Scalar::Null)))
            .collect()
    }
}

pub fn ingest(raw: &RawTable, source_epsg: i32) -> Result<IngestedSource> {
    let num_rows = raw.num_rows();
    let uuid = (0..num_rows).map(|_| ids::new_uuid()).collect();

    let geometry = match &raw.geometry {
        None => None,
        Some(raw_geoms) => {
            let reproj = Reprojector::new(source_epsg)?;
            Some(
                raw_geoms
                    .iter()
                    .map(|g| {
                        g.as_ref().map(|g| {
                            let reprojected = match g {
                                RawGeometry::Point(p) => Geometry::Point(reproj.point(p)),
                                RawGeometry::LineString(ls) => {
                                    Geometry::LineString(reproj.linestring(ls))
                                }
                            };
                            reprojected.round7()
                        })
                    })
                    .collect(),
            )
        }
    };

    Ok(IngestedSource {
        uuid,
        columns: raw.columns.clone(),
        geometry,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Point;

    #[test]
    fn ingest_assigns_one_uuid_per_row_and_rounds_geometry() {
        let mut columns = HashMap::new();
        columns.insert("NAME".to_string(), vec![Scalar::Str("A".into()), Scalar::Str("B".into())]);
        let raw = RawTable {
            columns,
            geometry: Some(vec![
                Some(RawGeometry::Point(Point::new(-75.123456789, 45.987654321))),
                None,
            ]),
        };
        let out = ingest(&raw, crate::reproject::NRN_EPSG).unwrap();
        assert_eq!(out.num_rows(), 2);
        assert_eq!(out.uuid.len(), 2);
        assert_ne!(out.uuid[0], out.uuid[1]);
        let geom = out.geometry.unwrap();
        let p = geom[0].as_ref().unwrap().as_point().unwrap();
        assert_eq!(p.x(), (-75.123456789_f64 * 1e7).round() / 1e7);
        assert!(geom[1].is_none());
    }
}
