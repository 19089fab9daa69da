//! S5 Topology (§4.5): builds the road+ferry planar graph and emits the
//! classified junction set into the `junction` table.

use geo::Polygon;
use nrn_topology::{build_junctions, AttributeSource, Graph, JunctionType, NodeKey};

use crate::ids;
use crate::store::{Geometry, Table, TableStore};
use crate::value::{AttrValue, Scalar};

const SPEC_VERSION: f64 = 2.0;

/// Projection of one `roadseg`/`ferryseg` row's attributes the classifier
/// needs, read once per row rather than re-walking the table per lookup.
struct RowAttrs {
    exitnbr: Option<String>,
    accuracy: Option<i32>,
}

impl AttributeSource for RowAttrs {
    fn exitnbr(&self) -> Option<&str> {
        self.exitnbr.as_deref().filter(|v| *v != "None")
    }

    fn accuracy(&self) -> Option<i32> {
        self.accuracy
    }
}

fn row_attrs(table: &Table, row: usize) -> RowAttrs {
    let exitnbr = table
        .column("exitnbr")
        .and_then(|c| c.get(row))
        .and_then(AttrValue::scalar)
        .and_then(Scalar::as_str)
        .map(str::to_string);
    let accuracy = table
        .column("accuracy")
        .and_then(|c| c.get(row))
        .and_then(AttrValue::scalar)
        .and_then(Scalar::as_int)
        .map(|v| v as i32);
    RowAttrs { exitnbr, accuracy }
}

fn build_graph(table: &Table) -> Graph<RowAttrs> {
    let mut graph = Graph::new();
    let Some(geoms) = table.geometry.as_ref() else { return graph };
    for (i, geom) in geoms.iter().enumerate() {
        let Some(Geometry::LineString(ls)) = geom else { continue };
        let (Some(&from), Some(&to)) = (ls.0.first(), ls.0.last()) else { continue };
        graph.add_line(from, to, row_attrs(table, i));
    }
    graph
}

fn ferry_endpoint_keys(table: Option<&Table>) -> Vec<NodeKey> {
    let Some(table) = table else { return Vec::new() };
    let Some(geoms) = table.geometry.as_ref() else { return Vec::new() };
    geoms
        .iter()
        .filter_map(|g| match g {
            Some(Geometry::LineString(ls)) => ls.0.first().copied(),
            _ => None,
        })
        .map(NodeKey::from_coord)
        .chain(geoms.iter().filter_map(|g| match g {
            Some(Geometry::LineString(ls)) => ls.0.last().copied(),
            _ => None,
        }).map(NodeKey::from_coord))
        .collect()
}

/// Builds `G_road`/`G_ferry`, classifies every qualifying node, and
/// appends one row per classified junction to the `junction` table.
pub fn build_junction_table(store: &mut TableStore, admin_boundary: &Polygon<f64>, today: &str) {
    let road_graph = match store.table("roadseg") {
        Some(t) => build_graph(t),
        None => Graph::new(),
    };
    let ferry_endpoints = ferry_endpoint_keys(store.table("ferryseg"));

    let junctions = build_junctions(&road_graph, ferry_endpoints, admin_boundary);

    let table = store.table_mut("junction").expect("junction is a canonical table");
    for j in junctions {
        let idx = table.push_default_row(ids::new_uuid());
        if let Some(geom) = table.geometry.as_mut() {
            geom[idx] = Some(Geometry::Point(geo::Point::from(j.point)));
        }
        table.column_mut("nid").unwrap()[idx] = AttrValue::Scalar(Scalar::Str(ids::new_nid()));
        let junctype_label = match j.junction_type {
            JunctionType::Intersection => "Intersection",
            JunctionType::DeadEnd => "Dead End",
            JunctionType::Ferry => "Ferry",
            JunctionType::NatProvTer => "NatProvTer",
        };
        // Junction rows are synthesized after S4's domain pass already ran,
        // so they carry the resolved code directly rather than a label S4
        // would otherwise remap.
        let junctype_code = nrn_schema::domains::JUNCTYPE
            .code_for(nrn_schema::Lang::En, junctype_label)
            .unwrap_or(-1);
        table.column_mut("junctype").unwrap()[idx] = AttrValue::Scalar(Scalar::Int(junctype_code as i64));
        table.column_mut("exitnbr").unwrap()[idx] = AttrValue::Scalar(
            j.exitnbr.map(Scalar::Str).unwrap_or_else(|| Scalar::Str("None".to_string())),
        );
        table.column_mut("accuracy").unwrap()[idx] =
            AttrValue::Scalar(Scalar::Int(j.accuracy.unwrap_or(-1) as i64));
        table.column_mut("acqtech").unwrap()[idx] = AttrValue::Scalar(Scalar::Str("Computed".to_string()));
        table.column_mut("metacover").unwrap()[idx] = AttrValue::Scalar(Scalar::Str("Complete".to_string()));
        table.column_mut("specvers").unwrap()[idx] = AttrValue::Scalar(Scalar::Real(SPEC_VERSION));
        table.column_mut("credate").unwrap()[idx] = AttrValue::Scalar(Scalar::Str(today.to_string()));
        table.column_mut("provider").unwrap()[idx] = AttrValue::Scalar(Scalar::Str("Federal".to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::LineString;

    fn world_boundary() -> Polygon<f64> {
        Polygon::new(
            LineString::from(vec![
                (-180.0, -90.0),
                (180.0, -90.0),
                (180.0, 90.0),
                (-180.0, 90.0),
                (-180.0, -90.0),
            ]),
            vec![],
        )
    }

    #[test]
    fn three_road_rows_meeting_at_a_point_emit_one_intersection() {
        let mut store = TableStore::empty();
        let table = store.table_mut("roadseg").unwrap();
        for (from, to) in [
            ((-66.0, 45.0), (-66.1, 45.0)),
            ((-66.0, 45.0), (-66.0, 45.1)),
            ((-66.0, 45.0), (-65.9, 45.0)),
        ] {
            let idx = table.push_default_row(ids::new_uuid());
            table.geometry.as_mut().unwrap()[idx] = Some(Geometry::LineString(LineString::from(vec![from, to])));
        }

        build_junction_table(&mut store, &world_boundary(), "20260101");

        let junction = store.table("junction").unwrap();
        assert_eq!(junction.num_rows(), 1);
        let intersection_code = nrn_schema::domains::JUNCTYPE
            .code_for(nrn_schema::Lang::En, "Intersection")
            .unwrap();
        assert_eq!(
            junction.column("junctype").unwrap()[0],
            AttrValue::Scalar(Scalar::Int(intersection_code as i64))
        );
    }
}
