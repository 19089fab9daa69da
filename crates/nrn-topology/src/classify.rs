use geo::{Contains, Coord, Point, Polygon};

use crate::graph::{Graph, NodeId, NodeKey};

/// Classification assigned to a junction node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JunctionType {
    Intersection,
    DeadEnd,
    Ferry,
    NatProvTer,
}

/// Lets the classifier pull attributes off an edge's payload without this
/// crate knowing anything about the row format upstream of it. Both
/// accessors return `None` for whatever that source considers "no value",
/// which already absorbs the source's own unset sentinels.
pub trait AttributeSource {
    fn exitnbr(&self) -> Option<&str>;
    fn accuracy(&self) -> Option<i32>;
}

#[derive(Clone, Debug)]
pub struct Junction {
    pub point: Coord<f64>,
    pub junction_type: JunctionType,
    pub exitnbr: Option<String>,
    pub accuracy: Option<i32>,
}

const JUNCTION_MIN_DEGREE: usize = 3;

/// Builds the classified junction set for a road network, promoting ferry
/// terminal nodes and reclassifying anything outside the admin boundary to
/// `NatProvTer`.
///
/// `ferry_endpoints` are keys from a separately-built ferry graph (or any
/// source of ferry terminal coordinates); nodes absent from `road_graph`
/// are added as ferry-only junctions with no edge attributes to draw from.
pub fn build_junctions<A: AttributeSource>(
    road_graph: &Graph<A>,
    ferry_endpoints: impl IntoIterator<Item = NodeKey>,
    admin_boundary: &Polygon<f64>,
) -> Vec<Junction> {
    let mut junction_type = vec![None; road_graph.nodes.len()];

    for node_id in road_graph.node_ids() {
        let degree = road_graph.degree(node_id);
        junction_type[node_id.0] = if degree >= JUNCTION_MIN_DEGREE {
            Some(JunctionType::Intersection)
        } else if degree == 1 {
            Some(JunctionType::DeadEnd)
        } else {
            None
        };
    }

    let mut ferry_only = Vec::new();
    for key in ferry_endpoints {
        match road_graph.find_node(key) {
            Some(id) => junction_type[id.0] = Some(JunctionType::Ferry),
            None => ferry_only.push(key),
        }
    }

    let mut junctions = Vec::new();

    for node_id in road_graph.node_ids() {
        let Some(jt) = junction_type[node_id.0] else {
            continue;
        };
        let node = road_graph.node(node_id);
        let exitnbr = first_attr(road_graph, node_id, |a| a.exitnbr().map(str::to_owned));
        let accuracy = first_attr(road_graph, node_id, |a| a.accuracy());
        junctions.push(Junction {
            point: node.key.to_coord(),
            junction_type: jt,
            exitnbr,
            accuracy,
        });
    }

    for key in ferry_only {
        junctions.push(Junction {
            point: key.to_coord(),
            junction_type: JunctionType::Ferry,
            exitnbr: None,
            accuracy: None,
        });
    }

    for junction in &mut junctions {
        if !admin_boundary.contains(&Point::from(junction.point)) {
            junction.junction_type = JunctionType::NatProvTer;
        }
    }

    junctions
}

/// First non-`None` value of `extract` across `node`'s incident edges, in
/// incidence order (insertion order of the underlying line features).
fn first_attr<A, T>(
    graph: &Graph<A>,
    node: NodeId,
    extract: impl Fn(&A) -> Option<T>,
) -> Option<T> {
    graph
        .incident_edges(node)
        .find_map(|edge| extract(&edge.attrs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{Coord, LineString, Polygon};

    #[derive(Clone, Debug)]
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

    fn blank() -> RowAttrs {
        RowAttrs {
            exitnbr: None,
            accuracy: None,
        }
    }

    fn pt(x: f64, y: f64) -> Coord<f64> {
        Coord { x, y }
    }

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
    fn three_way_meet_is_an_intersection() {
        let mut g = Graph::new();
        let center = pt(0.0, 0.0);
        g.add_line(pt(-1.0, 0.0), center, blank());
        g.add_line(center, pt(1.0, 0.0), blank());
        g.add_line(center, pt(0.0, 1.0), blank());

        let junctions = build_junctions(&g, [], &world_boundary());
        let center_junction = junctions
            .iter()
            .find(|j| j.point == center)
            .expect("center node present");
        assert_eq!(center_junction.junction_type, JunctionType::Intersection);
    }

    #[test]
    fn single_connection_is_a_dead_end() {
        let mut g = Graph::new();
        let tip = pt(5.0, 5.0);
        g.add_line(pt(0.0, 0.0), tip, blank());

        let junctions = build_junctions(&g, [], &world_boundary());
        let tip_junction = junctions.iter().find(|j| j.point == tip).unwrap();
        assert_eq!(tip_junction.junction_type, JunctionType::DeadEnd);
    }

    #[test]
    fn degree_two_passthrough_is_not_a_junction() {
        let mut g = Graph::new();
        let mid = pt(1.0, 0.0);
        g.add_line(pt(0.0, 0.0), mid, blank());
        g.add_line(mid, pt(2.0, 0.0), blank());

        let junctions = build_junctions(&g, [], &world_boundary());
        assert!(junctions.iter().all(|j| j.point != mid));
    }

    #[test]
    fn self_loop_counts_degree_two_and_is_not_a_junction() {
        let mut g = Graph::new();
        let node = pt(3.0, 3.0);
        g.add_line(node, node, blank());

        assert_eq!(g.degree(g.find_node(NodeKey::from_coord(node)).unwrap()), 2);
        let junctions = build_junctions(&g, [], &world_boundary());
        assert!(junctions.iter().all(|j| j.point != node));
    }

    #[test]
    fn repeated_same_direction_edge_does_not_raise_degree() {
        let mut g = Graph::new();
        let a = pt(0.0, 0.0);
        let b = pt(1.0, 0.0);
        g.add_line(a, b, blank());
        g.add_line(a, b, blank());

        let id = g.find_node(NodeKey::from_coord(a)).unwrap();
        assert_eq!(g.degree(id), 1);
    }

    #[test]
    fn ferry_node_already_in_road_graph_is_promoted() {
        let mut g = Graph::new();
        let dock = pt(0.0, 0.0);
        g.add_line(dock, pt(1.0, 0.0), blank());

        let junctions = build_junctions(
            &g,
            [NodeKey::from_coord(dock)],
            &world_boundary(),
        );
        let dock_junction = junctions.iter().find(|j| j.point == dock).unwrap();
        assert_eq!(dock_junction.junction_type, JunctionType::Ferry);
    }

    #[test]
    fn ferry_node_absent_from_road_graph_is_added_standalone() {
        let g: Graph<RowAttrs> = Graph::new();
        let island = pt(9.0, 9.0);

        let junctions = build_junctions(&g, [NodeKey::from_coord(island)], &world_boundary());
        assert_eq!(junctions.len(), 1);
        assert_eq!(junctions[0].junction_type, JunctionType::Ferry);
        assert!(junctions[0].exitnbr.is_none());
    }

    #[test]
    fn node_outside_admin_boundary_becomes_nat_prov_ter() {
        let mut g = Graph::new();
        let outside = pt(50.0, 50.0);
        g.add_line(outside, pt(51.0, 50.0), blank());
        g.add_line(outside, pt(50.0, 51.0), blank());
        g.add_line(outside, pt(49.0, 50.0), blank());

        let tiny_boundary = Polygon::new(
            LineString::from(vec![(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0), (-1.0, -1.0)]),
            vec![],
        );

        let junctions = build_junctions(&g, [], &tiny_boundary);
        let j = junctions.iter().find(|j| j.point == outside).unwrap();
        assert_eq!(j.junction_type, JunctionType::NatProvTer);
    }

    #[test]
    fn exitnbr_takes_first_non_sentinel_incident_value() {
        let mut g = Graph::new();
        let center = pt(0.0, 0.0);
        g.add_line(
            pt(-1.0, 0.0),
            center,
            RowAttrs {
                exitnbr: Some("None".to_string()),
                accuracy: None,
            },
        );
        g.add_line(
            center,
            pt(1.0, 0.0),
            RowAttrs {
                exitnbr: Some("42".to_string()),
                accuracy: Some(3),
            },
        );
        g.add_line(center, pt(0.0, 1.0), blank());

        let junctions = build_junctions(&g, [], &world_boundary());
        let j = junctions.iter().find(|j| j.point == center).unwrap();
        assert_eq!(j.exitnbr.as_deref(), Some("42"));
        assert_eq!(j.accuracy, Some(3));
    }
}
