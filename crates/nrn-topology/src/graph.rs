use std::fmt;

use ahash::AHashMap;
use geo::Coord;

/// Integer-quantized node identity. Coordinates entering this crate are
/// already rounded to 7 decimal places, so scaling by 1e7 and truncating
/// gives exact equality without float comparison pitfalls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeKey(pub i64, pub i64);

impl NodeKey {
    pub fn from_coord(c: Coord<f64>) -> Self {
        NodeKey((c.x * 1e7).round() as i64, (c.y * 1e7).round() as i64)
    }

    pub fn to_coord(self) -> Coord<f64> {
        Coord {
            x: self.0 as f64 / 1e7,
            y: self.1 as f64 / 1e7,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub usize);

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "EdgeId({})", self.0)
    }
}

#[derive(Clone, Debug)]
pub struct Node {
    pub key: NodeKey,
    /// Edges incident on this node. A self-loop appears twice (once per
    /// endpoint role), which is what gives it degree 2.
    pub incident: Vec<EdgeId>,
}

#[derive(Clone, Debug)]
pub struct Edge<A> {
    pub from: NodeId,
    pub to: NodeId,
    pub attrs: A,
}

/// A directed multigraph over quantized point identity, built from line
/// endpoints. Generic over an attribute payload `A` carried by each edge
/// (the original feature's row, or a projection of it).
#[derive(Clone, Debug)]
pub struct Graph<A> {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge<A>>,
    node_index: AHashMap<NodeKey, NodeId>,
    directed_index: AHashMap<(NodeId, NodeId), EdgeId>,
}

impl<A> Default for Graph<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Graph<A> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            node_index: AHashMap::default(),
            directed_index: AHashMap::default(),
        }
    }

    pub fn degree(&self, node: NodeId) -> usize {
        self.nodes[node.0].incident.len()
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn edge(&self, id: EdgeId) -> &Edge<A> {
        &self.edges[id.0]
    }

    pub fn find_node(&self, key: NodeKey) -> Option<NodeId> {
        self.node_index.get(&key).copied()
    }

    pub fn has_node(&self, key: NodeKey) -> bool {
        self.node_index.contains_key(&key)
    }

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    /// Edges incident on `node`, regardless of direction.
    pub fn incident_edges(&self, node: NodeId) -> impl Iterator<Item = &Edge<A>> + '_ {
        self.node(node).incident.iter().map(move |&e| self.edge(e))
    }

    fn get_or_insert_node(&mut self, key: NodeKey) -> NodeId {
        if let Some(&id) = self.node_index.get(&key) {
            return id;
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            key,
            incident: Vec::new(),
        });
        self.node_index.insert(key, id);
        id
    }

    /// Registers a node with no edges, for ferry endpoints that land
    /// outside the road network entirely.
    pub fn ensure_node(&mut self, key: NodeKey) -> NodeId {
        self.get_or_insert_node(key)
    }

    /// Adds a directed edge from `from` to `to`. A second call with the
    /// same ordered pair overwrites the existing edge's attributes in
    /// place rather than creating a parallel edge, matching the source
    /// digraph's `add_edge` semantics. The reverse-ordered pair is a
    /// distinct edge.
    pub fn add_line(&mut self, from: Coord<f64>, to: Coord<f64>, attrs: A) {
        let from_id = self.get_or_insert_node(NodeKey::from_coord(from));
        let to_id = self.get_or_insert_node(NodeKey::from_coord(to));

        if let Some(&existing) = self.directed_index.get(&(from_id, to_id)) {
            self.edges[existing.0].attrs = attrs;
            return;
        }

        let edge_id = EdgeId(self.edges.len());
        self.edges.push(Edge {
            from: from_id,
            to: to_id,
            attrs,
        });
        self.directed_index.insert((from_id, to_id), edge_id);
        self.nodes[from_id.0].incident.push(edge_id);
        self.nodes[to_id.0].incident.push(edge_id);
    }
}

/// Splits a line or multiline geometry into its constituent endpoint pairs
/// under the graph-degree model: only a linestring's first and last
/// coordinate matter, interior vertices are discarded.
pub fn line_endpoints(geom: &geo::Geometry<f64>) -> Vec<(Coord<f64>, Coord<f64>)> {
    match geom {
        geo::Geometry::LineString(ls) => endpoints_of(ls).into_iter().collect(),
        geo::Geometry::MultiLineString(mls) => {
            mls.iter().filter_map(endpoints_of).collect()
        }
        _ => Vec::new(),
    }
}

fn endpoints_of(ls: &geo::LineString<f64>) -> Option<(Coord<f64>, Coord<f64>)> {
    let first = *ls.0.first()?;
    let last = *ls.0.last()?;
    Some((first, last))
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{Geometry, LineString, MultiLineString};

    #[test]
    fn node_key_survives_round_trip_at_seven_decimals() {
        let c = Coord {
            x: -63.1234567,
            y: 44.7654321,
        };
        let key = NodeKey::from_coord(c);
        let back = key.to_coord();
        assert!((back.x - c.x).abs() < 1e-9);
        assert!((back.y - c.y).abs() < 1e-9);
    }

    #[test]
    fn multilinestring_flattens_to_one_pair_per_part() {
        let mls = MultiLineString::new(vec![
            LineString::from(vec![(0.0, 0.0), (1.0, 1.0)]),
            LineString::from(vec![(2.0, 2.0), (3.0, 3.0), (4.0, 4.0)]),
        ]);
        let pairs = line_endpoints(&Geometry::MultiLineString(mls));
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[1], (Coord { x: 2.0, y: 2.0 }, Coord { x: 4.0, y: 4.0 }));
    }

    #[test]
    fn repeated_opposite_direction_edge_is_a_distinct_edge() {
        let mut g: Graph<()> = Graph::new();
        let a = Coord { x: 0.0, y: 0.0 };
        let b = Coord { x: 1.0, y: 0.0 };
        g.add_line(a, b, ());
        g.add_line(b, a, ());

        let a_id = g.find_node(NodeKey::from_coord(a)).unwrap();
        assert_eq!(g.degree(a_id), 2);
        assert_eq!(g.edges.len(), 2);
    }
}
