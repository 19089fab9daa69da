//! Planar graph construction and junction classification over road and
//! ferry line networks.
//!
//! Lines are reduced to their endpoints (the "graph-degree" model: interior
//! vertices never become junctions, only the first/last coordinate of each
//! line matters for connectivity) and folded into a directed multigraph with
//! parallel-edge deduplication matching the source system's graph library:
//! adding a line between the same ordered endpoint pair twice updates the
//! existing edge's attributes rather than increasing degree, but the reverse
//! direction between the same pair counts as a second edge.

mod classify;
mod graph;

pub use classify::{build_junctions, AttributeSource, Junction, JunctionType};
pub use graph::{EdgeId, Graph, NodeId, NodeKey};
