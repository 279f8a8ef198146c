use crate::graph::route::RouteGraph;
use crate::graph::types::Neighbor;

/// Trait for providing graph adjacency to path-finding algorithms
pub trait GraphProvider {
    /// Adjacency list for `id`; empty for unknown points
    fn neighbors(&self, id: &str) -> &[Neighbor];
    fn contains(&self, id: &str) -> bool;
}

impl GraphProvider for RouteGraph {
    fn neighbors(&self, id: &str) -> &[Neighbor] {
        RouteGraph::neighbors(self, id)
    }

    fn contains(&self, id: &str) -> bool {
        RouteGraph::contains(self, id)
    }
}
