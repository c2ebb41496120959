pub mod dijkstra;
pub mod alternative;
mod trace;

use trace::trace_path;

use crate::collections::FxIndexMap;

/// Type alias for the node map built during a search
/// N: Node - space on a graph
/// C: Cost of reaching the node from the start
/// The tuple contains (parent_index, cost) where:
/// - parent_index is the index of the parent node in the map
/// - cost is the best known cost to reach this node from the start
/// Nodes missing from the map have not been reached
pub(crate) type GraphNodeMap<N, C> = FxIndexMap<N, (usize, C)>;


/// Outcome of a route query
#[derive(Clone, Debug, PartialEq)]
pub struct PathResult<C> {
    /// Nodes from start to end, both included
    pub path: Vec<String>,
    /// Sum of edge weights along `path`
    pub total_distance: C,
    /// Nodes in the order their distance became final
    /// The end node is not recorded, the search stops when it is reached
    pub settled: Vec<String>,
}

impl<C> PathResult<C> {

    /// Consecutive node pairs of the path
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        path_edges(&self.path)
    }

    /// True if the path travels the undirected edge `a - b`
    pub fn uses_edge(&self, a: &str, b: &str) -> bool {
        self.edges().any(|(u, v)| (u == a && v == b) || (u == b && v == a))
    }

    pub fn visits(&self, node: &str) -> bool {
        self.path.iter().any(|n| n == node)
    }

    /// Number of edges travelled
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Consecutive pairs of a node sequence
pub fn path_edges<S: AsRef<str>>(path: &[S]) -> impl Iterator<Item = (&str, &str)> {
    path.windows(2).map(|pair| (pair[0].as_ref(), pair[1].as_ref()))
}
