mod loader;

pub use loader::{load_edges, read_edges};

use crate::collections::FxIndexMap;

use std::fmt::Debug;
use log::debug;
use num_traits::Zero;
use serde::Deserialize;


/// Undirected weighted connection between two locations
/// The same distance applies in both directions
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Edge<C> {
    pub from: String,
    pub to: String,
    pub distance: C,
}

impl<C> Edge<C> {
    pub fn new(from: impl Into<String>, to: impl Into<String>, distance: C) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            distance,
        }
    }
}


/// Adjacency structure: node -> (neighbor -> edge weight)
///
/// Nodes are kept in order of first appearance in the edge list. That order is the
/// node index used to break ties between equally distant nodes during a search.
/// Every edge is stored in both directions.
#[derive(Clone, Debug, PartialEq)]
pub struct Graph<C> {
    adjacency: FxIndexMap<String, FxIndexMap<String, C>>,
}

impl<C> Default for Graph<C> {
    fn default() -> Self {
        Self {
            adjacency: FxIndexMap::default(),
        }
    }
}

impl<C: Copy + Debug> Graph<C> {

    /// Build the adjacency structure from a flat list of undirected edges
    /// Duplicate edges between the same pair overwrite the earlier weight
    pub fn build(edges: &[Edge<C>]) -> Self {
        let mut graph = Self::default();

        for edge in edges {
            graph.insert_directed(&edge.from, &edge.to, edge.distance);
            graph.insert_directed(&edge.to, &edge.from, edge.distance);
        }

        debug!("built graph with {} nodes from {} edges", graph.len(), edges.len());
        graph
    }

    fn insert_directed(&mut self, from: &str, to: &str, distance: C) {
        match self.adjacency.get_mut(from) {
            Some(neighbors) => {
                neighbors.insert(to.to_string(), distance);
            }
            None => {
                let mut neighbors = FxIndexMap::default();
                neighbors.insert(to.to_string(), distance);
                self.adjacency.insert(from.to_string(), neighbors);
            }
        }
    }

    /// Copy of the graph with both directions of the edge `a - b` removed
    /// Node indices are unchanged, nodes left without neighbors stay in the graph
    pub fn without_edge(&self, a: &str, b: &str) -> Self {
        let mut graph = self.clone();
        if let Some(neighbors) = graph.adjacency.get_mut(a) {
            neighbors.shift_remove(b);
        }
        if let Some(neighbors) = graph.adjacency.get_mut(b) {
            neighbors.shift_remove(a);
        }
        graph
    }

    /// Weight of the edge from `from` to `to`, if the edge exists
    pub fn weight(&self, from: &str, to: &str) -> Option<C> {
        self.adjacency.get(from)?.get(to).copied()
    }

    /// Neighbors of a node with their edge weights, empty for unknown nodes
    pub fn neighbors<'a>(&'a self, node: &str) -> impl Iterator<Item = (&'a str, C)> + use<'a, C> {
        self.adjacency
            .get(node)
            .into_iter()
            .flat_map(|neighbors| neighbors.iter().map(|(n, &w)| (n.as_str(), w)))
    }

    /// Neighbors of the node at `index`, as (node index, edge weight)
    pub(crate) fn neighbor_indices(&self, index: usize) -> impl Iterator<Item = (usize, C)> + '_ {
        self.adjacency
            .get_index(index)
            .into_iter()
            .flat_map(move |(_, neighbors)| {
                neighbors
                    .iter()
                    .filter_map(move |(n, &w)| self.adjacency.get_index_of(n).map(|i| (i, w)))
            })
    }

    /// Sum of edge weights along `path`
    /// Returns None when two consecutive nodes are not connected
    pub fn path_distance<S: AsRef<str>>(&self, path: &[S]) -> Option<C>
    where
        C: Zero,
    {
        path.windows(2).try_fold(C::zero(), |total, pair| {
            self.weight(pair[0].as_ref(), pair[1].as_ref()).map(|w| total + w)
        })
    }
}

impl<C> Graph<C> {

    pub fn contains(&self, node: &str) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Position of the node in first-appearance order
    pub fn node_index(&self, node: &str) -> Option<usize> {
        self.adjacency.get_index_of(node)
    }

    pub fn node_at(&self, index: usize) -> Option<&str> {
        self.adjacency.get_index(index).map(|(node, _)| node.as_str())
    }

    /// All nodes in first-appearance order
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn sample_edges() -> Vec<Edge<u32>> {
        vec![
            Edge::new("KHI", "TTA", 100),
            Edge::new("KHI", "HYD", 160),
            Edge::new("KHI", "JMS", 155),
            Edge::new("HYD", "JMS", 15),
            Edge::new("HYD", "MPK", 75),
        ]
    }

    #[test]
    fn test_build_is_symmetric() {
        let edges = sample_edges();
        let graph = Graph::build(&edges);

        for edge in &edges {
            assert_eq!(graph.weight(&edge.from, &edge.to), Some(edge.distance));
            assert_eq!(graph.weight(&edge.to, &edge.from), Some(edge.distance));
        }
        assert_eq!(graph.weight("TTA", "HYD"), None);
    }

    #[test]
    fn test_build_orders_nodes_by_first_appearance() {
        let graph = Graph::build(&sample_edges());

        let nodes: Vec<_> = graph.nodes().collect();
        assert_eq!(nodes, vec!["KHI", "TTA", "HYD", "JMS", "MPK"]);
        assert_eq!(graph.node_index("JMS"), Some(3));
        assert_eq!(graph.node_at(4), Some("MPK"));
        assert_eq!(graph.node_index("SKZ"), None);
    }

    #[test]
    fn test_build_duplicate_edge_last_write_wins() {
        let edges = vec![
            Edge::new("A", "B", 5),
            Edge::new("A", "B", 3),
        ];
        let graph = Graph::build(&edges);

        assert_eq!(graph.weight("A", "B"), Some(3));
        assert_eq!(graph.weight("B", "A"), Some(3));
        assert_eq!(graph.neighbors("A").count(), 1);
    }

    #[test]
    fn test_build_self_loop() {
        let graph = Graph::build(&[Edge::new("A", "A", 2), Edge::new("A", "B", 1)]);

        assert_eq!(graph.weight("A", "A"), Some(2));
        assert_eq!(graph.len(), 2);
    }

    #[test]
    fn test_build_is_idempotent() {
        let edges = sample_edges();
        assert_eq!(Graph::build(&edges), Graph::build(&edges));
    }

    #[test]
    fn test_empty_graph() {
        let graph: Graph<u32> = Graph::build(&[]);
        assert!(graph.is_empty());
        assert_eq!(graph.neighbors("KHI").count(), 0);
    }

    #[test]
    fn test_without_edge_leaves_original_untouched() {
        let graph = Graph::build(&sample_edges());
        let trimmed = graph.without_edge("HYD", "JMS");

        assert_eq!(trimmed.weight("HYD", "JMS"), None);
        assert_eq!(trimmed.weight("JMS", "HYD"), None);
        assert_eq!(trimmed.weight("KHI", "JMS"), Some(155));
        assert_eq!(trimmed.node_index("MPK"), graph.node_index("MPK"));

        assert_eq!(graph.weight("HYD", "JMS"), Some(15));
        assert_eq!(graph, Graph::build(&sample_edges()));
    }

    #[test]
    fn test_neighbor_indices() {
        let graph = Graph::build(&sample_edges());
        let hyd = graph.node_index("HYD").unwrap();

        let neighbors: Vec<_> = graph.neighbor_indices(hyd).collect();
        assert_eq!(neighbors, vec![(0, 160), (3, 15), (4, 75)]);
    }

    #[test]
    fn test_path_distance() {
        let graph = Graph::build(&sample_edges());

        assert_eq!(graph.path_distance(&["KHI", "HYD", "JMS"]), Some(175));
        assert_eq!(graph.path_distance(&["KHI"]), Some(0));
        assert_eq!(graph.path_distance(&["TTA", "HYD"]), None);
    }
}
