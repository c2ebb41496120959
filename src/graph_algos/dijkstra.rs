use crate::graph::Graph;
use super::{trace_path, GraphNodeMap, PathResult};

use std::{collections::BinaryHeap, cmp::Ordering, fmt::Debug};
use log::{debug, trace};
use num_traits::Zero;
use indexmap::map::Entry::{Occupied, Vacant};



/// Identify the shortest path between two nodes using Dijkstra's Algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
///
/// Returns None when either node is unknown or `end` cannot be reached from `start`.
/// Equally distant nodes are settled in graph node order, so among several equally
/// short paths the result is always the same one.
pub fn shortest_path<C>(graph: &Graph<C>, start: &str, end: &str) -> Option<PathResult<C>>
where
    C: Zero + PartialOrd + Copy + Debug,
{
    let (Some(start_index), Some(end_index)) = (graph.node_index(start), graph.node_index(end)) else {
        debug!("no route {start} -> {end}: unknown node");
        return None;
    };

    // Build the search map - terminates when the end node is reached
    let search = build_dijkstra_graph(graph, start_index, end_index);

    let Some(goal_index) = search.goal_index else {
        debug!("no route {start} -> {end} after settling {} nodes", search.settled.len());
        return None;
    };

    let path = trace_path(&search.node_map, goal_index)?;
    let &(_, total_distance) = search.node_map.get_index(goal_index)?.1;

    let result = PathResult {
        path: node_names(graph, &path)?,
        total_distance,
        settled: node_names(graph, &search.settled)?,
    };
    debug!("route {start} -> {end}: {:?} ({:?})", result.path, result.total_distance);

    Some(result)
}


/// Nodes reached by the search, keyed by graph node index
struct DijkstraSearch<C> {
    node_map: GraphNodeMap<usize, C>,
    settled: Vec<usize>,
    goal_index: Option<usize>, // index of the end node in node_map
}

/// Traverses the graph from `start` until `end` is the cheapest unsettled node
/// Nodes absent from the node map were never reached (infinite distance)
fn build_dijkstra_graph<C>(graph: &Graph<C>, start: usize, end: usize) -> DijkstraSearch<C>
where
    C: Zero + PartialOrd + Copy + Debug,
{
    // Nodes to visit - binary heap pops the cheapest node first, ties to the lowest node
    let mut nodes_to_visit: BinaryHeap<NodeId<C>> = BinaryHeap::new();

    // The tuple contains (parent_index, cost) where parent_index is the index of the parent node in the map
    // for the start node, parent_index is set to usize::MAX to indicate it has no parent
    let mut node_map: GraphNodeMap<usize, C> = GraphNodeMap::default();
    node_map.insert(start, (usize::MAX, Zero::zero()));
    nodes_to_visit.push(NodeId {
        node: start,
        cost: Zero::zero(),
    });

    let mut is_settled = vec![false; graph.len()];
    let mut settled = Vec::new();

    while let Some(NodeId { node, cost }) = nodes_to_visit.pop() {

        // fetch current best cost for node
        let Some((index, _, &(_, c))) = node_map.get_full(&node) else {
            continue;
        };

        // Stale queue entry, the node was settled or a cheaper path was found since
        if is_settled[node] || cost > c {
            continue;
        }

        // The end node's distance is final once it is the cheapest candidate
        if node == end {
            return DijkstraSearch {
                node_map,
                settled,
                goal_index: Some(index),
            };
        }

        is_settled[node] = true;
        settled.push(node);
        trace!("settled node {node} at {c:?}");

        for (neighbor, edge_cost) in graph.neighbor_indices(node) {
            if is_settled[neighbor] {
                continue;
            }

            let new_cost = c + edge_cost;

            match node_map.entry(neighbor) {
                Vacant(e) => {
                    // This is the first time we're seeing this neighbor
                    e.insert((index, new_cost));
                }
                Occupied(mut e) => {
                    if new_cost < e.get().1 {
                        // We've found a better path to this neighbor
                        e.insert((index, new_cost));
                    } else {
                        continue;
                    }
                }
            }

            nodes_to_visit.push(NodeId {
                node: neighbor,
                cost: new_cost,
            });
        }
    }

    DijkstraSearch {
        node_map,
        settled,
        goal_index: None,
    }
}

fn node_names<C>(graph: &Graph<C>, indices: &[usize]) -> Option<Vec<String>> {
    indices
        .iter()
        .map(|&i| graph.node_at(i).map(str::to_string))
        .collect()
}


/// Queue entry: graph node index and the cost it was queued with
/// Cheaper entries come first, equal costs fall back to the lower node index
#[derive(Debug)]
struct NodeId<T> {
    node: usize,
    cost: T,
}

impl<T: PartialOrd> Ord for NodeId<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.node.cmp(&self.node))
    }
}
impl<T: PartialOrd> PartialOrd for NodeId<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T: PartialOrd> PartialEq for NodeId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl<T: PartialOrd> Eq for NodeId<T> {}
