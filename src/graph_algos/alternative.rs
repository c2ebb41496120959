use crate::graph::Graph;
use super::{dijkstra::shortest_path, path_edges, PathResult};

use std::fmt::Debug;
use log::debug;
use num_traits::Zero;


/// Find a route that differs from `primary` in at least one edge
///
/// Each edge of the primary path is removed in turn from a private copy of the graph
/// and the shortest path is searched again. The cheapest of these searches wins; on equal
/// distance the one for the earlier primary edge is kept.
///
/// This is not a true second-shortest path search: only routes avoiding one edge of the
/// primary path are considered. Returns None when no search reaches `end`.
pub fn alternative_path<C, S>(graph: &Graph<C>, start: &str, end: &str, primary: &[S]) -> Option<PathResult<C>>
where
    C: Zero + PartialOrd + Copy + Debug,
    S: AsRef<str>,
{
    let mut best: Option<PathResult<C>> = None;

    for (from, to) in path_edges(primary) {
        let trimmed_graph = graph.without_edge(from, to);

        let Some(candidate) = shortest_path(&trimmed_graph, start, end) else {
            debug!("without {from} - {to}: no route");
            continue;
        };
        debug!("without {from} - {to}: {:?}", candidate.total_distance);

        if best.as_ref().is_none_or(|b| candidate.total_distance < b.total_distance) {
            best = Some(candidate);
        }
    }

    best
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Edge;

    fn edges(list: &[(&str, &str, u32)]) -> Vec<Edge<u32>> {
        list.iter().map(|&(from, to, distance)| Edge::new(from, to, distance)).collect()
    }

    // Diamond-shaped graph: A - B - D and A - C - D
    fn create_test_graph() -> Graph<u32> {
        Graph::build(&edges(&[
            ("A", "B", 1),
            ("A", "C", 3),
            ("B", "D", 5),
            ("C", "D", 1),
        ]))
    }

    #[test]
    fn test_alternative_diamond() {
        let graph = create_test_graph();
        let primary = shortest_path(&graph, "A", "D").unwrap();
        let alternative = alternative_path(&graph, "A", "D", &primary.path).unwrap();

        assert_eq!(alternative.path, vec!["A", "B", "D"]);
        assert_eq!(alternative.total_distance, 6);
    }

    #[test]
    fn test_alternative_sindh_subset() {
        let graph = Graph::build(&edges(&[
            ("KHI", "TTA", 100),
            ("KHI", "HYD", 160),
            ("KHI", "JMS", 155),
            ("HYD", "JMS", 15),
            ("HYD", "MPK", 75),
            ("HYD", "NWS", 120),
            ("JMS", "DDU", 140),
            ("DDU", "LKN", 105),
            ("LKN", "SKZ", 60),
        ]));
        let primary = shortest_path(&graph, "KHI", "SKZ").unwrap();
        let alternative = alternative_path(&graph, "KHI", "SKZ", &primary.path).unwrap();

        // Only removing KHI - JMS leaves SKZ reachable
        assert_eq!(alternative.path, vec!["KHI", "HYD", "JMS", "DDU", "LKN", "SKZ"]);
        assert_eq!(alternative.total_distance, 480);
        assert!(alternative.total_distance >= primary.total_distance);
    }

    #[test]
    fn test_alternative_differs_from_primary() {
        let graph = create_test_graph();
        let primary = shortest_path(&graph, "D", "A").unwrap();
        let alternative = alternative_path(&graph, "D", "A", &primary.path).unwrap();

        assert!(primary.edges().any(|(u, v)| !alternative.uses_edge(u, v)));
        assert!(alternative.total_distance >= primary.total_distance);
    }

    #[test]
    fn test_alternative_first_minimum_wins() {
        // Removing A - B or B - D each leaves two routes of cost 4: via C and via E
        let graph = Graph::build(&edges(&[
            ("A", "B", 1),
            ("B", "D", 1),
            ("A", "C", 2),
            ("C", "D", 2),
            ("A", "E", 2),
            ("E", "D", 2),
        ]));
        let primary = shortest_path(&graph, "A", "D").unwrap();
        assert_eq!(primary.path, vec!["A", "B", "D"]);

        let alternative = alternative_path(&graph, "A", "D", &primary.path).unwrap();
        assert_eq!(alternative.path, vec!["A", "C", "D"]);
        assert_eq!(alternative.total_distance, 4);
    }

    #[test]
    fn test_alternative_cheaper_later_removal_replaces_earlier() {
        // Without A - B: A - C - D = 10, without B - D: A - B - E - D = 4
        let graph = Graph::build(&edges(&[
            ("A", "B", 1),
            ("B", "D", 1),
            ("A", "C", 5),
            ("C", "D", 5),
            ("B", "E", 1),
            ("E", "D", 2),
        ]));
        let primary = shortest_path(&graph, "A", "D").unwrap();
        let alternative = alternative_path(&graph, "A", "D", &primary.path).unwrap();

        assert_eq!(alternative.path, vec!["A", "B", "E", "D"]);
        assert_eq!(alternative.total_distance, 4);
    }

    #[test]
    fn test_alternative_none_when_every_removal_disconnects() {
        let graph = Graph::build(&edges(&[("A", "B", 1), ("B", "C", 1)]));
        let primary = shortest_path(&graph, "A", "C").unwrap();

        assert_eq!(alternative_path(&graph, "A", "C", &primary.path), None);
    }

    #[test]
    fn test_alternative_single_node_primary() {
        let graph = create_test_graph();
        assert_eq!(alternative_path(&graph, "A", "A", &["A"]), None);

        let empty: [&str; 0] = [];
        assert_eq!(alternative_path(&graph, "A", "D", &empty), None);
    }

    #[test]
    fn test_alternative_does_not_mutate_graph() {
        let graph = create_test_graph();
        let before = graph.clone();
        let primary = shortest_path(&graph, "A", "D").unwrap();

        alternative_path(&graph, "A", "D", &primary.path);

        assert_eq!(graph, before);
        assert_eq!(shortest_path(&graph, "A", "D"), Some(primary));
    }
}
