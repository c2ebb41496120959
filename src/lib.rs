//! Shortest and alternative routes over a small, static, weighted road network
//!
//! The graph is built once from an edge list. Route queries never mutate it, the
//! alternative search works on private copies with one edge of the primary route removed.

pub mod annotate;
pub mod catalog;
pub mod errors;
pub mod graph;
pub mod graph_algos;
pub mod planner;
mod collections;

pub use graph::{Edge, Graph};
pub use graph_algos::{alternative::alternative_path, dijkstra::shortest_path, PathResult};
pub use planner::{RoutePlan, RoutePlanner};
