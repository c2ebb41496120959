use crate::catalog::{sindh_connections, Catalog};
use crate::errors::{Result, RouteError};
use crate::graph::{Edge, Graph};
use crate::graph_algos::{alternative::alternative_path, dijkstra::shortest_path, PathResult};

use std::fmt::Debug;
use num_traits::Zero;


/// Primary route and, when one exists, an alternative avoiding one of its edges
#[derive(Clone, Debug, PartialEq)]
pub struct RoutePlan<C> {
    pub primary: PathResult<C>,
    pub alternative: Option<PathResult<C>>,
}

impl<C> RoutePlan<C> {

    /// True if the primary route travels the undirected edge `a - b`
    pub fn uses_edge(&self, a: &str, b: &str) -> bool {
        self.primary.uses_edge(a, b)
    }

    pub fn uses_alternative_edge(&self, a: &str, b: &str) -> bool {
        self.alternative.as_ref().is_some_and(|alt| alt.uses_edge(a, b))
    }
}


/// Road network built once from static data, queried for routes
pub struct RoutePlanner<C> {
    graph: Graph<C>,
    catalog: Catalog,
}

impl RoutePlanner<u32> {

    /// Planner over the built-in Sindh network
    pub fn sindh() -> Self {
        Self::new(&sindh_connections(), Catalog::sindh())
    }
}

impl<C> RoutePlanner<C>
where
    C: Zero + PartialOrd + Copy + Debug,
{

    pub fn new(edges: &[Edge<C>], catalog: Catalog) -> Self {
        Self {
            graph: Graph::build(edges),
            catalog,
        }
    }

    pub fn graph(&self) -> &Graph<C> {
        &self.graph
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Compute the shortest route and the best alternative between two nodes
    /// Returns None when `end` cannot be reached from `start`
    pub fn plan(&self, start: &str, end: &str) -> Option<RoutePlan<C>> {
        let primary = shortest_path(&self.graph, start, end)?;
        let alternative = alternative_path(&self.graph, start, end, &primary.path);

        Some(RoutePlan { primary, alternative })
    }

    /// Shortest route only, no alternative search
    pub fn plan_primary(&self, start: &str, end: &str) -> Option<RoutePlan<C>> {
        let primary = shortest_path(&self.graph, start, end)?;
        Some(RoutePlan { primary, alternative: None })
    }

    /// Map a node identifier or catalog city name to a node of the network
    pub fn resolve(&self, query: &str) -> Result<String> {
        if self.graph.contains(query) {
            return Ok(query.to_string());
        }

        match self.catalog.resolve(query) {
            Some(city) if self.graph.contains(&city.id) => Ok(city.id.clone()),
            _ => Err(RouteError::UnknownLocation(query.to_string())),
        }
    }

    /// Display names for a sequence of node identifiers
    pub fn display_names<S: AsRef<str>>(&self, path: &[S]) -> Vec<String> {
        path.iter()
            .map(|id| self.catalog.name_of(id.as_ref()).to_string())
            .collect()
    }
}
