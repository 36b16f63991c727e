//! Contains functionality to find shortest paths between locations.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/route/route_test.rs"]
mod route_test;

use crate::format::solution::{Route, create_route};
use delivery_core::algorithms::graph::*;
use delivery_core::models::{DeliveryProblem, LocationId};
use delivery_core::solver::create_complete_graph;
use delivery_core::utils::{GenericError, GenericResult};
use std::borrow::Cow;
use std::str::FromStr;

/// Specifies shortest path search algorithm.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SearchAlgorithm {
    /// A* search guided by great-circle distance.
    AStar,
    /// Dijkstra search.
    Dijkstra,
}

impl FromStr for SearchAlgorithm {
    type Err = GenericError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "astar" => Ok(Self::AStar),
            "dijkstra" => Ok(Self::Dijkstra),
            _ => Err(format!("unknown search algorithm: '{value}'").into()),
        }
    }
}

impl SearchAlgorithm {
    /// Returns algorithm name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AStar => "astar",
            Self::Dijkstra => "dijkstra",
        }
    }
}

/// A shortest path query.
#[derive(Clone, Debug)]
pub struct RouteQuery {
    /// An origin location.
    pub from: LocationId,
    /// A destination location.
    pub to: LocationId,
    /// Search algorithm.
    pub algorithm: SearchAlgorithm,
    /// Max node expansions of a traced search, no tracing when not set.
    pub trace_limit: Option<usize>,
}

/// Finds shortest path between two locations of the problem. When the problem has no travel graph,
/// a complete graph over its locations is used.
pub fn find_route(problem: &DeliveryProblem, query: &RouteQuery) -> GenericResult<Route> {
    if query.trace_limit.is_some() && query.algorithm != SearchAlgorithm::AStar {
        return Err("search tracing is supported only for astar".into());
    }

    let graph = match problem.graph.as_ref() {
        Some(graph) => Cow::Borrowed(graph),
        None => Cow::Owned(create_complete_graph(&problem.locations)),
    };
    let graph = graph.as_ref();
    let heuristic = geo_heuristic(&problem.locations);

    let result = match query.algorithm {
        SearchAlgorithm::AStar => find_path_astar(graph, query.from, query.to, &heuristic),
        SearchAlgorithm::Dijkstra => find_path_dijkstra(graph, query.from, query.to),
    };

    let steps = query.trace_limit.map(|limit| trace_astar(graph, query.from, query.to, &heuristic, limit));

    Ok(create_route(query.algorithm.name(), query.from, query.to, result.as_ref(), steps.as_deref()))
}
