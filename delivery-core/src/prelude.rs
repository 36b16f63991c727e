//! This module reimports commonly used types.

pub use crate::algorithms::clustering::GeoClusterer;
pub use crate::algorithms::geo::haversine_distance;
pub use crate::algorithms::graph::{
    Graph, GraphBuilder, PathResult, SimulationStep, StepKind, build_graph, find_path_astar, find_path_dijkstra,
    geo_heuristic, trace_astar,
};

pub use crate::models::*;

pub use crate::solver::{OptimizerConfig, OptimizerConfigBuilder, RouteOptimizer};

pub use crate::utils::{DefaultRandom, Environment, Float, GenericError, GenericResult, InfoLogger, Random};
