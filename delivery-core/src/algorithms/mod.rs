//! This module contains the algorithms used to cluster, route and sequence deliveries.

pub mod clustering;
pub mod geo;
pub mod graph;
