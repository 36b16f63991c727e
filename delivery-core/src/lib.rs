//! A core crate of the delivery route optimizer.
//!
//! # Overview
//!
//! The optimizer takes pending orders bound to geographic delivery points, a travel graph and a pool of
//! couriers, and produces a set of courier routes:
//!
//! - orders are grouped into geographically coherent clusters with a fixed-iteration k-means
//!   (see [`GeoClusterer`](algorithms::clustering::GeoClusterer))
//! - within each cluster, orders are sequenced greedily starting from the depot: the next stop is the one
//!   with the cheapest A* path from the current position
//!   (see [`ClusterSequencer`](solver::ClusterSequencer))
//! - sequenced clusters are assigned to couriers in round-robin fashion and metrics are aggregated
//!   (see [`RouteOptimizer`](solver::RouteOptimizer))
//!
//! Additionally, every A* search used to pick a hop is replayed with a step recorder
//! ([`trace_astar`](algorithms::graph::trace_astar)) so that a visualization layer can show how
//! the search progressed.
//!
//! A run is a pure function of its inputs: no state is shared between optimizer calls, so separate problems
//! can be solved on separate threads.
//!
//! # Examples
//!
//! ```
//! use delivery_core::prelude::*;
//!
//! let locations = Locations::new(vec![
//!     Location::new(1, 52.52, 13.40, LocationKind::Depot),
//!     Location::new(2, 52.53, 13.41, LocationKind::Delivery),
//!     Location::new(3, 52.51, 13.39, LocationKind::Delivery),
//!     Location::new(4, 52.50, 13.42, LocationKind::Delivery),
//! ]);
//! let orders = vec![Order::new(1, 2, 30.), Order::new(2, 3, 45.), Order::new(3, 4, 12.)];
//! let couriers = vec![Courier::new(1, "Ana", "bike"), Courier::new(2, "Bruno", "motorcycle")];
//!
//! let problem = DeliveryProblem::new(locations, orders, couriers);
//! let optimizer = RouteOptimizer::new(OptimizerConfig::default(), Environment::new_silent());
//!
//! let result = optimizer.optimize(&problem)?;
//!
//! assert_eq!(result.metrics.total_deliveries, 3);
//! # Ok::<(), GenericError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod algorithms;
pub mod analysis;
pub mod models;
pub mod prelude;
pub mod solver;
pub mod storage;
pub mod utils;
