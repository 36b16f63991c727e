#[cfg(test)]
#[path = "../../tests/unit/solver/config_test.rs"]
mod config_test;

use crate::algorithms::clustering::{DEFAULT_ITERATIONS, DEFAULT_MAX_CLUSTERS, DEFAULT_SEED, GeoClusterer};
use crate::algorithms::graph::DEFAULT_EXPANSION_LIMIT;
use crate::utils::{Float, GenericError, GenericResult};

/// Specifies optimizer parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct OptimizerConfig {
    /// An explicit amount of clusters. When not set, it is estimated from amount of orders.
    pub cluster_count: Option<usize>,
    /// An upper bound on amount of clusters, both explicit and estimated.
    pub max_clusters: usize,
    /// Amount of clustering iterations.
    pub clustering_iterations: usize,
    /// A seed used to select initial centroids.
    pub clustering_seed: u64,
    /// Max amount of node expansions recorded per search trace.
    pub trace_expansion_limit: usize,
    /// Amount of deliveries which makes a route fully efficient.
    pub max_deliveries_per_route: usize,
    /// Average courier speed, meters per minute.
    pub speed: Float,
    /// Time spent at every delivery, minutes.
    pub service_time: Float,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            cluster_count: None,
            max_clusters: DEFAULT_MAX_CLUSTERS,
            clustering_iterations: DEFAULT_ITERATIONS,
            clustering_seed: DEFAULT_SEED,
            trace_expansion_limit: DEFAULT_EXPANSION_LIMIT,
            max_deliveries_per_route: 5,
            speed: 333.,
            service_time: 8.,
        }
    }
}

impl OptimizerConfig {
    /// Creates a clusterer configured with clustering parameters.
    pub fn create_clusterer(&self) -> GeoClusterer {
        GeoClusterer::new(self.cluster_count, self.max_clusters)
            .with_iterations(self.clustering_iterations)
            .with_seed(self.clustering_seed)
    }
}

/// Provides configurable way to build optimizer config.
#[derive(Default)]
pub struct OptimizerConfigBuilder {
    config: OptimizerConfig,
}

impl OptimizerConfigBuilder {
    /// Sets explicit amount of clusters.
    /// Default is None.
    pub fn with_cluster_count(mut self, cluster_count: Option<usize>) -> Self {
        self.config.cluster_count = cluster_count;
        self
    }

    /// Sets max amount of clusters.
    /// Default is 8.
    pub fn with_max_clusters(mut self, max_clusters: usize) -> Self {
        self.config.max_clusters = max_clusters;
        self
    }

    /// Sets amount of clustering iterations.
    /// Default is 10.
    pub fn with_clustering_iterations(mut self, iterations: usize) -> Self {
        self.config.clustering_iterations = iterations;
        self
    }

    /// Sets clustering seed.
    /// Default is 42.
    pub fn with_clustering_seed(mut self, seed: u64) -> Self {
        self.config.clustering_seed = seed;
        self
    }

    /// Sets expansion limit of search traces.
    /// Default is 1000.
    pub fn with_trace_expansion_limit(mut self, limit: usize) -> Self {
        self.config.trace_expansion_limit = limit;
        self
    }

    /// Sets max deliveries per route.
    /// Default is 5.
    pub fn with_max_deliveries_per_route(mut self, max_deliveries: usize) -> Self {
        self.config.max_deliveries_per_route = max_deliveries;
        self
    }

    /// Sets average speed in meters per minute.
    /// Default is 333.
    pub fn with_speed(mut self, speed: Float) -> Self {
        self.config.speed = speed;
        self
    }

    /// Sets service time per delivery in minutes.
    /// Default is 8.
    pub fn with_service_time(mut self, service_time: Float) -> Self {
        self.config.service_time = service_time;
        self
    }

    /// Builds and validates optimizer config.
    pub fn build(self) -> GenericResult<OptimizerConfig> {
        let config = self.config;

        let errors = [
            (config.cluster_count == Some(0), "cluster count should be positive"),
            (config.max_clusters == 0, "max clusters should be positive"),
            (config.clustering_iterations == 0, "clustering iterations should be positive"),
            (config.max_deliveries_per_route == 0, "max deliveries per route should be positive"),
            (!(config.speed.is_finite() && config.speed > 0.), "speed should be a positive number"),
            (!(config.service_time.is_finite() && config.service_time >= 0.), "service time should not be negative"),
        ]
        .into_iter()
        .filter(|(is_invalid, _)| *is_invalid)
        .map(|(_, msg)| GenericError::from(msg))
        .collect::<Vec<_>>();

        if errors.is_empty() { Ok(config) } else { Err(GenericError::join_many(&errors, ", ").into()) }
    }
}
