//! Optimizer configuration.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/config_test.rs"]
mod config_test;

use delivery_core::solver::OptimizerConfigBuilder;
use delivery_core::utils::Environment;
use serde::Deserialize;
use std::io::{BufReader, Read};
use std::sync::Arc;

/// An optimizer configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    /// Specifies clustering configuration.
    pub clustering: Option<ClusteringConfig>,
    /// Specifies routing configuration.
    pub routing: Option<RoutingConfig>,
    /// Specifies telemetry configuration.
    pub telemetry: Option<TelemetryConfig>,
}

/// A clustering configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusteringConfig {
    /// An explicit amount of clusters. Default is estimated from amount of orders.
    pub cluster_count: Option<usize>,
    /// Max amount of clusters. Default is 8.
    pub max_clusters: Option<usize>,
    /// Amount of iterations. Default is 10.
    pub iterations: Option<usize>,
    /// A seed to select initial centroids. Default is 42.
    pub seed: Option<u64>,
}

/// A routing configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutingConfig {
    /// Deliveries per fully efficient route. Default is 5.
    pub max_deliveries_per_route: Option<usize>,
    /// Average speed, meters per minute. Default is 333.
    pub speed: Option<f64>,
    /// Service time per delivery, minutes. Default is 8.
    pub service_time: Option<f64>,
    /// Max node expansions of a traced search. Default is 1000.
    pub trace_limit: Option<usize>,
}

/// A telemetry configuration.
#[derive(Clone, Debug, Deserialize)]
pub struct TelemetryConfig {
    /// Specifies logging configuration.
    pub logging: Option<LoggingConfig>,
}

/// A logging configuration.
#[derive(Clone, Debug, Deserialize)]
pub struct LoggingConfig {
    /// Specifies whether logging is enabled. Default is false.
    pub enabled: bool,
    /// Prefix of logging messages.
    pub prefix: Option<String>,
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> Result<Config, String> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'"))
}

/// Creates optimizer config builder from config.
pub fn create_builder_from_config(config: &Config) -> OptimizerConfigBuilder {
    let mut builder = OptimizerConfigBuilder::default();

    if let Some(clustering) = &config.clustering {
        builder = builder.with_cluster_count(clustering.cluster_count);

        if let Some(max_clusters) = clustering.max_clusters {
            builder = builder.with_max_clusters(max_clusters);
        }

        if let Some(iterations) = clustering.iterations {
            builder = builder.with_clustering_iterations(iterations);
        }

        if let Some(seed) = clustering.seed {
            builder = builder.with_clustering_seed(seed);
        }
    }

    if let Some(routing) = &config.routing {
        if let Some(max_deliveries) = routing.max_deliveries_per_route {
            builder = builder.with_max_deliveries_per_route(max_deliveries);
        }

        if let Some(speed) = routing.speed {
            builder = builder.with_speed(speed);
        }

        if let Some(service_time) = routing.service_time {
            builder = builder.with_service_time(service_time);
        }

        if let Some(trace_limit) = routing.trace_limit {
            builder = builder.with_trace_expansion_limit(trace_limit);
        }
    }

    builder
}

/// Creates optimizer config builder from config file.
pub fn create_builder_from_config_file<R: Read>(reader: BufReader<R>) -> Result<OptimizerConfigBuilder, String> {
    read_config(reader).map(|config| create_builder_from_config(&config))
}

/// Creates an environment with logging configured as specified.
pub fn create_environment(config: &Config) -> Environment {
    match config.telemetry.as_ref().and_then(|telemetry| telemetry.logging.as_ref()) {
        Some(LoggingConfig { enabled: true, prefix }) => {
            let prefix = prefix.clone().unwrap_or_default();
            Environment::new(Arc::new(move |msg: &str| eprintln!("{prefix}{msg}")))
        }
        _ => Environment::new_silent(),
    }
}
