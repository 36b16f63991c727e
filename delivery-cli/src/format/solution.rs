//! Specifies output format of optimization results.

#![allow(missing_docs)]

#[cfg(test)]
#[path = "../../tests/unit/format/solution_test.rs"]
mod solution_test;

use delivery_core::algorithms::graph::{PathResult, SimulationStep as CoreStep, StepKind};
use delivery_core::analysis::{EfficiencyReport, MethodComparison, MethodMetrics};
use delivery_core::models::{OptimizationResult, SequenceStatus};
use delivery_core::utils::GenericError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::{BufWriter, Write};

/// An optimization result.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    /// An id of the stored run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_id: Option<String>,
    /// Courier assignments.
    pub assignments: Vec<Assignment>,
    /// Aggregated metrics.
    pub metrics: Metrics,
    /// Sequenced clusters.
    pub clusters: Vec<Cluster>,
    /// Search steps per cluster id.
    pub traces: BTreeMap<usize, Vec<Step>>,
    /// Echoed parameters.
    pub parameters: Parameters,
    /// A comparison with baseline dispatch methods.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<Comparison>,
}

/// A courier assignment.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub courier_id: i64,
    pub courier_name: String,
    pub vehicle: String,
    pub cluster_id: usize,
    pub sequence: Vec<i64>,
    pub deliveries: usize,
    /// Distance in meters.
    pub distance: f64,
    pub time_minutes: f64,
    pub efficiency: f64,
}

/// Aggregated metrics.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub total_deliveries: usize,
    pub total_distance_km: f64,
    pub avg_efficiency: f64,
    pub total_time_minutes: f64,
    pub deliveries_per_hour: f64,
}

/// A sequenced cluster.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cluster {
    pub id: usize,
    /// Centroid as `[lat, lng]`.
    pub centroid: [f64; 2],
    pub orders: Vec<i64>,
    pub total_value: f64,
    pub radius_km: f64,
    pub density: f64,
    pub sequence: Vec<i64>,
    /// Distance in meters.
    pub distance: f64,
    /// One of `trivial`, `optimized` or `degraded`.
    pub status: String,
    /// A reason of degradation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// A frontier entry: `[node, g, f]`.
pub type OpenEntry = (i64, f64, f64);

/// A search step.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    /// One of `start`, `explore`, `done` or `noPath`.
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<i64>,
    pub open: Vec<OpenEntry>,
    pub closed: Vec<i64>,
    pub path: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<f64>,
}

/// Echoed run parameters.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_count: Option<usize>,
    pub max_deliveries_per_route: usize,
    pub total_orders: usize,
    pub total_couriers: usize,
}

/// Metrics of a dispatch method.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Method {
    pub total_deliveries: usize,
    pub total_distance_km: f64,
    pub total_time_minutes: f64,
    pub avg_efficiency: f64,
    pub deliveries_per_hour: f64,
    pub total_cost: f64,
    pub route_count: usize,
}

/// Improvements of the optimized method over a baseline.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Improvement {
    pub time_reduction_percent: f64,
    pub distance_reduction_percent: f64,
    pub efficiency_increase_percent: f64,
    pub deliveries_per_hour_increase_percent: f64,
    pub cost_reduction_percent: f64,
    pub saved_time_minutes: f64,
    pub saved_distance_km: f64,
    pub saved_cost: f64,
    pub improved_time: bool,
    pub improved_distance: bool,
    pub improved_cost: bool,
    pub improved_efficiency: bool,
}

/// A comparison with baseline dispatch methods.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    pub manual: Method,
    pub random: Method,
    pub optimized: Method,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vs_manual: Option<Improvement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vs_random: Option<Improvement>,
}

/// A shortest path query result.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub algorithm: String,
    pub from: i64,
    pub to: i64,
    /// Whether a path exists.
    pub found: bool,
    pub path: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<Step>>,
}

impl From<&CoreStep> for Step {
    fn from(step: &CoreStep) -> Self {
        let kind = match step.kind {
            StepKind::Start => "start",
            StepKind::Explore => "explore",
            StepKind::Done => "done",
            StepKind::NoPath => "noPath",
        };

        Self {
            kind: kind.to_string(),
            current: step.current,
            open: step.open.iter().map(|entry| (entry.node, entry.g, entry.f)).collect(),
            closed: step.closed.clone(),
            path: step.path.clone(),
            total_cost: step.total_cost,
        }
    }
}

impl From<&MethodMetrics> for Method {
    fn from(metrics: &MethodMetrics) -> Self {
        Self {
            total_deliveries: metrics.total_deliveries,
            total_distance_km: metrics.total_distance_km,
            total_time_minutes: metrics.total_time_minutes,
            avg_efficiency: metrics.avg_efficiency,
            deliveries_per_hour: metrics.deliveries_per_hour,
            total_cost: metrics.total_cost,
            route_count: metrics.route_count,
        }
    }
}

impl From<&MethodComparison> for Improvement {
    fn from(comparison: &MethodComparison) -> Self {
        Self {
            time_reduction_percent: comparison.time_reduction,
            distance_reduction_percent: comparison.distance_reduction,
            efficiency_increase_percent: comparison.efficiency_increase,
            deliveries_per_hour_increase_percent: comparison.deliveries_per_hour_increase,
            cost_reduction_percent: comparison.cost_reduction,
            saved_time_minutes: comparison.savings.time_minutes,
            saved_distance_km: comparison.savings.distance_km,
            saved_cost: comparison.savings.cost,
            improved_time: comparison.improved_time,
            improved_distance: comparison.improved_distance,
            improved_cost: comparison.improved_cost,
            improved_efficiency: comparison.improved_efficiency,
        }
    }
}

impl From<&EfficiencyReport> for Comparison {
    fn from(report: &EfficiencyReport) -> Self {
        Self {
            manual: (&report.manual).into(),
            random: (&report.random).into(),
            optimized: (&report.optimized).into(),
            vs_manual: report.vs_manual.as_ref().map(Into::into),
            vs_random: report.vs_random.as_ref().map(Into::into),
        }
    }
}

/// Creates a solution from optimization result.
pub fn create_solution(result: &OptimizationResult, report: Option<&EfficiencyReport>) -> Solution {
    Solution {
        run_id: None,
        assignments: result
            .assignments
            .iter()
            .map(|assignment| Assignment {
                courier_id: assignment.courier_id,
                courier_name: assignment.courier_name.clone(),
                vehicle: assignment.vehicle.clone(),
                cluster_id: assignment.cluster_id,
                sequence: assignment.sequence.clone(),
                deliveries: assignment.deliveries,
                distance: assignment.distance,
                time_minutes: assignment.time_minutes,
                efficiency: assignment.efficiency,
            })
            .collect(),
        metrics: Metrics {
            total_deliveries: result.metrics.total_deliveries,
            total_distance_km: result.metrics.total_distance_km,
            avg_efficiency: result.metrics.avg_efficiency,
            total_time_minutes: result.metrics.total_time_minutes,
            deliveries_per_hour: result.metrics.deliveries_per_hour,
        },
        clusters: result
            .clusters
            .iter()
            .map(|sequenced| {
                let (status, reason) = match &sequenced.status {
                    SequenceStatus::Trivial => ("trivial", None),
                    SequenceStatus::Optimized => ("optimized", None),
                    SequenceStatus::Degraded { reason } => ("degraded", Some(reason.clone())),
                };
                let cluster = &sequenced.cluster;

                Cluster {
                    id: cluster.id,
                    centroid: [cluster.centroid.lat, cluster.centroid.lon],
                    orders: cluster.order_ids(),
                    total_value: cluster.total_value,
                    radius_km: cluster.radius_km,
                    density: cluster.density,
                    sequence: sequenced.sequence.clone(),
                    distance: sequenced.distance,
                    status: status.to_string(),
                    reason,
                }
            })
            .collect(),
        traces: result
            .traces
            .iter()
            .map(|(cluster_id, steps)| (*cluster_id, steps.iter().map(Step::from).collect()))
            .collect(),
        parameters: Parameters {
            cluster_count: result.parameters.cluster_count,
            max_deliveries_per_route: result.parameters.max_deliveries_per_route,
            total_orders: result.parameters.total_orders,
            total_couriers: result.parameters.total_couriers,
        },
        comparison: report.map(Comparison::from),
    }
}

/// Creates a route from a shortest path search result.
pub fn create_route(
    algorithm: &str,
    from: i64,
    to: i64,
    result: Option<&PathResult>,
    steps: Option<&[CoreStep]>,
) -> Route {
    Route {
        algorithm: algorithm.to_string(),
        from,
        to,
        found: result.is_some(),
        path: result.map(|result| result.path.clone()).unwrap_or_default(),
        cost: result.map(|result| result.cost),
        steps: steps.map(|steps| steps.iter().map(Step::from).collect()),
    }
}

/// Serializes value as pretty json.
pub fn serialize_json<T: Serialize, W: Write>(writer: BufWriter<W>, value: &T) -> Result<(), GenericError> {
    serde_json::to_writer_pretty(writer, value).map_err(|err| format!("cannot serialize result: '{err}'").into())
}

/// Deserializes solution from json.
pub fn deserialize_solution<R: std::io::Read>(reader: std::io::BufReader<R>) -> Result<Solution, GenericError> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize solution: '{err}'").into())
}
