use crate::algorithms::graph::SimulationStep;
use crate::models::{Coordinate, CourierId, Order, OrderId};
use crate::utils::Float;
use std::collections::BTreeMap;

/// A geographically coherent group of orders.
#[derive(Clone, Debug)]
pub struct Cluster {
    /// A cluster id.
    pub id: usize,
    /// A mean position of cluster members.
    pub centroid: Coordinate,
    /// Member orders.
    pub orders: Vec<Order>,
    /// Total monetary value of member orders.
    pub total_value: Float,
    /// Max distance from centroid to a member, in km.
    pub radius_km: Float,
    /// Amount of members per km of radius.
    pub density: Float,
}

impl Cluster {
    /// Returns ids of member orders.
    pub fn order_ids(&self) -> Vec<OrderId> {
        self.orders.iter().map(|order| order.id).collect()
    }
}

/// Specifies how the delivery sequence of a cluster was obtained.
#[derive(Clone, Debug, PartialEq)]
pub enum SequenceStatus {
    /// Cluster has at most one order, nothing to sequence.
    Trivial,
    /// Sequence is built using shortest path search.
    Optimized,
    /// Sequencing failed, orders are kept in their original order with zero distance.
    Degraded {
        /// A failure reason.
        reason: String,
    },
}

/// A cluster with its delivery sequence.
#[derive(Clone, Debug)]
pub struct SequencedCluster {
    /// An original cluster.
    pub cluster: Cluster,
    /// Ordered order ids.
    pub sequence: Vec<OrderId>,
    /// Route distance in meters: depot, all orders in sequence and back to depot.
    pub distance: Float,
    /// A sequencing status.
    pub status: SequenceStatus,
}

impl SequencedCluster {
    /// Checks whether cluster sequencing has degraded.
    pub fn is_degraded(&self) -> bool {
        matches!(self.status, SequenceStatus::Degraded { .. })
    }
}

/// Binds a sequenced cluster to a courier.
#[derive(Clone, Debug)]
pub struct Assignment {
    /// A courier id.
    pub courier_id: CourierId,
    /// A courier name.
    pub courier_name: String,
    /// A courier vehicle.
    pub vehicle: String,
    /// An assigned cluster id.
    pub cluster_id: usize,
    /// Orders in delivery sequence.
    pub sequence: Vec<OrderId>,
    /// Amount of deliveries.
    pub deliveries: usize,
    /// Route distance in meters.
    pub distance: Float,
    /// Estimated route duration in minutes.
    pub time_minutes: Float,
    /// Route efficiency in [0, 1] range.
    pub efficiency: Float,
}

/// Aggregated metrics of an optimization run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Metrics {
    /// Total amount of deliveries.
    pub total_deliveries: usize,
    /// Total distance in km.
    pub total_distance_km: Float,
    /// Mean efficiency of assignments.
    pub avg_efficiency: Float,
    /// Total estimated time in minutes.
    pub total_time_minutes: Float,
    /// Deliveries per hour.
    pub deliveries_per_hour: Float,
}

/// Parameters of the run echoed back to the caller.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EchoedParameters {
    /// An explicitly requested amount of clusters.
    pub cluster_count: Option<usize>,
    /// Max deliveries per route.
    pub max_deliveries_per_route: usize,
    /// Total amount of orders given.
    pub total_orders: usize,
    /// Total amount of couriers given.
    pub total_couriers: usize,
}

/// A result of an optimization run.
#[derive(Clone, Debug)]
pub struct OptimizationResult {
    /// Courier assignments.
    pub assignments: Vec<Assignment>,
    /// Aggregated metrics.
    pub metrics: Metrics,
    /// Sequenced clusters.
    pub clusters: Vec<SequencedCluster>,
    /// Search traces per cluster id, consumed by visualization only.
    pub traces: BTreeMap<usize, Vec<SimulationStep>>,
    /// Echoed run parameters.
    pub parameters: EchoedParameters,
}

impl OptimizationResult {
    /// Returns clusters which failed to be sequenced.
    pub fn degraded_clusters(&self) -> impl Iterator<Item = &SequencedCluster> + '_ {
        self.clusters.iter().filter(|cluster| cluster.is_degraded())
    }
}
