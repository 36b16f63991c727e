#[cfg(test)]
#[path = "../../tests/unit/solver/assignment_test.rs"]
mod assignment_test;

use crate::models::{Assignment, Courier, SequencedCluster};
use crate::solver::OptimizerConfig;
use crate::utils::Float;

/// Gets estimated route duration in minutes: travel time at average speed plus service time of every delivery.
pub fn get_route_duration(distance: Float, deliveries: usize, config: &OptimizerConfig) -> Float {
    distance / config.speed + deliveries as Float * config.service_time
}

/// Gets route efficiency as a share of route capacity used, capped by one.
pub fn get_route_efficiency(deliveries: usize, config: &OptimizerConfig) -> Float {
    (deliveries as Float / config.max_deliveries_per_route.max(1) as Float).min(1.)
}

/// Assigns clusters to available couriers in round-robin fashion: couriers are sorted by id and
/// cluster `i` goes to courier `i mod courier_count`. Returns no assignments when there is no available courier.
pub fn assign_couriers(clusters: &[SequencedCluster], couriers: &[Courier], config: &OptimizerConfig) -> Vec<Assignment> {
    let mut couriers = couriers.iter().filter(|courier| courier.available).collect::<Vec<_>>();
    if couriers.is_empty() {
        return vec![];
    }

    couriers.sort_by_key(|courier| courier.id);

    clusters
        .iter()
        .zip(couriers.iter().cycle())
        .map(|(cluster, courier)| {
            let deliveries = cluster.sequence.len();

            Assignment {
                courier_id: courier.id,
                courier_name: courier.name.clone(),
                vehicle: courier.vehicle.clone(),
                cluster_id: cluster.cluster.id,
                sequence: cluster.sequence.clone(),
                deliveries,
                distance: cluster.distance,
                time_minutes: get_route_duration(cluster.distance, deliveries, config),
                efficiency: get_route_efficiency(deliveries, config),
            }
        })
        .collect()
}
