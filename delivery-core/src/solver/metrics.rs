#[cfg(test)]
#[path = "../../tests/unit/solver/metrics_test.rs"]
mod metrics_test;

use crate::models::{Assignment, Metrics};
use crate::utils::Float;

/// Gets deliveries per hour, zero when no time is spent.
pub fn get_deliveries_per_hour(deliveries: usize, time_minutes: Float) -> Float {
    if time_minutes > 0. { deliveries as Float / (time_minutes / 60.) } else { 0. }
}

/// Aggregates metrics of all assignments. Returns default (zero) metrics when there are no assignments.
pub fn get_metrics(assignments: &[Assignment]) -> Metrics {
    if assignments.is_empty() {
        return Metrics::default();
    }

    let total_deliveries = assignments.iter().map(|assignment| assignment.deliveries).sum();
    let total_distance: Float = assignments.iter().map(|assignment| assignment.distance).sum();
    let total_time_minutes = assignments.iter().map(|assignment| assignment.time_minutes).sum();
    let avg_efficiency =
        assignments.iter().map(|assignment| assignment.efficiency).sum::<Float>() / assignments.len() as Float;

    Metrics {
        total_deliveries,
        total_distance_km: total_distance / 1000.,
        avg_efficiency,
        total_time_minutes,
        deliveries_per_hour: get_deliveries_per_hour(total_deliveries, total_time_minutes),
    }
}
