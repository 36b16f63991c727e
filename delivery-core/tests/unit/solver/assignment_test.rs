use super::*;
use crate::helpers::models::test_courier;
use crate::models::{Cluster, Coordinate, SequenceStatus};

fn create_sequenced(id: usize, sequence: Vec<i64>, distance: Float) -> SequencedCluster {
    SequencedCluster {
        cluster: Cluster {
            id,
            centroid: Coordinate::default(),
            orders: vec![],
            total_value: 0.,
            radius_km: 0.,
            density: 0.,
        },
        sequence,
        distance,
        status: SequenceStatus::Optimized,
    }
}

#[test]
fn can_assign_clusters_round_robin_by_courier_id() {
    let clusters = (0..5).map(|id| create_sequenced(id, vec![id as i64], 0.)).collect::<Vec<_>>();
    let couriers = vec![test_courier(3), test_courier(1), test_courier(2)];

    let assignments = assign_couriers(clusters.as_slice(), couriers.as_slice(), &OptimizerConfig::default());

    assert_eq!(
        assignments.iter().map(|a| (a.cluster_id, a.courier_id)).collect::<Vec<_>>(),
        vec![(0, 1), (1, 2), (2, 3), (3, 1), (4, 2)]
    );
    assert_eq!(assignments[0].courier_name, "courier1");
}

#[test]
fn can_skip_unavailable_couriers() {
    let clusters = vec![create_sequenced(0, vec![1], 0.), create_sequenced(1, vec![2], 0.)];
    let mut busy = test_courier(1);
    busy.available = false;
    let couriers = vec![busy, test_courier(2)];

    let assignments = assign_couriers(clusters.as_slice(), couriers.as_slice(), &OptimizerConfig::default());

    assert!(assignments.iter().all(|assignment| assignment.courier_id == 2));
    assert_eq!(assignments.len(), 2);
}

#[test]
fn can_return_no_assignments_without_couriers() {
    let clusters = vec![create_sequenced(0, vec![1], 0.)];

    assert!(assign_couriers(clusters.as_slice(), &[], &OptimizerConfig::default()).is_empty());
}

#[test]
fn can_estimate_route_time_and_efficiency() {
    let clusters = vec![create_sequenced(0, vec![1, 2], 3330.), create_sequenced(1, (1..=8).collect(), 0.)];

    let assignments =
        assign_couriers(clusters.as_slice(), &[test_courier(1)], &OptimizerConfig::default());

    assert_float_eq!(assignments[0].time_minutes, 3330. / 333. + 2. * 8.);
    assert_float_eq!(assignments[0].efficiency, 0.4);
    assert_eq!(assignments[0].deliveries, 2);
    assert_eq!(assignments[0].sequence, vec![1, 2]);
    assert_eq!(assignments[0].distance, 3330.);

    assert_float_eq!(assignments[1].time_minutes, 64.);
    assert_eq!(assignments[1].efficiency, 1.);
}
