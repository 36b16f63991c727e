use super::*;
use crate::algorithms::graph::StepKind;
use crate::helpers::algorithms::create_test_graph;
use crate::helpers::models::*;
use crate::solver::create_complete_graph;

fn create_cluster(orders: Vec<Order>) -> Cluster {
    Cluster {
        id: 0,
        centroid: Coordinate::default(),
        total_value: orders.iter().map(|order| order.value).sum(),
        orders,
        radius_km: 0.,
        density: 0.,
    }
}

/// Delivery points on the equator, not sorted by their distance to depot.
fn equator_points() -> Vec<(i64, Float, Float)> {
    vec![(1, 0., 0.03), (2, 0., 0.01), (3, 0., 0.02)]
}

#[test]
fn can_sequence_orders_by_nearest_path() {
    let points = equator_points();
    let locations = create_locations(points.as_slice());
    let graph = create_complete_graph(&locations);
    let sequencer = ClusterSequencer::new(&graph, &locations, 1000);

    let (sequenced, traces) = sequencer.sequence(create_cluster(create_orders(points.as_slice())));

    assert_eq!(sequenced.status, SequenceStatus::Optimized);
    assert_eq!(sequenced.sequence, vec![20, 30, 10]);
    assert_float_eq!(sequenced.distance, 2. * haversine_distance(&Coordinate::new(0., 0.), &Coordinate::new(0., 0.03)));

    // one traced search per hop, every search is successful
    let done = traces.iter().filter(|step| step.kind == StepKind::Done).collect::<Vec<_>>();
    assert_eq!(done.len(), 3);
    assert_eq!(done[0].path.first(), Some(&DEPOT_ID));
    assert_eq!(done[0].path.last(), Some(&2));
    assert_eq!(done[2].path.last(), Some(&1));
    assert_eq!(traces.iter().filter(|step| step.kind == StepKind::Start).count(), 3);
}

#[test]
fn can_keep_single_order_cluster_trivial() {
    let locations = create_locations(&[(1, 0.5, 0.5)]);
    let graph = create_complete_graph(&locations);
    let sequencer = ClusterSequencer::new(&graph, &locations, 1000);

    let (sequenced, traces) = sequencer.sequence(create_cluster(vec![test_order(7, 1)]));

    assert_eq!(sequenced.status, SequenceStatus::Trivial);
    assert_eq!(sequenced.sequence, vec![7]);
    assert_eq!(sequenced.distance, 0.);
    assert!(traces.is_empty());
}

#[test]
fn can_fallback_to_original_order_when_graph_is_disconnected() {
    let points = equator_points();
    let locations = create_locations(points.as_slice());
    let graph = create_test_graph(&[(2, 3, 1.)], false);
    let sequencer = ClusterSequencer::new(&graph, &locations, 1000);

    let (sequenced, traces) = sequencer.sequence(create_cluster(create_orders(points.as_slice())));

    // depot and location 1 are not in the graph, so orders are taken as is until 2 -> 3 becomes reachable
    assert_eq!(sequenced.status, SequenceStatus::Optimized);
    assert_eq!(sequenced.sequence, vec![10, 20, 30]);
    assert!(sequenced.distance > 0.);
    assert!(traces.iter().any(|step| step.kind == StepKind::Done));
}

#[test]
fn can_degrade_cluster_without_depot() {
    let locations = Locations::default();
    let graph = create_test_graph(&[(1, 2, 1.)], false);
    let sequencer = ClusterSequencer::new(&graph, &locations, 1000);

    let (sequenced, traces) = sequencer.sequence(create_cluster(vec![test_order(1, 1), test_order(2, 2)]));

    assert!(sequenced.is_degraded());
    assert_eq!(sequenced.status, SequenceStatus::Degraded { reason: "cannot find depot location".to_string() });
    assert_eq!(sequenced.sequence, vec![1, 2]);
    assert_eq!(sequenced.distance, 0.);
    assert!(traces.is_empty());
}

parameterized_test! {can_get_route_distance, (stops, expected), {
    let depot = Coordinate::new(0., 0.);
    let stops = stops.iter().map(|&(lat, lon)| Coordinate::new(lat, lon)).collect::<Vec<_>>();

    assert_float_eq!(get_route_distance(&depot, stops.as_slice()), expected, 1e-3);
}}

can_get_route_distance! {
    case01_no_stops: (Vec::<(Float, Float)>::new(), 0.),
    case02_single_stop: (vec![(0., 0.01)], 2223.898),
    case03_there_and_back: (vec![(0., 0.01), (0., 0.02)], 4447.797),
}
