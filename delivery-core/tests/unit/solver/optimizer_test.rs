use super::*;
use crate::algorithms::graph::GraphBuilder;
use crate::helpers::models::*;
use crate::storage::InMemoryRepository;
use std::sync::{Arc, Mutex};

fn create_optimizer(config: OptimizerConfig) -> RouteOptimizer {
    RouteOptimizer::new(config, Environment::new_silent())
}

fn create_capturing_environment() -> (Environment, Arc<Mutex<Vec<String>>>) {
    let messages = Arc::new(Mutex::new(Vec::new()));
    let sink = messages.clone();
    let environment = Environment::new(Arc::new(move |msg: &str| sink.lock().unwrap().push(msg.to_string())));

    (environment, messages)
}

#[test]
fn can_optimize_two_groups_of_orders() {
    let problem = create_problem(two_groups_points().as_slice(), 2);

    let result = create_optimizer(OptimizerConfig::default()).optimize(&problem).expect("cannot optimize");

    assert_eq!(result.clusters.len(), 2);
    assert_eq!(result.assignments.len(), 2);
    assert_eq!(result.metrics.total_deliveries, 6);
    assert!(result.metrics.total_distance_km > 0.);
    assert!(result.metrics.deliveries_per_hour > 0.);
    assert_eq!(result.degraded_clusters().count(), 0);

    let mut courier_ids = result.assignments.iter().map(|assignment| assignment.courier_id).collect::<Vec<_>>();
    courier_ids.sort();
    assert_eq!(courier_ids, vec![1, 2]);

    result.clusters.iter().for_each(|cluster| {
        let traces = result.traces.get(&cluster.cluster.id).expect("no traces for cluster");
        if cluster.sequence.len() > 1 {
            assert_eq!(cluster.status, SequenceStatus::Optimized);
            assert!(!traces.is_empty());
        }
    });
}

#[test]
fn can_optimize_single_order() {
    let problem = create_problem(&[(1, 0., 0.01)], 1);

    let result = create_optimizer(OptimizerConfig::default()).optimize(&problem).expect("cannot optimize");

    assert_eq!(result.clusters.len(), 1);
    assert_eq!(result.clusters[0].sequence, vec![10]);
    assert_eq!(result.clusters[0].distance, 0.);
    assert_eq!(result.clusters[0].status, SequenceStatus::Trivial);
    assert_eq!(result.metrics.total_deliveries, 1);
    assert_float_eq!(result.metrics.total_time_minutes, 8.);
    assert_float_eq!(result.metrics.deliveries_per_hour, 7.5);
}

#[test]
fn can_use_explicit_graph() {
    let points = [(1, 0., 0.01), (2, 0., 0.02)];
    // the only road to 2 goes through 1
    let graph = GraphBuilder::new(false).add_edge(DEPOT_ID, 1, 1000.).add_edge(1, 2, 1000.).build();
    let problem = create_problem(&points, 1).with_graph(graph);

    let result = create_optimizer(OptimizerConfigBuilder::default().with_cluster_count(Some(1)).build().unwrap())
        .optimize(&problem)
        .expect("cannot optimize");

    assert_eq!(result.clusters[0].sequence, vec![10, 20]);
    let done = result.traces[&0].iter().filter(|step| step.kind == crate::algorithms::graph::StepKind::Done);
    assert_eq!(done.map(|step| step.total_cost).collect::<Vec<_>>(), vec![Some(1000.), Some(1000.)]);
}

#[test]
fn can_return_solution_without_assignments_when_no_couriers() {
    let problem = create_problem(two_groups_points().as_slice(), 0);

    let result = create_optimizer(OptimizerConfig::default()).optimize(&problem).expect("cannot optimize");

    assert!(result.assignments.is_empty());
    assert_eq!(result.metrics, Metrics::default());
    assert_eq!(result.clusters.len(), 2);
}

#[test]
fn can_fail_without_orders() {
    let problem = DeliveryProblem::new(create_locations(&[(1, 0., 0.01)]), vec![], vec![test_courier(1)]);

    let result = create_optimizer(OptimizerConfig::default()).optimize(&problem);

    assert_eq!(result.err(), Some(GenericError::from("cannot optimize: no orders")));
}

#[test]
fn can_skip_orders_with_unknown_locations() {
    let mut problem = create_problem(&[(1, 0., 0.01), (2, 0., 0.02)], 1);
    problem.orders.push(test_order(99, 99));
    let (environment, messages) = create_capturing_environment();

    let result = RouteOptimizer::new(OptimizerConfig::default(), environment).optimize(&problem).expect("cannot optimize");

    assert_eq!(result.metrics.total_deliveries, 2);
    assert_eq!(result.parameters.total_orders, 3);
    assert!(messages.lock().unwrap().iter().any(|msg| msg == "skipped 1 orders with unknown location: 99"));
}

#[test]
fn can_fail_when_no_order_has_known_location() {
    let locations = create_locations(&[(1, 0., 0.01)]);
    let problem = DeliveryProblem::new(locations, vec![test_order(1, 42)], vec![test_courier(1)]);

    let result = create_optimizer(OptimizerConfig::default()).optimize(&problem);

    assert!(result.is_err());
}

#[test]
fn can_echo_parameters_and_log_phases() {
    let problem = create_problem(two_groups_points().as_slice(), 3);
    let config = OptimizerConfigBuilder::default().with_max_deliveries_per_route(4).build().unwrap();
    let (environment, messages) = create_capturing_environment();

    let result = RouteOptimizer::new(config, environment).optimize(&problem).expect("cannot optimize");

    assert_eq!(
        result.parameters,
        EchoedParameters { cluster_count: None, max_deliveries_per_route: 4, total_orders: 6, total_couriers: 3 }
    );
    let messages = messages.lock().unwrap();
    assert!(messages.iter().any(|msg| msg == "created 2 clusters"));
    assert!(messages.iter().any(|msg| msg.starts_with("no travel graph given, created complete graph: 7 nodes, 42 edges")));
}

#[test]
fn can_produce_same_result_for_same_input() {
    let points = (1..=12).map(|id| (id, (id % 4) as f64 * 0.01, (id % 3) as f64 * 0.02)).collect::<Vec<_>>();
    let problem = create_problem(points.as_slice(), 2);
    let optimizer = create_optimizer(OptimizerConfig::default());

    let first = optimizer.optimize(&problem).expect("cannot optimize");
    let second = optimizer.optimize(&problem).expect("cannot optimize");

    let get_sequences = |result: &OptimizationResult| {
        result.assignments.iter().map(|assignment| assignment.sequence.clone()).collect::<Vec<_>>()
    };
    assert_eq!(get_sequences(&first), get_sequences(&second));
    assert_eq!(first.metrics, second.metrics);
}

#[test]
fn can_store_result_in_repository() {
    let problem = create_problem(two_groups_points().as_slice(), 2);
    let (environment, messages) = create_capturing_environment();
    let mut repository = InMemoryRepository::default();

    let optimizer = RouteOptimizer::new(OptimizerConfig::default(), environment);
    let first = optimizer.optimize_and_store(&problem, &mut repository).expect("cannot optimize");
    let second = optimizer.optimize_and_store(&problem, &mut repository).expect("cannot optimize");

    assert_ne!(first.id, second.id);
    assert_eq!(repository.len(), 2);
    assert_eq!(repository.last().map(|run| run.id.clone()), Some(second.id.clone()));
    assert_eq!(repository.find(first.id.as_str()).map(|run| run.result.metrics.total_deliveries), Some(6));
    assert!(messages.lock().unwrap().iter().any(|msg| msg == &format!("saved result as run '{}'", first.id)));
}

#[test]
fn can_leave_repository_untouched_when_optimization_fails() {
    let problem = create_problem(&[], 1);
    let mut repository = InMemoryRepository::default();

    let result = create_optimizer(OptimizerConfig::default()).optimize_and_store(&problem, &mut repository);

    assert!(result.is_err());
    assert!(repository.is_empty());
}
