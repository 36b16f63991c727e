use super::*;
use crate::algorithms::graph::find_path_astar;
use crate::helpers::algorithms::*;

fn get_kinds(steps: &[SimulationStep]) -> Vec<StepKind> {
    steps.iter().map(|step| step.kind).collect()
}

fn entry(node: NodeId, g: Float) -> OpenEntry {
    OpenEntry { node, g, f: g }
}

#[test]
fn can_trace_successful_search() {
    let graph = create_diamond_graph(true);

    let steps = trace_astar(&graph, 1, 4, zero_heuristic, DEFAULT_EXPANSION_LIMIT);

    use StepKind::*;
    assert_eq!(get_kinds(steps.as_slice()), vec![Start, Explore, Explore, Explore, Explore, Done]);

    assert_eq!(steps[0].open, vec![entry(1, 0.)]);
    assert_eq!(steps[0].path, vec![1]);

    assert_eq!(steps[1].current, Some(1));
    assert!(steps[1].open.is_empty());
    assert!(steps[1].closed.is_empty());

    assert_eq!(steps[2].current, Some(2));
    assert_eq!(steps[2].open, vec![entry(4, 10.)]);
    assert_eq!(steps[2].closed, vec![1]);
    assert_eq!(steps[2].path, vec![1, 2]);

    // outdated entries stay in the frontier until popped
    assert_eq!(steps[3].current, Some(3));
    assert_eq!(steps[3].open, vec![entry(4, 6.), entry(4, 10.)]);
    assert_eq!(steps[3].closed, vec![1, 2]);

    let done = steps.last().expect("no steps");
    assert_eq!(done.current, Some(4));
    assert_eq!(done.path, vec![1, 2, 3, 4]);
    assert_eq!(done.closed, vec![1, 2, 3]);
    assert_eq!(done.total_cost, Some(3.));
    assert!(done.open.is_empty());
}

#[test]
fn can_stop_when_expansion_limit_is_reached() {
    let graph = create_diamond_graph(true);

    let steps = trace_astar(&graph, 1, 4, zero_heuristic, 2);

    use StepKind::*;
    assert_eq!(get_kinds(steps.as_slice()), vec![Start, Explore, Explore, NoPath]);

    let last = steps.last().expect("no steps");
    assert_eq!(last.closed, vec![1, 2]);
    assert!(last.current.is_none());
    assert!(last.total_cost.is_none());
}

#[test]
fn can_emit_no_path_when_frontier_is_exhausted() {
    let graph = create_test_graph(&[(1, 2, 1.), (3, 4, 1.)], true);

    let steps = trace_astar(&graph, 1, 4, zero_heuristic, DEFAULT_EXPANSION_LIMIT);

    use StepKind::*;
    assert_eq!(get_kinds(steps.as_slice()), vec![Start, Explore, Explore, NoPath]);
    assert_eq!(steps[3].closed, vec![1, 2]);
    assert!(steps[3].path.is_empty());
}

parameterized_test! {can_return_no_steps_for_unknown_nodes, (start, destination), {
    let graph = create_diamond_graph(true);

    assert!(trace_astar(&graph, start, destination, zero_heuristic, DEFAULT_EXPANSION_LIMIT).is_empty());
}}

can_return_no_steps_for_unknown_nodes! {
    case01_unknown_start: (10, 4),
    case02_unknown_destination: (1, 10),
}

#[test]
fn can_emit_only_start_and_no_path_with_zero_limit() {
    let graph = create_diamond_graph(true);

    let steps = trace_astar(&graph, 1, 4, zero_heuristic, 0);

    assert_eq!(get_kinds(steps.as_slice()), vec![StepKind::Start, StepKind::NoPath]);
}

#[test]
fn can_report_same_cost_as_path_finder() {
    let graph = create_test_graph(&[(1, 2, 7.), (1, 3, 9.), (2, 3, 1.), (3, 4, 2.), (2, 4, 10.)], false);

    let steps = trace_astar(&graph, 1, 4, zero_heuristic, DEFAULT_EXPANSION_LIMIT);
    let result = find_path_astar(&graph, 1, 4, zero_heuristic).expect("path should be found");

    let done = steps.last().expect("no steps");
    assert_eq!(done.kind, StepKind::Done);
    assert_eq!(done.total_cost, Some(result.cost));
    assert_eq!(done.path, result.path);
}
