#[cfg(test)]
#[path = "../../../tests/unit/algorithms/graph/tracer_test.rs"]
mod tracer_test;

use super::search::SearchState;
use super::{Graph, NodeId};
use crate::utils::Float;

/// A default upper bound on node expansions done by the tracer.
pub const DEFAULT_EXPANSION_LIMIT: usize = 1000;

/// Specifies a kind of the search step.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum StepKind {
    /// Search is initialized with the start node.
    Start,
    /// A node is popped from the frontier.
    Explore,
    /// Destination is reached.
    Done,
    /// Frontier is exhausted or expansion limit is hit.
    NoPath,
}

/// A frontier entry snapshot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OpenEntry {
    /// A node id.
    pub node: NodeId,
    /// Cost from start.
    pub g: Float,
    /// A priority.
    pub f: Float,
}

/// A snapshot of the A* search state used for visualization.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationStep {
    /// A step kind.
    pub kind: StepKind,
    /// A node being processed, absent for `NoPath`.
    pub current: Option<NodeId>,
    /// Pending frontier entries in serving order.
    pub open: Vec<OpenEntry>,
    /// Closed nodes in closing order.
    pub closed: Vec<NodeId>,
    /// A path from start to the current node.
    pub path: Vec<NodeId>,
    /// Total path cost, set only for `Done`.
    pub total_cost: Option<Float>,
}

/// Runs A* search from `start` to `destination` recording a step for every expansion.
///
/// Emits a `Start` step, an `Explore` step per popped node and a terminal `Done` or `NoPath` step.
/// At most `expansion_limit` nodes are expanded. Returns no steps when either node is absent from the graph.
pub fn trace_astar<H>(
    graph: &Graph,
    start: NodeId,
    destination: NodeId,
    heuristic: H,
    expansion_limit: usize,
) -> Vec<SimulationStep>
where
    H: Fn(NodeId, NodeId) -> Float,
{
    if !graph.contains(start) || !graph.contains(destination) {
        return Vec::default();
    }

    let h0 = heuristic(start, destination);
    let mut state = SearchState::new(start, h0);
    let mut steps = vec![SimulationStep {
        kind: StepKind::Start,
        current: Some(start),
        open: vec![OpenEntry { node: start, g: 0., f: h0 }],
        closed: vec![],
        path: vec![start],
        total_cost: None,
    }];

    let mut expansions = 0;
    while expansions < expansion_limit {
        let Some(current) = state.pop() else {
            break;
        };

        let node_id = state.node(current).id;
        let path = state.path_to(current);

        steps.push(SimulationStep {
            kind: StepKind::Explore,
            current: Some(node_id),
            open: state.open_snapshot().into_iter().map(|(node, g, f)| OpenEntry { node, g, f }).collect(),
            closed: state.closed_nodes().to_vec(),
            path: path.clone(),
            total_cost: None,
        });

        if node_id == destination {
            steps.push(SimulationStep {
                kind: StepKind::Done,
                current: Some(destination),
                open: vec![],
                closed: state.closed_nodes().to_vec(),
                path,
                total_cost: Some(state.node(current).g),
            });

            return steps;
        }

        state.close(current);
        state.expand(current, graph, destination, &heuristic);
        expansions += 1;
    }

    steps.push(SimulationStep {
        kind: StepKind::NoPath,
        current: None,
        open: vec![],
        closed: state.closed_nodes().to_vec(),
        path: vec![],
        total_cost: None,
    });

    steps
}
