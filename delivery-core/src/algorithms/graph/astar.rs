#[cfg(test)]
#[path = "../../../tests/unit/algorithms/graph/astar_test.rs"]
mod astar_test;

use super::search::SearchState;
use super::{Graph, NodeId, PathResult};
use crate::utils::Float;

/// Finds the cheapest path from `start` to `destination` using A* search guided by `heuristic`.
///
/// The frontier is ordered by `(f, insertion sequence)`, so ties are always resolved in favour of the
/// earliest inserted entry. A node is finalized when it is popped for the first time; outdated frontier
/// entries are skipped. Returns `None` when either node is absent from the graph or destination is unreachable.
pub fn find_path_astar<H>(graph: &Graph, start: NodeId, destination: NodeId, heuristic: H) -> Option<PathResult>
where
    H: Fn(NodeId, NodeId) -> Float,
{
    if !graph.contains(start) || !graph.contains(destination) {
        return None;
    }

    let mut state = SearchState::new(start, heuristic(start, destination));

    while let Some(current) = state.pop() {
        if state.node(current).id == destination {
            return Some(state.result(current));
        }

        state.close(current);
        state.expand(current, graph, destination, &heuristic);
    }

    None
}
