#[cfg(test)]
#[path = "../../../tests/unit/algorithms/graph/dijkstra_test.rs"]
mod dijkstra_test;

use super::search::Frontier;
use super::{Graph, NodeId, PathResult};
use crate::utils::Float;
use rustc_hash::{FxHashMap, FxHashSet};

/// Finds the cheapest path from `start` to `destination` using Dijkstra's algorithm.
/// The search stops as soon as destination is finalized.
pub fn find_path_dijkstra(graph: &Graph, start: NodeId, destination: NodeId) -> Option<PathResult> {
    if !graph.contains(start) || !graph.contains(destination) {
        return None;
    }

    let mut distances: FxHashMap<NodeId, Float> = graph.nodes().map(|node| (node, Float::INFINITY)).collect();
    let mut previous: FxHashMap<NodeId, NodeId> = FxHashMap::default();
    let mut visited: FxHashSet<NodeId> = FxHashSet::default();
    let mut frontier = Frontier::default();

    distances.insert(start, 0.);
    frontier.push(0., start);

    while let Some(entry) = frontier.pop() {
        let (distance, node) = (entry.priority, entry.item);

        if !visited.insert(node) {
            continue;
        }

        if node == destination {
            break;
        }

        for &(neighbour, weight) in graph.neighbours(node) {
            let candidate = distance + weight;
            if candidate < distances.get(&neighbour).copied().unwrap_or(Float::INFINITY) {
                distances.insert(neighbour, candidate);
                previous.insert(neighbour, node);
                frontier.push(candidate, neighbour);
            }
        }
    }

    let cost = distances.get(&destination).copied().filter(|cost| cost.is_finite())?;

    let mut path = vec![destination];
    let mut current = destination;
    while current != start {
        current = *previous.get(&current)?;
        path.push(current);
    }
    path.reverse();

    Some(PathResult { path, cost })
}
