use super::{Graph, NodeId};
use crate::algorithms::geo::haversine_distance;
use crate::models::Locations;
use crate::utils::{Float, compare_floats};
use rustc_hash::{FxHashMap, FxHashSet};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A result of a successful shortest path search.
#[derive(Clone, Debug, PartialEq)]
pub struct PathResult {
    /// Node ids from start to destination, both included.
    pub path: Vec<NodeId>,
    /// Total cost of the path.
    pub cost: Float,
}

/// Returns a heuristic function which estimates remaining cost as great-circle distance between nodes.
/// Nodes without known coordinates are estimated with zero which keeps the heuristic admissible.
pub fn geo_heuristic(locations: &Locations) -> impl Fn(NodeId, NodeId) -> Float + '_ {
    move |from, to| match (locations.coordinate(from), locations.coordinate(to)) {
        (Some(from), Some(to)) => haversine_distance(&from, &to),
        _ => 0.,
    }
}

/// A search scoped node: a tree is formed via `parent` links.
#[derive(Clone, Debug)]
pub struct SearchNode {
    /// A graph node id.
    pub id: NodeId,
    /// Cost from start.
    pub g: Float,
    /// Estimated cost to destination.
    pub h: Float,
    /// A priority: `g + h`.
    pub f: Float,
    /// An index of predecessor node in the search arena.
    pub parent: Option<usize>,
}

/// A frontier entry ordered by `(priority, sequence)` so that equal priorities are served in insertion order.
#[derive(Clone, Copy, Debug)]
pub(crate) struct FrontierEntry<T> {
    pub priority: Float,
    pub sequence: usize,
    pub item: T,
}

impl<T> FrontierEntry<T> {
    fn cmp_ascending(&self, other: &Self) -> Ordering {
        compare_floats(self.priority, other.priority).then_with(|| self.sequence.cmp(&other.sequence))
    }
}

impl<T> PartialEq for FrontierEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for FrontierEntry<T> {}

impl<T> PartialOrd for FrontierEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for FrontierEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // reversed as `BinaryHeap` is a max-heap
        other.cmp_ascending(self)
    }
}

/// A min-priority frontier with stable tie breaking. Outdated entries are not removed, callers skip them lazily.
pub(crate) struct Frontier<T> {
    heap: BinaryHeap<FrontierEntry<T>>,
    sequence: usize,
}

impl<T> Default for Frontier<T> {
    fn default() -> Self {
        Self { heap: BinaryHeap::default(), sequence: 0 }
    }
}

impl<T> Frontier<T> {
    pub fn push(&mut self, priority: Float, item: T) {
        self.heap.push(FrontierEntry { priority, sequence: self.sequence, item });
        self.sequence += 1;
    }

    pub fn pop(&mut self) -> Option<FrontierEntry<T>> {
        self.heap.pop()
    }

    /// Returns pending entries in the order they would be served.
    pub fn sorted(&self) -> Vec<&FrontierEntry<T>> {
        let mut entries = self.heap.iter().collect::<Vec<_>>();
        entries.sort_by(|a, b| a.cmp_ascending(b));

        entries
    }
}

/// Keeps the state of one best-first search run: node arena, frontier, closed set and best known costs.
pub(crate) struct SearchState {
    nodes: Vec<SearchNode>,
    frontier: Frontier<usize>,
    closed: FxHashSet<NodeId>,
    closed_order: Vec<NodeId>,
    best_g: FxHashMap<NodeId, Float>,
}

impl SearchState {
    pub fn new(start: NodeId, h: Float) -> Self {
        let mut state = Self {
            nodes: Vec::default(),
            frontier: Frontier::default(),
            closed: FxHashSet::default(),
            closed_order: Vec::default(),
            best_g: FxHashMap::default(),
        };

        state.best_g.insert(start, 0.);
        state.open(SearchNode { id: start, g: 0., h, f: h, parent: None });

        state
    }

    pub fn node(&self, idx: usize) -> &SearchNode {
        &self.nodes[idx]
    }

    /// Pops the most promising node which is not closed yet.
    pub fn pop(&mut self) -> Option<usize> {
        while let Some(entry) = self.frontier.pop() {
            if !self.closed.contains(&self.nodes[entry.item].id) {
                return Some(entry.item);
            }
        }

        None
    }

    pub fn close(&mut self, idx: usize) {
        let id = self.nodes[idx].id;
        if self.closed.insert(id) {
            self.closed_order.push(id);
        }
    }

    /// Opens neighbours of the node when a strictly better cost is found for them.
    pub fn expand<H>(&mut self, idx: usize, graph: &Graph, destination: NodeId, heuristic: &H)
    where
        H: Fn(NodeId, NodeId) -> Float,
    {
        let (id, g) = (self.nodes[idx].id, self.nodes[idx].g);

        for &(neighbour, weight) in graph.neighbours(id) {
            if self.closed.contains(&neighbour) {
                continue;
            }

            let tentative_g = g + weight;
            let is_improvement = self.best_g.get(&neighbour).is_none_or(|&best| tentative_g < best);

            if is_improvement {
                self.best_g.insert(neighbour, tentative_g);
                let h = heuristic(neighbour, destination);
                self.open(SearchNode { id: neighbour, g: tentative_g, h, f: tentative_g + h, parent: Some(idx) });
            }
        }
    }

    /// Reconstructs path from start to the node.
    pub fn path_to(&self, idx: usize) -> Vec<NodeId> {
        let mut path = std::iter::successors(Some(idx), |&idx| self.nodes[idx].parent)
            .map(|idx| self.nodes[idx].id)
            .collect::<Vec<_>>();
        path.reverse();

        path
    }

    pub fn result(&self, idx: usize) -> PathResult {
        PathResult { path: self.path_to(idx), cost: self.nodes[idx].g }
    }

    /// Returns `(id, g, f)` of pending frontier entries in serving order.
    pub fn open_snapshot(&self) -> Vec<(NodeId, Float, Float)> {
        self.frontier
            .sorted()
            .into_iter()
            .map(|entry| {
                let node = &self.nodes[entry.item];
                (node.id, node.g, node.f)
            })
            .collect()
    }

    pub fn closed_nodes(&self) -> &[NodeId] {
        self.closed_order.as_slice()
    }

    fn open(&mut self, node: SearchNode) {
        let f = node.f;
        self.nodes.push(node);
        self.frontier.push(f, self.nodes.len() - 1);
    }
}
