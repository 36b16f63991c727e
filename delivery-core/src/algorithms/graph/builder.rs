#[cfg(test)]
#[path = "../../../tests/unit/algorithms/graph/builder_test.rs"]
mod builder_test;

use crate::models::{Edge, Location, LocationId};
use crate::utils::Float;
use rustc_hash::FxHashMap;

/// A node id in the travel graph.
pub type NodeId = LocationId;

/// A weighted adjacency structure: every node is mapped to its ordered list of `(neighbour, weight)` pairs.
/// Parallel edges are kept as is.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    adjacency: FxHashMap<NodeId, Vec<(NodeId, Float)>>,
}

impl Graph {
    /// Checks whether node is known to the graph.
    pub fn contains(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(&node)
    }

    /// Returns outgoing edges of the node. Unknown node has no edges.
    pub fn neighbours(&self, node: NodeId) -> &[(NodeId, Float)] {
        self.adjacency.get(&node).map(|edges| edges.as_slice()).unwrap_or(&[])
    }

    /// Returns all node ids.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency.keys().copied()
    }

    /// Returns amount of nodes.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns amount of directed edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(|edges| edges.len()).sum()
    }
}

/// Something what can be used as a graph node.
pub trait GraphNode {
    /// Returns node id.
    fn node_id(&self) -> NodeId;
}

impl GraphNode for NodeId {
    fn node_id(&self) -> NodeId {
        *self
    }
}

impl GraphNode for Location {
    fn node_id(&self) -> NodeId {
        self.id
    }
}

impl<T: GraphNode + ?Sized> GraphNode for &T {
    fn node_id(&self) -> NodeId {
        (**self).node_id()
    }
}

/// Something what connects two graph nodes.
pub trait GraphEdge {
    /// Returns origin node id.
    fn source(&self) -> NodeId;

    /// Returns destination node id.
    fn target(&self) -> NodeId;
}

impl GraphEdge for Edge {
    fn source(&self) -> NodeId {
        self.from
    }

    fn target(&self) -> NodeId {
        self.to
    }
}

impl<T: GraphEdge + ?Sized> GraphEdge for &T {
    fn source(&self) -> NodeId {
        (**self).source()
    }

    fn target(&self) -> NodeId {
        (**self).target()
    }
}

/// Provides the way to build a [Graph] using the builder pattern.
pub struct GraphBuilder {
    directed: bool,
    adjacency: FxHashMap<NodeId, Vec<(NodeId, Float)>>,
}

impl GraphBuilder {
    /// Creates a new builder. When `directed` is false, every edge is inserted in both directions.
    pub fn new(directed: bool) -> Self {
        Self { directed, adjacency: FxHashMap::default() }
    }

    /// Adds nodes, even those without any edge.
    pub fn add_nodes<N: GraphNode>(mut self, nodes: impl IntoIterator<Item = N>) -> Self {
        nodes.into_iter().for_each(|node| {
            self.adjacency.entry(node.node_id()).or_default();
        });
        self
    }

    /// Adds edges using `weight_fn` to extract travel cost from each of them.
    /// Ids which were not added as nodes become new nodes.
    pub fn add_edges<E, F>(mut self, edges: impl IntoIterator<Item = E>, weight_fn: F) -> Self
    where
        E: GraphEdge,
        F: Fn(&E) -> Float,
    {
        for edge in edges {
            let weight = weight_fn(&edge);
            self.insert(edge.source(), edge.target(), weight);
        }
        self
    }

    /// Adds a single edge.
    pub fn add_edge(mut self, from: NodeId, to: NodeId, weight: Float) -> Self {
        self.insert(from, to, weight);
        self
    }

    /// Builds a graph.
    pub fn build(self) -> Graph {
        Graph { adjacency: self.adjacency }
    }

    fn insert(&mut self, from: NodeId, to: NodeId, weight: Float) {
        self.adjacency.entry(from).or_default().push((to, weight));
        if self.directed {
            // keep the destination addressable even if it has no outgoing edges
            self.adjacency.entry(to).or_default();
        } else {
            self.adjacency.entry(to).or_default().push((from, weight));
        }
    }
}

/// Builds a graph from locations and edges using edge's weight as travel cost.
pub fn build_graph<'a, N>(nodes: impl IntoIterator<Item = &'a N>, edges: &[Edge], directed: bool) -> Graph
where
    N: GraphNode + 'a,
{
    GraphBuilder::new(directed).add_nodes(nodes).add_edges(edges.iter(), |edge| edge.weight).build()
}
