use crate::algorithms::graph::Graph;
use crate::models::{Courier, Locations, Order};

/// Represents all inputs of a single optimization run.
#[derive(Clone, Debug, Default)]
pub struct DeliveryProblem {
    /// Known locations, including the depot.
    pub locations: Locations,
    /// A travel graph. When omitted, a complete graph over all locations is synthesized.
    pub graph: Option<Graph>,
    /// Orders to deliver.
    pub orders: Vec<Order>,
    /// Couriers to assign routes to.
    pub couriers: Vec<Courier>,
}

impl DeliveryProblem {
    /// Creates a new instance of `DeliveryProblem` without an explicit travel graph.
    pub fn new(locations: Locations, orders: Vec<Order>, couriers: Vec<Courier>) -> Self {
        Self { locations, graph: None, orders, couriers }
    }

    /// Sets a travel graph to use.
    pub fn with_graph(mut self, graph: Graph) -> Self {
        self.graph = Some(graph);
        self
    }
}
