//! Specifies input problem format and its conversion to the optimizer's model.

#[cfg(test)]
#[path = "../../tests/unit/format/problem_test.rs"]
mod problem_test;

use super::{FormatError, validate_problem};
use delivery_core::algorithms::graph::build_graph;
use delivery_core::models::{
    Courier as CoreCourier, DeliveryProblem, Edge as CoreEdge, Location as CoreLocation,
    LocationKind as CoreLocationKind, Locations, Order as CoreOrder, OrderStatus as CoreOrderStatus,
};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, Read};

/// A delivery problem.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    /// Known locations. The first depot location is a start and an end of every route.
    pub locations: Vec<Location>,
    /// Travel edges. When empty, a complete graph over all locations is used.
    #[serde(default)]
    pub edges: Vec<Edge>,
    /// Whether edges are one way. Default is false.
    #[serde(default)]
    pub directed: bool,
    /// Orders.
    #[serde(default)]
    pub orders: Vec<Order>,
    /// Couriers.
    #[serde(default)]
    pub couriers: Vec<Courier>,
}

/// A location kind.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LocationKind {
    /// A depot, also known as restaurant.
    #[serde(alias = "restaurant")]
    Depot,
    /// A delivery point.
    #[default]
    Delivery,
    /// A customer address.
    Customer,
}

/// A location.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// A location id.
    pub id: i64,
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lng: f64,
    /// A location kind.
    #[serde(default)]
    pub kind: LocationKind,
}

/// A travel edge.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    /// An origin location id.
    pub from: i64,
    /// A destination location id.
    pub to: i64,
    /// A travel distance in meters.
    pub weight: f64,
}

/// An order status.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Waits for delivery.
    #[default]
    Pending,
    /// Handed over to a courier.
    Dispatched,
    /// Delivered.
    Delivered,
    /// Cancelled.
    Cancelled,
}

/// An order.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// An order id.
    pub id: i64,
    /// A delivery location id.
    pub location_id: i64,
    /// Order value.
    #[serde(default)]
    pub value: f64,
    /// Order status. Default is pending.
    #[serde(default)]
    pub status: OrderStatus,
}

/// A courier.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Courier {
    /// A courier id.
    pub id: i64,
    /// A courier name.
    #[serde(default)]
    pub name: String,
    /// A vehicle descriptor.
    #[serde(default)]
    pub vehicle: String,
    /// Whether courier can take routes. Default is true.
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

/// Reads delivery problem from json.
pub trait DeliveryProblemReader {
    /// Reads and validates a problem, then converts it into the optimizer's model.
    fn read_delivery(self) -> Result<DeliveryProblem, Vec<FormatError>>;
}

impl<R: Read> DeliveryProblemReader for BufReader<R> {
    fn read_delivery(self) -> Result<DeliveryProblem, Vec<FormatError>> {
        let problem = deserialize_problem(self)?;
        validate_problem(&problem)?;

        Ok(map_to_delivery_problem(&problem))
    }
}

/// Deserializes problem in json format from `BufReader`.
pub fn deserialize_problem<R: Read>(reader: BufReader<R>) -> Result<Problem, Vec<FormatError>> {
    serde_json::from_reader(reader).map_err(|err| {
        vec![FormatError::new_with_details(
            "E0000".to_string(),
            "cannot deserialize problem".to_string(),
            "check input json".to_string(),
            err.to_string(),
        )]
    })
}

/// Converts a problem into the optimizer's model. Only pending orders are kept.
pub fn map_to_delivery_problem(problem: &Problem) -> DeliveryProblem {
    let locations = Locations::new(
        problem
            .locations
            .iter()
            .map(|location| {
                let kind = match location.kind {
                    LocationKind::Depot => CoreLocationKind::Depot,
                    LocationKind::Delivery => CoreLocationKind::Delivery,
                    LocationKind::Customer => CoreLocationKind::Customer,
                };
                CoreLocation::new(location.id, location.lat, location.lng, kind)
            })
            .collect(),
    );

    let orders = problem
        .orders
        .iter()
        .filter(|order| order.status == OrderStatus::Pending)
        .map(|order| CoreOrder {
            id: order.id,
            location_id: order.location_id,
            value: order.value,
            status: CoreOrderStatus::Pending,
        })
        .collect();

    let couriers = problem
        .couriers
        .iter()
        .map(|courier| CoreCourier {
            id: courier.id,
            name: courier.name.clone(),
            vehicle: courier.vehicle.clone(),
            available: courier.available,
        })
        .collect();

    let delivery = DeliveryProblem::new(locations, orders, couriers);

    if problem.edges.is_empty() {
        delivery
    } else {
        let edges = problem.edges.iter().map(|edge| CoreEdge::new(edge.from, edge.to, edge.weight)).collect::<Vec<_>>();
        let graph = build_graph(delivery.locations.iter(), edges.as_slice(), problem.directed);

        delivery.with_graph(graph)
    }
}
