#[cfg(test)]
#[path = "../../tests/unit/models/domain_test.rs"]
mod domain_test;

use crate::utils::Float;
use rustc_hash::FxHashMap;

/// An identity of a location. Also used as a node id in the travel graph.
pub type LocationId = i64;

/// An identity of an order.
pub type OrderId = i64;

/// An identity of a courier.
pub type CourierId = i64;

/// Represents a geographic coordinate in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Coordinate {
    /// Latitude.
    pub lat: Float,
    /// Longitude.
    pub lon: Float,
}

impl Coordinate {
    /// Creates a new instance of `Coordinate`.
    pub fn new(lat: Float, lon: Float) -> Self {
        Self { lat, lon }
    }

    /// Checks that coordinate is finite and lies within valid latitude/longitude ranges.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite() && self.lat.abs() <= 90. && self.lon.abs() <= 180.
    }
}

/// Specifies a role of the location in the delivery network.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum LocationKind {
    /// An origin and return point of every route.
    Depot,
    /// A delivery point.
    Delivery,
    /// A customer address.
    Customer,
}

/// Represents a location in the delivery network.
#[derive(Clone, Debug, PartialEq)]
pub struct Location {
    /// A location id.
    pub id: LocationId,
    /// A location coordinate.
    pub coordinate: Coordinate,
    /// A location kind.
    pub kind: LocationKind,
}

impl Location {
    /// Creates a new instance of `Location`.
    pub fn new(id: LocationId, lat: Float, lon: Float, kind: LocationKind) -> Self {
        Self { id, coordinate: Coordinate::new(lat, lon), kind }
    }
}

/// An ordered collection of locations indexed by their ids.
#[derive(Clone, Debug, Default)]
pub struct Locations {
    items: Vec<Location>,
    index: FxHashMap<LocationId, usize>,
}

impl Locations {
    /// Creates a new instance of `Locations`. When ids are duplicated, the first location wins.
    pub fn new(items: Vec<Location>) -> Self {
        let index = items.iter().enumerate().rev().map(|(idx, location)| (location.id, idx)).collect();

        Self { items, index }
    }

    /// Returns location with given id.
    pub fn get(&self, id: LocationId) -> Option<&Location> {
        self.index.get(&id).and_then(|&idx| self.items.get(idx))
    }

    /// Returns coordinate of location with given id.
    pub fn coordinate(&self, id: LocationId) -> Option<Coordinate> {
        self.get(id).map(|location| location.coordinate)
    }

    /// Returns the first location marked as depot, or the first location at all as a fallback.
    pub fn depot(&self) -> Option<&Location> {
        self.items.iter().find(|location| location.kind == LocationKind::Depot).or_else(|| self.items.first())
    }

    /// Iterates over locations in their original order.
    pub fn iter(&self) -> impl Iterator<Item = &Location> + '_ {
        self.items.iter()
    }

    /// Returns amount of locations.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks whether collection is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Represents a travel connection between two locations.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
    /// An origin location id.
    pub from: LocationId,
    /// A destination location id.
    pub to: LocationId,
    /// A travel cost, typically meters.
    pub weight: Float,
}

impl Edge {
    /// Creates a new instance of `Edge`.
    pub fn new(from: LocationId, to: LocationId, weight: Float) -> Self {
        Self { from, to, weight }
    }
}

/// Specifies order status.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum OrderStatus {
    /// Order waits for delivery.
    Pending,
    /// Order is handed over to a courier.
    Dispatched,
    /// Order is delivered.
    Delivered,
    /// Order is cancelled.
    Cancelled,
}

/// Represents a customer order bound to exactly one delivery location.
#[derive(Clone, Debug, PartialEq)]
pub struct Order {
    /// An order id.
    pub id: OrderId,
    /// A delivery location id.
    pub location_id: LocationId,
    /// A monetary value of the order.
    pub value: Float,
    /// An order status.
    pub status: OrderStatus,
}

impl Order {
    /// Creates a new pending order.
    pub fn new(id: OrderId, location_id: LocationId, value: Float) -> Self {
        Self { id, location_id, value, status: OrderStatus::Pending }
    }
}

/// Represents a courier.
#[derive(Clone, Debug, PartialEq)]
pub struct Courier {
    /// A courier id.
    pub id: CourierId,
    /// A courier name.
    pub name: String,
    /// A vehicle descriptor.
    pub vehicle: String,
    /// Whether courier can take new routes.
    pub available: bool,
}

impl Courier {
    /// Creates a new available courier.
    pub fn new(id: CourierId, name: &str, vehicle: &str) -> Self {
        Self { id, name: name.to_string(), vehicle: vehicle.to_string(), available: true }
    }
}
