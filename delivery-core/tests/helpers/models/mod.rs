use crate::models::*;
use crate::utils::Float;

pub const DEPOT_ID: LocationId = 0;

pub fn test_depot() -> Location {
    Location::new(DEPOT_ID, 0., 0., LocationKind::Depot)
}

pub fn test_location(id: LocationId, lat: Float, lon: Float) -> Location {
    Location::new(id, lat, lon, LocationKind::Delivery)
}

/// Creates locations with a depot at (0, 0) followed by delivery points.
pub fn create_locations(points: &[(LocationId, Float, Float)]) -> Locations {
    Locations::new(
        std::iter::once(test_depot()).chain(points.iter().map(|&(id, lat, lon)| test_location(id, lat, lon))).collect(),
    )
}

pub fn test_order(id: OrderId, location_id: LocationId) -> Order {
    Order::new(id, location_id, 10.)
}

pub fn test_courier(id: CourierId) -> Courier {
    Courier::new(id, &format!("courier{id}"), "bike")
}

/// Creates orders for every delivery point: order id is location id multiplied by ten.
pub fn create_orders(points: &[(LocationId, Float, Float)]) -> Vec<Order> {
    points.iter().map(|&(id, _, _)| test_order(id * 10, id)).collect()
}

/// Creates a problem without explicit graph where every delivery point has one order.
pub fn create_problem(points: &[(LocationId, Float, Float)], couriers: usize) -> DeliveryProblem {
    DeliveryProblem::new(
        create_locations(points),
        create_orders(points),
        (1..=couriers as CourierId).map(test_courier).collect(),
    )
}

/// Delivery points forming two distant groups of three.
pub fn two_groups_points() -> Vec<(LocationId, Float, Float)> {
    vec![
        (1, 0.010, 0.010),
        (2, 0.011, 0.012),
        (3, 0.012, 0.010),
        (4, 0.500, 0.500),
        (5, 0.501, 0.502),
        (6, 0.502, 0.500),
    ]
}
