use super::*;

parameterized_test! {can_validate_coordinate, (lat, lon, expected), {
    assert_eq!(Coordinate::new(lat, lon).is_valid(), expected);
}}

can_validate_coordinate! {
    case01_origin: (0., 0., true),
    case02_bounds: (-90., 180., true),
    case03_lat_out_of_range: (90.1, 0., false),
    case04_lon_out_of_range: (0., -180.5, false),
    case05_nan: (Float::NAN, 0., false),
    case06_infinity: (0., Float::INFINITY, false),
}

#[test]
fn can_find_depot_by_kind() {
    let locations = Locations::new(vec![
        Location::new(1, 0., 0., LocationKind::Customer),
        Location::new(2, 1., 1., LocationKind::Depot),
        Location::new(3, 2., 2., LocationKind::Depot),
    ]);

    assert_eq!(locations.depot().map(|location| location.id), Some(2));
}

#[test]
fn can_fallback_to_first_location_when_no_depot() {
    let locations = Locations::new(vec![
        Location::new(5, 0., 0., LocationKind::Delivery),
        Location::new(1, 1., 1., LocationKind::Delivery),
    ]);

    assert_eq!(locations.depot().map(|location| location.id), Some(5));
    assert!(Locations::default().depot().is_none());
}

#[test]
fn can_keep_first_location_on_duplicate_ids() {
    let locations = Locations::new(vec![
        Location::new(1, 10., 10., LocationKind::Delivery),
        Location::new(1, 20., 20., LocationKind::Delivery),
    ]);

    assert_eq!(locations.coordinate(1), Some(Coordinate::new(10., 10.)));
    assert_eq!(locations.len(), 2);
    assert!(locations.get(2).is_none());
}

#[test]
fn can_create_pending_order_and_available_courier() {
    let order = Order::new(1, 2, 15.);
    let courier = Courier::new(3, "Ana", "bike");

    assert_eq!(order.status, OrderStatus::Pending);
    assert!(courier.available);
    assert_eq!(courier.name, "Ana");
}
