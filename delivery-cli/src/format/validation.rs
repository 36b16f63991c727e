//! Validation rules of the input problem. Every rule has a code in `E1xxx` range.

#[cfg(test)]
#[path = "../../tests/unit/format/validation_test.rs"]
mod validation_test;

use super::FormatError;
use super::problem::Problem;
use std::collections::HashSet;

/// Returns duplicated ids in sorted order.
fn get_duplicates(ids: impl Iterator<Item = i64>) -> Vec<i64> {
    let mut seen = HashSet::new();
    let mut duplicates = ids.filter(|id| !seen.insert(*id)).collect::<HashSet<_>>().into_iter().collect::<Vec<_>>();
    duplicates.sort();

    duplicates
}

fn join_ids(ids: &[i64]) -> String {
    ids.iter().map(|id| id.to_string()).collect::<Vec<_>>().join(", ")
}

fn check_duplicates(code: &str, entity: &str, ids: impl Iterator<Item = i64>) -> Result<(), FormatError> {
    let duplicates = get_duplicates(ids);

    if duplicates.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new(
            code.to_string(),
            format!("duplicated {entity} ids: {}", join_ids(duplicates.as_slice())),
            format!("make sure that {entity} ids are unique"),
        ))
    }
}

/// Checks that location ids are unique.
fn check_e1000_duplicate_location_ids(problem: &Problem) -> Result<(), FormatError> {
    check_duplicates("E1000", "location", problem.locations.iter().map(|location| location.id))
}

/// Checks that coordinates are valid latitude and longitude values.
fn check_e1001_invalid_coordinates(problem: &Problem) -> Result<(), FormatError> {
    let ids = problem
        .locations
        .iter()
        .filter(|location| {
            !(location.lat.is_finite() && location.lng.is_finite())
                || location.lat.abs() > 90.
                || location.lng.abs() > 180.
        })
        .map(|location| location.id)
        .collect::<Vec<_>>();

    if ids.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new(
            "E1001".to_string(),
            format!("invalid coordinates of locations: {}", join_ids(ids.as_slice())),
            "make sure that latitude is in [-90, 90] and longitude is in [-180, 180] range".to_string(),
        ))
    }
}

/// Checks that order ids are unique.
fn check_e1002_duplicate_order_ids(problem: &Problem) -> Result<(), FormatError> {
    check_duplicates("E1002", "order", problem.orders.iter().map(|order| order.id))
}

/// Checks that order values are not negative.
fn check_e1003_invalid_order_values(problem: &Problem) -> Result<(), FormatError> {
    let ids = problem
        .orders
        .iter()
        .filter(|order| !order.value.is_finite() || order.value < 0.)
        .map(|order| order.id)
        .collect::<Vec<_>>();

    if ids.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new(
            "E1003".to_string(),
            format!("invalid value of orders: {}", join_ids(ids.as_slice())),
            "make sure that order value is a non-negative number".to_string(),
        ))
    }
}

/// Checks that edge weights are not negative as search requires non-negative costs.
fn check_e1004_invalid_edge_weights(problem: &Problem) -> Result<(), FormatError> {
    let edges = problem
        .edges
        .iter()
        .filter(|edge| !edge.weight.is_finite() || edge.weight < 0.)
        .map(|edge| format!("{}->{}", edge.from, edge.to))
        .collect::<Vec<_>>();

    if edges.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new(
            "E1004".to_string(),
            format!("invalid weight of edges: {}", edges.join(", ")),
            "make sure that edge weight is a non-negative number".to_string(),
        ))
    }
}

/// Checks that courier ids are unique.
fn check_e1005_duplicate_courier_ids(problem: &Problem) -> Result<(), FormatError> {
    check_duplicates("E1005", "courier", problem.couriers.iter().map(|courier| courier.id))
}

/// Validates the problem returning all found errors.
pub fn validate_problem(problem: &Problem) -> Result<(), Vec<FormatError>> {
    let errors = [
        check_e1000_duplicate_location_ids(problem),
        check_e1001_invalid_coordinates(problem),
        check_e1002_duplicate_order_ids(problem),
        check_e1003_invalid_order_values(problem),
        check_e1004_invalid_edge_weights(problem),
        check_e1005_duplicate_courier_ids(problem),
    ]
    .into_iter()
    .filter_map(|result| result.err())
    .collect::<Vec<_>>();

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
