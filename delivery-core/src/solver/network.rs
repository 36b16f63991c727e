#[cfg(test)]
#[path = "../../tests/unit/solver/network_test.rs"]
mod network_test;

use crate::algorithms::geo::haversine_distance;
use crate::algorithms::graph::{Graph, GraphBuilder};
use crate::models::Locations;

/// Creates a complete travel graph: every ordered pair of distinct locations is connected by a directed edge
/// weighted by great-circle distance. Locations with invalid coordinates are left out.
///
/// Amount of edges grows quadratically with amount of locations.
pub fn create_complete_graph(locations: &Locations) -> Graph {
    let valid = locations.iter().filter(|location| location.coordinate.is_valid()).collect::<Vec<_>>();

    let builder = GraphBuilder::new(true).add_nodes(valid.iter().copied());

    valid
        .iter()
        .flat_map(|from| valid.iter().filter(move |to| to.id != from.id).map(move |to| (*from, *to)))
        .fold(builder, |builder, (from, to)| {
            builder.add_edge(from.id, to.id, haversine_distance(&from.coordinate, &to.coordinate))
        })
        .build()
}
