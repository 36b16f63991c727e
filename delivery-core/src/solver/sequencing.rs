#[cfg(test)]
#[path = "../../tests/unit/solver/sequencing_test.rs"]
mod sequencing_test;

use crate::algorithms::geo::haversine_distance;
use crate::algorithms::graph::{Graph, SimulationStep, find_path_astar, geo_heuristic, trace_astar};
use crate::models::{Cluster, Coordinate, Location, Locations, Order, OrderId, SequenceStatus, SequencedCluster};
use crate::utils::{Float, GenericError, GenericResult, compare_floats};

/// Gets route distance in meters: from depot through all stops in given order and back to depot.
pub fn get_route_distance(depot: &Coordinate, stops: &[Coordinate]) -> Float {
    if stops.is_empty() {
        return 0.;
    }

    std::iter::once(depot)
        .chain(stops.iter())
        .chain(std::iter::once(depot))
        .collect::<Vec<_>>()
        .windows(2)
        .map(|leg| haversine_distance(leg[0], leg[1]))
        .sum()
}

/// Builds delivery sequences of clusters using greedy nearest neighbour selection where
/// "nearest" means the cheapest A* path in the travel graph.
pub struct ClusterSequencer<'a> {
    graph: &'a Graph,
    locations: &'a Locations,
    depot: Option<&'a Location>,
    trace_limit: usize,
}

impl<'a> ClusterSequencer<'a> {
    /// Creates a new instance of `ClusterSequencer`.
    pub fn new(graph: &'a Graph, locations: &'a Locations, trace_limit: usize) -> Self {
        Self { graph, locations, depot: locations.depot(), trace_limit }
    }

    /// Sequences cluster orders starting from the depot. Returns the sequenced cluster with search traces
    /// recorded for every chosen hop.
    ///
    /// Clusters with at most one order are kept as is with zero distance. When sequencing fails,
    /// the cluster is degraded: original order is kept, distance is zero and no traces are returned.
    pub fn sequence(&self, cluster: Cluster) -> (SequencedCluster, Vec<SimulationStep>) {
        if cluster.orders.len() <= 1 {
            let sequence = cluster.order_ids();
            return (SequencedCluster { cluster, sequence, distance: 0., status: SequenceStatus::Trivial }, vec![]);
        }

        match self.try_sequence(&cluster) {
            Ok((sequence, distance, traces)) => {
                (SequencedCluster { cluster, sequence, distance, status: SequenceStatus::Optimized }, traces)
            }
            Err(err) => {
                let sequence = cluster.order_ids();
                let status = SequenceStatus::Degraded { reason: err.to_string() };
                (SequencedCluster { cluster, sequence, distance: 0., status }, vec![])
            }
        }
    }

    fn try_sequence(&self, cluster: &Cluster) -> GenericResult<(Vec<OrderId>, Float, Vec<SimulationStep>)> {
        let depot = self.depot.ok_or_else(|| GenericError::from("cannot find depot location"))?;
        let heuristic = geo_heuristic(self.locations);

        let mut remaining = cluster.orders.iter().collect::<Vec<_>>();
        let mut current = depot.id;
        let mut sequence = Vec::with_capacity(remaining.len());
        let mut stops = Vec::with_capacity(remaining.len());
        let mut traces = Vec::default();

        while !remaining.is_empty() {
            let nearest = remaining
                .iter()
                .enumerate()
                .filter_map(|(idx, order)| {
                    find_path_astar(self.graph, current, order.location_id, &heuristic).map(|result| (idx, result.cost))
                })
                .min_by(|(_, a), (_, b)| compare_floats(*a, *b));

            // unreachable orders are visited in their original order
            let idx = match nearest {
                Some((idx, _)) => {
                    let target = remaining[idx].location_id;
                    traces.extend(trace_astar(self.graph, current, target, &heuristic, self.trace_limit));
                    idx
                }
                None => 0,
            };

            let order = remaining.remove(idx);
            stops.push(self.get_coordinate(order)?);
            sequence.push(order.id);
            current = order.location_id;
        }

        Ok((sequence, get_route_distance(&depot.coordinate, stops.as_slice()), traces))
    }

    fn get_coordinate(&self, order: &Order) -> GenericResult<Coordinate> {
        self.locations.coordinate(order.location_id).ok_or_else(|| {
            format!("cannot find location '{}' of order '{}'", order.location_id, order.id).into()
        })
    }
}
