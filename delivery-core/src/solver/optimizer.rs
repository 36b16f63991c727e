#[cfg(test)]
#[path = "../../tests/unit/solver/optimizer_test.rs"]
mod optimizer_test;

use crate::algorithms::graph::{Graph, SimulationStep};
use crate::models::*;
use crate::solver::*;
use crate::storage::{ResultRepository, StoredRun};
use crate::utils::{Environment, GenericError, GenericResult};
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Orchestrates a single optimization run: clusters orders, sequences every cluster over the travel graph,
/// assigns clusters to couriers and aggregates metrics.
///
/// The optimizer keeps no state between runs, so the same instance can be used to solve many problems.
pub struct RouteOptimizer {
    config: OptimizerConfig,
    environment: Environment,
}

impl RouteOptimizer {
    /// Creates a new instance of `RouteOptimizer`.
    pub fn new(config: OptimizerConfig, environment: Environment) -> Self {
        Self { config, environment }
    }

    /// Returns optimizer config.
    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Solves the problem. Fails only when there is nothing to optimize: no orders or no order with
    /// a known delivery location. Missing couriers result in a solution without assignments.
    pub fn optimize(&self, problem: &DeliveryProblem) -> GenericResult<OptimizationResult> {
        let logger = &self.environment.logger;

        if problem.orders.is_empty() {
            return Err("cannot optimize: no orders".into());
        }

        logger(&format!("optimizing {} orders for {} couriers", problem.orders.len(), problem.couriers.len()));

        let orders = self.get_valid_orders(problem)?;

        let clusters = self.config.create_clusterer().cluster(orders.as_slice(), &problem.locations);
        logger(&format!("created {} clusters", clusters.len()));

        let graph = match problem.graph.as_ref() {
            Some(graph) => Cow::Borrowed(graph),
            None => {
                let graph = create_complete_graph(&problem.locations);
                logger(&format!(
                    "no travel graph given, created complete graph: {} nodes, {} edges",
                    graph.node_count(),
                    graph.edge_count()
                ));
                Cow::Owned(graph)
            }
        };

        let (clusters, traces) = self.sequence_clusters(clusters, graph.as_ref(), problem);

        let assignments = assign_couriers(clusters.as_slice(), problem.couriers.as_slice(), &self.config);
        if assignments.is_empty() {
            logger("no available couriers, clusters are left unassigned");
        }

        let metrics = get_metrics(assignments.as_slice());
        logger(&format!(
            "total deliveries: {}, distance: {:.3}km, time: {:.1}min, deliveries/hour: {:.2}",
            metrics.total_deliveries, metrics.total_distance_km, metrics.total_time_minutes, metrics.deliveries_per_hour
        ));

        Ok(OptimizationResult {
            assignments,
            metrics,
            clusters,
            traces,
            parameters: EchoedParameters {
                cluster_count: self.config.cluster_count,
                max_deliveries_per_route: self.config.max_deliveries_per_route,
                total_orders: problem.orders.len(),
                total_couriers: problem.couriers.len(),
            },
        })
    }

    /// Solves the problem and saves the result into the repository provided by the caller.
    /// Returns the stored run with its id.
    pub fn optimize_and_store(
        &self,
        problem: &DeliveryProblem,
        repository: &mut dyn ResultRepository,
    ) -> GenericResult<StoredRun> {
        let result = self.optimize(problem)?;
        let run_id = repository.save(result)?;

        (self.environment.logger)(&format!("saved result as run '{run_id}'"));

        repository.find(run_id.as_str()).cloned().ok_or_else(|| format!("cannot find saved run '{run_id}'").into())
    }

    fn get_valid_orders(&self, problem: &DeliveryProblem) -> GenericResult<Vec<Order>> {
        let (valid, invalid): (Vec<_>, Vec<_>) = problem
            .orders
            .iter()
            .cloned()
            .partition(|order| problem.locations.coordinate(order.location_id).is_some_and(|c| c.is_valid()));

        if !invalid.is_empty() {
            let ids = invalid.iter().map(|order| order.id.to_string()).collect::<Vec<_>>().join(",");
            (self.environment.logger)(&format!("skipped {} orders with unknown location: {ids}", invalid.len()));
        }

        if valid.is_empty() {
            return Err(GenericError::from("cannot optimize: no order has a known delivery location"));
        }

        Ok(valid)
    }

    fn sequence_clusters(
        &self,
        clusters: Vec<Cluster>,
        graph: &Graph,
        problem: &DeliveryProblem,
    ) -> (Vec<SequencedCluster>, BTreeMap<usize, Vec<SimulationStep>>) {
        let logger = &self.environment.logger;
        let sequencer = ClusterSequencer::new(graph, &problem.locations, self.config.trace_expansion_limit);

        clusters.into_iter().fold((Vec::default(), BTreeMap::default()), |(mut clusters, mut traces), cluster| {
            let cluster_id = cluster.id;
            let (sequenced, steps) = sequencer.sequence(cluster);

            match &sequenced.status {
                SequenceStatus::Degraded { reason } => {
                    logger(&format!("cluster {cluster_id}: sequencing failed, kept original order: {reason}"))
                }
                _ => logger(&format!(
                    "cluster {cluster_id}: {} orders, distance {:.0}m",
                    sequenced.sequence.len(),
                    sequenced.distance
                )),
            }

            traces.insert(cluster_id, steps);
            clusters.push(sequenced);

            (clusters, traces)
        })
    }
}
