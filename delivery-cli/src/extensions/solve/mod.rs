//! Contains functionality to solve delivery problems.

pub mod config;

use crate::format::solution::{Solution, create_solution};
use delivery_core::analysis::{CostModel, EfficiencyAnalyzer};
use delivery_core::models::DeliveryProblem;
use delivery_core::solver::{OptimizerConfig, RouteOptimizer};
use delivery_core::storage::ResultRepository;
use delivery_core::utils::{DefaultRandom, Environment, GenericResult};
use std::sync::Arc;

/// Solves the problem and, optionally, compares result with baseline dispatch methods.
/// When a repository is given, the result is saved there and its run id is echoed in the solution.
pub fn solve_problem(
    problem: &DeliveryProblem,
    config: OptimizerConfig,
    environment: Environment,
    compare: bool,
    repository: Option<&mut dyn ResultRepository>,
) -> GenericResult<Solution> {
    let seed = config.clustering_seed;
    let optimizer = RouteOptimizer::new(config, environment);

    let (result, run_id) = match repository {
        Some(repository) => {
            let run = optimizer.optimize_and_store(problem, repository)?;
            (run.result, Some(run.id))
        }
        None => (Arc::new(optimizer.optimize(problem)?), None),
    };

    let report = compare.then(|| {
        EfficiencyAnalyzer::new(CostModel::default(), Arc::new(DefaultRandom::new_with_seed(seed)))
            .analyze(problem.orders.as_slice(), problem.couriers.as_slice(), &result)
    });

    Ok(Solution { run_id, ..create_solution(&result, report.as_ref()) })
}
