#[cfg(test)]
#[path = "../../tests/unit/analysis/efficiency_test.rs"]
mod efficiency_test;

use crate::models::{Courier, CourierId, OptimizationResult, Order, OrderId};
use crate::solver::get_deliveries_per_hour;
use crate::utils::{Float, Random};
use std::sync::Arc;

/// Specifies a dispatch method.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum DispatchMethod {
    /// Orders are split between couriers by a dispatcher, routes are long and unplanned.
    Manual,
    /// Orders are shuffled and split between couriers.
    Random,
    /// Orders are clustered and sequenced by the optimizer.
    Optimized,
}

/// A route estimate of a single courier.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteEstimate {
    /// A courier id.
    pub courier_id: CourierId,
    /// Orders served by the route.
    pub orders: Vec<OrderId>,
    /// Route distance in meters.
    pub distance: Float,
    /// Route duration in minutes.
    pub time_minutes: Float,
    /// Route efficiency.
    pub efficiency: Float,
}

/// Specifies delivery costs.
#[derive(Clone, Debug, PartialEq)]
pub struct CostModel {
    /// Fuel price per litre.
    pub fuel_price: Float,
    /// Fuel consumption, km per litre.
    pub km_per_litre: Float,
    /// Courier wage per hour.
    pub hourly_wage: Float,
}

impl Default for CostModel {
    fn default() -> Self {
        Self { fuel_price: 5.5, km_per_litre: 10., hourly_wage: 15. }
    }
}

impl CostModel {
    /// Gets total cost of fuel and labour. Labour is paid for every route.
    pub fn get_cost(&self, distance_km: Float, time_minutes: Float, routes: usize) -> Float {
        let fuel = distance_km / self.km_per_litre * self.fuel_price;
        let labour = time_minutes / 60. * self.hourly_wage * routes as Float;

        fuel + labour
    }
}

/// Aggregated metrics of a dispatch method.
#[derive(Clone, Debug, PartialEq)]
pub struct MethodMetrics {
    /// A dispatch method.
    pub method: DispatchMethod,
    /// Total amount of deliveries.
    pub total_deliveries: usize,
    /// Total distance in km.
    pub total_distance_km: Float,
    /// Total time in minutes.
    pub total_time_minutes: Float,
    /// Mean route efficiency.
    pub avg_efficiency: Float,
    /// Deliveries per hour.
    pub deliveries_per_hour: Float,
    /// Estimated total cost.
    pub total_cost: Float,
    /// Amount of routes.
    pub route_count: usize,
}

/// Absolute savings of the optimized method, negative values mean losses.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Savings {
    /// Saved time in minutes.
    pub time_minutes: Float,
    /// Saved distance in km.
    pub distance_km: Float,
    /// Saved money.
    pub cost: Float,
}

/// A comparison of the optimized method against a baseline. Percentages are reported only
/// when the optimized method is better, otherwise they are zero.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MethodComparison {
    /// Time reduction, percent.
    pub time_reduction: Float,
    /// Distance reduction, percent.
    pub distance_reduction: Float,
    /// Efficiency increase, percent.
    pub efficiency_increase: Float,
    /// Deliveries per hour increase, percent.
    pub deliveries_per_hour_increase: Float,
    /// Cost reduction, percent.
    pub cost_reduction: Float,
    /// Absolute savings.
    pub savings: Savings,
    /// True if time is improved.
    pub improved_time: bool,
    /// True if distance is improved.
    pub improved_distance: bool,
    /// True if cost is improved.
    pub improved_cost: bool,
    /// True if efficiency is improved.
    pub improved_efficiency: bool,
}

/// A full comparison report.
#[derive(Clone, Debug, PartialEq)]
pub struct EfficiencyReport {
    /// Manual method metrics.
    pub manual: MethodMetrics,
    /// Random method metrics.
    pub random: MethodMetrics,
    /// Optimized method metrics.
    pub optimized: MethodMetrics,
    /// Comparison against manual method, absent when there is not enough data.
    pub vs_manual: Option<MethodComparison>,
    /// Comparison against random method, absent when there is not enough data.
    pub vs_random: Option<MethodComparison>,
}

/// Estimates baseline dispatch methods and compares them with an optimization result.
pub struct EfficiencyAnalyzer {
    cost_model: CostModel,
    random: Arc<dyn Random>,
}

impl EfficiencyAnalyzer {
    /// Creates a new instance of `EfficiencyAnalyzer`.
    pub fn new(cost_model: CostModel, random: Arc<dyn Random>) -> Self {
        Self { cost_model, random }
    }

    /// Builds a full report for given orders, couriers and optimization result.
    pub fn analyze(&self, orders: &[Order], couriers: &[Courier], result: &OptimizationResult) -> EfficiencyReport {
        let manual = self.get_metrics(DispatchMethod::Manual, estimate_manual_routes(orders, couriers).as_slice());
        let random = self.get_metrics(DispatchMethod::Random, self.estimate_random_routes(orders, couriers).as_slice());
        let optimized = self.get_optimized_metrics(result);

        EfficiencyReport {
            vs_manual: compare_methods(&manual, &optimized),
            vs_random: compare_methods(&random, &optimized),
            manual,
            random,
            optimized,
        }
    }

    /// Estimates routes of the random method: orders are shuffled and split evenly between couriers.
    pub fn estimate_random_routes(&self, orders: &[Order], couriers: &[Courier]) -> Vec<RouteEstimate> {
        let shuffled = self.random.shuffled_indices(orders.len()).into_iter().map(|idx| orders[idx].id).collect::<Vec<_>>();

        split_evenly(shuffled.as_slice(), couriers)
            .map(|(courier, orders)| {
                let distance = 1500. * orders.len() as Float * 1.6;

                RouteEstimate {
                    courier_id: courier.id,
                    orders: orders.to_vec(),
                    distance,
                    time_minutes: distance / 400.,
                    efficiency: self.random.uniform_real(0.4, 0.7),
                }
            })
            .collect()
    }

    /// Gets metrics of the optimized method.
    pub fn get_optimized_metrics(&self, result: &OptimizationResult) -> MethodMetrics {
        let routes = result
            .assignments
            .iter()
            .map(|assignment| RouteEstimate {
                courier_id: assignment.courier_id,
                orders: assignment.sequence.clone(),
                distance: assignment.distance,
                time_minutes: assignment.time_minutes,
                efficiency: assignment.efficiency,
            })
            .collect::<Vec<_>>();

        self.get_metrics(DispatchMethod::Optimized, routes.as_slice())
    }

    /// Aggregates route estimates into method metrics.
    pub fn get_metrics(&self, method: DispatchMethod, routes: &[RouteEstimate]) -> MethodMetrics {
        let total_deliveries = routes.iter().map(|route| route.orders.len()).sum();
        let total_distance_km = routes.iter().map(|route| route.distance).sum::<Float>() / 1000.;
        let total_time_minutes = routes.iter().map(|route| route.time_minutes).sum();
        let avg_efficiency = if routes.is_empty() {
            0.
        } else {
            routes.iter().map(|route| route.efficiency).sum::<Float>() / routes.len() as Float
        };

        MethodMetrics {
            method,
            total_deliveries,
            total_distance_km,
            total_time_minutes,
            avg_efficiency,
            deliveries_per_hour: get_deliveries_per_hour(total_deliveries, total_time_minutes),
            total_cost: self.cost_model.get_cost(total_distance_km, total_time_minutes, routes.len()),
            route_count: routes.len(),
        }
    }
}

/// Estimates routes of the manual method: orders are split evenly between couriers in their original order,
/// the remainder is left unassigned.
pub fn estimate_manual_routes(orders: &[Order], couriers: &[Courier]) -> Vec<RouteEstimate> {
    let ids = orders.iter().map(|order| order.id).collect::<Vec<_>>();

    split_evenly(ids.as_slice(), couriers)
        .map(|(courier, orders)| {
            let deliveries = orders.len();
            let distance = if deliveries <= 1 { 4000. } else { 3000. + (deliveries - 1) as Float * 2000. };
            // manual dispatch is assumed to be 20% slower
            let time_minutes = (distance / 333. + deliveries as Float * 8.) * 1.2;

            RouteEstimate { courier_id: courier.id, orders: orders.to_vec(), distance, time_minutes, efficiency: 0.6 }
        })
        .collect()
}

/// Compares optimized method against a baseline. Returns `None` when either side has no deliveries or no time.
pub fn compare_methods(baseline: &MethodMetrics, optimized: &MethodMetrics) -> Option<MethodComparison> {
    let has_data = |metrics: &MethodMetrics| metrics.total_deliveries > 0 && metrics.total_time_minutes > 0.;
    if !has_data(baseline) || !has_data(optimized) {
        return None;
    }

    let improved_time = optimized.total_time_minutes < baseline.total_time_minutes;
    let improved_distance = optimized.total_distance_km < baseline.total_distance_km;
    let improved_cost = optimized.total_cost < baseline.total_cost;
    let improved_efficiency = optimized.avg_efficiency > baseline.avg_efficiency;
    let improved_throughput = optimized.deliveries_per_hour > baseline.deliveries_per_hour;

    let when = |improved: bool, value: Float| if improved { value } else { 0. };

    Some(MethodComparison {
        time_reduction: when(improved_time, get_reduction(baseline.total_time_minutes, optimized.total_time_minutes)),
        distance_reduction: when(
            improved_distance,
            get_reduction(baseline.total_distance_km, optimized.total_distance_km),
        ),
        efficiency_increase: when(improved_efficiency, get_increase(baseline.avg_efficiency, optimized.avg_efficiency)),
        deliveries_per_hour_increase: when(
            improved_throughput,
            get_increase(baseline.deliveries_per_hour, optimized.deliveries_per_hour),
        ),
        cost_reduction: when(improved_cost, get_reduction(baseline.total_cost, optimized.total_cost)),
        savings: Savings {
            time_minutes: baseline.total_time_minutes - optimized.total_time_minutes,
            distance_km: baseline.total_distance_km - optimized.total_distance_km,
            cost: baseline.total_cost - optimized.total_cost,
        },
        improved_time,
        improved_distance,
        improved_cost,
        improved_efficiency,
    })
}

fn get_reduction(before: Float, after: Float) -> Float {
    if before == 0. { 0. } else { (before - after) / before * 100. }
}

fn get_increase(before: Float, after: Float) -> Float {
    if before == 0. { 0. } else { (after - before) / before * 100. }
}

fn split_evenly<'a>(
    orders: &'a [OrderId],
    couriers: &'a [Courier],
) -> impl Iterator<Item = (&'a Courier, &'a [OrderId])> + 'a {
    let per_courier = orders.len() / couriers.len().max(1);

    couriers
        .iter()
        .enumerate()
        .map(move |(idx, courier)| (courier, &orders[idx * per_courier..(idx + 1) * per_courier]))
        .filter(|(_, orders)| !orders.is_empty())
}
