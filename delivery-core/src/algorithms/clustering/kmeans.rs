//! This module contains a fixed-iteration K-Means clustering of orders by their delivery coordinates.

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/clustering/kmeans_test.rs"]
mod kmeans_test;

use crate::algorithms::geo::{haversine_distance, haversine_distance_km};
use crate::models::{Cluster, Coordinate, Locations, Order};
use crate::utils::{DefaultRandom, Float, Random, compare_floats};

/// A default upper bound on amount of clusters.
pub const DEFAULT_MAX_CLUSTERS: usize = 8;

/// A default amount of assign/update iterations.
pub const DEFAULT_ITERATIONS: usize = 10;

/// A default seed used to select initial centroids.
pub const DEFAULT_SEED: u64 = 42;

/// A feature vector of an order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrderFeature {
    /// A delivery coordinate.
    pub coordinate: Coordinate,
    /// Order value scaled to [0, 1] range.
    /// NOTE: it is part of the feature vector, but nearest centroid search is geographic only.
    pub normalized_value: Float,
}

impl OrderFeature {
    /// Creates a new instance of `OrderFeature`.
    pub fn new(coordinate: Coordinate, value: Float) -> Self {
        Self { coordinate, normalized_value: (value / 100.).min(1.) }
    }
}

/// Estimates amount of clusters for given amount of points: roughly one cluster per three points,
/// but never more than `max_clusters` or amount of points.
pub fn estimate_cluster_count(points: usize, max_clusters: usize) -> usize {
    let max_clusters = max_clusters.max(1);

    match points {
        0 | 1 => 1,
        2 | 3 => points.min(2).min(max_clusters),
        _ => (points / 3).clamp(1, max_clusters).min(points),
    }
}

/// Groups orders into geographically coherent clusters.
#[derive(Clone, Debug)]
pub struct GeoClusterer {
    cluster_count: Option<usize>,
    max_clusters: usize,
    iterations: usize,
    seed: u64,
}

impl Default for GeoClusterer {
    fn default() -> Self {
        Self { cluster_count: None, max_clusters: DEFAULT_MAX_CLUSTERS, iterations: DEFAULT_ITERATIONS, seed: DEFAULT_SEED }
    }
}

impl GeoClusterer {
    /// Creates a new instance of `GeoClusterer`. When `cluster_count` is not set, it is estimated
    /// from amount of orders. Both explicit and estimated counts are capped by `max_clusters`
    /// and amount of orders.
    pub fn new(cluster_count: Option<usize>, max_clusters: usize) -> Self {
        Self { cluster_count, max_clusters, ..Self::default() }
    }

    /// Sets amount of assign/update iterations. No convergence check is done.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Sets a seed used to select initial centroids.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Splits orders into clusters. Orders with unknown delivery location are ignored.
    /// Every other order ends up in exactly one cluster, empty clusters are not returned.
    pub fn cluster(&self, orders: &[Order], locations: &Locations) -> Vec<Cluster> {
        let (orders, features): (Vec<_>, Vec<_>) = orders
            .iter()
            .filter_map(|order| {
                locations.coordinate(order.location_id).map(|coordinate| (order, OrderFeature::new(coordinate, order.value)))
            })
            .unzip();

        if features.is_empty() {
            return Vec::default();
        }

        let k = self.get_cluster_count(features.len());
        let (memberships, centroids) = self.calculate(features.as_slice(), k);

        centroids
            .into_iter()
            .enumerate()
            .filter_map(|(cluster_idx, centroid)| {
                let members = memberships
                    .iter()
                    .enumerate()
                    .filter(|&(_, &membership)| membership == cluster_idx)
                    .map(|(point_idx, _)| point_idx)
                    .collect::<Vec<_>>();

                if members.is_empty() {
                    return None;
                }

                let radius_km = members
                    .iter()
                    .map(|&idx| haversine_distance_km(&centroid, &features[idx].coordinate))
                    .fold(0., Float::max);
                let orders = members.iter().map(|&idx| orders[idx].clone()).collect::<Vec<_>>();

                Some(Cluster {
                    id: cluster_idx,
                    centroid,
                    total_value: orders.iter().map(|order| order.value).sum(),
                    density: orders.len() as Float / radius_km.max(1.),
                    radius_km,
                    orders,
                })
            })
            .collect()
    }

    fn get_cluster_count(&self, points: usize) -> usize {
        match self.cluster_count {
            Some(count) => count.clamp(1, points.min(self.max_clusters.max(1))),
            None => estimate_cluster_count(points, self.max_clusters),
        }
    }

    /// Returns cluster index of each point and final centroids.
    fn calculate(&self, features: &[OrderFeature], k: usize) -> (Vec<usize>, Vec<Coordinate>) {
        let random = DefaultRandom::new_with_seed(self.seed);
        let mut centroids = random
            .sample_indices(features.len(), k)
            .into_iter()
            .map(|idx| features[idx].coordinate)
            .collect::<Vec<_>>();

        let mut memberships = vec![0; features.len()];

        for _ in 0..self.iterations.max(1) {
            memberships = features.iter().map(|feature| nearest_centroid(&feature.coordinate, &centroids)).collect();

            centroids = centroids
                .iter()
                .enumerate()
                .map(|(cluster_idx, &previous)| {
                    let (count, lat, lon) = memberships
                        .iter()
                        .zip(features.iter())
                        .filter(|&(&membership, _)| membership == cluster_idx)
                        .fold((0, 0., 0.), |(count, lat, lon), (_, feature)| {
                            (count + 1, lat + feature.coordinate.lat, lon + feature.coordinate.lon)
                        });

                    // empty cluster keeps its previous centroid
                    if count == 0 { previous } else { Coordinate::new(lat / count as Float, lon / count as Float) }
                })
                .collect();
        }

        (memberships, centroids)
    }
}

fn nearest_centroid(point: &Coordinate, centroids: &[Coordinate]) -> usize {
    centroids
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| compare_floats(haversine_distance(point, a), haversine_distance(point, b)))
        .map(|(idx, _)| idx)
        .unwrap_or_default()
}
