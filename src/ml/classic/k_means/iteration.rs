//! The two halves of a Lloyd iteration and the convergence test between them.

use log::debug;
use rand::Rng;

use super::init::sample_point;
use super::point::{euc_distance, min_max, points_equal, Point};

/// Index of the centroid closest to `point`.
///
/// Centroids are scanned in order and only a strictly smaller distance
/// replaces the current best, so ties go to the lowest index. Distances are
/// floored first, which makes ties common.
pub fn nearest_centroid(centroids: &[Point], point: &[f64]) -> usize {
    let mut best_cluster = 0;
    let mut best_dist = f64::INFINITY;
    for (idx, centroid) in centroids.iter().enumerate() {
        let dist = euc_distance(centroid, point);
        if dist < best_dist {
            best_dist = dist;
            best_cluster = idx;
        }
    }
    best_cluster
}

/// Assignment step: groups `points` by their nearest centroid.
///
/// Returns one cluster per centroid, each keeping the input order of its
/// members. Clusters may be empty.
pub fn assign(centroids: &[Point], points: &[Point]) -> Vec<Vec<Point>> {
    let mut clusters: Vec<Vec<Point>> = vec![Vec::new(); centroids.len()];
    for point in points {
        clusters[nearest_centroid(centroids, point)].push(point.clone());
    }
    clusters
}

/// Update step: the floored per-dimension mean of every cluster.
///
/// An empty cluster gets a fresh random centroid drawn over the range of all
/// clustered points.
pub fn mean_centroids<R: Rng + ?Sized>(clusters: &[Vec<Point>], rng: &mut R) -> Vec<Point> {
    let mut bounds: Option<(Point, Point)> = None;
    clusters
        .iter()
        .enumerate()
        .map(|(idx, members)| match members.first() {
            Some(first) => {
                let count = members.len() as f64;
                (0..first.len())
                    .map(|d| (members.iter().fold(0.0, |sum, p| sum + p[d]) / count).floor())
                    .collect()
            }
            None => {
                let (min, max) = bounds.get_or_insert_with(|| {
                    let everything: Vec<Point> = clusters.iter().flatten().cloned().collect();
                    min_max(&everything)
                });
                let centroid = sample_point(min, max, rng);
                debug!("cluster {} is empty, reseeded at {:?}", idx, centroid);
                centroid
            }
        })
        .collect()
}

/// Exact comparison of two centroid sets, index by index, with no tolerance.
pub fn centroids_equal(old: &[Point], new: &[Point]) -> bool {
    old.len() == new.len() && old.iter().zip(new.iter()).all(|(a, b)| points_equal(a, b))
}
