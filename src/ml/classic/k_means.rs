//! # Lloyd's k-means
//!
//! Partitions a data set into `k` clusters by alternating two steps until the
//! centroids stop moving:
//!
//! 1. **Assignment**: every point joins the cluster of its nearest centroid
//!    (floored Euclidean distance, ties to the lowest index).
//! 2. **Update**: every centroid moves to the floored per-dimension mean of its
//!    members. A centroid whose cluster went empty is redrawn at random.
//!
//! Convergence is exact equality of two consecutive centroid sets. Because
//! centroids are floored onto the integer lattice, a repeated state is reached
//! in practice; `limit` bounds the number of iterations for the rare case where
//! it is not.
//!
//! Initial centroids are either supplied by the caller or drawn uniformly inside
//! the bounding box of the data. Every random draw goes through a generator the
//! run owns, so a seed reproduces a run exactly.
//!
//! ## Example
//! ```rust
//! use lloyd::{clusterize, KMeansConfig};
//!
//! let data = vec![
//!     vec![1.0, 2.0],
//!     vec![1.5, 1.8],
//!     vec![5.0, 8.0],
//!     vec![8.0, 8.0],
//! ];
//! let config = KMeansConfig::new(2).with_centroids(vec![vec![0.0, 0.0], vec![10.0, 10.0]]);
//! let result = clusterize(&data, &config)?;
//!
//! assert_eq!(result.centroids, vec![vec![1.0, 1.0], vec![6.0, 8.0]]);
//! assert_eq!(result.clusters[0].len(), 2);
//! assert_eq!(result.clusters[1].len(), 2);
//! assert_eq!(result.iterations, 1);
//! assert_eq!(result.predict(&[7.0, 7.0]), 1);
//! # Ok::<(), lloyd::Error>(())
//! ```

use log::{debug, trace};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::error::{InvalidInput, Result};

pub mod init;
pub mod iteration;
pub mod point;

#[cfg(test)]
pub(crate) mod scripted;

pub use init::{distinct_positions, random, random_centroids};
pub use iteration::{assign, centroids_equal, mean_centroids, nearest_centroid};
pub use point::{euc_distance, min_max, points_equal, total_distance, Point};

/// Configuration options for k-means clustering.
///
/// `Default` leaves every option unset, which is only useful to describe a run
/// with centroids but no `k` (and is rejected by [`validate`]).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KMeansConfig {
    /// Number of clusters. Must match `centroids.len()` when centroids are given.
    pub k: Option<usize>,
    /// Maximum number of iterations. `None` runs until convergence.
    pub limit: Option<usize>,
    /// Initial centroids. Drawn at random when `None`.
    pub centroids: Option<Vec<Point>>,
    /// Seed for the generator [`clusterize`] builds. Entropy when `None`.
    pub seed: Option<u64>,
}

impl KMeansConfig {
    /// Create a config for `k` clusters with random initial centroids and no iteration limit.
    pub fn new(k: usize) -> Self {
        Self {
            k: Some(k),
            ..Self::default()
        }
    }

    /// Stop after at most `limit` iterations.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Start from the given centroids instead of random ones.
    pub fn with_centroids(mut self, centroids: Vec<Point>) -> Self {
        self.centroids = Some(centroids);
        self
    }

    /// Make every random draw reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Outcome of a clustering run.
#[derive(Debug, Clone, PartialEq)]
pub struct KMeansResult {
    /// Points grouped by centroid; `clusters[i]` belongs to `centroids[i]`.
    pub clusters: Vec<Vec<Point>>,
    /// Final centroids.
    pub centroids: Vec<Point>,
    /// Number of times the centroids moved.
    pub iterations: usize,
    /// Floored sum of distances from every point to its cluster's centroid.
    pub total_distance: f64,
}

impl KMeansResult {
    /// Index of the final centroid nearest to `point`.
    pub fn predict(&self, point: &[f64]) -> usize {
        nearest_centroid(&self.centroids, point)
    }

    /// [`predict`](Self::predict) for several points at once.
    pub fn predict_batch(&self, points: &[Point]) -> Vec<usize> {
        points.iter().map(|p| self.predict(p)).collect()
    }
}

/// Checks the inputs of a run and returns the number of clusters.
///
/// The checks on `k`, the data and the centroids run in a fixed order, so the
/// first violated precondition is the one reported.
pub fn validate(data: &[Point], config: &KMeansConfig) -> Result<usize> {
    if let Some(k) = config.k {
        if k < 2 {
            return Err(InvalidInput::TooFewClusters(k).into());
        }
    }
    if data.is_empty() {
        return Err(InvalidInput::EmptyData.into());
    }
    let k = match (config.k, &config.centroids) {
        (Some(k), Some(centroids)) if centroids.len() != k => {
            return Err(InvalidInput::CentroidCountMismatch {
                k,
                centroids: centroids.len(),
            }
            .into());
        }
        (None, Some(_)) => return Err(InvalidInput::CentroidsWithoutK.into()),
        (None, None) => return Err(InvalidInput::MissingK.into()),
        (Some(k), _) => k,
    };

    let dim = data[0].len();
    if dim == 0 {
        return Err(InvalidInput::EmptyPoint.into());
    }
    check_points("point", data, dim)?;
    if let Some(centroids) = &config.centroids {
        check_points("centroid", centroids, dim)?;
    }
    Ok(k)
}

fn check_points(what: &'static str, points: &[Point], dim: usize) -> Result<()> {
    for (index, point) in points.iter().enumerate() {
        if point.len() != dim {
            return Err(InvalidInput::DimensionMismatch {
                what,
                index,
                expected: dim,
                found: point.len(),
            }
            .into());
        }
        if point.iter().any(|x| !x.is_finite()) {
            return Err(InvalidInput::NonFinite { what, index }.into());
        }
    }
    Ok(())
}

/// Runs k-means on `data` with a generator seeded from `config.seed`, or from
/// entropy when no seed is set.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`](crate::Error::InvalidInput) when `k` is
/// below 2, the data is empty, the centroids disagree with `k` or come without
/// it, the points are ragged or non-finite, or the data range is too narrow to
/// draw `k` distinct initial centroids.
pub fn clusterize(data: &[Point], config: &KMeansConfig) -> Result<KMeansResult> {
    let mut rng = match config.seed {
        Some(seed) => ChaCha20Rng::seed_from_u64(seed),
        None => ChaCha20Rng::from_entropy(),
    };
    clusterize_with_rng(data, config, &mut rng)
}

/// Runs k-means on `data`, taking every random draw from `rng`.
///
/// `config.seed` is ignored. See [`clusterize`] for the errors.
pub fn clusterize_with_rng<R: Rng + ?Sized>(
    data: &[Point],
    config: &KMeansConfig,
    rng: &mut R,
) -> Result<KMeansResult> {
    let k = validate(data, config)?;
    let mut centroids = match &config.centroids {
        Some(centroids) => centroids.clone(),
        None => random_centroids(k, data, rng)?,
    };
    debug!(
        "k-means over {} points in {} dimensions, k = {}, initial centroids {:?}",
        data.len(),
        data[0].len(),
        k,
        centroids
    );

    let limit = config.limit.unwrap_or(usize::MAX);
    let mut iterations = 0;
    // A zero limit still reports where each point falls under the initial centroids.
    let mut clusters = assign(&centroids, data);
    while iterations < limit {
        let next = mean_centroids(&clusters, rng);
        if centroids_equal(&centroids, &next) {
            debug!("converged after {} iterations", iterations);
            break;
        }
        centroids = next;
        iterations += 1;
        trace!("iteration {}: centroids {:?}", iterations, centroids);
        if iterations == limit {
            debug!("iteration limit {} reached before convergence", limit);
            break;
        }
        clusters = assign(&centroids, data);
    }

    let total_distance = total_distance(&clusters, &centroids);
    Ok(KMeansResult {
        clusters,
        centroids,
        iterations,
        total_distance,
    })
}
