//! Random centroid initialization.
//!
//! Candidates are drawn coordinate by coordinate inside the bounding box of the
//! data and floored onto the integer lattice. All draws go through a caller
//! supplied [`Rng`], so a seeded or mocked generator reproduces them exactly.

use log::trace;
use rand::Rng;

use super::point::{min_max, points_equal, Point};
use crate::error::{InvalidInput, Result};

/// Floored uniform draw from `[min, max]`: `floor(u * (max - min + 1) + min)` with `u` in `[0, 1)`.
///
/// For integer bounds the result is an integer in `[min, max]` inclusive.
pub fn random<R: Rng + ?Sized>(min: f64, max: f64, rng: &mut R) -> f64 {
    // u close to 1 can round the sum up to max + 1
    (rng.gen::<f64>() * (max - min + 1.0) + min)
        .floor()
        .min(max.ceil())
}

/// Draws `k` pairwise-distinct centroids inside the per-dimension range of `points`.
///
/// Candidates equal to an already chosen centroid are rejected and redrawn.
/// Fails with [`InvalidInput::InsufficientSpread`] when the range holds fewer
/// than `k` lattice positions, since sampling could then never finish.
pub fn random_centroids<R: Rng + ?Sized>(
    k: usize,
    points: &[Point],
    rng: &mut R,
) -> Result<Vec<Point>> {
    let available = distinct_positions(points);
    if (k as u64) > available {
        return Err(InvalidInput::InsufficientSpread { k, available }.into());
    }

    let (min, max) = min_max(points);
    let mut centroids: Vec<Point> = Vec::new();
    while centroids.len() < k {
        let candidate = sample_point(&min, &max, rng);
        if centroids.iter().any(|c| points_equal(c, &candidate)) {
            trace!("rejected duplicate candidate centroid {:?}", candidate);
            continue;
        }
        centroids.push(candidate);
    }
    Ok(centroids)
}

/// Number of distinct points [`random`] can produce inside the range of `points`, saturating.
///
/// Per dimension, `floor(u * (max - min + 1) + min)` covers every integer
/// from `floor(min)` to `ceil(max)`. A span that overflows to infinity makes
/// every draw land on `max`, so such a dimension counts as one position.
pub fn distinct_positions(points: &[Point]) -> u64 {
    let (min, max) = min_max(points);
    min.iter()
        .zip(max.iter())
        .map(|(&lo, &hi)| {
            if (hi - lo + 1.0).is_finite() {
                (hi.ceil() - lo.floor() + 1.0) as u64
            } else {
                1
            }
        })
        .fold(1u64, |acc, n| acc.saturating_mul(n))
}

/// One candidate point with every coordinate drawn independently from `[min[d], max[d]]`.
pub(crate) fn sample_point<R: Rng + ?Sized>(min: &[f64], max: &[f64], rng: &mut R) -> Point {
    min.iter()
        .zip(max.iter())
        .map(|(&lo, &hi)| random(lo, hi, rng))
        .collect()
}
