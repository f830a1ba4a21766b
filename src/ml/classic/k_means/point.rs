//! Numeric primitives shared by the k-means steps.
//!
//! Distances are floored, so they are whole numbers even when the input
//! coordinates are not.

/// A fixed-length real-valued sample. All points of one data set share the same length.
pub type Point = Vec<f64>;

/// Floored Euclidean distance between two points of the same dimension.
///
/// Mismatched lengths are not checked; the shorter point decides how many
/// coordinates take part.
pub fn euc_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b.iter())
        .fold(0.0, |acc, (&x, &y)| acc + (x - y).powi(2))
        .sqrt()
        .floor()
}

/// True if both points have the same dimension and every coordinate is exactly equal.
pub fn points_equal(a: &[f64], b: &[f64]) -> bool {
    a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x == y)
}

/// Per-dimension minimum and maximum over `points`.
///
/// The dimension is taken from the first point. An empty slice yields two
/// empty points.
pub fn min_max(points: &[Point]) -> (Point, Point) {
    let Some(first) = points.first() else {
        return (Vec::new(), Vec::new());
    };
    let mut min = first.clone();
    let mut max = first.clone();
    for point in &points[1..] {
        for (d, &value) in point.iter().enumerate().take(min.len()) {
            if value < min[d] {
                min[d] = value;
            }
            if value > max[d] {
                max[d] = value;
            }
        }
    }
    (min, max)
}

/// Floored sum of the distances from every clustered point to its cluster's centroid.
///
/// `clusters[i]` is measured against `centroids[i]`.
pub fn total_distance(clusters: &[Vec<Point>], centroids: &[Point]) -> f64 {
    clusters
        .iter()
        .zip(centroids.iter())
        .flat_map(|(members, centroid)| members.iter().map(move |p| euc_distance(centroid, p)))
        .sum::<f64>()
        .floor()
}
