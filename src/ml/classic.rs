pub mod k_means;

// Re-export public types and functions
pub use k_means::{clusterize, clusterize_with_rng, KMeansConfig, KMeansResult, Point};
