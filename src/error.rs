use thiserror::Error;

/// Errors produced by the clustering routines in this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
}

/// The precondition that rejected a clustering run.
///
/// Every variant is detected before the first iteration, so an error never
/// comes with a partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("k should be greater than 1, got {0}")]
    TooFewClusters(usize),
    #[error("data set is empty")]
    EmptyData,
    #[error("k ({k}) is not equal to the number of centroids provided ({centroids})")]
    CentroidCountMismatch { k: usize, centroids: usize },
    #[error("k must be provided together with centroids")]
    CentroidsWithoutK,
    #[error("k must be provided when no centroids are given")]
    MissingK,
    #[error("points must have at least one dimension")]
    EmptyPoint,
    #[error("{what} {index} has {found} dimensions, expected {expected}")]
    DimensionMismatch {
        what: &'static str,
        index: usize,
        expected: usize,
        found: usize,
    },
    #[error("{what} {index} contains a non-finite value")]
    NonFinite { what: &'static str, index: usize },
    #[error("data range admits only {available} distinct centroid positions, k = {k}")]
    InsufficientSpread { k: usize, available: u64 },
}

pub type Result<T> = std::result::Result<T, Error>;
