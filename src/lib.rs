pub mod error;
pub mod ml;

pub use error::{Error, InvalidInput, Result};
pub use ml::classic::{clusterize, clusterize_with_rng, KMeansConfig, KMeansResult, Point};
