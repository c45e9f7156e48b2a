//! Default values shared by the config structs.

pub use crate::constants::{
    DEFAULT_EPS, DEFAULT_MAX_ITER, DEFAULT_MIN_SAMPLES, DEFAULT_TOLERANCE,
};

/// Default cluster count for k-means.
pub const DEFAULT_N_CLUSTERS: usize = 8;

/// Default RNG seed for k-means++ initialisation.
pub const DEFAULT_SEED: u64 = 0;
