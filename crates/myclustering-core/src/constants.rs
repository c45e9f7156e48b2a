/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default convergence tolerance for centroid-based fitting.
pub const DEFAULT_TOLERANCE: f64 = 1e-4;

/// Default iteration cap for centroid-update loops.
pub const DEFAULT_MAX_ITER: usize = 300;

/// Default DBSCAN neighbourhood radius.
pub const DEFAULT_EPS: f64 = 0.5;

/// Default DBSCAN core-point threshold (self included).
pub const DEFAULT_MIN_SAMPLES: usize = 5;
