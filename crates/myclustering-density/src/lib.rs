//! # myclustering-density
//!
//! DBSCAN. Core points (at least `min_samples` neighbours within `eps`,
//! self included) seed clusters that grow breadth-first through other core
//! points; border points join the cluster that reaches them first;
//! everything else is noise.

mod engine;

pub use engine::Dbscan;
