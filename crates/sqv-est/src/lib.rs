#![deny(missing_docs)]
#![doc = "Observable estimation engine: per-sample local estimators for spin-chain observables and convergence tracking of their running averages against exact reference values."]

/// Local-estimator formulas and the closed observable set.
pub mod observable;
/// Running-average accumulation and checkpointed relative errors.
pub mod tracker;

pub use observable::{local_estimate, transform, LadderKind, ObservableKind};
pub use tracker::{run, CheckpointSet, ConvergenceResult};
