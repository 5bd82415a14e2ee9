//! Convergence tracking of running local-estimator averages.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use sqv_core::errors::{ErrorInfo, SqvError};
use sqv_core::{AmplitudeTable, SampleCorpus};

use crate::observable::{local_estimate, ObservableKind};

/// Sample positions at which the running average is compared against the
/// exact reference value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CheckpointSet {
    indices: BTreeSet<usize>,
}

impl CheckpointSet {
    /// Creates a checkpoint set from sample positions (duplicates collapse).
    pub fn new(indices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            indices: indices.into_iter().collect(),
        }
    }

    /// True when the given position is a checkpoint.
    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    /// Number of checkpoints.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// True when no checkpoints are set.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Largest checkpoint position, if any.
    pub fn last(&self) -> Option<usize> {
        self.indices.iter().next_back().copied()
    }

    /// Iterates checkpoint positions in increasing order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }
}

/// Relative errors recorded at each checkpoint, plus the error at the
/// final processed sample regardless of whether it was a checkpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvergenceResult {
    /// Relative error `|exact - total/(i+1)| / |exact|` per checkpoint.
    pub checkpoints: BTreeMap<usize, f64>,
    /// Relative error at the last processed sample position.
    pub final_error: f64,
}

/// Drives the local estimator over the corpus in sampling order,
/// accumulating a running average and recording the relative error
/// against `exact_value` at each checkpoint.
///
/// Pure function of its inputs: repeated runs yield bit-identical
/// results. `O(|samples| * bondCount)`.
pub fn run(
    kind: ObservableKind,
    checkpoints: &CheckpointSet,
    amplitudes: &AmplitudeTable,
    samples: &SampleCorpus,
    exact_value: f64,
) -> Result<ConvergenceResult, SqvError> {
    if exact_value == 0.0 || !exact_value.is_finite() {
        let info = ErrorInfo::new(
            "unusable-reference",
            "relative error is undefined for a zero or non-finite exact value",
        )
        .with_context("exact_value", exact_value.to_string());
        return Err(SqvError::InvalidReferenceValue(info));
    }
    if samples.is_empty() {
        let info = ErrorInfo::new("empty-corpus", "cannot track convergence over zero samples");
        return Err(SqvError::MalformedRecord(info));
    }
    if checkpoints.is_empty() {
        let info = ErrorInfo::new("empty-checkpoint-set", "at least one checkpoint is required");
        return Err(SqvError::IndexOutOfRange(info));
    }
    if let Some(last) = checkpoints.last() {
        if last >= samples.len() {
            let info = ErrorInfo::new(
                "checkpoint-out-of-range",
                "checkpoint position exceeds the corpus",
            )
            .with_context("checkpoint", last.to_string())
            .with_context("corpus_len", samples.len().to_string());
            return Err(SqvError::IndexOutOfRange(info));
        }
    }

    let mut total = 0.0;
    let mut recorded = BTreeMap::new();
    let mut final_error = 0.0;
    for (position, sample) in samples.iter().enumerate() {
        total += local_estimate(kind, sample, amplitudes)?;
        let running = total / (position + 1) as f64;
        let relative = (exact_value - running).abs() / exact_value.abs();
        if checkpoints.contains(position) {
            recorded.insert(position, relative);
        }
        final_error = relative;
    }

    Ok(ConvergenceResult {
        checkpoints: recorded,
        final_error,
    })
}
