//! Ordered sample corpora produced by the external simulator.

use serde::{Deserialize, Serialize};

use crate::basis::Configuration;
use crate::errors::{ErrorInfo, SqvError};

/// An ordered sequence of sampled configurations.
///
/// Insertion order is sampling order; the convergence tracker depends on
/// it, the frequency verifier does not. All samples share one chain
/// length, enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleCorpus {
    samples: Vec<Configuration>,
}

impl SampleCorpus {
    /// Creates a corpus, rejecting samples whose length disagrees with
    /// the first sample.
    pub fn new(samples: Vec<Configuration>) -> Result<Self, SqvError> {
        if let Some(first) = samples.first() {
            let expected = first.len();
            for (position, sample) in samples.iter().enumerate() {
                if sample.len() != expected {
                    let info = ErrorInfo::new(
                        "sample-length-mismatch",
                        "sample length disagrees with the rest of the corpus",
                    )
                    .with_context("position", position.to_string())
                    .with_context("expected_len", expected.to_string())
                    .with_context("found_len", sample.len().to_string());
                    return Err(SqvError::UnknownConfiguration(info));
                }
            }
        }
        Ok(Self { samples })
    }

    /// Chain length shared by all samples, or `None` for an empty corpus.
    pub fn num_qubits(&self) -> Option<usize> {
        self.samples.first().map(Configuration::len)
    }

    /// Number of samples in the corpus.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True when the corpus holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Iterates samples in sampling order.
    pub fn iter(&self) -> impl Iterator<Item = &Configuration> {
        self.samples.iter()
    }

    /// Returns the samples in sampling order.
    pub fn samples(&self) -> &[Configuration] {
        &self.samples
    }
}
