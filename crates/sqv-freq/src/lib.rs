#![deny(missing_docs)]
#![doc = "Frequency verification: compares observed occurrence counts of sampled configurations against counts predicted by the squared wavefunction amplitudes."]

use serde::{Deserialize, Serialize};
use sqv_core::errors::{ErrorInfo, SqvError};
use sqv_core::{AmplitudeTable, Configuration, SampleCorpus};

/// Observed and expected occurrence counts over the full configuration
/// space, in canonical binary enumeration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyResult {
    /// All `2^N` configurations in canonical order.
    pub configs: Vec<Configuration>,
    /// Observed occurrence count per configuration.
    pub observed: Vec<u64>,
    /// Expected count per configuration: `floor(sampleCount * amplitude^2)`.
    pub expected: Vec<u64>,
}

impl FrequencyResult {
    /// Total number of samples accounted for by the observed counts.
    pub fn total_observed(&self) -> u64 {
        self.observed.iter().sum()
    }
}

/// Counts configuration occurrences over the corpus and compares them to
/// the counts predicted by the amplitude table.
///
/// The chain length N is taken from the first sample; the amplitude
/// table must hold exactly `2^N` entries. Single deterministic pass,
/// `O(|samples| + 2^N)`.
pub fn verify(
    amplitudes: &AmplitudeTable,
    samples: &SampleCorpus,
) -> Result<FrequencyResult, SqvError> {
    let Some(num_qubits) = samples.num_qubits() else {
        let info = ErrorInfo::new("empty-corpus", "cannot derive chain length from zero samples");
        return Err(SqvError::MalformedRecord(info));
    };

    let space = 1usize << num_qubits;
    if amplitudes.len() != space {
        let info = ErrorInfo::new(
            "table-size-mismatch",
            "amplitude table does not cover the sampled configuration space",
        )
        .with_context("table_len", amplitudes.len().to_string())
        .with_context("expected_len", space.to_string())
        .with_context("num_qubits", num_qubits.to_string());
        return Err(SqvError::IndexOutOfRange(info));
    }

    // Fixed-size count array indexed by the configuration encoding.
    let mut observed = vec![0u64; space];
    for (position, sample) in samples.iter().enumerate() {
        if sample.len() != num_qubits {
            let info = ErrorInfo::new(
                "sample-outside-space",
                "sample does not match any enumerated configuration",
            )
            .with_context("position", position.to_string())
            .with_context("found_len", sample.len().to_string())
            .with_context("expected_len", num_qubits.to_string());
            return Err(SqvError::UnknownConfiguration(info));
        }
        observed[sample.index()] += 1;
    }

    let configs = Configuration::enumerate(num_qubits)?;
    let sample_count = samples.len() as f64;
    let mut expected = Vec::with_capacity(space);
    for config in &configs {
        let amplitude = amplitudes.amplitude_of(config)?;
        expected.push((sample_count * amplitude * amplitude).floor() as u64);
    }

    Ok(FrequencyResult {
        configs,
        observed,
        expected,
    })
}
