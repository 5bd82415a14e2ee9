//! Read-only amplitude lookup indexed by configuration encoding.

use serde::{Deserialize, Serialize};

use crate::basis::Configuration;
use crate::errors::{ErrorInfo, SqvError};

/// Wavefunction amplitudes in canonical binary enumeration order.
///
/// The table stores real amplitudes only; the estimator never reads an
/// imaginary component. This is an inherent modeling limitation of the
/// source estimator, not an approximation made here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmplitudeTable {
    values: Box<[f64]>,
}

impl AmplitudeTable {
    /// Creates a table from amplitudes in canonical enumeration order.
    ///
    /// Non-finite values are rejected rather than silently coerced.
    pub fn new(values: impl Into<Vec<f64>>) -> Result<Self, SqvError> {
        let values_vec: Vec<f64> = values.into();
        if let Some(pos) = values_vec.iter().position(|v| !v.is_finite()) {
            let info = ErrorInfo::new("non-finite-amplitude", "amplitude must be a finite real")
                .with_context("position", pos.to_string());
            return Err(SqvError::MalformedRecord(info));
        }
        Ok(Self {
            values: values_vec.into_boxed_slice(),
        })
    }

    /// Returns the amplitude for the given configuration.
    pub fn amplitude_of(&self, config: &Configuration) -> Result<f64, SqvError> {
        let index = config.index();
        self.values.get(index).copied().ok_or_else(|| {
            let info = ErrorInfo::new(
                "amplitude-index-out-of-range",
                "configuration encoding exceeds the amplitude table",
            )
            .with_context("index", index.to_string())
            .with_context("table_len", self.values.len().to_string())
            .with_hint("check that the table covers 2^N entries for the sampled chain length");
            SqvError::IndexOutOfRange(info)
        })
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the table holds no amplitudes.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the stored amplitudes in enumeration order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}
