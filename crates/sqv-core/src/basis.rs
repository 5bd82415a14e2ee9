//! Basis-state configurations and their canonical integer encoding.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, SqvError};

/// A basis state of the spin chain: one binary digit per qubit, most
/// significant digit first. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Configuration {
    bits: Box<[u8]>,
}

impl Configuration {
    /// Creates a configuration from raw bits.
    ///
    /// Rejects empty sequences, digits other than 0/1, and lengths whose
    /// integer encoding would not fit in `usize`.
    pub fn from_bits(bits: impl Into<Vec<u8>>) -> Result<Self, SqvError> {
        let bits_vec: Vec<u8> = bits.into();
        if bits_vec.is_empty() {
            let info = ErrorInfo::new("empty-configuration", "configuration has no digits");
            return Err(SqvError::MalformedRecord(info));
        }
        if bits_vec.len() >= usize::BITS as usize {
            let info = ErrorInfo::new(
                "configuration-too-long",
                "configuration encoding does not fit the index type",
            )
            .with_context("len", bits_vec.len().to_string());
            return Err(SqvError::MalformedRecord(info));
        }
        if bits_vec.iter().any(|&b| b > 1) {
            let info = ErrorInfo::new("invalid-digit", "configuration digits must be 0 or 1");
            return Err(SqvError::MalformedRecord(info));
        }
        Ok(Self {
            bits: bits_vec.into_boxed_slice(),
        })
    }

    /// Parses a configuration from a digit string, ignoring whitespace
    /// between digits (the simulator writes digits space separated).
    pub fn parse(text: &str) -> Result<Self, SqvError> {
        let mut bits = Vec::with_capacity(text.len());
        for ch in text.chars() {
            match ch {
                '0' => bits.push(0u8),
                '1' => bits.push(1u8),
                c if c.is_whitespace() => continue,
                other => {
                    let info =
                        ErrorInfo::new("invalid-digit", "configuration digits must be 0 or 1")
                            .with_context("found", other.to_string());
                    return Err(SqvError::MalformedRecord(info));
                }
            }
        }
        Self::from_bits(bits)
    }

    /// Reconstructs the configuration with the given encoding and length,
    /// inverting [`Configuration::index`].
    pub fn from_index(index: usize, len: usize) -> Result<Self, SqvError> {
        if len == 0 || len >= usize::BITS as usize {
            let info = ErrorInfo::new("invalid-length", "configuration length out of range")
                .with_context("len", len.to_string());
            return Err(SqvError::MalformedRecord(info));
        }
        if index >= 1usize << len {
            let info = ErrorInfo::new(
                "encoding-out-of-range",
                "integer encoding exceeds the configuration space",
            )
            .with_context("index", index.to_string())
            .with_context("len", len.to_string());
            return Err(SqvError::MalformedRecord(info));
        }
        let bits: Vec<u8> = (0..len)
            .map(|pos| ((index >> (len - 1 - pos)) & 1) as u8)
            .collect();
        Ok(Self {
            bits: bits.into_boxed_slice(),
        })
    }

    /// Enumerates all `2^len` configurations in canonical binary order.
    pub fn enumerate(len: usize) -> Result<Vec<Self>, SqvError> {
        (0..1usize << len.min(usize::BITS as usize - 1))
            .map(|index| Self::from_index(index, len))
            .collect()
    }

    /// Returns the digits of the configuration.
    pub fn bits(&self) -> &[u8] {
        &self.bits
    }

    /// Number of qubits in the configuration.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Always false: empty configurations are rejected at construction.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Returns a copy with the digit pair at `(bond, bond + 1)` replaced.
    ///
    /// Panics if `bond + 1` is out of bounds; bond iteration never probes
    /// past the final site pair.
    pub fn with_bond_pair(&self, bond: usize, pair: (u8, u8)) -> Self {
        let mut bits = self.bits.to_vec();
        bits[bond] = pair.0 & 1;
        bits[bond + 1] = pair.1 & 1;
        Self {
            bits: bits.into_boxed_slice(),
        }
    }

    /// Integer encoding of the configuration, most significant digit first.
    pub fn index(&self) -> usize {
        self.bits
            .iter()
            .fold(0usize, |acc, &bit| (acc << 1) | usize::from(bit))
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.bits.iter() {
            write!(f, "{bit}")?;
        }
        Ok(())
    }
}
