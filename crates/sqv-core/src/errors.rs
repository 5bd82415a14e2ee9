//! Structured error types shared across SQV crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`SqvError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (indices, lengths, paths, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for the SQV verifier.
///
/// Every variant is unrecoverable for the check in progress: the caller
/// aborts that check and reports the failure instead of continuing with
/// partial statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum SqvError {
    /// A configuration encoding exceeds the amplitude table bounds, or a
    /// checkpoint index exceeds the corpus bounds.
    #[error("index out of range: {0}")]
    IndexOutOfRange(ErrorInfo),
    /// A sample does not match any configuration in the enumerated space.
    #[error("unknown configuration: {0}")]
    UnknownConfiguration(ErrorInfo),
    /// An off-diagonal local estimate divided by a zero amplitude.
    #[error("degenerate amplitude: {0}")]
    DegenerateAmplitude(ErrorInfo),
    /// The exact reference value makes the relative error undefined.
    #[error("invalid reference value: {0}")]
    InvalidReferenceValue(ErrorInfo),
    /// An input record cannot be parsed into the expected scalar or bit format.
    #[error("malformed record: {0}")]
    MalformedRecord(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl SqvError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            SqvError::IndexOutOfRange(info)
            | SqvError::UnknownConfiguration(info)
            | SqvError::DegenerateAmplitude(info)
            | SqvError::InvalidReferenceValue(info)
            | SqvError::MalformedRecord(info) => info,
        }
    }
}
