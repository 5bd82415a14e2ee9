#![deny(missing_docs)]
#![doc = "Line-oriented loaders for the simulator's flat files: amplitudes in canonical enumeration order, samples in sampling order, and exact observable reference values."]

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use sqv_core::errors::{ErrorInfo, SqvError};
use sqv_core::{AmplitudeTable, Configuration, SampleCorpus};

/// Exact expectation values written by the simulator, one per supported
/// reference observable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceValues {
    /// Exact value of the bond-restricted SzSz observable ("S2S3").
    pub restricted_zz: f64,
    /// Exact value of the Heisenberg Hamiltonian ("H").
    pub hamiltonian: f64,
}

fn read_lines(path: &Path) -> Result<Vec<String>, SqvError> {
    let text = fs::read_to_string(path).map_err(|err| {
        SqvError::MalformedRecord(
            ErrorInfo::new("file-read", err.to_string())
                .with_context("path", path.display().to_string()),
        )
    })?;
    Ok(text.lines().map(str::to_owned).collect())
}

/// Loads an amplitude table: one record per line, first whitespace
/// separated token is the amplitude. Blank lines are skipped.
pub fn load_amplitudes(path: impl AsRef<Path>) -> Result<AmplitudeTable, SqvError> {
    let path = path.as_ref();
    let mut values = Vec::new();
    for (line_no, line) in read_lines(path)?.iter().enumerate() {
        let Some(token) = line.split_whitespace().next() else {
            continue;
        };
        let value: f64 = token.parse().map_err(|_| {
            SqvError::MalformedRecord(
                ErrorInfo::new("bad-amplitude", "amplitude token is not a decimal number")
                    .with_context("path", path.display().to_string())
                    .with_context("line", (line_no + 1).to_string())
                    .with_context("token", token.to_string()),
            )
        })?;
        values.push(value);
    }
    AmplitudeTable::new(values)
}

/// Loads a sample corpus: one sample per line, digits possibly space
/// separated. Blank lines are skipped.
pub fn load_samples(path: impl AsRef<Path>) -> Result<SampleCorpus, SqvError> {
    let path = path.as_ref();
    let mut samples = Vec::new();
    for (line_no, line) in read_lines(path)?.iter().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let config = Configuration::parse(line).map_err(|err| {
            let info = err
                .info()
                .clone()
                .with_context("path", path.display().to_string())
                .with_context("line", (line_no + 1).to_string());
            SqvError::MalformedRecord(info)
        })?;
        samples.push(config);
    }
    SampleCorpus::new(samples)
}

/// Loads the observables reference file: exactly two lines,
/// `S2S3 <value>` then `H <value>`.
pub fn load_reference(path: impl AsRef<Path>) -> Result<ReferenceValues, SqvError> {
    let path = path.as_ref();
    let lines = read_lines(path)?;
    let restricted_zz = labeled_value(path, &lines, 0, "S2S3")?;
    let hamiltonian = labeled_value(path, &lines, 1, "H")?;
    Ok(ReferenceValues {
        restricted_zz,
        hamiltonian,
    })
}

fn labeled_value(
    path: &Path,
    lines: &[String],
    line_no: usize,
    label: &str,
) -> Result<f64, SqvError> {
    let malformed = |code: &str, message: &str| {
        SqvError::MalformedRecord(
            ErrorInfo::new(code, message)
                .with_context("path", path.display().to_string())
                .with_context("line", (line_no + 1).to_string())
                .with_context("expected_label", label.to_string()),
        )
    };

    let line = lines
        .get(line_no)
        .ok_or_else(|| malformed("missing-reference-line", "observables file is too short"))?;
    let mut tokens = line.split_whitespace();
    match tokens.next() {
        Some(found) if found == label => {}
        _ => return Err(malformed("reference-label-mismatch", "unexpected observable label")),
    }
    let token = tokens
        .next()
        .ok_or_else(|| malformed("missing-reference-value", "observable line has no value"))?;
    token
        .parse()
        .map_err(|_| malformed("bad-reference-value", "observable value is not a decimal number"))
}
