//! Local-estimator formulas for spin-chain observables.
//!
//! Each observable maps a sampled configuration plus the amplitude table
//! to a scalar contribution. Diagonal terms read digit pairs directly;
//! off-diagonal (ladder) terms take a second amplitude lookup at a
//! transformed configuration and divide by the sampled state's own
//! amplitude.

use serde::{Deserialize, Serialize};
use sqv_core::errors::{ErrorInfo, SqvError};
use sqv_core::{AmplitudeTable, Configuration};

/// Ladder operator applied to a bond's digit pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LadderKind {
    /// S+S-: sets the bond pair to ("1", "0").
    RaisingLowering,
    /// S-S+: sets the bond pair to ("0", "1").
    LoweringRaising,
}

impl LadderKind {
    /// Digit pair written onto the bond by this ladder operator.
    pub fn target(self) -> (u8, u8) {
        match self {
            LadderKind::RaisingLowering => (1, 0),
            LadderKind::LoweringRaising => (0, 1),
        }
    }

    /// Digit pair on which the local estimator applies this operator.
    fn source(self) -> (u8, u8) {
        match self {
            LadderKind::RaisingLowering => (0, 1),
            LadderKind::LoweringRaising => (1, 0),
        }
    }
}

/// The closed set of supported observables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObservableKind {
    /// SzSz coupling summed over every nearest-neighbor bond.
    NearestNeighborZz,
    /// The SzSz rule evaluated at bond index 1 only. The restriction is a
    /// fixed property of the reference model, not a general bond sum.
    RestrictedZz,
    /// S+S- hopping summed over bonds whose digits read "01".
    RaisingLowering,
    /// S-S+ hopping summed over bonds whose digits read "10".
    LoweringRaising,
    /// Heisenberg coupling: -SzSz - 0.5 S+S- - 0.5 S-S+.
    Hamiltonian,
}

impl ObservableKind {
    /// The label the external simulator uses for this observable.
    pub fn label(self) -> &'static str {
        match self {
            ObservableKind::NearestNeighborZz => "SzSz",
            ObservableKind::RestrictedZz => "S2S3",
            ObservableKind::RaisingLowering => "S+S-",
            ObservableKind::LoweringRaising => "S-S+",
            ObservableKind::Hamiltonian => "H",
        }
    }
}

/// Applies a ladder operator to the digit pair at `(bond, bond + 1)`.
///
/// Panics if `bond + 1` is out of bounds; callers iterate bonds over
/// `[0, len - 2]` so the final pair is never probed improperly.
pub fn transform(config: &Configuration, bond: usize, ladder: LadderKind) -> Configuration {
    config.with_bond_pair(bond, ladder.target())
}

/// Computes the local-estimator value of `kind` for a single sample.
pub fn local_estimate(
    kind: ObservableKind,
    config: &Configuration,
    amplitudes: &AmplitudeTable,
) -> Result<f64, SqvError> {
    match kind {
        ObservableKind::NearestNeighborZz => Ok(diagonal_sum(config.bits())),
        ObservableKind::RestrictedZz => Ok(restricted_diagonal(config.bits())),
        ObservableKind::RaisingLowering => {
            ladder_sum(config, amplitudes, LadderKind::RaisingLowering)
        }
        ObservableKind::LoweringRaising => {
            ladder_sum(config, amplitudes, LadderKind::LoweringRaising)
        }
        ObservableKind::Hamiltonian => hamiltonian_estimate(config, amplitudes),
    }
}

fn bond_weight(left: u8, right: u8) -> f64 {
    if left == right {
        0.25
    } else {
        -0.25
    }
}

fn diagonal_sum(bits: &[u8]) -> f64 {
    bits.windows(2)
        .map(|pair| bond_weight(pair[0], pair[1]))
        .sum()
}

fn restricted_diagonal(bits: &[u8]) -> f64 {
    // Bond index 1 exists only for chains of three or more sites.
    if bits.len() >= 3 {
        bond_weight(bits[1], bits[2])
    } else {
        0.0
    }
}

fn ladder_sum(
    config: &Configuration,
    amplitudes: &AmplitudeTable,
    ladder: LadderKind,
) -> Result<f64, SqvError> {
    let bits = config.bits();
    let org = amplitudes.amplitude_of(config)?;
    let source = ladder.source();

    let mut total = 0.0;
    for bond in 0..bits.len().saturating_sub(1) {
        if (bits[bond], bits[bond + 1]) != source {
            continue;
        }
        if org == 0.0 {
            return Err(degenerate(config, bond));
        }
        let flipped = transform(config, bond, ladder);
        total += amplitudes.amplitude_of(&flipped)? / org;
    }
    Ok(total)
}

/// Single bond scan computing all three Heisenberg terms with one
/// denominator lookup, then combining them with the fixed coefficients.
fn hamiltonian_estimate(
    config: &Configuration,
    amplitudes: &AmplitudeTable,
) -> Result<f64, SqvError> {
    let bits = config.bits();
    let org = amplitudes.amplitude_of(config)?;

    let mut zz = 0.0;
    let mut raising = 0.0;
    let mut lowering = 0.0;
    for bond in 0..bits.len().saturating_sub(1) {
        let pair = (bits[bond], bits[bond + 1]);
        zz += bond_weight(pair.0, pair.1);
        let ladder = match pair {
            (0, 1) => LadderKind::RaisingLowering,
            (1, 0) => LadderKind::LoweringRaising,
            _ => continue,
        };
        if org == 0.0 {
            return Err(degenerate(config, bond));
        }
        let ratio = amplitudes.amplitude_of(&transform(config, bond, ladder))? / org;
        match ladder {
            LadderKind::RaisingLowering => raising += ratio,
            LadderKind::LoweringRaising => lowering += ratio,
        }
    }

    Ok(-zz - 0.5 * raising - 0.5 * lowering)
}

fn degenerate(config: &Configuration, bond: usize) -> SqvError {
    SqvError::DegenerateAmplitude(
        ErrorInfo::new(
            "zero-denominator",
            "sampled state has zero amplitude but an off-diagonal bond matched",
        )
        .with_context("configuration", config.to_string())
        .with_context("bond", bond.to_string()),
    )
}
