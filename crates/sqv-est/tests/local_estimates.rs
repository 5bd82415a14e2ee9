use proptest::prelude::*;
use sqv_est::{local_estimate, transform, LadderKind, ObservableKind};
use sqv_core::{AmplitudeTable, Configuration, SqvError};

/// Reference three-qubit wavefunction used throughout: amplitudes
/// [1, 0, 0, 4, 0, 2, 1, 0] / sqrt(8).
fn reference_table() -> AmplitudeTable {
    let norm = 8f64.sqrt();
    AmplitudeTable::new(
        [1.0, 0.0, 0.0, 4.0, 0.0, 2.0, 1.0, 0.0]
            .iter()
            .map(|v| v / norm)
            .collect::<Vec<_>>(),
    )
    .unwrap()
}

fn config(text: &str) -> Configuration {
    Configuration::parse(text).unwrap()
}

#[test]
fn transform_writes_raising_pattern() {
    let flipped = transform(&config("1010"), 1, LadderKind::RaisingLowering);
    assert_eq!(flipped.to_string(), "1100");
}

#[test]
fn transform_writes_lowering_pattern() {
    let flipped = transform(&config("1010"), 2, LadderKind::LoweringRaising);
    assert_eq!(flipped.to_string(), "1001");
}

#[test]
fn nearest_neighbor_zz_sums_all_bonds() {
    let table = reference_table();
    let value = local_estimate(ObservableKind::NearestNeighborZz, &config("101"), &table).unwrap();
    assert_eq!(value, -0.5);
    let value = local_estimate(ObservableKind::NearestNeighborZz, &config("011"), &table).unwrap();
    assert_eq!(value, 0.0);
}

#[test]
fn restricted_zz_reads_bond_one_only() {
    let table = reference_table();
    let value = local_estimate(ObservableKind::RestrictedZz, &config("101"), &table).unwrap();
    assert_eq!(value, -0.25);
    let value = local_estimate(ObservableKind::RestrictedZz, &config("011"), &table).unwrap();
    assert_eq!(value, 0.25);
}

#[test]
fn restricted_zz_vanishes_below_three_sites() {
    let table = AmplitudeTable::new(vec![0.5, 0.5, 0.5, 0.5]).unwrap();
    let value = local_estimate(ObservableKind::RestrictedZz, &config("11"), &table).unwrap();
    assert_eq!(value, 0.0);
}

#[test]
fn raising_lowering_takes_amplitude_ratio() {
    let table = reference_table();
    let value = local_estimate(ObservableKind::RaisingLowering, &config("101"), &table).unwrap();
    assert_eq!(value, 0.5);
    let value = local_estimate(ObservableKind::RaisingLowering, &config("000"), &table).unwrap();
    assert_eq!(value, 0.0);
}

#[test]
fn lowering_raising_takes_amplitude_ratio() {
    let table = reference_table();
    let value = local_estimate(ObservableKind::LoweringRaising, &config("101"), &table).unwrap();
    assert_eq!(value, 2.0);
    let value = local_estimate(ObservableKind::LoweringRaising, &config("000"), &table).unwrap();
    assert_eq!(value, 0.0);
}

#[test]
fn hamiltonian_combines_fixed_coefficients() {
    let table = reference_table();
    let value = local_estimate(ObservableKind::Hamiltonian, &config("101"), &table).unwrap();
    // -(-0.5) - 0.5 * 0.5 - 0.5 * 2.0
    assert_eq!(value, -0.75);
}

#[test]
fn zero_amplitude_on_matching_bond_is_degenerate() {
    let table = reference_table();
    // "010" has amplitude zero and its first bond reads "01".
    let err = local_estimate(ObservableKind::RaisingLowering, &config("010"), &table).unwrap_err();
    assert!(matches!(err, SqvError::DegenerateAmplitude(_)));
    assert_eq!(err.info().code, "zero-denominator");
}

#[test]
fn zero_amplitude_without_matching_bond_is_fine() {
    let table = reference_table();
    // "001" has amplitude zero but no "10" bond, so nothing divides by it.
    let value = local_estimate(ObservableKind::LoweringRaising, &config("001"), &table).unwrap();
    assert_eq!(value, 0.0);
    // Diagonal estimates never divide at all.
    let value = local_estimate(ObservableKind::NearestNeighborZz, &config("010"), &table).unwrap();
    assert_eq!(value, -0.5);
}

#[test]
fn observable_labels_match_simulator_vocabulary() {
    assert_eq!(ObservableKind::NearestNeighborZz.label(), "SzSz");
    assert_eq!(ObservableKind::RestrictedZz.label(), "S2S3");
    assert_eq!(ObservableKind::RaisingLowering.label(), "S+S-");
    assert_eq!(ObservableKind::LoweringRaising.label(), "S-S+");
    assert_eq!(ObservableKind::Hamiltonian.label(), "H");
}

proptest! {
    #[test]
    fn ladder_pair_round_trips_on_matching_bond(
        len in 2usize..10,
        seed in any::<usize>(),
        bond_seed in any::<usize>(),
    ) {
        let bond = bond_seed % (len - 1);
        let mut bits: Vec<u8> = (0..len).map(|pos| ((seed >> pos) & 1) as u8).collect();
        // Force the bond into the "01" state the raising operator acts on.
        bits[bond] = 0;
        bits[bond + 1] = 1;
        let original = Configuration::from_bits(bits).unwrap();

        let raised = transform(&original, bond, LadderKind::RaisingLowering);
        let restored = transform(&raised, bond, LadderKind::LoweringRaising);
        prop_assert_eq!(restored, original);
    }
}
