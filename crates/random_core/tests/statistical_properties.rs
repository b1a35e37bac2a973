//! Statistical properties of the sampling operations.
//!
//! Tests verifying:
//! - Range containment of uniform draws (property-based)
//! - Identifier collision rate against the birthday bound
//! - Independence of the two halves of a 128-bit identifier
//! - Uniformity of sequence indices
//! - Membership and frequency of list picks
//! - Bounded normal draws and percentage extremes

use approx::assert_abs_diff_eq;
use proptest::prelude::*;
use random_core::{facade, RandomError, Randomizer};
use std::collections::HashSet;

/// Pearson chi-square statistic against a uniform expectation.
fn chi_square(counts: &[usize]) -> f64 {
    let total: usize = counts.iter().sum();
    let expected = total as f64 / counts.len() as f64;
    counts
        .iter()
        .map(|&observed| {
            let diff = observed as f64 - expected;
            diff * diff / expected
        })
        .sum()
}

// ============================================================================
// Range containment
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn test_number_integer_within_bounds(
        a in any::<i64>(),
        b in any::<i64>(),
        seed in any::<u64>(),
    ) {
        let (min, max) = if a <= b { (a, b) } else { (b, a) };
        let mut randomizer = Randomizer::from_seed(seed);
        for _ in 0..20 {
            let value = randomizer.number(min, max).unwrap();
            prop_assert!(value >= min && value <= max);
        }
    }

    #[test]
    fn test_number_float_within_bounds(
        a in -1.0e9f64..1.0e9,
        b in -1.0e9f64..1.0e9,
        seed in any::<u64>(),
    ) {
        let (min, max) = if a <= b { (a, b) } else { (b, a) };
        let mut randomizer = Randomizer::from_seed(seed);
        for _ in 0..20 {
            let value = randomizer.number(min, max).unwrap();
            prop_assert!(value >= min && value <= max);
        }
    }

    #[test]
    fn test_number_inverted_bounds_rejected(a in any::<i32>(), b in any::<i32>()) {
        prop_assume!(a != b);
        let (min, max) = if a <= b { (a, b) } else { (b, a) };
        let is_invalid_range = matches!(
            facade::number(max, min),
            Err(RandomError::InvalidRange { .. })
        );
        prop_assert!(is_invalid_range);
    }

    #[test]
    fn test_index_within_sequence(len in 1usize..500, seed in any::<u64>()) {
        let sequence = vec![(); len];
        let mut randomizer = Randomizer::from_seed(seed);
        for _ in 0..20 {
            prop_assert!(randomizer.index(&sequence).unwrap() < len);
        }
    }

    #[test]
    fn test_weighted_number_in_within_bounds(
        mean in -50.0f64..50.0,
        std_dev in 0.1f64..20.0,
        seed in any::<u64>(),
    ) {
        // The interval always contains the mean, so rejection converges fast.
        let (min, max) = (mean - std_dev, mean + 2.0 * std_dev);
        let mut randomizer = Randomizer::from_seed(seed);
        for _ in 0..20 {
            let value = randomizer.weighted_number_in(min, max, mean, std_dev).unwrap();
            prop_assert!(value >= min && value <= max);
        }
    }
}

// ============================================================================
// Identifiers
// ============================================================================

#[test]
fn test_uuid_no_collisions() {
    let n = 100_000;
    let ids: HashSet<u64> = (0..n).map(|_| facade::uuid()).collect();
    // Birthday bound: P(collision) ≈ n² / 2⁶⁵ ≈ 3e-10.
    assert_eq!(ids.len(), n);
}

#[test]
fn test_uuid128_no_collisions() {
    let n = 50_000;
    let ids: HashSet<_> = (0..n).map(|_| facade::uuid128()).collect();
    assert_eq!(ids.len(), n);
}

#[test]
fn test_uuid128_halves_independent() {
    let mut randomizer = Randomizer::from_seed(2024);
    let n = 160_000;

    // Joint distribution of the top two bits of each half: 16 cells.
    let mut cells = [0usize; 16];
    for _ in 0..n {
        let id = randomizer.uuid128();
        let high = (id.high() >> 62) as usize;
        let low = (id.low() >> 62) as usize;
        cells[high * 4 + low] += 1;
    }

    // df = 15; the 0.001 critical value is 37.7.
    let statistic = chi_square(&cells);
    assert!(statistic < 45.0, "chi-square {} too large", statistic);
}

// ============================================================================
// Index operations
// ============================================================================

#[test]
fn test_index_uniform() {
    let mut randomizer = Randomizer::from_seed(77);
    let sequence = ['a', 'b', 'c', 'd', 'e', 'f'];
    let mut counts = [0usize; 6];

    for _ in 0..60_000 {
        counts[randomizer.index(&sequence).unwrap()] += 1;
    }

    // df = 5; the 0.001 critical value is 20.5.
    let statistic = chi_square(&counts);
    assert!(statistic < 25.0, "chi-square {} too large", statistic);
}

#[test]
fn test_index_empty_sequence() {
    let empty: Vec<String> = Vec::new();
    assert_eq!(facade::index(&empty), Err(RandomError::EmptyInput));
}

#[test]
fn test_pick_from_list_membership_and_frequency() {
    let indices = [5u32, 2, 9];
    let n = 10_000;
    let mut counts = [0usize; 3];

    for _ in 0..n {
        let picked = facade::pick_from_list(&indices).unwrap();
        let slot = indices
            .iter()
            .position(|&candidate| candidate == picked)
            .expect("picked value must come from the list");
        counts[slot] += 1;
    }

    for count in counts {
        assert_abs_diff_eq!(count as f64 / n as f64, 1.0 / 3.0, epsilon = 0.03);
    }
}

// ============================================================================
// Normal draws and percentages
// ============================================================================

#[test]
fn test_weighted_number_in_scenario() {
    let n = 10_000;
    let mut sum = 0.0;

    for _ in 0..n {
        let value: f64 = facade::weighted_number_in(0.0, 10.0, 5.0, 1.0).unwrap();
        assert!((0.0..=10.0).contains(&value));
        sum += value;
    }

    assert_abs_diff_eq!(sum / n as f64, 5.0, epsilon = 0.05);
}

#[test]
fn test_percentage_extremes() {
    for _ in 0..100_000 {
        assert!(!facade::percentage(0));
        assert!(facade::percentage(100));
    }
}
