use detrand::generator::{GeneratorError, RangeGenerator};

#[test]
fn zero_range_is_rejected() {
    let result = RangeGenerator::new(7, 0);
    assert!(matches!(result, Err(GeneratorError::InvalidRange)));
}

#[test]
fn accessors_report_construction_parameters() {
    let generator = RangeGenerator::new(42, 10).unwrap();

    assert_eq!(generator.seed(), 42);
    assert_eq!(generator.range(), 10);
}

#[test]
fn same_seed_same_sequence() {
    let pairs: [(u64, u64); 4] = [(42, 10), (7, 1000), (123456789, 6), (2026, (1 << 63) + 1)];

    for (seed, range) in pairs {
        let mut a = RangeGenerator::new(seed, range).unwrap();
        let mut b = RangeGenerator::new(seed, range).unwrap();

        for _ in 0..1000 {
            assert_eq!(a.next(), b.next());
        }
    }
}

#[test]
fn draws_stay_in_range() {
    let pairs: [(u64, u64); 5] = [
        (0, 1),
        (1, 2),
        (42, 10),
        (7, 1000),
        (0xABCD_EF01, u64::MAX),
    ];

    for (seed, range) in pairs {
        let mut generator = RangeGenerator::new(seed, range).unwrap();

        for _ in 0..10_000 {
            assert!(generator.next() < range);
        }
    }
}

#[test]
fn range_one_always_zero() {
    for seed in [0u64, 1, 42, u64::MAX] {
        let mut generator = RangeGenerator::new(seed, 1).unwrap();

        for _ in 0..500 {
            assert_eq!(generator.next(), 0);
        }
    }
}

#[test]
fn distinct_seeds_diverge() {
    let mut a = RangeGenerator::new(1, 10).unwrap();
    let mut b = RangeGenerator::new(2, 10).unwrap();

    let draws_a: Vec<u64> = (0..100).map(|_| a.next()).collect();
    let draws_b: Vec<u64> = (0..100).map(|_| b.next()).collect();

    assert_ne!(draws_a, draws_b);
}

#[test]
fn pinned_sequence_seed_42_range_10() {
    let mut generator = RangeGenerator::new(42, 10).unwrap();

    let draws: Vec<u64> = (0..5).map(|_| generator.next()).collect();

    assert_eq!(draws, [7, 6, 7, 1, 9]);
}

#[test]
fn pinned_sequence_seed_7_range_1000() {
    let mut generator = RangeGenerator::new(7, 1000).unwrap();

    let draws: Vec<u64> = (0..5).map(|_| generator.next()).collect();

    assert_eq!(draws, [754, 949, 117, 891, 141]);
}

#[test]
fn pinned_sequence_seed_123456789_range_6() {
    let mut generator = RangeGenerator::new(123456789, 6).unwrap();

    let draws: Vec<u64> = (0..8).map(|_| generator.next()).collect();

    assert_eq!(draws, [2, 1, 0, 0, 5, 2, 0, 1]);
}

#[test]
fn pinned_sequence_large_range() {
    let mut generator = RangeGenerator::new(2026, (1 << 63) + 1).unwrap();

    let draws: Vec<u64> = (0..3).map(|_| generator.next()).collect();

    assert_eq!(
        draws,
        [2928384980733900950, 6035380538124985860, 4469616987338921320]
    );
}
