//! Property-based tests for filter variants.
//!
//! Inputs mix arbitrary values in [0, 5) with the exact boundary values the
//! predicates compare against (2, 3, e, π).

use std::f64::consts::{E, PI};

use filter_core::{generate_with_rng, FilterVariant};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Number of proptest cases. Override with PROPTEST_CASES env var.
fn num_cases() -> u32 {
    std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(512)
}

fn value_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        4 => 0.0f64..5.0,
        1 => Just(2.0),
        1 => Just(3.0),
        1 => Just(E),
        1 => Just(PI),
    ]
}

fn data_strategy() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(value_strategy(), 0..5_000)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(num_cases()))]

    /// Property 1: parallel variants agree with their sequential counterparts.
    #[test]
    fn prop_parallel_equals_sequential(data in data_strategy()) {
        for v in FilterVariant::ALL.into_iter().filter(|v| v.is_parallel()) {
            prop_assert_eq!(v.apply(&data), v.sequential_counterpart().apply(&data));
        }
    }

    /// Property 2: every variant counts exactly what its predicate accepts.
    #[test]
    fn prop_matches_predicate(data in data_strategy()) {
        for v in FilterVariant::ALL {
            prop_assert_eq!(v.apply(&data), v.predicate().count(&data));
        }
    }

    /// Property 3: counts are bounded by input length, and staged filters never match.
    #[test]
    fn prop_count_bounds(data in data_strategy()) {
        for v in FilterVariant::ALL {
            prop_assert!(v.apply(&data) <= data.len() as u64);
        }
        prop_assert_eq!(FilterVariant::MultipleFilters.apply(&data), 0);
    }

    /// Property 4: generated fixtures have the requested length and stay in [1, 4).
    #[test]
    fn prop_generator_contract(seed in any::<u64>(), n in 1usize..20_000) {
        let fixture = generate_with_rng(&mut StdRng::seed_from_u64(seed), n).unwrap();
        prop_assert_eq!(fixture.len(), n);
        prop_assert!(fixture.iter().all(|v| (1.0..4.0).contains(v)));
    }
}
