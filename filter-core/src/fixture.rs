//! Fixture generation: fresh uniformly random `f64` sequences in `[1.0, 4.0)`.
//!
//! Every call builds its own RNG from OS entropy, so no two fixtures share
//! generator state and nothing is cached between timed invocations.

use std::fmt;
use std::ops::Deref;

use rand::distributions::Uniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::FilterError;

/// Inclusive lower bound of generated values.
pub const FIXTURE_LOW: f64 = 1.0;
/// Exclusive upper bound of generated values.
pub const FIXTURE_HIGH: f64 = 4.0;

/// One of the benchmarked input sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum InputSize {
    Ten,
    Hundred,
    Thousand,
    TenThousand,
    HundredThousand,
    Million,
}

impl InputSize {
    /// All benchmarked sizes, ascending.
    pub const ALL: [InputSize; 6] = [
        InputSize::Ten,
        InputSize::Hundred,
        InputSize::Thousand,
        InputSize::TenThousand,
        InputSize::HundredThousand,
        InputSize::Million,
    ];

    /// Number of elements in a fixture of this size.
    pub const fn elements(self) -> usize {
        match self {
            InputSize::Ten => 10,
            InputSize::Hundred => 100,
            InputSize::Thousand => 1_000,
            InputSize::TenThousand => 10_000,
            InputSize::HundredThousand => 100_000,
            InputSize::Million => 1_000_000,
        }
    }
}

impl TryFrom<usize> for InputSize {
    type Error = FilterError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        if size == 0 {
            return Err(FilterError::InvalidArgument {
                size,
                reason: "size must be positive",
            });
        }
        InputSize::ALL
            .into_iter()
            .find(|s| s.elements() == size)
            .ok_or(FilterError::InvalidArgument {
                size,
                reason: "expected one of 10, 100, 1000, 10000, 100000, 1000000",
            })
    }
}

impl fmt::Display for InputSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.elements())
    }
}

/// An immutable, owned sequence of generated values.
#[derive(Debug, Clone, PartialEq)]
pub struct Fixture(Vec<f64>);

impl Fixture {
    /// Wrap existing values. Intended for hand-built scenarios; no range check.
    pub fn from_values(values: Vec<f64>) -> Self {
        Self(values)
    }
}

impl Deref for Fixture {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.0
    }
}

impl AsRef<[f64]> for Fixture {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

/// Generate `size` values uniformly distributed in `[1.0, 4.0)`.
///
/// A new `StdRng` is seeded from entropy on every call. Fails with
/// [`FilterError::InvalidArgument`] when `size` is zero.
pub fn generate(size: usize) -> Result<Fixture, FilterError> {
    let mut rng = StdRng::from_entropy();
    generate_with_rng(&mut rng, size)
}

/// Same as [`generate`], drawing from a caller-provided RNG.
pub fn generate_with_rng<R: Rng + ?Sized>(rng: &mut R, size: usize) -> Result<Fixture, FilterError> {
    if size == 0 {
        return Err(FilterError::InvalidArgument {
            size,
            reason: "size must be positive",
        });
    }
    Ok(draw(rng, size))
}

/// Generate a fixture for one of the enumerated sizes.
pub fn generate_for(size: InputSize) -> Fixture {
    draw(&mut StdRng::from_entropy(), size.elements())
}

fn draw<R: Rng + ?Sized>(rng: &mut R, size: usize) -> Fixture {
    let dist = Uniform::new(FIXTURE_LOW, FIXTURE_HIGH);
    Fixture((0..size).map(|_| rng.sample(&dist)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_count() {
        for size in [1, 10, 1000, 12_345] {
            assert_eq!(generate(size).unwrap().len(), size);
        }
    }

    #[test]
    fn test_values_in_range() {
        let fixture = generate(100_000).unwrap();
        for v in fixture.iter() {
            assert!(
                (FIXTURE_LOW..FIXTURE_HIGH).contains(v),
                "value {} out of [1, 4) range",
                v
            );
        }
    }

    #[test]
    fn test_zero_size_rejected() {
        let err = generate(0).unwrap_err();
        assert_eq!(
            err,
            FilterError::InvalidArgument {
                size: 0,
                reason: "size must be positive"
            }
        );
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let a = generate_with_rng(&mut StdRng::seed_from_u64(42), 100).unwrap();
        let b = generate_with_rng(&mut StdRng::seed_from_u64(42), 100).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_fresh_generators_differ() {
        // Two independent entropy-seeded draws of 1000 values colliding is not a realistic outcome
        let a = generate(1000).unwrap();
        let b = generate(1000).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_generate_for_matches_size() {
        for size in InputSize::ALL {
            assert_eq!(generate_for(size).len(), size.elements());
        }
    }

    #[test]
    fn test_input_size_try_from() {
        for size in InputSize::ALL {
            assert_eq!(InputSize::try_from(size.elements()).unwrap(), size);
        }
        assert!(InputSize::try_from(0).is_err());
        assert!(InputSize::try_from(5_000).is_err());
        assert_eq!(InputSize::try_from(7).unwrap_err().size(), 7);
    }

    #[test]
    fn test_input_sizes_ascending() {
        for w in InputSize::ALL.windows(2) {
            assert!(w[0].elements() < w[1].elements());
        }
    }
}
