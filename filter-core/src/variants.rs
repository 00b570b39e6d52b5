//! The five filter variants under comparison.
//!
//! Each variant counts the elements of a slice that pass its condition. They
//! differ in how the condition is expressed (one compound closure, a chain of
//! single-comparison stages, or an indexed loop) and whether rayon splits the
//! work across the global pool.
//!
//! The conditions differ across variants:
//!
//! - `one_filter*`: `d < π && d > e && d != 3 && d != 2`
//! - `multiple_filters*`: `d > π`, then `d < e`, then `d != 3`, then `d != 2`.
//!   The first two stages exclude each other, so the count is always 0.
//! - `indexed_loop`: `d > π && d > e && d != 3 && d != 2`
//!
//! Do not unify them; each one is a separate measured workload.

use std::f64::consts::{E, PI};
use std::fmt;
use std::str::FromStr;

use rayon::prelude::*;

use crate::blackhole::Blackhole;
use crate::predicate::Predicate;

/// Single compound predicate, sequential.
pub fn one_filter(data: &[f64]) -> u64 {
    data.iter()
        .filter(|&&d| d < PI && d > E && d != 3.0 && d != 2.0)
        .count() as u64
}

/// Four chained single-comparison stages, sequential.
pub fn multiple_filters(data: &[f64]) -> u64 {
    data.iter()
        .filter(|&&d| d > PI)
        .filter(|&&d| d < E)
        .filter(|&&d| d != 3.0)
        .filter(|&&d| d != 2.0)
        .count() as u64
}

/// Single compound predicate over rayon's parallel iterator.
pub fn one_filter_parallel(data: &[f64]) -> u64 {
    data.par_iter()
        .filter(|&&d| d < PI && d > E && d != 3.0 && d != 2.0)
        .count() as u64
}

/// Four chained stages over rayon's parallel iterator.
pub fn multiple_filters_parallel(data: &[f64]) -> u64 {
    data.par_iter()
        .filter(|&&d| d > PI)
        .filter(|&&d| d < E)
        .filter(|&&d| d != 3.0)
        .filter(|&&d| d != 2.0)
        .count() as u64
}

/// Explicit index loop with a running counter.
#[allow(clippy::needless_range_loop)]
pub fn indexed_loop_filter(data: &[f64]) -> u64 {
    let mut count = 0u64;
    for i in 0..data.len() {
        if data[i] > PI && data[i] > E && data[i] != 3.0 && data[i] != 2.0 {
            count += 1;
        }
    }
    count
}

/// A filter implementation selectable by the harness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterVariant {
    OneFilter,
    MultipleFilters,
    OneFilterParallel,
    MultipleFiltersParallel,
    IndexedLoop,
}

impl FilterVariant {
    /// All variants in reporting order.
    pub const ALL: [FilterVariant; 5] = [
        FilterVariant::OneFilter,
        FilterVariant::MultipleFilters,
        FilterVariant::OneFilterParallel,
        FilterVariant::MultipleFiltersParallel,
        FilterVariant::IndexedLoop,
    ];

    /// Short name used for CLI selection and report rows.
    pub fn name(self) -> &'static str {
        match self {
            FilterVariant::OneFilter => "one_filter",
            FilterVariant::MultipleFilters => "multiple_filters",
            FilterVariant::OneFilterParallel => "one_filter_parallel",
            FilterVariant::MultipleFiltersParallel => "multiple_filters_parallel",
            FilterVariant::IndexedLoop => "indexed_loop",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            FilterVariant::OneFilter => "Single compound filter, sequential iterator",
            FilterVariant::MultipleFilters => "Four chained filter stages, sequential iterator",
            FilterVariant::OneFilterParallel => "Single compound filter, rayon par_iter",
            FilterVariant::MultipleFiltersParallel => "Four chained filter stages, rayon par_iter",
            FilterVariant::IndexedLoop => "Index-based for loop with counter",
        }
    }

    pub fn is_parallel(self) -> bool {
        matches!(
            self,
            FilterVariant::OneFilterParallel | FilterVariant::MultipleFiltersParallel
        )
    }

    /// The sequential variant computing the same predicate (itself if already sequential).
    pub fn sequential_counterpart(self) -> FilterVariant {
        match self {
            FilterVariant::OneFilterParallel => FilterVariant::OneFilter,
            FilterVariant::MultipleFiltersParallel => FilterVariant::MultipleFilters,
            other => other,
        }
    }

    /// The condition this variant applies, in declarative form.
    pub fn predicate(self) -> Predicate {
        match self {
            FilterVariant::OneFilter | FilterVariant::OneFilterParallel => Predicate::And(vec![
                Predicate::Lt(PI),
                Predicate::Gt(E),
                Predicate::Ne(3.0),
                Predicate::Ne(2.0),
            ]),
            FilterVariant::MultipleFilters | FilterVariant::MultipleFiltersParallel => {
                Predicate::And(vec![
                    Predicate::Gt(PI),
                    Predicate::Lt(E),
                    Predicate::Ne(3.0),
                    Predicate::Ne(2.0),
                ])
            }
            FilterVariant::IndexedLoop => Predicate::And(vec![
                Predicate::Gt(PI),
                Predicate::Gt(E),
                Predicate::Ne(3.0),
                Predicate::Ne(2.0),
            ]),
        }
    }

    /// Count matching elements of `data`.
    #[inline]
    pub fn apply(self, data: &[f64]) -> u64 {
        match self {
            FilterVariant::OneFilter => one_filter(data),
            FilterVariant::MultipleFilters => multiple_filters(data),
            FilterVariant::OneFilterParallel => one_filter_parallel(data),
            FilterVariant::MultipleFiltersParallel => multiple_filters_parallel(data),
            FilterVariant::IndexedLoop => indexed_loop_filter(data),
        }
    }

    /// Apply the variant and hand the count to `sink`.
    #[inline]
    pub fn measure(self, data: &[f64], sink: &mut Blackhole) {
        sink.consume(self.apply(data));
    }
}

impl fmt::Display for FilterVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FilterVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterVariant::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "Unknown variant '{}'. Available: {}",
                    s,
                    FilterVariant::ALL
                        .iter()
                        .map(|v| v.name())
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            })
    }
}
