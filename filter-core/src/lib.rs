//! Filter variants and fixtures for comparing sequence-filtering strategies.
//!
//! ```
//! use filter_core::{generate, Blackhole, FilterVariant};
//!
//! let fixture = generate(1_000).unwrap();
//! let mut sink = Blackhole::new();
//! for variant in FilterVariant::ALL {
//!     variant.measure(&fixture, &mut sink);
//! }
//! assert_eq!(sink.consumed(), 5);
//! ```

pub mod blackhole;
pub mod error;
pub mod fixture;
pub mod predicate;
pub mod variants;

pub use blackhole::Blackhole;
pub use error::FilterError;
pub use fixture::{generate, generate_for, generate_with_rng, Fixture, InputSize};
pub use predicate::Predicate;
pub use variants::{
    indexed_loop_filter, multiple_filters, multiple_filters_parallel, one_filter,
    one_filter_parallel, FilterVariant,
};
