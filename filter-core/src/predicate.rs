use std::f64::consts::{E, PI};
use std::fmt;

// --- Predicate enum ---

/// Declarative form of a variant's filter condition.
///
/// Scalar evaluation serves as the reference count in tests and harness
/// validation. Timed variant bodies never go through this enum.
#[derive(Clone, Debug, PartialEq)]
pub enum Predicate {
    /// `d > threshold`
    Gt(f64),
    /// `d < threshold`
    Lt(f64),
    /// `d != value`
    Ne(f64),
    /// All sub-predicates must match.
    And(Vec<Predicate>),
}

impl Predicate {
    /// Evaluate against a single value.
    pub fn evaluate(&self, d: f64) -> bool {
        match self {
            Predicate::Gt(t) => d > *t,
            Predicate::Lt(t) => d < *t,
            Predicate::Ne(v) => d != *v,
            Predicate::And(preds) => preds.iter().all(|p| p.evaluate(d)),
        }
    }

    /// Count the values in `data` that satisfy the predicate.
    pub fn count(&self, data: &[f64]) -> u64 {
        data.iter().filter(|&&d| self.evaluate(d)).count() as u64
    }
}

/// Render well-known constants symbolically so descriptions read `d < π`.
fn fmt_operand(v: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if v == PI {
        write!(f, "π")
    } else if v == E {
        write!(f, "e")
    } else {
        write!(f, "{}", v)
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::Gt(t) => {
                write!(f, "d > ")?;
                fmt_operand(*t, f)
            }
            Predicate::Lt(t) => {
                write!(f, "d < ")?;
                fmt_operand(*t, f)
            }
            Predicate::Ne(v) => {
                write!(f, "d ≠ ")?;
                fmt_operand(*v, f)
            }
            Predicate::And(preds) => {
                for (i, p) in preds.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ∧ ")?;
                    }
                    write!(f, "{}", p)?;
                }
                Ok(())
            }
        }
    }
}
