/// Errors raised while preparing filter benchmark inputs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    /// Requested input size is zero or not one of the benchmarked sizes.
    #[error("invalid input size {size}: {reason}")]
    InvalidArgument {
        /// The offending element count.
        size: usize,
        /// Why the size was rejected.
        reason: &'static str,
    },
}

impl FilterError {
    /// The size that caused the error.
    pub fn size(&self) -> usize {
        match self {
            FilterError::InvalidArgument { size, .. } => *size,
        }
    }
}
