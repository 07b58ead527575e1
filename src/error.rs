//! Error type shared by the filter, envelope and optimizer.

use thiserror::Error;

/// Errors raised while grouping rectangles.
///
/// All failures are fail-fast: nothing here is transient, so callers should
/// surface them rather than retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum GroupingError {
    /// The rectangle collection was empty.
    #[error("rectangle collection is empty")]
    EmptyInput,

    /// A rectangle had a zero or negative side.
    #[error("rectangle {index} has a non-positive side")]
    NonPositiveDimension {
        /// Position of the offending rectangle in the input.
        index: usize,
    },

    /// A collection passed as already filtered is not a strict staircase.
    #[error("rectangle {index} breaks the frontier order (width must increase, height must decrease)")]
    NotAFrontier {
        /// First position whose rectangle does not extend the staircase.
        index: usize,
    },

    /// Checked accumulator arithmetic overflowed; pick a wider accumulator.
    #[error("accumulator overflow while {operation}")]
    Overflow {
        /// What was being computed when the overflow happened.
        operation: &'static str,
    },

    /// A query was issued before any line was added.
    #[error("query on an empty envelope")]
    EmptyEnvelope,

    /// An internal invariant failed; indicates a bug, not bad input.
    #[error("internal consistency violated: {0}")]
    InternalConsistency(&'static str),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, GroupingError>;
