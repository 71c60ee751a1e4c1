// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Errors for construction and structural verification.
//!
//! Ordinary misuse (duplicate insert, erasing an absent value, an out of
//! range index) is not an error: those report through `bool` and `Option`.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JumpListError {
    /// The preset fixture only knows how to lay out 1, 3 or 10 values.
    #[error("preset size must be 1, 3 or 10, got {0}")]
    UnsupportedPresetSize(usize),

    #[error("max gap must be at least 1")]
    InvalidMaxGap,

    /// Bulk input was not strictly ascending at `index`.
    #[error("values must be strictly ascending (violated at index {index})")]
    Unsorted { index: usize },

    #[error("invariant violated: {0}")]
    InvariantViolated(String),
}
