//! Error type for fit-text.
//!
//! The crate favors best-effort degradation over hard failure: truncation
//! with no text node is a silent no-op, exhausted truncation ends at the bare
//! ellipsis. The one thing that does fail fast is a caller handing the search
//! an inverted font-size range, which would otherwise loop incorrectly.

use thiserror::Error;

/// Errors surfaced by the fit-text core.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FitError {
    /// The font-size search requires `min < max`.
    #[error("invalid font size range: min {min} must be less than max {max}")]
    InvalidFontRange { min: u32, max: u32 },
}
