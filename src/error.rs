//! Errors raised when building a map from an explicit breakpoint list.

use thiserror::Error;

/// Reason a breakpoint sequence is not a valid canonical interval map.
///
/// Positions are zero-based indices into the input sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BreakpointError {
    /// The sequence has no breakpoints; some key would be unmapped.
    #[error("breakpoint sequence is empty")]
    Empty,
    /// The first breakpoint is not at the domain minimum.
    #[error("first breakpoint is not at the minimum key")]
    MissingMinimum,
    /// A key is not strictly greater than its predecessor.
    #[error("breakpoint {position} is not strictly after the previous one")]
    Unordered {
        /// Index of the offending breakpoint.
        position: usize,
    },
    /// A value equals its predecessor's, so two runs should have been one.
    #[error("breakpoint {position} repeats the value of the previous run")]
    Redundant {
        /// Index of the offending breakpoint.
        position: usize,
    },
}
