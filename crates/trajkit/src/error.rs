//! Failure taxonomy shared by all trajectory algorithms.
//!
//! Recoverable geometric degeneracies (empty wedge, empty freespace
//! interval, empty sphere intersection) are modelled as sum-type variants
//! at their call sites and never surface through this enum.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A precondition on the input was violated (empty range where at
    /// least one element is required, non-positive parameter, ...).
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    /// A quantity required by the computation is numerically undefined.
    #[error("numeric degeneracy: {0}")]
    NumericDegeneracy(&'static str),
    /// An iterative search exhausted its iteration budget before reaching
    /// the requested tolerance.
    #[error("search did not converge within {0} iterations")]
    NotConverged(usize),
    /// A bounded search was handed an upper bound below every feasible
    /// value.
    #[error("no feasible value within the provided bounds")]
    NotFound,
}

pub type Result<T> = std::result::Result<T, Error>;
