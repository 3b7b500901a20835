//! Heuristic-subsystem error type.
//!
//! Unreachability itself is not an error here — [`crate::RraOracle::query`]
//! reports it as the [`crate::UNREACHABLE`] sentinel distance, since "no path
//! exists yet" and "no path exists at all" are indistinguishable until the
//! whole open set has been exhausted, and the forward search needs to treat
//! both the same way regardless. This type only covers construction-time
//! misuse.

use thiserror::Error;

use whca_core::Cell;

/// Errors produced by `whca-heuristic`.
#[derive(Debug, Error)]
pub enum HeuristicError {
    #[error("goal cell {0} is out of bounds or statically blocked")]
    InvalidGoal(Cell),
}

pub type HeuristicResult<T> = Result<T, HeuristicError>;
