//! `whca-heuristic` — Reverse Resumable A* (RRA*), the admissible heuristic
//! oracle used by the forward space-time search.
//!
//! # Crate layout
//!
//! | Module    | Contents                                  |
//! |-----------|---------------------------------------------|
//! | [`rra`]   | `RraOracle`, `UNREACHABLE`                  |
//! | [`error`] | `HeuristicError`, `HeuristicResult<T>`      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                      |
//! |---------|-----------------------------------------------|
//! | `serde` | Propagates `whca-core/serde`.               |

pub mod error;
pub mod rra;


pub use error::{HeuristicError, HeuristicResult};
pub use rra::{RraOracle, UNREACHABLE};
