//! `whca-core` — foundational grid, time, and identifier types for the WHCA*
//! planner crates.
//!
//! This crate is a dependency of every other `whca-*` crate. It intentionally
//! has no `whca-*` dependencies and minimal external ones (only optional
//! `serde`). Construction faults here are programmer errors and panic rather
//! than returning a `Result` — there's no shared error type; each downstream
//! crate defines its own closed error enum for the faults it can actually hit.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|--------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `OrderId`                                  |
//! | [`cell`]        | `Cell`, `TimedCell`, `CellState`, `Time`              |
//! | [`environment`] | `Agent`, `Order`, `OrderType`, `Environment`           |
//! | [`open_set`]    | `OpenSet<N>`, the generic indexed min-heap            |
//! | [`config`]      | `WhcaConfig`                                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.  |

pub mod cell;
pub mod config;
pub mod environment;
pub mod ids;
pub mod open_set;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::{Cell, CellState, Time, TimedCell};
pub use config::WhcaConfig;
pub use environment::{Agent, Environment, Order, OrderType};
pub use ids::{AgentId, OrderId};
pub use open_set::OpenSet;
