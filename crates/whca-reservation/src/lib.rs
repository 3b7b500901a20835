//! `whca-reservation` — the timed-occupancy reservation table shared by every
//! agent's search.
//!
//! # Crate layout
//!
//! | Module    | Contents                                      |
//! |-----------|------------------------------------------------|
//! | [`table`] | `ReservationTable`                             |
//! | [`error`] | `ReservationError`, `ReservationResult<T>`     |
//!
//! # Reservation model
//!
//! A slot is keyed by `(from: Cell, to: Cell, t: Time)`. `from == to` marks
//! node occupancy; `from != to` marks an in-progress edge crossing, reserved
//! in both directions so two agents can never swap positions head-on.
//!
//! Only the coordinator ever holds a `&mut ReservationTable`; there is no
//! concurrent access to reconcile (see `whca-coordinator`'s single-threaded
//! tick loop).
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                       |
//! |-----------|---------------------------------------------------------------|
//! | `serde`   | Propagates `whca-core/serde`.                                |
//! | `fx-hash` | Swaps the internal maps for `rustc_hash::FxHashMap`.         |

pub mod error;
pub mod table;

#[cfg(test)]
mod tests;

pub use error::{ReservationError, ReservationResult};
pub use table::ReservationTable;
