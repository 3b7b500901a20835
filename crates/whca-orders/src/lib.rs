//! `whca-orders` — order intake, assignment, and completion tracking.
//!
//! # Crate layout
//!
//! | Module      | Contents                                      |
//! |-------------|--------------------------------------------------|
//! | [`tracker`] | `OrderTracker`                                 |
//! | [`loader`]  | `load_orders_csv`, `load_orders_reader`        |
//! | [`error`]   | `OrdersError`, `OrdersResult<T>`               |
//!
//! # Assignment model (summary)
//!
//! Orders arrive into an unassigned FIFO. `assign` normally hands out the
//! FIFO head; the one exception is pallet continuity — an agent that just
//! finished a pickup or freeup is, if possible, handed the next delivery of
//! a *different* pallet rather than looping back onto the one it just
//! touched.

pub mod error;
pub mod loader;
pub mod tracker;


pub use error::{OrdersError, OrdersResult};
pub use loader::{load_orders_csv, load_orders_reader};
pub use tracker::OrderTracker;
