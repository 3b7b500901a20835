//! `whca-search` — per-agent windowed space-time A*, resumed one window at a
//! time by the coordinator.
//!
//! # Crate layout
//!
//! | Module     | Contents                                    |
//! |------------|------------------------------------------------|
//! | [`search`] | `SearchState`, `WindowResult`                |
//! | [`error`]  | `SearchError`, `SearchResult<T>`            |
//!
//! There is no coroutine, generator, or async runtime here: `SearchState`
//! holds its open set, g-scores, and backpointers as plain fields, and
//! `step_window` is an ordinary method the coordinator calls once per turn.
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                  |
//! |-----------|-----------------------------------------------------------|
//! | `serde`   | Propagates to `whca-core`, `whca-heuristic`, `whca-reservation`. |
//! | `fx-hash` | Propagates to `whca-reservation`.                       |

pub mod error;
pub mod search;


pub use error::{SearchError, SearchResult};
pub use search::{SearchState, WindowResult};
