//! `whca-coordinator` — the tick-driven WHCA* coordinator.
//!
//! # Tick loop
//!
//! ```text
//! tick(in_msgs):
//!   1. Ingest orders from in_msgs into the order tracker.
//!   2. Compute the ahead-of-time set: min_t over every agent's committed
//!      path tail; skip agents whose tail exceeds min_t + W this tick.
//!   3. Round-robin: resume (or start) every eligible agent's search by one
//!      window each; stitch the new window onto its committed path.
//!   4. Rebuild searches for agents evicted by a blocking eviction.
//!   5. GC the reservation table below min_t - 4W.
//!   6. Emit path prefixes older than 2W as AgentPath messages.
//!   7. Check goal completion; assign the next order; queue a rebuild.
//!   8. Emit OrderFinished for completed orders once their AgentPath is sent.
//!   9. Stop if a GlobalStop message was received.
//! ```
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                  |
//! |-----------|-----------------------------------------------------------|
//! | `serde`   | Adds `Serialize`/`Deserialize` to the message types.    |
//! | `fx-hash` | Swaps the reservation table's maps for `FxHashMap`.     |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use whca_core::{Environment, WhcaConfig};
//! use whca_coordinator::{CoreBuilder, NoopObserver, InMessage};
//!
//! let mut core = CoreBuilder::new(Environment::empty(10, 10), WhcaConfig::default()).build();
//! let out = core.tick(vec![InMessage::Orders(vec![order])], &mut NoopObserver);
//! ```

pub mod builder;
pub mod error;
pub mod message;
pub mod observer;
pub mod sim;


pub use builder::CoreBuilder;
pub use error::{CoordinatorError, CoordinatorResult};
pub use message::{InMessage, OutMessage};
pub use observer::{CoordinatorObserver, NoopObserver};
pub use sim::Core;
