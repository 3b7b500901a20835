//! Coordinator observer trait for progress reporting and diagnostics.

use whca_core::{AgentId, Time};

/// Callbacks invoked by [`Core::tick`][crate::Core::tick] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: i64 }
///
/// impl CoordinatorObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, t: Time) {
///         if t % self.interval == 0 {
///             println!("tick {t}");
///         }
///     }
/// }
/// ```
pub trait CoordinatorObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _t: Time) {}

    /// Called every time an agent's search commits a window.
    fn on_window_committed(&mut self, _agent: AgentId, _window: &[whca_core::TimedCell]) {}

    /// Called whenever a search evicts a blocking agent from the reservation
    /// table.
    fn on_agent_blocked(&mut self, _blocked: AgentId, _evicted: AgentId) {}

    /// Called at the end of each tick.
    fn on_tick_end(&mut self, _t: Time) {}
}

/// A [`CoordinatorObserver`] that does nothing. Use when you need to call
/// `tick` but don't want progress callbacks.
pub struct NoopObserver;

impl CoordinatorObserver for NoopObserver {}
