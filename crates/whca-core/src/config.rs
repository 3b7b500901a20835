//! The one tunable the core exposes: the planning window size, plus the two
//! thresholds derived from it.

use crate::Time;

/// Default window size, in ticks.
pub const DEFAULT_TIME_WINDOW: Time = 8;

/// Planner configuration. Constructed once and held for the coordinator's
/// lifetime.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WhcaConfig {
    pub time_window: Time,
}

impl WhcaConfig {
    /// # Panics
    ///
    /// Panics if `time_window <= 0` — a non-positive window makes every
    /// downstream threshold degenerate.
    pub fn new(time_window: Time) -> Self {
        assert!(time_window > 0, "time_window must be positive, got {time_window}");
        WhcaConfig { time_window }
    }

    /// Reservation-table GC cutoff offset: `4 * W`.
    #[inline]
    pub fn cleanup_threshold(&self) -> Time {
        4 * self.time_window
    }

    /// Emission-pass threshold: `2 * W`.
    #[inline]
    pub fn emission_threshold(&self) -> Time {
        2 * self.time_window
    }
}

impl Default for WhcaConfig {
    fn default() -> Self {
        WhcaConfig::new(DEFAULT_TIME_WINDOW)
    }
}
