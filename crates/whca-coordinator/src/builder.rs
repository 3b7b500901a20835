//! Fluent builder for constructing a [`Core`].

use whca_core::{Environment, WhcaConfig};

use crate::sim::Core;

/// Builder for [`Core`].
///
/// # Required inputs
///
/// - [`Environment`] — the static grid and initial agent placement.
/// - [`WhcaConfig`] — the window size (and the cleanup/emission thresholds
///   derived from it).
///
/// # Example
///
/// ```rust,ignore
/// let core = CoreBuilder::new(env, WhcaConfig::default()).build();
/// ```
pub struct CoreBuilder {
    env: Environment,
    cfg: WhcaConfig,
}

impl CoreBuilder {
    pub fn new(env: Environment, cfg: WhcaConfig) -> Self {
        CoreBuilder { env, cfg }
    }

    pub fn build(self) -> Core {
        Core::new(self.env, self.cfg)
    }
}
