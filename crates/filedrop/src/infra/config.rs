//! Controller configuration.

use serde::{Deserialize, Serialize};

/// Tunables for a [`FileSetController`](crate::FileSetController).
///
/// Hosts typically embed this in their own configuration; every field carries
/// a serde default so a partial document deserializes cleanly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControllerConfig {
    /// Fractional digits used when rendering the human-readable size total.
    #[serde(default = "ControllerConfig::default_decimals")]
    pub decimals: usize,
}

impl ControllerConfig {
    fn default_decimals() -> usize {
        2
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            decimals: Self::default_decimals(),
        }
    }
}
