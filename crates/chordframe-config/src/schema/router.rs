//! Message router configuration.

use serde::{Deserialize, Serialize};

/// Routing knobs: the tablet breakpoint and the cross-document origin policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Viewports at or below this width (CSS px) take the narrow layout path.
    pub narrow_max_width: f64,
    /// `targetOrigin` passed to `postMessage` when forwarding.
    pub target_origin: String,
    /// Sender origins accepted by the router. Empty accepts any origin.
    pub allowed_origins: Vec<String>,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            narrow_max_width: 1024.0,
            target_origin: "*".into(),
            allowed_origins: Vec::new(),
        }
    }
}
