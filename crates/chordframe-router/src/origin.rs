//! Sender-origin policy for inbound messages.

use chordframe_config::RouterConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OriginPolicy {
    /// Accept messages from any origin.
    Open,
    /// Accept only the listed origins (exact match).
    AllowList(Vec<String>),
}

impl OriginPolicy {
    pub fn from_config(config: &RouterConfig) -> Self {
        if config.allowed_origins.is_empty() {
            OriginPolicy::Open
        } else {
            OriginPolicy::AllowList(config.allowed_origins.clone())
        }
    }

    pub fn permits(&self, origin: &str) -> bool {
        match self {
            OriginPolicy::Open => true,
            OriginPolicy::AllowList(allowed) => allowed.iter().any(|a| a == origin),
        }
    }
}
