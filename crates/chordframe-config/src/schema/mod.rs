//! Configuration schema types.
//!
//! All structs use `serde(default)`; the defaults reproduce the stock chord
//! editor page (element ids, storage key, breakpoints and split bounds).

mod frames;
mod layout;
mod logging;
mod router;

pub use frames::*;
pub use layout::*;
pub use logging::*;
pub use router::*;

use serde::{Deserialize, Serialize};

/// Root configuration for a chordframe host page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChordframeConfig {
    pub frames: FramesConfig,
    pub router: RouterConfig,
    pub layout: LayoutConfig,
    pub logging: LoggingConfig,
}
