//! Element ids of the embedded frames.

use chordframe_common::FrameId;
use serde::{Deserialize, Serialize};

/// DOM ids of the `<iframe>` elements, looked up on every dispatch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FramesConfig {
    pub r1: String,
    pub r2a: String,
    pub r2b: String,
    pub r3: String,
    pub sample: String,
}

impl Default for FramesConfig {
    fn default() -> Self {
        Self {
            r1: "r1-frame".into(),
            r2a: "r2a-frame".into(),
            r2b: "r2b-frame".into(),
            r3: "r3-frame".into(),
            sample: "sample-frame".into(),
        }
    }
}

impl FramesConfig {
    pub fn element_id(&self, frame: FrameId) -> &str {
        match frame {
            FrameId::R1 => &self.r1,
            FrameId::R2a => &self.r2a,
            FrameId::R2b => &self.r2b,
            FrameId::R3 => &self.r3,
            FrameId::Sample => &self.sample,
        }
    }
}
