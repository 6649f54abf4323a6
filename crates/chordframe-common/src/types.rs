use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the embedded documents hosted by the chord editor page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrameId {
    #[serde(rename = "R1")]
    R1,
    #[serde(rename = "R2A")]
    R2a,
    #[serde(rename = "R2B")]
    R2b,
    #[serde(rename = "R3")]
    R3,
    Sample,
}

impl FrameId {
    pub const ALL: [FrameId; 5] = [
        FrameId::R1,
        FrameId::R2a,
        FrameId::R2b,
        FrameId::R3,
        FrameId::Sample,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FrameId::R1 => "R1",
            FrameId::R2a => "R2A",
            FrameId::R2b => "R2B",
            FrameId::R3 => "R3",
            FrameId::Sample => "Sample",
        }
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Client-space rectangle, as reported by `getBoundingClientRect()`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn top(&self) -> f64 {
        self.y
    }
}

/// Input device driving a drag session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DragSource {
    Mouse,
    Touch,
}

/// The two pane splitters on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Divider {
    /// Splits the rows; dragged up and down.
    Vertical,
    /// Splits the R2A/R2B columns; dragged left and right.
    Horizontal,
}

impl Divider {
    /// Body cursor shown while a mouse drag is active.
    pub fn cursor(self) -> &'static str {
        match self {
            Divider::Vertical => "ns-resize",
            Divider::Horizontal => "ew-resize",
        }
    }
}
