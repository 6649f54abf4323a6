//! Ephemeral drag-session state.

use chordframe_common::DragSource;

/// Client-space pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One press-to-release drag. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub source: DragSource,
    /// Pointer position at press.
    pub origin: Point,
    /// Most recent pointer position.
    pub last: Point,
}

impl DragSession {
    pub fn start(source: DragSource, origin: Point) -> Self {
        Self {
            source,
            origin,
            last: origin,
        }
    }

    pub fn track(&mut self, at: Point) {
        self.last = at;
    }

    /// Pointer travel since press.
    pub fn delta(&self) -> (f64, f64) {
        (self.last.x - self.origin.x, self.last.y - self.origin.y)
    }
}
