//! Both splitters behind one event-facing API.
//!
//! The binding layer forwards raw pointer lifecycle events here; routing to
//! the right divider and session happens inside. Every handler is a no-op
//! when it does not apply (move without press, second release, ...).

use chordframe_common::{Divider, DragSource};
use chordframe_config::LayoutConfig;
use tracing::{debug, info};

use crate::horizontal::HorizontalDivider;
use crate::host::LayoutHost;
use crate::session::Point;
use crate::shield::FrameShield;
use crate::store::RatioStore;
use crate::vertical::VerticalDivider;


/// Page-level events that may strand a drag without a release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interrupt {
    /// The window lost focus.
    Blur,
    /// The document became hidden.
    Hidden,
}

pub struct PaneResizer<H: LayoutHost, S: RatioStore> {
    host: H,
    store: S,
    shield: FrameShield,
    vertical: VerticalDivider,
    horizontal: HorizontalDivider,
    release_on_blur: bool,
}

impl<H: LayoutHost, S: RatioStore> PaneResizer<H, S> {
    pub fn new(host: H, store: S, config: &LayoutConfig) -> Self {
        Self {
            host,
            store,
            shield: FrameShield::new(),
            vertical: VerticalDivider::new(config),
            horizontal: HorizontalDivider::new(config),
            release_on_blur: config.release_on_blur,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn vertical(&self) -> &VerticalDivider {
        &self.vertical
    }

    pub fn horizontal(&self) -> &HorizontalDivider {
        &self.horizontal
    }

    pub fn shield(&self) -> &FrameShield {
        &self.shield
    }

    /// Apply the persisted row ratio. Run once at startup.
    pub fn restore(&mut self) -> Option<f64> {
        self.vertical.restore(&mut self.host, &self.store)
    }

    pub fn is_dragging(&self) -> bool {
        self.vertical.is_dragging() || self.horizontal.is_dragging()
    }

    /// Whether a move from `source` would be consumed by a drag.
    pub fn is_dragging_with(&self, source: DragSource) -> bool {
        self.vertical.session(source).is_some()
            || (source == DragSource::Mouse && self.horizontal.is_dragging())
    }

    pub fn press(&mut self, divider: Divider, source: DragSource, at: Point) -> bool {
        match divider {
            Divider::Vertical => {
                self.vertical
                    .press(source, at, &mut self.host, &mut self.shield)
            }
            Divider::Horizontal => {
                self.horizontal
                    .press(source, at, &mut self.host, &mut self.shield)
            }
        }
    }

    /// Feed a pointer move to whichever divider `source` is dragging.
    pub fn pointer_move(&mut self, source: DragSource, at: Point) {
        self.vertical.drag(source, at, &mut self.host);
        self.horizontal.drag(source, at, &mut self.host);
    }

    /// End every session driven by `source`. Returns `true` if any ended.
    pub fn release(&mut self, source: DragSource) -> bool {
        let vertical = self.vertical.release(
            source,
            &mut self.host,
            &mut self.shield,
            &mut self.store,
        );
        let horizontal = self
            .horizontal
            .release(source, &mut self.host, &mut self.shield);
        vertical || horizontal
    }

    /// Force-release all sessions after `reason`, unless disabled by config.
    pub fn interrupt(&mut self, reason: Interrupt) -> bool {
        if !self.release_on_blur || !self.is_dragging() {
            return false;
        }
        info!(?reason, "drag interrupted, releasing");
        let mouse = self.release(DragSource::Mouse);
        let touch = self.release(DragSource::Touch);
        if self.shield.is_engaged() {
            debug!(holders = self.shield.holders(), "frame shield still held after interrupt");
        }
        mouse || touch
    }
}
