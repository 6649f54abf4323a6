//! Row splitter: mouse and touch drag, persisted ratio.
//!
//! The ratio is the first row's share of the container height. It is
//! written to two custom properties (`--row1-height`, `--row2-height`) as
//! `fr` proportions and saved to storage when a drag ends.

use chordframe_common::{Divider, DragSource, Rect};
use chordframe_config::{LayoutConfig, RowVars, VerticalSplitConfig};
use tracing::{debug, info, warn};

use crate::css;
use crate::host::LayoutHost;
use crate::session::{DragSession, Point};
use crate::shield::FrameShield;
use crate::store::RatioStore;

/// Ratio for a pointer at `pointer_y`, clamped to the configured bounds.
///
/// `None` for a collapsed container or a non-finite input.
pub fn ratio_at(pointer_y: f64, rect: Rect, bounds: VerticalSplitConfig) -> Option<f64> {
    if rect.height.is_nan() || rect.height <= 0.0 {
        return None;
    }
    let ratio = (pointer_y - rect.top()) / rect.height;
    ratio
        .is_finite()
        .then(|| ratio.clamp(bounds.min_ratio, bounds.max_ratio))
}

#[derive(Debug)]
pub struct VerticalDivider {
    mouse: Option<DragSession>,
    touch: Option<DragSession>,
    bounds: VerticalSplitConfig,
    vars: RowVars,
    storage_key: String,
}

impl VerticalDivider {
    pub fn new(config: &LayoutConfig) -> Self {
        Self {
            mouse: None,
            touch: None,
            bounds: config.vertical,
            vars: config.row_vars.clone(),
            storage_key: config.storage_key.clone(),
        }
    }

    fn slot(&mut self, source: DragSource) -> &mut Option<DragSession> {
        match source {
            DragSource::Mouse => &mut self.mouse,
            DragSource::Touch => &mut self.touch,
        }
    }

    pub fn session(&self, source: DragSource) -> Option<&DragSession> {
        match source {
            DragSource::Mouse => self.mouse.as_ref(),
            DragSource::Touch => self.touch.as_ref(),
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.mouse.is_some() || self.touch.is_some()
    }

    /// Apply the persisted ratio, if any. Called once at startup.
    pub fn restore<H: LayoutHost, S: RatioStore>(&self, host: &mut H, store: &S) -> Option<f64> {
        let saved = store.read(&self.storage_key)?;
        let Some(ratio) = css::parse_leading_number(&saved) else {
            debug!(key = %self.storage_key, saved = %saved, "ignoring unparsable split ratio");
            return None;
        };
        let ratio = ratio.clamp(self.bounds.min_ratio, self.bounds.max_ratio);
        self.apply(host, ratio);
        debug!(ratio, "restored split ratio");
        Some(ratio)
    }

    /// Write `ratio` and its complement to the row variables.
    pub fn apply<H: LayoutHost>(&self, host: &mut H, ratio: f64) {
        host.set_root_var(&self.vars.first, &css::fr(ratio));
        host.set_root_var(&self.vars.second, &css::fr(1.0 - ratio));
    }

    /// Start a drag. Returns `false` if `source` is already dragging.
    pub fn press<H: LayoutHost>(
        &mut self,
        source: DragSource,
        at: Point,
        host: &mut H,
        shield: &mut FrameShield,
    ) -> bool {
        if self.session(source).is_some() {
            return false;
        }
        let first = !self.is_dragging();
        *self.slot(source) = Some(DragSession::start(source, at));

        if first {
            host.set_divider_dragging(Divider::Vertical, true);
        }
        if source == DragSource::Mouse {
            host.set_cursor(Some(Divider::Vertical.cursor()));
        }
        shield.engage(host);
        debug!(?source, y = at.y, "row drag started");
        true
    }

    /// Track the pointer. Returns the applied ratio.
    pub fn drag<H: LayoutHost>(&mut self, source: DragSource, at: Point, host: &mut H) -> Option<f64> {
        let session = self.slot(source).as_mut()?;
        session.track(at);

        let rect = host.container_rect()?;
        let ratio = ratio_at(at.y, rect, self.bounds)?;
        self.apply(host, ratio);
        Some(ratio)
    }

    /// End the drag of `source` and persist the applied ratio.
    ///
    /// Returns `false` (and does nothing) if `source` was not dragging.
    pub fn release<H: LayoutHost, S: RatioStore>(
        &mut self,
        source: DragSource,
        host: &mut H,
        shield: &mut FrameShield,
        store: &mut S,
    ) -> bool {
        let Some(session) = self.slot(source).take() else {
            return false;
        };

        if !self.is_dragging() {
            host.set_divider_dragging(Divider::Vertical, false);
        }
        if source == DragSource::Mouse {
            host.set_cursor(None);
        }
        shield.lift(host);

        let (_, dy) = session.delta();
        self.persist(host, store);
        debug!(?source, dy, "row drag ended");
        true
    }

    fn persist<H: LayoutHost, S: RatioStore>(&self, host: &H, store: &mut S) {
        let applied = host.root_var(&self.vars.first);
        let Some(ratio) = applied.as_deref().and_then(css::parse_leading_number) else {
            warn!(value = ?applied, "split ratio not saved: applied value is not a number");
            return;
        };
        match store.write(&self.storage_key, &ratio.to_string()) {
            Ok(()) => info!(ratio, key = %self.storage_key, "saved split ratio"),
            Err(e) => warn!(error = %e, "failed to save split ratio"),
        }
    }
}
