//! Column splitter between R2A and R2B. Mouse only, not persisted.

use chordframe_common::{Divider, DragSource, Rect};
use chordframe_config::{ColumnSplitConfig, LayoutConfig};
use tracing::debug;

use crate::css;
use crate::host::LayoutHost;
use crate::session::{DragSession, Point};
use crate::shield::FrameShield;

/// Column fractions of the grid: fixed R1, R2A, gutter, R2B. They sum to 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnLayout {
    pub fixed: f64,
    pub candidate: f64,
    pub gap: f64,
    pub complement: f64,
}

impl ColumnLayout {
    /// Layout for a pointer at `pointer_x`. The R2A share is clamped to the
    /// configured range and R2B takes whatever is left.
    pub fn at_pointer(pointer_x: f64, rect: Rect, columns: &ColumnSplitConfig) -> Option<Self> {
        if rect.width.is_nan() || rect.width <= 0.0 {
            return None;
        }
        let offset = (pointer_x - rect.left()) / rect.width;
        let candidate = offset - columns.fixed_fraction - columns.gap_fraction;
        if !candidate.is_finite() {
            return None;
        }
        let candidate = candidate.clamp(columns.min_fraction, columns.max_fraction);
        Some(Self {
            fixed: columns.fixed_fraction,
            candidate,
            gap: columns.gap_fraction,
            complement: 1.0 - columns.fixed_fraction - columns.gap_fraction - candidate,
        })
    }

    pub fn total(&self) -> f64 {
        self.fixed + self.candidate + self.gap + self.complement
    }

    /// `grid-template-columns` value; the gutter is drawn as `gap_track`.
    pub fn template(&self, gap_track: &str) -> String {
        format!(
            "{} {} {} {}",
            css::fr(self.fixed),
            css::fr(self.candidate),
            gap_track,
            css::fr(self.complement)
        )
    }
}

#[derive(Debug)]
pub struct HorizontalDivider {
    session: Option<DragSession>,
    columns: ColumnSplitConfig,
}

impl HorizontalDivider {
    pub fn new(config: &LayoutConfig) -> Self {
        Self {
            session: None,
            columns: config.columns.clone(),
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Start a mouse drag. Touch presses are ignored.
    pub fn press<H: LayoutHost>(
        &mut self,
        source: DragSource,
        at: Point,
        host: &mut H,
        shield: &mut FrameShield,
    ) -> bool {
        if source != DragSource::Mouse {
            debug!(?source, "column splitter is mouse only");
            return false;
        }
        if self.session.is_some() {
            return false;
        }
        self.session = Some(DragSession::start(source, at));
        host.set_divider_dragging(Divider::Horizontal, true);
        host.set_cursor(Some(Divider::Horizontal.cursor()));
        shield.engage(host);
        debug!(x = at.x, "column drag started");
        true
    }

    /// Track the pointer and rewrite the column template in one update.
    pub fn drag<H: LayoutHost>(
        &mut self,
        source: DragSource,
        at: Point,
        host: &mut H,
    ) -> Option<ColumnLayout> {
        let session = self.session.as_mut().filter(|s| s.source == source)?;
        session.track(at);

        let rect = host.container_rect()?;
        let layout = ColumnLayout::at_pointer(at.x, rect, &self.columns)?;
        host.set_column_template(&layout.template(&self.columns.gap_track));
        Some(layout)
    }

    pub fn release<H: LayoutHost>(
        &mut self,
        source: DragSource,
        host: &mut H,
        shield: &mut FrameShield,
    ) -> bool {
        let Some(session) = self.session.filter(|s| s.source == source) else {
            return false;
        };
        self.session = None;
        host.set_divider_dragging(Divider::Horizontal, false);
        host.set_cursor(None);
        shield.lift(host);
        let (dx, _) = session.delta();
        debug!(dx, "column drag ended");
        true
    }
}
