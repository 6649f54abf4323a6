//! The page surface the splitters write to.

use chordframe_common::{Divider, Rect};

/// Presentation side effects of the splitters.
///
/// Implemented over the DOM by the web crate and by a recording fake in
/// tests. Element lookups are the implementor's business; a missing element
/// makes the corresponding call a no-op.
pub trait LayoutHost {
    /// Client rect of the grid container.
    fn container_rect(&self) -> Option<Rect>;

    /// Set a custom property on the document element.
    fn set_root_var(&mut self, name: &str, value: &str);

    /// Computed value of a custom property on the document element.
    fn root_var(&self, name: &str) -> Option<String>;

    /// Replace the container's `grid-template-columns` wholesale.
    fn set_column_template(&mut self, template: &str);

    /// Toggle the `dragging` indicator class on a divider.
    fn set_divider_dragging(&mut self, divider: Divider, dragging: bool);

    /// Set (or with `None`, clear) the body cursor override.
    fn set_cursor(&mut self, cursor: Option<&str>);

    fn set_text_selection(&mut self, enabled: bool);

    /// Toggle pointer interaction on every embedded frame.
    fn set_frames_interactive(&mut self, interactive: bool);
}
