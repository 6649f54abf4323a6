//! Pane splitters for the chord editor page.
//!
//! Two drag controllers share one page:
//! - [`VerticalDivider`]: resizes the rows, mouse and touch, persists the ratio
//! - [`HorizontalDivider`]: resizes the R2A/R2B columns, mouse only
//!
//! Both drive the page through [`LayoutHost`] and share a [`FrameShield`]
//! that keeps the embedded frames from swallowing pointer input mid-drag.
//! [`PaneResizer`] bundles them for the event-binding layer.

pub mod css;
pub mod horizontal;
pub mod host;
pub mod resizer;
pub mod session;
pub mod shield;
pub mod store;
pub mod vertical;

#[cfg(test)]
pub(crate) mod testing;

pub use horizontal::{ColumnLayout, HorizontalDivider};
pub use host::LayoutHost;
pub use resizer::{Interrupt, PaneResizer};
pub use session::{DragSession, Point};
pub use shield::FrameShield;
pub use store::{MemoryStore, RatioStore};
pub use vertical::VerticalDivider;
