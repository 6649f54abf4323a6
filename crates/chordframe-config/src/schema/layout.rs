//! Pane splitter configuration.

use serde::{Deserialize, Serialize};

/// CSS custom properties holding the two row proportions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RowVars {
    pub first: String,
    pub second: String,
}

impl Default for RowVars {
    fn default() -> Self {
        Self {
            first: "--row1-height".into(),
            second: "--row2-height".into(),
        }
    }
}

/// Bounds of the persisted vertical split ratio.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct VerticalSplitConfig {
    pub min_ratio: f64,
    pub max_ratio: f64,
}

impl Default for VerticalSplitConfig {
    fn default() -> Self {
        Self {
            min_ratio: 0.05,
            max_ratio: 0.95,
        }
    }
}

/// Column geometry of the horizontal splitter.
///
/// `fixed_fraction` is the R1 column, `gap_fraction` the share of width
/// reserved for the gutter. The gutter track itself is rendered as
/// `gap_track` (a CSS length).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnSplitConfig {
    pub fixed_fraction: f64,
    pub gap_fraction: f64,
    pub gap_track: String,
    pub min_fraction: f64,
    pub max_fraction: f64,
}

impl Default for ColumnSplitConfig {
    fn default() -> Self {
        Self {
            fixed_fraction: 0.125,
            gap_fraction: 0.03,
            gap_track: "6px".into(),
            min_fraction: 0.2,
            max_fraction: 0.6,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Grid container holding every frame.
    pub container_id: String,
    /// Row splitter element.
    pub divider_id: String,
    /// Column splitter element.
    pub h_divider_id: String,
    /// localStorage key of the vertical split ratio.
    pub storage_key: String,
    pub row_vars: RowVars,
    /// Force-release drags when the window loses focus.
    pub release_on_blur: bool,
    pub vertical: VerticalSplitConfig,
    pub columns: ColumnSplitConfig,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            container_id: "frame-container".into(),
            divider_id: "resize-divider".into(),
            h_divider_id: "h-resize-divider".into(),
            storage_key: "frame-divider-position".into(),
            row_vars: RowVars::default(),
            release_on_blur: true,
            vertical: VerticalSplitConfig::default(),
            columns: ColumnSplitConfig::default(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
