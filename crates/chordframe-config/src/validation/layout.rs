//! Splitter validation (element ids, ratio bounds, column geometry).

use crate::schema::ChordframeConfig;

use super::helpers::{validate_non_empty, validate_range_f64};

pub(crate) fn validate_layout(errors: &mut Vec<String>, config: &ChordframeConfig) {
    let layout = &config.layout;
    validate_non_empty(errors, "layout.container_id", &layout.container_id);
    validate_non_empty(errors, "layout.divider_id", &layout.divider_id);
    validate_non_empty(errors, "layout.h_divider_id", &layout.h_divider_id);
    validate_non_empty(errors, "layout.storage_key", &layout.storage_key);

    for (name, var) in [
        ("layout.row_vars.first", &layout.row_vars.first),
        ("layout.row_vars.second", &layout.row_vars.second),
    ] {
        if !var.starts_with("--") {
            errors.push(format!("{name} = {var:?} is not a CSS custom property"));
        }
    }
}

pub(crate) fn validate_vertical(errors: &mut Vec<String>, config: &ChordframeConfig) {
    let vertical = &config.layout.vertical;
    validate_range_f64(errors, "layout.vertical.min_ratio", vertical.min_ratio, 0.0, 1.0);
    validate_range_f64(errors, "layout.vertical.max_ratio", vertical.max_ratio, 0.0, 1.0);
    if vertical.min_ratio >= vertical.max_ratio {
        errors.push(format!(
            "layout.vertical.min_ratio ({}) must be below max_ratio ({})",
            vertical.min_ratio, vertical.max_ratio
        ));
    }
}

pub(crate) fn validate_columns(errors: &mut Vec<String>, config: &ChordframeConfig) {
    let columns = &config.layout.columns;
    validate_range_f64(
        errors,
        "layout.columns.fixed_fraction",
        columns.fixed_fraction,
        0.0,
        1.0,
    );
    validate_range_f64(
        errors,
        "layout.columns.gap_fraction",
        columns.gap_fraction,
        0.0,
        1.0,
    );
    validate_range_f64(
        errors,
        "layout.columns.min_fraction",
        columns.min_fraction,
        0.0,
        1.0,
    );
    validate_range_f64(
        errors,
        "layout.columns.max_fraction",
        columns.max_fraction,
        0.0,
        1.0,
    );
    validate_non_empty(errors, "layout.columns.gap_track", &columns.gap_track);

    if columns.min_fraction > columns.max_fraction {
        errors.push(format!(
            "layout.columns.min_fraction ({}) exceeds max_fraction ({})",
            columns.min_fraction, columns.max_fraction
        ));
    }
    // The complement column must stay non-negative at the widest candidate.
    let widest = columns.fixed_fraction + columns.gap_fraction + columns.max_fraction;
    if widest > 1.0 {
        errors.push(format!(
            "layout.columns fixed + gap + max_fraction = {widest} exceeds 1.0"
        ));
    }
}
