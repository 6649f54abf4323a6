//! Router validation (breakpoint and origin policy).

use crate::schema::ChordframeConfig;

use super::helpers::{validate_non_empty, validate_range_f64};

pub(crate) fn validate_router(errors: &mut Vec<String>, config: &ChordframeConfig) {
    validate_range_f64(
        errors,
        "router.narrow_max_width",
        config.router.narrow_max_width,
        1.0,
        100_000.0,
    );
    validate_non_empty(errors, "router.target_origin", &config.router.target_origin);

    for origin in &config.router.allowed_origins {
        if origin == "*" {
            errors.push(
                "router.allowed_origins must list concrete origins; leave it empty to accept any"
                    .to_string(),
            );
        } else if !origin.contains("://") && origin != "null" {
            errors.push(format!(
                "router.allowed_origins entry {origin:?} is not an origin"
            ));
        }
    }
}
