//! Full configuration validation.
//!
//! Each section has its own submodule; `validate` collects every error into
//! a single `ConfigError`.

mod frames;
mod helpers;
mod layout;
mod router;


use chordframe_common::ConfigError;

use crate::schema::ChordframeConfig;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ChordframeConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    frames::validate_frames(&mut errors, config);
    router::validate_router(&mut errors, config);
    layout::validate_layout(&mut errors, config);
    layout::validate_vertical(&mut errors, config);
    layout::validate_columns(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
