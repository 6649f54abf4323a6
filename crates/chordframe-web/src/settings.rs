//! Resolution of the config handed to `boot`.

use chordframe_common::ConfigError;
use chordframe_config::{load_from_json, ChordframeConfig};

/// Config for a `boot(config)` call. No argument means defaults.
pub fn boot_config(json: Option<&str>) -> Result<ChordframeConfig, ConfigError> {
    match json {
        Some(text) => load_from_json(text),
        None => Ok(ChordframeConfig::default()),
    }
}
