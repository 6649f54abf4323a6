use std::path::Path;

use chordframe_common::ConfigError;
use tracing::{info, warn};

use crate::schema::ChordframeConfig;
use crate::validation;

/// Load config from a TOML file.
pub fn load_from_path(path: &Path) -> Result<ChordframeConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config = load_from_toml(&content)?;
    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Parse TOML text. Missing keys take their defaults.
///
/// A config that parses but fails validation is replaced by the default
/// config, with a warning.
pub fn load_from_toml(content: &str) -> Result<ChordframeConfig, ConfigError> {
    let config: ChordframeConfig = toml::from_str(content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;
    Ok(validated_or_default(config))
}

/// Parse the JSON object handed over by the host page.
///
/// An empty or whitespace-only string yields the default config.
pub fn load_from_json(content: &str) -> Result<ChordframeConfig, ConfigError> {
    if content.trim().is_empty() {
        return Ok(ChordframeConfig::default());
    }
    let config: ChordframeConfig = serde_json::from_str(content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse JSON: {e}")))?;
    Ok(validated_or_default(config))
}

fn validated_or_default(config: ChordframeConfig) -> ChordframeConfig {
    match validation::validate(&config) {
        Ok(()) => config,
        Err(e) => {
            warn!("config validation warning: {e}");
            warn!("falling back to default config");
            ChordframeConfig::default()
        }
    }
}
