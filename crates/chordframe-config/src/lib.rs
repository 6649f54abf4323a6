//! Chordframe host configuration.
//!
//! Every section uses `serde(default)`, so a host page only passes the keys it
//! wants to change. Configs can be read from TOML (files or text) and from the
//! JSON object handed to the wasm `boot` entry point.
//!
//! ```rust
//! use chordframe_config::load_from_json;
//!
//! let config = load_from_json(r#"{ "router": { "narrow_max_width": 900 } }"#).unwrap();
//! assert_eq!(config.router.narrow_max_width, 900.0);
//! assert_eq!(config.layout.storage_key, "frame-divider-position");
//! ```

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_from_json, load_from_path, load_from_toml};
pub use schema::{
    ChordframeConfig, ColumnSplitConfig, FramesConfig, LayoutConfig, LogLevel, LoggingConfig,
    RouterConfig, RowVars, VerticalSplitConfig,
};
