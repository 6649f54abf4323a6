//! Config loading from TOML files, TOML text and JSON text.

mod parse;


pub use parse::{load_from_json, load_from_path, load_from_toml};
