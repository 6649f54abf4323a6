//! Browser bindings for the chord editor host page.
//!
//! [`boot`] wires the message router and the pane splitters to the live
//! document. DOM adapters exist only on `wasm32`; config resolution and the
//! logging setup are target-independent.

#![forbid(unsafe_code)]

pub mod logging;
pub mod settings;

#[cfg(target_arch = "wasm32")]
mod boot;
#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod frames;
#[cfg(target_arch = "wasm32")]
mod listeners;
#[cfg(target_arch = "wasm32")]
pub mod storage;

#[cfg(target_arch = "wasm32")]
pub use boot::boot;
