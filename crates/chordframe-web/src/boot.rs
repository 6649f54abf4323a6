//! The `boot` entry point exported to the host page.

use std::cell::RefCell;
use std::fmt::Display;
use std::rc::Rc;

use chordframe_common::{ChordframeError, Divider, HostError};
use chordframe_config::ChordframeConfig;
use chordframe_layout::PaneResizer;
use chordframe_router::FrameRouter;
use gloo::events::EventListener;
use tracing::{debug, error, info};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

use crate::dom::DomLayout;
use crate::frames::DomFrames;
use crate::listeners::Bindings;
use crate::storage::LocalStore;
use crate::{logging, settings};

/// Start routing and resizing on this page.
///
/// `config` is an optional JSON object with any subset of the config keys.
/// Runs once the document is parsed; rejects on a bad config or when there
/// is no document to bind to.
#[wasm_bindgen]
pub fn boot(config: Option<String>) -> Result<(), JsValue> {
    schedule(config.as_deref()).map_err(to_js)
}

fn schedule(config: Option<&str>) -> Result<(), ChordframeError> {
    let config = settings::boot_config(config)?;
    logging::init(&config.logging);

    let window = web_sys::window().ok_or_else(|| HostError::Unavailable("window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| HostError::Unavailable("document".into()))?;

    if document.ready_state() == "loading" {
        debug!("waiting for DOMContentLoaded");
        let target = document.clone();
        EventListener::once(&target, "DOMContentLoaded", move |_event| {
            if let Err(e) = start(window, document, &config) {
                error!(error = %e, "chordframe failed to start");
            }
        })
        .forget();
        return Ok(());
    }

    start(window, document, &config)
}

fn start(window: Window, document: Document, config: &ChordframeConfig) -> Result<(), ChordframeError> {
    let mut bindings = Bindings::default();

    let frames = DomFrames::new(window.clone(), document.clone(), config.frames.clone());
    bindings.route_messages(&window, FrameRouter::new(frames, &config.router));

    let layout = DomLayout::new(window.clone(), document.clone(), &config.layout)?;
    let vertical = layout.element(&config.layout.divider_id);
    let horizontal = layout.element(&config.layout.h_divider_id);

    // Pages without a divider still get the saved ratio.
    let mut resizer = PaneResizer::new(layout, LocalStore::new(&window), &config.layout);
    resizer.restore();
    let resizer = Rc::new(RefCell::new(resizer));

    for (element, divider) in [(&vertical, Divider::Vertical), (&horizontal, Divider::Horizontal)] {
        match element {
            Some(element) => bindings.divider(element, divider, &resizer),
            None => debug!(?divider, "divider not on this page"),
        }
    }
    if vertical.is_some() || horizontal.is_some() {
        bindings.tracking(&document, &resizer);
        bindings.interrupts(&window, &document, &resizer);
    }

    info!(
        listeners = bindings.len(),
        vertical = vertical.is_some(),
        horizontal = horizontal.is_some(),
        "chordframe started"
    );
    bindings.keep_alive();
    Ok(())
}

fn to_js(e: impl Display) -> JsValue {
    js_sys::Error::new(&e.to_string()).into()
}
