//! `FrameHost` over the live document.

use chordframe_common::{FrameId, HostError};
use chordframe_config::FramesConfig;
use chordframe_router::rules::LOAD_ALL_KIND;
use chordframe_router::{FrameHost, FramePort, Payload};
use js_sys::{Array, Object, Reflect, JSON};
use serde_json::{Map, Value};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlIFrameElement, Window};

pub struct DomFrames {
    window: Window,
    document: Document,
    ids: FramesConfig,
}

impl DomFrames {
    pub fn new(window: Window, document: Document, ids: FramesConfig) -> Self {
        Self {
            window,
            document,
            ids,
        }
    }
}

impl FrameHost for DomFrames {
    type Port = ContentWindow;

    fn resolve(&self, frame: FrameId) -> Option<ContentWindow> {
        let element = self.document.get_element_by_id(self.ids.element_id(frame))?;
        let iframe = element.dyn_into::<HtmlIFrameElement>().ok()?;
        let window = iframe.content_window()?;
        Some(ContentWindow { frame, window })
    }

    fn viewport_width(&self) -> f64 {
        // Unknown width routes as wide.
        self.window
            .inner_width()
            .ok()
            .and_then(|width| width.as_f64())
            .unwrap_or(f64::INFINITY)
    }
}

/// A message exactly as the sender posted it (`MessageEvent.data`).
#[derive(Debug, Clone)]
pub struct JsMessage(pub JsValue);

impl Payload for JsMessage {
    /// New `{ type: "R1_LOAD_ALL", chords }` whose `chords` is the sender's
    /// own list object.
    fn repack_load_all(&self, _chords: &[Value]) -> Result<Self, HostError> {
        let chords = Reflect::get(&self.0, &JsValue::from_str("chords"))
            .map_err(|e| HostError::Repack(describe(&e)))?;
        let message = Object::new();
        for (key, value) in [("type", JsValue::from_str(LOAD_ALL_KIND)), ("chords", chords)] {
            Reflect::set(&message, &JsValue::from_str(key), &value)
                .map_err(|e| HostError::Repack(describe(&e)))?;
        }
        Ok(JsMessage(message.into()))
    }
}

/// The browsing context of one frame, as resolved for a single dispatch.
pub struct ContentWindow {
    frame: FrameId,
    window: Window,
}

impl FramePort for ContentWindow {
    type Payload = JsMessage;

    fn post(&self, payload: &JsMessage, target_origin: &str) -> Result<(), HostError> {
        self.window
            .post_message(&payload.0, target_origin)
            .map_err(|e| HostError::PostFailed {
                frame: self.frame,
                reason: describe(&e),
            })
    }
}

/// JSON view of a posted message, used only to pick its route.
///
/// Each top-level field is encoded on its own, so one field JSON cannot
/// carry (`BigInt`, a cycle) becomes `null` without hiding the rest.
pub fn message_view(data: &JsValue) -> Value {
    if !data.is_object() || Array::is_array(data) {
        return json_or_null(data);
    }
    let mut fields = Map::new();
    for entry in Object::entries(data.unchecked_ref::<Object>()).iter() {
        let entry = entry.unchecked_into::<Array>();
        if let Some(key) = entry.get(0).as_string() {
            fields.insert(key, json_or_null(&entry.get(1)));
        }
    }
    Value::Object(fields)
}

fn json_or_null(value: &JsValue) -> Value {
    JSON::stringify(value)
        .ok()
        .and_then(|text| text.as_string())
        .and_then(|text| serde_json::from_str(&text).ok())
        .unwrap_or(Value::Null)
}

pub(crate) fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
