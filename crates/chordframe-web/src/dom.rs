//! `LayoutHost` over the live document.
//!
//! Elements are looked up by id on every call so a host page may swap them
//! out. Style writes that the browser rejects are logged and dropped.

use chordframe_common::{Divider, HostError, Rect};
use chordframe_config::LayoutConfig;
use chordframe_layout::LayoutHost;
use tracing::debug;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CssStyleDeclaration, Document, Element, HtmlElement, Window};

use crate::frames::describe;

const DRAGGING_CLASS: &str = "dragging";

pub struct DomLayout {
    window: Window,
    document: Document,
    root: HtmlElement,
    container_id: String,
    divider_id: String,
    h_divider_id: String,
}

impl DomLayout {
    pub fn new(window: Window, document: Document, config: &LayoutConfig) -> Result<Self, HostError> {
        let root = document
            .document_element()
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
            .ok_or_else(|| HostError::ElementMissing("documentElement".into()))?;
        Ok(Self {
            window,
            document,
            root,
            container_id: config.container_id.clone(),
            divider_id: config.divider_id.clone(),
            h_divider_id: config.h_divider_id.clone(),
        })
    }

    pub fn element(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn html_element(&self, id: &str) -> Option<HtmlElement> {
        self.element(id)?.dyn_into::<HtmlElement>().ok()
    }

    fn divider_id(&self, divider: Divider) -> &str {
        match divider {
            Divider::Vertical => &self.divider_id,
            Divider::Horizontal => &self.h_divider_id,
        }
    }

    fn body_style(&self) -> Option<CssStyleDeclaration> {
        self.document.body().map(|body| body.style())
    }
}

fn set_or_clear(style: &CssStyleDeclaration, property: &str, value: Option<&str>) {
    let result = match value {
        Some(value) => style.set_property(property, value),
        None => style.remove_property(property).map(|_| ()),
    };
    if let Err(e) = result {
        debug!(property, error = %describe(&e), "style write rejected");
    }
}

fn log_rejected(what: &str, result: Result<(), JsValue>) {
    if let Err(e) = result {
        debug!(what, error = %describe(&e), "DOM write rejected");
    }
}

impl LayoutHost for DomLayout {
    fn container_rect(&self) -> Option<Rect> {
        let rect = self.element(&self.container_id)?.get_bounding_client_rect();
        Some(Rect::new(rect.x(), rect.y(), rect.width(), rect.height()))
    }

    fn set_root_var(&mut self, name: &str, value: &str) {
        set_or_clear(&self.root.style(), name, Some(value));
    }

    fn root_var(&self, name: &str) -> Option<String> {
        let computed = self.window.get_computed_style(&self.root).ok()??;
        let value = computed.get_property_value(name).ok()?;
        let value = value.trim();
        (!value.is_empty()).then(|| value.to_string())
    }

    fn set_column_template(&mut self, template: &str) {
        if let Some(container) = self.html_element(&self.container_id) {
            set_or_clear(&container.style(), "grid-template-columns", Some(template));
        }
    }

    fn set_divider_dragging(&mut self, divider: Divider, dragging: bool) {
        let Some(element) = self.element(self.divider_id(divider)) else {
            return;
        };
        let classes = element.class_list();
        let result = if dragging {
            classes.add_1(DRAGGING_CLASS)
        } else {
            classes.remove_1(DRAGGING_CLASS)
        };
        log_rejected("divider class", result);
    }

    fn set_cursor(&mut self, cursor: Option<&str>) {
        if let Some(style) = self.body_style() {
            set_or_clear(&style, "cursor", cursor);
        }
    }

    fn set_text_selection(&mut self, enabled: bool) {
        if let Some(style) = self.body_style() {
            set_or_clear(&style, "user-select", (!enabled).then_some("none"));
        }
    }

    fn set_frames_interactive(&mut self, interactive: bool) {
        let frames = match self.document.query_selector_all("iframe") {
            Ok(frames) => frames,
            Err(e) => {
                debug!(error = %describe(&e), "iframe query failed");
                return;
            }
        };
        let value = (!interactive).then_some("none");
        for index in 0..frames.length() {
            let Some(frame) = frames
                .item(index)
                .and_then(|node| node.dyn_into::<HtmlElement>().ok())
            else {
                continue;
            };
            set_or_clear(&frame.style(), "pointer-events", value);
        }
    }
}
