//! DOM event wiring.

use std::cell::RefCell;
use std::rc::Rc;

use chordframe_common::{Divider, DragSource};
use chordframe_layout::{Interrupt, PaneResizer, Point};
use chordframe_router::FrameRouter;
use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, MessageEvent, MouseEvent, TouchEvent, VisibilityState, Window};

use crate::dom::DomLayout;
use crate::frames::{message_view, DomFrames, JsMessage};
use crate::storage::LocalStore;

pub(crate) type SharedResizer = Rc<RefCell<PaneResizer<DomLayout, LocalStore>>>;

/// Listeners installed at boot; they live as long as the page.
#[derive(Default)]
pub(crate) struct Bindings {
    listeners: Vec<EventListener>,
}

impl Bindings {
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn keep_alive(self) {
        for listener in self.listeners {
            listener.forget();
        }
    }

    pub fn route_messages(&mut self, window: &Window, router: FrameRouter<DomFrames>) {
        let listener = EventListener::new(window, "message", move |event: &Event| {
            let Some(event) = event.dyn_ref::<MessageEvent>() else {
                return;
            };
            let data = event.data();
            router.route(&event.origin(), message_view(&data), &JsMessage(data));
        });
        self.listeners.push(listener);
    }

    /// Press handlers on one divider element.
    pub fn divider(&mut self, element: &Element, divider: Divider, resizer: &SharedResizer) {
        let shared = Rc::clone(resizer);
        self.listeners.push(EventListener::new_with_options(
            element,
            "mousedown",
            EventListenerOptions::enable_prevent_default(),
            move |event: &Event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                with(&shared, |resizer| {
                    if resizer.press(divider, DragSource::Mouse, mouse_point(event)) {
                        event.prevent_default();
                    }
                });
            },
        ));

        let shared = Rc::clone(resizer);
        self.listeners.push(EventListener::new_with_options(
            element,
            "touchstart",
            EventListenerOptions::enable_prevent_default(),
            move |event: &Event| {
                let Some(event) = event.dyn_ref::<TouchEvent>() else {
                    return;
                };
                let Some(at) = touch_point(event) else {
                    return;
                };
                with(&shared, |resizer| {
                    if resizer.press(divider, DragSource::Touch, at) {
                        event.prevent_default();
                    }
                });
            },
        ));
    }

    /// Document-level move and release handlers shared by both dividers.
    pub fn tracking(&mut self, document: &Document, resizer: &SharedResizer) {
        let shared = Rc::clone(resizer);
        self.listeners.push(EventListener::new_with_options(
            document,
            "mousemove",
            EventListenerOptions::enable_prevent_default(),
            move |event: &Event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                with(&shared, |resizer| {
                    if resizer.is_dragging_with(DragSource::Mouse) {
                        event.prevent_default();
                        resizer.pointer_move(DragSource::Mouse, mouse_point(event));
                    }
                });
            },
        ));

        let shared = Rc::clone(resizer);
        self.listeners.push(EventListener::new_with_options(
            document,
            "touchmove",
            EventListenerOptions::enable_prevent_default(),
            move |event: &Event| {
                let Some(event) = event.dyn_ref::<TouchEvent>() else {
                    return;
                };
                with(&shared, |resizer| {
                    if !resizer.is_dragging_with(DragSource::Touch) {
                        return;
                    }
                    event.prevent_default();
                    if let Some(at) = touch_point(event) {
                        resizer.pointer_move(DragSource::Touch, at);
                    }
                });
            },
        ));

        for (kind, source) in [
            ("mouseup", DragSource::Mouse),
            ("touchend", DragSource::Touch),
            ("touchcancel", DragSource::Touch),
        ] {
            let shared = Rc::clone(resizer);
            self.listeners.push(EventListener::new(document, kind, move |_event: &Event| {
                with(&shared, |resizer| {
                    resizer.release(source);
                });
            }));
        }
    }

    /// Force-release on focus loss, so a drag never outlives its pointer.
    pub fn interrupts(&mut self, window: &Window, document: &Document, resizer: &SharedResizer) {
        let shared = Rc::clone(resizer);
        self.listeners.push(EventListener::new(window, "blur", move |_event: &Event| {
            with(&shared, |resizer| {
                resizer.interrupt(Interrupt::Blur);
            });
        }));

        let shared = Rc::clone(resizer);
        let page = document.clone();
        self.listeners.push(EventListener::new(
            document,
            "visibilitychange",
            move |_event: &Event| {
                if page.visibility_state() != VisibilityState::Hidden {
                    return;
                }
                with(&shared, |resizer| {
                    resizer.interrupt(Interrupt::Hidden);
                });
            },
        ));
    }
}

/// Run `f` on the resizer unless a handler up the stack already holds it.
fn with(resizer: &SharedResizer, f: impl FnOnce(&mut PaneResizer<DomLayout, LocalStore>)) {
    match resizer.try_borrow_mut() {
        Ok(mut resizer) => f(&mut resizer),
        Err(_) => tracing::debug!("re-entrant pointer event skipped"),
    }
}

fn mouse_point(event: &MouseEvent) -> Point {
    Point::new(f64::from(event.client_x()), f64::from(event.client_y()))
}

/// Position of the first active touch.
fn touch_point(event: &TouchEvent) -> Option<Point> {
    let touch = event.touches().item(0)?;
    Some(Point::new(f64::from(touch.client_x()), f64::from(touch.client_y())))
}
