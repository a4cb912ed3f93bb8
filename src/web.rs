//! Browser binding: drives an [`OrientationController`] from DOM events.
//!
//! Listeners are registered on mount and owned by a [`ListenerGuard`];
//! dropping the guard removes every one of them, so a host view that is
//! destroyed and recreated never accumulates stale listeners. Wheel and
//! touch events the controller consumes have their default action
//! prevented (page scroll, browser pinch zoom), which requires the
//! listeners to be registered as non-passive.
//!
//! ```js
//! import init, { WebController, init_logging } from "./pkg/tumble.js";
//! await init();
//! init_logging();
//! const controls = new WebController(canvas);
//! function frame() {
//!     const [pitch, yaw, zoom] = controls.tick();
//!     mesh.rotation.set(pitch, yaw, 0);
//!     camera.position.z = zoom;
//!     requestAnimationFrame(frame);
//! }
//! requestAnimationFrame(frame);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    AddEventListenerOptions, Event, EventTarget, HtmlCanvasElement,
    PointerEvent, TouchEvent, TouchList, WheelEvent,
};

use crate::controller::OrientationController;
use crate::input::InputEvent;
use crate::options::Options;

type Handler = Closure<dyn FnMut(Event)>;

/// Converts a DOM event into a controller event, if it is relevant.
type Translate = fn(&Event) -> Option<InputEvent>;

/// DOM listeners registered on one target, removed when dropped.
pub struct ListenerGuard {
    target: EventTarget,
    listeners: Vec<(&'static str, Handler)>,
}

impl ListenerGuard {
    fn new(target: EventTarget) -> Self {
        Self {
            target,
            listeners: Vec::new(),
        }
    }

    /// Register a non-passive listener for `kind`.
    fn listen(
        &mut self,
        kind: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<(), JsValue> {
        let closure = Handler::new(handler);
        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        self.target
            .add_event_listener_with_callback_and_add_event_listener_options(
                kind,
                closure.as_ref().unchecked_ref(),
                &options,
            )?;
        self.listeners.push((kind, closure));
        Ok(())
    }

    /// Number of listeners currently registered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Whether no listeners are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        for (kind, closure) in self.listeners.drain(..) {
            let _ = self.target.remove_event_listener_with_callback(
                kind,
                closure.as_ref().unchecked_ref(),
            );
        }
        log::debug!("input listeners removed");
    }
}

fn primary_pointer(event: &Event) -> Option<&PointerEvent> {
    event
        .dyn_ref::<PointerEvent>()
        .filter(|pointer| pointer.is_primary())
}

fn touch_points(list: &TouchList) -> Vec<Vec2> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(|t| Vec2::new(t.client_x() as f32, t.client_y() as f32))
        .collect()
}

fn touches(event: &Event) -> Option<Vec<Vec2>> {
    event
        .dyn_ref::<TouchEvent>()
        .map(|touch| touch_points(&touch.touches()))
}

/// `(event type, translation, cancel default when consumed)`
const ROUTES: [(&str, Translate, bool); 10] = [
    (
        "pointerdown",
        |e| {
            primary_pointer(e)
                .filter(|p| p.button() == 0)
                .map(|p| InputEvent::PointerDown {
                    x: p.client_x() as f32,
                    y: p.client_y() as f32,
                })
        },
        false,
    ),
    (
        "pointermove",
        |e| {
            primary_pointer(e).map(|p| InputEvent::PointerMove {
                x: p.client_x() as f32,
                y: p.client_y() as f32,
            })
        },
        false,
    ),
    (
        "pointerup",
        |e| primary_pointer(e).map(|_| InputEvent::PointerUp),
        false,
    ),
    (
        "pointerleave",
        |e| primary_pointer(e).map(|_| InputEvent::PointerLeave),
        false,
    ),
    (
        "pointercancel",
        |e| primary_pointer(e).map(|_| InputEvent::PointerLeave),
        false,
    ),
    (
        "wheel",
        |e| {
            e.dyn_ref::<WheelEvent>().map(|w| InputEvent::Wheel {
                delta_y: w.delta_y() as f32,
            })
        },
        true,
    ),
    (
        "touchstart",
        |e| touches(e).map(|touches| InputEvent::TouchStart { touches }),
        true,
    ),
    (
        "touchmove",
        |e| touches(e).map(|touches| InputEvent::TouchMove { touches }),
        true,
    ),
    (
        "touchend",
        |e| touches(e).map(|touches| InputEvent::TouchEnd { touches }),
        true,
    ),
    (
        "touchcancel",
        |e| touches(e).map(|touches| InputEvent::TouchEnd { touches }),
        true,
    ),
];

/// Register every input listener on `target`, routing to `controller`.
///
/// If any registration fails, the listeners already added are removed
/// before the error is returned.
///
/// # Errors
///
/// Propagates the DOM exception from `addEventListener`.
pub fn attach(
    target: &EventTarget,
    controller: &Rc<RefCell<OrientationController>>,
) -> Result<ListenerGuard, JsValue> {
    let mut guard = ListenerGuard::new(target.clone());
    for (kind, translate, cancel) in ROUTES {
        let controller = Rc::clone(controller);
        guard.listen(kind, move |event: Event| {
            let Some(input) = translate(&event) else {
                return;
            };
            let response = controller.borrow_mut().handle_event(&input);
            if cancel && response.is_consumed() && event.cancelable() {
                event.prevent_default();
            }
        })?;
    }
    log::debug!("{} input listeners attached", guard.len());
    Ok(guard)
}

/// Install the console logger and panic hook.
#[wasm_bindgen]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// JSON Schema of the UI-exposed options, for building a settings form.
///
/// # Errors
///
/// Fails only if the schema cannot be serialized.
#[wasm_bindgen(js_name = optionsSchema)]
pub fn options_schema() -> Result<String, JsValue> {
    Options::schema_json().map_err(|e| JsValue::from_str(&e.to_string()))
}

/// JavaScript handle owning a controller and its canvas listeners.
#[wasm_bindgen]
pub struct WebController {
    controller: Rc<RefCell<OrientationController>>,
    listeners: Option<ListenerGuard>,
}

#[wasm_bindgen]
impl WebController {
    /// Attach to `canvas`, optionally configured by a TOML options string.
    ///
    /// # Errors
    ///
    /// Rejects unparsable or invalid options and DOM registration
    /// failures.
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas: &HtmlCanvasElement,
        options_toml: Option<String>,
    ) -> Result<WebController, JsValue> {
        let options = match options_toml.as_deref() {
            Some(text) => Options::from_toml(text).map_err(|e| {
                log::warn!("rejecting web options: {e}");
                JsValue::from_str(&e.to_string())
            })?,
            None => Options::default(),
        };
        let controller = OrientationController::new(options.controls)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let controller = Rc::new(RefCell::new(controller));
        let listeners = attach(canvas, &controller)?;
        Ok(Self {
            controller,
            listeners: Some(listeners),
        })
    }

    /// Advance one frame; returns `[pitch, yaw, zoomDistance]`.
    pub fn tick(&self) -> js_sys::Float32Array {
        let frame = self.controller.borrow_mut().tick();
        js_sys::Float32Array::from(
            &[frame.pitch, frame.yaw, frame.zoom_distance][..],
        )
    }

    /// Ease back to the initial orientation and distance.
    #[wasm_bindgen(js_name = resetView)]
    pub fn reset_view(&self) {
        self.controller.borrow_mut().reset_view();
    }

    /// Whether a pointer drag is in progress.
    #[wasm_bindgen(getter, js_name = isDragging)]
    pub fn is_dragging(&self) -> bool {
        self.controller.borrow().is_dragging()
    }

    /// Remove all canvas listeners. Called implicitly when the handle is
    /// freed.
    pub fn detach(&mut self) {
        self.listeners = None;
    }
}
