//! `wasm-bindgen` surface used from JavaScript:
//!
//! ```js
//! const gestures = new Gestures(canvas, { source: "pointer" });
//! gestures.on(GestureKind.ZoomUpdate, ({ x, y, scale }) => view.zoomAt(x, y, scale));
//! gestures.detach();
//! ```

use crate::error::Error;
use crate::input::PendingError;
use crate::options::BindOptions;
use crate::surface::GestureSurface;
use js_sys::{Function, Object, Reflect};
use touchdecode_core::{DragEvent, GestureDecoder, ZoomEvent};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

/// Gesture kinds a callback can be registered for.
#[wasm_bindgen(js_name = GestureKind)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JsGestureKind {
    DragStart,
    DragUpdate,
    DragStop,
    ZoomStart,
    ZoomUpdate,
    ZoomStop,
}

impl From<JsGestureKind> for touchdecode_core::GestureKind {
    fn from(kind: JsGestureKind) -> Self {
        use touchdecode_core::GestureKind as K;
        match kind {
            JsGestureKind::DragStart => K::DragStart,
            JsGestureKind::DragUpdate => K::DragUpdate,
            JsGestureKind::DragStop => K::DragStop,
            JsGestureKind::ZoomStart => K::ZoomStart,
            JsGestureKind::ZoomUpdate => K::ZoomUpdate,
            JsGestureKind::ZoomStop => K::ZoomStop,
        }
    }
}

#[wasm_bindgen]
pub struct Gestures {
    surface: GestureSurface,
}

#[wasm_bindgen]
impl Gestures {
    /// Start decoding gestures on `element`. `options` is an optional plain
    /// object, see [`BindOptions`].
    #[wasm_bindgen(constructor)]
    pub fn new(element: HtmlElement, options: JsValue) -> Result<Gestures, JsValue> {
        let options = BindOptions::from_js(&options)?;
        let surface = GestureSurface::attach(element, options)?;
        Ok(Gestures { surface })
    }

    /// Register `callback` for `kind`, replacing any earlier one. The callback
    /// receives `{ x, y }` for drag kinds and `{ x, y, scale }` for zoom kinds.
    pub fn on(&self, kind: JsGestureKind, callback: Function) -> Result<(), JsValue> {
        let mut decoder = self.decoder_mut()?;
        let pending = self.surface.pending_error().clone();
        match kind {
            JsGestureKind::DragStart => decoder.on_drag_start(drag_callback(callback, pending)),
            JsGestureKind::DragUpdate => decoder.on_drag_update(drag_callback(callback, pending)),
            JsGestureKind::DragStop => decoder.on_drag_stop(drag_callback(callback, pending)),
            JsGestureKind::ZoomStart => decoder.on_zoom_start(zoom_callback(callback, pending)),
            JsGestureKind::ZoomUpdate => decoder.on_zoom_update(zoom_callback(callback, pending)),
            JsGestureKind::ZoomStop => decoder.on_zoom_stop(zoom_callback(callback, pending)),
        }
        Ok(())
    }

    pub fn off(&self, kind: JsGestureKind) -> Result<(), JsValue> {
        self.decoder_mut()?.clear(kind.into());
        Ok(())
    }

    #[wasm_bindgen(getter, js_name = contactCount)]
    pub fn contact_count(&self) -> usize {
        self.surface.contact_count()
    }

    #[wasm_bindgen(getter)]
    pub fn attached(&self) -> bool {
        self.surface.is_attached()
    }

    /// Stop listening to the element. An active gesture receives its stop
    /// event first, unless this is called from inside a gesture callback.
    pub fn detach(&mut self) -> Result<(), JsValue> {
        self.surface.detach()?;
        Ok(())
    }
}

impl Gestures {
    fn decoder_mut(&self) -> Result<std::cell::RefMut<'_, GestureDecoder>, Error> {
        if !self.surface.is_attached() {
            return Err(Error::Detached);
        }
        self.surface.decoder().try_borrow_mut().map_err(|_| Error::Busy)
    }
}

fn drag_callback(callback: Function, pending: PendingError) -> impl FnMut(&DragEvent) + 'static {
    move |ev| pending.record(call(&callback, &[("x", ev.x), ("y", ev.y)]))
}

fn zoom_callback(callback: Function, pending: PendingError) -> impl FnMut(&ZoomEvent) + 'static {
    move |ev| {
        pending.record(call(
            &callback,
            &[("x", ev.x), ("y", ev.y), ("scale", ev.scale)],
        ))
    }
}

/// Build the payload object field by field so non-finite scales reach JS as
/// `Infinity`/`NaN` rather than `null`.
fn call(callback: &Function, fields: &[(&str, f64)]) -> Result<(), JsValue> {
    let payload = Object::new();
    for &(key, value) in fields {
        Reflect::set(&payload, &JsValue::from_str(key), &JsValue::from_f64(value))?;
    }
    callback.call1(&JsValue::NULL, &payload)?;
    Ok(())
}
