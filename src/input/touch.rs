use super::{Listener, Phase, Sink};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::TouchEvent;

pub const EVENTS: &[&str] = &["touchstart", "touchmove", "touchend", "touchcancel"];

pub fn phase(event_type: &str) -> Option<Phase> {
    match event_type {
        "touchstart" => Some(Phase::Added),
        "touchmove" => Some(Phase::Updated),
        "touchend" | "touchcancel" => Some(Phase::Removed),
        _ => None,
    }
}

/// One notification per entry of `changedTouches`, in list order.
pub fn listener(sink: Sink, prevent_default: bool) -> Listener {
    Closure::new(move |ev: web_sys::Event| -> Result<(), JsValue> {
        let Some(phase) = phase(&ev.type_()) else {
            return Ok(());
        };
        let Ok(ev) = ev.dyn_into::<TouchEvent>() else {
            return Ok(());
        };
        if prevent_default {
            ev.prevent_default();
        }

        let changed = ev.changed_touches();
        let inputs: Vec<_> = (0..changed.length())
            .filter_map(|i| changed.get(i))
            .map(|t| phase.input(t.identifier(), sink.local(t.client_x(), t.client_y())))
            .collect();
        sink.deliver(inputs)
    })
}
