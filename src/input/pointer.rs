use super::{Listener, Phase, Sink};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Node, PointerEvent};

/// Events the pointer listener is registered for. Every way a pointer can
/// stop being tracked maps to a removal.
pub const EVENTS: &[&str] = &[
    "pointerdown",
    "pointermove",
    "pointerup",
    "pointercancel",
    "pointerout",
    "pointerleave",
];

/// `within` is whether the event's `relatedTarget` lies inside the bound
/// element. `pointerout` bubbles from children and fires when the pointer
/// crosses onto a child, so it only ends a contact that left the element.
pub fn phase(event_type: &str, within: bool) -> Option<Phase> {
    match event_type {
        "pointerdown" => Some(Phase::Added),
        "pointermove" => Some(Phase::Updated),
        "pointerout" if within => None,
        "pointerup" | "pointercancel" | "pointerout" | "pointerleave" => Some(Phase::Removed),
        _ => None,
    }
}

pub fn listener(sink: Sink, prevent_default: bool, capture: bool) -> Listener {
    Closure::new(move |ev: web_sys::Event| -> Result<(), JsValue> {
        let Ok(ev) = ev.dyn_into::<PointerEvent>() else {
            return Ok(());
        };
        let within = ev
            .related_target()
            .and_then(|t| t.dyn_into::<Node>().ok())
            .is_some_and(|n| sink.element.contains(Some(&n)));
        let Some(phase) = phase(&ev.type_(), within) else {
            return Ok(());
        };
        if prevent_default {
            ev.prevent_default();
        }

        let id = ev.pointer_id();
        if capture && phase == Phase::Added {
            if let Err(e) = sink.element.set_pointer_capture(id) {
                log::warn!("setPointerCapture({}) failed: {:?}", id, e);
            }
        }

        let position = sink.local(ev.client_x(), ev.client_y());
        sink.deliver([phase.input(id, position)])
    })
}
