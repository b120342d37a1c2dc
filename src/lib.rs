//! Browser binding for `touchdecode-core`: attaches a [`GestureDecoder`] to an
//! HTML element's pointer or touch events and exposes it to JavaScript.

pub mod error;
pub mod input;
pub mod js_api;
pub mod options;
pub mod surface;

pub use error::Error;
pub use options::{BindOptions, InputKind};
pub use surface::GestureSurface;
pub use touchdecode_core::{
    DecoderConfig, DegenerateZoom, DragEvent, GestureDecoder, GestureKind, Reanchor, ZoomEvent,
};

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // A host page may have installed its own logger already.
    let _ = console_log::init_with_level(log::Level::Info);
}
