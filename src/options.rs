use crate::error::Error;
use serde::Deserialize;
use touchdecode_core::DecoderConfig;
use wasm_bindgen::JsValue;

/// Which browser event family feeds the decoder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    #[default]
    Pointer,
    Touch,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BindOptions {
    pub source: InputKind,
    /// Call `preventDefault` on every handled event.
    pub prevent_default: bool,
    /// Capture the pointer on `pointerdown` so moves outside the element are
    /// still delivered.
    pub pointer_capture: bool,
    /// Set `touch-action: none` on the element while attached.
    pub touch_action_none: bool,
    #[serde(flatten)]
    pub decoder: DecoderConfig,
}

impl Default for BindOptions {
    fn default() -> Self {
        Self {
            source: InputKind::Pointer,
            prevent_default: true,
            pointer_capture: true,
            touch_action_none: true,
            decoder: DecoderConfig::default(),
        }
    }
}

impl BindOptions {
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read options from a plain JS object. `undefined` and `null` give the
    /// defaults.
    pub fn from_js(value: &JsValue) -> Result<Self, Error> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        let json: String = js_sys::JSON::stringify(value)?.into();
        Self::from_json(&json)
    }
}
