use std::fmt;
use wasm_bindgen::JsValue;

#[derive(Debug)]
pub enum Error {
    /// The options object could not be read as [`crate::BindOptions`].
    Options(serde_json::Error),
    /// A DOM call failed.
    Dom(JsValue),
    /// The decoder is busy dispatching; called from inside a gesture handler.
    Busy,
    /// Handlers were changed after [`crate::GestureSurface::detach`].
    Detached,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Options(e) => write!(f, "invalid gesture options: {e}"),
            Error::Dom(e) => write!(f, "DOM error: {e:?}"),
            Error::Busy => f.write_str("gesture decoder is busy dispatching an event"),
            Error::Detached => f.write_str("gestures have been detached from the element"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Options(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Options(e)
    }
}

impl From<JsValue> for Error {
    fn from(e: JsValue) -> Self {
        Error::Dom(e)
    }
}

impl From<Error> for JsValue {
    fn from(e: Error) -> Self {
        match e {
            Error::Dom(value) => value,
            other => js_sys::Error::new(&other.to_string()).into(),
        }
    }
}
