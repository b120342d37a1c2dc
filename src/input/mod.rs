//! Browser event listeners that translate DOM events into contact
//! notifications.

pub mod pointer;
pub mod touch;

use std::cell::RefCell;
use std::rc::Rc;
use touchdecode_core::{ContactInput, GestureDecoder, Point};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

/// Lifecycle phase of a contact, as reported by one DOM event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Added,
    Updated,
    Removed,
}

impl Phase {
    pub fn input(self, id: i32, position: Point) -> ContactInput {
        let id = id.into();
        match self {
            Phase::Added => ContactInput::Added { id, position },
            Phase::Updated => ContactInput::Updated { id, position },
            Phase::Removed => ContactInput::Removed { id },
        }
    }
}

pub type Listener = Closure<dyn FnMut(web_sys::Event) -> Result<(), JsValue>>;

/// First error raised by a JS gesture callback during the current dispatch.
#[derive(Clone, Debug, Default)]
pub struct PendingError(Rc<RefCell<Option<JsValue>>>);

impl PendingError {
    /// Keep the first error; later ones in the same dispatch are logged.
    pub fn record(&self, result: Result<(), JsValue>) {
        if let Err(e) = result {
            let mut slot = self.0.borrow_mut();
            if slot.is_some() {
                log::error!("gesture callback failed: {:?}", e);
            } else {
                *slot = Some(e);
            }
        }
    }

    pub fn take(&self) -> Option<JsValue> {
        self.0.borrow_mut().take()
    }
}

/// Where listeners deliver notifications.
#[derive(Clone)]
pub struct Sink {
    pub element: HtmlElement,
    pub decoder: Rc<RefCell<GestureDecoder>>,
    pub pending: PendingError,
}

impl Sink {
    /// Convert client coordinates into the element's own space.
    pub fn local(&self, client_x: i32, client_y: i32) -> Point {
        let rect = self.element.get_bounding_client_rect();
        local_position(client_x, client_y, rect.left(), rect.top())
    }

    /// Feed every input, then rethrow the first callback error, if any.
    pub fn deliver(&self, inputs: impl IntoIterator<Item = ContactInput>) -> Result<(), JsValue> {
        match self.decoder.try_borrow_mut() {
            Ok(mut decoder) => {
                for input in inputs {
                    decoder.feed(input);
                }
            }
            Err(_) => {
                log::warn!("dropping contact notification: decoder is busy");
                return Ok(());
            }
        }
        match self.pending.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

pub fn local_position(client_x: i32, client_y: i32, left: f64, top: f64) -> Point {
    Point::new(client_x as f64 - left, client_y as f64 - top)
}

#[cfg(test)]
mod tests {
    use super::*;
    use touchdecode_core::ContactId;

    #[test]
    fn test_local_position_subtracts_origin() {
        let p = local_position(120, 45, 100.0, 40.5);
        assert_eq!(p, Point::new(20.0, 4.5));
    }

    #[test]
    fn test_phase_builds_matching_input() {
        let at = Point::new(1.0, 2.0);
        assert_eq!(
            Phase::Added.input(4, at),
            ContactInput::Added { id: ContactId(4), position: at }
        );
        assert_eq!(Phase::Removed.input(4, at), ContactInput::Removed { id: ContactId(4) });
    }
}
