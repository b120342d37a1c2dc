use crate::error::Error;
use crate::input::{self, Listener, PendingError, Sink};
use crate::options::{BindOptions, InputKind};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use touchdecode_core::GestureDecoder;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, HtmlElement};

const TOUCH_ACTION: &str = "touch-action";

/// A [`GestureDecoder`] bound to one element's input events for as long as
/// the surface lives. Dropping it detaches.
pub struct GestureSurface {
    element: HtmlElement,
    decoder: Rc<RefCell<GestureDecoder>>,
    contact_count: Rc<Cell<usize>>,
    pending: PendingError,
    listener: Option<Listener>,
    events: &'static [&'static str],
    /// `touch-action` value to restore on detach, if we overrode it.
    saved_touch_action: Option<String>,
}

impl GestureSurface {
    pub fn attach(element: HtmlElement, options: BindOptions) -> Result<Self, Error> {
        let decoder = GestureDecoder::new(options.decoder);
        let contact_count = decoder.contact_counter();
        let decoder = Rc::new(RefCell::new(decoder));
        let pending = PendingError::default();
        let sink = Sink {
            element: element.clone(),
            decoder: decoder.clone(),
            pending: pending.clone(),
        };

        let (listener, events): (Listener, &'static [&'static str]) = match options.source {
            InputKind::Pointer => (
                input::pointer::listener(sink, options.prevent_default, options.pointer_capture),
                input::pointer::EVENTS,
            ),
            InputKind::Touch => (
                input::touch::listener(sink, options.prevent_default),
                input::touch::EVENTS,
            ),
        };

        // From here on a failure drops `surface`, which undoes what was done.
        let mut surface = Self {
            element,
            decoder,
            contact_count,
            pending,
            listener: Some(listener),
            events,
            saved_touch_action: None,
        };

        if options.touch_action_none {
            let style = surface.element.style();
            surface.saved_touch_action = Some(style.get_property_value(TOUCH_ACTION)?);
            style.set_property(TOUCH_ACTION, "none")?;
        }

        // Non-passive so preventDefault can suppress scrolling on touch.
        let listen_opts = AddEventListenerOptions::new();
        listen_opts.set_passive(false);
        if let Some(listener) = &surface.listener {
            for name in surface.events {
                surface
                    .element
                    .add_event_listener_with_callback_and_add_event_listener_options(
                        name,
                        listener.as_ref().unchecked_ref(),
                        &listen_opts,
                    )?;
            }
        }

        log::info!("gestures attached ({:?} input)", options.source);
        Ok(surface)
    }

    pub fn decoder(&self) -> &Rc<RefCell<GestureDecoder>> {
        &self.decoder
    }

    /// Slot JS callbacks report their exceptions into; the listener rethrows
    /// it once the notification has been processed.
    pub fn pending_error(&self) -> &PendingError {
        &self.pending
    }

    /// Number of active contacts. Safe to call from inside a gesture handler.
    pub fn contact_count(&self) -> usize {
        self.contact_count.get()
    }

    pub fn is_attached(&self) -> bool {
        self.listener.is_some()
    }

    /// Remove listeners, restore `touch-action` and stop any active gesture.
    ///
    /// Listeners are removed even when called from inside a gesture handler.
    /// In that case the decoder is still dispatching and the stop events are
    /// skipped.
    pub fn detach(&mut self) -> Result<(), Error> {
        if self.listener.is_none() && self.saved_touch_action.is_none() {
            return Ok(());
        }

        if let Some(listener) = self.listener.take() {
            for name in self.events {
                if let Err(e) = self
                    .element
                    .remove_event_listener_with_callback(name, listener.as_ref().unchecked_ref())
                {
                    log::error!("failed to remove {} listener: {:?}", name, e);
                }
            }
        }

        if let Some(previous) = self.saved_touch_action.take() {
            let style = self.element.style();
            let restored = if previous.is_empty() {
                style.remove_property(TOUCH_ACTION).map(|_| ())
            } else {
                style.set_property(TOUCH_ACTION, &previous)
            };
            if let Err(e) = restored {
                log::error!("failed to restore touch-action: {:?}", e);
            }
        }

        log::info!("gestures detached");
        match self.decoder.try_borrow_mut() {
            Ok(mut decoder) => decoder.reset(),
            Err(_) => {
                log::debug!("detached during dispatch, active gesture not stopped");
                return Ok(());
            }
        }
        match self.pending.take() {
            Some(e) => Err(Error::Dom(e)),
            None => Ok(()),
        }
    }
}

impl Drop for GestureSurface {
    fn drop(&mut self) {
        if let Err(e) = self.detach() {
            log::error!("{}", e);
        }
    }
}
