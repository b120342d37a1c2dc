use crate::config::DecoderConfig;
use crate::contact::{ContactCache, ContactId, ContactInput};
use crate::dispatch::Handlers;
use crate::event::{DragEvent, Gesture, GestureKind, ZoomEvent};
use crate::geometry::Point;
use crate::state::GestureState;
use std::cell::Cell;
use std::rc::Rc;

/// Turns contact notifications into drag and zoom gestures.
///
/// Every notification runs to completion: the cache is mutated, the state
/// transitions, and only then are the resulting events handed to the
/// registered handlers, in order. A panicking handler propagates to the
/// caller of the notification; the decoder state is already consistent at
/// that point.
#[derive(Debug, Default)]
pub struct GestureDecoder {
    config: DecoderConfig,
    cache: ContactCache,
    state: GestureState,
    handlers: Handlers,
    live_count: Rc<Cell<usize>>,
}

impl GestureDecoder {
    pub fn new(config: DecoderConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn contact_count(&self) -> usize {
        self.cache.len()
    }

    /// Shared view of the contact count, kept current before any handler
    /// runs. Readable from inside a handler, where the decoder itself may be
    /// mutably borrowed.
    pub fn contact_counter(&self) -> Rc<Cell<usize>> {
        self.live_count.clone()
    }

    pub fn contacts(&self) -> &ContactCache {
        &self.cache
    }

    pub fn on_drag_start(&mut self, f: impl FnMut(&DragEvent) + 'static) {
        self.handlers.set_drag_start(f);
    }

    pub fn on_drag_update(&mut self, f: impl FnMut(&DragEvent) + 'static) {
        self.handlers.set_drag_update(f);
    }

    pub fn on_drag_stop(&mut self, f: impl FnMut(&DragEvent) + 'static) {
        self.handlers.set_drag_stop(f);
    }

    pub fn on_zoom_start(&mut self, f: impl FnMut(&ZoomEvent) + 'static) {
        self.handlers.set_zoom_start(f);
    }

    pub fn on_zoom_update(&mut self, f: impl FnMut(&ZoomEvent) + 'static) {
        self.handlers.set_zoom_update(f);
    }

    pub fn on_zoom_stop(&mut self, f: impl FnMut(&ZoomEvent) + 'static) {
        self.handlers.set_zoom_stop(f);
    }

    pub fn clear(&mut self, kind: GestureKind) {
        self.handlers.clear(kind);
    }

    pub fn handlers(&self) -> &Handlers {
        &self.handlers
    }

    pub fn feed(&mut self, input: ContactInput) {
        match input {
            ContactInput::Added { id, position } => self.contact_added(id, position.x, position.y),
            ContactInput::Updated { id, position } => {
                self.contact_updated(id, position.x, position.y)
            }
            ContactInput::Removed { id } => self.contact_removed(id),
        }
    }

    /// A new contact went down. An `id` that is already tracked is treated as
    /// a move of that contact.
    pub fn contact_added(&mut self, id: impl Into<ContactId>, x: f64, y: f64) {
        let id = id.into();
        let position = Point::new(x, y);
        if !self.cache.add(id, position) {
            log::debug!("contact {:?} added twice, treating as update", id);
            self.contact_updated(id, x, y);
            return;
        }

        let mut events = Vec::new();
        self.state = self.state.added(&self.cache, &self.config, &mut events);
        self.emit(&events);
    }

    pub fn contact_updated(&mut self, id: impl Into<ContactId>, x: f64, y: f64) {
        let id = id.into();
        if !self.cache.update(id, Point::new(x, y)) {
            log::trace!("ignoring update for unknown contact {:?}", id);
            return;
        }

        let mut events = Vec::new();
        self.state = self.state.updated(&self.cache, &self.config, &mut events);
        self.emit(&events);
    }

    pub fn contact_removed(&mut self, id: impl Into<ContactId>) {
        let id = id.into();
        if !self.cache.contains(id) {
            log::trace!("ignoring removal of unknown contact {:?}", id);
            return;
        }

        let mut events = Vec::new();
        let state = self.state.before_removal(&self.cache, &self.config, &mut events);
        self.cache.remove(id);
        self.state = state.after_removal(&self.cache, &self.config, &mut events);
        self.emit(&events);
    }

    /// Forget every contact, stopping the active gesture if there is one.
    pub fn reset(&mut self) {
        let mut events = Vec::new();
        self.state = self.state.reset(&self.cache, &self.config, &mut events);
        self.cache.clear();
        self.emit(&events);
    }

    fn emit(&mut self, events: &[Gesture]) {
        self.live_count.set(self.cache.len());
        for gesture in events {
            self.handlers.dispatch(gesture);
        }
    }
}
