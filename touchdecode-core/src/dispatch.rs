use crate::event::{DragEvent, Gesture, GestureKind, ZoomEvent};
use std::fmt;

pub type DragHandler = Box<dyn FnMut(&DragEvent)>;
pub type ZoomHandler = Box<dyn FnMut(&ZoomEvent)>;

/// One optional handler per gesture kind. Registering replaces the previous
/// handler for that kind.
#[derive(Default)]
pub struct Handlers {
    drag_start: Option<DragHandler>,
    drag_update: Option<DragHandler>,
    drag_stop: Option<DragHandler>,
    zoom_start: Option<ZoomHandler>,
    zoom_update: Option<ZoomHandler>,
    zoom_stop: Option<ZoomHandler>,
}

impl Handlers {
    pub fn set_drag_start(&mut self, f: impl FnMut(&DragEvent) + 'static) {
        self.drag_start = Some(Box::new(f));
    }

    pub fn set_drag_update(&mut self, f: impl FnMut(&DragEvent) + 'static) {
        self.drag_update = Some(Box::new(f));
    }

    pub fn set_drag_stop(&mut self, f: impl FnMut(&DragEvent) + 'static) {
        self.drag_stop = Some(Box::new(f));
    }

    pub fn set_zoom_start(&mut self, f: impl FnMut(&ZoomEvent) + 'static) {
        self.zoom_start = Some(Box::new(f));
    }

    pub fn set_zoom_update(&mut self, f: impl FnMut(&ZoomEvent) + 'static) {
        self.zoom_update = Some(Box::new(f));
    }

    pub fn set_zoom_stop(&mut self, f: impl FnMut(&ZoomEvent) + 'static) {
        self.zoom_stop = Some(Box::new(f));
    }

    pub fn clear(&mut self, kind: GestureKind) {
        match kind {
            GestureKind::DragStart => self.drag_start = None,
            GestureKind::DragUpdate => self.drag_update = None,
            GestureKind::DragStop => self.drag_stop = None,
            GestureKind::ZoomStart => self.zoom_start = None,
            GestureKind::ZoomUpdate => self.zoom_update = None,
            GestureKind::ZoomStop => self.zoom_stop = None,
        }
    }

    pub fn is_registered(&self, kind: GestureKind) -> bool {
        match kind {
            GestureKind::DragStart => self.drag_start.is_some(),
            GestureKind::DragUpdate => self.drag_update.is_some(),
            GestureKind::DragStop => self.drag_stop.is_some(),
            GestureKind::ZoomStart => self.zoom_start.is_some(),
            GestureKind::ZoomUpdate => self.zoom_update.is_some(),
            GestureKind::ZoomStop => self.zoom_stop.is_some(),
        }
    }

    /// Call the handler for `gesture`'s kind, if any.
    pub fn dispatch(&mut self, gesture: &Gesture) {
        match gesture {
            Gesture::DragStart(ev) => call(&mut self.drag_start, ev),
            Gesture::DragUpdate(ev) => call(&mut self.drag_update, ev),
            Gesture::DragStop(ev) => call(&mut self.drag_stop, ev),
            Gesture::ZoomStart(ev) => call(&mut self.zoom_start, ev),
            Gesture::ZoomUpdate(ev) => call(&mut self.zoom_update, ev),
            Gesture::ZoomStop(ev) => call(&mut self.zoom_stop, ev),
        }
    }
}

fn call<E: ?Sized>(slot: &mut Option<Box<dyn FnMut(&E)>>, ev: &E) {
    if let Some(handler) = slot {
        handler(ev);
    }
}

impl fmt::Debug for Handlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registered: Vec<&str> = GestureKind::ALL
            .into_iter()
            .filter(|&k| self.is_registered(k))
            .map(GestureKind::as_str)
            .collect();
        f.debug_struct("Handlers")
            .field("registered", &registered)
            .finish()
    }
}
