//! Decodes a stream of contact notifications (touch, mouse, pen) into drag and
//! pinch-zoom gestures.
//!
//! A [`GestureDecoder`] is fed `added` / `updated` / `removed` notifications and
//! calls at most one registered handler per [`GestureKind`] as gestures start,
//! update and stop. One contact drags, two contacts zoom, three or more freeze
//! gesture output until the count drops back.

pub mod config;
pub mod contact;
pub mod decoder;
pub mod dispatch;
pub mod event;
pub mod geometry;
pub mod state;

pub use config::{DecoderConfig, DegenerateZoom, Reanchor};
pub use contact::{Contact, ContactCache, ContactId, ContactInput};
pub use decoder::GestureDecoder;
pub use dispatch::Handlers;
pub use event::{DragEvent, Gesture, GestureKind, ZoomEvent};
pub use geometry::Point;
pub use state::GestureState;
