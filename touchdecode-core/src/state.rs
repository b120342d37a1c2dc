//! Explicit gesture state machine.
//!
//! Each notification is a transition over the [`ContactCache`]. The caller
//! mutates the cache, then asks the state what to emit. Removal is split in
//! two: [`GestureState::before_removal`] sees the departing contact still in
//! the cache, [`GestureState::after_removal`] sees the survivors.

use crate::config::{DecoderConfig, Reanchor};
use crate::contact::ContactCache;
use crate::event::{DragEvent, Gesture, ZoomEvent};
use crate::geometry::Point;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum GestureState {
    /// No contacts.
    #[default]
    Idle,
    /// One contact; `anchor` is where it was when the drag started.
    Dragging { anchor: Point },
    /// Two contacts; `anchor` is their distance when the zoom started.
    Zooming { anchor: f64 },
    /// Three or more contacts. Nothing is emitted until the count drops.
    Frozen,
}

impl GestureState {
    /// The cache already holds the new contact.
    pub fn added(self, cache: &ContactCache, config: &DecoderConfig, out: &mut Vec<Gesture>) -> Self {
        match cache.len() {
            0 => GestureState::Idle,
            1 => start_drag(cache, out),
            2 => {
                if let GestureState::Dragging { anchor } = self {
                    stop_drag(anchor, cache, out);
                }
                start_zoom(cache, out)
            }
            3 => {
                if let GestureState::Zooming { anchor } = self {
                    stop_zoom(anchor, cache, config, out);
                }
                GestureState::Frozen
            }
            _ => GestureState::Frozen,
        }
    }

    /// A contact moved. The cache size is unchanged.
    pub fn updated(self, cache: &ContactCache, config: &DecoderConfig, out: &mut Vec<Gesture>) -> Self {
        match self {
            GestureState::Dragging { anchor } => {
                if let Some(ev) = drag_event(anchor, cache) {
                    log::trace!("drag update {:?}", ev);
                    out.push(Gesture::DragUpdate(ev));
                }
            }
            GestureState::Zooming { anchor } => {
                if let Some(ev) = zoom_event(anchor, cache, config) {
                    log::trace!("zoom update {:?}", ev);
                    out.push(Gesture::ZoomUpdate(ev));
                }
            }
            GestureState::Idle | GestureState::Frozen => {}
        }
        self
    }

    /// The cache still holds the departing contact.
    pub fn before_removal(
        self,
        cache: &ContactCache,
        config: &DecoderConfig,
        out: &mut Vec<Gesture>,
    ) -> Self {
        match (self, cache.len()) {
            (GestureState::Dragging { anchor }, 1) => {
                stop_drag(anchor, cache, out);
                GestureState::Idle
            }
            (GestureState::Zooming { anchor }, 2) => {
                stop_zoom(anchor, cache, config, out);
                GestureState::Idle
            }
            (GestureState::Frozen, 3) if config.reanchor == Reanchor::BeforeRemoval => {
                start_zoom(cache, out)
            }
            (state, _) => state,
        }
    }

    /// The departing contact is gone from the cache.
    pub fn after_removal(
        self,
        cache: &ContactCache,
        config: &DecoderConfig,
        out: &mut Vec<Gesture>,
    ) -> Self {
        match (self, cache.len()) {
            (_, 0) => GestureState::Idle,
            (GestureState::Idle, 1) => start_drag(cache, out),
            (GestureState::Frozen, 2) if config.reanchor == Reanchor::AfterRemoval => {
                start_zoom(cache, out)
            }
            (state, _) => state,
        }
    }

    /// Stop whatever gesture is active, as if every contact lifted at once.
    pub fn reset(self, cache: &ContactCache, config: &DecoderConfig, out: &mut Vec<Gesture>) -> Self {
        match self {
            GestureState::Dragging { anchor } => stop_drag(anchor, cache, out),
            GestureState::Zooming { anchor } => stop_zoom(anchor, cache, config, out),
            GestureState::Idle | GestureState::Frozen => {}
        }
        GestureState::Idle
    }
}

fn drag_event(anchor: Point, cache: &ContactCache) -> Option<DragEvent> {
    let delta = cache.first()? - anchor;
    Some(DragEvent { x: delta.x, y: delta.y })
}

fn zoom_event(anchor: f64, cache: &ContactCache, config: &DecoderConfig) -> Option<ZoomEvent> {
    let (a, b) = cache.first_pair()?;
    let center = a.midpoint(b);
    Some(ZoomEvent {
        x: center.x,
        y: center.y,
        scale: config.scale(a.distance(b), anchor),
    })
}

fn start_drag(cache: &ContactCache, out: &mut Vec<Gesture>) -> GestureState {
    let Some(anchor) = cache.first() else {
        return GestureState::Idle;
    };
    log::debug!("drag start at ({}, {})", anchor.x, anchor.y);
    out.push(Gesture::DragStart(DragEvent::default()));
    GestureState::Dragging { anchor }
}

fn stop_drag(anchor: Point, cache: &ContactCache, out: &mut Vec<Gesture>) {
    if let Some(ev) = drag_event(anchor, cache) {
        log::debug!("drag stop {:?}", ev);
        out.push(Gesture::DragStop(ev));
    }
}

fn start_zoom(cache: &ContactCache, out: &mut Vec<Gesture>) -> GestureState {
    let Some((a, b)) = cache.first_pair() else {
        return GestureState::Frozen;
    };
    let anchor = a.distance(b);
    let center = a.midpoint(b);
    if anchor == 0.0 {
        log::debug!("zoom anchored on coincident contacts");
    }
    log::debug!("zoom start at ({}, {}), anchor distance {}", center.x, center.y, anchor);
    out.push(Gesture::ZoomStart(ZoomEvent {
        x: center.x,
        y: center.y,
        scale: 1.0,
    }));
    GestureState::Zooming { anchor }
}

fn stop_zoom(anchor: f64, cache: &ContactCache, config: &DecoderConfig, out: &mut Vec<Gesture>) {
    if let Some(ev) = zoom_event(anchor, cache, config) {
        log::debug!("zoom stop {:?}", ev);
        out.push(Gesture::ZoomStop(ev));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::ContactId;

    fn cache_of(points: &[(f64, f64)]) -> ContactCache {
        let mut cache = ContactCache::new();
        for (i, &(x, y)) in points.iter().enumerate() {
            cache.add(ContactId(i as i32), Point::new(x, y));
        }
        cache
    }

    #[test]
    fn test_first_contact_starts_drag() {
        let mut out = Vec::new();
        let cache = cache_of(&[(10.0, 10.0)]);
        let state = GestureState::Idle.added(&cache, &DecoderConfig::default(), &mut out);
        assert_eq!(state, GestureState::Dragging { anchor: Point::new(10.0, 10.0) });
        assert_eq!(out, vec![Gesture::DragStart(DragEvent { x: 0.0, y: 0.0 })]);
    }

    #[test]
    fn test_fourth_contact_stays_frozen_silently() {
        let mut out = Vec::new();
        let cache = cache_of(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]);
        let state = GestureState::Frozen.added(&cache, &DecoderConfig::default(), &mut out);
        assert_eq!(state, GestureState::Frozen);
        assert!(out.is_empty());
    }

    #[test]
    fn test_frozen_updates_emit_nothing() {
        let mut out = Vec::new();
        let cache = cache_of(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
        let state = GestureState::Frozen.updated(&cache, &DecoderConfig::default(), &mut out);
        assert_eq!(state, GestureState::Frozen);
        assert!(out.is_empty());
    }

    #[test]
    fn test_before_removal_reanchor_uses_leading_pair() {
        let config = DecoderConfig {
            reanchor: Reanchor::BeforeRemoval,
            ..Default::default()
        };
        let mut out = Vec::new();
        let cache = cache_of(&[(0.0, 0.0), (10.0, 0.0), (40.0, 0.0)]);
        let state = GestureState::Frozen.before_removal(&cache, &config, &mut out);
        assert_eq!(state, GestureState::Zooming { anchor: 10.0 });
        assert_eq!(
            out,
            vec![Gesture::ZoomStart(ZoomEvent { x: 5.0, y: 0.0, scale: 1.0 })]
        );

        // The default policy waits for the survivors.
        out.clear();
        let state = GestureState::Frozen.before_removal(&cache, &DecoderConfig::default(), &mut out);
        assert_eq!(state, GestureState::Frozen);
        assert!(out.is_empty());
    }

    #[test]
    fn test_reset_stops_active_zoom() {
        let mut out = Vec::new();
        let cache = cache_of(&[(0.0, 0.0), (30.0, 0.0)]);
        let state = GestureState::Zooming { anchor: 10.0 }.reset(&cache, &DecoderConfig::default(), &mut out);
        assert_eq!(state, GestureState::Idle);
        assert_eq!(
            out,
            vec![Gesture::ZoomStop(ZoomEvent { x: 15.0, y: 0.0, scale: 3.0 })]
        );
    }

    #[test]
    fn test_reset_from_frozen_is_silent() {
        let mut out = Vec::new();
        let cache = cache_of(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
        let state = GestureState::Frozen.reset(&cache, &DecoderConfig::default(), &mut out);
        assert_eq!(state, GestureState::Idle);
        assert!(out.is_empty());
    }
}
