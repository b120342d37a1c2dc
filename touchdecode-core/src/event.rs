use serde::Serialize;
use std::fmt;

/// Displacement of the dragging contact since the drag started.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct DragEvent {
    pub x: f64,
    pub y: f64,
}

/// Midpoint of the two zooming contacts, and their distance relative to the
/// distance when the zoom started (1.0 at start).
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ZoomEvent {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GestureKind {
    DragStart,
    DragUpdate,
    DragStop,
    ZoomStart,
    ZoomUpdate,
    ZoomStop,
}

impl GestureKind {
    pub const ALL: [GestureKind; 6] = [
        GestureKind::DragStart,
        GestureKind::DragUpdate,
        GestureKind::DragStop,
        GestureKind::ZoomStart,
        GestureKind::ZoomUpdate,
        GestureKind::ZoomStop,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            GestureKind::DragStart => "dragstart",
            GestureKind::DragUpdate => "dragupdate",
            GestureKind::DragStop => "dragstop",
            GestureKind::ZoomStart => "zoomstart",
            GestureKind::ZoomUpdate => "zoomupdate",
            GestureKind::ZoomStop => "zoomstop",
        }
    }
}

impl fmt::Display for GestureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A decoded gesture event, tagged with its kind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    DragStart(DragEvent),
    DragUpdate(DragEvent),
    DragStop(DragEvent),
    ZoomStart(ZoomEvent),
    ZoomUpdate(ZoomEvent),
    ZoomStop(ZoomEvent),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names_match_serde() {
        for kind in GestureKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }

    #[test]
    fn test_zoom_event_serializes_flat() {
        let ev = ZoomEvent { x: 5.0, y: 0.0, scale: 1.0 };
        let json = serde_json::to_value(ev).unwrap();
        assert_eq!(json, serde_json::json!({ "x": 5.0, "y": 0.0, "scale": 1.0 }));
    }
}
