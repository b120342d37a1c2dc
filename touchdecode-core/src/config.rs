use serde::Deserialize;

/// Which pair anchors the zoom that resumes when a third contact lifts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Reanchor {
    /// Anchor on the two earliest contacts left after the removal, i.e. the
    /// pair the following updates are measured with.
    #[default]
    AfterRemoval,
    /// Anchor on the two earliest contacts before the removal, even when the
    /// departing contact is one of them. Kept for compatibility with hosts
    /// that depend on the historical baseline jump.
    BeforeRemoval,
}

/// What a zoom reports when both contacts started on the same spot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DegenerateZoom {
    /// Report the raw ratio, which is infinite or NaN.
    #[default]
    Propagate,
    /// Report a scale of 1.0 for as long as the anchor distance is zero.
    Unit,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DecoderConfig {
    pub reanchor: Reanchor,
    pub degenerate_zoom: DegenerateZoom,
}

impl DecoderConfig {
    pub(crate) fn scale(&self, distance: f64, anchor: f64) -> f64 {
        if anchor == 0.0 && self.degenerate_zoom == DegenerateZoom::Unit {
            return 1.0;
        }
        distance / anchor
    }
}
