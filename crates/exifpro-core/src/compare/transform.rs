use crate::consts::{MAX_SCALE, MIN_SCALE, ZOOM_SENSITIVITY, ZOOM_SNAP_EPSILON};

use super::geometry::{Point, Rect, RenderSize};

/// Pan/zoom shared by both comparison layers. Operations return a new state;
/// callers replace the old one wholesale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformState {
    pub scale: f32,
    pub translate_x: f32,
    pub translate_y: f32,
}

impl Default for TransformState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl TransformState {
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
    };

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Add an incremental pointer delta to the translation.
    #[must_use]
    pub fn panned_by(self, dx: f32, dy: f32) -> Self {
        Self {
            translate_x: self.translate_x + dx,
            translate_y: self.translate_y + dy,
            ..self
        }
    }

    /// Apply one wheel step while keeping the content under `anchor` fixed.
    ///
    /// `anchor` is the pointer position relative to the viewport centre.
    /// `wheel_delta` follows the DOM convention: negative zooms in. A
    /// non-finite delta or anchor is ignored.
    #[must_use]
    pub fn zoomed_at(self, anchor: Point, wheel_delta: f32) -> Self {
        if !(wheel_delta.is_finite() && anchor.x.is_finite() && anchor.y.is_finite()) {
            return self;
        }
        let old_scale = self.scale.max(MIN_SCALE);
        let new_scale = (old_scale - wheel_delta * ZOOM_SENSITIVITY).clamp(MIN_SCALE, MAX_SCALE);

        if (new_scale - 1.0).abs() < ZOOM_SNAP_EPSILON {
            return Self::IDENTITY;
        }

        // The point at `anchor` maps to the same screen location before and
        // after rescaling: t' = anchor * (1 - ratio) + t * ratio.
        let ratio = new_scale / old_scale;
        Self {
            scale: new_scale,
            translate_x: anchor.x * (1.0 - ratio) + self.translate_x * ratio,
            translate_y: anchor.y * (1.0 - ratio) + self.translate_y * ratio,
        }
    }

    /// Zoom level as a whole percentage for the scale indicator.
    pub fn zoom_percent(&self) -> u32 {
        (self.scale * 100.0).round() as u32
    }

    /// On-screen rect of a layer: its fitted box, scaled about its own
    /// centre, centred in the viewport and shifted by the translation.
    ///
    /// Without a fit (`None`) the layer fills the viewport box.
    pub fn layer_rect(&self, viewport: Rect, fit: Option<RenderSize>) -> Rect {
        let (w, h) = fit
            .map(|f| (f.width, f.height))
            .unwrap_or((viewport.width, viewport.height));
        let c = viewport.center();
        Rect::from_center_size(
            Point::new(c.x + self.translate_x, c.y + self.translate_y),
            w * self.scale,
            h * self.scale,
        )
    }
}
