use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_SLIDER_PERCENT, DIVIDER_HIT_SLOP, DIVIDER_WIDTH, HANDLE_DIAMETER};

use super::geometry::{Point, Rect};

/// Axis along which the reveal slider moves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlideAxis {
    /// Divider is vertical; "before" shows on the left.
    #[default]
    Horizontal,
    /// Divider is horizontal; "before" shows on top.
    Vertical,
}

impl std::fmt::Display for SlideAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Horizontal => write!(f, "Left / Right"),
            Self::Vertical => write!(f, "Top / Bottom"),
        }
    }
}

/// Clip inset of the top layer, in percent of the viewport, CSS order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipInset {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl std::fmt::Display for ClipInset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fmt = |v: f32| {
            if v == 0.0 {
                "0".to_string()
            } else {
                format!("{v}%")
            }
        };
        write!(
            f,
            "inset({} {} {} {})",
            fmt(self.top),
            fmt(self.right),
            fmt(self.bottom),
            fmt(self.left)
        )
    }
}

/// Reveal position: how much of the viewport shows the top ("before") layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderState {
    percent: f32,
}

impl Default for SliderState {
    fn default() -> Self {
        Self {
            percent: DEFAULT_SLIDER_PERCENT,
        }
    }
}

impl SliderState {
    pub fn new(percent: f32) -> Self {
        let percent = if percent.is_nan() { DEFAULT_SLIDER_PERCENT } else { percent };
        Self {
            percent: percent.clamp(0.0, 100.0),
        }
    }

    pub fn percent(&self) -> f32 {
        self.percent
    }

    /// Map a pointer coordinate on `axis` to a clamped percentage of the
    /// viewport. A viewport with no extent keeps the current value.
    #[must_use]
    pub fn from_pointer(self, pointer: Point, viewport: Rect, axis: SlideAxis) -> Self {
        let (pos, origin, len) = match axis {
            SlideAxis::Horizontal => (pointer.x, viewport.left, viewport.width),
            SlideAxis::Vertical => (pointer.y, viewport.top, viewport.height),
        };
        if !(len > 0.0) || pos.is_nan() {
            return self;
        }
        let fraction = ((pos - origin) / len).clamp(0.0, 1.0);
        Self {
            percent: fraction * 100.0,
        }
    }

    /// `inset(0, (100 - p)%, 0, 0)` for horizontal, the bottom edge for vertical.
    pub fn clip_inset(&self, axis: SlideAxis) -> ClipInset {
        let hidden = 100.0 - self.percent;
        match axis {
            SlideAxis::Horizontal => ClipInset {
                top: 0.0,
                right: hidden,
                bottom: 0.0,
                left: 0.0,
            },
            SlideAxis::Vertical => ClipInset {
                top: 0.0,
                right: 0.0,
                bottom: hidden,
                left: 0.0,
            },
        }
    }

    /// Part of the viewport where the top layer is visible.
    pub fn clip_rect(&self, viewport: Rect, axis: SlideAxis) -> Rect {
        let f = self.percent / 100.0;
        match axis {
            SlideAxis::Horizontal => Rect::new(viewport.left, viewport.top, viewport.width * f, viewport.height),
            SlideAxis::Vertical => Rect::new(viewport.left, viewport.top, viewport.width, viewport.height * f),
        }
    }

    /// Divider line position on `axis`, in viewport space. It ignores the
    /// content transform.
    pub fn divider_position(&self, viewport: Rect, axis: SlideAxis) -> f32 {
        let f = self.percent / 100.0;
        match axis {
            SlideAxis::Horizontal => viewport.left + viewport.width * f,
            SlideAxis::Vertical => viewport.top + viewport.height * f,
        }
    }

    /// The thin divider line itself.
    pub fn divider_rect(&self, viewport: Rect, axis: SlideAxis) -> Rect {
        let pos = self.divider_position(viewport, axis);
        match axis {
            SlideAxis::Horizontal => {
                Rect::new(pos - DIVIDER_WIDTH / 2.0, viewport.top, DIVIDER_WIDTH, viewport.height)
            }
            SlideAxis::Vertical => {
                Rect::new(viewport.left, pos - DIVIDER_WIDTH / 2.0, viewport.width, DIVIDER_WIDTH)
            }
        }
    }

    /// The round grab handle in the middle of the divider.
    pub fn handle_rect(&self, viewport: Rect, axis: SlideAxis) -> Rect {
        let pos = self.divider_position(viewport, axis);
        let c = viewport.center();
        let center = match axis {
            SlideAxis::Horizontal => Point::new(pos, c.y),
            SlideAxis::Vertical => Point::new(c.x, pos),
        };
        Rect::from_center_size(center, HANDLE_DIAMETER, HANDLE_DIAMETER)
    }

    /// Whether a pointer-down at `p` grabs the slider rather than the pan
    /// surface: the handle, or a thin strip along the divider.
    pub fn hit_test(&self, p: Point, viewport: Rect, axis: SlideAxis) -> bool {
        if !viewport.contains(p) {
            return false;
        }
        if self.handle_rect(viewport, axis).contains(p) {
            return true;
        }
        let pos = self.divider_position(viewport, axis);
        let along = match axis {
            SlideAxis::Horizontal => p.x,
            SlideAxis::Vertical => p.y,
        };
        (along - pos).abs() <= DIVIDER_WIDTH / 2.0 + DIVIDER_HIT_SLOP
    }
}
