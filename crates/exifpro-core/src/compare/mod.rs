//! Before/after image comparison viewport.
//!
//! Two images are fitted into the same box independently ("contain"), share
//! one pan/zoom transform, and a reveal slider clips the top layer.
//! Everything here is host-agnostic: the host feeds [`InputEvent`]s and
//! paints from [`RenderPlan`].

pub mod geometry;
pub mod interaction;
pub mod slider;
pub mod transform;

pub use geometry::{
    compute_fit, fit_contain, FitGeometry, ImageDims, ImageRef, Point, Rect, RenderSize,
    ViewportSize,
};
pub use interaction::{
    CompareViewport, EventResponse, InputEvent, InteractionMode, LayerPlan, ReleaseFlag,
    ReleaseListener, RenderPlan,
};
pub use slider::{ClipInset, SlideAxis, SliderState};
pub use transform::TransformState;
