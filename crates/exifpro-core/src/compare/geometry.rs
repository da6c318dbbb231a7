use serde::{Deserialize, Serialize};

/// A position in viewport (screen) coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn from_center_size(center: Point, width: f32, height: f32) -> Self {
        Self {
            left: center.x - width / 2.0,
            top: center.y - height / 2.0,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    pub fn size(&self) -> ViewportSize {
        ViewportSize::new(self.width, self.height)
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x <= self.right() && p.y >= self.top && p.y <= self.bottom()
    }
}

/// Natural pixel dimensions of a decoded image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageDims {
    pub width: u32,
    pub height: u32,
}

impl ImageDims {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl std::fmt::Display for ImageDims {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// One side of a comparison: an opaque host handle plus its natural size.
///
/// The handle is whatever the host uses to draw the pixels (a texture id, a
/// blob URL, ...). The host owns the backing resource and releases it when
/// the comparison session ends.
#[derive(Clone, Debug)]
pub struct ImageRef<H> {
    pub handle: H,
    pub natural: ImageDims,
}

impl<H> ImageRef<H> {
    pub fn new(handle: H, natural: ImageDims) -> Self {
        Self { handle, natural }
    }
}

/// Size of the rendering surface in device-independent pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportSize {
    pub width: f32,
    pub height: f32,
}

impl ViewportSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// `false` until layout has produced a usable, non-degenerate size.
    pub fn is_measured(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// An image's box after "contain" fitting.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderSize {
    pub width: f32,
    pub height: f32,
    pub scale: f32,
}

/// Independent contain-fit of both comparison layers.
///
/// `None` means "no geometry yet": the layer should fill the whole viewport
/// box until valid dimensions arrive.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FitGeometry {
    pub before: Option<RenderSize>,
    pub after: Option<RenderSize>,
}

/// Scale `dims` to fit entirely inside `viewport`, preserving aspect ratio.
pub fn fit_contain(viewport: ViewportSize, dims: Option<ImageDims>) -> Option<RenderSize> {
    if !viewport.is_measured() {
        return None;
    }
    let dims = dims.filter(|d| !d.is_empty())?;
    let nw = dims.width as f32;
    let nh = dims.height as f32;
    let scale = (viewport.width / nw).min(viewport.height / nh);
    Some(RenderSize {
        width: nw * scale,
        height: nh * scale,
        scale,
    })
}

/// Fit both images into the same viewport, each with its own scale factor.
///
/// The two layers are deliberately not forced onto a shared scale: a
/// full-resolution original and a downsized derivative both fill the same
/// box, so the same crop region lines up between them.
pub fn compute_fit(
    viewport: ViewportSize,
    before: Option<ImageDims>,
    after: Option<ImageDims>,
) -> FitGeometry {
    FitGeometry {
        before: fit_contain(viewport, before),
        after: fit_contain(viewport, after),
    }
}
