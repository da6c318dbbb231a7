use tracing::debug;

use super::geometry::{compute_fit, FitGeometry, ImageRef, Point, Rect, RenderSize};
use super::slider::{SlideAxis, SliderState};
use super::transform::TransformState;

/// What the current pointer session is doing. At most one drag is active.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum InteractionMode {
    #[default]
    Idle,
    Sliding,
    /// `last` is the previous pointer position; pan deltas are incremental.
    Panning { last: Point },
}

impl InteractionMode {
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}

/// Host hook for the global pointer/touch "end" listener.
///
/// Drags routinely overshoot the viewport, so the release has to be caught
/// anywhere. The viewport registers the listener when a drag starts and
/// unregisters it on every way a drag can end, including cancel and drop.
pub trait ReleaseListener {
    fn register(&mut self);
    fn unregister(&mut self);
}

/// Listener for hosts whose input system already reports releases globally
/// (immediate-mode UIs): it only records whether release polling is wanted.
#[derive(Debug, Default)]
pub struct ReleaseFlag {
    registered: bool,
}

impl ReleaseFlag {
    pub fn is_registered(&self) -> bool {
        self.registered
    }
}

impl ReleaseListener for ReleaseFlag {
    fn register(&mut self) {
        self.registered = true;
    }

    fn unregister(&mut self) {
        self.registered = false;
    }
}

/// Raw input delivered by the host, in viewport (screen) coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    PointerDown { pos: Point },
    PointerMove { pos: Point },
    PointerUp,
    PointerCancel,
    /// `delta_y` uses the DOM sign convention (positive scrolls down / zooms out).
    Wheel { pos: Point, delta_y: f32 },
    TouchStart { touches: Vec<Point> },
    TouchMove { touches: Vec<Point> },
    TouchEnd,
    TouchCancel,
}

/// How the host should treat the event after the viewport handled it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventResponse {
    /// The event was claimed and must not reach layers underneath.
    pub stop_propagation: bool,
    /// Suppress the platform default (page scroll, browser zoom).
    pub prevent_default: bool,
    /// Transform or slider changed; redraw.
    pub changed: bool,
}

impl EventResponse {
    fn changed(changed: bool) -> Self {
        Self {
            changed,
            ..Self::default()
        }
    }
}

/// One layer ready to draw.
#[derive(Clone, Copy, Debug)]
pub struct LayerPlan<'a, H> {
    pub handle: &'a H,
    pub rect: Rect,
}

/// Everything a host needs to paint one frame of the comparison.
#[derive(Clone, Copy, Debug)]
pub struct RenderPlan<'a, H> {
    pub viewport: Rect,
    /// Bottom layer, always fully visible.
    pub after: Option<LayerPlan<'a, H>>,
    /// Top layer, visible only inside `clip`.
    pub before: Option<LayerPlan<'a, H>>,
    pub clip: Rect,
    pub divider: Rect,
    pub handle: Rect,
    pub axis: SlideAxis,
    pub zoom_percent: u32,
    /// Ease transform changes; off while panning so content tracks the pointer.
    pub animate: bool,
}

/// Before/after comparison viewport: shared pan/zoom plus reveal slider.
pub struct CompareViewport<H, L: ReleaseListener> {
    before: Option<ImageRef<H>>,
    after: Option<ImageRef<H>>,
    bounds: Rect,
    axis: SlideAxis,
    transform: TransformState,
    slider: SliderState,
    mode: InteractionMode,
    listener: L,
}

impl<H, L: ReleaseListener> CompareViewport<H, L> {
    pub fn new(listener: L) -> Self {
        Self {
            before: None,
            after: None,
            bounds: Rect::default(),
            axis: SlideAxis::default(),
            transform: TransformState::IDENTITY,
            slider: SliderState::default(),
            mode: InteractionMode::Idle,
            listener,
        }
    }

    pub fn with_axis(mut self, axis: SlideAxis) -> Self {
        self.axis = axis;
        self
    }

    /// Start a new comparison session. Any drag in progress ends and the
    /// view returns to 1x with the slider centred.
    pub fn set_images(&mut self, before: Option<ImageRef<H>>, after: Option<ImageRef<H>>) {
        self.end_interaction();
        self.before = before;
        self.after = after;
        self.transform = TransformState::IDENTITY;
        self.slider = SliderState::default();
    }

    /// Must be called whenever the host surface is laid out or resized.
    pub fn set_viewport(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    pub fn set_axis(&mut self, axis: SlideAxis) {
        self.axis = axis;
    }

    pub fn viewport(&self) -> Rect {
        self.bounds
    }

    pub fn axis(&self) -> SlideAxis {
        self.axis
    }

    pub fn transform(&self) -> TransformState {
        self.transform
    }

    pub fn slider(&self) -> SliderState {
        self.slider
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn before(&self) -> Option<&ImageRef<H>> {
        self.before.as_ref()
    }

    pub fn after(&self) -> Option<&ImageRef<H>> {
        self.after.as_ref()
    }

    pub fn fit(&self) -> FitGeometry {
        compute_fit(
            self.bounds.size(),
            self.before.as_ref().map(|i| i.natural),
            self.after.as_ref().map(|i| i.natural),
        )
    }

    fn enter(&mut self, mode: InteractionMode) {
        if !self.mode.is_active() {
            self.listener.register();
        }
        self.mode = mode;
    }

    /// Back to idle from whatever drag is active, releasing the listener.
    pub fn end_interaction(&mut self) -> bool {
        if !self.mode.is_active() {
            return false;
        }
        debug!(mode = ?self.mode, "Drag ended");
        self.mode = InteractionMode::Idle;
        self.listener.unregister();
        true
    }

    /// Record `pos` as the pan reference point and enter panning.
    /// Ignored while sliding.
    pub fn begin_pan(&mut self, pos: Point) -> bool {
        match self.mode {
            InteractionMode::Sliding => false,
            _ => {
                self.enter(InteractionMode::Panning { last: pos });
                true
            }
        }
    }

    /// Translate by the delta from the previous pointer position. No-op
    /// unless panning.
    pub fn continue_pan(&mut self, pos: Point) -> bool {
        let InteractionMode::Panning { last } = self.mode else {
            return false;
        };
        self.transform = self.transform.panned_by(pos.x - last.x, pos.y - last.y);
        self.mode = InteractionMode::Panning { last: pos };
        true
    }

    pub fn end_pan(&mut self) -> bool {
        matches!(self.mode, InteractionMode::Panning { .. }) && self.end_interaction()
    }

    /// Enter sliding. Only possible from idle, so a slide and a pan can
    /// never run together.
    pub fn begin_slide(&mut self) -> bool {
        if self.mode.is_active() {
            return false;
        }
        self.enter(InteractionMode::Sliding);
        true
    }

    pub fn continue_slide(&mut self, pos: Point) -> bool {
        if self.mode != InteractionMode::Sliding {
            return false;
        }
        let next = self.slider.from_pointer(pos, self.bounds, self.axis);
        let changed = next != self.slider;
        self.slider = next;
        changed
    }

    pub fn end_slide(&mut self) -> bool {
        self.mode == InteractionMode::Sliding && self.end_interaction()
    }

    /// Wheel zoom anchored at `pos`. Independent of the drag mode.
    pub fn zoom(&mut self, pos: Point, wheel_delta: f32) -> bool {
        let c = self.bounds.center();
        let next = self
            .transform
            .zoomed_at(Point::new(pos.x - c.x, pos.y - c.y), wheel_delta);
        let changed = next != self.transform;
        self.transform = next;
        changed
    }

    pub fn reset_zoom(&mut self) -> bool {
        let changed = !self.transform.is_identity();
        self.transform = TransformState::IDENTITY;
        changed
    }

    /// Pointer-down routing: the slider handle sits above the pan surface
    /// and claims the event first.
    fn pointer_down(&mut self, pos: Point) -> EventResponse {
        if self.slider.hit_test(pos, self.bounds, self.axis) {
            self.begin_slide();
            return EventResponse {
                stop_propagation: true,
                ..EventResponse::default()
            };
        }
        if self.bounds.contains(pos) {
            self.begin_pan(pos);
        }
        EventResponse::default()
    }

    fn pointer_move(&mut self, pos: Point) -> EventResponse {
        let changed = match self.mode {
            InteractionMode::Sliding => self.continue_slide(pos),
            InteractionMode::Panning { .. } => self.continue_pan(pos),
            InteractionMode::Idle => false,
        };
        EventResponse::changed(changed)
    }

    pub fn handle(&mut self, event: InputEvent) -> EventResponse {
        match event {
            InputEvent::PointerDown { pos } => self.pointer_down(pos),
            InputEvent::PointerMove { pos } => self.pointer_move(pos),
            InputEvent::TouchStart { touches } => match touches.first() {
                Some(&pos) => self.pointer_down(pos),
                None => EventResponse::default(),
            },
            InputEvent::TouchMove { touches } => match touches.first() {
                Some(&pos) => self.pointer_move(pos),
                None => EventResponse::default(),
            },
            InputEvent::PointerUp
            | InputEvent::PointerCancel
            | InputEvent::TouchEnd
            | InputEvent::TouchCancel => {
                self.end_interaction();
                EventResponse::default()
            }
            InputEvent::Wheel { pos, delta_y } => EventResponse {
                stop_propagation: true,
                prevent_default: true,
                changed: self.zoom(pos, delta_y),
            },
        }
    }

    fn layer_plan<'a>(
        &self,
        image: Option<&'a ImageRef<H>>,
        fit: Option<RenderSize>,
    ) -> Option<LayerPlan<'a, H>> {
        image.map(|i| LayerPlan {
            handle: &i.handle,
            rect: self.transform.layer_rect(self.bounds, fit),
        })
    }

    pub fn render_plan(&self) -> RenderPlan<'_, H> {
        let fit = self.fit();
        RenderPlan {
            viewport: self.bounds,
            after: self.layer_plan(self.after.as_ref(), fit.after),
            before: self.layer_plan(self.before.as_ref(), fit.before),
            clip: self.slider.clip_rect(self.bounds, self.axis),
            divider: self.slider.divider_rect(self.bounds, self.axis),
            handle: self.slider.handle_rect(self.bounds, self.axis),
            axis: self.axis,
            zoom_percent: self.transform.zoom_percent(),
            animate: !matches!(self.mode, InteractionMode::Panning { .. }),
        }
    }
}

impl<H, L: ReleaseListener> Drop for CompareViewport<H, L> {
    fn drop(&mut self) {
        self.end_interaction();
    }
}
