/// Lower bound of the shared comparison zoom.
pub const MIN_SCALE: f32 = 1.0;

/// Upper bound of the shared comparison zoom.
pub const MAX_SCALE: f32 = 8.0;

/// Scale change per unit of raw wheel delta (linear mapping).
pub const ZOOM_SENSITIVITY: f32 = 0.001;

/// A zoom result this close to 1x snaps back to identity (scale 1, no pan).
pub const ZOOM_SNAP_EPSILON: f32 = 0.01;

/// Initial slider position, in percent of the viewport width.
pub const DEFAULT_SLIDER_PERCENT: f32 = 50.0;

/// Width of the visible slider divider line, in points.
pub const DIVIDER_WIDTH: f32 = 2.0;

/// Diameter of the round slider handle drawn on the divider.
pub const HANDLE_DIAMETER: f32 = 32.0;

/// Half-width of the strip around the divider that grabs the slider
/// instead of starting a pan.
pub const DIVIDER_HIT_SLOP: f32 = 6.0;

/// Duration of the transform ease applied when not actively panning.
pub const TRANSFORM_ANIMATION_SECS: f32 = 0.1;

/// Canonical display order of metadata groups.
pub const GROUP_ORDER: [&str; 9] = [
    "IFD0", "IFD1", "EXIF", "GPS", "INTEROP", "XMP", "IPTC", "ICC", "THUMBNAIL",
];

/// Name of the catch-all group used for flat (ungrouped) records.
pub const GENERAL_GROUP: &str = "General";

/// Default public origin of the landing site.
pub const DEFAULT_BASE_URL: &str = "https://exifpro.fandx.vip";

/// Marker identifying a built single-page app `index.html`.
pub const SPA_ROOT_MARKER: &str = "<div id=\"root\">";

/// Base URL of the sister product linked from every landing page footer.
pub const CROSS_LINK_BASE: &str = "https://wallpaperpro.fandx.vip";
