//! Sizing, color, and styling constants for the picker.

/// Diameter of the selection thumb
pub const THUMB_DIAMETER: f64 = 28.0;

/// Width of the translucent ring around the thumb's color dot
pub const THUMB_WIDE_BORDER: f64 = 6.0;

/// Radius of the colored dot inside the thumb. Slider gradients are inset
/// by this much on both ends.
pub const THUMB_INDICATOR_RADIUS: f64 = THUMB_DIAMETER / 2.0 - THUMB_WIDE_BORDER;

/// Default hit box extension around a control's content on every side
pub const HIT_BOX_INSET: f64 = 16.0;

/// Touches farther than this from the nearest valid palette point are ignored
pub const MIN_TOUCH_DISTANCE: f64 = 44.0;

/// Width of the hue ring strip
pub const HUE_RING_STRIP_WIDTH: f64 = 28.0;

/// Thumb switches to a dark border when `1 - brightness` is below this...
pub const DARK_BORDER_BRIGHTNESS: f64 = 0.3;

/// ...and saturation is below this.
pub const DARK_BORDER_SATURATION: f64 = 0.4;

/// 1D slider track height
pub const SLIDER_HEIGHT: f32 = 16.0;

/// Border radius for the preview swatch
pub const RADIUS: f32 = 5.0;

/// Gap between picker elements
pub const GAP: f32 = 8.0;

/// Padding around the whole picker
pub const PADDING: f32 = 8.0;

/// Preview swatch size (width, height) including the hex label
pub const PREVIEW_SIZE: (f32, f32) = (65.0, 90.0);

/// Hex label height under the preview swatch
pub const HEX_LABEL_HEIGHT: f32 = 20.0;

/// Hex label font size
pub const HEX_FONT: f32 = 12.0;

/// Checkerboard cell size (for alpha backgrounds)
#[cfg(feature = "alpha")]
pub const CHECKER_CELL: f64 = 5.0;
