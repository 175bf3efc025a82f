//! # floem-flex
//!
//! Synchronized HSB color picker controls for [Floem](https://github.com/lapce/floem).
//!
//! Any number of controls (radial, rectangular or hue-ring palettes,
//! per-component sliders, a preview swatch) share one
//! [`ColorPickerController`]. When the user drags one of them, every other
//! control is updated to the same color and the controller's delegate is
//! told about it.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem::prelude::*;
//! use floem_flex::{color_picker, HsbColor};
//!
//! let color = RwSignal::new(HsbColor::from_hex("3B82F6").unwrap());
//! // Use `color_picker(color)` in your Floem view tree.
//! ```
//!
//! For a custom layout build controls from a [`ColorPicker`]:
//!
//! ```rust,no_run
//! use floem::prelude::*;
//! use floem_flex::{BrightnessAxis, ColorPicker, HsbColor};
//!
//! let picker = ColorPicker::new(RwSignal::new(HsbColor::WHITE));
//! let view = v_stack((picker.rectangular_palette(), picker.slider(BrightnessAxis)));
//! ```

pub mod axis;
mod color;
mod constants;
pub mod controller;
pub mod controls;
mod error;
#[cfg(all(feature = "eyedropper", target_os = "macos"))]
mod eyedropper;
pub mod geometry;
mod math;
mod picker;
pub mod raster;
mod views;

#[cfg(feature = "alpha")]
pub use axis::AlphaAxis;
pub use axis::{
    AxisValue, BlueAxis, BrightnessAxis, ComponentAxis, GreenAxis, HueAxis, RedAxis,
    SaturationAxis,
};
pub use color::HsbColor;
pub use controller::{ColorPickerController, ColorPickerDelegate};
pub use controls::{
    ColorControl, ControlEvent, ControlRef, HitBoxInsets, PaletteControl, PreviewControl,
    SliderControl,
};
pub use error::ParseHexError;
#[cfg(all(feature = "eyedropper", target_os = "macos"))]
pub use eyedropper::EyedropperControl;
pub use geometry::{
    DisplayMode, HueRingPalette, PaletteGeometry, PaletteShape, RadialPalette, RectangularPalette,
};
pub use picker::ColorPicker;
pub use raster::RasterImage;
pub use views::{PaletteView, SliderView};

use std::sync::Once;

use floem::prelude::*;
use floem::reactive::RwSignal;
use floem::text::FONT_SYSTEM;

static LOAD_LUCIDE_FONT: Once = Once::new();

/// Creates the default color picker view.
///
/// The picker reads from and writes to `color`. External changes to the
/// signal are pushed to every control, and user edits update the signal.
pub fn color_picker(color: RwSignal<HsbColor>) -> impl IntoView {
    load_icon_font();
    picker::default_layout(color)
}

/// Register the Lucide icon font used by the copy and eyedropper buttons.
/// Called by [`color_picker`]; custom layouts using those buttons should
/// call it once too.
pub fn load_icon_font() {
    LOAD_LUCIDE_FONT.call_once(|| {
        FONT_SYSTEM
            .lock()
            .db_mut()
            .load_font_data(lucide_icons::LUCIDE_FONT_BYTES.to_vec());
    });
}
