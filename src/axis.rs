//! Component axes: the one-dimensional mappings behind the sliders.
//!
//! Each axis replaces exactly one logical component of a color with a
//! scalar in `0.0..=1.0` and describes the two-stop gradient its slider
//! shows.

use crate::color::HsbColor;
use crate::math::clamp_unit;
use crate::raster::{self, RasterImage};

/// Indicator position and gradient end colors for a slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisValue {
    pub value: f64,
    pub start: HsbColor,
    pub end: HsbColor,
}

pub trait ComponentAxis {
    /// `color` with this axis' component set from `value`.
    fn modified_color(&self, color: HsbColor, value: f64) -> HsbColor;

    /// Current indicator position for `color` and the gradient drawn behind
    /// the slider.
    fn value_and_gradient(&self, color: HsbColor) -> AxisValue;

    /// Short name used for logging and accessibility labels.
    fn name(&self) -> &'static str;

    /// Whether the gradient has transparent stops, so the track needs a
    /// checkerboard underneath.
    fn shows_transparency(&self) -> bool {
        false
    }

    /// Rasterize the track. The ends are held for `inset` pixels so the
    /// indicator's extremes land on the exact end colors.
    fn gradient_image(&self, gradient: &AxisValue, width: u32, height: u32, inset: f64) -> RasterImage {
        raster::linear_gradient(width, height, inset, gradient.start, gradient.end)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HueAxis;

impl ComponentAxis for HueAxis {
    fn modified_color(&self, color: HsbColor, value: f64) -> HsbColor {
        color.with_hue(value)
    }

    fn value_and_gradient(&self, color: HsbColor) -> AxisValue {
        AxisValue {
            value: color.hue(),
            start: color.with_hue(0.0),
            end: color.with_hue(1.0),
        }
    }

    fn name(&self) -> &'static str {
        "hue"
    }

    // Both stops share an RGB value, so sweep the hue per column instead.
    fn gradient_image(&self, gradient: &AxisValue, width: u32, height: u32, inset: f64) -> RasterImage {
        let length = width as f64 - 2.0 * inset;
        RasterImage::from_fn(width, height, |x, _| {
            let t = if length > 0.0 {
                clamp_unit((x - inset) / length)
            } else {
                0.0
            };
            gradient.start.with_hue(t).to_rgba8()
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SaturationAxis;

impl ComponentAxis for SaturationAxis {
    fn modified_color(&self, color: HsbColor, value: f64) -> HsbColor {
        color.with_saturation(value)
    }

    fn value_and_gradient(&self, color: HsbColor) -> AxisValue {
        AxisValue {
            value: color.saturation(),
            start: color.with_saturation(0.0),
            end: color.with_saturation(1.0),
        }
    }

    fn name(&self) -> &'static str {
        "saturation"
    }
}

/// Brightness runs backwards: the left end of the slider is full
/// brightness, so the indicator sits at `1 - brightness`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrightnessAxis;

impl ComponentAxis for BrightnessAxis {
    fn modified_color(&self, color: HsbColor, value: f64) -> HsbColor {
        color.with_brightness(1.0 - value)
    }

    fn value_and_gradient(&self, color: HsbColor) -> AxisValue {
        AxisValue {
            value: 1.0 - color.brightness(),
            start: color.with_brightness(1.0),
            end: color.with_brightness(0.0),
        }
    }

    fn name(&self) -> &'static str {
        "brightness"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RedAxis;

impl ComponentAxis for RedAxis {
    fn modified_color(&self, color: HsbColor, value: f64) -> HsbColor {
        color.with_red(value)
    }

    fn value_and_gradient(&self, color: HsbColor) -> AxisValue {
        let (red, _, _) = color.to_rgb();
        AxisValue {
            value: red,
            start: color.with_red(0.0),
            end: color.with_red(1.0),
        }
    }

    fn name(&self) -> &'static str {
        "red"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GreenAxis;

impl ComponentAxis for GreenAxis {
    fn modified_color(&self, color: HsbColor, value: f64) -> HsbColor {
        color.with_green(value)
    }

    fn value_and_gradient(&self, color: HsbColor) -> AxisValue {
        let (_, green, _) = color.to_rgb();
        AxisValue {
            value: green,
            start: color.with_green(0.0),
            end: color.with_green(1.0),
        }
    }

    fn name(&self) -> &'static str {
        "green"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BlueAxis;

impl ComponentAxis for BlueAxis {
    fn modified_color(&self, color: HsbColor, value: f64) -> HsbColor {
        color.with_blue(value)
    }

    fn value_and_gradient(&self, color: HsbColor) -> AxisValue {
        let (_, _, blue) = color.to_rgb();
        AxisValue {
            value: blue,
            start: color.with_blue(0.0),
            end: color.with_blue(1.0),
        }
    }

    fn name(&self) -> &'static str {
        "blue"
    }
}

#[cfg(feature = "alpha")]
#[derive(Debug, Clone, Copy, Default)]
pub struct AlphaAxis;

#[cfg(feature = "alpha")]
impl ComponentAxis for AlphaAxis {
    fn modified_color(&self, color: HsbColor, value: f64) -> HsbColor {
        color.with_alpha(value)
    }

    fn value_and_gradient(&self, color: HsbColor) -> AxisValue {
        AxisValue {
            value: color.alpha(),
            start: color.with_alpha(0.0),
            end: color.with_alpha(1.0),
        }
    }

    fn name(&self) -> &'static str {
        "alpha"
    }

    fn shows_transparency(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brightness_is_inverted() {
        let full = BrightnessAxis.value_and_gradient(HsbColor::new(0.2, 0.5, 1.0));
        assert_eq!(full.value, 0.0);
        let dark = BrightnessAxis.value_and_gradient(HsbColor::new(0.2, 0.5, 0.0));
        assert_eq!(dark.value, 1.0);
        assert_eq!(full.start.brightness(), 1.0);
        assert_eq!(full.end.brightness(), 0.0);

        let picked = BrightnessAxis.modified_color(HsbColor::WHITE, 0.25);
        assert_eq!(picked.brightness(), 0.75);
    }

    #[test]
    fn saturation_replaces_only_saturation() {
        let color = HsbColor::with_alpha_value(0.6, 0.2, 0.7, 0.5);
        let picked = SaturationAxis.modified_color(color, 0.9);
        assert_eq!(picked, HsbColor::with_alpha_value(0.6, 0.9, 0.7, 0.5));
    }

    #[test]
    fn hue_gradient_spans_the_wheel() {
        let axis = HueAxis.value_and_gradient(HsbColor::new(0.3, 1.0, 1.0));
        assert_eq!(axis.value, 0.3);
        assert_eq!(axis.start.hue(), 0.0);
        assert_eq!(axis.end.hue(), 1.0);

        let image = HueAxis.gradient_image(&axis, 100, 1, 0.0);
        assert_eq!(image.pixel(0, 0), Some([255, 8, 0, 255]));
        assert_eq!(image.pixel(50, 0).map(|p| p[0]), Some(0));
    }

    #[test]
    fn rgb_axes_read_channels() {
        let red = HsbColor::new(0.0, 1.0, 1.0);
        assert_eq!(RedAxis.value_and_gradient(red).value, 1.0);
        assert_eq!(GreenAxis.value_and_gradient(red).value, 0.0);
        assert_eq!(BlueAxis.value_and_gradient(red).value, 0.0);

        let gradient = GreenAxis.value_and_gradient(red);
        assert_eq!(gradient.end.to_rgba8(), [255, 255, 0, 255]);
    }

    #[test]
    fn red_to_zero_keeps_hue_of_gray() {
        let gray = HsbColor::new(0.7, 0.0, 0.4);
        let picked = RedAxis.modified_color(gray, 0.4);
        assert_eq!(picked.hue(), 0.7);
        assert_eq!(picked.saturation(), 0.0);
    }

    #[cfg(feature = "alpha")]
    #[test]
    fn alpha_gradient_goes_transparent_to_opaque() {
        let axis = AlphaAxis.value_and_gradient(HsbColor::with_alpha_value(0.1, 1.0, 1.0, 0.4));
        assert_eq!(axis.value, 0.4);
        let image = AlphaAxis.gradient_image(&axis, 20, 2, 4.0);
        assert_eq!(image.pixel(0, 0).map(|p| p[3]), Some(0));
        assert_eq!(image.pixel(19, 1).map(|p| p[3]), Some(255));
    }
}
