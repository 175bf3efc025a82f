//! Hue-only ring palette.
//!
//! A circular strip of constant width showing every hue at full saturation
//! and brightness. Selecting a point changes only the hue; the thumb always
//! sits on the middle line of the strip.

use floem::kurbo::{Point, Size, Vec2};

use super::{point_at_hue, polar_hue, DisplayMode, PaletteGeometry, PaletteShape};
use crate::color::HsbColor;
use crate::constants;
use crate::raster::{self, RasterImage};

#[derive(Debug, Clone)]
pub struct HueRingPalette {
    size: Size,
    radius: f64,
    center: Point,
    ceiled_diameter: u32,
    strip_width: f64,
}

impl Default for HueRingPalette {
    fn default() -> Self {
        Self {
            size: Size::ZERO,
            radius: 0.0,
            center: Point::ZERO,
            ceiled_diameter: 0,
            strip_width: constants::HUE_RING_STRIP_WIDTH,
        }
    }
}

impl HueRingPalette {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strip_width(mut self, strip_width: f64) -> Self {
        self.strip_width = strip_width.max(0.0);
        self
    }

    pub fn strip_width(&self) -> f64 {
        self.strip_width
    }

    /// Distance of the strip's middle line from the center.
    pub fn indicator_distance(&self) -> f64 {
        (self.radius - self.strip_width / 2.0).max(0.0)
    }

    fn inner_radius(&self) -> f64 {
        (self.radius - self.strip_width).max(0.0)
    }
}

impl PaletteGeometry for HueRingPalette {
    fn set_size(&mut self, size: Size) {
        let diameter = size.width.min(size.height).max(0.0);
        self.size = size;
        self.radius = diameter / 2.0;
        self.center = Point::new(self.radius, self.radius);
        self.ceiled_diameter = diameter.ceil() as u32;
    }

    fn size(&self) -> Size {
        self.size
    }

    fn hue_and_saturation(&self, point: Point) -> (f64, f64) {
        let (hue, _) = polar_hue(point, self.center, self.radius);
        (hue, 1.0)
    }

    fn modified_color(&self, color: HsbColor, point: Point) -> HsbColor {
        let (hue, _) = self.hue_and_saturation(point);
        color.with_hue(hue)
    }

    fn position_for(&self, color: HsbColor) -> (Point, f64) {
        (
            point_at_hue(self.center, color.hue(), self.indicator_distance()),
            1.0,
        )
    }

    fn closest_valid_point(&self, point: Point) -> Point {
        let offset = point - self.center;
        let distance = offset.hypot();
        if distance <= 0.0 {
            return self.center + Vec2::new(self.indicator_distance(), 0.0);
        }
        self.center + offset * (self.indicator_distance() / distance)
    }

    fn render_foreground(&self) -> RasterImage {
        let side = self.ceiled_diameter;
        if side == 0 {
            return RasterImage::default();
        }
        let inner = self.inner_radius();
        RasterImage::from_fn(side, side, |x, y| {
            let p = Point::new(x, y);
            let distance = p.distance(self.center);
            if distance > self.radius || distance < inner {
                return raster::TRANSPARENT;
            }
            let (hue, _) = self.hue_and_saturation(p);
            raster::opaque_rgba(HsbColor::new(hue, 1.0, 1.0))
        })
    }

    fn render_background(&self) -> Option<RasterImage> {
        None
    }

    fn supported_display_mode(&self, mode: DisplayMode) -> DisplayMode {
        if mode.stretches() {
            DisplayMode::ScaleAspectFit
        } else {
            mode
        }
    }

    fn shape(&self) -> PaletteShape {
        PaletteShape::Ring {
            center: self.center,
            outer_radius: self.radius,
            inner_radius: self.inner_radius(),
        }
    }

    fn thumb_color(&self, color: HsbColor) -> HsbColor {
        color.with_saturation_and_brightness(1.0, 1.0)
    }

    fn auto_darken_thumb(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring() -> HueRingPalette {
        let mut p = HueRingPalette::new();
        p.set_size(Size::new(100.0, 100.0));
        p
    }

    #[test]
    fn only_hue_changes() {
        let p = ring();
        let base = HsbColor::new(0.0, 0.3, 0.6);
        let picked = p.modified_color(base, Point::new(50.0, 90.0));
        assert!((picked.hue() - 0.25).abs() < 1e-12);
        assert_eq!(picked.saturation(), 0.3);
        assert_eq!(picked.brightness(), 0.6);
    }

    #[test]
    fn points_snap_to_strip_middle() {
        let p = ring();
        assert_eq!(p.indicator_distance(), 36.0);
        let inside = p.closest_valid_point(Point::new(60.0, 50.0));
        assert!((inside.distance(p.center) - 36.0).abs() < 1e-9);
        let outside = p.closest_valid_point(Point::new(50.0, -400.0));
        assert!((outside.x - 50.0).abs() < 1e-9);
        assert!((outside.y - 14.0).abs() < 1e-9);
        assert_eq!(p.closest_valid_point(Point::new(50.0, 50.0)), Point::new(86.0, 50.0));
    }

    #[test]
    fn ring_image_has_hole() {
        let p = ring();
        let image = p.render_foreground();
        assert_eq!(image.pixel(50, 50).map(|px| px[3]), Some(0));
        assert_eq!(image.pixel(98, 50).map(|px| px[3]), Some(255));
        assert!(p.render_background().is_none());
    }

    #[test]
    fn thumb_shows_pure_hue() {
        let p = ring();
        let thumb = p.thumb_color(HsbColor::new(0.4, 0.1, 0.2));
        assert_eq!(thumb, HsbColor::new(0.4, 1.0, 1.0));
        assert!(!p.auto_darken_thumb());
        assert_eq!(p.position_for(HsbColor::WHITE).1, 1.0);
    }
}
