//! Circular HSB palette.
//!
//! Angle around the center maps to hue and distance from the center maps to
//! saturation. The preview is a square raster clipped to the inscribed
//! circle.

use floem::kurbo::{Point, Size};

use super::{point_at_hue, polar_hue, DisplayMode, PaletteGeometry, PaletteShape};
use crate::color::HsbColor;
use crate::raster::{self, RasterImage};

#[derive(Debug, Clone, Default)]
pub struct RadialPalette {
    size: Size,
    diameter: f64,
    radius: f64,
    center: Point,
    ceiled_diameter: u32,
}

impl RadialPalette {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn center(&self) -> Point {
        self.center
    }
}

impl PaletteGeometry for RadialPalette {
    fn set_size(&mut self, size: Size) {
        let diameter = size.width.min(size.height).max(0.0);
        self.size = size;
        self.diameter = diameter;
        self.radius = diameter / 2.0;
        self.center = Point::new(self.radius, self.radius);
        self.ceiled_diameter = diameter.ceil() as u32;
    }

    fn size(&self) -> Size {
        self.size
    }

    fn hue_and_saturation(&self, point: Point) -> (f64, f64) {
        let (hue, distance) = polar_hue(point, self.center, self.radius);
        (hue, distance.min(1.0))
    }

    fn position_for(&self, color: HsbColor) -> (Point, f64) {
        let position = point_at_hue(self.center, color.hue(), color.saturation() * self.radius);
        (position, color.brightness())
    }

    fn closest_valid_point(&self, point: Point) -> Point {
        let distance = point.distance(self.center);
        if distance <= self.radius {
            return point;
        }
        let scale = self.radius / distance;
        self.center + (point - self.center) * scale
    }

    fn render_foreground(&self) -> RasterImage {
        let side = self.ceiled_diameter;
        if side == 0 {
            return RasterImage::default();
        }
        RasterImage::from_fn(side, side, |x, y| {
            let p = Point::new(x, y);
            if p.distance(self.center) > self.radius {
                return raster::TRANSPARENT;
            }
            let (hue, saturation) = self.hue_and_saturation(p);
            raster::opaque_rgba(HsbColor::new(hue, saturation, 1.0))
        })
    }

    fn render_background(&self) -> Option<RasterImage> {
        if self.ceiled_diameter == 0 {
            return None;
        }
        Some(raster::fill_disc(
            self.ceiled_diameter,
            self.center,
            self.radius,
            raster::OPAQUE_BLACK,
        ))
    }

    fn supported_display_mode(&self, mode: DisplayMode) -> DisplayMode {
        if mode.stretches() {
            DisplayMode::ScaleAspectFit
        } else {
            mode
        }
    }

    fn shape(&self) -> PaletteShape {
        PaletteShape::Disc {
            center: self.center,
            radius: self.radius,
        }
    }
}
