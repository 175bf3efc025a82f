//! Rectangular HSB palette.
//!
//! Hue runs along one axis and saturation along the other. The saturation
//! axis is inverted so that full saturation sits at the top (or left) edge.

use floem::kurbo::{Point, Rect, Size};

use super::{PaletteGeometry, PaletteShape};
use crate::color::HsbColor;
use crate::math::clamp_unit;
use crate::raster::{self, RasterImage};

#[derive(Debug, Clone)]
pub struct RectangularPalette {
    size: Size,
    pixel_width: u32,
    pixel_height: u32,
    hue_horizontal: bool,
}

impl Default for RectangularPalette {
    fn default() -> Self {
        Self {
            size: Size::ZERO,
            pixel_width: 0,
            pixel_height: 0,
            hue_horizontal: true,
        }
    }
}

impl RectangularPalette {
    pub fn new() -> Self {
        Self::default()
    }

    /// When `true` hue varies along x (vertical lines share a hue),
    /// otherwise along y.
    pub fn with_hue_horizontal(mut self, hue_horizontal: bool) -> Self {
        self.hue_horizontal = hue_horizontal;
        self
    }

    pub fn set_hue_horizontal(&mut self, hue_horizontal: bool) {
        self.hue_horizontal = hue_horizontal;
    }

    pub fn hue_horizontal(&self) -> bool {
        self.hue_horizontal
    }
}

fn fraction(value: f64, extent: f64) -> f64 {
    if extent > 0.0 {
        clamp_unit(value / extent)
    } else {
        0.0
    }
}

impl PaletteGeometry for RectangularPalette {
    fn set_size(&mut self, size: Size) {
        self.size = size;
        self.pixel_width = size.width.max(0.0) as u32;
        self.pixel_height = size.height.max(0.0) as u32;
    }

    fn size(&self) -> Size {
        self.size
    }

    fn hue_and_saturation(&self, point: Point) -> (f64, f64) {
        let fx = fraction(point.x, self.size.width);
        let fy = fraction(point.y, self.size.height);
        if self.hue_horizontal {
            (fx, 1.0 - fy)
        } else {
            (fy, 1.0 - fx)
        }
    }

    fn position_for(&self, color: HsbColor) -> (Point, f64) {
        let (hue, saturation) = (color.hue(), color.saturation());
        let (fx, fy) = if self.hue_horizontal {
            (hue, 1.0 - saturation)
        } else {
            (1.0 - saturation, hue)
        };
        (
            Point::new(fx * self.size.width, fy * self.size.height),
            color.brightness(),
        )
    }

    fn closest_valid_point(&self, point: Point) -> Point {
        Point::new(
            point.x.max(0.0).min(self.size.width.max(0.0)),
            point.y.max(0.0).min(self.size.height.max(0.0)),
        )
    }

    fn render_foreground(&self) -> RasterImage {
        RasterImage::from_fn(self.pixel_width, self.pixel_height, |x, y| {
            let (hue, saturation) = self.hue_and_saturation(Point::new(x, y));
            raster::opaque_rgba(HsbColor::new(hue, saturation, 1.0))
        })
    }

    fn render_background(&self) -> Option<RasterImage> {
        if self.pixel_width == 0 || self.pixel_height == 0 {
            return None;
        }
        Some(RasterImage::from_fn(
            self.pixel_width,
            self.pixel_height,
            |_, _| raster::OPAQUE_BLACK,
        ))
    }

    fn shape(&self) -> PaletteShape {
        PaletteShape::Rect(Rect::from_origin_size(Point::ZERO, self.size))
    }
}
