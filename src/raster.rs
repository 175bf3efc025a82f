//! RGBA8 raster images produced by palette geometries and slider axes.
//!
//! Pixels are stored row-major: index `(y * width + x) * 4`. Geometry works
//! in `(x, y)`, so rasterizers iterate rows (y) in the outer loop and columns
//! (x) in the inner loop to avoid mirroring the image across its diagonal.

use floem::kurbo::Point;

use crate::color::HsbColor;
use crate::math;

pub const TRANSPARENT: [u8; 4] = [0, 0, 0, 0];
pub const OPAQUE_BLACK: [u8; 4] = [0, 0, 0, 255];

/// An owned RGBA8 bitmap.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RasterImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl RasterImage {
    /// A fully transparent image.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0u8; (width as usize) * (height as usize) * 4],
        }
    }

    /// Fill every pixel by sampling `f(x, y)`, with `(x, y)` the pixel center.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(f64, f64) -> [u8; 4]) -> Self {
        let mut image = Self::new(width, height);
        for py in 0..height {
            let y = py as f64 + 0.5;
            for px in 0..width {
                let x = px as f64 + 0.5;
                image.set_pixel(px, py, f(x, y));
            }
        }
        image
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// `true` when either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Raw RGBA8 bytes, row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// RGBA of the pixel at column `x`, row `y`, or `None` out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = self.offset(x, y);
        let mut rgba = [0u8; 4];
        rgba.copy_from_slice(&self.pixels[offset..offset + 4]);
        Some(rgba)
    }

    fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let offset = self.offset(x, y);
        self.pixels[offset..offset + 4].copy_from_slice(&rgba);
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + x as usize) * 4
    }
}

/// Opaque RGBA8 bytes for a color, ignoring its alpha.
pub(crate) fn opaque_rgba(color: HsbColor) -> [u8; 4] {
    let (r, g, b) = color.to_rgb();
    [
        math::component_to_u8(r),
        math::component_to_u8(g),
        math::component_to_u8(b),
        255,
    ]
}

/// Solid disc of `rgba` centered at `center` in a `side`×`side` square;
/// transparent outside.
pub(crate) fn fill_disc(side: u32, center: Point, radius: f64, rgba: [u8; 4]) -> RasterImage {
    RasterImage::from_fn(side, side, |x, y| {
        if Point::new(x, y).distance(center) <= radius {
            rgba
        } else {
            TRANSPARENT
        }
    })
}

/// Horizontal two-stop gradient.
///
/// The first and last `inset` pixels hold the end colors; the ramp spans the
/// remaining width. Alpha is interpolated too.
pub(crate) fn linear_gradient(
    width: u32,
    height: u32,
    inset: f64,
    start: HsbColor,
    end: HsbColor,
) -> RasterImage {
    let (sr, sg, sb) = start.to_rgb();
    let (er, eg, eb) = end.to_rgb();
    let (sa, ea) = (start.alpha(), end.alpha());
    let length = width as f64 - 2.0 * inset;

    let mut image = RasterImage::new(width, height);
    for px in 0..width {
        let t = if length > 0.0 {
            math::clamp_unit((px as f64 + 0.5 - inset) / length)
        } else {
            0.0
        };
        let lerp = |a: f64, b: f64| a + (b - a) * t;
        let rgba = [
            math::component_to_u8(lerp(sr, er)),
            math::component_to_u8(lerp(sg, eg)),
            math::component_to_u8(lerp(sb, eb)),
            math::component_to_u8(lerp(sa, ea)),
        ];
        for py in 0..height {
            image.set_pixel(px, py, rgba);
        }
    }
    image
}
