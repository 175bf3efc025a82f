//! Palette geometry: the mapping between points on a 2D palette and
//! (hue, saturation), plus rendering of the palette preview images.
//!
//! All points are in image space, with the origin at the top-left corner of
//! the palette image and y growing downwards.

mod display;
mod hue_ring;
mod radial;
mod rectangular;

pub use display::DisplayMode;
pub use hue_ring::HueRingPalette;
pub use radial::RadialPalette;
pub use rectangular::RectangularPalette;

use floem::kurbo::{Point, Rect, Size};

use crate::color::HsbColor;
use crate::raster::RasterImage;

/// Outline of the region a palette paints, in image space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaletteShape {
    Disc { center: Point, radius: f64 },
    Ring { center: Point, outer_radius: f64, inner_radius: f64 },
    Rect(Rect),
}

/// Strategy used by [`PaletteControl`](crate::controls::PaletteControl)
/// to interpret points and draw its preview.
///
/// Every method is total: degenerate sizes and points produce defined
/// results rather than NaN or panics.
pub trait PaletteGeometry {
    /// Set the bounding size of the drawable area and recompute all derived
    /// geometry.
    fn set_size(&mut self, size: Size);

    fn size(&self) -> Size;

    /// Hue and saturation (both 0.0–1.0) selected by `point`.
    fn hue_and_saturation(&self, point: Point) -> (f64, f64);

    /// `color` with the components this palette controls replaced by those
    /// at `point`.
    fn modified_color(&self, color: HsbColor, point: Point) -> HsbColor {
        let (hue, saturation) = self.hue_and_saturation(point);
        color.with_hue_and_saturation(hue, saturation)
    }

    /// Where the selection thumb goes for `color`, and the alpha the
    /// foreground image is drawn with over the black background.
    fn position_for(&self, color: HsbColor) -> (Point, f64);

    /// Nearest point of the valid region; identity for points inside it.
    fn closest_valid_point(&self, point: Point) -> Point;

    /// Preview at full brightness. Empty when the size is degenerate.
    fn render_foreground(&self) -> RasterImage;

    /// Black underlay shaped like the foreground, or `None` when the palette
    /// has no underlay or the size is degenerate.
    fn render_background(&self) -> Option<RasterImage>;

    /// The mode to use in place of `mode` when this palette cannot be
    /// displayed with it.
    fn supported_display_mode(&self, mode: DisplayMode) -> DisplayMode {
        mode
    }

    fn shape(&self) -> PaletteShape;

    /// Color shown inside the selection thumb.
    fn thumb_color(&self, color: HsbColor) -> HsbColor {
        color
    }

    /// Whether the thumb may switch to its dark border for bright colors.
    fn auto_darken_thumb(&self) -> bool {
        true
    }
}

/// Normalized offset of `point` from `center`, its length, and the hue of
/// its direction. Hue is 0 along +x and grows towards +y (clockwise on
/// screen), wrapped into 0.0..1.0. A zero offset yields hue 0.
pub(crate) fn polar_hue(point: Point, center: Point, radius: f64) -> (f64, f64) {
    if radius <= 0.0 {
        return (0.0, 0.0);
    }
    let dx = (point.x - center.x) / radius;
    let dy = (point.y - center.y) / radius;
    let distance = (dx * dx + dy * dy).sqrt();
    if distance <= 0.0 {
        return (0.0, 0.0);
    }
    let half_turn = (dx / distance).clamp(-1.0, 1.0).acos() / std::f64::consts::TAU;
    let hue = if dy < 0.0 { 1.0 - half_turn } else { half_turn };
    (crate::math::wrap_unit(hue), distance)
}

/// Point at `distance` from `center` in the direction of `hue`.
pub(crate) fn point_at_hue(center: Point, hue: f64, distance: f64) -> Point {
    let angle = hue * std::f64::consts::TAU;
    Point::new(
        center.x + distance * angle.cos(),
        center.y + distance * angle.sin(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polar_hue_quadrants() {
        let c = Point::new(10.0, 10.0);
        let (h, d) = polar_hue(Point::new(20.0, 10.0), c, 10.0);
        assert_eq!((h, d), (0.0, 1.0));
        let (h, _) = polar_hue(Point::new(10.0, 20.0), c, 10.0);
        assert!((h - 0.25).abs() < 1e-12);
        let (h, _) = polar_hue(Point::new(0.0, 10.0), c, 10.0);
        assert!((h - 0.5).abs() < 1e-12);
        let (h, _) = polar_hue(Point::new(10.0, 0.0), c, 10.0);
        assert!((h - 0.75).abs() < 1e-12);
    }

    #[test]
    fn polar_hue_degenerate() {
        assert_eq!(polar_hue(Point::new(3.0, 3.0), Point::new(3.0, 3.0), 5.0), (0.0, 0.0));
        assert_eq!(polar_hue(Point::new(8.0, 3.0), Point::new(3.0, 3.0), 0.0), (0.0, 0.0));
    }

    #[test]
    fn point_at_hue_inverts_polar_hue() {
        let c = Point::new(50.0, 50.0);
        for hue in [0.0, 0.1, 0.4, 0.6, 0.95] {
            let p = point_at_hue(c, hue, 30.0);
            let (h, d) = polar_hue(p, c, 50.0);
            assert!((h - hue).abs() < 1e-9, "hue {hue} came back as {h}");
            assert!((d - 0.6).abs() < 1e-9);
        }
    }
}
