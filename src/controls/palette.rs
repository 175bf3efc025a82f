//! Palette widget model.
//!
//! Generic over the palette shape: the geometry strategy decides how points
//! map to colors and what the preview looks like, this type handles view
//! sizing, image caching, hit testing and gestures.

use floem::kurbo::{Point, Rect, Size};

use super::thumb::ThumbAppearance;
use super::{ColorControl, ControlEvent, GestureTracker, HitBoxInsets};
use crate::color::HsbColor;
use crate::constants;
use crate::geometry::{
    DisplayMode, HueRingPalette, PaletteGeometry, PaletteShape, RadialPalette, RectangularPalette,
};
use crate::raster::RasterImage;

pub struct PaletteControl {
    geometry: Box<dyn PaletteGeometry>,
    selected: HsbColor,
    view_size: Size,
    display_mode: DisplayMode,
    /// Thumb center in image space.
    thumb: Point,
    foreground_alpha: f64,
    foreground: RasterImage,
    background: Option<RasterImage>,
    /// Bumped whenever the preview images are regenerated.
    generation: u64,
    hit_box: HitBoxInsets,
    gesture: GestureTracker,
}

impl PaletteControl {
    pub fn new(geometry: impl PaletteGeometry + 'static) -> Self {
        let mut control = Self {
            geometry: Box::new(geometry),
            selected: HsbColor::WHITE,
            view_size: Size::ZERO,
            display_mode: DisplayMode::default(),
            thumb: Point::ZERO,
            foreground_alpha: 1.0,
            foreground: RasterImage::default(),
            background: None,
            generation: 0,
            hit_box: HitBoxInsets::default(),
            gesture: GestureTracker::default(),
        };
        control.reposition_thumb();
        control
    }

    pub fn radial() -> Self {
        Self::new(RadialPalette::new())
    }

    pub fn rectangular() -> Self {
        Self::new(RectangularPalette::new())
    }

    pub fn hue_ring() -> Self {
        Self::new(HueRingPalette::new())
    }

    /// Swap the geometry strategy and rebuild everything derived from it.
    pub fn set_geometry(&mut self, geometry: impl PaletteGeometry + 'static) {
        self.geometry = Box::new(geometry);
        self.geometry.set_size(self.view_size);
        self.regenerate_images();
        self.reposition_thumb();
    }

    pub fn geometry(&self) -> &dyn PaletteGeometry {
        self.geometry.as_ref()
    }

    /// Resize to the view bounds. Images are only rebuilt when the size
    /// actually changes.
    pub fn set_size(&mut self, size: Size) {
        if size == self.view_size {
            return;
        }
        self.view_size = size;
        self.geometry.set_size(size);
        self.regenerate_images();
        self.reposition_thumb();
    }

    pub fn view_size(&self) -> Size {
        self.view_size
    }

    /// The effective display mode, after the geometry substituted anything
    /// it cannot show.
    pub fn display_mode(&self) -> DisplayMode {
        self.geometry.supported_display_mode(self.display_mode)
    }

    pub fn set_display_mode(&mut self, mode: DisplayMode) {
        self.display_mode = mode;
    }

    pub fn hit_box(&self) -> HitBoxInsets {
        self.hit_box
    }

    pub fn set_hit_box(&mut self, hit_box: HitBoxInsets) {
        self.hit_box = hit_box;
    }

    pub fn foreground(&self) -> &RasterImage {
        &self.foreground
    }

    pub fn background(&self) -> Option<&RasterImage> {
        self.background.as_ref()
    }

    pub fn image_generation(&self) -> u64 {
        self.generation
    }

    /// Opacity of the foreground over the black background.
    pub fn foreground_alpha(&self) -> f64 {
        self.foreground_alpha
    }

    pub fn image_size(&self) -> Size {
        Size::new(
            self.foreground.width() as f64,
            self.foreground.height() as f64,
        )
    }

    /// Where the images go inside the view.
    pub fn image_rect(&self) -> Rect {
        self.display_mode()
            .image_rect(self.view_size, self.image_size())
    }

    /// Palette outline, in view space.
    pub fn shape(&self) -> PaletteShape {
        let offset = self.image_rect().origin().to_vec2();
        match self.geometry.shape() {
            PaletteShape::Disc { center, radius } => PaletteShape::Disc {
                center: center + offset,
                radius,
            },
            PaletteShape::Ring {
                center,
                outer_radius,
                inner_radius,
            } => PaletteShape::Ring {
                center: center + offset,
                outer_radius,
                inner_radius,
            },
            PaletteShape::Rect(rect) => PaletteShape::Rect(rect + offset),
        }
    }

    pub fn to_image_space(&self, point: Point) -> Point {
        self.display_mode()
            .to_image_space(point, self.view_size, self.image_size())
    }

    pub fn to_view_space(&self, point: Point) -> Point {
        self.display_mode()
            .from_image_space(point, self.view_size, self.image_size())
    }

    /// Thumb center, in view space.
    pub fn thumb_position(&self) -> Point {
        self.to_view_space(self.thumb)
    }

    pub fn thumb_appearance(&self) -> ThumbAppearance {
        ThumbAppearance::new(
            self.geometry.thumb_color(self.selected),
            self.geometry.auto_darken_thumb(),
        )
    }

    pub fn is_tracking(&self) -> bool {
        self.gesture.is_held()
    }

    /// A touch counts when it lands close enough to the valid region.
    pub fn hit_test(&self, point: Point) -> bool {
        let image_point = self.to_image_space(point);
        let closest = self.to_view_space(self.geometry.closest_valid_point(image_point));
        let reach = self.hit_box.max_inset().max(constants::MIN_TOUCH_DISTANCE);
        closest.distance(point) <= reach
    }

    /// Pick the color under `point` (view space), snapping to the valid
    /// region.
    pub fn update_selected_color_at(&mut self, point: Point) {
        let image_point = self.to_image_space(point);
        let valid = self.geometry.closest_valid_point(image_point);
        self.selected = self.geometry.modified_color(self.selected, valid);
        self.reposition_thumb();
    }

    pub fn pointer_down(&mut self, point: Point) -> Option<ControlEvent> {
        if !self.hit_test(point) {
            return None;
        }
        self.gesture.begin();
        self.update_selected_color_at(point);
        Some(ControlEvent::ValueChanged)
    }

    pub fn pointer_moved(&mut self, point: Point) -> Option<ControlEvent> {
        if !self.gesture.is_held() {
            return None;
        }
        self.update_selected_color_at(point);
        Some(ControlEvent::ValueChanged)
    }

    pub fn pointer_up(&mut self, point: Point) -> Option<ControlEvent> {
        if !self.gesture.end() {
            return None;
        }
        self.update_selected_color_at(point);
        Some(ControlEvent::ValueChanged)
    }

    pub fn cancel_tracking(&mut self) {
        self.gesture.end();
    }

    fn regenerate_images(&mut self) {
        self.foreground = self.geometry.render_foreground();
        self.background = self.geometry.render_background();
        self.generation = self.generation.wrapping_add(1);
        log::debug!(
            "regenerated palette images at {}x{}",
            self.foreground.width(),
            self.foreground.height()
        );
    }

    fn reposition_thumb(&mut self) {
        let (point, alpha) = self.geometry.position_for(self.selected);
        self.thumb = point;
        self.foreground_alpha = alpha;
    }
}

impl ColorControl for PaletteControl {
    fn selected_color(&self) -> HsbColor {
        self.selected
    }

    fn set_selected_color(&mut self, color: HsbColor, _interactive: bool) {
        self.selected = color;
        self.reposition_thumb();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn radial(side: f64) -> PaletteControl {
        let mut control = PaletteControl::radial();
        control.set_size(Size::new(side, side));
        control
    }

    #[test]
    fn resize_regenerates_only_on_change() {
        let mut control = radial(100.0);
        let generation = control.image_generation();
        control.set_size(Size::new(100.0, 100.0));
        assert_eq!(control.image_generation(), generation);
        control.set_size(Size::new(80.0, 100.0));
        assert_eq!(control.image_generation(), generation + 1);
        assert_eq!(control.foreground().width(), 80);
    }

    #[test]
    fn drag_updates_color_and_thumb() {
        let mut control = radial(100.0);
        control.set_selected_color(HsbColor::new(0.0, 0.0, 0.5), false);
        assert_eq!(
            control.pointer_down(Point::new(100.0, 50.0)),
            Some(ControlEvent::ValueChanged)
        );
        let picked = control.selected_color();
        assert_eq!(picked.hue(), 0.0);
        assert_eq!(picked.saturation(), 1.0);
        assert_eq!(picked.brightness(), 0.5);
        assert_eq!(control.foreground_alpha(), 0.5);

        // dragging outside keeps the thumb on the rim
        control.pointer_moved(Point::new(50.0, 300.0));
        let thumb = control.thumb_position();
        assert!((thumb.x - 50.0).abs() < 1e-9);
        assert!((thumb.y - 100.0).abs() < 1e-9);

        assert!(control.pointer_up(Point::new(50.0, 300.0)).is_some());
        assert!(control.pointer_moved(Point::new(60.0, 60.0)).is_none());
    }

    #[test]
    fn far_touches_are_rejected() {
        let mut control = radial(100.0);
        assert!(control.hit_test(Point::new(50.0, 50.0)));
        assert!(control.hit_test(Point::new(140.0, 50.0)));
        assert!(!control.hit_test(Point::new(150.0, 50.0)));
        assert_eq!(control.pointer_down(Point::new(400.0, 400.0)), None);
        assert!(!control.is_tracking());
    }

    #[test]
    fn centered_in_wide_view() {
        let mut control = PaletteControl::radial();
        control.set_size(Size::new(200.0, 100.0));
        assert_eq!(control.image_rect(), Rect::new(50.0, 0.0, 150.0, 100.0));
        control.pointer_down(Point::new(100.0, 50.0));
        assert_eq!(control.selected_color().saturation(), 0.0);
        match control.shape() {
            PaletteShape::Disc { center, radius } => {
                assert_eq!(center, Point::new(100.0, 50.0));
                assert_eq!(radius, 50.0);
            }
            other => panic!("unexpected shape {other:?}"),
        }
    }

    #[test]
    fn swapping_geometry_keeps_color() {
        let mut control = radial(100.0);
        let color = HsbColor::new(0.25, 0.5, 0.75);
        control.set_selected_color(color, false);
        control.set_geometry(RectangularPalette::new());
        assert_eq!(control.selected_color(), color);
        assert_eq!(control.thumb_position(), Point::new(25.0, 50.0));
        assert_eq!(control.foreground().width(), 100);
    }

    #[test]
    fn hue_ring_thumb_is_never_darkened() {
        let mut control = PaletteControl::hue_ring();
        control.set_size(Size::new(100.0, 100.0));
        control.set_selected_color(HsbColor::WHITE, false);
        let thumb = control.thumb_appearance();
        assert_eq!(thumb.color, HsbColor::new(0.0, 1.0, 1.0));
        assert_eq!(thumb.border, crate::controls::ThumbBorder::Light);
        assert!(control.background().is_none());
    }
}
