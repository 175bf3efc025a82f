//! Slider widget model, parameterized by a component axis.

use floem::kurbo::{Point, Rect};

use super::thumb::{self, ThumbAppearance};
use super::{ColorControl, ControlEvent, GestureTracker, HitBoxInsets};
use crate::axis::{AxisValue, ComponentAxis};
use crate::color::HsbColor;
use crate::constants;
use crate::math::clamp_unit;

pub struct SliderControl {
    axis: Box<dyn ComponentAxis>,
    selected: HsbColor,
    width: f64,
    height: f64,
    indicator_radius: f64,
    gradient: AxisValue,
    reverse_percentage: bool,
    hit_box: HitBoxInsets,
    gesture: GestureTracker,
}

impl SliderControl {
    pub fn new(axis: impl ComponentAxis + 'static) -> Self {
        let axis: Box<dyn ComponentAxis> = Box::new(axis);
        let gradient = axis.value_and_gradient(HsbColor::WHITE);
        Self {
            axis,
            selected: HsbColor::WHITE,
            width: 0.0,
            height: constants::SLIDER_HEIGHT as f64,
            indicator_radius: constants::THUMB_INDICATOR_RADIUS,
            gradient,
            reverse_percentage: false,
            hit_box: HitBoxInsets::default(),
            gesture: GestureTracker::default(),
        }
    }

    pub fn set_axis(&mut self, axis: impl ComponentAxis + 'static) {
        self.axis = Box::new(axis);
        self.refresh();
    }

    pub fn axis(&self) -> &dyn ComponentAxis {
        self.axis.as_ref()
    }

    pub fn set_bounds(&mut self, width: f64, height: f64) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn indicator_radius(&self) -> f64 {
        self.indicator_radius
    }

    pub fn set_indicator_radius(&mut self, radius: f64) {
        self.indicator_radius = radius.max(0.0);
    }

    /// Show the physical component in the label instead of the indicator
    /// position (used by the brightness slider, whose axis runs backwards).
    pub fn set_reverse_percentage(&mut self, reverse: bool) {
        self.reverse_percentage = reverse;
    }

    pub fn set_hit_box(&mut self, hit_box: HitBoxInsets) {
        self.hit_box = hit_box;
    }

    /// Indicator position along the track, 0.0–1.0.
    pub fn value(&self) -> f64 {
        self.gradient.value
    }

    pub fn gradient(&self) -> &AxisValue {
        &self.gradient
    }

    pub fn percentage(&self) -> u8 {
        let value = if self.reverse_percentage {
            1.0 - self.value()
        } else {
            self.value()
        };
        thumb::percentage(value)
    }

    fn track_length(&self) -> f64 {
        self.width - 2.0 * self.indicator_radius
    }

    /// Track value under horizontal position `x`.
    pub fn value_at(&self, x: f64) -> f64 {
        let usable = self.track_length();
        if usable <= 0.0 {
            return 0.0;
        }
        clamp_unit((x - self.indicator_radius) / usable)
    }

    /// Horizontal center of the indicator.
    pub fn thumb_x(&self) -> f64 {
        self.indicator_radius + self.value() * self.track_length().max(0.0)
    }

    pub fn thumb_appearance(&self) -> ThumbAppearance {
        ThumbAppearance::new(self.selected, true).with_percentage(self.percentage())
    }

    pub fn hit_test(&self, point: Point) -> bool {
        self.hit_box
            .contains(Rect::new(0.0, 0.0, self.width, self.height), point)
    }

    pub fn is_tracking(&self) -> bool {
        self.gesture.is_held()
    }

    pub fn pointer_down(&mut self, point: Point) -> Option<ControlEvent> {
        if !self.hit_test(point) {
            return None;
        }
        self.gesture.begin();
        self.update_selected_color_at(point.x);
        Some(ControlEvent::ValueChanged)
    }

    pub fn pointer_moved(&mut self, point: Point) -> Option<ControlEvent> {
        if !self.gesture.is_held() {
            return None;
        }
        self.update_selected_color_at(point.x);
        Some(ControlEvent::ValueChanged)
    }

    pub fn pointer_up(&mut self, point: Point) -> Option<ControlEvent> {
        if !self.gesture.end() {
            return None;
        }
        self.update_selected_color_at(point.x);
        Some(ControlEvent::ValueChanged)
    }

    pub fn cancel_tracking(&mut self) {
        self.gesture.end();
    }

    pub fn update_selected_color_at(&mut self, x: f64) {
        let value = self.value_at(x);
        self.selected = self.axis.modified_color(self.selected, value);
        self.refresh();
    }

    fn refresh(&mut self) {
        self.gradient = self.axis.value_and_gradient(self.selected);
    }
}

impl ColorControl for SliderControl {
    fn selected_color(&self) -> HsbColor {
        self.selected
    }

    fn set_selected_color(&mut self, color: HsbColor, _interactive: bool) {
        self.selected = color;
        self.refresh();
    }
}
