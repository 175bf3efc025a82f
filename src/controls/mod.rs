//! Widget models driven by the controller.
//!
//! A control owns the color it displays and turns pointer gestures into
//! [`ControlEvent`]s. It never talks to other controls; its owner forwards
//! each event to [`ColorPickerController::dispatch`] once the control's own
//! borrow has been released.
//!
//! [`ColorPickerController::dispatch`]: crate::ColorPickerController::dispatch

mod palette;
mod preview;
mod slider;
mod thumb;

pub use palette::PaletteControl;
pub use preview::PreviewControl;
pub use slider::SliderControl;
pub use thumb::{ThumbAppearance, ThumbBorder};

use std::cell::RefCell;
use std::rc::Rc;

use floem::kurbo::{Point, Rect};

use crate::color::HsbColor;
use crate::constants;

/// The capability every control exposes to the controller.
pub trait ColorControl {
    /// The color currently shown by the control.
    fn selected_color(&self) -> HsbColor;

    /// Show `color`. `interactive` is true when the change comes from the
    /// user manipulating another control, false for programmatic updates.
    fn set_selected_color(&mut self, color: HsbColor, interactive: bool);

    /// Whether the control can emit [`ControlEvent::Confirmed`].
    fn can_confirm(&self) -> bool {
        false
    }
}

/// Signals a control sends to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    ValueChanged,
    Confirmed,
}

/// Shared handle to a registered control. Identity is the allocation.
pub type ControlRef = Rc<RefCell<dyn ColorControl>>;

/// Wrap a control into a shared handle.
pub fn control_ref<C: ColorControl + 'static>(control: C) -> Rc<RefCell<C>> {
    Rc::new(RefCell::new(control))
}

/// `true` when both handles point at the same control.
pub fn same_control(a: &ControlRef, b: &ControlRef) -> bool {
    std::ptr::eq(Rc::as_ptr(a) as *const (), Rc::as_ptr(b) as *const ())
}

/// Extra touch area around a control's visible bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitBoxInsets {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl HitBoxInsets {
    pub const fn uniform(inset: f64) -> Self {
        Self {
            top: inset,
            left: inset,
            bottom: inset,
            right: inset,
        }
    }

    pub fn max_inset(&self) -> f64 {
        self.top.max(self.left).max(self.bottom).max(self.right)
    }

    /// `bounds` grown by the insets.
    pub fn expand(&self, bounds: Rect) -> Rect {
        Rect::new(
            bounds.x0 - self.left,
            bounds.y0 - self.top,
            bounds.x1 + self.right,
            bounds.y1 + self.bottom,
        )
    }

    pub fn contains(&self, bounds: Rect, point: Point) -> bool {
        self.expand(bounds).contains(point)
    }
}

impl Default for HitBoxInsets {
    fn default() -> Self {
        Self::uniform(constants::HIT_BOX_INSET)
    }
}

/// Press/drag state shared by the gesture-driven controls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GestureTracker {
    held: bool,
}

impl GestureTracker {
    pub fn begin(&mut self) {
        self.held = true;
    }

    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Release the gesture; returns whether one was in progress.
    pub fn end(&mut self) -> bool {
        std::mem::take(&mut self.held)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insets_expand_bounds() {
        let insets = HitBoxInsets {
            top: 1.0,
            left: 2.0,
            bottom: 3.0,
            right: 4.0,
        };
        let bounds = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(insets.expand(bounds), Rect::new(-2.0, -1.0, 14.0, 13.0));
        assert_eq!(insets.max_inset(), 4.0);
        assert!(insets.contains(bounds, Point::new(13.0, 12.0)));
        assert!(!insets.contains(bounds, Point::new(-3.0, 5.0)));
    }

    #[test]
    fn gesture_end_reports_previous_state() {
        let mut gesture = GestureTracker::default();
        assert!(!gesture.end());
        gesture.begin();
        assert!(gesture.is_held());
        assert!(gesture.end());
        assert!(!gesture.is_held());
    }
}
