//! Floem views wrapping the control models.
//!
//! Each view registers its control with the picker's controller on
//! construction and unregisters it when dropped. Pointer events go to the
//! control first; whatever event the control reports is then dispatched to
//! the controller with the control's borrow already released.

#[cfg(feature = "alpha")]
mod checkerboard;
mod image;
mod palette;
mod preview;
mod slider;
mod thumb;

pub use palette::PaletteView;
pub use preview::preview_view;
pub(crate) use preview::copy_button;
pub use slider::SliderView;

use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use floem::kurbo::{BezPath, Point, Shape};
use floem::peniko::Color;

use crate::color::HsbColor;
use crate::controller::ColorPickerController;
use crate::controls::{ControlEvent, ControlRef};
use crate::geometry::PaletteShape;

/// Keeps a control registered for as long as its view lives.
pub(crate) struct ControlBinding {
    controller: Rc<RefCell<ColorPickerController>>,
    source: ControlRef,
}

impl ControlBinding {
    pub(crate) fn register(
        controller: &Rc<RefCell<ColorPickerController>>,
        source: ControlRef,
    ) -> Self {
        controller.borrow_mut().add_control(source.clone());
        Self {
            controller: controller.clone(),
            source,
        }
    }

    pub(crate) fn dispatch(&self, event: ControlEvent) {
        match self.controller.try_borrow_mut() {
            Ok(mut controller) => controller.dispatch(Some(&self.source), event),
            Err(_) => log::warn!("controller busy; dropping {event:?}"),
        }
    }
}

impl Drop for ControlBinding {
    fn drop(&mut self) {
        match self.controller.try_borrow_mut() {
            Ok(mut controller) => controller.remove_control(&self.source),
            Err(_) => log::warn!("controller busy; dropped view's control stays registered"),
        }
    }
}

pub(crate) fn peniko_color(color: HsbColor) -> Color {
    let [r, g, b, a] = color.to_rgba8();
    Color::rgba8(r, g, b, a)
}

/// Closed circle made of line segments only.
fn circle_path(path: &mut BezPath, center: Point, radius: f64, clockwise: bool) {
    const SEGMENTS: usize = 64;
    for i in 0..SEGMENTS {
        let step = if clockwise { i } else { SEGMENTS - i };
        let angle = TAU * step as f64 / SEGMENTS as f64;
        let pt = Point::new(
            center.x + angle.cos() * radius,
            center.y + angle.sin() * radius,
        );
        if i == 0 {
            path.move_to(pt);
        } else {
            path.line_to(pt);
        }
    }
    path.close_path();
}

/// Outline of a palette as a fillable path. Rings wind their inner edge the
/// other way so the hole stays empty.
pub(crate) fn shape_path(shape: &PaletteShape) -> BezPath {
    let mut path = BezPath::new();
    match *shape {
        PaletteShape::Disc { center, radius } => circle_path(&mut path, center, radius, true),
        PaletteShape::Ring {
            center,
            outer_radius,
            inner_radius,
        } => {
            circle_path(&mut path, center, outer_radius, true);
            if inner_radius > 0.0 {
                circle_path(&mut path, center, inner_radius, false);
            }
        }
        PaletteShape::Rect(rect) => path = rect.to_path(0.1),
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::{control_ref, PreviewControl};

    #[test]
    fn binding_unregisters_on_drop() {
        let controller = Rc::new(RefCell::new(ColorPickerController::new()));
        let control: ControlRef = control_ref(PreviewControl::new());
        let binding = ControlBinding::register(&controller, control.clone());
        assert!(controller.borrow().contains(&control));
        drop(binding);
        assert!(!controller.borrow().contains(&control));
    }

    #[test]
    fn binding_dropped_while_controller_busy_stays_registered() {
        let controller = Rc::new(RefCell::new(ColorPickerController::new()));
        let control: ControlRef = control_ref(PreviewControl::new());
        let binding = ControlBinding::register(&controller, control.clone());
        {
            let _busy = controller.borrow_mut();
            drop(binding);
        }
        assert!(controller.borrow().contains(&control));
    }
}
