//! macOS screen color sampler as a picker control.
//!
//! `NSColorSampler` is driven through Objective-C FFI: macOS shows its
//! magnifier overlay, the user clicks a pixel and the selection handler
//! fires asynchronously with the sampled color. The sample is reported to
//! the controller as an interactive change from an [`EyedropperControl`].

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use block2::RcBlock;
use objc2::rc::{Allocated, Id};
use objc2::runtime::{AnyClass, AnyObject};
use objc2::{msg_send, msg_send_id};

use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate};

use crate::color::HsbColor;
use crate::controller::ColorPickerController;
use crate::controls::{control_ref, ColorControl, ControlEvent};
use crate::views::ControlBinding;

/// Control that holds the last sampled color. Never confirms.
#[derive(Debug, Clone, Copy, Default)]
pub struct EyedropperControl {
    selected: HsbColor,
}

impl EyedropperControl {
    /// Take a sampled color, keeping the current hue if the sample is gray.
    pub fn pick(&mut self, red: f64, green: f64, blue: f64, alpha: f64) -> ControlEvent {
        self.selected = self.selected.with_rgb(red, green, blue).with_alpha(alpha);
        ControlEvent::ValueChanged
    }
}

impl ColorControl for EyedropperControl {
    fn selected_color(&self) -> HsbColor {
        self.selected
    }

    fn set_selected_color(&mut self, color: HsbColor, _interactive: bool) {
        self.selected = color;
    }
}

/// Invoke the system sampler. `on_pick` receives sRGB channels and alpha.
/// Cancelling (Esc) calls nothing.
///
/// Must be called from the main thread (Floem event handlers satisfy this).
fn sample_color(on_pick: impl FnOnce(f64, f64, f64, f64) + 'static) {
    let Some(cls) = AnyClass::get("NSColorSampler") else {
        log::warn!("NSColorSampler is not available");
        return;
    };

    let sampler: Allocated<AnyObject> = unsafe { msg_send_id![cls, alloc] };
    let sampler: Id<AnyObject> = unsafe { msg_send_id![sampler, init] };

    type Callback = Cell<Option<Box<dyn FnOnce(f64, f64, f64, f64)>>>;
    let callback: Callback = Cell::new(Some(Box::new(on_pick)));

    let block = RcBlock::new(move |color_ptr: *mut AnyObject| {
        if color_ptr.is_null() {
            return;
        }
        unsafe {
            let Some(color_space_cls) = AnyClass::get("NSColorSpace") else {
                return;
            };
            let srgb: *const AnyObject = msg_send![color_space_cls, sRGBColorSpace];
            if srgb.is_null() {
                return;
            }
            let srgb_color: *const AnyObject =
                msg_send![&*color_ptr, colorUsingColorSpace: &*srgb];
            if srgb_color.is_null() {
                return;
            }
            let (mut r, mut g, mut b, mut a) = (0.0_f64, 0.0_f64, 0.0_f64, 0.0_f64);
            let _: () = msg_send![
                &*srgb_color,
                getRed: &mut r,
                green: &mut g,
                blue: &mut b,
                alpha: &mut a
            ];
            if let Some(cb) = callback.take() {
                cb(r, g, b, a);
            }
        }
    });

    unsafe {
        let _: () = msg_send![&*sampler, showSamplerWithSelectionHandler: &*block];
    }
}

/// Pipette button that samples the screen into the picker.
pub(crate) fn eyedropper_button(controller: &Rc<RefCell<ColorPickerController>>) -> impl IntoView {
    let control = control_ref(EyedropperControl::default());
    let binding = Rc::new(ControlBinding::register(controller, control.clone()));
    let pressed = RwSignal::new(false);

    label(|| lucide_icons::Icon::Pipette.unicode().to_string())
        .style(move |s| {
            let c = if pressed.get() {
                Color::rgb8(80, 80, 80)
            } else {
                Color::rgb8(120, 120, 120)
            };
            s.font_size(18.0)
                .font_family("lucide".to_string())
                .cursor(floem::style::CursorStyle::Pointer)
                .border_radius(3.0)
                .padding(2.0)
                .color(c)
                .hover(|s| s.background(Color::rgb8(230, 230, 230)))
        })
        .on_event_stop(floem::event::EventListener::PointerDown, move |_| {
            pressed.set(true);
        })
        .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
            pressed.set(false);
            let control = control.clone();
            let binding = binding.clone();
            sample_color(move |r, g, b, a| {
                let event = control.borrow_mut().pick(r, g, b, a);
                binding.dispatch(event);
            });
        })
}
