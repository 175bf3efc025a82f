//! Preview swatch with hex label and a copy-to-clipboard button.

use std::cell::RefCell;
use std::rc::Rc;

use floem::event::EventListener;
use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate};

use super::{peniko_color, ControlBinding};
use crate::constants;
use crate::controller::ColorPickerController;
use crate::controls::{control_ref, ColorControl, PreviewControl};

/// Swatch that confirms the selection when tapped.
pub fn preview_view(
    controller: &Rc<RefCell<ColorPickerController>>,
    revision: RwSignal<u64>,
    control: PreviewControl,
) -> impl IntoView {
    let control = control_ref(control);
    let binding = ControlBinding::register(controller, control.clone());

    let swatch_control = control.clone();
    let swatch = empty().style(move |s| {
        revision.get();
        let color = swatch_control.borrow().selected_color();
        s.width_full()
            .flex_grow(1.0)
            .background(peniko_color(color))
    });

    let label_control = control.clone();
    let style_control = control.clone();
    let hex = label(move || {
        revision.get();
        label_control.borrow().hex_label().unwrap_or_default()
    })
    .style(move |s| {
        revision.get();
        let control = style_control.borrow();
        let visible = control.display_hex();
        s.height(constants::HEX_LABEL_HEIGHT)
            .width_full()
            .font_size(constants::HEX_FONT)
            .font_family("monospace".to_string())
            .color(peniko_color(control.label_color()))
            .background(peniko_color(control.selected_color()))
            .justify_center()
            .items_center()
            .apply_if(!visible, |s| s.display(floem::taffy::Display::None))
    });

    let down_control = control.clone();
    let up_control = control.clone();
    let lost_control = control;
    v_stack((swatch, hex))
        .style(|s| {
            s.width(constants::PREVIEW_SIZE.0)
                .height(constants::PREVIEW_SIZE.1)
                .border_radius(constants::RADIUS)
                .border(1.0)
                .border_color(Color::rgb8(180, 180, 180))
                .cursor(floem::style::CursorStyle::Pointer)
        })
        .on_event_stop(EventListener::PointerDown, move |_| {
            down_control.borrow_mut().pointer_down();
        })
        .on_event_stop(EventListener::PointerUp, move |_| {
            let reported = up_control.borrow_mut().pointer_up(true);
            if let Some(event) = reported {
                binding.dispatch(event);
            }
        })
        .on_event_cont(EventListener::PointerLeave, move |_| {
            lost_control.borrow_mut().cancel_tracking();
        })
}

/// A small copy button that copies the result of `get_text` to the clipboard.
pub(crate) fn copy_button(get_text: impl Fn() -> String + 'static) -> impl IntoView {
    let pressed = RwSignal::new(false);
    container(
        label(|| lucide_icons::Icon::Copy.unicode().to_string()).style(move |s| {
            let c = if pressed.get() {
                Color::rgb8(80, 80, 80)
            } else {
                Color::rgb8(120, 120, 120)
            };
            s.font_size(14.0).font_family("lucide".to_string()).color(c)
        }),
    )
    .style(|s| {
        s.size(20.0, 20.0)
            .items_center()
            .justify_center()
            .border_radius(3.0)
            .cursor(floem::style::CursorStyle::Pointer)
            .hover(|s| s.background(Color::rgb8(230, 230, 230)))
    })
    .on_event_stop(EventListener::PointerDown, move |_| {
        pressed.set(true);
    })
    .on_event_stop(EventListener::PointerUp, move |_| {
        pressed.set(false);
        copy_to_clipboard(&get_text());
    })
}

fn copy_to_clipboard(text: &str) {
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => {
            if let Err(err) = clipboard.set_text(text) {
                log::warn!("failed to copy {text}: {err}");
            }
        }
        Err(err) => log::warn!("clipboard unavailable: {err}"),
    }
}
