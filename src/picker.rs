//! Composition of controls around one controller, bridged to a Floem
//! signal.
//!
//! The signal is the outside world's view of the selection. Writes to it are
//! pushed into the controller as programmatic updates; interactive changes
//! reported by the controller are written back to it. A non-reactive guard
//! keeps the two directions from feeding each other.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use floem::prelude::*;
use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};

use crate::axis::{BrightnessAxis, ComponentAxis, SaturationAxis};
use crate::color::HsbColor;
use crate::constants;
use crate::controller::{ColorPickerController, ColorPickerDelegate};
use crate::controls::{ControlRef, PaletteControl, PreviewControl, SliderControl};
use crate::geometry::PaletteGeometry;
use crate::views::{copy_button, preview_view, PaletteView, SliderView};

/// Delegate that mirrors the controller into signals.
struct SignalBridge {
    color: RwSignal<HsbColor>,
    confirmed: RwSignal<Option<HsbColor>>,
    /// Bumped after every change the controls have already absorbed; views
    /// repaint from it.
    revision: RwSignal<u64>,
    echo: Cell<bool>,
}

impl SignalBridge {
    fn bump(&self) {
        self.revision.update(|r| *r = r.wrapping_add(1));
    }
}

impl ColorPickerDelegate for SignalBridge {
    fn color_selected(
        &self,
        _picker: &mut ColorPickerController,
        color: HsbColor,
        _source: &ControlRef,
    ) {
        self.echo.set(true);
        if self.color.get_untracked() != color {
            self.color.set(color);
        }
        self.echo.set(false);
        self.bump();
    }

    fn color_confirmed(
        &self,
        _picker: &mut ColorPickerController,
        color: HsbColor,
        _source: &ControlRef,
    ) {
        self.confirmed.set(Some(color));
    }
}

/// Factory for controls that stay in sync with `color`.
#[derive(Clone)]
pub struct ColorPicker {
    controller: Rc<RefCell<ColorPickerController>>,
    bridge: Rc<SignalBridge>,
}

impl ColorPicker {
    pub fn new(color: RwSignal<HsbColor>) -> Self {
        let controller = Rc::new(RefCell::new(ColorPickerController::with_color(
            color.get_untracked(),
        )));
        let bridge = Rc::new(SignalBridge {
            color,
            confirmed: RwSignal::new(None),
            revision: RwSignal::new(0),
            echo: Cell::new(false),
        });
        controller.borrow_mut().set_delegate(&bridge);

        // External writes -> controller
        {
            let controller = controller.clone();
            let bridge = bridge.clone();
            create_effect(move |_| {
                let c = color.get();
                if bridge.echo.get() {
                    return;
                }
                let pushed = match controller.try_borrow_mut() {
                    Ok(mut controller) if controller.selected_color() != c => {
                        controller.set_selected_color(c);
                        true
                    }
                    Ok(_) => false,
                    Err(_) => {
                        log::trace!("controller busy, skipping external update");
                        false
                    }
                };
                if pushed {
                    bridge.bump();
                }
            });
        }

        Self { controller, bridge }
    }

    pub fn color(&self) -> RwSignal<HsbColor> {
        self.bridge.color
    }

    /// Last color confirmed through a control that supports confirmation.
    pub fn confirmed(&self) -> RwSignal<Option<HsbColor>> {
        self.bridge.confirmed
    }

    pub fn controller(&self) -> Rc<RefCell<ColorPickerController>> {
        self.controller.clone()
    }

    pub fn palette(&self, control: PaletteControl) -> PaletteView {
        PaletteView::new(&self.controller, self.bridge.revision, control)
    }

    pub fn palette_with(&self, geometry: impl PaletteGeometry + 'static) -> PaletteView {
        self.palette(PaletteControl::new(geometry))
    }

    pub fn radial_palette(&self) -> PaletteView {
        self.palette(PaletteControl::radial())
    }

    pub fn rectangular_palette(&self) -> PaletteView {
        self.palette(PaletteControl::rectangular())
    }

    pub fn hue_ring(&self) -> PaletteView {
        self.palette(PaletteControl::hue_ring())
    }

    pub fn slider(&self, axis: impl ComponentAxis + 'static) -> SliderView {
        self.slider_with(SliderControl::new(axis))
    }

    pub fn slider_with(&self, control: SliderControl) -> SliderView {
        SliderView::new(&self.controller, self.bridge.revision, control)
    }

    /// Slider followed by its percentage label.
    pub fn labeled_slider(&self, control: SliderControl) -> impl IntoView {
        let slider = self.slider_with(control);
        let control = slider.control();
        let revision = self.bridge.revision;
        h_stack((
            slider.style(|s| s.flex_grow(1.0)),
            label(move || {
                revision.get();
                format!("{}%", control.borrow().percentage())
            })
            .style(|s| {
                s.width(32.0)
                    .font_size(constants::HEX_FONT)
                    .color(Color::rgb8(120, 120, 120))
            }),
        ))
        .style(|s| s.items_center().gap(4.0))
    }

    pub fn preview(&self) -> impl IntoView {
        self.preview_with(PreviewControl::new())
    }

    pub fn preview_with(&self, control: PreviewControl) -> impl IntoView {
        preview_view(&self.controller, self.bridge.revision, control)
    }

    /// Button that copies the selected color as `#RRGGBB`.
    pub fn copy_hex_button(&self) -> impl IntoView {
        let color = self.bridge.color;
        copy_button(move || color.get_untracked().to_string())
    }

    #[cfg(all(feature = "eyedropper", target_os = "macos"))]
    pub fn eyedropper_button(&self) -> impl IntoView {
        crate::eyedropper::eyedropper_button(&self.controller)
    }
}

/// The default picker: radial palette, preview, brightness and saturation
/// sliders, and an alpha slider when the `alpha` feature is on.
pub(crate) fn default_layout(color: RwSignal<HsbColor>) -> impl IntoView {
    let picker = ColorPicker::new(color);

    let mut brightness = SliderControl::new(BrightnessAxis);
    brightness.set_reverse_percentage(true);

    v_stack((
        picker.radial_palette().style(|s| s.margin_top(12.0)),
        h_stack((
            #[cfg(all(feature = "eyedropper", target_os = "macos"))]
            picker.eyedropper_button(),
            picker.copy_hex_button(),
            // Spacer pushes the preview to the right
            empty().style(|s| s.flex_grow(1.0)),
            picker.preview(),
        ))
        .style(|s| s.items_center().gap(constants::GAP).margin_horiz(8.0)),
        picker
            .labeled_slider(brightness)
            .style(|s| s.margin_horiz(8.0)),
        picker
            .labeled_slider(SliderControl::new(SaturationAxis))
            .style(|s| s.margin_horiz(8.0)),
        #[cfg(feature = "alpha")]
        picker
            .labeled_slider(SliderControl::new(crate::axis::AlphaAxis))
            .style(|s| s.margin_horiz(8.0)),
    ))
    .style(|s| {
        s.gap(constants::GAP)
            .padding_horiz(constants::PADDING)
            .padding_bottom(constants::PADDING)
            .padding_top(2.0)
            .size_full()
            .justify_center()
            .background(Color::rgb8(242, 242, 242))
    })
}
