//! Swatch showing the selected color, with an optional hex label.
//! Tapping it confirms the selection.

use super::{ColorControl, ControlEvent};
use crate::color::HsbColor;

#[derive(Debug, Clone)]
pub struct PreviewControl {
    selected: HsbColor,
    tap_to_confirm: bool,
    display_hex: bool,
    pressed: bool,
}

impl Default for PreviewControl {
    fn default() -> Self {
        Self {
            selected: HsbColor::WHITE,
            tap_to_confirm: true,
            display_hex: true,
            pressed: false,
        }
    }
}

impl PreviewControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_tap_to_confirm(&mut self, tap_to_confirm: bool) {
        self.tap_to_confirm = tap_to_confirm;
        if !tap_to_confirm {
            self.pressed = false;
        }
    }

    pub fn tap_to_confirm(&self) -> bool {
        self.tap_to_confirm
    }

    pub fn set_display_hex(&mut self, display_hex: bool) {
        self.display_hex = display_hex;
    }

    pub fn display_hex(&self) -> bool {
        self.display_hex
    }

    /// `#RRGGBB` for the selected color, or `None` when the label is hidden.
    pub fn hex_label(&self) -> Option<String> {
        self.display_hex
            .then(|| format!("#{}", self.selected.to_hex(false)))
    }

    /// Label color that stays readable on top of the swatch.
    pub fn label_color(&self) -> HsbColor {
        if self.selected.contrast_ratio(&HsbColor::WHITE) < 0.4 {
            HsbColor::BLACK
        } else {
            HsbColor::WHITE
        }
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn pointer_down(&mut self) {
        self.pressed = self.tap_to_confirm;
    }

    /// Finish a tap. Confirms when the press started here and ended inside.
    pub fn pointer_up(&mut self, inside: bool) -> Option<ControlEvent> {
        let was_pressed = std::mem::take(&mut self.pressed);
        (was_pressed && inside && self.tap_to_confirm).then_some(ControlEvent::Confirmed)
    }

    pub fn cancel_tracking(&mut self) {
        self.pressed = false;
    }
}

impl ColorControl for PreviewControl {
    fn selected_color(&self) -> HsbColor {
        self.selected
    }

    fn set_selected_color(&mut self, color: HsbColor, _interactive: bool) {
        self.selected = color;
    }

    fn can_confirm(&self) -> bool {
        true
    }
}
