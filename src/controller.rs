//! The controller keeps every registered control showing the same color.
//!
//! It owns the canonical selected color. When a control reports a change the
//! controller pushes the new color to every other control, in registration
//! order, and then tells its delegate. Confirmation from controls that
//! support it is forwarded the same way.

use std::rc::{Rc, Weak};

use crate::color::HsbColor;
use crate::controls::{same_control, ControlEvent, ControlRef};

/// Observer of the controller. Held weakly: the controller never keeps its
/// delegate alive.
///
/// Both callbacks receive the controller mutably so a delegate can adjust
/// the selection from inside a notification.
pub trait ColorPickerDelegate {
    fn color_selected(
        &self,
        _picker: &mut ColorPickerController,
        _color: HsbColor,
        _source: &ControlRef,
    ) {
    }

    fn color_confirmed(
        &self,
        _picker: &mut ColorPickerController,
        _color: HsbColor,
        _source: &ControlRef,
    ) {
    }
}

struct Registration {
    control: ControlRef,
    listens_confirm: bool,
}

pub struct ColorPickerController {
    selected: HsbColor,
    controls: Vec<Registration>,
    delegate: Option<Weak<dyn ColorPickerDelegate>>,
}

impl Default for ColorPickerController {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorPickerController {
    pub fn new() -> Self {
        Self::with_color(HsbColor::WHITE)
    }

    pub fn with_color(color: HsbColor) -> Self {
        Self {
            selected: color,
            controls: Vec::new(),
            delegate: None,
        }
    }

    pub fn selected_color(&self) -> HsbColor {
        self.selected
    }

    /// Registered controls, in registration order.
    pub fn controls(&self) -> impl Iterator<Item = &ControlRef> + '_ {
        self.controls.iter().map(|r| &r.control)
    }

    pub fn contains(&self, control: &ControlRef) -> bool {
        self.position(control).is_some()
    }

    fn position(&self, control: &ControlRef) -> Option<usize> {
        self.controls
            .iter()
            .position(|r| same_control(&r.control, control))
    }

    fn listens_confirm(&self, control: &ControlRef) -> bool {
        self.position(control)
            .map(|i| self.controls[i].listens_confirm)
            .unwrap_or(false)
    }

    /// Start managing `control` and show it the current color.
    /// Registering the same control twice has no effect.
    pub fn add_control(&mut self, control: ControlRef) {
        if self.contains(&control) {
            log::trace!("control already registered");
            return;
        }
        let listens_confirm = {
            let mut c = control.borrow_mut();
            c.set_selected_color(self.selected, false);
            c.can_confirm()
        };
        log::debug!(
            "registered control #{} (confirm: {listens_confirm})",
            self.controls.len()
        );
        self.controls.push(Registration {
            control,
            listens_confirm,
        });
    }

    /// Stop managing `control`. Unknown controls are ignored.
    pub fn remove_control(&mut self, control: &ControlRef) {
        if let Some(index) = self.position(control) {
            self.controls.remove(index);
            log::debug!("removed control #{index}");
        }
    }

    /// Swap `old` for `new`, which is shown the current color first.
    pub fn replace_control(&mut self, old: &ControlRef, new: ControlRef) {
        self.remove_control(old);
        self.add_control(new);
    }

    pub fn set_delegate<D: ColorPickerDelegate + 'static>(&mut self, delegate: &Rc<D>) {
        let delegate: Rc<dyn ColorPickerDelegate> = delegate.clone();
        self.delegate = Some(Rc::downgrade(&delegate));
    }

    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    fn delegate(&self) -> Option<Rc<dyn ColorPickerDelegate>> {
        self.delegate.as_ref().and_then(Weak::upgrade)
    }

    /// Route an event reported by `source`.
    pub fn dispatch(&mut self, source: Option<&ControlRef>, event: ControlEvent) {
        match event {
            ControlEvent::ValueChanged => self.color_picked(source),
            ControlEvent::Confirmed => self.color_confirmed(source),
        }
    }

    /// `source` changed its color through user interaction.
    pub fn color_picked(&mut self, source: Option<&ControlRef>) {
        let Some(source) = source else {
            log::trace!("ignoring value change without a source");
            return;
        };
        if !self.contains(source) {
            log::trace!("ignoring value change from unregistered control");
            return;
        }
        let Some(color) = read_color(source) else {
            return;
        };
        self.set_color(color, Some(source), true);
        if let Some(delegate) = self.delegate() {
            delegate.color_selected(self, color, source);
        }
    }

    /// `source` asked to confirm its color. Controls that cannot confirm
    /// are ignored. The delegate is told the controller's selection, which
    /// is the source's color unless a delegate changed it while selecting.
    pub fn color_confirmed(&mut self, source: Option<&ControlRef>) {
        let Some(source) = source else {
            log::trace!("ignoring confirmation without a source");
            return;
        };
        if !self.listens_confirm(source) {
            log::trace!("ignoring confirmation from control that cannot confirm");
            return;
        }
        let Some(color) = read_color(source) else {
            return;
        };
        if color != self.selected {
            self.color_picked(Some(source));
        }
        // the delegate may have adjusted the selection while it was picked
        let confirmed = self.selected;
        if let Some(delegate) = self.delegate() {
            delegate.color_confirmed(self, confirmed, source);
        }
    }

    /// Show `color` on every control except `except`, then make it the
    /// selected color.
    pub fn set_color(&mut self, color: HsbColor, except: Option<&ControlRef>, interactive: bool) {
        log::trace!("broadcasting {color} (interactive: {interactive})");
        for registration in &self.controls {
            if except.is_some_and(|e| same_control(e, &registration.control)) {
                continue;
            }
            registration
                .control
                .borrow_mut()
                .set_selected_color(color, interactive);
        }
        self.selected = color;
    }

    /// Programmatic update shown on every control.
    pub fn set_selected_color(&mut self, color: HsbColor) {
        self.set_color(color, None, false);
    }
}

fn read_color(source: &ControlRef) -> Option<HsbColor> {
    match source.try_borrow() {
        Ok(control) => Some(control.selected_color()),
        Err(_) => {
            log::warn!("source control is mutably borrowed; dropping its event");
            None
        }
    }
}
