#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use floem_flex::controls::control_ref;
use floem_flex::{ColorControl, ColorPickerController, ColorPickerDelegate, ControlRef, HsbColor};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// Control that records every color pushed to it.
pub struct MockControl {
    pub color: HsbColor,
    pub confirms: bool,
    pub pushes: Vec<(HsbColor, bool)>,
}

impl MockControl {
    pub fn new(confirms: bool) -> Rc<RefCell<Self>> {
        control_ref(Self {
            color: HsbColor::BLACK,
            confirms,
            pushes: Vec::new(),
        })
    }
}

impl ColorControl for MockControl {
    fn selected_color(&self) -> HsbColor {
        self.color
    }

    fn set_selected_color(&mut self, color: HsbColor, interactive: bool) {
        self.color = color;
        self.pushes.push((color, interactive));
    }

    fn can_confirm(&self) -> bool {
        self.confirms
    }
}

pub fn handle(control: &Rc<RefCell<MockControl>>) -> ControlRef {
    control.clone()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Notification {
    Selected(HsbColor, *const ()),
    Confirmed(HsbColor, *const ()),
}

pub fn id_of(control: &ControlRef) -> *const () {
    Rc::as_ptr(control) as *const ()
}

/// Delegate that records notifications in order.
#[derive(Default)]
pub struct RecordingDelegate {
    pub seen: RefCell<Vec<Notification>>,
}

impl RecordingDelegate {
    pub fn take(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.seen.borrow_mut())
    }
}

impl ColorPickerDelegate for RecordingDelegate {
    fn color_selected(
        &self,
        _picker: &mut ColorPickerController,
        color: HsbColor,
        source: &ControlRef,
    ) {
        self.seen
            .borrow_mut()
            .push(Notification::Selected(color, id_of(source)));
    }

    fn color_confirmed(
        &self,
        _picker: &mut ColorPickerController,
        color: HsbColor,
        source: &ControlRef,
    ) {
        self.seen
            .borrow_mut()
            .push(Notification::Confirmed(color, id_of(source)));
    }
}
