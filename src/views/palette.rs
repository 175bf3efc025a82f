//! Palette view: paints a `PaletteControl` and feeds it pointer events.
//!
//! The preview is rendered at full brightness. Darker colors are shown by
//! laying black over it with `1 - foreground_alpha` opacity, on top of the
//! black underlay when the palette has one.

use std::cell::RefCell;
use std::rc::Rc;

use floem::kurbo::{Rect, Size};
use floem::peniko::Color;
use floem::reactive::{create_effect, RwSignal, SignalGet};
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
    View, ViewId,
};
use floem_renderer::Renderer;

use super::image::CachedImage;
use super::thumb::paint_thumb;
use super::{shape_path, ControlBinding};
use crate::constants;
use crate::controller::ColorPickerController;
use crate::controls::{control_ref, ControlEvent, PaletteControl};

struct Refresh;

pub struct PaletteView {
    id: ViewId,
    control: Rc<RefCell<PaletteControl>>,
    binding: ControlBinding,
    foreground: Option<CachedImage>,
    background: Option<CachedImage>,
    cached_generation: Option<u64>,
}

impl PaletteView {
    pub(crate) fn new(
        controller: &Rc<RefCell<ColorPickerController>>,
        revision: RwSignal<u64>,
        control: PaletteControl,
    ) -> Self {
        let id = ViewId::new();
        let control = control_ref(control);
        let binding = ControlBinding::register(controller, control.clone());

        create_effect(move |_| {
            revision.get();
            id.update_state(Refresh);
        });

        PaletteView {
            id,
            control,
            binding,
            foreground: None,
            background: None,
            cached_generation: None,
        }
        .style(|s| {
            s.flex_grow(1.0)
                .aspect_ratio(1.0)
                .min_height(100.0)
                .cursor(floem::style::CursorStyle::Default)
        })
    }

    /// The model behind this view, for configuring geometry, display mode
    /// or hit box.
    pub fn control(&self) -> Rc<RefCell<PaletteControl>> {
        self.control.clone()
    }

    fn refresh_images(&mut self) {
        let control = self.control.borrow();
        if self.cached_generation == Some(control.image_generation()) {
            return;
        }
        self.foreground = CachedImage::from_raster(control.foreground());
        self.background = control.background().and_then(CachedImage::from_raster);
        self.cached_generation = Some(control.image_generation());
    }
}

impl View for PaletteView {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if state.downcast::<Refresh>().is_ok() {
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        let reported = match event {
            Event::PointerDown(e) => {
                let reported = self.control.borrow_mut().pointer_down(e.pos);
                if reported.is_some() {
                    cx.update_active(self.id());
                }
                reported
            }
            Event::PointerMove(e) => self.control.borrow_mut().pointer_moved(e.pos),
            Event::PointerUp(e) => self.control.borrow_mut().pointer_up(e.pos),
            Event::FocusLost => {
                self.control.borrow_mut().cancel_tracking();
                None
            }
            _ => None,
        };
        match reported {
            Some(control_event) => {
                self.dispatch(control_event);
                EventPropagation::Stop
            }
            None => EventPropagation::Continue,
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        let size = Size::new(layout.size.width as f64, layout.size.height as f64);
        self.control.borrow_mut().set_size(size);
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        self.refresh_images();
        let control = self.control.borrow();
        let view_size = control.view_size();
        if view_size.width == 0.0 || view_size.height == 0.0 {
            return;
        }

        let rect = control.image_rect();
        let outline = shape_path(&control.shape());

        cx.save();
        cx.clip(&outline);
        if let Some(background) = &self.background {
            background.paint(cx, rect);
        }
        if let Some(foreground) = &self.foreground {
            foreground.paint(cx, rect);
        }
        cx.restore();

        let overlay_alpha = 1.0 - control.foreground_alpha();
        if overlay_alpha > 0.001 {
            cx.fill(&outline, Color::rgba(0.0, 0.0, 0.0, overlay_alpha), 0.0);
        }

        paint_thumb(
            cx,
            control.thumb_position(),
            constants::THUMB_DIAMETER / 2.0,
            constants::THUMB_WIDE_BORDER,
            &control.thumb_appearance(),
        );
    }
}

impl PaletteView {
    fn dispatch(&self, event: ControlEvent) {
        self.binding.dispatch(event);
        self.id.request_layout();
    }
}
