//! Slider view for any component axis.
//!
//! The track is a rasterized gradient rather than a renderer gradient brush,
//! regenerated only when its end colors or pixel size change.

use std::cell::RefCell;
use std::rc::Rc;

use floem::kurbo::{Point, Rect, Stroke};
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
use super::ControlBinding;
use crate::constants;
use crate::controller::ColorPickerController;
use crate::controls::{control_ref, SliderControl};

struct Refresh;

/// Gradient ends and pixel size the cached track was built for.
type TrackKey = ([u8; 4], [u8; 4], u32, u32);

pub struct SliderView {
    id: ViewId,
    control: Rc<RefCell<SliderControl>>,
    binding: ControlBinding,
    track: Option<CachedImage>,
    track_key: Option<TrackKey>,
}

impl SliderView {
    pub(crate) fn new(
        controller: &Rc<RefCell<ColorPickerController>>,
        revision: RwSignal<u64>,
        control: SliderControl,
    ) -> Self {
        let id = ViewId::new();
        let control = control_ref(control);
        let binding = ControlBinding::register(controller, control.clone());

        create_effect(move |_| {
            revision.get();
            id.update_state(Refresh);
        });

        SliderView {
            id,
            control,
            binding,
            track: None,
            track_key: None,
        }
        .style(|s| {
            s.height(constants::SLIDER_HEIGHT)
                .border_radius(constants::RADIUS)
                .cursor(floem::style::CursorStyle::Pointer)
        })
    }

    pub fn control(&self) -> Rc<RefCell<SliderControl>> {
        self.control.clone()
    }

    fn ensure_track(&mut self, width: f64, height: f64, scale: f64) {
        let s = scale.max(1.0);
        let pw = (width * s).round() as u32;
        let ph = (height * s).round() as u32;
        if pw == 0 || ph == 0 {
            return;
        }

        let control = self.control.borrow();
        let gradient = *control.gradient();
        let key = (gradient.start.to_rgba8(), gradient.end.to_rgba8(), pw, ph);
        if self.track_key == Some(key) {
            return;
        }

        let inset = control.indicator_radius() * s;
        let raster = control.axis().gradient_image(&gradient, pw, ph, inset);
        self.track = CachedImage::from_raster(&raster);
        self.track_key = Some(key);
    }
}

impl View for SliderView {
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
                self.binding.dispatch(control_event);
                self.id.request_layout();
                EventPropagation::Stop
            }
            None => EventPropagation::Continue,
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.control
            .borrow_mut()
            .set_bounds(layout.size.width as f64, layout.size.height as f64);
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let (w, h) = {
            let control = self.control.borrow();
            (control.width(), control.height())
        };
        if w == 0.0 || h == 0.0 {
            return;
        }
        let rect = Rect::new(0.0, 0.0, w, h);
        let rrect = rect.to_rounded_rect(constants::RADIUS as f64);

        cx.save();
        cx.clip(&rrect);
        #[cfg(feature = "alpha")]
        if self.control.borrow().axis().shows_transparency() {
            super::checkerboard::paint_checkerboard(cx, rect);
        }
        self.ensure_track(w, h, cx.scale());
        if let Some(track) = &self.track {
            track.paint(cx, rect);
        }
        cx.restore();

        cx.stroke(&rrect, Color::rgba8(0, 0, 0, 40), &Stroke::new(1.0));

        let control = self.control.borrow();
        let radius = control.indicator_radius();
        paint_thumb(
            cx,
            Point::new(control.thumb_x(), h / 2.0),
            radius,
            radius / 4.0,
            &control.thumb_appearance(),
        );
    }
}
