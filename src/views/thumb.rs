//! Painting of the selection thumb.

use floem::context::PaintCx;
use floem::kurbo::{Circle, Point, Stroke};
use floem::peniko::Color;
use floem_renderer::Renderer;

use super::peniko_color;
use crate::controls::ThumbAppearance;

const SHADOW: Color = Color::rgba8(0, 0, 0, 80);

/// Paint a thumb of outer radius `radius` whose colored center is inset by
/// `border` on every side.
pub(crate) fn paint_thumb(
    cx: &mut PaintCx,
    center: Point,
    radius: f64,
    border: f64,
    appearance: &ThumbAppearance,
) {
    let inner_radius = (radius - border).max(0.0);
    let [r, g, b, a] = appearance.border_rgba8();

    cx.fill(
        &Circle::new(center, inner_radius),
        peniko_color(appearance.color),
        0.0,
    );
    cx.stroke(
        &Circle::new(center, radius - border / 2.0),
        Color::rgba8(r, g, b, a),
        &Stroke::new(border),
    );
    cx.stroke(&Circle::new(center, radius + 0.5), SHADOW, &Stroke::new(1.0));
    cx.stroke(&Circle::new(center, inner_radius), SHADOW, &Stroke::new(1.0));
}
