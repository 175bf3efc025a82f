//! How a palette image is placed inside its view, and conversion of points
//! between view space and image space.

use floem::kurbo::{Point, Rect, Size};

/// Placement of the palette image within the view bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    Redraw,
    ScaleToFill,
    #[default]
    ScaleAspectFit,
    ScaleAspectFill,
    Center,
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Alignment {
    Start,
    Center,
    End,
}

impl DisplayMode {
    /// `true` for modes that may distort the image's aspect ratio.
    pub fn stretches(self) -> bool {
        matches!(
            self,
            DisplayMode::Redraw | DisplayMode::ScaleToFill | DisplayMode::ScaleAspectFill
        )
    }

    fn horizontal(self) -> Alignment {
        match self {
            DisplayMode::Left | DisplayMode::TopLeft | DisplayMode::BottomLeft => Alignment::Start,
            DisplayMode::Right | DisplayMode::TopRight | DisplayMode::BottomRight => Alignment::End,
            _ => Alignment::Center,
        }
    }

    fn vertical(self) -> Alignment {
        match self {
            DisplayMode::Top | DisplayMode::TopLeft | DisplayMode::TopRight => Alignment::Start,
            DisplayMode::Bottom | DisplayMode::BottomLeft | DisplayMode::BottomRight => {
                Alignment::End
            }
            _ => Alignment::Center,
        }
    }

    /// Convert a point in view coordinates to image coordinates.
    pub fn to_image_space(self, point: Point, view: Size, image: Size) -> Point {
        self.translate(point, view, image, -1.0)
    }

    /// Convert a point in image coordinates to view coordinates.
    pub fn from_image_space(self, point: Point, view: Size, image: Size) -> Point {
        self.translate(point, view, image, 1.0)
    }

    /// Where the image is drawn within the view.
    pub fn image_rect(self, view: Size, image: Size) -> Rect {
        Rect::from_origin_size(self.from_image_space(Point::ZERO, view, image), image)
    }

    fn translate(self, point: Point, view: Size, image: Size, sign: f64) -> Point {
        let dx = (view.width - image.width) * sign;
        let dy = (view.height - image.height) * sign;
        Point::new(
            adjust(point.x, self.horizontal(), dx),
            adjust(point.y, self.vertical(), dy),
        )
    }
}

fn adjust(coordinate: f64, alignment: Alignment, difference: f64) -> f64 {
    match alignment {
        Alignment::Start => coordinate,
        Alignment::Center => coordinate + difference / 2.0,
        Alignment::End => coordinate + difference,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_square_image_in_wide_view() {
        let view = Size::new(200.0, 100.0);
        let image = Size::new(100.0, 100.0);
        let mode = DisplayMode::ScaleAspectFit;
        let p = mode.to_image_space(Point::new(100.0, 50.0), view, image);
        assert_eq!(p, Point::new(50.0, 50.0));
        assert_eq!(mode.from_image_space(p, view, image), Point::new(100.0, 50.0));
        assert_eq!(
            mode.image_rect(view, image),
            Rect::new(50.0, 0.0, 150.0, 100.0)
        );
    }

    #[test]
    fn corner_alignments() {
        let view = Size::new(120.0, 80.0);
        let image = Size::new(100.0, 60.0);
        let p = Point::new(10.0, 10.0);
        assert_eq!(DisplayMode::TopLeft.to_image_space(p, view, image), p);
        assert_eq!(
            DisplayMode::BottomRight.to_image_space(p, view, image),
            Point::new(-10.0, -10.0)
        );
        assert_eq!(
            DisplayMode::Top.from_image_space(p, view, image),
            Point::new(20.0, 10.0)
        );
    }

    #[test]
    fn stretching_modes() {
        assert!(DisplayMode::ScaleToFill.stretches());
        assert!(DisplayMode::Redraw.stretches());
        assert!(!DisplayMode::ScaleAspectFit.stretches());
        assert!(!DisplayMode::Center.stretches());
    }
}
