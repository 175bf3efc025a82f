//! Appearance of the selection indicator.

use crate::color::HsbColor;
use crate::constants;
use crate::math::clamp_unit;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThumbBorder {
    Light,
    Dark,
}

/// Everything a view needs to paint a thumb.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbAppearance {
    pub color: HsbColor,
    pub border: ThumbBorder,
    pub percentage: Option<u8>,
}

impl ThumbAppearance {
    pub fn new(color: HsbColor, auto_darken: bool) -> Self {
        let border = if auto_darken && Self::needs_dark_border(color) {
            ThumbBorder::Dark
        } else {
            ThumbBorder::Light
        };
        Self {
            color,
            border,
            percentage: None,
        }
    }

    pub fn with_percentage(mut self, percentage: u8) -> Self {
        self.percentage = Some(percentage.min(100));
        self
    }

    /// Bright, washed-out colors disappear against a white border.
    pub fn needs_dark_border(color: HsbColor) -> bool {
        1.0 - color.brightness() < constants::DARK_BORDER_BRIGHTNESS
            && color.saturation() < constants::DARK_BORDER_SATURATION
    }

    /// RGBA8 of the border ring.
    pub fn border_rgba8(&self) -> [u8; 4] {
        match self.border {
            ThumbBorder::Light => [255, 255, 255, 255],
            ThumbBorder::Dark => [77, 77, 77, 255],
        }
    }
}

/// `value` as a whole percentage, clamped to 0–100.
pub(crate) fn percentage(value: f64) -> u8 {
    (clamp_unit(value) * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_border_for_light_pastels() {
        assert!(ThumbAppearance::needs_dark_border(HsbColor::WHITE));
        assert!(ThumbAppearance::needs_dark_border(HsbColor::new(0.5, 0.3, 0.8)));
        assert!(!ThumbAppearance::needs_dark_border(HsbColor::new(0.5, 0.5, 1.0)));
        assert!(!ThumbAppearance::needs_dark_border(HsbColor::new(0.5, 0.1, 0.6)));
    }

    #[test]
    fn auto_darken_can_be_disabled() {
        let thumb = ThumbAppearance::new(HsbColor::WHITE, false);
        assert_eq!(thumb.border, ThumbBorder::Light);
        let thumb = ThumbAppearance::new(HsbColor::WHITE, true);
        assert_eq!(thumb.border, ThumbBorder::Dark);
    }

    #[test]
    fn percentage_rounds_and_clamps() {
        assert_eq!(percentage(0.494), 49);
        assert_eq!(percentage(0.506), 51);
        assert_eq!(percentage(1.7), 100);
        assert_eq!(percentage(-0.2), 0);
        assert_eq!(
            ThumbAppearance::new(HsbColor::BLACK, true)
                .with_percentage(150)
                .percentage,
            Some(100)
        );
    }
}
