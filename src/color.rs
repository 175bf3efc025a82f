//! HsbColor — the color value shared by every control and the controller.
//!
//! Stores hue, saturation, brightness and alpha as f64 values in the
//! 0.0–1.0 range. Every constructor clamps instead of rejecting, and every
//! modification returns a new value.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseHexError;
use crate::math;

/// A color in the HSB (hue, saturation, brightness) model, plus alpha.
///
/// Equality is exact on all four components. Two achromatic colors
/// (saturation 0) with different hues render identically but compare
/// unequal: the hue is kept so that raising saturation again restores it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HsbColor {
    hue: f64,
    saturation: f64,
    brightness: f64,
    alpha: f64,
}

impl HsbColor {
    pub const WHITE: Self = Self {
        hue: 0.0,
        saturation: 0.0,
        brightness: 1.0,
        alpha: 1.0,
    };

    pub const BLACK: Self = Self {
        hue: 0.0,
        saturation: 0.0,
        brightness: 0.0,
        alpha: 1.0,
    };

    /// Create an opaque color. Components are clamped into 0.0–1.0.
    pub fn new(hue: f64, saturation: f64, brightness: f64) -> Self {
        Self::with_alpha_value(hue, saturation, brightness, 1.0)
    }

    /// Create a color with explicit alpha. Components are clamped into 0.0–1.0.
    pub fn with_alpha_value(hue: f64, saturation: f64, brightness: f64, alpha: f64) -> Self {
        Self {
            hue: math::clamp_unit(hue),
            saturation: math::clamp_unit(saturation),
            brightness: math::clamp_unit(brightness),
            alpha: math::clamp_unit(alpha),
        }
    }

    /// Hue (0.0–1.0, one full turn of the color wheel).
    pub fn hue(&self) -> f64 {
        self.hue
    }
    /// Saturation (0.0–1.0).
    pub fn saturation(&self) -> f64 {
        self.saturation
    }
    /// Brightness (0.0–1.0).
    pub fn brightness(&self) -> f64 {
        self.brightness
    }
    /// Alpha (0.0–1.0).
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// `true` when saturation is 0 (gray, white or black).
    pub fn is_achromatic(&self) -> bool {
        self.saturation == 0.0
    }
}

impl Default for HsbColor {
    fn default() -> Self {
        Self::WHITE
    }
}

// RGB conversions.
impl HsbColor {
    /// RGB channels (each 0.0–1.0).
    pub fn to_rgb(&self) -> (f64, f64, f64) {
        math::hsb_to_rgb(self.hue, self.saturation, self.brightness)
    }

    /// Create a color from RGB channels and alpha.
    ///
    /// For achromatic input the hue is undefined; `previous_hue` is used.
    pub fn from_rgb(red: f64, green: f64, blue: f64, alpha: f64, previous_hue: f64) -> Self {
        let (h, s, b) = math::rgb_to_hsb(red, green, blue, math::clamp_unit(previous_hue));
        Self::with_alpha_value(h, s, b, alpha)
    }

    /// Create from f64 RGBA (all 0.0–1.0). Achromatic input gets hue 0.
    pub fn from_rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        let (h, s, b) = math::rgb_to_hsb(red, green, blue, 0.0);
        Self::with_alpha_value(h, s, b, alpha)
    }

    /// Create from 0–255 RGB values with full opacity.
    pub fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::from_rgba(
            red as f64 / 255.0,
            green as f64 / 255.0,
            blue as f64 / 255.0,
            1.0,
        )
    }

    /// Convert to 0–255 RGBA bytes.
    pub fn to_rgba8(&self) -> [u8; 4] {
        let (r, g, b) = self.to_rgb();
        [
            math::component_to_u8(r),
            math::component_to_u8(g),
            math::component_to_u8(b),
            math::component_to_u8(self.alpha),
        ]
    }

    /// Replace all three RGB channels, keeping alpha.
    ///
    /// If the result is achromatic the current hue is kept.
    pub fn with_rgb(&self, red: f64, green: f64, blue: f64) -> Self {
        let (h, s, b) = math::rgb_to_hsb(red, green, blue, self.hue);
        Self::with_alpha_value(h, s, b, self.alpha)
    }

    pub fn with_red(&self, red: f64) -> Self {
        let (_, g, b) = self.to_rgb();
        self.with_rgb(red, g, b)
    }

    pub fn with_green(&self, green: f64) -> Self {
        let (r, _, b) = self.to_rgb();
        self.with_rgb(r, green, b)
    }

    pub fn with_blue(&self, blue: f64) -> Self {
        let (r, g, _) = self.to_rgb();
        self.with_rgb(r, g, blue)
    }
}

// Single-component modifiers.
impl HsbColor {
    pub fn with_hue(&self, hue: f64) -> Self {
        Self::with_alpha_value(hue, self.saturation, self.brightness, self.alpha)
    }

    pub fn with_saturation(&self, saturation: f64) -> Self {
        Self::with_alpha_value(self.hue, saturation, self.brightness, self.alpha)
    }

    pub fn with_brightness(&self, brightness: f64) -> Self {
        Self::with_alpha_value(self.hue, self.saturation, brightness, self.alpha)
    }

    pub fn with_alpha(&self, alpha: f64) -> Self {
        Self::with_alpha_value(self.hue, self.saturation, self.brightness, alpha)
    }

    pub fn with_hue_and_saturation(&self, hue: f64, saturation: f64) -> Self {
        Self::with_alpha_value(hue, saturation, self.brightness, self.alpha)
    }

    pub fn with_saturation_and_brightness(&self, saturation: f64, brightness: f64) -> Self {
        Self::with_alpha_value(self.hue, saturation, brightness, self.alpha)
    }
}

// Hex formatting and parsing.
impl HsbColor {
    /// Format as uppercase hex (no `#` prefix).
    ///
    /// Returns 6 chars (RRGGBB) for opaque colors unless
    /// `always_include_alpha` is set, 8 chars (RRGGBBAA) otherwise.
    pub fn to_hex(&self, always_include_alpha: bool) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if self.alpha == 1.0 && !always_include_alpha {
            format!("{:02X}{:02X}{:02X}", r, g, b)
        } else {
            format!("{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
        }
    }

    /// Parse a hex string (with or without `#`, 3, 6, or 8 digits).
    ///
    /// 8-digit hex is interpreted as RRGGBBAA. 3 and 6-digit hex default to
    /// full opacity.
    pub fn from_hex(hex: &str) -> Result<Self, ParseHexError> {
        let stripped = hex.trim().trim_start_matches('#');
        if let Some(bad) = stripped.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ParseHexError::InvalidDigit(bad));
        }
        let digits = math::normalize_hex(stripped)
            .ok_or(ParseHexError::InvalidLength(stripped.chars().count()))?;
        let byte = |i: usize| -> Result<f64, ParseHexError> {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map(|v| v as f64 / 255.0)
                .map_err(|_| ParseHexError::InvalidDigit(digits.as_bytes()[i] as char))
        };
        let alpha = if digits.len() == 8 { byte(6)? } else { 1.0 };
        Ok(Self::from_rgba(byte(0)?, byte(2)?, byte(4)?, alpha))
    }

    /// Contrast between two colors as a value in 0.0–1.0.
    ///
    /// 0.0 for identical RGB, 1.0 between black and white. This is the mean
    /// absolute channel difference, not the WCAG ratio.
    pub fn contrast_ratio(&self, other: &HsbColor) -> f64 {
        let (r1, g1, b1) = self.to_rgb();
        let (r2, g2, b2) = other.to_rgb();
        ((r1 - r2).abs() + (g1 - g2).abs() + (b1 - b2).abs()) / 3.0
    }
}

impl FromStr for HsbColor {
    type Err = ParseHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for HsbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructor_clamps() {
        let c = HsbColor::with_alpha_value(-0.5, 1.5, 2.0, -1.0);
        assert_eq!(c.hue(), 0.0);
        assert_eq!(c.saturation(), 1.0);
        assert_eq!(c.brightness(), 1.0);
        assert_eq!(c.alpha(), 0.0);
    }

    #[test]
    fn achromatic_colors_with_different_hue_are_not_equal() {
        let a = HsbColor::new(0.1, 0.0, 0.5);
        let b = HsbColor::new(0.6, 0.0, 0.5);
        assert_eq!(a.to_rgb(), b.to_rgb());
        assert_ne!(a, b);
    }

    #[test]
    fn rgb_edit_to_gray_keeps_hue() {
        let c = HsbColor::new(0.0, 1.0, 1.0).with_hue(0.3);
        let gray = c.with_rgb(0.5, 0.5, 0.5);
        assert_eq!(gray.hue(), c.hue());
        assert_eq!(gray.saturation(), 0.0);
        assert_eq!(gray.brightness(), 0.5);
    }

    #[test]
    fn hex_formatting() {
        assert_eq!(HsbColor::new(0.0, 0.0, 0.0).to_hex(false), "000000");
        assert_eq!(HsbColor::new(0.0, 1.0, 1.0).to_hex(false), "FF0000");
        assert_eq!(HsbColor::new(0.0, 1.0, 1.0).to_hex(true), "FF0000FF");
        assert_eq!(
            HsbColor::with_alpha_value(0.0, 0.0, 1.0, 0.5).to_hex(false),
            "FFFFFF80"
        );
    }

    #[test]
    fn hex_parsing() {
        let c: HsbColor = "#00FF00".parse().unwrap();
        assert!((c.hue() - 1.0 / 3.0).abs() < 1e-9);
        assert_eq!(c.saturation(), 1.0);
        assert_eq!(c.brightness(), 1.0);

        let short = HsbColor::from_hex("fff").unwrap();
        assert_eq!(short, HsbColor::WHITE);

        let translucent = HsbColor::from_hex("00000000").unwrap();
        assert_eq!(translucent.alpha(), 0.0);

        assert_eq!(
            HsbColor::from_hex("12345"),
            Err(ParseHexError::InvalidLength(5))
        );
        assert_eq!(
            HsbColor::from_hex("#12g456"),
            Err(ParseHexError::InvalidDigit('g'))
        );
    }

    #[test]
    fn contrast_between_extremes() {
        assert_eq!(HsbColor::WHITE.contrast_ratio(&HsbColor::BLACK), 1.0);
        assert_eq!(HsbColor::WHITE.contrast_ratio(&HsbColor::WHITE), 0.0);
    }

    #[test]
    fn display_uses_hash_prefix() {
        assert_eq!(HsbColor::new(0.0, 1.0, 1.0).to_string(), "#FF0000");
    }
}
