//! Color math — direct conversions without external dependencies.
//! All functions use normalized f64 in 0.0–1.0 for internal use.

/// Clamp into 0.0–1.0. NaN maps to 0.0.
#[inline]
pub(crate) fn clamp_unit(value: f64) -> f64 {
    value.max(0.0).min(1.0)
}

/// Convert a normalized component to a byte, rounding to nearest.
#[inline]
pub(crate) fn component_to_u8(component: f64) -> u8 {
    (clamp_unit(component) * 255.0).round() as u8
}

/// HSB/HSV → RGB using the six-sector algorithm. All values 0.0–1.0.
///
/// Hue 1.0 lands in sector 0 again, so it renders the same as hue 0.0.
pub(crate) fn hsb_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (v, v, v);
    }
    let h6 = h * 6.0;
    let sector = h6.floor();
    let f = h6 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match (sector as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// RGB → HSB/HSV. All values 0.0–1.0.
///
/// Hue is undefined for achromatic input (all channels equal), so
/// `previous_hue` is returned unchanged in that case and saturation is 0.
pub(crate) fn rgb_to_hsb(r: f64, g: f64, b: f64, previous_hue: f64) -> (f64, f64, f64) {
    let (r, g, b) = (clamp_unit(r), clamp_unit(g), clamp_unit(b));
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    if delta == 0.0 {
        return (previous_hue, 0.0, max);
    }

    let h6 = if max == r {
        (g - b) / delta
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    (wrap_unit(h6 / 6.0), delta / max, max)
}

/// Wrap into the half-open turn range 0.0..1.0.
#[inline]
pub(crate) fn wrap_unit(value: f64) -> f64 {
    let wrapped = value.rem_euclid(1.0);
    // rem_euclid of a tiny negative value rounds up to exactly 1.0
    if wrapped >= 1.0 {
        0.0
    } else {
        wrapped
    }
}

/// Normalize a hex string: strip `#`, uppercase, expand shorthand.
///
/// Returns `None` when the input is not 3, 6 or 8 hex digits.
pub(crate) fn normalize_hex(hex: &str) -> Option<String> {
    let stripped = hex.trim().trim_start_matches('#');
    if !stripped.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match stripped.len() {
        3 => {
            let mut out = String::with_capacity(6);
            for c in stripped.chars() {
                out.push(c);
                out.push(c);
            }
            Some(out.to_uppercase())
        }
        6 | 8 => Some(stripped.to_uppercase()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: (f64, f64, f64), b: (f64, f64, f64)) -> bool {
        (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9 && (a.2 - b.2).abs() < 1e-9
    }

    #[test]
    fn primaries_from_hsb() {
        assert!(close(hsb_to_rgb(0.0, 1.0, 1.0), (1.0, 0.0, 0.0)));
        assert!(close(hsb_to_rgb(1.0 / 3.0, 1.0, 1.0), (0.0, 1.0, 0.0)));
        assert!(close(hsb_to_rgb(2.0 / 3.0, 1.0, 1.0), (0.0, 0.0, 1.0)));
        assert!(close(hsb_to_rgb(1.0, 1.0, 1.0), (1.0, 0.0, 0.0)));
    }

    #[test]
    fn achromatic_keeps_previous_hue() {
        let (h, s, v) = rgb_to_hsb(0.4, 0.4, 0.4, 0.75);
        assert_eq!(h, 0.75);
        assert_eq!(s, 0.0);
        assert_eq!(v, 0.4);

        let (h, s, v) = rgb_to_hsb(0.0, 0.0, 0.0, 0.2);
        assert_eq!((h, s, v), (0.2, 0.0, 0.0));
    }

    #[test]
    fn magenta_hue_wraps_below_one() {
        // max == r with g < b gives a negative sector offset
        let (h, s, _) = rgb_to_hsb(1.0, 0.0, 0.5, 0.0);
        assert!(h > 0.9 && h < 1.0);
        assert_eq!(s, 1.0);
    }

    #[test]
    fn wrap_unit_stays_half_open() {
        assert_eq!(wrap_unit(1.0), 0.0);
        assert_eq!(wrap_unit(-1e-18), 0.0);
        assert!((wrap_unit(-0.25) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn clamp_unit_handles_nan_and_range() {
        assert_eq!(clamp_unit(f64::NAN), 0.0);
        assert_eq!(clamp_unit(-3.0), 0.0);
        assert_eq!(clamp_unit(7.0), 1.0);
        assert_eq!(clamp_unit(0.25), 0.25);
    }

    #[test]
    fn byte_rounding() {
        assert_eq!(component_to_u8(0.0), 0);
        assert_eq!(component_to_u8(1.0), 255);
        assert_eq!(component_to_u8(0.5), 128);
        assert_eq!(component_to_u8(2.0), 255);
    }

    #[test]
    fn normalize_hex_variants() {
        assert_eq!(normalize_hex("#abc").as_deref(), Some("AABBCC"));
        assert_eq!(normalize_hex("ff8800").as_deref(), Some("FF8800"));
        assert_eq!(normalize_hex("FF880080").as_deref(), Some("FF880080"));
        assert_eq!(normalize_hex("12345"), None);
        assert_eq!(normalize_hex("zzzzzz"), None);
    }
}
