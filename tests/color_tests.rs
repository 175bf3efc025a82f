mod common;

use common::approx;
use floem_flex::{
    BlueAxis, ColorControl, ComponentAxis, HsbColor, HueAxis, ParseHexError, RedAxis,
    SaturationAxis, SliderControl,
};

#[test]
fn chromatic_colors_survive_rgb_round_trip() {
    for (h, s, b, a) in [
        (0.0, 1.0, 1.0, 1.0),
        (0.1, 0.5, 0.8, 0.4),
        (0.33, 0.9, 0.2, 0.0),
        (0.5, 0.25, 0.6, 0.75),
        (0.9, 0.75, 0.95, 1.0),
    ] {
        let color = HsbColor::with_alpha_value(h, s, b, a);
        let (r, g, bl) = color.to_rgb();
        let back = HsbColor::from_rgb(r, g, bl, color.alpha(), h);
        assert!(approx(back.hue(), h), "hue {h} came back as {}", back.hue());
        assert!(approx(back.saturation(), s));
        assert!(approx(back.brightness(), b));
        assert_eq!(back.alpha(), a);
    }
}

#[test]
fn grays_keep_the_previous_hue() {
    let gray = HsbColor::from_rgb(0.4, 0.4, 0.4, 1.0, 0.62);
    assert_eq!(gray.hue(), 0.62);
    assert_eq!(gray.saturation(), 0.0);
    assert!(approx(gray.brightness(), 0.4));

    // raising saturation again brings the hue back
    let tinted = HsbColor::new(0.62, 0.8, 0.7).with_rgb(0.5, 0.5, 0.5);
    assert_eq!(tinted.with_saturation(0.8).hue(), 0.62);
}

#[test]
fn translucent_grays_survive_rgb_round_trip() {
    let color = HsbColor::with_alpha_value(0.3, 0.0, 0.55, 0.25);
    let (r, g, b) = color.to_rgb();
    let back = HsbColor::from_rgb(r, g, b, color.alpha(), color.hue());
    assert_eq!(back, color);
}

#[test]
fn hex_formatting() {
    assert_eq!(HsbColor::new(0.0, 0.0, 0.0).to_hex(false), "000000");
    assert_eq!(HsbColor::new(0.0, 1.0, 1.0).to_hex(false), "FF0000");
    assert_eq!(HsbColor::new(1.0 / 3.0, 1.0, 1.0).to_hex(false), "00FF00");
    assert_eq!(HsbColor::WHITE.to_hex(true), "FFFFFFFF");
    assert_eq!(
        HsbColor::new(0.0, 1.0, 1.0).with_alpha(0.0).to_hex(false),
        "FF000000"
    );
    assert_eq!(HsbColor::new(2.0 / 3.0, 1.0, 1.0).to_string(), "#0000FF");
}

#[test]
fn hex_parsing() {
    assert_eq!(HsbColor::from_hex("#FF0000"), Ok(HsbColor::new(0.0, 1.0, 1.0)));
    assert_eq!(HsbColor::from_hex("fff"), Ok(HsbColor::WHITE));
    assert_eq!("000".parse::<HsbColor>(), Ok(HsbColor::BLACK));

    let translucent = HsbColor::from_hex("00FF0080").unwrap();
    assert!(approx(translucent.alpha(), 128.0 / 255.0));
    assert_eq!(translucent.to_hex(false), "00FF0080");
}

#[test]
fn hex_parse_errors() {
    assert_eq!(
        HsbColor::from_hex("#12345"),
        Err(ParseHexError::InvalidLength(5))
    );
    assert_eq!(HsbColor::from_hex(""), Err(ParseHexError::InvalidLength(0)));
    assert_eq!(
        HsbColor::from_hex("#GG0000"),
        Err(ParseHexError::InvalidDigit('G'))
    );
    let message = ParseHexError::InvalidLength(7).to_string();
    assert!(message.contains('7'));
}

#[test]
fn rgb_sliders_edit_channels() {
    let mut slider = SliderControl::new(RedAxis);
    slider.set_bounds(116.0, 16.0);
    let start = HsbColor::from_rgb8(0, 128, 255);
    slider.set_selected_color(start, false);

    // middle of the track is red 0.5
    slider.update_selected_color_at(58.0);
    let (r, g, b) = slider.selected_color().to_rgb();
    assert!(approx(r, 0.5));
    assert!(approx(g, 128.0 / 255.0));
    assert!(approx(b, 1.0));
}

#[test]
fn axis_gradients_describe_the_track() {
    let color = HsbColor::new(0.2, 0.4, 0.6);

    let saturation = SaturationAxis.value_and_gradient(color);
    assert_eq!(saturation.value, 0.4);
    assert_eq!(saturation.start.saturation(), 0.0);
    assert_eq!(saturation.end.saturation(), 1.0);
    assert_eq!(saturation.end.hue(), 0.2);

    let blue = BlueAxis.value_and_gradient(HsbColor::from_rgb8(10, 20, 51));
    assert!(approx(blue.value, 0.2));
    let (_, _, b0) = blue.start.to_rgb();
    let (_, _, b1) = blue.end.to_rgb();
    assert!(approx(b0, 0.0) && approx(b1, 1.0));

    assert_eq!(HueAxis.name(), "hue");
    assert!(!HueAxis.shows_transparency());
}
