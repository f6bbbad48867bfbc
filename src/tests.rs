/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use super::{
    is_valid_rgb_string, lookup_named_color, named_colors, Color, ColorError, HexColor, Render,
    RgbColor,
};

fn hex_round_trip(input: &str) -> String {
    let mut color = Color::parse(input).unwrap();
    color.convert_to_rgb().convert_to_hex();
    color.render(false)
}

#[test]
fn hex_round_trip_sample() {
    for input in &[
        "#000000", "#ffffff", "#FFFFFF", "#5c8a73", "#2D71D7", "#7d4118", "#010203", "#f0e68c",
    ] {
        assert!(
            hex_round_trip(input).eq_ignore_ascii_case(input),
            "{}",
            input
        );
    }
}

#[cfg(not(feature = "skip_long_tests"))]
#[test]
fn hex_round_trip_all_six_digit_colors() {
    use std::fmt::Write;

    let mut input = String::with_capacity(7);
    for value in 0..=0xFF_FF_FFu32 {
        input.clear();
        write!(input, "#{:06x}", value).unwrap();
        let rgb = HexColor::parse(&input).unwrap().to_rgb();
        assert_eq!(rgb.to_hex().render(false), input);
    }
}

#[test]
fn shorthand_behaves_like_long_form() {
    let short = Color::parse("#03f").unwrap();
    let long = Color::parse("#0033ff").unwrap();
    assert_eq!(short, long);
    assert_eq!(short.render(true), long.render(true));
    assert_eq!(short.to_rgb(), long.to_rgb());
    assert_eq!(short.to_rgb().to_hex(), long.to_rgb().to_hex());
}

#[test]
fn named_colors_resolve_to_hex() {
    let expected = Color::parse("#F0E68C").unwrap();
    for input in &["khaki", "KHAKI", "Khaki"] {
        let color = Color::parse(input).unwrap();
        assert_eq!(color, expected);
        assert_eq!(color.render(true), "#F0E68CFF");
    }

    for named in named_colors() {
        let color = Color::parse(&named.name.to_ascii_lowercase()).unwrap();
        assert!(color.is_hex(), "{}", named.name);
        assert_eq!(color.render(false), named.hex);
    }
    assert_eq!(lookup_named_color("khaki").unwrap().name, "Khaki");
}

#[test]
fn alpha_defaults() {
    assert_eq!(HexColor::parse("#5c8a73").unwrap().alpha(), 0xFF);
    assert_eq!(HexColor::parse("#5c8a73cc").unwrap().alpha(), 0xcc);
    assert_eq!(Color::parse("rgb(1, 2, 3)").unwrap().to_rgb().alpha(), 1.);
    assert_eq!(Color::new(1, 2, 3).to_rgb().alpha(), 1.);
}

#[test]
fn clamping_never_fails() {
    let color = RgbColor::new(-10, 300, 128);
    assert_eq!((color.red(), color.green(), color.blue()), (0, 255, 128));
    assert_eq!(Color::new(-10, 300, 128).render(false), "rgb(0, 255, 128)");
    assert_eq!(
        Color::parse("rgb(256, 1000, 0)").unwrap().render(false),
        "rgb(255, 255, 0)"
    );
}

#[test]
fn rgba_survives_hex_within_quantization() {
    let mut color = Color::parse("rgba(45, 113, 215, 0.8)").unwrap();
    color.convert_to_hex().convert_to_rgb();
    let rgb = color.to_rgb();
    assert_eq!((rgb.red(), rgb.green(), rgb.blue()), (45, 113, 215));
    assert!((rgb.alpha() - 0.8).abs() <= 0.5 / 255.);

    for &alpha in &[0., 0.1, 0.25, 0.333, 0.5, 0.75, 0.99, 1.] {
        let rgb = RgbColor::with_alpha(1, 2, 3, alpha).to_hex().to_rgb();
        assert!((rgb.alpha() - alpha).abs() <= 1. / 255., "{}", alpha);
    }
}

#[test]
fn hex_to_hex_is_a_no_op() {
    let mut color = Color::parse("#62C718").unwrap();
    let before = color;
    assert!(color.is_hex());
    color.convert_to_hex();
    assert!(color.is_hex());
    assert_eq!(color, before);
    assert_eq!(color.render(true), "#62C718FF");
}

#[test]
fn render_with_and_without_alpha() {
    let color = Color::parse("#7D4118CC").unwrap();
    assert_eq!(color.render(true), "#7D4118CC");
    assert_eq!(color.render(false), "#7D4118");
    assert_eq!(color.to_string(), "#7D4118");
    assert_eq!(format!("{}", color), "#7D4118");
}

#[test]
fn validation_helpers() {
    for input in &["#123", "#123456", "#12345678"] {
        assert!(HexColor::is_valid_hex_string(input), "{}", input);
    }
    for input in &[
        "123",
        "#12",
        "#1234",
        "#12345",
        "#1234567",
        "#123456789",
        "#ZZZ",
    ] {
        assert!(!HexColor::is_valid_hex_string(input), "{}", input);
    }

    assert!(is_valid_rgb_string("rgb(1, 2, 3)").is_some());
    assert!(is_valid_rgb_string("rgba(1, 2, 3, 0.5)").is_some());
    assert!(is_valid_rgb_string("#123").is_none());
}

#[test]
fn error_kinds() {
    assert_eq!(
        HexColor::parse("#12345"),
        Err(ColorError::InvalidHexString("#12345".into()))
    );
    assert_eq!(
        HexColor::parse("#ZZZZZZ"),
        Err(ColorError::InvalidHexString("#ZZZZZZ".into()))
    );
    assert_eq!(
        Color::parse("#12345"),
        Err(ColorError::InvalidConstructorArguments)
    );
    assert_eq!(
        Color::parse("#ZZZZZZ"),
        Err(ColorError::InvalidConstructorArguments)
    );
    assert_eq!(
        Color::parse("rgb(4294967296, 0, 0)"),
        Ok(Color::new(255, 0, 0))
    );
    assert_eq!(
        Color::parse("cornflower"),
        Err(ColorError::InvalidConstructorArguments)
    );
    assert_eq!(
        Color::from_components(&[1., 2.]),
        Err(ColorError::InvalidConstructorArguments)
    );
}

#[cfg(feature = "serde")]
mod serialization {
    use crate::{Color, HexColor, RgbColor};

    #[test]
    fn hex_color() {
        let color = HexColor::parse("#03f").unwrap();
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, "\"#0033ffFF\"");
        assert_eq!(serde_json::from_str::<HexColor>(&json).unwrap(), color);
        assert!(serde_json::from_str::<HexColor>("\"#12345\"").is_err());
    }

    #[test]
    fn rgb_color() {
        let color = RgbColor::with_alpha(45, 113, 215, 0.5);
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, "[45,113,215,0.5]");
        assert_eq!(serde_json::from_str::<RgbColor>(&json).unwrap(), color);
        assert_eq!(
            serde_json::from_str::<RgbColor>("[-10,300,128,1.0]").unwrap(),
            RgbColor::new(0, 255, 128)
        );
    }

    #[test]
    fn color() {
        let hex = Color::parse("#5c8a73").unwrap();
        let json = serde_json::to_string(&hex).unwrap();
        assert_eq!(json, "\"#5c8a73FF\"");
        assert_eq!(serde_json::from_str::<Color>(&json).unwrap(), hex);

        let rgb = Color::with_alpha(1, 2, 3, 0.25);
        let json = serde_json::to_string(&rgb).unwrap();
        assert_eq!(json, "[1,2,3,0.25]");
        assert_eq!(serde_json::from_str::<Color>(&json).unwrap(), rgb);

        assert_eq!(
            serde_json::from_str::<Color>("\"Khaki\"").unwrap(),
            Color::parse("#F0E68C").unwrap()
        );
        assert_eq!(
            serde_json::from_str::<Color>("[10, 20, 30]").unwrap(),
            Color::new(10, 20, 30)
        );
    }

    #[test]
    fn color_shape_errors() {
        let error = serde_json::from_str::<Color>("[1, 2]").unwrap_err();
        assert!(error.to_string().contains("invalid constructor arguments"));
        let error = serde_json::from_str::<Color>("[1, 2, 3, 4, 5]").unwrap_err();
        assert!(error.to_string().contains("invalid constructor arguments"));
        assert!(serde_json::from_str::<Color>("true").is_err());
        assert!(serde_json::from_str::<Color>("{\"red\": 1}").is_err());
        assert!(serde_json::from_str::<Color>("\"nope\"").is_err());
    }
}
