/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use std::fmt;
use std::num::{IntErrorKind, ParseIntError};
use std::str::FromStr;

use super::serializer::{hex_byte, write_integer};
use super::{ColorError, HexColor, Render};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A color with red, green and blue channels in a byte each, plus a float alpha.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct RgbColor {
    red: u8,
    green: u8,
    blue: u8,
    alpha: f32,
}

impl RgbColor {
    /// Constructs an opaque color. Channels are clamped to 0 ... 255.
    #[inline]
    pub fn new(red: i32, green: i32, blue: i32) -> Self {
        Self::with_alpha(red, green, blue, 1.)
    }

    /// Constructs a color, clamping each channel to 0 ... 255.
    ///
    /// `alpha` is stored as given. It is only clamped when converting to hex.
    #[inline]
    pub fn with_alpha(red: i32, green: i32, blue: i32, alpha: f32) -> Self {
        Self::from_channels(
            clamp_channel(red),
            clamp_channel(green),
            clamp_channel(blue),
            alpha,
        )
    }

    /// Same thing, but with channels that are already bytes.
    #[inline]
    pub fn from_channels(red: u8, green: u8, blue: u8, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Parse `rgb(r, g, b)` or `rgba(r, g, b, a)`.
    pub fn parse(input: &str) -> Result<Self, ColorError> {
        match is_valid_rgb_string(input) {
            Some(matched) => matched.to_rgb(),
            None => Err(ColorError::InvalidRgbString(input.to_owned())),
        }
    }

    /// The red channel.
    #[inline]
    pub fn red(&self) -> u8 {
        self.red
    }

    /// The green channel.
    #[inline]
    pub fn green(&self) -> u8 {
        self.green
    }

    /// The blue channel.
    #[inline]
    pub fn blue(&self) -> u8 {
        self.blue
    }

    /// The alpha channel, normally from 0 to 1.
    #[inline]
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Returns `self`.
    #[inline]
    pub fn to_rgb(self) -> RgbColor {
        self
    }

    /// Convert to lowercase hex digits.
    ///
    /// Alpha is quantized to a byte, so it only survives a round trip to
    /// within 1/255. A color whose alpha byte is 255 gets the default `FF`
    /// pair, as if it had been parsed from `#rrggbb`.
    pub fn to_hex(self) -> HexColor {
        let mut digits = [b'F'; 8];
        digits[0..2].copy_from_slice(&hex_byte(self.red));
        digits[2..4].copy_from_slice(&hex_byte(self.green));
        digits[4..6].copy_from_slice(&hex_byte(self.blue));
        let alpha = if self.alpha.is_nan() {
            255
        } else {
            clamp_unit_f32(self.alpha)
        };
        if alpha < 255 {
            digits[6..8].copy_from_slice(&hex_byte(alpha));
        }
        HexColor::from_digits(digits)
    }
}

fn clamp_channel(value: i32) -> u8 {
    value.max(0).min(255) as u8
}

/// Digit runs too large for `i32` saturate, so they clamp like any other
/// out of range channel.
fn parse_channel(digits: &str) -> Result<i32, ParseIntError> {
    match digits.parse::<i32>() {
        Err(ref error) if *error.kind() == IntErrorKind::PosOverflow => Ok(i32::MAX),
        result => result,
    }
}

fn clamp_unit_f32(val: f32) -> u8 {
    // Round, not floor: a byte `n` read back as `n / 255.` must map to `n` again.
    (val * 255.).round().max(0.).min(255.) as u8
}

impl Render for RgbColor {
    /// Always `rgb(r, g, b)`: there is no alpha notation at this level.
    fn render_to<W>(&self, dest: &mut W, _with_alpha: bool) -> fmt::Result
    where
        W: fmt::Write,
    {
        dest.write_str("rgb(")?;
        write_integer(self.red, dest)?;
        dest.write_str(", ")?;
        write_integer(self.green, dest)?;
        dest.write_str(", ")?;
        write_integer(self.blue, dest)?;
        dest.write_char(')')
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.render_to(f, false)
    }
}

impl FromStr for RgbColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl Serialize for RgbColor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (self.red, self.green, self.blue, self.alpha).serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for RgbColor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (r, g, b, a) = Deserialize::deserialize(deserializer)?;
        Ok(Self::with_alpha(r, g, b, a))
    }
}

/// The pieces of a string that has the `rgb(...)` or `rgba(...)` shape.
///
/// Having this shape does not mean the numbers are usable: see
/// [`RgbMatch::to_rgb`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RgbMatch<'i> {
    /// The whole input.
    pub input: &'i str,
    /// The red digits.
    pub red: &'i str,
    /// The green digits.
    pub green: &'i str,
    /// The blue digits.
    pub blue: &'i str,
    /// The alpha number, if a fourth argument was given.
    pub alpha: Option<&'i str>,
}

impl<'i> RgbMatch<'i> {
    /// Read the captured numbers. Alpha defaults to 1.
    ///
    /// Channels of any size are clamped; only text that is not a number fails.
    pub fn to_rgb(&self) -> Result<RgbColor, ColorError> {
        let invalid = || ColorError::InvalidRgbString(self.input.to_owned());
        let red = parse_channel(self.red).map_err(|_| invalid())?;
        let green = parse_channel(self.green).map_err(|_| invalid())?;
        let blue = parse_channel(self.blue).map_err(|_| invalid())?;
        let alpha = match self.alpha {
            Some(alpha) => alpha.parse().map_err(|_| invalid())?,
            None => 1.,
        };
        Ok(RgbColor::with_alpha(red, green, blue, alpha))
    }
}

/// Match `rgb(r, g, b)` or `rgba(r, g, b, a)`, returning the captured pieces.
///
/// The function name is ASCII case-insensitive and either name takes three or
/// four arguments. Channels are runs of ASCII digits; alpha is a run of digits
/// and dots such as `0.5` or `.5`. ASCII whitespace may surround every piece.
pub fn is_valid_rgb_string(input: &str) -> Option<RgbMatch<'_>> {
    let mut scanner = Scanner::new(input);
    scanner.skip_whitespace();

    let name = scanner.consume_while(|b| b.is_ascii_alphabetic());
    if !name.eq_ignore_ascii_case("rgb") && !name.eq_ignore_ascii_case("rgba") {
        return None;
    }
    scanner.expect_byte(b'(')?;

    let red = scanner.consume_argument(Scanner::consume_integer)?;
    scanner.expect_byte(b',')?;
    let green = scanner.consume_argument(Scanner::consume_integer)?;
    scanner.expect_byte(b',')?;
    let blue = scanner.consume_argument(Scanner::consume_integer)?;

    let alpha = if scanner.try_byte(b',') {
        Some(scanner.consume_argument(Scanner::consume_number)?)
    } else {
        None
    };

    scanner.expect_byte(b')')?;
    scanner.skip_whitespace();
    if !scanner.is_exhausted() {
        return None;
    }

    Some(RgbMatch {
        input,
        red,
        green,
        blue,
        alpha,
    })
}

struct Scanner<'i> {
    input: &'i str,
    position: usize,
}

impl<'i> Scanner<'i> {
    fn new(input: &'i str) -> Self {
        Scanner { input, position: 0 }
    }

    #[inline]
    fn next_byte(&self) -> Option<u8> {
        self.input.as_bytes().get(self.position).copied()
    }

    #[inline]
    fn is_exhausted(&self) -> bool {
        self.position >= self.input.len()
    }

    fn skip_whitespace(&mut self) {
        self.consume_while(|b| b.is_ascii_whitespace());
    }

    /// Consumes ASCII bytes for as long as `predicate` holds.
    fn consume_while<F>(&mut self, predicate: F) -> &'i str
    where
        F: Fn(u8) -> bool,
    {
        let start = self.position;
        while let Some(b) = self.next_byte() {
            if !predicate(b) {
                break;
            }
            self.position += 1;
        }
        &self.input[start..self.position]
    }

    fn try_byte(&mut self, expected: u8) -> bool {
        if self.next_byte() == Some(expected) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    fn expect_byte(&mut self, expected: u8) -> Option<()> {
        if self.try_byte(expected) {
            Some(())
        } else {
            None
        }
    }

    /// Whitespace, a value, whitespace.
    fn consume_argument<F>(&mut self, value: F) -> Option<&'i str>
    where
        F: FnOnce(&mut Self) -> Option<&'i str>,
    {
        self.skip_whitespace();
        let value = value(self)?;
        self.skip_whitespace();
        Some(value)
    }

    fn consume_integer(&mut self) -> Option<&'i str> {
        let digits = self.consume_while(|b| b.is_ascii_digit());
        if digits.is_empty() {
            None
        } else {
            Some(digits)
        }
    }

    /// Digits and dots, with at least one digit. Whether it reads as a
    /// number is decided later.
    fn consume_number(&mut self) -> Option<&'i str> {
        let number = self.consume_while(|b| matches!(b, b'0'..=b'9' | b'.'));
        if number.bytes().any(|b| b.is_ascii_digit()) {
            Some(number)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{is_valid_rgb_string, RgbColor, RgbMatch};
    use crate::{ColorError, Render};

    #[test]
    fn clamping() {
        let color = RgbColor::new(-10, 300, 128);
        assert_eq!((color.red(), color.green(), color.blue()), (0, 255, 128));
        assert_eq!(color.alpha(), 1.);

        let color = RgbColor::with_alpha(i32::MIN, i32::MAX, 0, 0.5);
        assert_eq!((color.red(), color.green(), color.blue()), (0, 255, 0));
        assert_eq!(color.alpha(), 0.5);
    }

    #[test]
    fn alpha_is_not_clamped() {
        assert_eq!(RgbColor::with_alpha(0, 0, 0, 2.5).alpha(), 2.5);
        assert_eq!(RgbColor::with_alpha(0, 0, 0, -1.).alpha(), -1.);
    }

    #[test]
    fn render_ignores_alpha() {
        let color = RgbColor::with_alpha(45, 113, 215, 0.8);
        assert_eq!(color.render(false), "rgb(45, 113, 215)");
        assert_eq!(color.render(true), "rgb(45, 113, 215)");
        assert_eq!(color.to_string(), "rgb(45, 113, 215)");
    }

    #[test]
    fn to_hex() {
        let hex = RgbColor::new(45, 113, 215).to_hex();
        assert_eq!(hex.render(true), "#2d71d7FF");

        let hex = RgbColor::with_alpha(45, 113, 215, 0.8).to_hex();
        assert_eq!(hex.render(true), "#2d71d7cc");
        assert_eq!(hex.render(false), "#2d71d7");

        assert_eq!(RgbColor::with_alpha(0, 0, 0, 0.).to_hex().render(true), "#00000000");
        assert_eq!(RgbColor::with_alpha(0, 0, 0, -3.).to_hex().render(true), "#00000000");
        assert_eq!(RgbColor::with_alpha(0, 0, 0, 7.).to_hex().render(true), "#000000FF");
        assert_eq!(RgbColor::with_alpha(0, 0, 0, f32::NAN).to_hex().render(true), "#000000FF");
    }

    #[test]
    fn nearly_opaque_alpha_gets_the_default_pair() {
        let opaque = RgbColor::new(45, 113, 215).to_hex();
        for &alpha in &[0.999, 0.9985, 1.] {
            let hex = RgbColor::with_alpha(45, 113, 215, alpha).to_hex();
            assert_eq!(hex, opaque, "{}", alpha);
            assert_eq!(hex.render(true), "#2d71d7FF");
        }
        assert_eq!(
            RgbColor::with_alpha(45, 113, 215, 0.997).to_hex().render(true),
            "#2d71d7fe"
        );
    }

    #[test]
    fn to_rgb_is_identity() {
        let color = RgbColor::with_alpha(1, 2, 3, 0.25);
        assert_eq!(color.to_rgb(), color);
    }

    #[test]
    fn match_rgb() {
        assert_eq!(
            is_valid_rgb_string("rgb(45, 113, 215)"),
            Some(RgbMatch {
                input: "rgb(45, 113, 215)",
                red: "45",
                green: "113",
                blue: "215",
                alpha: None,
            })
        );
    }

    #[test]
    fn match_rgba() {
        let matched = is_valid_rgb_string("rgba(45, 113, 215, 0.8)").unwrap();
        assert_eq!((matched.red, matched.green, matched.blue), ("45", "113", "215"));
        assert_eq!(matched.alpha, Some("0.8"));
    }

    #[test]
    fn match_whitespace_and_case() {
        for input in &[
            "rgb(1,2,3)",
            "  rgb( 1 , 2 , 3 )  ",
            "RGB(1,\t2,\n3)",
            "Rgba(1, 2, 3)",
            "rgb(1, 2, 3, 1)",
            "rgba( 1 ,2 ,3 , .5 )",
        ] {
            assert!(is_valid_rgb_string(input).is_some(), "{:?}", input);
        }
    }

    #[test]
    fn no_match() {
        for input in &[
            "",
            "rgb",
            "rgb()",
            "rgb(1, 2)",
            "rgb(1, 2, 3",
            "rgb 1, 2, 3)",
            "rgb (1, 2, 3)",
            "rgb(1, 2, 3, 4, 5)",
            "rgb(-1, 2, 3)",
            "rgb(1.5, 2, 3)",
            "rgb(1 2 3)",
            "rgb(1, 2, 3,)",
            "rgba(1, 2, 3, .)",
            "rgba(1, 2, 3, -0.5)",
            "rgb(1, 2, 3) x",
            "hsl(1, 2, 3)",
            "#123",
        ] {
            assert_eq!(is_valid_rgb_string(input), None, "{:?}", input);
        }
    }

    #[test]
    fn matched_values() {
        let color = is_valid_rgb_string("rgba(45, 113, 215, 0.8)")
            .unwrap()
            .to_rgb()
            .unwrap();
        assert_eq!(color, RgbColor::with_alpha(45, 113, 215, 0.8));

        let color = is_valid_rgb_string("rgb(300, 0, 999)").unwrap().to_rgb().unwrap();
        assert_eq!(color, RgbColor::new(255, 0, 255));
    }

    #[test]
    fn malformed_numbers() {
        let input = "rgba(1, 2, 3, 1.2.3)";
        assert_eq!(
            is_valid_rgb_string(input).unwrap().to_rgb(),
            Err(ColorError::InvalidRgbString(input.into()))
        );

        let matched = RgbMatch {
            input: "rgb(x, 2, 3)",
            red: "x",
            green: "2",
            blue: "3",
            alpha: None,
        };
        assert_eq!(
            matched.to_rgb(),
            Err(ColorError::InvalidRgbString("rgb(x, 2, 3)".into()))
        );
    }

    #[test]
    fn huge_channels_clamp() {
        let color = is_valid_rgb_string("rgb(4294967296, 0, 99999999999999999999)")
            .unwrap()
            .to_rgb()
            .unwrap();
        assert_eq!(color, RgbColor::new(255, 0, 255));
        assert_eq!(
            "rgb(2147483648, 2147483647, 0000000000000000000012)".parse::<RgbColor>(),
            Ok(RgbColor::new(255, 255, 12))
        );
    }

    #[test]
    fn parse() {
        assert_eq!(
            "rgb(10, 20, 30)".parse::<RgbColor>(),
            Ok(RgbColor::new(10, 20, 30))
        );
        assert_eq!(
            RgbColor::parse("#102030"),
            Err(ColorError::InvalidRgbString("#102030".into()))
        );
    }
}
