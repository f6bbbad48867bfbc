/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use std::fmt;
use std::str::FromStr;

use tracing::{debug, trace};

use super::{named, rgb, ColorError, HexColor, Render, RgbColor};

#[cfg(feature = "serde")]
use serde::{
    de::{self, SeqAccess, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};

/// A color held in exactly one representation at a time.
///
/// Conversions replace the held representation; they do not keep both.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Color {
    /// Eight hex digits.
    Hex(HexColor),
    /// Byte channels and a float alpha.
    Rgb(RgbColor),
}

impl Color {
    /// An opaque rgb color. Channels are clamped to 0 ... 255.
    #[inline]
    pub fn new(red: i32, green: i32, blue: i32) -> Self {
        Color::Rgb(RgbColor::new(red, green, blue))
    }

    /// An rgb color with alpha. Channels are clamped to 0 ... 255.
    #[inline]
    pub fn with_alpha(red: i32, green: i32, blue: i32, alpha: f32) -> Self {
        Color::Rgb(RgbColor::with_alpha(red, green, blue, alpha))
    }

    /// An rgb color from `[red, green, blue]` or `[red, green, blue, alpha]`.
    ///
    /// Channels are rounded to the nearest integer, then clamped.
    /// Any other number of components is rejected before anything is read.
    pub fn from_components(components: &[f64]) -> Result<Self, ColorError> {
        let (red, green, blue, alpha) = match *components {
            [red, green, blue] => (red, green, blue, 1.),
            [red, green, blue, alpha] => (red, green, blue, alpha),
            _ => return Err(ColorError::InvalidConstructorArguments),
        };
        Ok(Color::with_alpha(
            red.round() as i32,
            green.round() as i32,
            blue.round() as i32,
            alpha as f32,
        ))
    }

    /// Parse a named color, a hex color, or an `rgb()`/`rgba()` function,
    /// tried in that order.
    ///
    /// A name is replaced by its hex value before the hex check. Input
    /// matching no form, malformed hex included, fails with
    /// [`ColorError::InvalidConstructorArguments`]. Use [`HexColor::parse`]
    /// to get [`ColorError::InvalidHexString`] instead.
    pub fn parse(input: &str) -> Result<Self, ColorError> {
        let input = match named::lookup(input) {
            Some(named) => {
                trace!(name = named.name, hex = named.hex, "resolved named color");
                named.hex
            }
            None => input,
        };

        if HexColor::is_valid_hex_string(input) {
            trace!(input, "parsing hex color");
            return HexColor::parse(input).map(Color::Hex);
        }

        match rgb::is_valid_rgb_string(input) {
            Some(matched) => {
                trace!(input, "parsing rgb color");
                matched.to_rgb().map(Color::Rgb)
            }
            None => {
                debug!(input, "not a color");
                Err(ColorError::InvalidConstructorArguments)
            }
        }
    }

    /// Whether the held representation is rgb.
    #[inline]
    pub fn is_rgb(&self) -> bool {
        matches!(*self, Color::Rgb(_))
    }

    /// Whether the held representation is hex.
    #[inline]
    pub fn is_hex(&self) -> bool {
        matches!(*self, Color::Hex(_))
    }

    /// Replace the held representation with rgb and return `self` for chaining.
    ///
    /// Does nothing if it is rgb already.
    pub fn convert_to_rgb(&mut self) -> &mut Self {
        *self = Color::Rgb(self.to_rgb());
        self
    }

    /// Replace the held representation with hex and return `self` for chaining.
    ///
    /// Does nothing if it is hex already.
    pub fn convert_to_hex(&mut self) -> &mut Self {
        *self = Color::Hex(self.to_hex());
        self
    }

    /// The held color as rgb, converting if needed.
    pub fn to_rgb(self) -> RgbColor {
        match self {
            Color::Hex(hex) => hex.to_rgb(),
            Color::Rgb(rgb) => rgb,
        }
    }

    /// The held color as hex, converting if needed.
    pub fn to_hex(self) -> HexColor {
        match self {
            Color::Hex(hex) => hex,
            Color::Rgb(rgb) => rgb.to_hex(),
        }
    }
}

impl Render for Color {
    /// Hex honors `with_alpha`; rgb always renders `rgb(r, g, b)`.
    fn render_to<W>(&self, dest: &mut W, with_alpha: bool) -> fmt::Result
    where
        W: fmt::Write,
    {
        match *self {
            Color::Hex(ref hex) => hex.render_to(dest, with_alpha),
            Color::Rgb(ref rgb) => rgb.render_to(dest, with_alpha),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.render_to(f, false)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<HexColor> for Color {
    fn from(hex: HexColor) -> Self {
        Color::Hex(hex)
    }
}

impl From<RgbColor> for Color {
    fn from(rgb: RgbColor) -> Self {
        Color::Rgb(rgb)
    }
}

/// Hex serializes as its 8-digit string, rgb as a `[r, g, b, alpha]` sequence.
#[cfg(feature = "serde")]
impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match *self {
            Color::Hex(ref hex) => hex.serialize(serializer),
            Color::Rgb(ref rgb) => rgb.serialize(serializer),
        }
    }
}

/// Accepts anything `Color::parse` does, or a sequence of 3 or 4 numbers.
#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ColorVisitor;

        impl<'de> Visitor<'de> for ColorVisitor {
            type Value = Color;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a color string or a sequence of 3 or 4 numbers")
            }

            fn visit_str<E>(self, value: &str) -> Result<Color, E>
            where
                E: de::Error,
            {
                Color::parse(value).map_err(E::custom)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Color, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut components = Vec::with_capacity(4);
                while let Some(component) = seq.next_element::<f64>()? {
                    components.push(component);
                }
                Color::from_components(&components).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_any(ColorVisitor)
    }
}
