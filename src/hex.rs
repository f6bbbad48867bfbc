/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use std::fmt;
use std::str::FromStr;

use super::{ColorError, Render, RgbColor};

#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// A color as eight hex digits, `RRGGBBAA`.
///
/// Digits keep the case they were parsed with. When the input had no alpha
/// pair, the alpha digits are `FF`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct HexColor {
    /// ASCII hex digits, always valid.
    digits: [u8; 8],
}

impl HexColor {
    /// Parse `#RGB`, `#RRGGBB` or `#RRGGBBAA`.
    ///
    /// The shorthand form expands each digit by duplication, so `#03f`
    /// is stored as `0033ffFF`.
    pub fn parse(input: &str) -> Result<Self, ColorError> {
        let value = match hex_digits(input) {
            Some(value) => value,
            None => return Err(ColorError::InvalidHexString(input.to_owned())),
        };

        let mut digits = [b'F'; 8];
        match value.len() {
            8 => digits.copy_from_slice(value),
            6 => digits[..6].copy_from_slice(value),
            _ => {
                for (i, &digit) in value.iter().enumerate() {
                    digits[i * 2] = digit;
                    digits[i * 2 + 1] = digit;
                }
            }
        }
        Ok(Self { digits })
    }

    /// Whether `input` is `#` followed by exactly 3, 6 or 8 hex digits.
    #[inline]
    pub fn is_valid_hex_string(input: &str) -> bool {
        hex_digits(input).is_some()
    }

    #[inline]
    pub(crate) fn from_digits(digits: [u8; 8]) -> Self {
        debug_assert!(digits.iter().all(u8::is_ascii_hexdigit));
        Self { digits }
    }

    /// Returns the red, green, blue and alpha bytes.
    pub fn to_bytes(&self) -> [u8; 4] {
        [self.pair(0), self.pair(1), self.pair(2), self.pair(3)]
    }

    /// Returns the alpha byte.
    #[inline]
    pub fn alpha(&self) -> u8 {
        self.pair(3)
    }

    /// Returns `self`.
    #[inline]
    pub fn to_hex(self) -> HexColor {
        self
    }

    /// Convert to channels. Alpha becomes the alpha byte divided by 255.
    pub fn to_rgb(self) -> RgbColor {
        let [red, green, blue, alpha] = self.to_bytes();
        RgbColor::from_channels(red, green, blue, alpha as f32 / 255.)
    }

    fn pair(&self, index: usize) -> u8 {
        from_hex(self.digits[index * 2]) * 16 + from_hex(self.digits[index * 2 + 1])
    }
}

/// The digits after `#`, if there are 3, 6 or 8 of them and all are hex.
fn hex_digits(input: &str) -> Option<&[u8]> {
    let value = input.strip_prefix('#')?.as_bytes();
    match value.len() {
        3 | 6 | 8 if value.iter().all(u8::is_ascii_hexdigit) => Some(value),
        _ => None,
    }
}

#[inline]
fn from_hex(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => unreachable!("hex digits are checked on construction"),
    }
}

impl Render for HexColor {
    fn render_to<W>(&self, dest: &mut W, with_alpha: bool) -> fmt::Result
    where
        W: fmt::Write,
    {
        let len = if with_alpha { 8 } else { 6 };
        dest.write_char('#')?;
        for &digit in &self.digits[..len] {
            dest.write_char(digit as char)?;
        }
        Ok(())
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.render_to(f, false)
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl Serialize for HexColor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.render(true))
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(de::Error::custom)
    }
}
