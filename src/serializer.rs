/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use std::fmt;

/// Trait for things that can serialize themselves as color text.
pub trait Render {
    /// Serialize `self` to `dest`.
    ///
    /// `with_alpha` asks for the alpha channel to be written too.
    /// Representations that have no alpha notation ignore it.
    fn render_to<W>(&self, dest: &mut W, with_alpha: bool) -> fmt::Result
    where
        W: fmt::Write;

    /// Serialize `self` and return a string.
    ///
    /// (This is a convenience wrapper for `render_to` and probably should not be overridden.)
    #[inline]
    fn render(&self, with_alpha: bool) -> String {
        let mut s = String::new();
        self.render_to(&mut s, with_alpha).unwrap();
        s
    }
}

/// The two lowercase ASCII hex digits of `byte`.
#[inline]
pub(crate) fn hex_byte(byte: u8) -> [u8; 2] {
    static HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";
    [
        HEX_DIGITS[(byte >> 4) as usize],
        HEX_DIGITS[(byte & 0x0F) as usize],
    ]
}

/// Write an integer in decimal, without going through `fmt`.
pub(crate) fn write_integer<W>(value: u8, dest: &mut W) -> fmt::Result
where
    W: fmt::Write,
{
    let mut buffer = itoa::Buffer::new();
    dest.write_str(buffer.format(value))
}
