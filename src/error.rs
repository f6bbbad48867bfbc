/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

/// The ways constructing a color can fail.
///
/// Clamping of out-of-range rgb channels is not an error: numeric construction
/// always succeeds, only text input can be rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    /// The input matched none of the recognized shapes: not a named color,
    /// not hex, not `rgb(...)`, or a number list of the wrong length.
    #[error("invalid constructor arguments")]
    InvalidConstructorArguments,

    /// Text meant as hex was not `#` followed by 3, 6 or 8 hex digits.
    #[error("invalid hex string: {0:?}")]
    InvalidHexString(String),

    /// Text had the `rgb(...)` shape but one of its numbers could not be read.
    #[error("invalid rgb string: {0:?}")]
    InvalidRgbString(String),
}
