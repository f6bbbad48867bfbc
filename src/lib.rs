/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

#![deny(missing_docs)]

/*!

Color values parsed from hex strings, `rgb()`/`rgba()` functions and HTML color names.

# Input

Everything starts from `Color::parse`, which takes a `&str` and tries, in order:

* A named color such as `Khaki`, matched case-insensitively and replaced by its hex value.
* A hex color: `#` followed by 3, 6 or 8 hex digits.
* An `rgb(r, g, b)` or `rgba(r, g, b, a)` function.

Numeric channels go through `Color::new`, `Color::with_alpha` or `Color::from_components`,
which clamp red, green and blue to 0 ... 255 instead of failing.

# Representations

A `Color` is either a `HexColor` or an `RgbColor`, never both.
`Color::convert_to_rgb` and `Color::convert_to_hex` swap one for the other in place:

```rust
use colorvalue::{Color, Render};

let mut color = Color::parse("rgba(45, 113, 215, 0.8)")?;
assert_eq!(color.convert_to_hex().render(true), "#2d71d7cc");
assert_eq!(color.convert_to_rgb().to_string(), "rgb(45, 113, 215)");
# Ok::<(), colorvalue::ColorError>(())
```

Hex to rgb is exact. Rgb to hex stores alpha in one byte, so alpha only survives
the trip back to within 1/255.

*/

pub use crate::color::Color;
pub use crate::error::ColorError;
pub use crate::hex::HexColor;
pub use crate::named::{lookup as lookup_named_color, named_colors, NamedColor};
pub use crate::rgb::{is_valid_rgb_string, RgbColor, RgbMatch};
pub use crate::serializer::Render;

mod color;
mod error;
mod hex;
mod named;
mod rgb;
mod serializer;

#[cfg(test)]
mod tests;
