/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! The HTML named colors.
//!
//! <https://www.w3.org/TR/css-color-4/#named-colors>

use phf::{phf_map, Map};

/// A named color: its canonically cased name and `#RRGGBB` value.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct NamedColor {
    /// The name as it is usually written, e.g. `"Khaki"`.
    pub name: &'static str,
    /// Six uppercase hex digits after a `#`, e.g. `"#F0E68C"`.
    pub hex: &'static str,
}

impl NamedColor {
    const fn new(name: &'static str, hex: &'static str) -> Self {
        Self { name, hex }
    }
}

/// Length of the longest name, `lightgoldenrodyellow`.
const MAX_NAME_LENGTH: usize = 20;

// Keys are ASCII lowercase.
static NAMED_COLORS: Map<&'static str, NamedColor> = phf_map! {
    "aliceblue" => NamedColor::new("AliceBlue", "#F0F8FF"),
    "antiquewhite" => NamedColor::new("AntiqueWhite", "#FAEBD7"),
    "aqua" => NamedColor::new("Aqua", "#00FFFF"),
    "aquamarine" => NamedColor::new("Aquamarine", "#7FFFD4"),
    "azure" => NamedColor::new("Azure", "#F0FFFF"),
    "beige" => NamedColor::new("Beige", "#F5F5DC"),
    "bisque" => NamedColor::new("Bisque", "#FFE4C4"),
    "black" => NamedColor::new("Black", "#000000"),
    "blanchedalmond" => NamedColor::new("BlanchedAlmond", "#FFEBCD"),
    "blue" => NamedColor::new("Blue", "#0000FF"),
    "blueviolet" => NamedColor::new("BlueViolet", "#8A2BE2"),
    "brown" => NamedColor::new("Brown", "#A52A2A"),
    "burlywood" => NamedColor::new("BurlyWood", "#DEB887"),
    "cadetblue" => NamedColor::new("CadetBlue", "#5F9EA0"),
    "chartreuse" => NamedColor::new("Chartreuse", "#7FFF00"),
    "chocolate" => NamedColor::new("Chocolate", "#D2691E"),
    "coral" => NamedColor::new("Coral", "#FF7F50"),
    "cornflowerblue" => NamedColor::new("CornflowerBlue", "#6495ED"),
    "cornsilk" => NamedColor::new("Cornsilk", "#FFF8DC"),
    "crimson" => NamedColor::new("Crimson", "#DC143C"),
    "cyan" => NamedColor::new("Cyan", "#00FFFF"),
    "darkblue" => NamedColor::new("DarkBlue", "#00008B"),
    "darkcyan" => NamedColor::new("DarkCyan", "#008B8B"),
    "darkgoldenrod" => NamedColor::new("DarkGoldenRod", "#B8860B"),
    "darkgray" => NamedColor::new("DarkGray", "#A9A9A9"),
    "darkgreen" => NamedColor::new("DarkGreen", "#006400"),
    "darkgrey" => NamedColor::new("DarkGrey", "#A9A9A9"),
    "darkkhaki" => NamedColor::new("DarkKhaki", "#BDB76B"),
    "darkmagenta" => NamedColor::new("DarkMagenta", "#8B008B"),
    "darkolivegreen" => NamedColor::new("DarkOliveGreen", "#556B2F"),
    "darkorange" => NamedColor::new("DarkOrange", "#FF8C00"),
    "darkorchid" => NamedColor::new("DarkOrchid", "#9932CC"),
    "darkred" => NamedColor::new("DarkRed", "#8B0000"),
    "darksalmon" => NamedColor::new("DarkSalmon", "#E9967A"),
    "darkseagreen" => NamedColor::new("DarkSeaGreen", "#8FBC8F"),
    "darkslateblue" => NamedColor::new("DarkSlateBlue", "#483D8B"),
    "darkslategray" => NamedColor::new("DarkSlateGray", "#2F4F4F"),
    "darkslategrey" => NamedColor::new("DarkSlateGrey", "#2F4F4F"),
    "darkturquoise" => NamedColor::new("DarkTurquoise", "#00CED1"),
    "darkviolet" => NamedColor::new("DarkViolet", "#9400D3"),
    "deeppink" => NamedColor::new("DeepPink", "#FF1493"),
    "deepskyblue" => NamedColor::new("DeepSkyBlue", "#00BFFF"),
    "dimgray" => NamedColor::new("DimGray", "#696969"),
    "dimgrey" => NamedColor::new("DimGrey", "#696969"),
    "dodgerblue" => NamedColor::new("DodgerBlue", "#1E90FF"),
    "firebrick" => NamedColor::new("FireBrick", "#B22222"),
    "floralwhite" => NamedColor::new("FloralWhite", "#FFFAF0"),
    "forestgreen" => NamedColor::new("ForestGreen", "#228B22"),
    "fuchsia" => NamedColor::new("Fuchsia", "#FF00FF"),
    "gainsboro" => NamedColor::new("Gainsboro", "#DCDCDC"),
    "ghostwhite" => NamedColor::new("GhostWhite", "#F8F8FF"),
    "gold" => NamedColor::new("Gold", "#FFD700"),
    "goldenrod" => NamedColor::new("GoldenRod", "#DAA520"),
    "gray" => NamedColor::new("Gray", "#808080"),
    "green" => NamedColor::new("Green", "#008000"),
    "greenyellow" => NamedColor::new("GreenYellow", "#ADFF2F"),
    "grey" => NamedColor::new("Grey", "#808080"),
    "honeydew" => NamedColor::new("HoneyDew", "#F0FFF0"),
    "hotpink" => NamedColor::new("HotPink", "#FF69B4"),
    "indianred" => NamedColor::new("IndianRed", "#CD5C5C"),
    "indigo" => NamedColor::new("Indigo", "#4B0082"),
    "ivory" => NamedColor::new("Ivory", "#FFFFF0"),
    "khaki" => NamedColor::new("Khaki", "#F0E68C"),
    "lavender" => NamedColor::new("Lavender", "#E6E6FA"),
    "lavenderblush" => NamedColor::new("LavenderBlush", "#FFF0F5"),
    "lawngreen" => NamedColor::new("LawnGreen", "#7CFC00"),
    "lemonchiffon" => NamedColor::new("LemonChiffon", "#FFFACD"),
    "lightblue" => NamedColor::new("LightBlue", "#ADD8E6"),
    "lightcoral" => NamedColor::new("LightCoral", "#F08080"),
    "lightcyan" => NamedColor::new("LightCyan", "#E0FFFF"),
    "lightgoldenrodyellow" => NamedColor::new("LightGoldenRodYellow", "#FAFAD2"),
    "lightgray" => NamedColor::new("LightGray", "#D3D3D3"),
    "lightgreen" => NamedColor::new("LightGreen", "#90EE90"),
    "lightgrey" => NamedColor::new("LightGrey", "#D3D3D3"),
    "lightpink" => NamedColor::new("LightPink", "#FFB6C1"),
    "lightsalmon" => NamedColor::new("LightSalmon", "#FFA07A"),
    "lightseagreen" => NamedColor::new("LightSeaGreen", "#20B2AA"),
    "lightskyblue" => NamedColor::new("LightSkyBlue", "#87CEFA"),
    "lightslategray" => NamedColor::new("LightSlateGray", "#778899"),
    "lightslategrey" => NamedColor::new("LightSlateGrey", "#778899"),
    "lightsteelblue" => NamedColor::new("LightSteelBlue", "#B0C4DE"),
    "lightyellow" => NamedColor::new("LightYellow", "#FFFFE0"),
    "lime" => NamedColor::new("Lime", "#00FF00"),
    "limegreen" => NamedColor::new("LimeGreen", "#32CD32"),
    "linen" => NamedColor::new("Linen", "#FAF0E6"),
    "magenta" => NamedColor::new("Magenta", "#FF00FF"),
    "maroon" => NamedColor::new("Maroon", "#800000"),
    "mediumaquamarine" => NamedColor::new("MediumAquaMarine", "#66CDAA"),
    "mediumblue" => NamedColor::new("MediumBlue", "#0000CD"),
    "mediumorchid" => NamedColor::new("MediumOrchid", "#BA55D3"),
    "mediumpurple" => NamedColor::new("MediumPurple", "#9370DB"),
    "mediumseagreen" => NamedColor::new("MediumSeaGreen", "#3CB371"),
    "mediumslateblue" => NamedColor::new("MediumSlateBlue", "#7B68EE"),
    "mediumspringgreen" => NamedColor::new("MediumSpringGreen", "#00FA9A"),
    "mediumturquoise" => NamedColor::new("MediumTurquoise", "#48D1CC"),
    "mediumvioletred" => NamedColor::new("MediumVioletRed", "#C71585"),
    "midnightblue" => NamedColor::new("MidnightBlue", "#191970"),
    "mintcream" => NamedColor::new("MintCream", "#F5FFFA"),
    "mistyrose" => NamedColor::new("MistyRose", "#FFE4E1"),
    "moccasin" => NamedColor::new("Moccasin", "#FFE4B5"),
    "navajowhite" => NamedColor::new("NavajoWhite", "#FFDEAD"),
    "navy" => NamedColor::new("Navy", "#000080"),
    "oldlace" => NamedColor::new("OldLace", "#FDF5E6"),
    "olive" => NamedColor::new("Olive", "#808000"),
    "olivedrab" => NamedColor::new("OliveDrab", "#6B8E23"),
    "orange" => NamedColor::new("Orange", "#FFA500"),
    "orangered" => NamedColor::new("OrangeRed", "#FF4500"),
    "orchid" => NamedColor::new("Orchid", "#DA70D6"),
    "palegoldenrod" => NamedColor::new("PaleGoldenRod", "#EEE8AA"),
    "palegreen" => NamedColor::new("PaleGreen", "#98FB98"),
    "paleturquoise" => NamedColor::new("PaleTurquoise", "#AFEEEE"),
    "palevioletred" => NamedColor::new("PaleVioletRed", "#DB7093"),
    "papayawhip" => NamedColor::new("PapayaWhip", "#FFEFD5"),
    "peachpuff" => NamedColor::new("PeachPuff", "#FFDAB9"),
    "peru" => NamedColor::new("Peru", "#CD853F"),
    "pink" => NamedColor::new("Pink", "#FFC0CB"),
    "plum" => NamedColor::new("Plum", "#DDA0DD"),
    "powderblue" => NamedColor::new("PowderBlue", "#B0E0E6"),
    "purple" => NamedColor::new("Purple", "#800080"),
    "rebeccapurple" => NamedColor::new("RebeccaPurple", "#663399"),
    "red" => NamedColor::new("Red", "#FF0000"),
    "rosybrown" => NamedColor::new("RosyBrown", "#BC8F8F"),
    "royalblue" => NamedColor::new("RoyalBlue", "#4169E1"),
    "saddlebrown" => NamedColor::new("SaddleBrown", "#8B4513"),
    "salmon" => NamedColor::new("Salmon", "#FA8072"),
    "sandybrown" => NamedColor::new("SandyBrown", "#F4A460"),
    "seagreen" => NamedColor::new("SeaGreen", "#2E8B57"),
    "seashell" => NamedColor::new("SeaShell", "#FFF5EE"),
    "sienna" => NamedColor::new("Sienna", "#A0522D"),
    "silver" => NamedColor::new("Silver", "#C0C0C0"),
    "skyblue" => NamedColor::new("SkyBlue", "#87CEEB"),
    "slateblue" => NamedColor::new("SlateBlue", "#6A5ACD"),
    "slategray" => NamedColor::new("SlateGray", "#708090"),
    "slategrey" => NamedColor::new("SlateGrey", "#708090"),
    "snow" => NamedColor::new("Snow", "#FFFAFA"),
    "springgreen" => NamedColor::new("SpringGreen", "#00FF7F"),
    "steelblue" => NamedColor::new("SteelBlue", "#4682B4"),
    "tan" => NamedColor::new("Tan", "#D2B48C"),
    "teal" => NamedColor::new("Teal", "#008080"),
    "thistle" => NamedColor::new("Thistle", "#D8BFD8"),
    "tomato" => NamedColor::new("Tomato", "#FF6347"),
    "turquoise" => NamedColor::new("Turquoise", "#40E0D0"),
    "violet" => NamedColor::new("Violet", "#EE82EE"),
    "wheat" => NamedColor::new("Wheat", "#F5DEB3"),
    "white" => NamedColor::new("White", "#FFFFFF"),
    "whitesmoke" => NamedColor::new("WhiteSmoke", "#F5F5F5"),
    "yellow" => NamedColor::new("Yellow", "#FFFF00"),
    "yellowgreen" => NamedColor::new("YellowGreen", "#9ACD32"),
};

/// Return the named color with the given name.
///
/// Surrounding whitespace is ignored and matching is case-insensitive in the
/// ASCII range.
pub fn lookup(name: &str) -> Option<&'static NamedColor> {
    let mut buffer = [0; MAX_NAME_LENGTH];
    let lowercase = to_ascii_lowercase(&mut buffer, name.trim())?;
    NAMED_COLORS.get(lowercase)
}

/// Every named color, in no particular order.
pub fn named_colors() -> impl Iterator<Item = &'static NamedColor> {
    NAMED_COLORS.values()
}

/// Return `input`, lower-cased, unless larger than `buffer`
/// which is used temporary space for lower-casing a copy of `input` if necessary.
fn to_ascii_lowercase<'a>(buffer: &'a mut [u8], input: &'a str) -> Option<&'a str> {
    let buffer = buffer.get_mut(..input.len())?;
    match input.bytes().position(|byte| byte.is_ascii_uppercase()) {
        Some(first_uppercase) => {
            buffer.copy_from_slice(input.as_bytes());
            buffer[first_uppercase..].make_ascii_lowercase();
            std::str::from_utf8(buffer).ok()
        }
        // Input is already lower-case
        None => Some(input),
    }
}
