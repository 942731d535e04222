//! Per-feature style records.
//!
//! GeoJSON has no styling of its own, so the viewer reads a small set of
//! non-standard keys from each feature's `properties` object:
//!
//! - `color`: fill for points and polygons (CSS/SVG color name or hex code).
//! - `radius`: point radius in canvas units.
//! - `stroke` / `stroke-width`: line string color and width overrides.
//!   Polygon outlines keep their fixed style.
//!
//! Every key is optional. A key that is missing, has the wrong JSON type or
//! does not parse is treated as absent, so loading never fails because of
//! styling.

use std::str::FromStr;

use palette::{Srgb, Srgba, WithAlpha};
use serde_json::{Map, Value};

/// An 8-bit sRGB color with straight alpha.
pub type Color = Srgba<u8>;

/// Builds an opaque [`Color`].
pub fn rgb(red: u8, green: u8, blue: u8) -> Color {
    Srgba::new(red, green, blue, 255)
}

/// Parses a color string the way common desktop toolkits do.
///
/// Accepted forms (case-insensitive, surrounding whitespace ignored):
/// - a CSS/SVG color name such as `red` or `cornflowerblue`;
/// - `transparent`;
/// - `#rgb`, `#rrggbb`, `#aarrggbb`, `#rrrgggbbb` and `#rrrrggggbbbb`.
///
/// ### Returns
/// `Some(color)` on success, `None` for anything else.
pub fn parse_color(input: &str) -> Option<Color> {
    let s = input.trim();
    if s.eq_ignore_ascii_case("transparent") {
        return Some(Srgba::new(0, 0, 0, 0));
    }
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex);
    }
    palette::named::from_str(&s.to_ascii_lowercase()).map(|c| c.with_alpha(255))
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 | 6 => Srgb::<u8>::from_str(hex).ok().map(|c| c.with_alpha(255)),
        8 => {
            let alpha = u8::from_str_radix(&hex[..2], 16).ok()?;
            let color = Srgb::<u8>::from_str(&hex[2..]).ok()?;
            Some(color.with_alpha(alpha))
        }
        9 | 12 => {
            // Wide channels keep their most significant byte.
            let digits = hex.len() / 3;
            let shift = 4 * (digits as u32 - 2);
            let channel = |i: usize| -> Option<u8> {
                let v = u16::from_str_radix(&hex[i * digits..(i + 1) * digits], 16).ok()?;
                Some((v >> shift) as u8)
            };
            Some(rgb(channel(0)?, channel(1)?, channel(2)?))
        }
        _ => None,
    }
}

/// Typed style fields read from a feature's `properties`.
///
/// `None` means "not given"; the renderer substitutes the defaults from
/// [`crate::config::RenderConfig`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Style {
    pub radius: Option<f64>,
    pub color: Option<Color>,
    pub stroke_color: Option<Color>,
    pub stroke_width: Option<f64>,
}

impl Style {
    /// Reads a style record from a `properties` value.
    ///
    /// Accepts `None`, JSON `null`, or any non-object value and returns the
    /// empty style for them. Unparseable colors are logged and ignored;
    /// negative or non-finite sizes are ignored.
    pub fn from_properties(properties: Option<&Value>) -> Self {
        match properties {
            Some(Value::Object(map)) => Self::from_map(map),
            _ => Self::default(),
        }
    }

    fn from_map(map: &Map<String, Value>) -> Self {
        Self {
            radius: read_size(map, "radius"),
            color: read_color(map, "color"),
            stroke_color: read_color(map, "stroke"),
            stroke_width: read_size(map, "stroke-width"),
        }
    }
}

fn read_size(map: &Map<String, Value>, key: &str) -> Option<f64> {
    map.get(key)
        .and_then(Value::as_f64)
        .filter(|v| v.is_finite() && *v >= 0.0)
}

fn read_color(map: &Map<String, Value>, key: &str) -> Option<Color> {
    let raw = map.get(key)?.as_str()?;
    let color = parse_color(raw);
    if color.is_none() {
        log::warn!("ignoring unrecognized {key} value {raw:?}");
    }
    color
}
