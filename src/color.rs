//! Structured color parsing and rendering shared by the serializer's
//! Draft↔v2025.10 conversion and the composite value renderer.
//!
//! Fourteen color spaces are recognized: sRGB, sRGB-linear, display-p3,
//! a98-rgb, prophoto-rgb, rec2020, xyz-d50, xyz-d65, lab, lch, oklab,
//! oklch, hsl, hwb. Each component may be a number or the literal
//! `"none"`.

use crate::value::Value;
use std::collections::BTreeMap;

pub const SRGB: &str = "srgb";
pub const SRGB_LINEAR: &str = "srgb-linear";
pub const DISPLAY_P3: &str = "display-p3";
pub const A98_RGB: &str = "a98-rgb";
pub const PROPHOTO_RGB: &str = "prophoto-rgb";
pub const REC2020: &str = "rec2020";
pub const XYZ_D50: &str = "xyz-d50";
pub const XYZ_D65: &str = "xyz-d65";
pub const LAB: &str = "lab";
pub const LCH: &str = "lch";
pub const OKLAB: &str = "oklab";
pub const OKLCH: &str = "oklch";
pub const HSL: &str = "hsl";
pub const HWB: &str = "hwb";

const NATIVE_FUNCTION_SPACES: &[&str] = &[HSL, HWB, LAB, LCH, OKLAB, OKLCH];

/// Parse a CSS color string (hex, named, `rgb()`, `hsl()`, `color()`,
/// `oklch()`, ...) into the structured `{colorSpace, components, alpha,
/// hex}` map used by v2025.10. Returns `None` on a parse failure, in which
/// case the caller should pass the original string through unchanged.
pub fn parse_to_structured(input: &str) -> Option<Value> {
    let color = csscolorparser::parse(input).ok()?;
    let [r, g, b, a] = color.to_array();
    let mut map = BTreeMap::new();
    map.insert("colorSpace".to_string(), Value::Scalar(SRGB.to_string()));
    map.insert(
        "components".to_string(),
        Value::Seq(vec![
            Value::Scalar(format_unit(r)),
            Value::Scalar(format_unit(g)),
            Value::Scalar(format_unit(b)),
        ]),
    );
    map.insert("alpha".to_string(), Value::Scalar(format_unit(a)));
    let hex = if input.trim().starts_with('#') {
        input.trim().to_string()
    } else {
        color.to_hex_string()
    };
    map.insert("hex".to_string(), Value::Scalar(hex));
    Some(Value::Map(map))
}

/// Format a 0..1 component, rounding to 4 decimal places with a +0.5 bias
/// and keeping at least one decimal digit so JSON round-trips as a float
/// (`1.0`, not `1`).
fn format_unit(x: f64) -> String {
    let rounded = (x * 10000.0 + 0.5).floor() / 10000.0;
    let s = format!("{rounded}");
    if s.contains('.') {
        s
    } else {
        format!("{s}.0")
    }
}

fn components(map: &BTreeMap<String, Value>) -> Vec<String> {
    map.get("components")
        .and_then(|v| v.as_seq())
        .map(|seq| seq.iter().map(|v| v.scalar_or_display()).collect())
        .unwrap_or_default()
}

fn alpha(map: &BTreeMap<String, Value>) -> f64 {
    map.get("alpha")
        .and_then(|v| v.as_scalar())
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(1.0)
}

fn hex_to_rgb255(hex: &str) -> Option<(u8, u8, u8)> {
    let h = hex.trim_start_matches('#');
    if h.len() < 6 {
        return None;
    }
    let r = u8::from_str_radix(&h[0..2], 16).ok()?;
    let g = u8::from_str_radix(&h[2..4], 16).ok()?;
    let b = u8::from_str_radix(&h[4..6], 16).ok()?;
    Some((r, g, b))
}

/// The v2025.10 → Draft conversion rule: hex if present, else
/// `color(<space> c1 c2 c3 [/ α])`, else the empty string.
pub fn structured_to_draft_string(map: &BTreeMap<String, Value>) -> String {
    if let Some(hex) = map.get("hex").and_then(|v| v.as_scalar()) {
        if !hex.is_empty() {
            return hex.to_string();
        }
    }
    let space = map
        .get("colorSpace")
        .and_then(|v| v.as_scalar())
        .unwrap_or(SRGB);
    let comps = components(map);
    if comps.is_empty() {
        return String::new();
    }
    let a = alpha(map);
    if a < 0.999 {
        format!("color({space} {} / {a})", comps.join(" "))
    } else {
        format!("color({space} {})", comps.join(" "))
    }
}

/// The component-J `DisplayValue` rendering rule for structured colors:
/// hex if present; sRGB with three unit components becomes `#RRGGBB`
/// (optionally `#RRGGBBAA`); hsl/hwb/lab/lch/oklab/oklch use their native
/// CSS function; anything else falls back to `color(<space> ...)`.
pub fn structured_display_value(map: &BTreeMap<String, Value>) -> String {
    if let Some(hex) = map.get("hex").and_then(|v| v.as_scalar()) {
        if !hex.is_empty() {
            return hex.to_string();
        }
    }
    let space = map
        .get("colorSpace")
        .and_then(|v| v.as_scalar())
        .unwrap_or(SRGB);
    let comps = components(map);
    let a = alpha(map);
    let include_alpha = a < 0.999;

    if space == SRGB && comps.len() == 3 {
        if let (Ok(r), Ok(g), Ok(b)) = (
            comps[0].parse::<f64>(),
            comps[1].parse::<f64>(),
            comps[2].parse::<f64>(),
        ) {
            let to255 = |c: f64| ((c * 255.0) + 0.5).floor().clamp(0.0, 255.0) as u8;
            let (r8, g8, b8) = (to255(r), to255(g), to255(b));
            return if include_alpha {
                let a8 = to255(a);
                format!("#{r8:02X}{g8:02X}{b8:02X}{a8:02X}")
            } else {
                format!("#{r8:02X}{g8:02X}{b8:02X}")
            };
        }
    }

    if NATIVE_FUNCTION_SPACES.contains(&space) && comps.len() == 3 {
        let sep = if include_alpha { format!(" / {a}") } else { String::new() };
        return format!("{space}({} {} {}{sep})", comps[0], comps[1], comps[2]);
    }

    if comps.is_empty() {
        return String::new();
    }
    let sep = if include_alpha { format!(" / {a}") } else { String::new() };
    format!("color({space} {}{sep})", comps.join(" "))
}

/// Decode a hex color string (`#rgb`, `#rrggbb`) into 0..255 channels, used
/// by tests and by any formatter needing raw channel bytes (e.g. Swift's
/// `Color(.sRGB, red:, green:, blue:, opacity:)`).
pub fn hex_channels(hex: &str) -> Option<(u8, u8, u8)> {
    hex_to_rgb255(hex)
}
