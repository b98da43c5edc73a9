//! The central `Token` record plus composite value rendering
//! (`DisplayValue`).

use crate::color;
use crate::reference::reference_for_path;
use crate::value::Value;
use crate::version::Version;
use serde::{Deserialize, Serialize};

/// The fixed DTCG type vocabulary, plus `Unknown` for anything else
/// (including a type string the compiler doesn't recognize; it's kept
/// verbatim in `Token::token_type` regardless, this enum only classifies
/// composite rendering dispatch).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Color,
    Dimension,
    FontFamily,
    FontWeight,
    Duration,
    CubicBezier,
    Number,
    String,
    StrokeStyle,
    Border,
    Transition,
    Shadow,
    Gradient,
    Typography,
    Unknown,
}

impl TypeKind {
    pub fn from_str(s: &str) -> TypeKind {
        match s {
            "color" => TypeKind::Color,
            "dimension" => TypeKind::Dimension,
            "fontFamily" => TypeKind::FontFamily,
            "fontWeight" => TypeKind::FontWeight,
            "duration" => TypeKind::Duration,
            "cubicBezier" => TypeKind::CubicBezier,
            "number" => TypeKind::Number,
            "string" => TypeKind::String,
            "strokeStyle" => TypeKind::StrokeStyle,
            "border" => TypeKind::Border,
            "transition" => TypeKind::Transition,
            "shadow" => TypeKind::Shadow,
            "gradient" => TypeKind::Gradient,
            "typography" => TypeKind::Typography,
            _ => TypeKind::Unknown,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub name: String,
    pub path: Vec<String>,
    pub reference: String,
    pub value: Option<String>,
    pub raw_value: Option<Value>,
    pub resolved_value: Option<Value>,
    pub resolution_chain: Vec<String>,
    #[serde(rename = "type")]
    pub token_type: String,
    pub description: Option<String>,
    pub extensions: Option<Value>,
    pub deprecated: bool,
    pub deprecation_message: Option<String>,
    pub prefix: Option<String>,
    pub schema_version: Version,
    pub file_path: Option<String>,
    pub line: usize,
    pub column: usize,
    pub is_resolved: bool,
}

impl Token {
    /// Build a token for `path`, deriving `name` and `reference` per
    /// invariants 3 and 4. `path` must already have any root-token marker
    /// elided by the caller (the parser).
    pub fn new(path: Vec<String>) -> Self {
        let name = path.join("-");
        let reference = reference_for_path(&path);
        Token {
            name,
            path,
            reference,
            value: None,
            raw_value: None,
            resolved_value: None,
            resolution_chain: Vec::new(),
            token_type: String::new(),
            description: None,
            extensions: None,
            deprecated: false,
            deprecation_message: None,
            prefix: None,
            schema_version: Version::Unknown,
            file_path: None,
            line: 0,
            column: 0,
            is_resolved: false,
        }
    }

    pub fn type_kind(&self) -> TypeKind {
        TypeKind::from_str(&self.token_type)
    }

    /// `ResolvedValue(t)`: `resolved_value ?? raw_value ?? value`, the
    /// common utility every formatter shares.
    pub fn resolved_value_or_raw(&self) -> Option<Value> {
        self.resolved_value
            .clone()
            .or_else(|| self.raw_value.clone())
            .or_else(|| self.value.clone().map(Value::Scalar))
    }

    /// The composite `DisplayValue` rendering table: renders whatever
    /// shape `resolved_value_or_raw` holds into the single CSS-ish
    /// string formatters consume for dimension/duration/cubicBezier/
    /// fontFamily/shadow/border/transition/strokeStyle/typography/gradient/
    /// structured-color tokens. Scalar values of unrecognized types are
    /// passed through verbatim.
    pub fn display_value(&self) -> String {
        let Some(v) = self.resolved_value_or_raw() else {
            return String::new();
        };
        render_display_value(self.type_kind(), &v)
    }
}

fn render_display_value(kind: TypeKind, v: &Value) -> String {
    match kind {
        TypeKind::Color => match v {
            Value::Scalar(s) => s.clone(),
            Value::Map(map) => color::structured_display_value(map),
            other => other.to_string(),
        },
        TypeKind::Dimension | TypeKind::Duration => render_dimension_like(v),
        TypeKind::CubicBezier => render_cubic_bezier(v),
        TypeKind::FontFamily => render_font_family(v),
        TypeKind::Shadow => render_shadow(v),
        TypeKind::Border => render_border(v),
        TypeKind::Transition => render_transition(v),
        TypeKind::StrokeStyle => render_stroke_style(v),
        TypeKind::Typography => render_typography(v),
        TypeKind::Gradient => render_gradient(v),
        _ => v.scalar_or_display(),
    }
}

fn render_dimension_like(v: &Value) -> String {
    match v {
        Value::Scalar(s) => s.clone(),
        Value::Map(map) => {
            let value = map
                .get("value")
                .map(|v| v.scalar_or_display())
                .unwrap_or_default();
            let unit = map
                .get("unit")
                .map(|v| v.scalar_or_display())
                .unwrap_or_default();
            if value == "0" && unit.is_empty() {
                "0".to_string()
            } else {
                format!("{value}{unit}")
            }
        }
        other => other.to_string(),
    }
}

fn render_cubic_bezier(v: &Value) -> String {
    match v {
        Value::Seq(items) if items.len() == 4 => {
            let parts: Vec<String> = items.iter().map(|i| i.scalar_or_display()).collect();
            format!("cubic-bezier({})", parts.join(", "))
        }
        Value::Scalar(s) => s.clone(),
        other => other.to_string(),
    }
}

fn render_font_family(v: &Value) -> String {
    match v {
        Value::Scalar(s) => s.clone(),
        Value::Seq(items) => {
            let parts: Vec<String> = items
                .iter()
                .map(|i| {
                    let s = i.scalar_or_display();
                    if s.contains(' ') {
                        format!("\"{s}\"")
                    } else {
                        s
                    }
                })
                .collect();
            parts.join(", ")
        }
        other => other.to_string(),
    }
}

fn render_shadow_layer(v: &Value) -> String {
    let Value::Map(map) = v else {
        return v.scalar_or_display();
    };
    let offset_x = map.get("offsetX").map(render_dimension_like).unwrap_or_default();
    let offset_y = map.get("offsetY").map(render_dimension_like).unwrap_or_default();
    let blur = map.get("blur").map(render_dimension_like).unwrap_or_default();
    let spread = map.get("spread").map(render_dimension_like);
    let color_str = map
        .get("color")
        .map(|c| render_display_value(TypeKind::Color, c))
        .unwrap_or_default();
    match spread {
        Some(s) if !s.is_empty() => format!("{offset_x} {offset_y} {blur} {s} {color_str}"),
        _ => format!("{offset_x} {offset_y} {blur} {color_str}"),
    }
}

fn render_shadow(v: &Value) -> String {
    match v {
        Value::Seq(layers) => {
            let parts: Vec<String> = layers.iter().map(render_shadow_layer).collect();
            parts.join(", ")
        }
        single @ Value::Map(_) => render_shadow_layer(single),
        other => other.to_string(),
    }
}

fn render_border(v: &Value) -> String {
    let Value::Map(map) = v else {
        return v.scalar_or_display();
    };
    let width = map.get("width").map(render_dimension_like).unwrap_or_default();
    let style = map.get("style").map(|s| s.scalar_or_display()).unwrap_or_default();
    let color_str = map
        .get("color")
        .map(|c| render_display_value(TypeKind::Color, c))
        .unwrap_or_default();
    format!("{width} {style} {color_str}")
}

fn render_transition(v: &Value) -> String {
    let Value::Map(map) = v else {
        return v.scalar_or_display();
    };
    let duration = map.get("duration").map(render_dimension_like).unwrap_or_default();
    let delay = map.get("delay").map(render_dimension_like);
    let timing = map
        .get("timingFunction")
        .map(render_cubic_bezier)
        .unwrap_or_default();
    match delay {
        Some(d) if !d.is_empty() => format!("{duration} {d} {timing}"),
        _ => format!("{duration} {timing}"),
    }
}

fn render_stroke_style(v: &Value) -> String {
    let Value::Map(map) = v else {
        return v.scalar_or_display();
    };
    let dash_array = map
        .get("dashArray")
        .map(|v| v.to_string())
        .unwrap_or_default();
    let line_cap = map
        .get("lineCap")
        .map(|v| v.scalar_or_display())
        .unwrap_or_default();
    format!("dash:{dash_array} cap:{line_cap}")
}

fn render_typography(v: &Value) -> String {
    let Value::Map(map) = v else {
        return v.scalar_or_display();
    };
    let font_weight = map.get("fontWeight").map(|v| v.scalar_or_display());
    let font_size = map.get("fontSize").map(render_dimension_like);
    let line_height = map.get("lineHeight").map(render_dimension_like);
    let font_family = map
        .get("fontFamily")
        .map(render_font_family)
        .unwrap_or_default();

    let mut head = String::new();
    if let Some(w) = &font_weight {
        head.push_str(w);
        head.push(' ');
    }
    if let Some(size) = &font_size {
        head.push_str(size);
        if let Some(lh) = &line_height {
            head.push_str(&format!(" / {lh}"));
        }
        head.push(' ');
    }
    format!("{head}{font_family}")
}

/// Gradient rendering has no authoritative stop contract in the source
/// material, so this stays an explicit placeholder.
fn render_gradient(v: &Value) -> String {
    let Value::Map(map) = v else {
        return v.scalar_or_display();
    };
    let gradient_type = map
        .get("type")
        .map(|v| v.scalar_or_display())
        .unwrap_or_else(|| "linear".to_string());
    format!("{gradient_type}-gradient(...)")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn new_token_derives_name_and_reference() {
        let t = Token::new(vec!["color".to_string(), "brand".to_string()]);
        assert_eq!(t.name, "color-brand");
        assert_eq!(t.reference, "{color.brand}");
    }

    #[test]
    fn dimension_display_value() {
        let mut map = BTreeMap::new();
        map.insert("value".to_string(), Value::Scalar("4".to_string()));
        map.insert("unit".to_string(), Value::Scalar("px".to_string()));
        assert_eq!(render_display_value(TypeKind::Dimension, &Value::Map(map)), "4px");
        assert_eq!(
            render_display_value(TypeKind::Dimension, &Value::Scalar("4px".to_string())),
            "4px"
        );
    }

    #[test]
    fn cubic_bezier_display_value() {
        let seq = Value::Seq(vec![
            Value::Scalar("0.4".to_string()),
            Value::Scalar("0".to_string()),
            Value::Scalar("0.2".to_string()),
            Value::Scalar("1".to_string()),
        ]);
        assert_eq!(
            render_display_value(TypeKind::CubicBezier, &seq),
            "cubic-bezier(0.4, 0, 0.2, 1)"
        );
    }

    #[test]
    fn font_family_quotes_spaced_names() {
        let seq = Value::Seq(vec![
            Value::Scalar("Helvetica Neue".to_string()),
            Value::Scalar("sans-serif".to_string()),
        ]);
        assert_eq!(
            render_display_value(TypeKind::FontFamily, &seq),
            "\"Helvetica Neue\", sans-serif"
        );
    }

    #[test]
    fn gradient_is_a_placeholder() {
        let mut map = BTreeMap::new();
        map.insert("type".to_string(), Value::Scalar("linear".to_string()));
        assert_eq!(
            render_display_value(TypeKind::Gradient, &Value::Map(map)),
            "linear-gradient(...)"
        );
    }
}
