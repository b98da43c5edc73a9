//! Android XML resources formatter: element chosen by type
//! (`color`, `dimen`, `integer`, `string` fallback), snake_cased names,
//! XML-escaped values, 4-space indent.

use crate::format::case::to_snake_case;
use crate::format::common::{format_header, sort_tokens, CommentStyle};
use crate::options::FormatOptions;
use crate::token::{Token, TypeKind};

pub fn format(tokens: &[Token], opts: &FormatOptions) -> String {
    let sorted = sort_tokens(tokens);
    let mut out = String::from("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    out.push_str(&format_header(opts.header.as_deref(), CommentStyle::Xml));
    out.push_str("<resources>\n");
    for t in &sorted {
        let element = element_name(t.type_kind());
        let name = to_snake_case(&t.name);
        let value = escape_xml(&t.display_value());
        out.push_str(&format!(
            "    <{element} name=\"{name}\">{value}</{element}>\n"
        ));
    }
    out.push_str("</resources>\n");
    out
}

fn element_name(kind: TypeKind) -> &'static str {
    match kind {
        TypeKind::Color => "color",
        TypeKind::Dimension => "dimen",
        TypeKind::Number => "integer",
        _ => "string",
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ParseOptions;
    use crate::parser;

    #[test]
    fn chooses_element_by_type() {
        let src = br#"{"color":{"primary":{"$value":"#FF6B35","$type":"color"}},"spacing":{"small":{"$value":"4px","$type":"dimension"}},"label":{"$value":"Hi & bye","$type":"string"}}"#;
        let tokens = parser::parse(src, &ParseOptions::default(), None).unwrap();
        let out = format(&tokens, &FormatOptions::default());
        assert!(out.contains("<color name=\"color_primary\">#FF6B35</color>"));
        assert!(out.contains("<dimen name=\"spacing_small\">4px</dimen>"));
        assert!(out.contains("<string name=\"label\">Hi &amp; bye</string>"));
        assert!(out.starts_with("<?xml"));
    }
}
