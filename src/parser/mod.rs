//! Document parser: turns a byte buffer into an ordered sequence of
//! [`Token`]s, honoring group structure, `$type` inheritance, root-token
//! conventions, and position tracking.
//!
//! A recursive descent over a parsed document builds typed records while
//! tracking enclosing context, generalized from "walk JSON Schema
//! properties" to "walk DTCG groups/tokens". Both dialects are transcoded
//! to one `serde_json::Value` document (`json` / `yaml` submodules) so the
//! recognition walk below is dialect-agnostic.

pub mod json;
pub mod yaml;

use crate::detector;
use crate::error::Result;
use crate::options::ParseOptions;
use crate::token::Token;
use crate::value::Value;
use crate::version::Version;
use serde_json::Value as Json;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dialect {
    Json,
    Yaml,
}

/// Sniff dialect from the first non-whitespace, non-BOM byte: `{` ⇒ JSON,
/// anything else ⇒ YAML.
fn sniff_dialect(bytes: &[u8]) -> Dialect {
    let bytes = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]).unwrap_or(bytes);
    for &b in bytes {
        if b == b'{' {
            return Dialect::Json;
        }
        if !b.is_ascii_whitespace() {
            return Dialect::Yaml;
        }
    }
    Dialect::Yaml
}

/// Dialect-sniff and transcode `bytes` into a single `serde_json::Value`
/// document, shared by [`parse`] and by the group-extension resolver,
/// which needs the raw document to recover `$extends` after parsing has
/// discarded it.
pub fn parse_to_document(bytes: &[u8], file_path: Option<&str>) -> Result<Json> {
    match sniff_dialect(bytes) {
        Dialect::Json => json::parse_bytes(bytes, file_path),
        Dialect::Yaml => yaml::parse_bytes(bytes, file_path),
    }
}

/// Parse `bytes` into an ordered token list: `Parse(bytes, Options) ->
/// Tokens`.
pub fn parse(bytes: &[u8], opts: &ParseOptions, file_path: Option<&str>) -> Result<Vec<Token>> {
    let dialect = sniff_dialect(bytes);
    let doc = parse_to_document(bytes, file_path)?;

    let version = opts
        .schema_version
        .unwrap_or_else(|| detector::detect(&doc, None));

    let mut tracker = PositionTracker::new(bytes, dialect, opts.skip_positions);
    let mut tokens = Vec::new();

    if let Json::Object(root) = &doc {
        walk(
            root,
            &[],
            None,
            version,
            &opts.group_markers,
            opts.prefix.as_deref(),
            file_path,
            &mut tracker,
            &mut tokens,
        );
    }

    if !opts.skip_sort {
        tokens.sort_by(|a, b| a.name.cmp(&b.name));
    }

    Ok(tokens)
}

#[allow(clippy::too_many_arguments)]
fn walk(
    obj: &serde_json::Map<String, Json>,
    path: &[String],
    inherited_type: Option<&str>,
    version: Version,
    markers: &[String],
    prefix: Option<&str>,
    file_path: Option<&str>,
    tracker: &mut PositionTracker,
    tokens: &mut Vec<Token>,
) {
    for (key, val) in obj.iter() {
        let Json::Object(val_obj) = val else { continue };

        // $root (v2025.10) names a token sharing the enclosing group's path.
        if key == "$root" && version == Version::V2025_10 {
            if val_obj.contains_key("$value") || val_obj.contains_key("$ref") {
                let (line, col) = tracker.locate(key);
                push_token(
                    val_obj, path, inherited_type, version, prefix, file_path, line, col, tokens,
                );
            }
            continue;
        }

        if key.starts_with('$') {
            continue;
        }

        let is_marker = version != Version::V2025_10 && markers.iter().any(|m| m == key);
        let is_token = val_obj.contains_key("$value")
            || (version == Version::V2025_10 && val_obj.contains_key("$ref"));

        if is_marker {
            let (line, col) = tracker.locate(key);
            if is_token {
                push_token(
                    val_obj, path, inherited_type, version, prefix, file_path, line, col, tokens,
                );
            } else {
                // Transparent group: recurse without appending the marker.
                let child_type = val_obj
                    .get("$type")
                    .and_then(|v| v.as_str())
                    .or(inherited_type);
                walk(
                    val_obj, path, child_type, version, markers, prefix, file_path, tracker,
                    tokens,
                );
            }
            continue;
        }

        let mut segment_path = path.to_vec();
        segment_path.push(key.clone());
        let (line, col) = tracker.locate(key);

        if is_token {
            push_token(
                val_obj,
                &segment_path,
                inherited_type,
                version,
                prefix,
                file_path,
                line,
                col,
                tokens,
            );
        } else {
            let child_type = val_obj
                .get("$type")
                .and_then(|v| v.as_str())
                .or(inherited_type);
            walk(
                val_obj,
                &segment_path,
                child_type,
                version,
                markers,
                prefix,
                file_path,
                tracker,
                tokens,
            );
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn push_token(
    val_obj: &serde_json::Map<String, Json>,
    path: &[String],
    inherited_type: Option<&str>,
    version: Version,
    prefix: Option<&str>,
    file_path: Option<&str>,
    line: usize,
    column: usize,
    tokens: &mut Vec<Token>,
) {
    let mut token = Token::new(path.to_vec());

    if let Some(v) = val_obj.get("$value") {
        match v {
            Json::String(s) => token.value = Some(s.clone()),
            other => token.raw_value = Some(Value::from_json(other)),
        }
    } else if let Some(Json::String(r)) = val_obj.get("$ref") {
        // v2025.10 alias token: the pointer string is carried in `value`
        // exactly like a curly reference would be, so the resolver can
        // treat both uniformly.
        token.value = Some(r.clone());
    }

    token.token_type = val_obj
        .get("$type")
        .and_then(|v| v.as_str())
        .or(inherited_type)
        .unwrap_or_default()
        .to_string();

    token.description = val_obj
        .get("$description")
        .and_then(|v| v.as_str())
        .map(|s| s.to_string());

    token.extensions = val_obj.get("$extensions").map(Value::from_json);

    match val_obj.get("$deprecated") {
        Some(Json::Bool(b)) => token.deprecated = *b,
        Some(Json::String(reason)) => {
            token.deprecated = true;
            token.deprecation_message = Some(reason.clone());
        }
        _ => {}
    }
    if let Some(msg) = val_obj.get("$deprecationMessage").and_then(|v| v.as_str()) {
        token.deprecation_message = Some(msg.to_string());
    }

    token.prefix = prefix.map(|s| s.to_string());
    token.schema_version = version;
    token.file_path = file_path.map(|s| s.to_string());
    token.line = line;
    token.column = column;

    tokens.push(token);
}

/// Opt-in best-effort source position locator. Walks the original source
/// text forward only, matching each key's defining occurrence in document
/// order, which is exactly the order the recognition walk above visits
/// keys in, since both JSON and YAML preserve mapping order and a key's
/// text always precedes its nested block. Returns `(0, 0)` when disabled.
struct PositionTracker<'a> {
    source: &'a str,
    dialect: Dialect,
    cursor: usize,
    line_starts: Vec<usize>,
    enabled: bool,
}

impl<'a> PositionTracker<'a> {
    fn new(bytes: &'a [u8], dialect: Dialect, skip_positions: bool) -> Self {
        let source = std::str::from_utf8(bytes).unwrap_or("");
        let mut line_starts = vec![0];
        for (i, b) in source.bytes().enumerate() {
            if b == b'\n' {
                line_starts.push(i + 1);
            }
        }
        PositionTracker {
            source,
            dialect,
            cursor: 0,
            line_starts,
            enabled: !skip_positions,
        }
    }

    fn locate(&mut self, key: &str) -> (usize, usize) {
        if !self.enabled {
            return (0, 0);
        }
        let pattern = match self.dialect {
            Dialect::Json => format!("\"{key}\""),
            Dialect::Yaml => key.to_string(),
        };
        let Some(rel) = self.source[self.cursor..].find(&pattern) else {
            return (0, 0);
        };
        let offset = self.cursor + rel;
        self.cursor = offset + pattern.len();
        self.offset_to_line_col(offset)
    }

    fn offset_to_line_col(&self, offset: usize) -> (usize, usize) {
        match self.line_starts.binary_search(&offset) {
            Ok(line) => (line, 0),
            Err(line) => {
                let line = line - 1;
                (line, offset - self.line_starts[line])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ParseOptions;

    fn opts() -> ParseOptions {
        ParseOptions::default()
    }

    #[test]
    fn flat_draft_color_tokens() {
        let src = br#"{"color":{"primary":{"$value":"#FF6B35","$type":"color","$description":"Primary brand color"},"secondary":{"$value":"{color.primary}","$type":"color"}}}"#;
        let tokens = parse(src, &opts(), None).unwrap();
        assert_eq!(tokens.len(), 2);
        let primary = tokens.iter().find(|t| t.name == "color-primary").unwrap();
        assert_eq!(primary.value.as_deref(), Some("#FF6B35"));
        assert_eq!(primary.token_type, "color");
        assert_eq!(primary.description.as_deref(), Some("Primary brand color"));
        assert_eq!(primary.path, vec!["color", "primary"]);
        assert_eq!(primary.reference, "{color.primary}");
    }

    #[test]
    fn type_inheritance_from_group() {
        let src = br#"{"color":{"$type":"color","primary":{"$value":"#fff"}}}"#;
        let tokens = parse(src, &opts(), None).unwrap();
        assert_eq!(tokens[0].token_type, "color");
    }

    #[test]
    fn draft_group_marker_root_token() {
        let src = br#"{"color":{"brand":{"_":{"$value":"#000","$type":"color"},"light":{"$value":"#fff","$type":"color"}}}}"#;
        let mut o = opts();
        o.group_markers = vec!["_".to_string()];
        let tokens = parse(src, &o, None).unwrap();
        let root = tokens.iter().find(|t| t.name == "color-brand").unwrap();
        assert_eq!(root.path, vec!["color", "brand"]);
        let light = tokens.iter().find(|t| t.name == "color-brand-light").unwrap();
        assert_eq!(light.path, vec!["color", "brand", "light"]);
    }

    #[test]
    fn v2025_10_root_token() {
        let src = br#"{"$schema":"https://www.designtokens.org/schemas/2025.10.json","color":{"brand":{"$root":{"$value":"#000"},"light":{"$value":"#fff"}}}}"#;
        let tokens = parse(src, &opts(), None).unwrap();
        let root = tokens.iter().find(|t| t.name == "color-brand").unwrap();
        assert_eq!(root.path, vec!["color", "brand"]);
    }

    #[test]
    fn v2025_10_ref_token_recognized() {
        let src = br#"{"$schema":"https://www.designtokens.org/schemas/2025.10.json","color":{"primary":{"$value":"#fff"},"secondary":{"$ref":"#/color/primary"}}}"#;
        let tokens = parse(src, &opts(), None).unwrap();
        let secondary = tokens.iter().find(|t| t.name == "color-secondary").unwrap();
        assert_eq!(secondary.value.as_deref(), Some("#/color/primary"));
    }

    #[test]
    fn draft_ref_is_not_a_token() {
        let src = br#"{"color":{"weird":{"$ref":"#/color/primary"}}}"#;
        let tokens = parse(src, &opts(), None).unwrap();
        assert!(tokens.is_empty());
    }

    #[test]
    fn empty_group_is_silently_dropped() {
        let src = br#"{"color":{"empty":{"$description":"nothing here"}}}"#;
        let tokens = parse(src, &opts(), None).unwrap();
        assert!(tokens.is_empty());
    }

    #[test]
    fn structured_value_populates_raw_value_not_value() {
        let src = br#"{"shadow":{"drop":{"$value":{"offsetX":"1px","offsetY":"1px","blur":"2px","color":"#000"},"$type":"shadow"}}}"#;
        let tokens = parse(src, &opts(), None).unwrap();
        let t = &tokens[0];
        assert!(t.value.is_none());
        assert!(t.raw_value.is_some());
    }

    #[test]
    fn document_order_preserved_when_skip_sort() {
        let src = br#"{"b":{"$value":"1"},"a":{"$value":"2"}}"#;
        let mut o = opts();
        o.skip_sort = true;
        let tokens = parse(src, &o, None).unwrap();
        assert_eq!(tokens[0].name, "b");
        assert_eq!(tokens[1].name, "a");
    }

    #[test]
    fn default_sorts_by_name() {
        let src = br#"{"b":{"$value":"1"},"a":{"$value":"2"}}"#;
        let tokens = parse(src, &opts(), None).unwrap();
        assert_eq!(tokens[0].name, "a");
        assert_eq!(tokens[1].name, "b");
    }

    #[test]
    fn yaml_dialect_parses() {
        let src = b"color:\n  primary:\n    $value: \"#fff\"\n    $type: color\n";
        let tokens = parse(src, &opts(), None).unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].name, "color-primary");
    }

    #[test]
    fn positions_tracked_when_enabled() {
        let src = b"{\n  \"color\": {\n    \"primary\": {\"$value\": \"#fff\"}\n  }\n}";
        let mut o = opts();
        o.skip_positions = false;
        let tokens = parse(src, &o, None).unwrap();
        assert_eq!(tokens[0].line, 2);
    }

    #[test]
    fn positions_zero_by_default() {
        let src = b"{\n  \"color\": {\n    \"primary\": {\"$value\": \"#fff\"}\n  }\n}";
        let tokens = parse(src, &opts(), None).unwrap();
        assert_eq!(tokens[0].line, 0);
        assert_eq!(tokens[0].column, 0);
    }
}
