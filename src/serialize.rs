//! DTCG serializer & schema interconversion.
//!
//! Converts a token list back into a DTCG document, in either nested or
//! flat shape, performing the Draft↔v2025.10 value-conversion matrix along
//! the way: a structured output map is assembled from typed records, with
//! color parsing backed by `csscolorparser`.

use crate::color;
use crate::error::{Result, TokenError};
use crate::options::FormatOptions;
use crate::reference::{
    is_pointer_ref, is_whole_curly_ref, path_to_dotted, path_to_pointer, pointer_to_path,
};
use crate::token::{Token, TypeKind};
use crate::value::Value;
use crate::version::Version;
use serde_json::{Map, Value as Json};

const SCHEMA_KEY: &str = "$schema";

/// Build the DTCG JSON document for `tokens` per `opts` (nested/flat,
/// target dialect). This is the shared core both the `dtcg` formatter and
/// any future in-place rewriter call into.
pub fn build_document(tokens: &[Token], opts: &FormatOptions) -> Result<Json> {
    if opts.output_schema == Version::Unknown {
        return Err(TokenError::MixedSchemas {
            from: "tokens".to_string(),
            to: "unknown".to_string(),
        });
    }

    let mut sorted: Vec<&Token> = tokens.iter().collect();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));

    let mut root = Map::new();
    if opts.output_schema == Version::V2025_10 {
        root.insert(
            SCHEMA_KEY.to_string(),
            Json::String(Version::V2025_10.to_url().unwrap().to_string()),
        );
    }

    if opts.flatten {
        for t in &sorted {
            let key = path_to_dotted(&t.path).replace('.', &opts.delimiter);
            root.insert(key, token_entry(t, opts.output_schema));
        }
    } else {
        for t in &sorted {
            insert_nested(&mut root, &t.path, token_entry(t, opts.output_schema));
        }
    }

    Ok(Json::Object(root))
}

/// Pretty-print the DTCG document with 2-space indent and a trailing
/// newline.
pub fn to_pretty_json(tokens: &[Token], opts: &FormatOptions) -> Result<String> {
    let doc = build_document(tokens, opts)?;
    let mut s = serde_json::to_string_pretty(&doc).map_err(TokenError::Json)?;
    s.push('\n');
    Ok(s)
}

fn insert_nested(root: &mut Map<String, Json>, path: &[String], leaf: Json) {
    let mut current = root;
    for (i, seg) in path.iter().enumerate() {
        if i == path.len() - 1 {
            current.insert(seg.clone(), leaf);
            return;
        }
        let entry = current
            .entry(seg.clone())
            .or_insert_with(|| Json::Object(Map::new()));
        if !entry.is_object() {
            *entry = Json::Object(Map::new());
        }
        current = entry.as_object_mut().unwrap();
    }
}

fn token_entry(t: &Token, output_schema: Version) -> Json {
    let mut m = Map::new();
    m.insert("$value".to_string(), convert_value(t, output_schema));
    if !t.token_type.is_empty() {
        m.insert("$type".to_string(), Json::String(t.token_type.clone()));
    }
    if let Some(desc) = &t.description {
        m.insert("$description".to_string(), Json::String(desc.clone()));
    }
    if let Some(ext) = &t.extensions {
        m.insert("$extensions".to_string(), ext.to_json());
    }
    if t.deprecated {
        m.insert("$deprecated".to_string(), Json::Bool(true));
    }
    if let Some(msg) = &t.deprecation_message {
        m.insert("$deprecationMessage".to_string(), Json::String(msg.clone()));
    }
    Json::Object(m)
}

fn source_value(t: &Token) -> Value {
    if let Some(raw) = &t.raw_value {
        raw.clone()
    } else {
        Value::Scalar(t.value.clone().unwrap_or_default())
    }
}

/// The value-conversion matrix: same-dialect passthrough, or
/// Draft↔v2025.10 reference/color conversion.
fn convert_value(t: &Token, output_schema: Version) -> Json {
    let from = if t.schema_version == Version::Unknown {
        output_schema
    } else {
        t.schema_version
    };
    let value = source_value(t);

    if from == output_schema {
        return value.to_json();
    }

    match (from, output_schema) {
        (Version::Draft, Version::V2025_10) => draft_to_v2025(t, &value),
        (Version::V2025_10, Version::Draft) => v2025_to_draft(t, &value),
        _ => value.to_json(),
    }
}

fn draft_to_v2025(t: &Token, value: &Value) -> Json {
    if let Value::Scalar(s) = value {
        if let Some(inner) = is_whole_curly_ref(s) {
            let path: Vec<String> = inner.split('.').map(|p| p.to_string()).collect();
            let mut m = Map::new();
            m.insert("$ref".to_string(), Json::String(path_to_pointer(&path)));
            return Json::Object(m);
        }
        if t.type_kind() == TypeKind::Color {
            if let Some(structured) = color::parse_to_structured(s) {
                return structured.to_json();
            }
        }
    }
    value.to_json()
}

fn v2025_to_draft(t: &Token, value: &Value) -> Json {
    // The sibling `"$ref": "#/a/b"` shorthand parses to a bare pointer scalar.
    if let Value::Scalar(s) = value {
        if is_pointer_ref(s) {
            if let Some(path) = pointer_to_path(s) {
                return Json::String(format!("{{{}}}", path.join(".")));
            }
        }
    }
    if let Value::Map(map) = value {
        // The structured `$value: { "$ref": "#/a/b" }` form.
        if let Some(Value::Scalar(r)) = map.get("$ref") {
            if let Some(path) = pointer_to_path(r) {
                return Json::String(format!("{{{}}}", path.join(".")));
            }
        }
        if t.type_kind() == TypeKind::Color {
            return Json::String(color::structured_to_draft_string(map));
        }
    }
    value.to_json()
}
