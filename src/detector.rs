//! Schema detector: decides which DTCG dialect a parsed document was
//! authored against.

use crate::version::Version;
use serde_json::Value as Json;

/// Detect the dialect of an already-parsed document.
///
/// Priority:
/// 1. a top-level `$schema` scalar matching a known URL,
/// 2. the caller-provided default,
/// 3. duck-typing: `$ref`, `$extends`, `resolutionOrder`, or a color
///    token with a keyed-map `$value` bearing `colorSpace` anywhere in the
///    document means `V2025_10`,
/// 4. `Draft`.
///
/// This never fails: a document lacking `$schema` is not itself an error.
pub fn detect(doc: &Json, default: Option<Version>) -> Version {
    if let Some(schema_url) = doc.get("$schema").and_then(|v| v.as_str()) {
        if let Some(v) = Version::from_url(schema_url) {
            return v;
        }
    }
    if let Some(default) = default {
        return default;
    }
    if duck_types_as_v2025_10(doc) {
        return Version::V2025_10;
    }
    Version::Draft
}

fn duck_types_as_v2025_10(doc: &Json) -> bool {
    match doc {
        Json::Object(map) => {
            if map.contains_key("$ref")
                || map.contains_key("$extends")
                || map.contains_key("resolutionOrder")
            {
                return true;
            }
            if let Some(value) = map.get("$value") {
                if let Json::Object(value_map) = value {
                    if value_map.contains_key("colorSpace") {
                        return true;
                    }
                }
            }
            map.values().any(duck_types_as_v2025_10)
        }
        Json::Array(items) => items.iter().any(duck_types_as_v2025_10),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn recognizes_known_schema_url() {
        let doc = json!({"$schema": "https://www.designtokens.org/schemas/2025.10.json"});
        assert_eq!(detect(&doc, None), Version::V2025_10);
    }

    #[test]
    fn falls_back_to_caller_default() {
        let doc = json!({"color": {"primary": {"$value": "#fff"}}});
        assert_eq!(detect(&doc, Some(Version::Draft)), Version::Draft);
    }

    #[test]
    fn duck_types_ref() {
        let doc = json!({"theme": {"$extends": "#/base"}});
        assert_eq!(detect(&doc, None), Version::V2025_10);
    }

    #[test]
    fn duck_types_structured_color() {
        let doc = json!({
            "color": {"primary": {"$value": {"colorSpace": "srgb", "components": [1,0,0]}}}
        });
        assert_eq!(detect(&doc, None), Version::V2025_10);
    }

    #[test]
    fn defaults_to_draft() {
        let doc = json!({"color": {"primary": {"$value": "#fff"}}});
        assert_eq!(detect(&doc, None), Version::Draft);
    }

    #[test]
    fn malformed_document_is_not_this_modules_concern() {
        // The detector only ever receives already-parsed documents; parse
        // failures are surfaced by the parser before detection runs.
        let doc = json!({});
        assert_eq!(detect(&doc, None), Version::Draft);
    }
}
