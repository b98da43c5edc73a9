//! Consistency validator: a post-parse pass over the raw document that
//! warns on schema-dialect mixing. Non-fatal unless the caller chooses to
//! treat warnings as errors (`ResolveOptions::strict`, left to the
//! caller).

use crate::reference::path_to_dotted;
use crate::version::Version;
use serde_json::Value as Json;

/// One dialect-mixing warning, with a path for context and a suggestion
/// for how to fix it.
#[derive(Debug, Clone, PartialEq)]
pub struct Warning {
    pub path: String,
    pub message: String,
    pub suggestion: String,
}

fn warn(path: &[String], message: impl Into<String>, suggestion: impl Into<String>) -> Warning {
    Warning {
        path: path_to_dotted(path),
        message: message.into(),
        suggestion: suggestion.into(),
    }
}

/// Walk `doc` looking for conventions that belong to the other dialect.
pub fn validate(doc: &Json, version: Version, group_markers: &[String]) -> Vec<Warning> {
    let mut warnings = Vec::new();
    if let Json::Object(root) = doc {
        walk(root, &[], None, version, group_markers, &mut warnings);
    }
    warnings
}

fn walk(
    obj: &serde_json::Map<String, Json>,
    path: &[String],
    inherited_type: Option<&str>,
    version: Version,
    group_markers: &[String],
    out: &mut Vec<Warning>,
) {
    let local_type = obj.get("$type").and_then(|v| v.as_str());
    let effective_type = local_type.or(inherited_type);

    match version {
        Version::Draft => check_draft(obj, path, effective_type, out),
        Version::V2025_10 => check_v2025_10(obj, path, effective_type, group_markers, out),
        Version::Unknown => {}
    }

    for (key, value) in obj.iter() {
        if key.starts_with('$') {
            continue;
        }
        if let Json::Object(child) = value {
            let mut child_path = path.to_vec();
            child_path.push(key.clone());
            walk(child, &child_path, effective_type, version, group_markers, out);
        }
    }
}

fn check_draft(
    obj: &serde_json::Map<String, Json>,
    path: &[String],
    effective_type: Option<&str>,
    out: &mut Vec<Warning>,
) {
    if obj.contains_key("$ref") {
        out.push(warn(
            path,
            "`$ref` is a v2025.10-only convention and is ignored as data under Draft",
            "use a `{a.b}` curly reference instead",
        ));
    }
    if obj.contains_key("$extends") {
        out.push(warn(
            path,
            "`$extends` has no effect under Draft",
            "switch the document's `$schema` to v2025.10 to use group extension",
        ));
    }
    if obj.contains_key("$root") {
        out.push(warn(
            path,
            "`$root` is a v2025.10-only convention",
            "use a configured group marker key instead of `$root` under Draft",
        ));
    }
    if effective_type == Some("color") {
        if let Some(Json::Object(_)) = obj.get("$value") {
            out.push(warn(
                path,
                "structured color value found under Draft",
                "use a CSS color string (hex, `rgb()`, `oklch()`, ...) instead",
            ));
        }
    }
}

fn check_v2025_10(
    obj: &serde_json::Map<String, Json>,
    path: &[String],
    effective_type: Option<&str>,
    group_markers: &[String],
    out: &mut Vec<Warning>,
) {
    if effective_type == Some("color") {
        if let Some(Json::String(_)) = obj.get("$value") {
            out.push(warn(
                path,
                "string color value found under v2025.10",
                "use a structured `{ colorSpace, components, alpha, hex }` value instead",
            ));
        }
    }
    let has_root = obj.contains_key("$root");
    for marker in group_markers {
        if obj.contains_key(marker.as_str()) {
            if has_root {
                out.push(warn(
                    path,
                    format!("group marker `{marker}` coexists with `$root` in the same group"),
                    "use `$root` instead of group markers under v2025.10",
                ));
            } else {
                out.push(warn(
                    path,
                    format!("group marker `{marker}` is deprecated under v2025.10"),
                    "use `$root` instead of group markers",
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warns_on_ref_under_draft() {
        let doc = serde_json::json!({"color": {"secondary": {"$ref": "#/color/primary", "$type": "color"}}});
        let warnings = validate(&doc, Version::Draft, &[]);
        assert!(warnings.iter().any(|w| w.message.contains("$ref")));
    }

    #[test]
    fn warns_on_structured_color_under_draft() {
        let doc = serde_json::json!({"color": {"primary": {"$value": {"colorSpace": "srgb", "components": [1,0,0]}, "$type": "color"}}});
        let warnings = validate(&doc, Version::Draft, &[]);
        assert!(warnings.iter().any(|w| w.message.contains("structured color")));
    }

    #[test]
    fn warns_on_string_color_under_v2025_10() {
        let doc = serde_json::json!({"color": {"primary": {"$value": "#FF6B35", "$type": "color"}}});
        let warnings = validate(&doc, Version::V2025_10, &[]);
        assert!(warnings.iter().any(|w| w.message.contains("string color")));
    }

    #[test]
    fn warns_on_deprecated_group_marker() {
        let doc = serde_json::json!({"color": {"_": {"$value": "#FF6B35", "$type": "color"}}});
        let warnings = validate(&doc, Version::V2025_10, &["_".to_string()]);
        assert!(warnings.iter().any(|w| w.message.contains("deprecated")));
    }

    #[test]
    fn no_warnings_on_conventional_document() {
        let doc = serde_json::json!({"color": {"primary": {"$value": "#FF6B35", "$type": "color"}}});
        let warnings = validate(&doc, Version::Draft, &[]);
        assert!(warnings.is_empty());
    }
}
