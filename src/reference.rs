//! Reference grammar: curly-brace and JSON-Pointer recognizers, plus
//! path↔pointer conversion shared by the resolver, the serializer, and
//! every formatter's reference rewriter.

use regex::Regex;
use std::sync::OnceLock;

fn curly_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{([^}]+)\}").expect("valid regex"))
}

/// One `{...}` occurrence inside a string: its byte range and captured
/// dotted path text (not yet split on `.`).
#[derive(Debug, Clone, PartialEq)]
pub struct CurlyMatch {
    pub start: usize,
    pub end: usize,
    pub path_text: String,
}

/// Find every `{...}` occurrence in `s`.
pub fn find_curly_refs(s: &str) -> Vec<CurlyMatch> {
    curly_re()
        .captures_iter(s)
        .map(|caps| {
            let whole = caps.get(0).unwrap();
            let inner = caps.get(1).unwrap();
            CurlyMatch {
                start: whole.start(),
                end: whole.end(),
                path_text: inner.as_str().to_string(),
            }
        })
        .collect()
}

/// True when `s` is *exactly* one curly reference with no surrounding text,
/// e.g. `"{color.primary}"` but not `"1px solid {color.red}"`.
pub fn is_whole_curly_ref(s: &str) -> Option<&str> {
    let s = s.trim();
    if s.starts_with('{') && s.ends_with('}') && s.len() >= 2 {
        let inner = &s[1..s.len() - 1];
        if !inner.contains('{') && !inner.contains('}') {
            return Some(inner);
        }
    }
    None
}

/// Convert a dotted path (`"a.b.c"`) into its segment list.
pub fn dotted_to_segments(dotted: &str) -> Vec<String> {
    dotted.split('.').map(|s| s.to_string()).collect()
}

/// Convert a dotted path into a token name (`-`-joined), the form used as
/// graph node identity.
pub fn dotted_to_name(dotted: &str) -> String {
    dotted_to_segments(dotted).join("-")
}

/// Parse a v2025.10 JSON-Pointer reference string. Accepts `"#/a/b/c"`
/// (the `$value` form) and returns its segments, or `None` if the string
/// isn't a local fragment pointer.
pub fn parse_json_pointer_ref(s: &str) -> Option<Vec<String>> {
    let s = s.strip_prefix("#/")?;
    Some(s.split('/').map(unescape_pointer_segment).collect())
}

/// True when `s` begins with the v2025.10 `$ref`-as-string convention `#/`.
pub fn is_pointer_ref(s: &str) -> bool {
    s.starts_with("#/")
}

fn unescape_pointer_segment(seg: &str) -> String {
    seg.replace("~1", "/").replace("~0", "~")
}

fn escape_pointer_segment(seg: &str) -> String {
    seg.replace('~', "~0").replace('/', "~1")
}

/// `["a", "b"]` → `"a.b"`.
pub fn path_to_dotted(path: &[String]) -> String {
    path.join(".")
}

/// `["a", "b"]` → `"#/a/b"`.
pub fn path_to_pointer(path: &[String]) -> String {
    let escaped: Vec<String> = path.iter().map(|s| escape_pointer_segment(s)).collect();
    format!("#/{}", escaped.join("/"))
}

/// `"#/a/b"` → `["a", "b"]`.
pub fn pointer_to_path(pointer: &str) -> Option<Vec<String>> {
    parse_json_pointer_ref(pointer)
}

/// Canonical `{a.b.c}` self-reference for a token at `path`.
pub fn reference_for_path(path: &[String]) -> String {
    format!("{{{}}}", path_to_dotted(path))
}

/// Rewrite every `{dotted.path}` occurrence in `s` into
/// `--[prefix-]dotted-path`, the CSS custom-property reference form used by
/// CSS/SCSS/snippet formatters.
pub fn rewrite_curly_as_css_var(s: &str, prefix: Option<&str>) -> String {
    curly_re()
        .replace_all(s, |caps: &regex::Captures| {
            let inner = &caps[1];
            let dashed = inner.replace('.', "-");
            match prefix {
                Some(p) if !p.is_empty() => format!("var(--{p}-{dashed})"),
                _ => format!("var(--{dashed})"),
            }
        })
        .into_owned()
}
