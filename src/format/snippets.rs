//! Editor snippet formatter: one snippet per token (plus
//! collapsed `light-dark()` snippets for paired tokens), rendered as
//! VSCode/Zed-style JSON or a TextMate plist.

use crate::format::case::{to_camel_case, to_snake_case};
use crate::format::common::sort_tokens;
use crate::options::{FormatOptions, SnippetKind};
use crate::token::{Token, TypeKind};
use serde_json::Map;

struct Snippet {
    name: String,
    prefixes: Vec<String>,
    body: String,
}

pub fn format(tokens: &[Token], opts: &FormatOptions) -> String {
    let sorted = sort_tokens(tokens);
    let snippets = build_snippets(&sorted, opts);

    match opts.snippets.kind {
        SnippetKind::Vscode | SnippetKind::Zed => vscode_json(&snippets),
        SnippetKind::Textmate => textmate_plist(&snippets),
    }
}

fn build_snippets(sorted: &[&Token], opts: &FormatOptions) -> Vec<Snippet> {
    let mut collapsed: std::collections::HashSet<String> = std::collections::HashSet::new();
    let mut snippets = Vec::new();

    if opts.css.light_dark_enabled {
        for (a_suffix, b_suffix) in &opts.css.light_dark_patterns {
            let a_tail = format!("-{a_suffix}");
            for t in sorted {
                let Some(base) = t.name.strip_suffix(&a_tail) else {
                    continue;
                };
                let b_name = format!("{base}-{b_suffix}");
                if let Some(b_tok) = sorted.iter().find(|x| x.name == b_name) {
                    let a_ref = format!("var(--{})", t.name);
                    let b_ref = format!("var(--{})", b_tok.name);
                    snippets.push(Snippet {
                        name: base.to_string(),
                        prefixes: name_prefixes(base, None),
                        body: format!("--{base}: light-dark({a_ref}, {b_ref});"),
                    });
                    collapsed.insert(t.name.clone());
                    collapsed.insert(b_name);
                }
            }
        }
    }

    for t in sorted {
        if collapsed.contains(&t.name) {
            continue;
        }
        let hex = (t.type_kind() == TypeKind::Color)
            .then(|| t.display_value())
            .filter(|v| v.starts_with('#'));
        snippets.push(Snippet {
            name: t.name.clone(),
            prefixes: name_prefixes(&t.name, hex.as_deref()),
            body: format!("--{}: {};", t.name, t.display_value()),
        });
    }
    snippets
}

fn name_prefixes(name: &str, hex: Option<&str>) -> Vec<String> {
    let mut prefixes = vec![name.to_string(), to_camel_case(name), to_snake_case(name)];
    if let Some(h) = hex {
        prefixes.push(h.to_string());
    }
    prefixes
}

fn vscode_json(snippets: &[Snippet]) -> String {
    let mut root = Map::new();
    for s in snippets {
        let mut entry = Map::new();
        entry.insert(
            "prefix".to_string(),
            serde_json::Value::Array(
                s.prefixes.iter().map(|p| serde_json::Value::String(p.clone())).collect(),
            ),
        );
        entry.insert(
            "body".to_string(),
            serde_json::Value::Array(vec![serde_json::Value::String(s.body.clone())]),
        );
        entry.insert("scope".to_string(), serde_json::Value::String("css".to_string()));
        root.insert(s.name.clone(), serde_json::Value::Object(entry));
    }
    let mut out = serde_json::to_string_pretty(&serde_json::Value::Object(root))
        .unwrap_or_else(|_| "{}".to_string());
    out.push('\n');
    out
}

fn textmate_plist(snippets: &[Snippet]) -> String {
    let mut out = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<!DOCTYPE plist PUBLIC \"-//Apple//DTD PLIST 1.0//EN\" \"http://www.apple.com/DTDs/PropertyList-1.0.dtd\">\n<plist version=\"1.0\">\n<dict>\n  <key>scope</key>\n  <string>source.css</string>\n  <key>snippets</key>\n  <array>\n",
    );
    for s in snippets {
        out.push_str("    <dict>\n");
        out.push_str(&format!("      <key>name</key>\n      <string>{}</string>\n", s.name));
        out.push_str("      <key>prefix</key>\n      <array>\n");
        for p in &s.prefixes {
            out.push_str(&format!("        <string>{p}</string>\n"));
        }
        out.push_str("      </array>\n");
        out.push_str(&format!(
            "      <key>content</key>\n      <string>{}</string>\n",
            s.body
        ));
        out.push_str("    </dict>\n");
    }
    out.push_str("  </array>\n</dict>\n</plist>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ParseOptions;
    use crate::parser;

    #[test]
    fn color_snippet_gets_a_hex_prefix() {
        let src = br#"{"color":{"primary":{"$value":"#FF6B35","$type":"color"}}}"#;
        let tokens = parser::parse(src, &ParseOptions::default(), None).unwrap();
        let out = format(&tokens, &FormatOptions::default());
        let doc: serde_json::Value = serde_json::from_str(&out).unwrap();
        let prefixes = doc["color-primary"]["prefix"].as_array().unwrap();
        assert!(prefixes.iter().any(|p| p == "#FF6B35"));
    }

    #[test]
    fn light_dark_pair_collapses_into_one_snippet() {
        let src = br#"{"color":{"accent":{"on-light":{"$value":"#fff","$type":"color"},"on-dark":{"$value":"#000","$type":"color"}}}}"#;
        let tokens = parser::parse(src, &ParseOptions::default(), None).unwrap();
        let mut opts = FormatOptions::default();
        opts.css.light_dark_enabled = true;
        opts.css.light_dark_patterns = vec![("on-light".to_string(), "on-dark".to_string())];
        let out = format(&tokens, &opts);
        let doc: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert!(doc.get("color-accent-on-light").is_none());
        assert!(doc.get("color-accent-on-dark").is_none());
        assert!(doc["color-accent"]["body"][0]
            .as_str()
            .unwrap()
            .contains("light-dark("));
    }
}
