//! CSS formatter: custom properties inside `:root`/`:host`,
//! optional `light-dark()` pairing, optional lit `css` tagged-template
//! wrapper.

use crate::format::common::{apply_prefix, format_header, sort_tokens, CommentStyle};
use crate::options::{CssModule, FormatOptions, Selector};
use crate::reference::rewrite_curly_as_css_var;
use crate::token::Token;

pub fn format(tokens: &[Token], opts: &FormatOptions) -> String {
    let sorted = sort_tokens(tokens);
    let selector = match opts.css.selector {
        Selector::Root => ":root",
        Selector::Host => ":host",
    };

    let mut body = format_header(opts.header.as_deref(), CommentStyle::CBlock);
    body.push_str(&format!("{selector} {{\n"));
    for t in &sorted {
        body.push_str(&declaration(t, opts));
    }
    if opts.css.light_dark_enabled {
        for (a_suffix, b_suffix) in &opts.css.light_dark_patterns {
            body.push_str(&light_dark_declarations(&sorted, a_suffix, b_suffix, opts));
        }
    }
    body.push_str("}\n");

    match opts.css.module {
        CssModule::Plain => body,
        CssModule::Lit => wrap_lit(&body),
    }
}

fn declaration(t: &Token, opts: &FormatOptions) -> String {
    let name = apply_prefix(&t.name, opts.prefix.as_deref(), "-");
    let value = rewrite_curly_as_css_var(&t.display_value(), opts.prefix.as_deref());
    format!("  --{name}: {value};\n")
}

fn var_ref(name: &str, prefix: Option<&str>) -> String {
    format!("var(--{})", apply_prefix(name, prefix, "-"))
}

fn light_dark_declarations(
    sorted: &[&Token],
    a_suffix: &str,
    b_suffix: &str,
    opts: &FormatOptions,
) -> String {
    let mut out = String::new();
    let a_tail = format!("-{a_suffix}");
    for t in sorted {
        let Some(base) = t.name.strip_suffix(&a_tail) else {
            continue;
        };
        let b_name = format!("{base}-{b_suffix}");
        if sorted.iter().any(|x| x.name == b_name) {
            let base_name = apply_prefix(base, opts.prefix.as_deref(), "-");
            let a_ref = var_ref(&t.name, opts.prefix.as_deref());
            let b_ref = var_ref(&b_name, opts.prefix.as_deref());
            out.push_str(&format!(
                "  --{base_name}: light-dark({a_ref}, {b_ref});\n"
            ));
        }
    }
    out
}

/// A minimal, faithful rendering of the lit `css` tagged-template
/// convention.
fn wrap_lit(body: &str) -> String {
    format!("import {{ css }} from 'lit';\n\nexport const tokens = css`\n{body}`;\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ParseOptions;
    use crate::parser;

    #[test]
    fn emits_root_custom_properties() {
        let src = br#"{"color":{"primary":{"$value":"#FF6B35","$type":"color"}}}"#;
        let tokens = parser::parse(src, &ParseOptions::default(), None).unwrap();
        let opts = FormatOptions::default();
        let out = format(&tokens, &opts);
        assert!(out.starts_with(":root {\n"));
        assert!(out.contains("  --color-primary: #FF6B35;\n"));
        assert!(out.ends_with("}\n"));
    }

    #[test]
    fn light_dark_pairs_generate_a_combined_declaration() {
        let src = br#"{"color":{"accent":{"on-light":{"$value":"#fff","$type":"color"},"on-dark":{"$value":"#000","$type":"color"}}}}"#;
        let tokens = parser::parse(src, &ParseOptions::default(), None).unwrap();
        let mut opts = FormatOptions::default();
        opts.css.light_dark_enabled = true;
        opts.css.light_dark_patterns = vec![("on-light".to_string(), "on-dark".to_string())];
        let out = format(&tokens, &opts);
        assert!(out.contains("--color-accent-on-light: #fff;\n"));
        assert!(out.contains("--color-accent-on-dark: #000;\n"));
        assert!(out.contains(
            "--color-accent: light-dark(var(--color-accent-on-light), var(--color-accent-on-dark));\n"
        ));
    }

    #[test]
    fn host_selector_and_lit_module() {
        let src = br#"{"spacing":{"small":{"$value":"4px","$type":"dimension"}}}"#;
        let tokens = parser::parse(src, &ParseOptions::default(), None).unwrap();
        let mut opts = FormatOptions::default();
        opts.css.selector = Selector::Host;
        opts.css.module = CssModule::Lit;
        let out = format(&tokens, &opts);
        assert!(out.contains(":host {\n"));
        assert!(out.starts_with("import { css } from 'lit';"));
    }
}
