//! SCSS formatter: kebab-case `$variables`, grouped by type
//! with a `// Capitalized` comment per group.

use crate::format::common::{apply_prefix, format_header, sort_tokens, CommentStyle};
use crate::options::FormatOptions;
use crate::reference::rewrite_curly_as_css_var;
use crate::token::Token;
use std::collections::BTreeMap;

pub fn format(tokens: &[Token], opts: &FormatOptions) -> String {
    let sorted = sort_tokens(tokens);

    let mut groups: BTreeMap<String, Vec<&Token>> = BTreeMap::new();
    for t in &sorted {
        let key = if t.token_type.is_empty() {
            "other".to_string()
        } else {
            t.token_type.clone()
        };
        groups.entry(key).or_default().push(t);
    }

    let mut out = format_header(opts.header.as_deref(), CommentStyle::SCSSLine);
    let group_count = groups.len();
    for (i, (type_name, members)) in groups.into_iter().enumerate() {
        out.push_str(&format!("// {}\n", capitalize(&type_name)));
        for t in members {
            let name = apply_prefix(&t.name, opts.prefix.as_deref(), "-");
            let value = rewrite_curly_as_css_var(&t.display_value(), opts.prefix.as_deref());
            out.push_str(&format!("${name}: {value};\n"));
        }
        if i + 1 < group_count {
            out.push('\n');
        }
    }
    out
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}
