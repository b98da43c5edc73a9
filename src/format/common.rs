//! Shared formatter utilities: sorting, prefixing, header framing, and
//! split-by partitioning. A small, pre-computed projection every emitter
//! consumes instead of reaching back into raw input.

use crate::options::SplitBy;
use crate::token::Token;

/// `SortTokens(ts)`: stable sort by name, the ordering guarantee every
/// formatter's output relies on.
pub fn sort_tokens<'a>(tokens: &'a [Token]) -> Vec<&'a Token> {
    let mut sorted: Vec<&Token> = tokens.iter().collect();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));
    sorted
}

/// `ApplyPrefix(name, prefix, delim)`: prepends a delimited prefix, empty-
/// prefix safe.
pub fn apply_prefix(name: &str, prefix: Option<&str>, delim: &str) -> String {
    match prefix {
        Some(p) if !p.is_empty() => format!("{p}{delim}{name}"),
        _ => name.to_string(),
    }
}

/// Comment syntaxes used by `FormatHeader` across the format catalogue:
/// C-style block, hash, XML, SCSS-line, Swift-style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStyle {
    /// `/* ... */` block, css, js.
    CBlock,
    /// `# ...` per line.
    Hash,
    /// `<!-- ... -->` block, android XML.
    Xml,
    /// `// ...` per line, scss.
    SCSSLine,
    /// `// ...` per line, swift.
    SwiftLine,
}

/// `FormatHeader(header, commentStyle)`: wraps a multi-line header in the
/// format's comment syntax. Returns an empty string for an absent/empty
/// header so callers can unconditionally prepend the result.
pub fn format_header(header: Option<&str>, style: CommentStyle) -> String {
    let Some(header) = header.filter(|h| !h.is_empty()) else {
        return String::new();
    };
    match style {
        CommentStyle::CBlock => {
            let mut s = String::from("/*\n");
            for line in header.lines() {
                s.push_str(" * ");
                s.push_str(line);
                s.push('\n');
            }
            s.push_str(" */\n");
            s
        }
        CommentStyle::SCSSLine | CommentStyle::SwiftLine => {
            let mut s = String::new();
            for line in header.lines() {
                s.push_str("// ");
                s.push_str(line);
                s.push('\n');
            }
            s
        }
        CommentStyle::Hash => {
            let mut s = String::new();
            for line in header.lines() {
                s.push_str("# ");
                s.push_str(line);
                s.push('\n');
            }
            s
        }
        CommentStyle::Xml => format!("<!-- {header} -->\n"),
    }
}

/// Sanitize a group name for use in an output path segment.
pub fn sanitize_group_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect::<String>()
        .replace("..", "__")
}

/// Partition `tokens` per `split_by`. Missing segments bucket to
/// `"other"`; group keys are returned
/// presentation-ready (not yet path-sanitized; callers building a
/// filesystem path should run them through [`sanitize_group_name`]).
pub fn partition_tokens<'a>(tokens: &'a [Token], split_by: SplitBy) -> Vec<(String, Vec<&'a Token>)> {
    let mut groups: Vec<(String, Vec<&Token>)> = Vec::new();
    for t in sort_tokens(tokens) {
        let key = match split_by {
            SplitBy::TopLevel => t.path.first().cloned().unwrap_or_else(|| "other".to_string()),
            SplitBy::Type => {
                if t.token_type.is_empty() {
                    "other".to_string()
                } else {
                    t.token_type.clone()
                }
            }
            SplitBy::Path(n) => t.path.get(n).cloned().unwrap_or_else(|| "other".to_string()),
        };
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => v.push(t),
            None => groups.push((key, vec![t])),
        }
    }
    groups
}
