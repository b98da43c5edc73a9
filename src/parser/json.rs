//! JSON dialect loading: parses bytes into a `serde_json::Value` document,
//! tolerating leading UTF-8 BOMs and `//`/`/* */` comments outside string
//! literals (JSON-with-comments).

use crate::error::{Result, TokenError};

/// Parse JSON bytes (with comment tolerance) into a document value.
///
/// Keys preserve source order: `serde_json`'s `preserve_order` feature
/// backs `Value::Object` with an `IndexMap`, which is what lets the parser
/// walk groups in document order for position tracking (see
/// `super::PositionTracker`) while still supporting a later sort-by-name
/// pass for deterministic output.
pub fn parse_bytes(bytes: &[u8], file: Option<&str>) -> Result<serde_json::Value> {
    let text = strip_bom(bytes);
    let stripped = strip_comments(text);
    serde_json::from_str(&stripped).map_err(|e| TokenError::InvalidDocument {
        file: file.map(|s| s.to_string()),
        message: e.to_string(),
    })
}

fn strip_bom(bytes: &[u8]) -> &str {
    let bytes = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]).unwrap_or(bytes);
    std::str::from_utf8(bytes).unwrap_or("")
}

/// Strip `//` line comments and `/* */` block comments that fall outside
/// string literals. A small hand-rolled pre-pass rather than a second JSON
/// crate, to keep a single JSON-family dependency in the tree.
fn strip_comments(src: &str) -> String {
    let mut out = String::with_capacity(src.len());
    let mut chars = src.char_indices().peekable();
    let mut in_string = false;
    let mut escape = false;

    while let Some((_, c)) = chars.next() {
        if in_string {
            out.push(c);
            if escape {
                escape = false;
            } else if c == '\\' {
                escape = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                out.push(c);
            }
            '/' if matches!(chars.peek(), Some((_, '/'))) => {
                chars.next();
                for (_, c2) in chars.by_ref() {
                    if c2 == '\n' {
                        out.push('\n');
                        break;
                    }
                }
            }
            '/' if matches!(chars.peek(), Some((_, '*'))) => {
                chars.next();
                let mut prev = ' ';
                for (_, c2) in chars.by_ref() {
                    if prev == '*' && c2 == '/' {
                        break;
                    }
                    prev = c2;
                }
            }
            other => out.push(other),
        }
    }
    out
}
