//! Formatter dispatch.
//!
//! `format_tokens` is the single entry point: a [`crate::options::Format`]
//! tag selects one of the per-language emitters below, all of which share
//! the utilities in [`common`] and [`case`] and build their output as a
//! `String` via `push_str`/`format!` dispatched on that tag.

pub mod android;
pub mod case;
pub mod common;
pub mod css;
pub mod dtcg;
pub mod js;
pub mod json_flat;
pub mod scss;
pub mod snippets;
pub mod swift;

use crate::error::Result;
use crate::options::{Format, FormatOptions};
use crate::token::Token;

/// `FormatTokens(tokens, Format, Options) -> bytes`.
pub fn format_tokens(tokens: &[Token], opts: &FormatOptions) -> Result<Vec<u8>> {
    let text = match opts.format {
        Format::Dtcg => dtcg::format(tokens, opts)?,
        Format::Json => json_flat::format(tokens, opts),
        Format::Android => android::format(tokens, opts),
        Format::Swift => swift::format(tokens, opts),
        Format::Js => js::format(tokens, opts),
        Format::Scss => scss::format(tokens, opts),
        Format::Css => css::format(tokens, opts),
        Format::Snippets => snippets::format(tokens, opts),
    };
    Ok(text.into_bytes())
}

pub use common::{partition_tokens, sanitize_group_name};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ParseOptions;
    use crate::parser;

    #[test]
    fn every_format_produces_newline_terminated_utf8() {
        let src = br#"{"color":{"primary":{"$value":"#FF6B35","$type":"color"}}}"#;
        let tokens = parser::parse(src, &ParseOptions::default(), None).unwrap();
        for fmt in [
            Format::Dtcg,
            Format::Json,
            Format::Android,
            Format::Swift,
            Format::Js,
            Format::Scss,
            Format::Css,
            Format::Snippets,
        ] {
            let mut opts = FormatOptions::default();
            opts.format = fmt;
            let bytes = format_tokens(&tokens, &opts).unwrap();
            let text = String::from_utf8(bytes).unwrap();
            assert!(text.ends_with('\n'), "{fmt:?} did not end with a newline");
        }
    }
}
