//! dtcg-compiler
//!
//! A design-token compiler for the Design Tokens Community Group (DTCG)
//! format: it parses token definitions authored against either the
//! editor's Draft dialect or the stable v2025.10 dialect, resolves
//! `$extends` group inheritance and `{a.b}`/`$ref` cross-token aliases,
//! and emits the result as CSS custom properties, SCSS, Android XML,
//! Swift, JS/TS, flat JSON, DTCG JSON, or editor snippets.
//!
//! ## Pipeline
//!
//! ```text
//! bytes -> detector -> parser -> extends -> resolve -> (serialize | format)
//! ```
//!
//! ```no_run
//! use dtcg_compiler::{options, parser, extends, resolve, format, version::Version};
//!
//! let bytes = std::fs::read("tokens.json").unwrap();
//! let parse_opts = options::ParseOptions::default();
//! let tokens = parser::parse(&bytes, &parse_opts, Some("tokens.json")).unwrap();
//! let tokens = extends::resolve_group_extensions(tokens, &bytes).unwrap();
//! let mut tokens = tokens;
//! resolve::resolve_aliases(&mut tokens, Version::Draft).unwrap();
//!
//! let format_opts = options::FormatOptions::default();
//! let css = format::format_tokens(&tokens, &format_opts).unwrap();
//! ```
//!
//! The CLI shell, config-file discovery, and package-specifier resolution
//! (`npm:`/`jsr:` lookups, CDN fallback) that feed bytes into this
//! pipeline live outside this crate; it only ever consumes pre-resolved
//! byte buffers.

pub mod color;
pub mod depgraph;
pub mod detector;
pub mod error;
pub mod extends;
pub mod format;
pub mod options;
pub mod parser;
pub mod reference;
pub mod resolve;
pub mod serialize;
pub mod token;
pub mod validate;
pub mod value;
pub mod version;

pub use error::{Result, TokenError};
pub use options::{Format, FormatOptions, ParseOptions, ResolveOptions};
pub use token::Token;
pub use value::Value;
pub use version::Version;
