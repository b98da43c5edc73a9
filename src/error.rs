//! Error vocabulary for the token pipeline.

use thiserror::Error;

/// Everything that can go wrong while parsing, resolving, or emitting tokens.
///
/// Every variant carries enough context (file path, token path, cycle chain)
/// to let a caller print "offending file, token path, issue, suggestion".
/// Unresolved references and consistency findings are intentionally *not*
/// variants here, since they are recoverable/non-fatal by default; see
/// `crate::validate::Warning` and `crate::token::Token::is_resolved`.
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("invalid document{}: {message}", file.as_deref().map(|f| format!(" in {f}")).unwrap_or_default())]
    InvalidDocument { file: Option<String>, message: String },

    #[error("unknown schema version: {label:?}")]
    UnknownSchemaVersion { label: String },

    #[error("mixed schemas: cannot serialize {from} tokens as {to}")]
    MixedSchemas { from: String, to: String },

    #[error("token at {path} is missing $value")]
    MissingValue { path: String },

    #[error("invalid reference {reference:?} at {path}")]
    InvalidReference { path: String, reference: String },

    #[error("circular reference: {}", chain.join(" \u{2192} "))]
    CircularReference { chain: Vec<String> },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl TokenError {
    /// A short remediation hint, when one exists, for user-facing reporting.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            TokenError::UnknownSchemaVersion { .. } => {
                Some("use \"draft\" or \"v2025.10\", or omit schema_version to auto-detect")
            }
            TokenError::MixedSchemas { .. } => {
                Some("convert the token set with the schema interconversion pass before serializing")
            }
            TokenError::MissingValue { .. } => {
                Some("add a $value, or drop strict mode to silently skip this entry")
            }
            TokenError::InvalidReference { .. } => {
                Some("$ref is only valid under the v2025.10 schema; use {a.b} under Draft")
            }
            TokenError::CircularReference { .. } => {
                Some("break the cycle by removing one of the listed references")
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, TokenError>;
