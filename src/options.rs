//! Typed configuration surface.
//!
//! These structs are the core's *only* configuration surface: the shell
//! owns CLI flag parsing and `.config/` file discovery and is responsible
//! for turning that into one of these records before calling into the
//! library. Each concern gets its own struct with `#[serde(default)]` and
//! a `Default` impl, so a shell can build one field at a time without a
//! multi-source file/env loader, since that loader belongs to the shell,
//! not the core.

use crate::version::Version;
use serde::{Deserialize, Serialize};

/// Options accepted by [`crate::parser::parse`] (ingestion contract).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    pub prefix: Option<String>,
    pub group_markers: Vec<String>,
    pub schema_version: Option<Version>,
    pub skip_positions: bool,
    pub skip_sort: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            prefix: None,
            group_markers: Vec::new(),
            schema_version: None,
            skip_positions: true,
            skip_sort: false,
        }
    }
}

/// Options for [`crate::resolve::resolve_aliases`] and the extends pass.
/// `strict` governs whether structural violations (missing `$value`,
/// dialect-mismatched `$ref`) are surfaced as errors or silently dropped/
/// passed through.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolveOptions {
    pub strict: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Dtcg,
    Json,
    Android,
    Swift,
    Js,
    Scss,
    Css,
    Snippets,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Selector {
    Root,
    Host,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CssModule {
    Plain,
    Lit,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CssOptions {
    pub selector: Selector,
    pub module: CssModule,
    pub light_dark_enabled: bool,
    /// Suffix pairs, e.g. `[("on-light", "on-dark")]`.
    pub light_dark_patterns: Vec<(String, String)>,
}

impl Default for CssOptions {
    fn default() -> Self {
        CssOptions {
            selector: Selector::Root,
            module: CssModule::Plain,
            light_dark_enabled: false,
            light_dark_patterns: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsModule {
    Esm,
    Cjs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsTypes {
    Ts,
    Jsdoc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsExport {
    Values,
    Map,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapMode {
    Full,
    Types,
    Module,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct JsOptions {
    pub module: JsModule,
    pub types: JsTypes,
    pub export: JsExport,
    pub map_mode: MapMode,
    pub types_path: Option<String>,
    pub class_name: Option<String>,
}

impl Default for JsOptions {
    fn default() -> Self {
        JsOptions {
            module: JsModule::Esm,
            types: JsTypes::Ts,
            export: JsExport::Values,
            map_mode: MapMode::Full,
            types_path: None,
            class_name: Some("TokenMap".to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnippetKind {
    Vscode,
    Textmate,
    Zed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SnippetsOptions {
    pub kind: SnippetKind,
}

impl Default for SnippetsOptions {
    fn default() -> Self {
        SnippetsOptions { kind: SnippetKind::Vscode }
    }
}

/// Output partitioning strategy for a destination path containing
/// `{group}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitBy {
    TopLevel,
    Type,
    Path(usize),
}

/// Options accepted by [`crate::format::format_tokens`] (emission
/// contract).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    pub input_schema: Version,
    pub output_schema: Version,
    pub flatten: bool,
    pub delimiter: String,
    pub format: Format,
    pub prefix: Option<String>,
    pub header: Option<String>,
    pub split_by: Option<SplitBy>,
    pub css: CssOptions,
    pub js: JsOptions,
    pub snippets: SnippetsOptions,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            input_schema: Version::Draft,
            output_schema: Version::Draft,
            flatten: false,
            delimiter: "-".to_string(),
            format: Format::Dtcg,
            prefix: None,
            header: None,
            split_by: None,
            css: CssOptions::default(),
            js: JsOptions::default(),
            snippets: SnippetsOptions::default(),
        }
    }
}
