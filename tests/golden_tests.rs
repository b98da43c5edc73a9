//! End-to-end pipeline tests: each exercises the full parse -> extends ->
//! resolve -> format/serialize chain through the public API and checks
//! exact output bytes, the way a downstream formatter invocation would
//! see them.

use dtcg_compiler::options::{CssOptions, Format, FormatOptions, ParseOptions};
use dtcg_compiler::version::Version;
use dtcg_compiler::{extends, format, parser, resolve, serialize};

fn parse(src: &[u8], opts: &ParseOptions) -> Vec<dtcg_compiler::Token> {
    parser::parse(src, opts, None).expect("parse")
}

#[test]
fn flattening_draft_tokens_joins_path_with_delimiter() {
    let src = br#"{"color":{"primary":{"$value":"#FF6B35","$type":"color","$description":"Primary brand color"},"secondary":{"$value":"{color.primary}","$type":"color"}},"spacing":{"small":{"$value":"4px","$type":"dimension"}}}"#;
    let tokens = parse(src, &ParseOptions::default());

    let mut opts = FormatOptions::default();
    opts.flatten = true;
    opts.delimiter = "-".to_string();
    let doc = serialize::build_document(&tokens, &opts).unwrap();

    assert_eq!(doc["color-primary"]["$value"], "#FF6B35");
    assert_eq!(doc["color-primary"]["$description"], "Primary brand color");
    assert_eq!(doc["color-secondary"]["$value"], "{color.primary}");
    assert_eq!(doc["spacing-small"]["$value"], "4px");
}

#[test]
fn serializing_to_v2025_10_expands_color_and_nests_ref() {
    let src = br#"{"color":{"primary":{"$value":"#FF6B35","$type":"color"},"secondary":{"$value":"{color.primary}","$type":"color"}}}"#;
    let tokens = parse(src, &ParseOptions::default());

    let mut opts = FormatOptions::default();
    opts.output_schema = Version::V2025_10;
    let doc = serialize::build_document(&tokens, &opts).unwrap();

    assert_eq!(doc["$schema"], "https://www.designtokens.org/schemas/2025.10.json");
    assert_eq!(doc["color"]["primary"]["$value"]["colorSpace"], "srgb");
    assert_eq!(
        doc["color"]["primary"]["$value"]["components"],
        serde_json::json!([1.0, 0.4196, 0.2078])
    );
    assert_eq!(doc["color"]["primary"]["$value"]["alpha"], 1.0);
    assert_eq!(doc["color"]["primary"]["$value"]["hex"], "#FF6B35");
    assert_eq!(doc["color"]["secondary"]["$value"]["$ref"], "#/color/primary");
}

#[test]
fn cyclic_aliases_report_the_full_chain() {
    let src = br#"{"a":{"$value":"{c}"},"b":{"$value":"{a}"},"c":{"$value":"{b}"}}"#;
    let mut tokens = parse(src, &ParseOptions::default());

    let err = resolve::resolve_aliases(&mut tokens, Version::Draft).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("a \u{2192} c \u{2192} b \u{2192} a"), "{message}");
}

#[test]
fn group_extends_inherits_and_lets_the_child_override() {
    let mut opts = ParseOptions::default();
    opts.schema_version = Some(Version::V2025_10);
    let src = br#"{
        "base": {"color": {"primary": {"$value": "#FF0000"}, "secondary": {"$value": "#00FF00"}}},
        "theme": {
            "$extends": "#/base",
            "color": {"primary": {"$value": "#0000FF"}}
        }
    }"#;
    let tokens = parse(src, &opts);
    let resolved = extends::resolve_group_extensions(tokens, src).unwrap();

    let primary = resolved.iter().find(|t| t.name == "theme-color-primary").unwrap();
    assert_eq!(primary.value.as_deref(), Some("#0000FF"));

    let secondary = resolved.iter().find(|t| t.name == "theme-color-secondary").unwrap();
    assert_eq!(secondary.value.as_deref(), Some("#00FF00"));
}

#[test]
fn css_groups_light_dark_pairs_under_a_combined_declaration() {
    let src = br#"{"color":{"accent":{"on-light":{"$value":"#fff","$type":"color"},"on-dark":{"$value":"#000","$type":"color"}}}}"#;
    let tokens = parse(src, &ParseOptions::default());

    let mut opts = FormatOptions::default();
    opts.format = Format::Css;
    opts.css = CssOptions {
        light_dark_enabled: true,
        light_dark_patterns: vec![("on-light".to_string(), "on-dark".to_string())],
        ..CssOptions::default()
    };
    let out = String::from_utf8(format::format_tokens(&tokens, &opts).unwrap()).unwrap();

    assert!(out.contains(":root {\n"));
    assert!(out.contains("  --color-accent-on-light: #fff;\n"));
    assert!(out.contains("  --color-accent-on-dark: #000;\n"));
    assert!(out.contains(
        "  --color-accent: light-dark(var(--color-accent-on-light), var(--color-accent-on-dark));\n"
    ));
}

#[test]
fn scss_with_prefix_matches_exact_output() {
    let src = br#"{"color":{"primary":{"$value":"#FF6B35","$type":"color"}},"spacing":{"small":{"$value":"4px","$type":"dimension"}}}"#;
    let tokens = parse(src, &ParseOptions::default());

    let mut opts = FormatOptions::default();
    opts.format = Format::Scss;
    opts.prefix = Some("rh".to_string());
    let out = String::from_utf8(format::format_tokens(&tokens, &opts).unwrap()).unwrap();

    assert_eq!(
        out,
        "// Color\n$rh-color-primary: #FF6B35;\n\n// Dimension\n$rh-spacing-small: 4px;\n"
    );
    assert!(out.ends_with('\n'));
}

// ---------------------------------------------------------------------
// Cross-cutting properties, exercised across the full chain.
// ---------------------------------------------------------------------

#[test]
fn token_name_always_equals_its_path_joined_with_dashes() {
    let src = br#"{"color":{"brand":{"light":{"$value":"#fff","$type":"color"}}}}"#;
    let tokens = parse(src, &ParseOptions::default());
    for t in &tokens {
        assert_eq!(t.name, t.path.join("-"));
    }
}

#[test]
fn token_reference_always_equals_its_path_joined_with_dots() {
    let src = br#"{"color":{"brand":{"$value":"#fff","$type":"color"}}}"#;
    let tokens = parse(src, &ParseOptions::default());
    for t in &tokens {
        assert_eq!(t.reference, format!("{{{}}}", t.path.join(".")));
    }
}

/// For any whole-value curly reference `{a.b}`, converting draft ->
/// v2025.10 -> draft reproduces the original curly text. Exercised
/// directly against a v2025.10 document carrying the structured
/// `{ "$ref": ... }` form, without going back through the parser (whose
/// `$ref`-as-sibling-key shorthand is a distinct authoring convention
/// from this structured value).
#[test]
fn curly_reference_round_trips_through_v2025_10_and_back() {
    let draft_src = br#"{"color":{"primary":{"$value":"#fff","$type":"color"},"secondary":{"$value":"{color.primary}","$type":"color"}}}"#;
    let draft_tokens = parse(draft_src, &ParseOptions::default());

    let mut to_v2025 = FormatOptions::default();
    to_v2025.output_schema = Version::V2025_10;
    let as_v2025 = serialize::build_document(&draft_tokens, &to_v2025).unwrap();
    assert_eq!(as_v2025["color"]["secondary"]["$value"]["$ref"], "#/color/primary");

    let mut v2025_opts = ParseOptions::default();
    v2025_opts.schema_version = Some(Version::V2025_10);
    let v2025_src = br#"{"$schema":"https://www.designtokens.org/schemas/2025.10.json","color":{"primary":{"$value":"#fff","$type":"color"},"secondary":{"$ref":"#/color/primary","$type":"color"}}}"#;
    let v2025_tokens = parse(v2025_src, &v2025_opts);

    let mut back_to_draft = FormatOptions::default();
    back_to_draft.output_schema = Version::Draft;
    let doc = serialize::build_document(&v2025_tokens, &back_to_draft).unwrap();
    assert_eq!(doc["color"]["secondary"]["$value"], "{color.primary}");
}

#[test]
fn formatting_the_same_input_twice_produces_identical_bytes() {
    let src = br#"{"color":{"b":{"$value":"#000","$type":"color"},"a":{"$value":"#fff","$type":"color"}}}"#;
    let opts = FormatOptions::default();
    let run = || {
        let tokens = parse(src, &ParseOptions::default());
        format::format_tokens(&tokens, &opts).unwrap()
    };
    assert_eq!(run(), run());
}

#[test]
fn every_token_has_a_matching_flattened_key() {
    let src = br#"{"color":{"a":{"$value":"#fff","$type":"color"}},"spacing":{"small":{"$value":"4px","$type":"dimension"}}}"#;
    let tokens = parse(src, &ParseOptions::default());
    let mut opts = FormatOptions::default();
    opts.flatten = true;
    opts.delimiter = ".".to_string();
    let doc = serialize::build_document(&tokens, &opts).unwrap();
    for t in &tokens {
        let key = t.path.join(".");
        assert!(doc.get(&key).is_some(), "missing flattened key {key}");
    }
}

/// Parsing from an actual file on disk, as the shell would hand bytes to
/// the core after reading them.
#[test]
fn parses_tokens_from_a_real_file() {
    use std::io::Write;

    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, r#"{{"color":{{"primary":{{"$value":"#FF6B35","$type":"color"}}}}}}"#).unwrap();
    let bytes = std::fs::read(file.path()).unwrap();

    let tokens = parse(&bytes, &ParseOptions::default());
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].name, "color-primary");
}
