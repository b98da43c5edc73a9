//! JavaScript/TypeScript formatter: typed constant exports,
//! or a small `TokenMap` class with a `get(key)` lookup. `map_mode` and
//! `types_path` describe a split-module layout (a shared types file
//! alongside the values module); emitting that second file is the shell's
//! job, since it owns path templating, so this formatter documents the
//! intended companion file in a header comment rather than returning two
//! buffers from one call.

use crate::format::common::{format_header, sort_tokens, CommentStyle};
use crate::format::case::to_camel_case;
use crate::options::{FormatOptions, JsExport, JsModule, JsTypes, MapMode};
use crate::token::Token;

pub fn format(tokens: &[Token], opts: &FormatOptions) -> String {
    let sorted = sort_tokens(tokens);
    let mut out = format_header(opts.header.as_deref(), CommentStyle::CBlock);

    if opts.js.map_mode == MapMode::Module {
        if let Some(path) = &opts.js.types_path {
            out.push_str(&format!("// Types: see {path}\n"));
        }
    }

    match opts.js.export {
        JsExport::Values => values_export(&sorted, opts, &mut out),
        JsExport::Map => map_export(&sorted, opts, &mut out),
    }
    out
}

fn js_string_literal(v: &str) -> String {
    format!("\"{}\"", v.replace('\\', "\\\\").replace('"', "\\\""))
}

fn values_export(sorted: &[&Token], opts: &FormatOptions, out: &mut String) {
    for t in sorted {
        let ident = to_camel_case(&t.name);
        let literal = js_string_literal(&t.display_value());
        if opts.js.types == JsTypes::Jsdoc {
            out.push_str("/** @type {string} */\n");
        }
        let type_annotation = if opts.js.types == JsTypes::Ts { ": string" } else { "" };
        match opts.js.module {
            JsModule::Esm => {
                out.push_str(&format!("export const {ident}{type_annotation} = {literal};\n"));
            }
            JsModule::Cjs => {
                out.push_str(&format!("exports.{ident} = {literal};\n"));
            }
        }
    }
}

fn map_export(sorted: &[&Token], opts: &FormatOptions, out: &mut String) {
    let class_name = opts.js.class_name.clone().unwrap_or_else(|| "TokenMap".to_string());
    let class_keyword = match opts.js.module {
        JsModule::Esm => "export class",
        JsModule::Cjs => "class",
    };

    out.push_str(&format!("{class_keyword} {class_name} {{\n"));
    out.push_str("  static tokens = {\n");
    for t in sorted {
        out.push_str(&format!(
            "    '{}': {},\n",
            t.name,
            js_string_literal(&t.display_value())
        ));
    }
    out.push_str("  };\n\n");
    let return_type = if opts.js.types == JsTypes::Ts { ": string | undefined" } else { "" };
    let param = if opts.js.types == JsTypes::Ts { "key: string" } else { "key" };
    out.push_str(&format!(
        "  static get({param}){return_type} {{\n    return {class_name}.tokens[key];\n  }}\n"
    ));
    out.push_str("}\n");

    if opts.js.module == JsModule::Cjs {
        out.push_str(&format!("\nmodule.exports = {{ {class_name} }};\n"));
    }
}
