//! Flat JSON formatter: a plain `{ "delim-joined-path":
//! value }` map, independent of DTCG's `$value` envelope. Pretty-printed
//! with 2-space indent.

use crate::format::common::sort_tokens;
use crate::options::FormatOptions;
use crate::reference::path_to_dotted;
use crate::token::Token;
use serde_json::Map;

pub fn format(tokens: &[Token], opts: &FormatOptions) -> String {
    let sorted = sort_tokens(tokens);
    let mut map = Map::new();
    for t in &sorted {
        let key = path_to_dotted(&t.path).replace('.', &opts.delimiter);
        let value = t
            .resolved_value_or_raw()
            .map(|v| v.to_json())
            .unwrap_or(serde_json::Value::Null);
        map.insert(key, value);
    }
    let mut s = serde_json::to_string_pretty(&serde_json::Value::Object(map))
        .unwrap_or_else(|_| "{}".to_string());
    s.push('\n');
    s
}
