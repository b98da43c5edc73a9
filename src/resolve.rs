//! Dependency graph & alias resolver.
//!
//! Builds a graph over token names ([`crate::depgraph::DepGraph`]), walks
//! it in dependency-first order, and resolves each token by inheriting its
//! dependency's already-resolved value along a fallback chain.

use crate::depgraph::DepGraph;
use crate::error::{Result, TokenError};
use crate::reference::{dotted_to_name, find_curly_refs, is_pointer_ref, is_whole_curly_ref, parse_json_pointer_ref};
use crate::token::Token;
use crate::value::Value;
use crate::version::Version;
use std::collections::HashMap;

/// Extract this token's dependency names: every `{...}` occurrence's
/// dotted path, converted to a token name, plus, under v2025.10 when the
/// whole value is a JSON Pointer, that pointer's segments joined the same
/// way.
fn extract_dependencies(t: &Token) -> Vec<String> {
    let Some(value) = &t.value else { return Vec::new() };
    let mut deps: Vec<String> = find_curly_refs(value)
        .into_iter()
        .map(|m| dotted_to_name(&m.path_text))
        .collect();
    if deps.is_empty() && t.schema_version == Version::V2025_10 && is_pointer_ref(value) {
        if let Some(segments) = parse_json_pointer_ref(value) {
            deps.push(segments.join("-"));
        }
    }
    deps
}

/// Resolve every alias in `tokens` in place:
/// `ResolveAliases(tokens, version) -> result`. `default_version`
/// backs tokens whose own `schema_version` is `Unknown`.
pub fn resolve_aliases(tokens: &mut Vec<Token>, default_version: Version) -> Result<()> {
    let by_name: HashMap<String, usize> = tokens
        .iter()
        .enumerate()
        .map(|(i, t)| (t.name.clone(), i))
        .collect();

    let node_names: Vec<String> = tokens.iter().map(|t| t.name.clone()).collect();
    let edges: Vec<(String, String)> = tokens
        .iter()
        .flat_map(|t| {
            extract_dependencies(t)
                .into_iter()
                .map(move |d| (t.name.clone(), d))
        })
        .collect();

    let graph = DepGraph::new(node_names, edges);
    let order = graph
        .find_cycle_or_order()
        .map_err(|chain| TokenError::CircularReference { chain })?;

    for name in order {
        if let Some(&idx) = by_name.get(&name) {
            resolve_one(tokens, idx, &by_name, default_version);
        }
    }
    Ok(())
}

fn resolve_one(
    tokens: &mut [Token],
    idx: usize,
    by_name: &HashMap<String, usize>,
    default_version: Version,
) {
    let (value, raw_value, schema_version) = {
        let t = &tokens[idx];
        let v = if t.schema_version == Version::Unknown {
            default_version
        } else {
            t.schema_version
        };
        (t.value.clone(), t.raw_value.clone(), v)
    };

    let Some(value) = value else {
        // No scalar $value (a structured composite, or metadata-only):
        // the structured value is its own resolution, per invariant 5.
        tokens[idx].resolved_value = raw_value;
        tokens[idx].is_resolved = true;
        return;
    };

    // (1) whole-token curly reference.
    if let Some(inner) = is_whole_curly_ref(&value) {
        let target_name = dotted_to_name(inner);
        if inherit_from(tokens, idx, &target_name, by_name) {
            return;
        }
        self_fallback(tokens, idx, &value);
        return;
    }

    // (2) v2025.10 whole-value JSON Pointer.
    if schema_version == Version::V2025_10 && is_pointer_ref(&value) {
        if let Some(segments) = parse_json_pointer_ref(&value) {
            let target_name = segments.join("-");
            if inherit_from(tokens, idx, &target_name, by_name) {
                return;
            }
        }
        self_fallback(tokens, idx, &value);
        return;
    }

    // (3) partial interpolation or a plain literal: pass through verbatim.
    let resolved = raw_value.unwrap_or(Value::Scalar(value));
    tokens[idx].resolved_value = Some(resolved);
    tokens[idx].is_resolved = true;
}

/// Copy `target`'s already-resolved value and chain onto `tokens[idx]`.
/// Returns `false` when the target isn't a known token (unresolved
/// reference, non-fatal, handled by the caller's self-fallback).
fn inherit_from(
    tokens: &mut [Token],
    idx: usize,
    target_name: &str,
    by_name: &HashMap<String, usize>,
) -> bool {
    let Some(&tidx) = by_name.get(target_name) else {
        return false;
    };
    let (resolved_value, mut chain) = {
        let target = &tokens[tidx];
        (target.resolved_value.clone(), target.resolution_chain.clone())
    };
    chain.insert(0, target_name.to_string());
    tokens[idx].resolved_value = resolved_value;
    tokens[idx].resolution_chain = chain;
    tokens[idx].is_resolved = true;
    true
}

/// Unresolved targets leave the token with `is_resolved = true` but with
/// the original string value as a self-fallback.
fn self_fallback(tokens: &mut [Token], idx: usize, original: &str) {
    tokens[idx].resolved_value = Some(Value::Scalar(original.to_string()));
    tokens[idx].is_resolved = true;
}
