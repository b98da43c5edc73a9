//! Group-extension resolver (v2025.10 only).
//!
//! `$extends` is a *group* attribute and is lost once parsing has thrown
//! the raw document away, so this pass takes the raw bytes again
//! (`ResolveGroupExtensions(tokens, raw_bytes) -> tokens`) and re-walks
//! them looking only for `$extends`. A pending-edges list is built by
//! walking the raw JSON, then resolved as a single-purpose group-path DAG
//! via [`crate::depgraph::DepGraph`].

use crate::error::{Result, TokenError};
use crate::depgraph::DepGraph;
use crate::parser;
use crate::reference::{dotted_to_segments, path_to_dotted, pointer_to_path, reference_for_path};
use crate::token::Token;
use crate::version::Version;
use serde_json::Value as Json;
use std::collections::{HashMap, HashSet};

/// Materialize inherited tokens for every group carrying `$extends`.
///
/// Returns the input unchanged (the Draft behavior) when no token in
/// `tokens` carries `V2025_10`.
pub fn resolve_group_extensions(tokens: Vec<Token>, raw_bytes: &[u8]) -> Result<Vec<Token>> {
    if !tokens.iter().any(|t| t.schema_version == Version::V2025_10) {
        return Ok(tokens);
    }

    let doc = parser::parse_to_document(raw_bytes, None)?;
    let mut extends_map: HashMap<String, String> = HashMap::new();
    if let Json::Object(root) = &doc {
        collect_extends(root, &[], &mut extends_map);
    }
    if extends_map.is_empty() {
        return Ok(tokens);
    }

    let nodes: Vec<String> = extends_map.keys().cloned().collect();
    let edges = extends_map
        .iter()
        .map(|(g, t)| (g.clone(), t.clone()))
        .collect::<Vec<_>>();
    let graph = DepGraph::new(nodes, edges);
    let order = graph
        .find_cycle_or_order()
        .map_err(|chain| TokenError::CircularReference { chain })?;

    let mut result = tokens;
    // Dependency-first order materializes a group's own extension target
    // before the group itself, so chained extensions compose.
    for group_dotted in order {
        if let Some(target_dotted) = extends_map.get(&group_dotted) {
            materialize(&group_dotted, target_dotted, &mut result);
        }
    }
    result.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(result)
}

fn collect_extends(
    obj: &serde_json::Map<String, Json>,
    path: &[String],
    out: &mut HashMap<String, String>,
) {
    if let Some(Json::String(ext)) = obj.get("$extends") {
        if let Some(target_path) = pointer_to_path(ext) {
            out.insert(path_to_dotted(path), path_to_dotted(&target_path));
        }
    }
    for (k, v) in obj.iter() {
        if k.starts_with('$') {
            continue;
        }
        if let Json::Object(child) = v {
            let mut child_path = path.to_vec();
            child_path.push(k.clone());
            collect_extends(child, &child_path, out);
        }
    }
}

/// Copy every descendant of `target` into `group`, rewriting path/name/
/// reference, skipping any token that already exists under `group` at the
/// same depth (override rule: "the existing token wins").
fn materialize(group_dotted: &str, target_dotted: &str, tokens: &mut Vec<Token>) {
    let group_path = dotted_to_segments(group_dotted);
    let target_path = dotted_to_segments(target_dotted);
    let existing_paths: HashSet<Vec<String>> = tokens.iter().map(|t| t.path.clone()).collect();

    let inherited: Vec<Token> = tokens
        .iter()
        .filter(|t| starts_with(&t.path, &target_path) && t.path.len() > target_path.len())
        .map(|t| {
            let mut new_path = group_path.clone();
            new_path.extend_from_slice(&t.path[target_path.len()..]);
            let mut clone = t.clone();
            clone.name = new_path.join("-");
            clone.reference = reference_for_path(&new_path);
            clone.path = new_path;
            clone.is_resolved = false;
            clone.resolved_value = None;
            clone.resolution_chain = Vec::new();
            clone
        })
        .filter(|t| !existing_paths.contains(&t.path))
        .collect();

    tokens.extend(inherited);
}

fn starts_with(path: &[String], prefix: &[String]) -> bool {
    path.len() >= prefix.len() && path[..prefix.len()] == prefix[..]
}
