//! Generic string-keyed dependency graph: lexicographic-DFS cycle
//! detection plus dependency-first (post-order) processing order.
//!
//! Shared by the group-extension resolver and the alias resolver, both of
//! which want "the first cycle as an ordered node list" rather than a
//! full SCC decomposition: `petgraph::algo::kosaraju_scc` reports cyclic
//! *membership*, not one concrete cycle path. A `petgraph::graph::DiGraph`
//! backs node/edge storage; a DFS recursion stack on top of it
//! reconstructs the exact cycle path error messages need to name.

use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

#[derive(PartialEq, Clone, Copy)]
enum State {
    Visiting,
    Done,
}

pub struct DepGraph {
    graph: DiGraph<String, ()>,
    index_of: HashMap<String, NodeIndex>,
    /// Node names in lexicographic order, for deterministic traversal.
    sorted_nodes: Vec<NodeIndex>,
}

impl DepGraph {
    /// `nodes` need not include every node referenced by `edges`; any
    /// edge endpoint not already present is added as its own node.
    pub fn new(nodes: Vec<String>, edges: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut graph = DiGraph::new();
        let mut index_of: HashMap<String, NodeIndex> = HashMap::new();

        let mut ensure = |graph: &mut DiGraph<String, ()>,
                           index_of: &mut HashMap<String, NodeIndex>,
                           name: &str| -> NodeIndex {
            if let Some(&idx) = index_of.get(name) {
                idx
            } else {
                let idx = graph.add_node(name.to_string());
                index_of.insert(name.to_string(), idx);
                idx
            }
        };

        for n in &nodes {
            ensure(&mut graph, &mut index_of, n);
        }

        // Edges are inserted in (from, to) lexicographic order so that
        // per-node neighbor iteration (insertion order in petgraph) is
        // deterministic without a second sort pass.
        let mut edges: Vec<(String, String)> = edges.into_iter().collect();
        edges.sort();
        for (from, to) in edges {
            let from_idx = ensure(&mut graph, &mut index_of, &from);
            let to_idx = ensure(&mut graph, &mut index_of, &to);
            graph.add_edge(from_idx, to_idx, ());
        }

        let mut sorted_nodes: Vec<NodeIndex> = graph.node_indices().collect();
        sorted_nodes.sort_by_key(|&idx| graph[idx].clone());

        DepGraph {
            graph,
            index_of,
            sorted_nodes,
        }
    }

    /// DFS in lexicographic node order. On success, returns a dependency-
    /// first post-order traversal (every node's out-edges are fully
    /// visited before the node itself is appended). On the first cycle
    /// found, returns it as an ordered node list ending with the repeated
    /// node (e.g. `["a", "c", "b", "a"]`).
    pub fn find_cycle_or_order(&self) -> Result<Vec<String>, Vec<String>> {
        let mut state: HashMap<NodeIndex, State> = HashMap::new();
        let mut stack: Vec<NodeIndex> = Vec::new();
        let mut post_order: Vec<String> = Vec::new();

        for &n in &self.sorted_nodes {
            if !state.contains_key(&n) {
                if let Some(cycle) = self.visit(n, &mut state, &mut stack, &mut post_order) {
                    return Err(cycle);
                }
            }
        }
        Ok(post_order)
    }

    fn visit(
        &self,
        node: NodeIndex,
        state: &mut HashMap<NodeIndex, State>,
        stack: &mut Vec<NodeIndex>,
        post_order: &mut Vec<String>,
    ) -> Option<Vec<String>> {
        state.insert(node, State::Visiting);
        stack.push(node);

        for child in self.graph.neighbors(node) {
            match state.get(&child) {
                Some(State::Visiting) => {
                    let pos = stack.iter().position(|&n| n == child).unwrap();
                    let mut cycle: Vec<String> =
                        stack[pos..].iter().map(|&i| self.graph[i].clone()).collect();
                    cycle.push(self.graph[child].clone());
                    return Some(cycle);
                }
                Some(State::Done) => continue,
                None => {
                    if let Some(cycle) = self.visit(child, state, stack, post_order) {
                        return Some(cycle);
                    }
                }
            }
        }

        stack.pop();
        state.insert(node, State::Done);
        post_order.push(self.graph[node].clone());
        None
    }

    #[cfg(test)]
    fn node_count(&self) -> usize {
        self.index_of.len()
    }
}
