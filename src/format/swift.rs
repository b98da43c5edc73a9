//! Swift formatter: nested enums mirroring the token path
//! tree, `CGFloat` dimensions, `Color(.sRGB, red:, green:, blue:,
//! opacity:)` colors, 4-space indent.

use crate::format::case::{to_camel_case, to_pascal_case};
use crate::format::common::{format_header, sort_tokens, CommentStyle};
use crate::options::FormatOptions;
use crate::token::{Token, TypeKind};
use std::collections::BTreeMap;

enum Node<'a> {
    Leaf(&'a Token),
    Group(BTreeMap<String, Node<'a>>),
}

pub fn format(tokens: &[Token], opts: &FormatOptions) -> String {
    let sorted = sort_tokens(tokens);
    let mut root: BTreeMap<String, Node> = BTreeMap::new();
    for t in &sorted {
        insert(&mut root, &t.path, t);
    }

    let mut out = format_header(opts.header.as_deref(), CommentStyle::SwiftLine);
    out.push_str("import Foundation\n\n");
    out.push_str("enum Tokens {\n");
    render_group(&root, 1, &mut out);
    out.push_str("}\n");
    out
}

fn insert<'a>(root: &mut BTreeMap<String, Node<'a>>, path: &[String], t: &'a Token) {
    let mut current = root;
    for (i, seg) in path.iter().enumerate() {
        if i == path.len() - 1 {
            current.insert(seg.clone(), Node::Leaf(t));
            return;
        }
        let entry = current
            .entry(seg.clone())
            .or_insert_with(|| Node::Group(BTreeMap::new()));
        current = match entry {
            Node::Group(map) => map,
            Node::Leaf(_) => {
                *entry = Node::Group(BTreeMap::new());
                match entry {
                    Node::Group(map) => map,
                    Node::Leaf(_) => unreachable!(),
                }
            }
        };
    }
}

fn render_group(group: &BTreeMap<String, Node>, depth: usize, out: &mut String) {
    let indent = "    ".repeat(depth);
    for (name, node) in group {
        match node {
            Node::Leaf(t) => out.push_str(&leaf_declaration(name, t, &indent)),
            Node::Group(children) => {
                out.push_str(&format!("{indent}enum {} {{\n", to_pascal_case(name)));
                render_group(children, depth + 1, out);
                out.push_str(&format!("{indent}}}\n"));
            }
        }
    }
}

fn leaf_declaration(name: &str, t: &Token, indent: &str) -> String {
    let member = to_camel_case(name);
    match t.type_kind() {
        TypeKind::Color => {
            let display = t.display_value();
            match csscolorparser::parse(&display) {
                Ok(c) => {
                    let [r, g, b, a] = c.to_array();
                    format!(
                        "{indent}static let {member} = Color(.sRGB, red: {}, green: {}, blue: {}, opacity: {})\n",
                        round4(r), round4(g), round4(b), round4(a)
                    )
                }
                Err(_) => format!("{indent}static let {member} = \"{display}\"\n"),
            }
        }
        TypeKind::Dimension => {
            let display = t.display_value();
            match numeric_prefix(&display) {
                Some(n) => format!("{indent}static let {member}: CGFloat = {}\n", round4(n)),
                None => format!("{indent}static let {member} = \"{display}\"\n"),
            }
        }
        _ => format!("{indent}static let {member} = \"{}\"\n", t.display_value()),
    }
}

fn round4(x: f64) -> String {
    let r = (x * 10000.0).round() / 10000.0;
    let s = format!("{r}");
    if s.contains('.') {
        s
    } else {
        format!("{s}.0")
    }
}

fn numeric_prefix(s: &str) -> Option<f64> {
    let end = s
        .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-'))
        .unwrap_or(s.len());
    s[..end].parse::<f64>().ok()
}
