//! Graphviz DOT serialization
//!
//! Emits one declaration per node and one edge per parent/child link, both
//! in registry order:
//!
//! ```text
//! digraph "ast" {
//!   node [fontname="Helvetica",fontsize=11];
//!   edge [fontname="Helvetica",fontsize=10];
//!   12 [label="expression: 1+2"];
//!   13 [label="number: 1"];
//!   12 -> 13;
//! }
//! ```

use std::fmt::{self, Write};

use crate::config::DotConfig;
use crate::tree::Tree;

impl Tree {
    /// Render this tree as DOT with default settings.
    pub fn to_dot(&self) -> String {
        to_dot(self)
    }
}

/// Render `tree` as DOT with default settings.
pub fn to_dot(tree: &Tree) -> String {
    to_dot_with(tree, &DotConfig::default())
}

/// Render `tree` as DOT.
pub fn to_dot_with(tree: &Tree, config: &DotConfig) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_dot(tree, config, &mut out);
    out
}

/// Write `tree` as DOT into `out`.
pub fn write_dot<W: Write>(tree: &Tree, config: &DotConfig, out: &mut W) -> fmt::Result {
    let font = escape_label(&config.font_name);
    writeln!(out, "digraph \"{}\" {{", escape_label(&config.graph_name))?;
    writeln!(
        out,
        "  node [fontname=\"{}\",fontsize={}];",
        font, config.node_font_size
    )?;
    writeln!(
        out,
        "  edge [fontname=\"{}\",fontsize={}];",
        font, config.edge_font_size
    )?;

    for node in tree.nodes() {
        writeln!(
            out,
            "  {} [label=\"{}: {}\"];",
            node.id(),
            escape_label(node.rule()),
            escape_label(node.label())
        )?;
    }
    for node in tree.nodes() {
        for child in node.children() {
            writeln!(out, "  {} -> {};", node.id(), child)?;
        }
    }

    writeln!(out, "}}")
}

/// Escape text for use inside a double-quoted DOT string.
///
/// Line breaks become centered `\n` breaks. A `\r\n` pair or a lone `\r`
/// is a single break, never DOT's right-justify `\r`.
pub fn escape_label(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => {
                chars.next_if_eq(&'\n');
                escaped.push_str("\\n");
            }
            _ => escaped.push(c),
        }
    }
    escaped
}
