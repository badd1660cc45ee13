//! Indented outline rendering

use std::fmt;

use super::Tree;

impl fmt::Display for Tree {
    /// One node per line, children indented two spaces under their parent:
    ///
    /// ```text
    /// expression "1+2"
    ///   number "1"
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // (node, depth)
        let mut stack: Vec<_> = self.root.into_iter().map(|root| (root, 0)).collect();
        while let Some((id, depth)) = stack.pop() {
            let Some(node) = self.node(id) else {
                continue;
            };
            let indent = depth * 2;
            writeln!(f, "{:indent$}{} {:?}", "", node.rule(), node.label())?;
            stack.extend(node.children().iter().rev().map(|&child| (child, depth + 1)));
        }
        Ok(())
    }
}
