//! Flattening a markup tree into Markdown.

use crate::node::{NodeId, Tree};

impl Tree {
    /// Render the whole tree as Markdown.
    ///
    /// # Examples
    ///
    /// ```
    /// use cwmark::node::Tree;
    ///
    /// let mut tree = Tree::new();
    /// let root = tree.root();
    /// let title = tree.append_surrounded(root, "[title]");
    /// tree.append_plain(title, "Hello");
    /// assert_eq!(tree.merge(), "**Hello**");
    /// ```
    #[must_use]
    pub fn merge(&self) -> String { self.merge_node(self.root()) }

    /// Render `id` and its subtree.
    ///
    /// Each node writes the opening half of its
    /// [`delimiters`](crate::node::NodeKind::delimiters), then its children,
    /// then the closing half followed by its own text. The walk keeps its own
    /// stack, so nesting depth is bounded only by memory.
    #[must_use]
    pub fn merge_node(&self, id: NodeId) -> String {
        let mut out = String::new();
        let mut stack = vec![self.enter(id, &mut out)];
        while let Some((current, pending)) = stack.last_mut() {
            if let Some(child) = *pending {
                *pending = self.node(child).next;
                stack.push(self.enter(child, &mut out));
                continue;
            }
            let node = self.node(*current);
            out.push_str(node.kind.delimiters().1);
            out.push_str(&node.text);
            stack.pop();
        }
        out
    }

    /// Open `id` in `out` and return its frame: the node and its next child.
    fn enter(&self, id: NodeId, out: &mut String) -> (NodeId, Option<NodeId>) {
        let node = self.node(id);
        out.push_str(node.kind.delimiters().0);
        (id, node.first_child)
    }
}
