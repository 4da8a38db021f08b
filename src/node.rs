//! Arena-backed markup tree.
//!
//! Nodes live in a `Vec` and refer to each other by [`NodeId`]. Each node
//! keeps its first and last child plus the next sibling, so children form a
//! singly linked list and appending is constant time. The parent link lets
//! the parser step back out of a surrounding tag.

/// Index of a node inside its [`Tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in the arena; also its debugging identity.
    #[must_use]
    pub fn index(self) -> usize { self.0 }
}

/// Replacement text for `[hr]`.
pub const RULE: &str = "\n***\n";
/// Replacement text for `[To:...]`.
pub const DEAR: &str = "Dear: ";
/// Replacement text for `[rp ...]`.
pub const REPLY: &str = "Reply: ";

/// Map a self-closed tag to its replacement.
///
/// The lookup tests whether the raw tag contains `hr`, `To` or `rp`, in that
/// order. Unsupported tags map to the empty string.
#[must_use]
pub fn substitute_self_closed(tag: &str) -> &'static str {
    [("hr", RULE), ("To", DEAR), ("rp", REPLY)]
        .into_iter()
        .find(|(needle, _)| tag.contains(*needle))
        .map_or("", |(_, replacement)| replacement)
}

/// Variant-specific part of a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Literal text, or the root when its text is empty.
    Plain,
    /// A standalone tag already replaced by its substitution.
    SelfClosed,
    /// An opening tag with its children and, once seen, the closing tag.
    Surrounded {
        open_tag: String,
        close_tag: Option<String>,
    },
}

impl NodeKind {
    /// Markdown written before and after this node's children.
    #[must_use]
    pub fn delimiters(&self) -> (&'static str, &'static str) {
        match self {
            Self::Plain | Self::SelfClosed => ("", ""),
            Self::Surrounded { open_tag, .. } => match open_tag.as_str() {
                "[info]" => ("***\n", "\n***"),
                "[code]" => ("```\n", "\n```"),
                "[title]" => ("**", "**"),
                "[qt]" => ("> ", " \n\n "),
                _ => ("", ""),
            },
        }
    }

    /// Render already-merged children into this node's Markdown syntax.
    #[must_use]
    pub fn merge_child_node(&self, children: &str) -> String {
        let (before, after) = self.delimiters();
        format!("{before}{children}{after}")
    }
}

/// One element of the markup tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    /// Literal payload or substitution, emitted after the children.
    pub text: String,
    pub parent: Option<NodeId>,
    pub first_child: Option<NodeId>,
    pub last_child: Option<NodeId>,
    pub next: Option<NodeId>,
}

impl Node {
    fn new(kind: NodeKind, text: String) -> Self {
        Self {
            kind,
            text,
            parent: None,
            first_child: None,
            last_child: None,
            next: None,
        }
    }
}

/// Markup tree rooted at an empty plain node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Default for Tree {
    fn default() -> Self { Self::new() }
}

impl Tree {
    /// Create a tree holding only the root.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(NodeKind::Plain, String::new())],
        }
    }

    #[must_use]
    pub fn root(&self) -> NodeId { NodeId(0) }

    /// Number of nodes, root included.
    #[must_use]
    pub fn len(&self) -> usize { self.nodes.len() }

    /// Whether the root is the only node.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.nodes.len() == 1 }

    /// Borrow a node.
    ///
    /// # Panics
    /// Panics if `id` was not produced by this tree.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &Node { &self.nodes[id.0] }

    fn node_mut(&mut self, id: NodeId) -> &mut Node { &mut self.nodes[id.0] }

    /// Append a new node as the last child of `parent`.
    pub fn append_child(&mut self, parent: NodeId, kind: NodeKind, text: String) -> NodeId {
        let id = NodeId(self.nodes.len());
        let mut node = Node::new(kind, text);
        node.parent = Some(parent);
        self.nodes.push(node);

        let last_child = self.node(parent).last_child;
        match last_child {
            Some(last) => self.node_mut(last).next = Some(id),
            None => self.node_mut(parent).first_child = Some(id),
        }
        self.node_mut(parent).last_child = Some(id);
        id
    }

    /// Append literal text under `parent`.
    pub fn append_plain(&mut self, parent: NodeId, text: &str) -> NodeId {
        self.append_child(parent, NodeKind::Plain, text.to_string())
    }

    /// Append a self-closed tag under `parent`, substituting it immediately.
    pub fn append_self_closed(&mut self, parent: NodeId, tag: &str) -> NodeId {
        let text = substitute_self_closed(tag).to_string();
        self.append_child(parent, NodeKind::SelfClosed, text)
    }

    /// Append an unclosed surrounding tag under `parent`.
    pub fn append_surrounded(&mut self, parent: NodeId, open_tag: &str) -> NodeId {
        let kind = NodeKind::Surrounded {
            open_tag: open_tag.to_string(),
            close_tag: None,
        };
        self.append_child(parent, kind, String::new())
    }

    /// Record the closing tag of a surrounded node.
    ///
    /// Returns `false` and leaves the node untouched for other variants.
    pub fn close(&mut self, id: NodeId, tag: &str) -> bool {
        match &mut self.node_mut(id).kind {
            NodeKind::Surrounded { close_tag, .. } => {
                *close_tag = Some(tag.to_string());
                true
            }
            NodeKind::Plain | NodeKind::SelfClosed => false,
        }
    }

    /// Iterate over the direct children of `id` in order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            tree: self,
            next: self.node(id).first_child,
        }
    }

    /// Indented outline of the tree, one node per line.
    ///
    /// # Examples
    ///
    /// ```
    /// let tree = cwmark::parse_tree("[title]Hi[/title]").unwrap().unwrap();
    /// assert_eq!(
    ///     tree.dump(),
    ///     "#0 plain \"\"\n  #1 surrounded [title]..[/title]\n    #2 plain \"Hi\"\n"
    /// );
    /// ```
    #[must_use]
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.dump_node(self.root(), 0, &mut out);
        out
    }

    fn dump_node(&self, id: NodeId, depth: usize, out: &mut String) {
        let mut stack = vec![(id, depth)];
        while let Some((id, depth)) = stack.pop() {
            let node = self.node(id);
            out.push_str(&"  ".repeat(depth));
            out.push_str(&match &node.kind {
                NodeKind::Plain => format!("#{} plain {:?}\n", id.0, node.text),
                NodeKind::SelfClosed => format!("#{} self-closed {:?}\n", id.0, node.text),
                NodeKind::Surrounded {
                    open_tag,
                    close_tag,
                } => format!(
                    "#{} surrounded {open_tag}..{}\n",
                    id.0,
                    close_tag.as_deref().unwrap_or("(unclosed)")
                ),
            });
            let children: Vec<NodeId> = self.children(id).collect();
            stack.extend(children.into_iter().rev().map(|child| (child, depth + 1)));
        }
    }
}

/// Iterator over a node's children, following `next` links.
pub struct Children<'a> {
    tree: &'a Tree,
    next: Option<NodeId>,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.next?;
        self.next = self.tree.node(id).next;
        Some(id)
    }
}
