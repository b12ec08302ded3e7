use std::fmt::{self, Display, Formatter};

pub type NodeId = usize;

/// A node of a generic parse tree.
///
/// Rule nodes carry the name of the grammar rule that produced them;
/// terminals carry only their text.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    pub text: String,
    pub rule: Option<String>,
    pub children: Vec<NodeId>,
}

impl TreeNode {
    pub fn is_terminal(&self) -> bool {
        self.children.is_empty()
    }

    pub fn is_rule(&self) -> bool {
        self.rule.is_some()
    }
}

/// A node of a parse tree produced outside this crate, e.g. by a
/// grammar-driven parser generator.
pub trait ExternalNode {
    /// Source text covered by the node.
    fn text(&self) -> String;
    fn children(&self) -> Vec<&Self>;
    /// Name of the producing grammar rule, `None` for terminals.
    fn rule_name(&self) -> Option<String>;
}

/// Receives enter/exit events for rule nodes during a depth-first walk.
/// Terminals produce no events.
pub trait TreeListener {
    type Error;

    fn enter_rule(&mut self, node: &TreeNode) -> Result<(), Self::Error>;
    fn exit_rule(&mut self, node: &TreeNode) -> Result<(), Self::Error>;
}

/// Owned parse tree. Nodes live in an arena and refer to their children by
/// index, so restructuring passes build a fresh tree instead of rewiring a
/// borrowed one.
#[derive(Debug, Clone, Default)]
pub struct ParseTree {
    nodes: Vec<TreeNode>,
    root: Option<NodeId>,
}

impl ParseTree {
    pub fn new() -> Self {
        ParseTree::default()
    }

    /// A single terminal node.
    pub fn terminal(text: impl Into<String>) -> Self {
        let mut tree = ParseTree::new();
        let id = tree.push(TreeNode {
            text: text.into(),
            rule: None,
            children: vec![],
        });
        tree.root = Some(id);
        tree
    }

    /// A rule node over the given subtrees. Its text is the concatenated
    /// text of the children, as grammar tools report it.
    ///
    /// The children's arenas are moved in, not copied, so nesting `rule`
    /// calls stays linear in the size of the tree.
    pub fn rule(name: impl Into<String>, children: Vec<ParseTree>) -> Self {
        let mut tree = ParseTree::new();
        let mut text = String::new();
        let mut ids = vec![];

        for child in children {
            if let Some(root) = child.root {
                text.push_str(&child.nodes[root].text);
                ids.push(tree.absorb(child.nodes) + root);
            }
        }

        let id = tree.push(TreeNode {
            text,
            rule: Some(name.into()),
            children: ids,
        });
        tree.root = Some(id);
        tree
    }

    /// Copies an external tree into an owned arena.
    pub fn from_external<N: ExternalNode>(root: &N) -> Self {
        fn copy<N: ExternalNode>(tree: &mut ParseTree, node: &N) -> NodeId {
            let children = node
                .children()
                .into_iter()
                .map(|child| copy(tree, child))
                .collect();

            tree.push(TreeNode {
                text: node.text(),
                rule: node.rule_name(),
                children,
            })
        }

        let mut tree = ParseTree::new();
        let id = copy(&mut tree, root);
        tree.root = Some(id);
        tree
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub(crate) fn set_root(&mut self, root: Option<NodeId>) {
        self.root = root;
    }

    pub fn node(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id]
    }

    pub fn children(&self, id: NodeId) -> impl Iterator<Item = &TreeNode> + '_ {
        self.nodes[id].children.iter().map(move |&child| &self.nodes[child])
    }

    /// Number of nodes reachable from the root.
    pub fn len(&self) -> usize {
        self.root.map_or(0, |root| self.count(root))
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub(crate) fn push(&mut self, node: TreeNode) -> NodeId {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    fn count(&self, id: NodeId) -> usize {
        1 + self.nodes[id]
            .children
            .iter()
            .map(|&child| self.count(child))
            .sum::<usize>()
    }

    /// Appends another arena, shifting its child links. Returns the offset
    /// its ids were moved by.
    fn absorb(&mut self, nodes: Vec<TreeNode>) -> NodeId {
        let offset = self.nodes.len();
        self.nodes.extend(nodes.into_iter().map(|mut node| {
            for child in &mut node.children {
                *child += offset;
            }
            node
        }));
        offset
    }

    /// Walks the tree depth-first, reporting rule nodes to `listener`.
    ///
    /// Uses an explicit work stack, so the walk itself does not recurse.
    /// Construction, `len`, comparison, display and the normalization passes
    /// do recurse, so their depth is bounded by the call stack. Stops at the
    /// first listener error.
    pub fn walk<L: TreeListener>(&self, listener: &mut L) -> Result<(), L::Error> {
        let Some(root) = self.root else {
            return Ok(());
        };

        // (node, exiting)
        let mut work = vec![(root, false)];
        while let Some((id, exiting)) = work.pop() {
            let node = &self.nodes[id];

            if exiting {
                listener.exit_rule(node)?;
                continue;
            }

            if node.is_rule() {
                listener.enter_rule(node)?;
                work.push((id, true));
            }
            work.extend(node.children.iter().rev().map(|&child| (child, false)));
        }

        Ok(())
    }

    fn fmt_node(&self, f: &mut Formatter<'_>, id: NodeId, depth: usize) -> fmt::Result {
        let node = &self.nodes[id];
        let indent = depth * 2;

        match &node.rule {
            Some(rule) => writeln!(f, "{:indent$}{}", "", rule)?,
            None => writeln!(f, "{:indent$}{:?}", "", node.text)?,
        }

        for &child in &node.children {
            self.fmt_node(f, child, depth + 1)?;
        }
        Ok(())
    }

    fn eq_node(&self, id: NodeId, other: &ParseTree, other_id: NodeId) -> bool {
        let a = &self.nodes[id];
        let b = &other.nodes[other_id];

        a.text == b.text
            && a.rule == b.rule
            && a.children.len() == b.children.len()
            && a.children
                .iter()
                .zip(&b.children)
                .all(|(&x, &y)| self.eq_node(x, other, y))
    }
}

/// Structural equality from the roots. Arena layout and unreachable nodes do
/// not matter.
impl PartialEq for ParseTree {
    fn eq(&self, other: &Self) -> bool {
        match (self.root, other.root) {
            (Some(a), Some(b)) => self.eq_node(a, other, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl Display for ParseTree {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.root {
            Some(root) => self.fmt_node(f, root, 0),
            None => Ok(()),
        }
    }
}
