use super::tree::{NodeId, ParseTree, TreeNode};

/// Prunes empty nodes, then collapses single-child chains.
pub fn normalize(tree: &ParseTree) -> ParseTree {
    let pruned = prune_empty(tree);
    let simplified = simplify_lineages(&pruned);

    tracing::debug!(
        "normalized parse tree from {} to {} node(s)",
        tree.len(),
        simplified.len()
    );
    simplified
}

/// Drops every node whose trimmed text is empty and none of whose children
/// survived. Such nodes come from rules that matched nothing.
///
/// Returns an empty tree when the root itself is dropped.
pub fn prune_empty(tree: &ParseTree) -> ParseTree {
    let mut pruned = ParseTree::new();
    let root = tree
        .root()
        .and_then(|root| prune_node(tree, root, &mut pruned));

    pruned.set_root(root);
    pruned
}

fn prune_node(tree: &ParseTree, id: NodeId, out: &mut ParseTree) -> Option<NodeId> {
    let node = tree.node(id);
    let children: Vec<NodeId> = node
        .children
        .iter()
        .filter_map(|&child| prune_node(tree, child, out))
        .collect();

    if node.text.trim().is_empty() && children.is_empty() {
        return None;
    }

    Some(out.push(TreeNode {
        text: node.text.clone(),
        rule: node.rule.clone(),
        children,
    }))
}

/// Collapses chains of single-child rule nodes.
///
/// In a chain, the first node is kept, as is the direct parent of a
/// terminal. Everything in between is replaced by its simplified child.
/// Branching nodes are always kept, and each branch starts a new chain.
/// Running it on its own output changes nothing.
pub fn simplify_lineages(tree: &ParseTree) -> ParseTree {
    let mut simplified = ParseTree::new();
    let root = tree
        .root()
        .map(|root| simplify_node(tree, root, true, &mut simplified));

    simplified.set_root(root);
    simplified
}

fn simplify_node(
    tree: &ParseTree,
    id: NodeId,
    keep_first_single_child: bool,
    out: &mut ParseTree,
) -> NodeId {
    let node = tree.node(id);

    let children = match node.children.as_slice() {
        [] => return out.push(node.clone()),
        [only] => {
            let child = simplify_node(tree, *only, false, out);

            if !keep_first_single_child && !out.node(child).is_terminal() {
                return child;
            }
            vec![child]
        }
        many => many
            .iter()
            .map(|&child| simplify_node(tree, child, true, out))
            .collect(),
    };

    out.push(TreeNode {
        text: node.text.clone(),
        rule: node.rule.clone(),
        children,
    })
}
