//! Unit tests for generic parse trees: construction, walking, rendering and
//! both normalization passes.

use proptest::prelude::*;

use super::{
    normalize::{normalize, prune_empty, simplify_lineages},
    tree::{ExternalNode, ParseTree, TreeListener, TreeNode},
};

fn rule(name: &str, children: Vec<ParseTree>) -> ParseTree {
    ParseTree::rule(name, children)
}

fn leaf(text: &str) -> ParseTree {
    ParseTree::terminal(text)
}

/// Non-blank terminal texts in source order.
fn terminal_texts(tree: &ParseTree) -> Vec<String> {
    fn collect(tree: &ParseTree, id: usize, out: &mut Vec<String>) {
        let node = tree.node(id);
        if node.is_terminal() && !node.text.trim().is_empty() {
            out.push(node.text.clone());
        }
        for &child in &node.children {
            collect(tree, child, out);
        }
    }

    let mut out = vec![];
    if let Some(root) = tree.root() {
        collect(tree, root, &mut out);
    }
    out
}

#[test]
fn test_rule_text_concatenates_children() {
    let tree = rule("sum", vec![leaf("1"), leaf("+"), leaf("2")]);
    let root = tree.root().unwrap();

    assert_eq!(tree.node(root).text, "1+2");
    assert_eq!(tree.node(root).rule.as_deref(), Some("sum"));
    assert_eq!(tree.len(), 4);
    assert_eq!(
        tree.children(root).map(|n| n.text.as_str()).collect::<Vec<_>>(),
        vec!["1", "+", "2"]
    );
}

#[test]
fn test_rule_moves_child_arenas() {
    let left = rule("call", vec![rule("atom", vec![leaf("f")]), leaf("()")]);
    let right = rule("atom", vec![leaf("x")]);
    let tree = rule("args", vec![left, leaf(","), right]);

    let root = tree.root().unwrap();
    assert_eq!(root, tree.len() - 1);
    assert_eq!(tree.node(root).text, "f(),x");
    assert_eq!(
        tree.to_string(),
        "args\n  call\n    atom\n      \"f\"\n    \"()\"\n  \",\"\n  atom\n    \"x\"\n"
    );
}

#[test]
fn test_deeply_nested_rules() {
    let depth = 2_000;
    let tree = (0..depth).fold(leaf("x"), |inner, _| rule("expr", vec![inner]));

    assert_eq!(tree.len(), depth + 1);
    assert_eq!(tree.root(), Some(depth));
    assert_eq!(tree.node(depth).text, "x");

    let mut recorder = Recorder::default();
    tree.walk(&mut recorder).unwrap();
    assert_eq!(recorder.events.len(), 2 * depth);
}

#[test]
fn test_collapse_chain_keeps_parent_of_terminal() {
    // root -> A -> B -> "x"
    let tree = rule("root", vec![rule("A", vec![rule("B", vec![leaf("x")])])]);

    let simplified = simplify_lineages(&tree);

    assert_eq!(simplified, rule("root", vec![rule("B", vec![leaf("x")])]));
}

#[test]
fn test_collapse_long_chain() {
    let tree = rule(
        "root",
        vec![rule(
            "A",
            vec![rule("B", vec![rule("C", vec![leaf("x")])])],
        )],
    );

    assert_eq!(
        simplify_lineages(&tree),
        rule("root", vec![rule("C", vec![leaf("x")])])
    );
}

#[test]
fn test_chain_ending_in_branch_collapses_to_branch() {
    let tree = rule(
        "root",
        vec![rule(
            "A",
            vec![rule("B", vec![rule("D", vec![leaf("x"), leaf("y")])])],
        )],
    );

    assert_eq!(
        simplify_lineages(&tree),
        rule("root", vec![rule("D", vec![leaf("x"), leaf("y")])])
    );
}

#[test]
fn test_branches_start_new_lineages() {
    let tree = rule(
        "root",
        vec![
            rule("A", vec![rule("B", vec![leaf("x")])]),
            rule("C", vec![leaf("y")]),
        ],
    );

    // A is the first of its lineage, B the parent of a terminal
    assert_eq!(simplify_lineages(&tree), tree);
}

#[test]
fn test_terminal_root_is_unchanged() {
    let tree = leaf("x");
    assert_eq!(simplify_lineages(&tree), tree);
}

#[test]
fn test_prune_epsilon_rules() {
    let tree = rule(
        "statement",
        vec![rule("decorators", vec![]), leaf("x"), leaf("  ")],
    );

    // rule text is fixed at construction, so compare the outlines
    assert_eq!(
        prune_empty(&tree).to_string(),
        rule("statement", vec![leaf("x")]).to_string()
    );
}

#[test]
fn test_prune_nested_empty_rules() {
    let tree = rule(
        "file_input",
        vec![
            rule("statements", vec![rule("statement", vec![leaf(" ")])]),
            leaf("<EOF>"),
        ],
    );

    assert_eq!(
        prune_empty(&tree).to_string(),
        "file_input\n  \"<EOF>\"\n"
    );
}

#[test]
fn test_prune_everything() {
    let tree = rule("file_input", vec![rule("statements", vec![]), leaf("\n")]);

    let pruned = prune_empty(&tree);
    assert!(pruned.is_empty());
    assert_eq!(pruned.len(), 0);
    assert!(normalize(&tree).is_empty());
}

#[test]
fn test_normalize_runs_both_passes() {
    let tree = rule(
        "root",
        vec![rule(
            "A",
            vec![rule("B", vec![leaf("x"), rule("empty", vec![])])],
        )],
    );

    assert_eq!(
        normalize(&tree),
        rule("root", vec![rule("B", vec![leaf("x")])])
    );
}

#[test]
fn test_display_outline() {
    let tree = rule(
        "file_input",
        vec![rule("atom", vec![leaf("x")]), leaf("<EOF>")],
    );

    assert_eq!(
        tree.to_string(),
        "file_input\n  atom\n    \"x\"\n  \"<EOF>\"\n"
    );
    assert_eq!(ParseTree::new().to_string(), "");
}

struct Grammar {
    text: String,
    rule: Option<&'static str>,
    children: Vec<Grammar>,
}

impl ExternalNode for Grammar {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn children(&self) -> Vec<&Self> {
        self.children.iter().collect()
    }

    fn rule_name(&self) -> Option<String> {
        self.rule.map(String::from)
    }
}

#[test]
fn test_from_external() {
    let external = Grammar {
        text: String::from("f()"),
        rule: Some("primary"),
        children: vec![
            Grammar {
                text: String::from("f"),
                rule: None,
                children: vec![],
            },
            Grammar {
                text: String::from("()"),
                rule: Some("call"),
                children: vec![],
            },
        ],
    };

    let tree = ParseTree::from_external(&external);
    let root = tree.root().unwrap();

    assert_eq!(tree.len(), 3);
    assert_eq!(tree.node(root).text, "f()");
    assert_eq!(
        tree.children(root)
            .map(|n| n.rule.clone())
            .collect::<Vec<_>>(),
        vec![None, Some(String::from("call"))]
    );
}

#[derive(Default)]
struct Recorder {
    events: Vec<String>,
    fail_on: Option<&'static str>,
}

impl TreeListener for Recorder {
    type Error = String;

    fn enter_rule(&mut self, node: &TreeNode) -> Result<(), String> {
        let rule = node.rule.clone().unwrap_or_default();
        if self.fail_on == Some(rule.as_str()) {
            return Err(rule);
        }
        self.events.push(format!("enter {}", rule));
        Ok(())
    }

    fn exit_rule(&mut self, node: &TreeNode) -> Result<(), String> {
        self.events
            .push(format!("exit {}", node.rule.clone().unwrap_or_default()));
        Ok(())
    }
}

#[test]
fn test_walk_reports_rules_depth_first() {
    let tree = rule(
        "root",
        vec![rule("a", vec![leaf("x")]), leaf("-"), rule("b", vec![leaf("y")])],
    );

    let mut recorder = Recorder::default();
    tree.walk(&mut recorder).unwrap();

    assert_eq!(
        recorder.events,
        vec!["enter root", "enter a", "exit a", "enter b", "exit b", "exit root"]
    );
}

#[test]
fn test_walk_stops_at_first_error() {
    let tree = rule("root", vec![rule("a", vec![leaf("x")]), rule("b", vec![leaf("y")])]);

    let mut recorder = Recorder {
        fail_on: Some("b"),
        ..Default::default()
    };

    assert_eq!(tree.walk(&mut recorder), Err(String::from("b")));
    assert_eq!(recorder.events, vec!["enter root", "enter a", "exit a"]);
}

fn arb_tree() -> impl Strategy<Value = ParseTree> {
    let terminal = "[a-c ]{0,2}".prop_map(ParseTree::terminal);

    terminal.prop_recursive(5, 48, 4, |inner| {
        (
            prop::sample::select(vec!["expr", "term", "atom"]),
            prop::collection::vec(inner, 0..4),
        )
            .prop_map(|(name, children)| ParseTree::rule(name, children))
    })
}

proptest! {
    #[test]
    fn simplify_is_idempotent(tree in arb_tree()) {
        let once = simplify_lineages(&tree);
        prop_assert_eq!(simplify_lineages(&once), once);
    }

    #[test]
    fn normalize_is_idempotent(tree in arb_tree()) {
        let once = normalize(&tree);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn normalize_keeps_terminal_text(tree in arb_tree()) {
        prop_assert_eq!(terminal_texts(&normalize(&tree)), terminal_texts(&tree));
    }
}
