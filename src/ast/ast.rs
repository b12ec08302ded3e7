use std::fmt::{self, Display, Formatter};

use super::{
    expressions::{Assignment, Atom, FunctionCall, Sum, Variable},
    statements::{FunctionDef, Module, Parameter, Return},
};

/// Node Types
///
/// The tag of every node. It is fixed by the `Node` variant, so it cannot
/// drift from the data the node carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    Module,
    Atom,
    Variable,
    Parameter,
    Sum,
    ReturnStatement,
    FunctionDef,
    FunctionCall,
    Assignment,
}

impl Display for NodeType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeType::Module => "MODULE",
            NodeType::Atom => "ATOM",
            NodeType::Variable => "VARIABLE",
            NodeType::Parameter => "PARAMETER",
            NodeType::Sum => "SUM",
            NodeType::ReturnStatement => "RETURN_STATEMENT",
            NodeType::FunctionDef => "FUNCTION_DEF",
            NodeType::FunctionCall => "FUNCTION_CALL",
            NodeType::Assignment => "ASSIGNMENT",
        };
        write!(f, "{}", name)
    }
}

/// AST Node Trait
///
/// Implemented by every concrete node kind.
pub trait AstNode {
    /// Returns the tag of the node.
    fn node_type(&self) -> NodeType;
    /// Returns the node's name, if one was set.
    fn name(&self) -> Option<&str>;
    /// Whether every field this node kind requires has been filled in.
    fn is_complete(&self) -> bool;
    /// Writes this node's own fields for the debug rendering, each prefixed
    /// with `, `.
    fn render_fields(&self, f: &mut Formatter<'_>) -> fmt::Result;
}

/// A node of the abstract syntax tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Module(Module),
    Atom(Atom),
    Variable(Variable),
    Parameter(Parameter),
    Sum(Sum),
    Return(Return),
    FunctionDef(FunctionDef),
    FunctionCall(FunctionCall),
    Assignment(Assignment),
}

macro_rules! dispatch {
    ($node:expr, $inner:ident => $body:expr) => {
        match $node {
            Node::Module($inner) => $body,
            Node::Atom($inner) => $body,
            Node::Variable($inner) => $body,
            Node::Parameter($inner) => $body,
            Node::Sum($inner) => $body,
            Node::Return($inner) => $body,
            Node::FunctionDef($inner) => $body,
            Node::FunctionCall($inner) => $body,
            Node::Assignment($inner) => $body,
        }
    };
}

impl Node {
    /// Name of the concrete node kind, used by the debug rendering.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Module(_) => "Module",
            Node::Atom(_) => "Atom",
            Node::Variable(_) => "Variable",
            Node::Parameter(_) => "Parameter",
            Node::Sum(_) => "Sum",
            Node::Return(_) => "Return",
            Node::FunctionDef(_) => "FunctionDef",
            Node::FunctionCall(_) => "FunctionCall",
            Node::Assignment(_) => "Assignment",
        }
    }

    /// Checks this node and every node below it.
    pub fn is_complete_deep(&self) -> bool {
        let typed_parts_complete = match self {
            Node::FunctionDef(def) => def.parameters.iter().all(|p| p.is_complete()),
            Node::Assignment(assignment) => assignment.left.iter().all(|v| v.is_complete()),
            _ => true,
        };

        self.is_complete()
            && typed_parts_complete
            && self.children().iter().all(|child| child.is_complete_deep())
    }

    /// The expression and statement nodes owned directly by this node.
    pub fn children(&self) -> Vec<&Node> {
        match self {
            Node::Module(module) => module.statements.iter().collect(),
            Node::Atom(_) | Node::Variable(_) => vec![],
            Node::Parameter(parameter) => parameter.default_value.iter().map(|n| &**n).collect(),
            Node::Sum(sum) => sum.left.iter().chain(sum.right.iter()).map(|n| &**n).collect(),
            Node::Return(ret) => ret.expressions.iter().collect(),
            Node::FunctionDef(def) => def.statements.iter().collect(),
            Node::FunctionCall(call) => call.arguments.iter().collect(),
            Node::Assignment(assignment) => assignment.right.iter().map(|n| &**n).collect(),
        }
    }
}

impl AstNode for Node {
    fn node_type(&self) -> NodeType {
        dispatch!(self, inner => inner.node_type())
    }
    fn name(&self) -> Option<&str> {
        dispatch!(self, inner => inner.name())
    }
    fn is_complete(&self) -> bool {
        dispatch!(self, inner => inner.is_complete())
    }
    fn render_fields(&self, f: &mut Formatter<'_>) -> fmt::Result {
        dispatch!(self, inner => inner.render_fields(f))
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}(type = '{}', name = '{}'",
            self.kind_name(),
            self.node_type(),
            self.name().unwrap_or("")
        )?;
        self.render_fields(f)?;
        write!(f, ")")
    }
}

/// Writes `, label = [a, b, ...]`.
pub(crate) fn render_list<'a>(
    f: &mut Formatter<'_>,
    label: &str,
    nodes: impl IntoIterator<Item = &'a Node>,
) -> fmt::Result {
    write!(f, ", {} = [", label)?;
    for (i, node) in nodes.into_iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", node)?;
    }
    write!(f, "]")
}

/// Writes `, label = node` or `, label = None`.
pub(crate) fn render_optional(
    f: &mut Formatter<'_>,
    label: &str,
    node: Option<&Node>,
) -> fmt::Result {
    match node {
        Some(node) => write!(f, ", {} = {}", label, node),
        None => write!(f, ", {} = None", label),
    }
}

macro_rules! impl_from_for_node {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for Node {
                fn from(inner: $variant) -> Self {
                    Node::$variant(inner)
                }
            }
        )*
    };
}

impl_from_for_node!(
    Module,
    Atom,
    Variable,
    Parameter,
    Sum,
    Return,
    FunctionDef,
    FunctionCall,
    Assignment
);
