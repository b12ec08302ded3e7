use std::fmt::{self, Formatter};

use super::{
    ast::{render_list, render_optional, AstNode, Node, NodeType},
    types::{AtomType, DataType},
};

/// Atom
/// A raw lexeme: a literal or a bare name. Its `AtomType` is derived from the
/// text whenever the name is set.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Atom {
    name: Option<String>,
    atom_type: AtomType,
}

impl Atom {
    pub fn new(lexeme: impl Into<String>) -> Self {
        let mut atom = Atom::default();
        atom.set_name(lexeme);
        atom
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.atom_type = AtomType::classify(&name);
        self.name = Some(name);
    }

    pub fn atom_type(&self) -> AtomType {
        self.atom_type
    }
}

impl AstNode for Atom {
    fn node_type(&self) -> NodeType {
        NodeType::Atom
    }
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
    fn is_complete(&self) -> bool {
        self.name.is_some()
    }
    fn render_fields(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, ", atom_type = '{}'", self.atom_type)
    }
}

/// Variable
/// A reference to a named value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Variable {
    pub name: Option<String>,
    pub data_type: Option<DataType>,
}

impl Variable {
    pub fn named(name: impl Into<String>) -> Self {
        Variable {
            name: Some(name.into()),
            data_type: None,
        }
    }

    /// The declared type, `NONE` until one is set.
    pub fn data_type(&self) -> DataType {
        self.data_type.unwrap_or_default()
    }
}

impl AstNode for Variable {
    fn node_type(&self) -> NodeType {
        NodeType::Variable
    }
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
    fn is_complete(&self) -> bool {
        self.data_type.is_some()
    }
    fn render_fields(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, ", data_type = '{}'", self.data_type())
    }
}

/// Sum
/// A binary expression. `operator` is the operator character, `+` for a
/// plain sum.
#[derive(Debug, Clone, PartialEq)]
pub struct Sum {
    pub operator: char,
    pub left: Option<Box<Node>>,
    pub right: Option<Box<Node>>,
}

impl Default for Sum {
    fn default() -> Self {
        Sum {
            operator: '+',
            left: None,
            right: None,
        }
    }
}

impl Sum {
    pub fn new(operator: char, left: Node, right: Node) -> Self {
        Sum {
            operator,
            left: Some(Box::new(left)),
            right: Some(Box::new(right)),
        }
    }
}

impl AstNode for Sum {
    fn node_type(&self) -> NodeType {
        NodeType::Sum
    }
    fn name(&self) -> Option<&str> {
        None
    }
    fn is_complete(&self) -> bool {
        self.left.is_some() && self.right.is_some()
    }
    fn render_fields(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, ", operator = '{}'", self.operator)?;
        render_optional(f, "left", self.left.as_deref())?;
        render_optional(f, "right", self.right.as_deref())
    }
}

/// Function Call
/// A call of the function `name` with ordered arguments.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FunctionCall {
    pub name: Option<String>,
    pub arguments: Vec<Node>,
}

impl AstNode for FunctionCall {
    fn node_type(&self) -> NodeType {
        NodeType::FunctionCall
    }
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
    fn is_complete(&self) -> bool {
        // Arguments are optional, the callee is not
        self.name.is_some()
    }
    fn render_fields(&self, f: &mut Formatter<'_>) -> fmt::Result {
        render_list(f, "arguments", &self.arguments)
    }
}

/// Assignment
/// Binds the value of `right` to the variable on the left.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Assignment {
    pub left: Option<Variable>,
    pub right: Option<Box<Node>>,
}

impl AstNode for Assignment {
    fn node_type(&self) -> NodeType {
        NodeType::Assignment
    }
    fn name(&self) -> Option<&str> {
        None
    }
    fn is_complete(&self) -> bool {
        self.left.is_some() && self.right.is_some()
    }
    fn render_fields(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.left {
            Some(variable) => write!(f, ", left = {}", Node::Variable(variable.clone()))?,
            None => write!(f, ", left = None")?,
        }
        render_optional(f, "right", self.right.as_deref())
    }
}
