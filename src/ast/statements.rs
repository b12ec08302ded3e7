use std::fmt::{self, Formatter};

use super::{
    ast::{render_list, render_optional, AstNode, Node, NodeType},
    types::DataType,
};

/// Module
/// The root of a program: its top-level statements in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Module {
    pub statements: Vec<Node>,
}

impl AstNode for Module {
    fn node_type(&self) -> NodeType {
        NodeType::Module
    }
    fn name(&self) -> Option<&str> {
        None
    }
    fn is_complete(&self) -> bool {
        true
    }
    fn render_fields(&self, f: &mut Formatter<'_>) -> fmt::Result {
        render_list(f, "statements", &self.statements)
    }
}

/// Return
/// An empty expression list returns nothing, so the statement is always
/// complete.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Return {
    pub expressions: Vec<Node>,
}

impl AstNode for Return {
    fn node_type(&self) -> NodeType {
        NodeType::ReturnStatement
    }
    fn name(&self) -> Option<&str> {
        None
    }
    fn is_complete(&self) -> bool {
        true
    }
    fn render_fields(&self, f: &mut Formatter<'_>) -> fmt::Result {
        render_list(f, "expressions", &self.expressions)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Parameter {
    pub name: Option<String>,
    pub data_type: Option<DataType>,
    pub default_value: Option<Box<Node>>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Parameter {
            name: Some(name.into()),
            data_type: Some(data_type),
            default_value: None,
        }
    }

    pub fn data_type(&self) -> DataType {
        self.data_type.unwrap_or_default()
    }
}

impl AstNode for Parameter {
    fn node_type(&self) -> NodeType {
        NodeType::Parameter
    }
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
    fn is_complete(&self) -> bool {
        self.data_type.is_some()
    }
    fn render_fields(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, ", data_type = '{}'", self.data_type())?;
        render_optional(f, "default", self.default_value.as_deref())
    }
}

/// Function Definition
///
/// Also used for bodiless `extern` declarations, which set `external` and
/// leave `statements` empty.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FunctionDef {
    pub name: Option<String>,
    pub parameters: Vec<Parameter>,
    pub statements: Vec<Node>,
    pub return_type: Option<DataType>,
    pub external: bool,
}

impl FunctionDef {
    /// The declared return type, `NONE` until one is set.
    pub fn return_type(&self) -> DataType {
        self.return_type.unwrap_or_default()
    }
}

impl AstNode for FunctionDef {
    fn node_type(&self) -> NodeType {
        NodeType::FunctionDef
    }
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
    fn is_complete(&self) -> bool {
        self.name.is_some() && self.return_type.is_some()
    }
    fn render_fields(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let parameters: Vec<Node> = self.parameters.iter().cloned().map(Node::from).collect();

        render_list(f, "parameters", &parameters)?;
        render_list(f, "statements", &self.statements)?;
        write!(f, ", return_type = '{}'", self.return_type())?;
        if self.external {
            write!(f, ", external = true")?;
        }
        Ok(())
    }
}
