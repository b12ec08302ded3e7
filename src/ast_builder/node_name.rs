use std::{collections::HashMap, fmt::Display};

use lazy_static::lazy_static;

lazy_static! {
    /// Grammar rule names with a meaning for the AST builder.
    pub static ref RULE_LOOKUP: HashMap<&'static str, NodeName> = {
        let mut map = HashMap::new();
        map.insert("file_input", NodeName::Module);
        map.insert("primary", NodeName::FunctionCall);
        map.insert("atom", NodeName::Atom);
        map.insert("function_def_raw", NodeName::FunctionDef);
        map.insert("sum", NodeName::Sum);
        map.insert("assignment", NodeName::Assignment);
        map.insert("return_stmt", NodeName::ReturnStatement);
        map.insert("args", NodeName::Arguments);
        map
    };
}

/// Semantic kind of a parse-tree rule node.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum NodeName {
    Unknown,
    Module,
    FunctionDef,
    FunctionCall,
    Sum,
    Assignment,
    Atom,
    ReturnStatement,
    Arguments,
}

impl NodeName {
    /// Rules missing from the lookup are `Unknown`.
    pub fn from_rule(rule: &str) -> NodeName {
        RULE_LOOKUP.get(rule).copied().unwrap_or(NodeName::Unknown)
    }
}

impl Display for NodeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            NodeName::Unknown => "UNKNOWN",
            NodeName::Module => "MODULE",
            NodeName::FunctionDef => "FUNCTION_DEF",
            NodeName::FunctionCall => "FUNCTION_CALL",
            NodeName::Sum => "SUM",
            NodeName::Assignment => "ASSIGNMENT",
            NodeName::Atom => "ATOM",
            NodeName::ReturnStatement => "RETURN_STATEMENT",
            NodeName::Arguments => "ARGUMENTS",
        };
        write!(f, "{}", name)
    }
}
