use std::fmt::Display;

use thiserror::Error;

use crate::{ast_builder::node_name::NodeName, Position};

/// A recoverable parse error, located in the source.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::ExpectedToken { .. } => "ExpectedToken",
            ErrorImpl::ExpectedCloseParen { .. } => "ExpectedCloseParen",
            ErrorImpl::UnknownExpressionToken { .. } => "UnknownExpressionToken",
            ErrorImpl::UnexpectedEndOfInput => "UnexpectedEndOfInput",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::ExpectedToken { expected, found } => {
                ErrorTip::Suggestion(format!("Expected {}, found `{}`", expected, found))
            }
            ErrorImpl::ExpectedCloseParen { found } => ErrorTip::Suggestion(format!(
                "Expected `)`, found `{}`, is a parenthesis unbalanced?",
                found
            )),
            ErrorImpl::UnknownExpressionToken { token } => ErrorTip::Suggestion(format!(
                "Unknown token `{}` when expecting an expression",
                token
            )),
            ErrorImpl::UnexpectedEndOfInput => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {}",
            self.position.1, self.position.0, self.internal_error
        )
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("expected {expected}, found {found:?}")]
    ExpectedToken { expected: String, found: String },
    #[error("expected ')', found {found:?}")]
    ExpectedCloseParen { found: String },
    #[error("unknown token when expecting an expression: {token:?}")]
    UnknownExpressionToken { token: String },
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
}

/// Errors that abort building an AST from a parse tree.
///
/// A malformed parse tree points at the external grammar or the rule-name
/// mapping rather than at the program, so none of these are recoverable.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BuildError {
    #[error("node {node} is not supported as the program root")]
    UnsupportedRoot { node: NodeName },
    #[error("unexpected node {node} in {context} context")]
    UnexpectedNode { node: NodeName, context: NodeName },
    #[error("{context} context requires an enclosing function call")]
    InvalidOwner { context: NodeName },
    #[error("walk finished with {open} unflushed context(s)")]
    UnbalancedWalk { open: usize },
    #[error("failed to generate an AST")]
    NoAstProduced,
}
