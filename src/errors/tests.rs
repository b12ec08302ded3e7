//! Unit tests for error handling.
//!
//! This module contains tests for parse error naming and tips, and for the
//! messages of the builder errors.

use crate::ast_builder::node_name::NodeName;
use crate::errors::errors::{BuildError, Error, ErrorImpl, ErrorTip};
use crate::Position;
use std::rc::Rc;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnknownExpressionToken {
            token: "$".to_string(),
        },
        Position(10, Rc::new("test.sw".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnknownExpressionToken");
}

#[test]
fn test_error_position() {
    let pos = Position(42, Rc::new("test.sw".to_string()));
    let error = Error::new(
        ErrorImpl::ExpectedCloseParen {
            found: "EOF".to_string(),
        },
        pos.clone(),
    );

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_position(), &pos);
}

#[test]
fn test_expected_token_names_both_sides() {
    let error = Error::new(
        ErrorImpl::ExpectedToken {
            expected: "'(' in prototype".to_string(),
            found: "x".to_string(),
        },
        Position::null(),
    );

    assert_eq!(error.get_error_name(), "ExpectedToken");
    assert_eq!(
        error.get_error().to_string(),
        "expected '(' in prototype, found \"x\""
    );
    assert_eq!(
        error.get_tip().to_string(),
        "Expected '(' in prototype, found `x`"
    );
}

#[test]
fn test_expected_close_paren_message() {
    let error = ErrorImpl::ExpectedCloseParen {
        found: "3".to_string(),
    };

    assert_eq!(error.to_string(), "expected ')', found \"3\"");
}

#[test]
fn test_unknown_expression_token_message() {
    let error = ErrorImpl::UnknownExpressionToken {
        token: ")".to_string(),
    };

    assert_eq!(
        error.to_string(),
        "unknown token when expecting an expression: \")\""
    );
}

#[test]
fn test_end_of_input_has_no_tip() {
    let error = Error::new(ErrorImpl::UnexpectedEndOfInput, Position::null());

    assert!(matches!(error.get_tip(), ErrorTip::None));
    assert_eq!(error.get_tip().to_string(), "");
}

#[test]
fn test_error_display_includes_location() {
    let error = Error::new(
        ErrorImpl::UnexpectedEndOfInput,
        Position(7, Rc::new("shell".to_string())),
    );

    assert_eq!(error.to_string(), "shell:7: unexpected end of input");
}

#[test]
fn test_build_error_messages() {
    assert_eq!(
        BuildError::UnsupportedRoot {
            node: NodeName::FunctionCall
        }
        .to_string(),
        "node FUNCTION_CALL is not supported as the program root"
    );
    assert_eq!(
        BuildError::UnexpectedNode {
            node: NodeName::Sum,
            context: NodeName::Module
        }
        .to_string(),
        "unexpected node SUM in MODULE context"
    );
    assert_eq!(
        BuildError::UnbalancedWalk { open: 2 }.to_string(),
        "walk finished with 2 unflushed context(s)"
    );
    assert_eq!(
        BuildError::NoAstProduced.to_string(),
        "failed to generate an AST"
    );
}
