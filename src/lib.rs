#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::{
    ast::ast::Node,
    errors::errors::{BuildError, Error, ErrorTip},
    lexer::{lexer::Lexer, source::CharSource},
    parse_tree::{normalize::normalize, tree::ParseTree},
    parser::parser::{ParseOptions, Parser},
};

pub mod ast;
pub mod ast_builder;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parse_tree;
pub mod parser;

extern crate regex;

/// Character offset into a named source.
#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

/// Parses a character source with the default options.
///
/// Returns `None` only when nothing could be parsed and at least one
/// diagnostic was reported.
pub fn parse<S: CharSource>(source: S) -> Option<Node> {
    parse_with(source, ParseOptions::default())
}

pub fn parse_with<S: CharSource>(source: S, options: ParseOptions) -> Option<Node> {
    let lexer = Lexer::new(source, options.file.clone());
    let mut parser = Parser::new(lexer, options);

    parser.parse()
}

pub fn parse_str(source: &str) -> Option<Node> {
    parse(source.chars())
}

/// Normalizes an externally produced parse tree and reduces it to an AST.
pub fn generate_ast(tree: &ParseTree) -> Result<Node, BuildError> {
    let normalized = normalize(tree);
    ast_builder::builder::generate_ast(&normalized)
}

pub fn format_error(error: &Error) -> String {
    /*
        Error: name (tip)
        -> shell:12
    */

    let position = error.get_position();
    let headline = if let ErrorTip::None = error.get_tip() {
        format!("Error: {}", error.get_error_name())
    } else {
        format!("Error: {} ({})", error.get_error_name(), error.get_tip())
    };

    format!("{}\n-> {}:{}", headline, position.1, position.0)
}

pub fn display_error(error: &Error) {
    eprintln!("{}", format_error(error));
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::{
        errors::errors::{Error, ErrorImpl},
        Position,
    };

    #[test]
    fn test_format_error_with_tip() {
        let error = Error::new(
            ErrorImpl::ExpectedCloseParen {
                found: "EOF".to_string(),
            },
            Position(6, Rc::new("shell".to_string())),
        );

        assert_eq!(
            super::format_error(&error),
            "Error: ExpectedCloseParen (Expected `)`, found `EOF`, is a parenthesis unbalanced?)\n-> shell:6"
        );
    }

    #[test]
    fn test_format_error_without_tip() {
        let error = Error::new(ErrorImpl::UnexpectedEndOfInput, Position::null());

        assert_eq!(
            super::format_error(&error),
            "Error: UnexpectedEndOfInput\n-> <null>:0"
        );
    }
}
