use crate::{
    ast::{
        ast::Node,
        statements::{FunctionDef, Parameter, Return},
        types::DataType,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::{source::CharSource, tokens::TokenKind},
};

use super::{expr::parse_expression, parser::Parser};

/// prototype ::= identifier '(' identifier* ')'
///
/// Produces a bodiless, external `FunctionDef`. Every value in the language
/// is a float, so parameters and the return type are too.
pub fn parse_prototype<S: CharSource>(parser: &mut Parser<S>) -> Result<FunctionDef, Error> {
    if parser.current_token_kind() != Some(TokenKind::Identifier) {
        return Err(parser.error(ErrorImpl::ExpectedToken {
            expected: String::from("function name in prototype"),
            found: parser.describe_current(),
        }));
    }

    let name = parser
        .advance()
        .map(|token| token.value_str().to_string())
        .unwrap_or_default();

    parser.expect_char('(', "'(' in prototype")?;

    let mut parameters = vec![];
    while parser.current_token_kind() == Some(TokenKind::Identifier) {
        if let Some(token) = parser.advance() {
            parameters.push(Parameter::new(token.value_str(), DataType::Float));
        }
    }

    parser.expect_char(')', "')' in prototype")?;

    Ok(FunctionDef {
        name: Some(name),
        parameters,
        statements: vec![],
        return_type: Some(DataType::Float),
        external: true,
    })
}

/// definition ::= 'def' prototype expression
pub fn parse_definition<S: CharSource>(parser: &mut Parser<S>) -> Result<Node, Error> {
    parser.advance();

    let mut function = parse_prototype(parser)?;
    let body = parse_expression(parser)?;

    function.external = false;
    function.statements = vec![Node::Return(Return {
        expressions: vec![body],
    })];

    tracing::debug!(
        "parsed definition of {} with {} parameter(s)",
        function.name.as_deref().unwrap_or_default(),
        function.parameters.len()
    );

    Ok(Node::FunctionDef(function))
}

/// external ::= 'extern' prototype
pub fn parse_extern<S: CharSource>(parser: &mut Parser<S>) -> Result<Node, Error> {
    parser.advance();

    let prototype = parse_prototype(parser)?;
    tracing::debug!(
        "parsed extern {}",
        prototype.name.as_deref().unwrap_or_default()
    );

    Ok(Node::FunctionDef(prototype))
}

/// toplevelexpr ::= expression
///
/// Wrapped in a parameterless function so it can be handled like any
/// other definition.
pub fn parse_top_level_expr<S: CharSource>(parser: &mut Parser<S>) -> Result<Node, Error> {
    let body = parse_expression(parser)?;
    tracing::debug!("parsed top-level expression");

    Ok(Node::FunctionDef(FunctionDef {
        name: Some(parser.options().anonymous_function_name.clone()),
        parameters: vec![],
        statements: vec![Node::Return(Return {
            expressions: vec![body],
        })],
        return_type: Some(DataType::Float),
        external: false,
    }))
}
