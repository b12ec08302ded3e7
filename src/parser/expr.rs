use crate::{
    ast::{
        ast::Node,
        expressions::{FunctionCall, Sum, Variable},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::{source::CharSource, tokens::TokenKind},
    MK_ATOM,
};

use super::{lookups::token_precedence, parser::Parser};

/// expression ::= primary binoprhs
pub fn parse_expression<S: CharSource>(parser: &mut Parser<S>) -> Result<Node, Error> {
    let lhs = parse_primary(parser)?;
    parse_binary_op_rhs(parser, 0, lhs)
}

pub fn parse_primary<S: CharSource>(parser: &mut Parser<S>) -> Result<Node, Error> {
    let Some(token) = parser.current_token().cloned() else {
        return Err(parser.error(ErrorImpl::UnexpectedEndOfInput));
    };

    match token.kind {
        TokenKind::Identifier => parse_identifier_expr(parser),
        TokenKind::Number => parse_number_expr(parser),
        TokenKind::EOF => Err(parser.error(ErrorImpl::UnexpectedEndOfInput)),
        _ if token.is_char('(') => parse_paren_expr(parser),
        _ => Err(parser.error(ErrorImpl::UnknownExpressionToken {
            token: parser.describe_current(),
        })),
    }
}

pub fn parse_number_expr<S: CharSource>(parser: &mut Parser<S>) -> Result<Node, Error> {
    let Some(token) = parser.advance() else {
        return Err(parser.error(ErrorImpl::UnexpectedEndOfInput));
    };

    Ok(MK_ATOM!(token.value_str()))
}

/// parenexpr ::= '(' expression ')'
pub fn parse_paren_expr<S: CharSource>(parser: &mut Parser<S>) -> Result<Node, Error> {
    parser.advance();
    let expr = parse_expression(parser)?;

    if !parser.current_is(')') {
        return Err(parser.error(ErrorImpl::ExpectedCloseParen {
            found: parser.describe_current(),
        }));
    }
    parser.advance();

    Ok(expr)
}

/// identifierexpr
///   ::= identifier
///   ::= identifier '(' expression* ')'
pub fn parse_identifier_expr<S: CharSource>(parser: &mut Parser<S>) -> Result<Node, Error> {
    let name = parser
        .advance()
        .map(|token| token.value_str().to_string())
        .unwrap_or_default();

    if !parser.current_is('(') {
        return Ok(Node::Variable(Variable::named(name)));
    }
    parser.advance();

    let mut arguments = vec![];
    if !parser.current_is(')') {
        loop {
            arguments.push(parse_expression(parser)?);

            if parser.current_is(')') {
                break;
            }

            if !parser.current_is(',') {
                return Err(parser.error(ErrorImpl::ExpectedToken {
                    expected: String::from("')' or ',' in argument list"),
                    found: parser.describe_current(),
                }));
            }
            parser.advance();
        }
    }
    parser.advance();

    Ok(Node::FunctionCall(FunctionCall {
        name: Some(name),
        arguments,
    }))
}

/// binoprhs ::= (binop primary)*
///
/// Operators binding looser than `min_precedence` are left to the caller.
pub fn parse_binary_op_rhs<S: CharSource>(
    parser: &mut Parser<S>,
    min_precedence: i32,
    mut lhs: Node,
) -> Result<Node, Error> {
    loop {
        let precedence = token_precedence(parser.current_token());
        if precedence < min_precedence {
            return Ok(lhs);
        }

        let Some(operator) = parser.current_token().and_then(|token| token.as_char()) else {
            return Ok(lhs);
        };
        parser.advance();

        let mut rhs = parse_primary(parser)?;

        // A tighter operator after the right operand takes it first
        let next_precedence = token_precedence(parser.current_token());
        if precedence < next_precedence {
            rhs = parse_binary_op_rhs(parser, precedence + 1, rhs)?;
        }

        lhs = Node::Sum(Sum::new(operator, lhs, rhs));
    }
}
