//! Parser state and the top-level driver loop.
//!
//! The parser pulls tokens from the lexer one at a time, keeping exactly one
//! token of look-ahead. Top-level items are dispatched on that token:
//! - `;` is skipped
//! - `def` starts a definition
//! - `extern` starts a prototype-only declaration
//! - anything else is a top-level expression
//!
//! A failed item is reported, one token is dropped and parsing resumes.

use crate::{
    ast::{ast::Node, statements::Module},
    display_error,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        source::CharSource,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::stmt::{parse_definition, parse_extern, parse_top_level_expr};

/// Name given to the function wrapping each top-level expression.
pub const ANONYMOUS_FUNCTION_NAME: &str = "__anon_expr";

#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Source name used in positions, `shell` when unset
    pub file: Option<String>,
    /// Write each diagnostic to stderr as it is reported
    pub echo_diagnostics: bool,
    pub anonymous_function_name: String,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            file: None,
            echo_diagnostics: true,
            anonymous_function_name: String::from(ANONYMOUS_FUNCTION_NAME),
        }
    }
}

pub struct Parser<S: CharSource> {
    lexer: Lexer<S>,
    /// Look-ahead token, `None` once the lexer is exhausted
    current: Option<Token>,
    options: ParseOptions,
    diagnostics: Vec<Error>,
}

impl<S: CharSource> Parser<S> {
    pub fn new(lexer: Lexer<S>, options: ParseOptions) -> Self {
        let mut parser = Parser {
            lexer,
            current: None,
            options,
            diagnostics: vec![],
        };
        parser.advance();
        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> Option<&Token> {
        self.current.as_ref()
    }

    pub fn current_token_kind(&self) -> Option<TokenKind> {
        self.current.as_ref().map(|token| token.kind)
    }

    /// Whether the current token is the single character `ch`.
    pub fn current_is(&self, ch: char) -> bool {
        self.current.as_ref().is_some_and(|token| token.is_char(ch))
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> Option<Token> {
        let next = self.lexer.next_token();
        if let Some(token) = &next {
            tracing::trace!("token {} at {}", token, self.lexer.position().0);
        }
        std::mem::replace(&mut self.current, next)
    }

    /// Consumes the single character `ch`, or fails naming what was found.
    pub fn expect_char(&mut self, ch: char, expected: &str) -> Result<Token, Error> {
        if !self.current_is(ch) {
            return Err(self.error(ErrorImpl::ExpectedToken {
                expected: expected.to_string(),
                found: self.describe_current(),
            }));
        }

        self.advance()
            .ok_or_else(|| self.error(ErrorImpl::UnexpectedEndOfInput))
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current.as_ref().is_some_and(|token| !token.is_eof())
    }

    /// Position of the current token.
    pub fn get_position(&self) -> Position {
        self.lexer.position()
    }

    pub fn error(&self, error: ErrorImpl) -> Error {
        Error::new(error, self.get_position())
    }

    /// The current token as it should read in a diagnostic.
    pub fn describe_current(&self) -> String {
        match &self.current {
            Some(token) if token.value.is_some() => token.value_str().to_string(),
            Some(token) => token.kind.to_string(),
            None => String::from("end of input"),
        }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Every diagnostic reported so far, oldest first.
    pub fn diagnostics(&self) -> &[Error] {
        &self.diagnostics
    }

    fn report(&mut self, error: Error) {
        if self.options.echo_diagnostics {
            display_error(&error);
        }
        self.diagnostics.push(error);
    }

    /// Parses every top-level item into one `Module`.
    ///
    /// Returns `None` when no item parsed and at least one failed.
    pub fn parse(&mut self) -> Option<Node> {
        let mut statements = vec![];
        let mut failures = 0;

        while self.has_tokens() {
            if self.current_is(';') {
                self.advance();
                continue;
            }

            let item = match self.current_token_kind() {
                Some(TokenKind::Def) => parse_definition(self),
                Some(TokenKind::Extern) => parse_extern(self),
                _ => parse_top_level_expr(self),
            };

            match item {
                Ok(node) => statements.push(node),
                Err(error) => {
                    failures += 1;
                    self.report(error);

                    let skipped = self.advance();
                    tracing::warn!(
                        "recovering from parse error, skipped {}",
                        skipped.map_or(String::from("end of input"), |t| t.to_string())
                    );
                }
            }
        }

        tracing::debug!(
            "parsed {} top-level item(s), {} failed",
            statements.len(),
            failures
        );

        if statements.is_empty() && failures > 0 {
            return None;
        }

        Some(Node::Module(Module { statements }))
    }
}
