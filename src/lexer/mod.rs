//! Lexical analysis module.
//!
//! Converts a character stream into tokens, one token per request:
//!
//! - Keyword classification through a reserved-word table
//! - Identifiers, numeric literals and `#` line comments
//! - Single unclaimed characters reported as `Unknown` tokens
//! - Source offsets for diagnostics

pub mod lexer;
pub mod source;
pub mod tokens;
