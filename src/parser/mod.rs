//! Precedence-climbing parser (path A).
//!
//! Consumes tokens straight from the lexer and builds AST nodes for:
//!
//! - Expressions: numbers, variable references, calls, parenthesized
//!   sub-expressions and binary operators
//! - Prototypes, `def` definitions and `extern` declarations
//! - Top-level expressions, wrapped in an anonymous function
//!
//! Binary operators are resolved against a fixed precedence table rather than
//! one grammar rule per level. Equal precedence associates to the left.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
