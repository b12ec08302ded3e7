//! Error types for the front end.
//!
//! - `Error` / `ErrorImpl`: recoverable parse errors with a source position
//!   and a suggestion for the user
//! - `BuildError`: fatal errors raised while reducing a parse tree to an AST

pub mod errors;

#[cfg(test)]
mod tests;
