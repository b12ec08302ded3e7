//! Generic parse trees and their normalization.
//!
//! Trees handed over by an external grammar parser are copied into an owned
//! arena (`tree`) and reshaped (`normalize`) before the AST builder walks
//! them:
//!
//! - `prune_empty` removes nodes that matched nothing
//! - `simplify_lineages` collapses chains of single-alternative rules

pub mod normalize;
pub mod tree;

#[cfg(test)]
mod tests;
