//! Context-stack AST builder (path B).
//!
//! Walks a normalized generic parse tree and reduces it to AST nodes. Rule
//! names are mapped to semantic kinds (`node_name`), and a stack of frames
//! (`context`) accumulates each construct until the exit of its rule node
//! flushes it into the frame below.

pub mod builder;
pub mod context;
pub mod node_name;
