/// AST (Abstract Syntax Tree) module
/// The node model both front-end pipelines build
///
/// Submodules:
/// - ast: The `Node` sum type, node tags and the `AstNode` trait
/// - expressions: Atoms, variables, binary expressions, calls and assignments
/// - statements: Modules, returns, function definitions and parameters
/// - types: Data types and atom classification
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
