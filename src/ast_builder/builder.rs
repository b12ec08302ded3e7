use crate::{
    ast::ast::Node,
    errors::errors::BuildError,
    parse_tree::tree::{ParseTree, TreeListener, TreeNode},
};

use super::{
    context::{Context, Handled},
    node_name::NodeName,
};

/// Reduces a parse tree to an AST from the enter/exit events of a single
/// depth-first walk.
#[derive(Debug, Default)]
pub struct AstBuilder {
    stack: Vec<Context>,
    ast: Option<Node>,
}

impl AstBuilder {
    pub fn new() -> Self {
        AstBuilder::default()
    }

    /// Number of frames still open.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    fn ensure_root_context(&mut self, name: NodeName) -> Result<(), BuildError> {
        if self.stack.is_empty() {
            self.stack.push(Context::root_for(name)?);
            tracing::trace!("pushed root {} context", name);
        }
        Ok(())
    }

    /// Hands the event to the top frame. A spawned frame is pushed and gets
    /// the same event, which may spawn again.
    fn handle_rule(&mut self, name: NodeName, text: &str) -> Result<(), BuildError> {
        loop {
            let Some((top, below)) = self.stack.split_last_mut() else {
                return Err(BuildError::UnbalancedWalk { open: 0 });
            };

            match top.handle(below.last_mut(), name, text)? {
                Handled::Consumed => return Ok(()),
                Handled::Spawn(context) => {
                    tracing::trace!("pushed {} context for {:?}", context.node_name(), text);
                    self.stack.push(context);
                }
            }
        }
    }

    fn finish_rule(&mut self, name: NodeName) -> Result<(), BuildError> {
        let Some(top) = self.stack.last_mut() else {
            return Ok(());
        };

        if top.node_name() != name || !top.exit() {
            return Ok(());
        }

        let Some(context) = self.stack.pop() else {
            return Ok(());
        };
        tracing::trace!("popped {} context", name);

        let node = context.flush();
        match self.stack.split_last_mut() {
            Some((top, below)) => {
                if let Some(node) = node {
                    top.accept(below.last_mut(), node)?;
                }
            }
            None => self.ast = node,
        }

        Ok(())
    }

    /// The finished AST. Fails if frames are still open or nothing was
    /// produced.
    pub fn finish(self) -> Result<Node, BuildError> {
        if !self.stack.is_empty() {
            return Err(BuildError::UnbalancedWalk {
                open: self.stack.len(),
            });
        }

        self.ast.ok_or(BuildError::NoAstProduced)
    }
}

impl TreeListener for AstBuilder {
    type Error = BuildError;

    fn enter_rule(&mut self, node: &TreeNode) -> Result<(), BuildError> {
        let name = NodeName::from_rule(node.rule.as_deref().unwrap_or_default());

        self.ensure_root_context(name)?;
        self.handle_rule(name, &node.text)
    }

    fn exit_rule(&mut self, node: &TreeNode) -> Result<(), BuildError> {
        let name = NodeName::from_rule(node.rule.as_deref().unwrap_or_default());
        self.finish_rule(name)
    }
}

/// Builds an AST from an already normalized parse tree.
pub fn generate_ast(tree: &ParseTree) -> Result<Node, BuildError> {
    let mut builder = AstBuilder::new();
    tree.walk(&mut builder)?;

    let ast = builder.finish()?;
    tracing::debug!("generated AST with {} statement(s)", ast.children().len());
    Ok(ast)
}
