//! Builder frames.
//!
//! Each frame owns the partial state of one AST construct while its rule
//! node is being walked. A frame counts how many enters of its own kind it
//! has seen, so only the exit matching the first one closes it.

use crate::{
    ast::{ast::Node, expressions::FunctionCall, statements::Module},
    errors::errors::BuildError,
    MK_ATOM,
};

use super::node_name::NodeName;

#[derive(Debug, Clone, PartialEq)]
pub enum Context {
    /// Collects top-level statements.
    Module { statements: Vec<Node>, depth: usize },
    /// The first atom names the callee. Later atoms are arguments whose
    /// `args` rule was collapsed away.
    FunctionCall { call: FunctionCall, depth: usize },
    /// Adds arguments to the enclosing call frame and never produces a node
    /// of its own.
    Arguments { depth: usize },
}

/// What a frame did with an enter event.
#[derive(Debug)]
pub enum Handled {
    Consumed,
    /// Push this frame and hand it the same event.
    Spawn(Context),
}

impl Context {
    pub fn module() -> Self {
        Context::Module {
            statements: vec![],
            depth: 0,
        }
    }

    pub fn function_call() -> Self {
        Context::FunctionCall {
            call: FunctionCall::default(),
            depth: 0,
        }
    }

    pub fn arguments() -> Self {
        Context::Arguments { depth: 0 }
    }

    /// The only kind allowed at the program root.
    pub fn root_for(name: NodeName) -> Result<Self, BuildError> {
        match name {
            NodeName::Module => Ok(Context::module()),
            _ => Err(BuildError::UnsupportedRoot { node: name }),
        }
    }

    /// Kind of node this frame is responsible for.
    pub fn node_name(&self) -> NodeName {
        match self {
            Context::Module { .. } => NodeName::Module,
            Context::FunctionCall { .. } => NodeName::FunctionCall,
            Context::Arguments { .. } => NodeName::Arguments,
        }
    }

    fn depth_mut(&mut self) -> &mut usize {
        match self {
            Context::Module { depth, .. }
            | Context::FunctionCall { depth, .. }
            | Context::Arguments { depth } => depth,
        }
    }

    /// Handles the enter event of a rule node.
    ///
    /// `owner` is the frame directly below this one on the stack. Unmapped
    /// rules pass through every frame untouched.
    pub fn handle(
        &mut self,
        owner: Option<&mut Context>,
        name: NodeName,
        text: &str,
    ) -> Result<Handled, BuildError> {
        let context = self.node_name();
        if name == NodeName::Unknown {
            return Ok(Handled::Consumed);
        }

        match self {
            Context::Module { depth, .. } => match name {
                NodeName::Module => *depth += 1,
                NodeName::FunctionCall => return Ok(Handled::Spawn(Context::function_call())),
                _ => return Err(BuildError::UnexpectedNode { node: name, context }),
            },
            Context::FunctionCall { call, depth } => match name {
                // Nested `primary` rules wrap the callee
                NodeName::FunctionCall if call.name.is_none() => *depth += 1,
                NodeName::FunctionCall => return Ok(Handled::Spawn(Context::function_call())),
                NodeName::Atom if call.name.is_none() => call.name = Some(text.to_string()),
                NodeName::Atom => call.arguments.push(MK_ATOM!(text)),
                NodeName::Arguments => return Ok(Handled::Spawn(Context::arguments())),
                _ => return Err(BuildError::UnexpectedNode { node: name, context }),
            },
            Context::Arguments { depth } => match name {
                NodeName::Arguments => *depth += 1,
                NodeName::Atom => match owner {
                    Some(Context::FunctionCall { call, .. }) => call.arguments.push(MK_ATOM!(text)),
                    _ => return Err(BuildError::InvalidOwner { context }),
                },
                NodeName::FunctionCall => return Ok(Handled::Spawn(Context::function_call())),
                _ => return Err(BuildError::UnexpectedNode { node: name, context }),
            },
        }

        Ok(Handled::Consumed)
    }

    /// Links a node flushed by the frame above into this one.
    pub fn accept(&mut self, owner: Option<&mut Context>, node: Node) -> Result<(), BuildError> {
        match self {
            Context::Module { statements, .. } => statements.push(node),
            Context::FunctionCall { call, .. } => call.arguments.push(node),
            Context::Arguments { .. } => match owner {
                Some(Context::FunctionCall { call, .. }) => call.arguments.push(node),
                _ => {
                    return Err(BuildError::InvalidOwner {
                        context: NodeName::Arguments,
                    })
                }
            },
        }

        Ok(())
    }

    /// Handles the exit of a rule node of this frame's kind. Returns true
    /// once the frame is closed and should be flushed.
    pub fn exit(&mut self) -> bool {
        let depth = self.depth_mut();
        *depth = depth.saturating_sub(1);
        *depth == 0
    }

    /// Produces the finished node, if this frame builds one.
    pub fn flush(self) -> Option<Node> {
        match self {
            Context::Module { statements, .. } => Some(Node::Module(Module { statements })),
            Context::FunctionCall { call, .. } => Some(Node::FunctionCall(call)),
            Context::Arguments { .. } => None,
        }
    }
}
