//! Control flow statements. Loops lower to WGSL `loop` blocks.

pub(crate) mod codegen;
pub(crate) mod typecheck;

use alloc::vec::Vec;

use pgsl_syntax::SourceRange;

use crate::ast::NodeId;

#[derive(Debug, Clone)]
pub struct IfStatement {
    pub condition: NodeId,
    pub then_block: NodeId,
    /// Another `If` node or a block.
    pub else_branch: Option<NodeId>,
}

#[derive(Debug, Clone)]
pub struct SwitchStatement {
    pub selector: NodeId,
    pub cases: Vec<SwitchCase>,
}

#[derive(Debug, Clone)]
pub struct SwitchCase {
    pub selectors: Vec<CaseSelector>,
    pub body: NodeId,
    pub range: SourceRange,
}

#[derive(Debug, Clone, Copy)]
pub enum CaseSelector {
    Expression(NodeId),
    Default(SourceRange),
}

#[derive(Debug, Clone)]
pub struct WhileStatement {
    pub condition: NodeId,
    pub body: NodeId,
}

#[derive(Debug, Clone)]
pub struct DoWhileStatement {
    pub body: NodeId,
    pub condition: NodeId,
}

#[derive(Debug, Clone)]
pub struct ForStatement {
    pub init: Option<NodeId>,
    pub condition: Option<NodeId>,
    pub update: Option<NodeId>,
    pub body: NodeId,
}
