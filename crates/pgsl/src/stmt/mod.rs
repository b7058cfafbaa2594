//! Simple statements: blocks, local variables, assignments, returns and
//! call statements.

pub(crate) mod codegen;
pub(crate) mod typecheck;

use alloc::{string::String, vec::Vec};

use pgsl_syntax::cst::{AssignmentOperator, IncrementOperator, LocalKeyword};

use crate::ast::NodeId;

#[derive(Debug, Clone)]
pub struct BlockStatement {
    pub statements: Vec<NodeId>,
}

#[derive(Debug, Clone)]
pub struct LocalVariableStatement {
    pub keyword: LocalKeyword,
    pub name: String,
    pub ty: NodeId,
    pub initializer: Option<NodeId>,
}

#[derive(Debug, Clone)]
pub struct AssignmentStatement {
    pub target: NodeId,
    pub operator: AssignmentOperator,
    pub value: NodeId,
}

#[derive(Debug, Clone)]
pub struct IncrementStatement {
    pub target: NodeId,
    pub operator: IncrementOperator,
}

#[derive(Debug, Clone)]
pub struct ReturnStatement {
    pub value: Option<NodeId>,
}

#[derive(Debug, Clone)]
pub struct CallStatement {
    pub call: NodeId,
}
