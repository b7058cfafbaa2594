//! Expressions.

pub(crate) mod codegen;
pub(crate) mod constructor;
pub(crate) mod operator;
pub(crate) mod typecheck;

use alloc::{string::String, vec::Vec};

use pgsl_syntax::cst::{BinaryOperator, LiteralKind, UnaryOperator};

use crate::ast::NodeId;

#[derive(Debug, Clone)]
pub struct LiteralExpression {
    pub kind: LiteralKind,
    /// Source text, emitted unchanged.
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct IdentifierExpression {
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct BinaryExpression {
    pub left: NodeId,
    pub operator: BinaryOperator,
    pub right: NodeId,
}

#[derive(Debug, Clone)]
pub struct UnaryExpression {
    pub operator: UnaryOperator,
    pub operand: NodeId,
}

/// Operand of `&value` and `*pointer`.
#[derive(Debug, Clone)]
pub struct PointerExpression {
    pub operand: NodeId,
}

#[derive(Debug, Clone)]
pub struct ParenthesizedExpression {
    pub inner: NodeId,
}

/// `new Type(arguments)`
#[derive(Debug, Clone)]
pub struct NewExpression {
    pub ty: NodeId,
    pub arguments: Vec<NodeId>,
}

#[derive(Debug, Clone)]
pub struct MemberExpression {
    pub base: NodeId,
    pub property: String,
}

#[derive(Debug, Clone)]
pub struct IndexExpression {
    pub base: NodeId,
    pub index: NodeId,
}
