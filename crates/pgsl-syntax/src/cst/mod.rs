//! Concrete syntax tree.
//!
//! The CST mirrors the source text one-to-one: every node carries the byte
//! range it was parsed from and no type information. The `pgsl` core lowers
//! it into its own arena-based AST.

mod declaration;
mod expression;
mod statement;
mod types;

use alloc::vec::Vec;

pub use declaration::{
    AliasDeclaration, Declaration, EnumDeclaration, EnumLiteral, EnumValue, FunctionDeclaration,
    GlobalKeyword, ParameterDeclaration, StructDeclaration, StructProperty, VariableDeclaration,
};
pub use expression::{
    BinaryExpression, BinaryOperator, CallExpression, Expression, IdentifierExpression,
    IndexExpression, LiteralExpression, LiteralKind, MemberExpression, NewExpression,
    NumberSuffix, OperatorClass, ParenthesizedExpression, PointerExpression, UnaryExpression,
    UnaryOperator,
};
pub use statement::{
    AssignmentOperator, AssignmentStatement, BlockStatement, CallStatement, CaseSelector,
    DoWhileStatement, ElseBranch, ForStatement, IfStatement, IncrementOperator,
    IncrementStatement, LocalKeyword, ReturnStatement, Statement, SwitchCase, SwitchStatement,
    VariableStatement, WhileStatement,
};
pub use types::{Attribute, AttributeParameter, TypeArgument, TypeDeclaration};

use crate::SourceRange;

/// A parsed document: its user declarations in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub declarations: Vec<Declaration>,
    pub range: SourceRange,
}
