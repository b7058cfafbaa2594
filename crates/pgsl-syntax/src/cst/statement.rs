//! Function body statements.

use alloc::{boxed::Box, string::String, vec::Vec};

use super::{BinaryOperator, Expression, TypeDeclaration};
use crate::SourceRange;

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Block(BlockStatement),
    Variable(VariableStatement),
    Assignment(AssignmentStatement),
    Increment(IncrementStatement),
    If(IfStatement),
    Switch(SwitchStatement),
    While(WhileStatement),
    DoWhile(DoWhileStatement),
    For(ForStatement),
    Break(SourceRange),
    Continue(SourceRange),
    Discard(SourceRange),
    Return(ReturnStatement),
    Call(CallStatement),
}

impl Statement {
    pub fn range(&self) -> SourceRange {
        match self {
            Statement::Block(statement) => statement.range,
            Statement::Variable(statement) => statement.range,
            Statement::Assignment(statement) => statement.range,
            Statement::Increment(statement) => statement.range,
            Statement::If(statement) => statement.range,
            Statement::Switch(statement) => statement.range,
            Statement::While(statement) => statement.range,
            Statement::DoWhile(statement) => statement.range,
            Statement::For(statement) => statement.range,
            Statement::Break(range) | Statement::Continue(range) | Statement::Discard(range) => {
                *range
            }
            Statement::Return(statement) => statement.range,
            Statement::Call(statement) => statement.range,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlockStatement {
    pub statements: Vec<Statement>,
    pub range: SourceRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocalKeyword {
    Const,
    Let,
    Var,
}

impl LocalKeyword {
    pub fn name(self) -> &'static str {
        match self {
            LocalKeyword::Const => "const",
            LocalKeyword::Let => "let",
            LocalKeyword::Var => "var",
        }
    }
}

/// `let v: Vector3<float> = ...;`
#[derive(Debug, Clone, PartialEq)]
pub struct VariableStatement {
    pub keyword: LocalKeyword,
    pub name: String,
    pub ty: TypeDeclaration,
    pub initializer: Option<Expression>,
    pub range: SourceRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssignmentOperator {
    Assign,
    Add,
    Subtract,
    Multiply,
    Divide,
    Remainder,
    BitAnd,
    BitOr,
    BitXor,
    ShiftLeft,
    ShiftRight,
}

impl AssignmentOperator {
    pub fn token(self) -> &'static str {
        match self {
            AssignmentOperator::Assign => "=",
            AssignmentOperator::Add => "+=",
            AssignmentOperator::Subtract => "-=",
            AssignmentOperator::Multiply => "*=",
            AssignmentOperator::Divide => "/=",
            AssignmentOperator::Remainder => "%=",
            AssignmentOperator::BitAnd => "&=",
            AssignmentOperator::BitOr => "|=",
            AssignmentOperator::BitXor => "^=",
            AssignmentOperator::ShiftLeft => "<<=",
            AssignmentOperator::ShiftRight => ">>=",
        }
    }

    /// Binary operator a compound assignment applies, `None` for plain `=`.
    pub fn binary(self) -> Option<BinaryOperator> {
        match self {
            AssignmentOperator::Assign => None,
            AssignmentOperator::Add => Some(BinaryOperator::Add),
            AssignmentOperator::Subtract => Some(BinaryOperator::Subtract),
            AssignmentOperator::Multiply => Some(BinaryOperator::Multiply),
            AssignmentOperator::Divide => Some(BinaryOperator::Divide),
            AssignmentOperator::Remainder => Some(BinaryOperator::Remainder),
            AssignmentOperator::BitAnd => Some(BinaryOperator::BitAnd),
            AssignmentOperator::BitOr => Some(BinaryOperator::BitOr),
            AssignmentOperator::BitXor => Some(BinaryOperator::BitXor),
            AssignmentOperator::ShiftLeft => Some(BinaryOperator::ShiftLeft),
            AssignmentOperator::ShiftRight => Some(BinaryOperator::ShiftRight),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentStatement {
    pub target: Expression,
    pub operator: AssignmentOperator,
    pub value: Expression,
    pub range: SourceRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IncrementOperator {
    Increment,
    Decrement,
}

impl IncrementOperator {
    pub fn token(self) -> &'static str {
        match self {
            IncrementOperator::Increment => "++",
            IncrementOperator::Decrement => "--",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IncrementStatement {
    pub target: Expression,
    pub operator: IncrementOperator,
    pub range: SourceRange,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStatement {
    pub condition: Expression,
    pub then_block: BlockStatement,
    pub else_branch: Option<ElseBranch>,
    pub range: SourceRange,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ElseBranch {
    If(Box<IfStatement>),
    Block(BlockStatement),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwitchStatement {
    pub selector: Expression,
    pub cases: Vec<SwitchCase>,
    pub range: SourceRange,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CaseSelector {
    Expression(Expression),
    Default(SourceRange),
}

/// `case 1, 2: { ... }` or `default: { ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct SwitchCase {
    pub selectors: Vec<CaseSelector>,
    pub body: BlockStatement,
    pub range: SourceRange,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStatement {
    pub condition: Expression,
    pub body: BlockStatement,
    pub range: SourceRange,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DoWhileStatement {
    pub body: BlockStatement,
    pub condition: Expression,
    pub range: SourceRange,
}

/// `for (init; condition; update) body`, every header part optional.
#[derive(Debug, Clone, PartialEq)]
pub struct ForStatement {
    pub init: Option<VariableStatement>,
    pub condition: Option<Expression>,
    pub update: Option<Box<Statement>>,
    pub body: BlockStatement,
    pub range: SourceRange,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    pub value: Option<Expression>,
    pub range: SourceRange,
}

/// A call evaluated for its side effects: `storageBarrier();`
#[derive(Debug, Clone, PartialEq)]
pub struct CallStatement {
    pub call: Expression,
    pub range: SourceRange,
}
