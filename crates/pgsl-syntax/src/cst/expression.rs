//! Expressions.

use alloc::{boxed::Box, string::String, vec::Vec};

use super::TypeDeclaration;
use crate::SourceRange;

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Literal(LiteralExpression),
    Identifier(IdentifierExpression),
    Binary(BinaryExpression),
    Unary(UnaryExpression),
    /// `&value`
    AddressOf(PointerExpression),
    /// `*pointer`
    Dereference(PointerExpression),
    Parenthesized(ParenthesizedExpression),
    Call(CallExpression),
    New(NewExpression),
    Member(MemberExpression),
    Index(IndexExpression),
}

impl Expression {
    pub fn range(&self) -> SourceRange {
        match self {
            Expression::Literal(expression) => expression.range,
            Expression::Identifier(expression) => expression.range,
            Expression::Binary(expression) => expression.range,
            Expression::Unary(expression) => expression.range,
            Expression::AddressOf(expression) | Expression::Dereference(expression) => {
                expression.range
            }
            Expression::Parenthesized(expression) => expression.range,
            Expression::Call(expression) => expression.range,
            Expression::New(expression) => expression.range,
            Expression::Member(expression) => expression.range,
            Expression::Index(expression) => expression.range,
        }
    }
}

/// Type suffix of a number literal: `1i`, `1u`, `1.0f`, `1.0h`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberSuffix {
    Integer,
    Unsigned,
    Float32,
    Float16,
}

impl NumberSuffix {
    pub(crate) fn from_char(c: char) -> Option<Self> {
        match c {
            'i' => Some(NumberSuffix::Integer),
            'u' => Some(NumberSuffix::Unsigned),
            'f' => Some(NumberSuffix::Float32),
            'h' => Some(NumberSuffix::Float16),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralKind {
    Boolean(bool),
    Integer(i64, Option<NumberSuffix>),
    Float(f64, Option<NumberSuffix>),
}

/// A literal together with its source text, which is emitted verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpression {
    pub kind: LiteralKind,
    pub text: String,
    pub range: SourceRange,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IdentifierExpression {
    pub name: String,
    pub range: SourceRange,
}

/// Operator family, used for diagnostics and type rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorClass {
    Arithmetic,
    Comparison,
    Logical,
    Bitwise,
    Shift,
}

impl OperatorClass {
    pub fn name(self) -> &'static str {
        match self {
            OperatorClass::Arithmetic => "arithmetic",
            OperatorClass::Comparison => "comparison",
            OperatorClass::Logical => "logical",
            OperatorClass::Bitwise => "bitwise",
            OperatorClass::Shift => "shift",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Remainder,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    And,
    Or,
    BitAnd,
    BitOr,
    BitXor,
    ShiftLeft,
    ShiftRight,
}

impl BinaryOperator {
    pub fn token(self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Remainder => "%",
            BinaryOperator::Equal => "==",
            BinaryOperator::NotEqual => "!=",
            BinaryOperator::Less => "<",
            BinaryOperator::LessEqual => "<=",
            BinaryOperator::Greater => ">",
            BinaryOperator::GreaterEqual => ">=",
            BinaryOperator::And => "&&",
            BinaryOperator::Or => "||",
            BinaryOperator::BitAnd => "&",
            BinaryOperator::BitOr => "|",
            BinaryOperator::BitXor => "^",
            BinaryOperator::ShiftLeft => "<<",
            BinaryOperator::ShiftRight => ">>",
        }
    }

    pub fn class(self) -> OperatorClass {
        match self {
            BinaryOperator::Add
            | BinaryOperator::Subtract
            | BinaryOperator::Multiply
            | BinaryOperator::Divide
            | BinaryOperator::Remainder => OperatorClass::Arithmetic,
            BinaryOperator::Equal
            | BinaryOperator::NotEqual
            | BinaryOperator::Less
            | BinaryOperator::LessEqual
            | BinaryOperator::Greater
            | BinaryOperator::GreaterEqual => OperatorClass::Comparison,
            BinaryOperator::And | BinaryOperator::Or => OperatorClass::Logical,
            BinaryOperator::BitAnd | BinaryOperator::BitOr | BinaryOperator::BitXor => {
                OperatorClass::Bitwise
            }
            BinaryOperator::ShiftLeft | BinaryOperator::ShiftRight => OperatorClass::Shift,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpression {
    pub left: Box<Expression>,
    pub operator: BinaryOperator,
    pub right: Box<Expression>,
    pub range: SourceRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    Negate,
    Not,
    BitNot,
}

impl UnaryOperator {
    pub fn token(self) -> &'static str {
        match self {
            UnaryOperator::Negate => "-",
            UnaryOperator::Not => "!",
            UnaryOperator::BitNot => "~",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpression {
    pub operator: UnaryOperator,
    pub operand: Box<Expression>,
    pub range: SourceRange,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PointerExpression {
    pub operand: Box<Expression>,
    pub range: SourceRange,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParenthesizedExpression {
    pub inner: Box<Expression>,
    pub range: SourceRange,
}

/// `name(arguments)` or `name<Generics>(arguments)`.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpression {
    pub name: String,
    pub generics: Vec<TypeDeclaration>,
    pub arguments: Vec<Expression>,
    pub range: SourceRange,
}

/// `new Type(arguments)`
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpression {
    pub ty: TypeDeclaration,
    pub arguments: Vec<Expression>,
    pub range: SourceRange,
}

/// `base.property`, covering struct fields, swizzles and enum values.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberExpression {
    pub base: Box<Expression>,
    pub property: String,
    pub range: SourceRange,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndexExpression {
    pub base: Box<Expression>,
    pub index: Box<Expression>,
    pub range: SourceRange,
}
