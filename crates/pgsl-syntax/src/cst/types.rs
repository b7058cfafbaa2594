//! Type declarations and attributes.

use alloc::{string::String, vec::Vec};

use super::Expression;
use crate::SourceRange;

/// A type as written in source: `Vector3<float>`, `Array<Light, 4>`, `Light`.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDeclaration {
    pub name: String,
    pub arguments: Vec<TypeArgument>,
    pub range: SourceRange,
}

/// One template argument of a type declaration.
///
/// Arguments that look like a type name parse as `Type`. Array lengths and
/// enum values (`TexelFormat.Rgba8unorm`) parse as `Expression`.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeArgument {
    Type(TypeDeclaration),
    Expression(Expression),
}

impl TypeArgument {
    pub fn range(&self) -> SourceRange {
        match self {
            TypeArgument::Type(ty) => ty.range,
            TypeArgument::Expression(expression) => expression.range(),
        }
    }
}

/// `#[Name(parameters)]`
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: String,
    pub parameters: Vec<AttributeParameter>,
    pub range: SourceRange,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AttributeParameter {
    String(String, SourceRange),
    Expression(Expression),
}
