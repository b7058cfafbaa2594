//! Module-scope declarations.

use alloc::{string::String, vec::Vec};

use super::{Attribute, BlockStatement, Expression, LiteralExpression, TypeDeclaration};
use crate::SourceRange;

#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    Variable(VariableDeclaration),
    Function(FunctionDeclaration),
    Struct(StructDeclaration),
    Enum(EnumDeclaration),
    Alias(AliasDeclaration),
}

impl Declaration {
    pub fn name(&self) -> &str {
        match self {
            Declaration::Variable(declaration) => &declaration.name,
            Declaration::Function(declaration) => &declaration.name,
            Declaration::Struct(declaration) => &declaration.name,
            Declaration::Enum(declaration) => &declaration.name,
            Declaration::Alias(declaration) => &declaration.name,
        }
    }

    pub fn range(&self) -> SourceRange {
        match self {
            Declaration::Variable(declaration) => declaration.range,
            Declaration::Function(declaration) => declaration.range,
            Declaration::Struct(declaration) => declaration.range,
            Declaration::Enum(declaration) => declaration.range,
            Declaration::Alias(declaration) => declaration.range,
        }
    }
}

/// Storage keyword of a module-scope variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlobalKeyword {
    Const,
    Private,
    Workgroup,
    Uniform,
    Storage,
    Handle,
}

impl GlobalKeyword {
    pub fn name(self) -> &'static str {
        match self {
            GlobalKeyword::Const => "const",
            GlobalKeyword::Private => "private",
            GlobalKeyword::Workgroup => "workgroup",
            GlobalKeyword::Uniform => "uniform",
            GlobalKeyword::Storage => "storage",
            GlobalKeyword::Handle => "handle",
        }
    }

    pub(crate) fn from_name(name: &str) -> Option<Self> {
        match name {
            "const" => Some(GlobalKeyword::Const),
            "private" => Some(GlobalKeyword::Private),
            "workgroup" => Some(GlobalKeyword::Workgroup),
            "uniform" => Some(GlobalKeyword::Uniform),
            "storage" => Some(GlobalKeyword::Storage),
            "handle" => Some(GlobalKeyword::Handle),
            _ => None,
        }
    }
}

/// `uniform cameraMatrix: Matrix44<float>;`
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclaration {
    pub attributes: Vec<Attribute>,
    pub keyword: GlobalKeyword,
    pub name: String,
    pub ty: TypeDeclaration,
    pub initializer: Option<Expression>,
    pub range: SourceRange,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDeclaration {
    pub attributes: Vec<Attribute>,
    pub name: String,
    pub parameters: Vec<ParameterDeclaration>,
    /// `None` for functions without a `: Type` suffix.
    pub return_type: Option<TypeDeclaration>,
    pub body: BlockStatement,
    pub range: SourceRange,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParameterDeclaration {
    pub attributes: Vec<Attribute>,
    pub name: String,
    pub ty: TypeDeclaration,
    pub range: SourceRange,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StructDeclaration {
    pub attributes: Vec<Attribute>,
    pub name: String,
    pub properties: Vec<StructProperty>,
    pub range: SourceRange,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StructProperty {
    pub attributes: Vec<Attribute>,
    pub name: String,
    pub ty: TypeDeclaration,
    pub range: SourceRange,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumDeclaration {
    pub name: String,
    pub values: Vec<EnumValue>,
    pub range: SourceRange,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumValue {
    pub name: String,
    pub value: EnumLiteral,
    pub range: SourceRange,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EnumLiteral {
    Number(LiteralExpression),
    String(String),
}

/// `alias Color = Vector4<float>;`
#[derive(Debug, Clone, PartialEq)]
pub struct AliasDeclaration {
    pub name: String,
    pub ty: TypeDeclaration,
    pub range: SourceRange,
}
