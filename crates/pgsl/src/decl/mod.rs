//! Module-scope declarations: variables, structs, enums and aliases.

pub(crate) mod attribute;
pub(crate) mod codegen;
pub(crate) mod typecheck;

use alloc::{string::String, vec::Vec};

pub use attribute::{Attribute, AttributeParameter};
use pgsl_syntax::cst::{EnumLiteral, GlobalKeyword};

use crate::ast::NodeId;

/// Root node. User declarations come first, built-in declarations after.
#[derive(Debug, Clone)]
pub struct DocumentNode {
    pub declarations: Vec<NodeId>,
    pub builtins: Vec<NodeId>,
}

#[derive(Debug, Clone)]
pub struct VariableDeclaration {
    pub attributes: Vec<Attribute>,
    pub keyword: GlobalKeyword,
    pub name: String,
    pub ty: NodeId,
    pub initializer: Option<NodeId>,
}

#[derive(Debug, Clone)]
pub struct StructDeclaration {
    pub attributes: Vec<Attribute>,
    pub name: String,
    pub properties: Vec<NodeId>,
}

#[derive(Debug, Clone)]
pub struct StructPropertyDeclaration {
    pub attributes: Vec<Attribute>,
    pub name: String,
    pub ty: NodeId,
}

#[derive(Debug, Clone)]
pub struct EnumDeclaration {
    pub name: String,
    pub values: Vec<EnumValueDeclaration>,
}

#[derive(Debug, Clone)]
pub struct EnumValueDeclaration {
    pub name: String,
    pub value: EnumLiteral,
    pub range: pgsl_syntax::SourceRange,
}

#[derive(Debug, Clone)]
pub struct AliasDeclaration {
    pub name: String,
    pub ty: NodeId,
}
