//! Functions, parameters and calls.

pub(crate) mod codegen;
pub(crate) mod typecheck;

use alloc::{string::String, vec::Vec};

use crate::{ast::NodeId, decl::Attribute};

#[derive(Debug, Clone)]
pub struct FunctionDeclaration {
    pub attributes: Vec<Attribute>,
    pub name: String,
    pub parameters: Vec<NodeId>,
    pub return_type: Option<NodeId>,
    pub body: NodeId,
}

#[derive(Debug, Clone)]
pub struct ParameterDeclaration {
    pub attributes: Vec<Attribute>,
    pub name: String,
    pub ty: NodeId,
}

/// `name<generics>(arguments)`, a user or built-in function call.
#[derive(Debug, Clone)]
pub struct CallExpression {
    pub name: String,
    pub generics: Vec<NodeId>,
    pub arguments: Vec<NodeId>,
}
