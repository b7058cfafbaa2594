//! WGSL transpilation of a processed [`AstTree`].
//!
//! [`Transpile::child`] is the single dispatch point: one exhaustive match
//! over [`NodeKind`] that hands each node to the `codegen` module of its
//! construct. Processors receive the `Transpile` itself so they can
//! transpile their children and update the run's [`TranspilationMeta`].

mod meta;

use alloc::{
    format,
    string::{String, ToString},
    vec::Vec,
};

pub use meta::{BindingGroup, EntryPoint, ShaderStage, TranspilationMeta};

use crate::{
    ast::{AstTree, NodeId, NodeKind, ProcessState, Resolved},
    control, decl, expr, function,
    error::{PgslError, PgslResult},
    stmt, types,
};

pub struct Transpile<'t> {
    tree: &'t AstTree,
    meta: TranspilationMeta,
}

impl<'t> Transpile<'t> {
    pub fn new(tree: &'t AstTree) -> Self {
        Self {
            tree,
            meta: TranspilationMeta::new(),
        }
    }

    pub fn tree(&self) -> &'t AstTree {
        self.tree
    }

    /// Processing result of a node. Transpiling a node that never finished
    /// processing is a broken invariant.
    pub fn resolved(&self, id: NodeId) -> PgslResult<&'t Resolved> {
        let node = self.tree.node(id);
        match (node.state(), node.resolved()) {
            (ProcessState::Done, Some(resolved)) => Ok(resolved),
            _ => Err(PgslError::Unprocessed { node: id }),
        }
    }

    /// Transpile one node.
    pub fn child(&mut self, id: NodeId) -> PgslResult<String> {
        use NodeKind::*;

        self.resolved(id)?;
        let tree = self.tree;
        match tree.node(id).kind() {
            Document(document) => decl::codegen::transpile_document(self, document),

            Variable(variable) => decl::codegen::transpile_variable(self, variable),
            Struct(structure) => decl::codegen::transpile_struct(self, structure),
            StructProperty(property) => decl::codegen::transpile_struct_property(self, property),
            Enum(_) => Ok(String::new()),
            Alias(alias) => decl::codegen::transpile_alias(self, alias),
            Function(function) => function::codegen::transpile_function(self, function),
            Parameter(parameter) => function::codegen::transpile_parameter(self, parameter),

            Type(_) => Ok(types::codegen::transpile_type(self.resolved(id)?)),

            Block(block) => stmt::codegen::transpile_block(self, block),
            LocalVariable(variable) => stmt::codegen::transpile_local_variable(self, variable),
            Assignment(assignment) => stmt::codegen::transpile_assignment(self, assignment),
            Increment(increment) => stmt::codegen::transpile_increment(self, increment),
            Return(statement) => stmt::codegen::transpile_return(self, statement),
            CallStatement(statement) => stmt::codegen::transpile_call_statement(self, statement),
            Break => Ok("break;".to_string()),
            Continue => Ok("continue;".to_string()),
            Discard => Ok("discard;".to_string()),

            If(statement) => control::codegen::transpile_if(self, statement),
            Switch(statement) => control::codegen::transpile_switch(self, statement),
            While(statement) => control::codegen::transpile_while(self, statement),
            DoWhile(statement) => control::codegen::transpile_do_while(self, statement),
            For(statement) => control::codegen::transpile_for(self, statement),

            Literal(literal) => Ok(literal.text.clone()),
            Identifier(identifier) => Ok(identifier.name.clone()),
            Binary(binary) => expr::codegen::transpile_binary(self, binary),
            Unary(unary) => expr::codegen::transpile_unary(self, unary),
            AddressOf(pointer) => Ok(format!("&{}", self.child(pointer.operand)?)),
            Dereference(pointer) => Ok(format!("*{}", self.child(pointer.operand)?)),
            Parenthesized(parenthesized) => Ok(format!("({})", self.child(parenthesized.inner)?)),
            Call(call) => function::codegen::transpile_call(self, id, call),
            New(new) => expr::constructor::transpile_new(self, id, new),
            Member(member) => expr::codegen::transpile_member(self, id, member),
            Index(index) => expr::codegen::transpile_index(self, index),
        }
    }

    /// Transpile nodes in order and join them with `separator`.
    pub fn children(&mut self, ids: &[NodeId], separator: &str) -> PgslResult<String> {
        let mut parts = Vec::with_capacity(ids.len());
        for id in ids {
            parts.push(self.child(*id)?);
        }
        Ok(parts.join(separator))
    }

    pub fn meta(&self) -> &TranspilationMeta {
        &self.meta
    }

    pub fn meta_mut(&mut self) -> &mut TranspilationMeta {
        &mut self.meta
    }

    pub fn into_meta(self) -> TranspilationMeta {
        self.meta
    }
}
