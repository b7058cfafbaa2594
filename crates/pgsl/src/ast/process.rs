//! The processing protocol: `Unprocessed -> Processing -> Done`.

use alloc::format;

use pgsl_syntax::SourceRange;

use super::{AnalysisContext, AstTree, NodeId, NodeKind, ProcessState, Resolved};
use crate::{
    control, decl, expr, function,
    error::{PgslError, PgslResult},
    stmt, types,
};

impl AstTree {
    /// Process a node, memoized.
    ///
    /// Children are processed by the node's own rules. A node that re-enters
    /// its own processing is a broken invariant and returns
    /// [`PgslError::ProcessingCycle`]; cycles in user code are reported as
    /// incidents before they get here.
    pub fn process(&self, id: NodeId, ctx: &mut AnalysisContext<'_>) -> PgslResult<&Resolved> {
        let node = self.node(id);
        match node.state.get() {
            ProcessState::Done => return node.resolved().ok_or(PgslError::Unprocessed { node: id }),
            ProcessState::Processing => return Err(PgslError::ProcessingCycle { node: id }),
            ProcessState::Unprocessed => {}
        }

        node.state.set(ProcessState::Processing);
        let resolved = self.on_process(id, node.range, &node.kind, ctx)?;
        // Only this call sets the cell; a second set cannot happen.
        let _ = node.resolved.set(resolved);
        node.state.set(ProcessState::Done);
        node.resolved().ok_or(PgslError::Unprocessed { node: id })
    }

    fn on_process(
        &self,
        id: NodeId,
        range: SourceRange,
        kind: &NodeKind,
        ctx: &mut AnalysisContext<'_>,
    ) -> PgslResult<Resolved> {
        use NodeKind::*;

        match kind {
            Document(document) => decl::typecheck::process_document(self, document, ctx),

            Variable(variable) => decl::typecheck::process_variable(self, id, range, variable, ctx),
            Struct(structure) => decl::typecheck::process_struct(self, id, range, structure, ctx),
            StructProperty(property) => decl::typecheck::process_struct_property(self, property, ctx),
            Enum(enumeration) => decl::typecheck::process_enum(enumeration, ctx),
            Alias(alias) => decl::typecheck::process_alias(self, alias, ctx),
            Function(function) => {
                function::typecheck::process_function(self, id, range, function, ctx)
            }
            Parameter(parameter) => function::typecheck::process_parameter(self, parameter, ctx),

            Type(ty) => types::typecheck::process_type(self, range, ty, ctx),

            Block(block) => stmt::typecheck::process_block(self, block, ctx),
            LocalVariable(variable) => {
                stmt::typecheck::process_local_variable(self, id, range, variable, ctx)
            }
            Assignment(assignment) => {
                stmt::typecheck::process_assignment(self, range, assignment, ctx)
            }
            Increment(increment) => stmt::typecheck::process_increment(self, range, increment, ctx),
            Return(statement) => stmt::typecheck::process_return(self, range, statement, ctx),
            CallStatement(statement) => stmt::typecheck::process_call_statement(self, statement, ctx),
            Break => control::typecheck::process_break(range, ctx),
            Continue => control::typecheck::process_continue(range, ctx),
            Discard => Ok(Resolved::void()),

            If(statement) => control::typecheck::process_if(self, statement, ctx),
            Switch(statement) => control::typecheck::process_switch(self, range, statement, ctx),
            While(statement) => control::typecheck::process_while(self, statement, ctx),
            DoWhile(statement) => control::typecheck::process_do_while(self, statement, ctx),
            For(statement) => control::typecheck::process_for(self, statement, ctx),

            Literal(literal) => Ok(expr::typecheck::process_literal(literal)),
            Identifier(identifier) => {
                expr::typecheck::process_identifier(self, range, identifier, ctx)
            }
            Binary(binary) => expr::typecheck::process_binary(self, range, binary, ctx),
            Unary(unary) => expr::typecheck::process_unary(self, range, unary, ctx),
            AddressOf(pointer) => expr::typecheck::process_address_of(self, range, pointer, ctx),
            Dereference(pointer) => {
                expr::typecheck::process_dereference(self, range, pointer, ctx)
            }
            Parenthesized(parenthesized) => {
                expr::typecheck::process_parenthesized(self, parenthesized, ctx)
            }
            Call(call) => function::typecheck::process_call(self, range, call, ctx),
            New(new) => expr::constructor::process_new(self, range, new, ctx),
            Member(member) => expr::typecheck::process_member(self, range, member, ctx),
            Index(index) => expr::typecheck::process_index(self, range, index, ctx),
        }
    }

    /// Process an expression used as a value.
    ///
    /// A call of a void function is only allowed as a statement.
    pub(crate) fn value(&self, id: NodeId, ctx: &mut AnalysisContext<'_>) -> PgslResult<&Resolved> {
        let resolved = self.process(id, ctx)?;
        if resolved.ty.is_void() {
            ctx.push_incident(
                "Function without a return value used as a value.",
                self.node(id).range,
            );
        }
        Ok(resolved)
    }

    /// Resolve a declaration a name refers to, processing it on demand.
    ///
    /// Module-scope declarations may be used before their turn; they are
    /// processed with only the module scope visible. Returns `None` after
    /// reporting an incident when the declaration is still processing, which
    /// means the name refers to itself.
    pub(crate) fn resolve_declaration(
        &self,
        declaration: NodeId,
        name: &str,
        range: SourceRange,
        ctx: &mut AnalysisContext<'_>,
    ) -> PgslResult<Option<&Resolved>> {
        let node = self.node(declaration);
        match node.state.get() {
            ProcessState::Done => Ok(node.resolved()),
            ProcessState::Processing => {
                ctx.push_incident(
                    format!("\"{}\" is used by its own declaration.", name),
                    range,
                );
                Ok(None)
            }
            ProcessState::Unprocessed => ctx
                .isolated(|ctx| self.process(declaration, ctx))
                .map(Some),
        }
    }
}

#[cfg(test)]
mod tests {
    use pgsl_syntax::{parse_document, SourceRange};

    use super::*;
    use crate::builtins::BuiltinLibrary;

    fn build(source: &str, library: &BuiltinLibrary) -> AstTree {
        AstTree::build(parse_document(source).unwrap(), library.declarations())
    }

    fn first(tree: &AstTree, matches: impl Fn(&NodeKind) -> bool) -> NodeId {
        tree.ids().find(|&id| matches(tree.node(id).kind())).unwrap()
    }

    #[test]
    fn test_reentering_a_node_is_an_error() {
        let library = BuiltinLibrary::new();
        let tree = build("const a: integer = 1;", &library);
        let mut ctx = AnalysisContext::new(&library);
        let literal = first(&tree, |kind| matches!(kind, NodeKind::Literal(_)));

        tree.node(literal).state.set(ProcessState::Processing);
        assert_eq!(
            tree.process(literal, &mut ctx),
            Err(PgslError::ProcessingCycle { node: literal })
        );
        assert!(ctx.diagnostics().is_empty());
    }

    #[test]
    fn test_done_nodes_are_not_processed_again() {
        let library = BuiltinLibrary::new();
        let tree = build("const a: integer = true;", &library);
        let mut ctx = AnalysisContext::new(&library);

        tree.process(tree.root(), &mut ctx).unwrap();
        let incidents = ctx.diagnostics().len();
        assert!(incidents > 0);

        for id in tree.ids() {
            if tree.node(id).state() == ProcessState::Done {
                tree.process(id, &mut ctx).unwrap();
            }
        }
        assert_eq!(ctx.diagnostics().len(), incidents);
    }

    #[test]
    fn test_processing_declaration_is_an_incident() {
        let library = BuiltinLibrary::new();
        let tree = build("const a: integer = 1;", &library);
        let mut ctx = AnalysisContext::new(&library);
        let variable = first(&tree, |kind| matches!(kind, NodeKind::Variable(_)));

        tree.node(variable).state.set(ProcessState::Processing);
        let resolved = tree
            .resolve_declaration(variable, "a", SourceRange::default(), &mut ctx)
            .unwrap();
        assert!(resolved.is_none());
        assert_eq!(
            ctx.diagnostics().incidents()[0].message,
            "\"a\" is used by its own declaration."
        );
    }
}
