//! Type rules of simple statements.

use alloc::format;

use pgsl_syntax::{
    cst::{BinaryOperator, LocalKeyword},
    SourceRange,
};

use super::{
    AssignmentStatement, BlockStatement, CallStatement, IncrementStatement,
    LocalVariableStatement, ReturnStatement,
};
use crate::{
    ast::{AnalysisContext, AstTree, FixedState, NodeId, Resolved},
    decl::typecheck::check_initializer,
    error::PgslResult,
    expr::operator::binary_result,
    symbols::SymbolKind,
    types::Type,
};

pub(crate) fn process_block(
    tree: &AstTree,
    block: &BlockStatement,
    ctx: &mut AnalysisContext<'_>,
) -> PgslResult<Resolved> {
    ctx.symbols_mut().push_scope();
    for statement in &block.statements {
        tree.process(*statement, ctx)?;
    }
    ctx.symbols_mut().pop_scope();
    Ok(Resolved::void())
}

/// Process a `const`, `let` or `var` statement and declare its name in the
/// current scope. The name is visible after its initializer.
pub(crate) fn process_local_variable(
    tree: &AstTree,
    id: NodeId,
    range: SourceRange,
    variable: &LocalVariableStatement,
    ctx: &mut AnalysisContext<'_>,
) -> PgslResult<Resolved> {
    let declared = tree.process(variable.ty, ctx)?.ty.clone();
    let initializer = match variable.initializer {
        Some(initializer) => Some(tree.value(initializer, ctx)?.clone()),
        None => None,
    };

    match (&initializer, variable.keyword) {
        (None, LocalKeyword::Const | LocalKeyword::Let) => ctx.push_incident(
            format!(
                "Variables with \"{}\" keyword require an initializer.",
                variable.keyword.name()
            ),
            range,
        ),
        (Some(initializer), keyword) => {
            check_initializer(&variable.name, &declared, initializer, range, ctx);
            if keyword == LocalKeyword::Const && initializer.fixed != FixedState::Constant {
                ctx.push_incident(
                    format!("Initializer of constant \"{}\" must be constant.", variable.name),
                    range,
                );
            }
        }
        (None, LocalKeyword::Var) => {}
    }

    let properties = declared.properties();
    let type_allowed = match variable.keyword {
        LocalKeyword::Const => properties.constructible,
        LocalKeyword::Let => properties.constructible || matches!(declared, Type::Pointer(_)),
        LocalKeyword::Var => properties.storable,
    };
    if !type_allowed {
        ctx.push_incident(
            format!(
                "Type \"{}\" can not be used with \"{}\" keyword.",
                declared,
                variable.keyword.name()
            ),
            range,
        );
    }

    if let Err(message) = ctx
        .symbols_mut()
        .declare(&variable.name, SymbolKind::Value, id)
    {
        ctx.push_incident(message, range);
    }

    Ok(match variable.keyword {
        LocalKeyword::Const => Resolved {
            constant: initializer.and_then(|initializer| initializer.constant),
            ..Resolved::new(declared, FixedState::Constant)
        },
        LocalKeyword::Let => Resolved::new(declared, FixedState::ScopeFixed),
        LocalKeyword::Var => Resolved::new(declared, FixedState::Variable)
            .assignable(true)
            .reference(true),
    })
}

fn check_assignable(target: &Resolved, range: SourceRange, ctx: &mut AnalysisContext<'_>) {
    if !target.assignable && !target.ty.is_invalid() {
        ctx.push_incident("Assignment target is not assignable.", range);
    }
}

pub(crate) fn process_assignment(
    tree: &AstTree,
    range: SourceRange,
    assignment: &AssignmentStatement,
    ctx: &mut AnalysisContext<'_>,
) -> PgslResult<Resolved> {
    let target = tree.value(assignment.target, ctx)?.clone();
    let value = tree.value(assignment.value, ctx)?.ty.clone();
    check_assignable(&target, tree.node(assignment.target).range(), ctx);

    let assigned = match assignment.operator.binary() {
        None => Ok(value),
        Some(operator) => binary_result(operator, &target.ty, &value),
    };
    match assigned {
        Ok(assigned) if assigned.is_implicit_castable_into(&target.ty) => {}
        Ok(assigned) => ctx.push_incident(
            format!(
                "Value of type \"{}\" can not be assigned to \"{}\".",
                assigned, target.ty
            ),
            range,
        ),
        Err(message) => ctx.push_incident(message, range),
    }
    Ok(Resolved::void())
}

/// `i++` and `i--` type-check like `i += 1`.
pub(crate) fn process_increment(
    tree: &AstTree,
    range: SourceRange,
    increment: &IncrementStatement,
    ctx: &mut AnalysisContext<'_>,
) -> PgslResult<Resolved> {
    let target = tree.value(increment.target, ctx)?.clone();
    check_assignable(&target, tree.node(increment.target).range(), ctx);

    let integer = matches!(target.ty.numeric_kind(), Some(kind) if kind.is_integer());
    if !integer && !target.ty.is_invalid() {
        ctx.push_incident(
            format!(
                "Operator \"{}\" requires an integer target, found \"{}\".",
                increment.operator.token(),
                target.ty
            ),
            range,
        );
    } else if let Err(message) =
        binary_result(BinaryOperator::Add, &target.ty, &Type::abstract_integer())
    {
        ctx.push_incident(message, range);
    }
    Ok(Resolved::void())
}

pub(crate) fn process_return(
    tree: &AstTree,
    range: SourceRange,
    statement: &ReturnStatement,
    ctx: &mut AnalysisContext<'_>,
) -> PgslResult<Resolved> {
    let value = match statement.value {
        Some(value) => Some(tree.value(value, ctx)?.ty.clone()),
        None => None,
    };
    let Some(frame) = ctx.frame() else {
        ctx.push_incident("\"return\" is only allowed inside a function.", range);
        return Ok(Resolved::void());
    };
    let name = frame.name.clone();
    let expected = frame.return_type.clone();

    match value {
        None if !expected.is_void() => ctx.push_incident(
            format!("Function \"{}\" must return a value of type \"{}\".", name, expected),
            range,
        ),
        Some(_) if expected.is_void() => ctx.push_incident(
            format!("Function \"{}\" does not return a value.", name),
            range,
        ),
        Some(value) if !value.is_implicit_castable_into(&expected) => ctx.push_incident(
            format!(
                "Value of type \"{}\" can not be returned from function \"{}\" with return type \"{}\".",
                value, name, expected
            ),
            range,
        ),
        _ => {}
    }
    Ok(Resolved::void())
}

/// A call statement may discard any result, including none.
pub(crate) fn process_call_statement(
    tree: &AstTree,
    statement: &CallStatement,
    ctx: &mut AnalysisContext<'_>,
) -> PgslResult<Resolved> {
    tree.process(statement.call, ctx)?;
    Ok(Resolved::void())
}
