//! WGSL output of simple statements.

use alloc::{format, string::String};

use super::{
    AssignmentStatement, BlockStatement, CallStatement, IncrementStatement,
    LocalVariableStatement, ReturnStatement,
};
use crate::{error::PgslResult, transpile::Transpile};

pub(crate) fn transpile_block(t: &mut Transpile<'_>, block: &BlockStatement) -> PgslResult<String> {
    Ok(format!("{{{}}}", block_contents(t, block)?))
}

/// Statements of a block without the surrounding braces. Loops lowered to
/// `loop` splice their body in with this.
pub(crate) fn block_contents(t: &mut Transpile<'_>, block: &BlockStatement) -> PgslResult<String> {
    t.children(&block.statements, "")
}

pub(crate) fn transpile_local_variable(
    t: &mut Transpile<'_>,
    variable: &LocalVariableStatement,
) -> PgslResult<String> {
    let ty = t.child(variable.ty)?;
    let initializer = match variable.initializer {
        Some(initializer) => format!("={}", t.child(initializer)?),
        None => String::new(),
    };
    Ok(format!(
        "{} {}:{}{};",
        variable.keyword.name(),
        variable.name,
        ty,
        initializer
    ))
}

pub(crate) fn transpile_assignment(
    t: &mut Transpile<'_>,
    assignment: &AssignmentStatement,
) -> PgslResult<String> {
    let target = t.child(assignment.target)?;
    let value = t.child(assignment.value)?;
    Ok(format!("{}{}{};", target, assignment.operator.token(), value))
}

pub(crate) fn transpile_increment(
    t: &mut Transpile<'_>,
    increment: &IncrementStatement,
) -> PgslResult<String> {
    let target = t.child(increment.target)?;
    Ok(format!("{}{};", target, increment.operator.token()))
}

pub(crate) fn transpile_return(
    t: &mut Transpile<'_>,
    statement: &ReturnStatement,
) -> PgslResult<String> {
    match statement.value {
        Some(value) => Ok(format!("return {};", t.child(value)?)),
        None => Ok(String::from("return;")),
    }
}

/// A discarded result is assigned to the phony `_`.
pub(crate) fn transpile_call_statement(
    t: &mut Transpile<'_>,
    statement: &CallStatement,
) -> PgslResult<String> {
    let call = t.child(statement.call)?;
    if t.resolved(statement.call)?.ty.is_void() {
        Ok(format!("{};", call))
    } else {
        Ok(format!("_={};", call))
    }
}
