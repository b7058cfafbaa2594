//! WGSL output of expressions. Operators are emitted without spaces.

use alloc::{format, string::String};

use pgsl_syntax::cst::UnaryOperator;

use super::{BinaryExpression, IndexExpression, MemberExpression, UnaryExpression};
use crate::{
    ast::{ConstantValue, Link, NodeId},
    error::PgslResult,
    transpile::Transpile,
};

pub(crate) fn transpile_binary(
    t: &mut Transpile<'_>,
    binary: &BinaryExpression,
) -> PgslResult<String> {
    let left = t.child(binary.left)?;
    let right = t.child(binary.right)?;
    Ok(format!("{}{}{}", left, binary.operator.token(), right))
}

pub(crate) fn transpile_unary(t: &mut Transpile<'_>, unary: &UnaryExpression) -> PgslResult<String> {
    let operand = t.child(unary.operand)?;
    // `- -x` must not become the decrement token.
    if unary.operator == UnaryOperator::Negate && operand.starts_with('-') {
        return Ok(format!("-({})", operand));
    }
    Ok(format!("{}{}", unary.operator.token(), operand))
}

/// Enum values are inlined as their value.
pub(crate) fn transpile_member(
    t: &mut Transpile<'_>,
    id: NodeId,
    member: &MemberExpression,
) -> PgslResult<String> {
    let resolved = t.resolved(id)?;
    if resolved.link == Link::EnumValue {
        return Ok(match &resolved.constant {
            Some(ConstantValue::Integer(value)) => format!("{}", value),
            Some(ConstantValue::String(value)) => value.clone(),
            _ => String::new(),
        });
    }
    Ok(format!("{}.{}", t.child(member.base)?, member.property))
}

pub(crate) fn transpile_index(t: &mut Transpile<'_>, index: &IndexExpression) -> PgslResult<String> {
    let base = t.child(index.base)?;
    let position = t.child(index.index)?;
    Ok(format!("{}[{}]", base, position))
}
