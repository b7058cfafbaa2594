//! Type rules of expressions.

use alloc::{format, rc::Rc};

use pgsl_syntax::{
    cst::{LiteralKind, NumberSuffix, UnaryOperator},
    SourceRange,
};

use super::{
    operator::{binary_result, unary_result},
    BinaryExpression, IdentifierExpression, IndexExpression, LiteralExpression, MemberExpression,
    ParenthesizedExpression, PointerExpression, UnaryExpression,
};
use crate::{
    ast::{
        AnalysisContext, AstTree, ConstantValue, FixedState, Link, NodeId, NodeKind, Resolved,
    },
    error::PgslResult,
    symbols::SymbolKind,
    types::{Dimension, EnumType, EnumValueKind, NumericKind, Type},
};

/// Literals are constants; an unsuffixed literal is abstract.
pub(crate) fn process_literal(literal: &LiteralExpression) -> Resolved {
    let numeric = |suffix: Option<NumberSuffix>, fallback: NumericKind| {
        Type::Numeric(match suffix {
            Some(NumberSuffix::Integer) => NumericKind::Integer,
            Some(NumberSuffix::Unsigned) => NumericKind::Unsigned,
            Some(NumberSuffix::Float32) => NumericKind::Float32,
            Some(NumberSuffix::Float16) => NumericKind::Float16,
            None => fallback,
        })
    };
    match literal.kind {
        LiteralKind::Boolean(value) => {
            Resolved::constant(Type::Boolean, ConstantValue::Boolean(value))
        }
        LiteralKind::Integer(value, suffix) => {
            let ty = numeric(suffix, NumericKind::AbstractInteger);
            let constant = match ty.numeric_kind() {
                Some(kind) if kind.is_float() => ConstantValue::Float(value as f64),
                _ => ConstantValue::Integer(value),
            };
            Resolved::constant(ty, constant)
        }
        LiteralKind::Float(value, suffix) => Resolved::constant(
            numeric(suffix, NumericKind::AbstractFloat),
            ConstantValue::Float(value),
        ),
    }
}

/// A value name resolves to its declaration. Enum names resolve too, so a
/// member access can read their values.
pub(crate) fn process_identifier(
    tree: &AstTree,
    range: SourceRange,
    identifier: &IdentifierExpression,
    ctx: &mut AnalysisContext<'_>,
) -> PgslResult<Resolved> {
    let Some(symbol) = ctx.symbols().lookup(&identifier.name).cloned() else {
        ctx.push_incident(
            format!("Variable \"{}\" not defined.", identifier.name),
            range,
        );
        return Ok(Resolved::invalid());
    };

    match symbol.kind {
        SymbolKind::Value | SymbolKind::Enum => {
            let declaration =
                tree.resolve_declaration(symbol.declaration, &symbol.name, range, ctx)?;
            Ok(match declaration {
                Some(declaration) => declaration
                    .clone()
                    .with_link(Link::Declaration(symbol.declaration)),
                None => Resolved::invalid(),
            })
        }
        SymbolKind::Function | SymbolKind::Struct | SymbolKind::Alias => {
            ctx.push_incident(format!("\"{}\" is not a value.", symbol.name), range);
            Ok(Resolved::invalid())
        }
    }
}

/// Binary expressions are as fixed as their least fixed operand. Constant
/// values are not folded.
pub(crate) fn process_binary(
    tree: &AstTree,
    range: SourceRange,
    binary: &BinaryExpression,
    ctx: &mut AnalysisContext<'_>,
) -> PgslResult<Resolved> {
    let left = tree.value(binary.left, ctx)?.clone();
    let right = tree.value(binary.right, ctx)?.clone();
    let fixed = left.fixed.combine(right.fixed);
    match binary_result(binary.operator, &left.ty, &right.ty) {
        Ok(ty) => Ok(Resolved::new(ty, fixed)),
        Err(message) => {
            ctx.push_incident(message, range);
            Ok(Resolved::invalid())
        }
    }
}

pub(crate) fn process_unary(
    tree: &AstTree,
    range: SourceRange,
    unary: &UnaryExpression,
    ctx: &mut AnalysisContext<'_>,
) -> PgslResult<Resolved> {
    let operand = tree.value(unary.operand, ctx)?.clone();
    let ty = match unary_result(unary.operator, &operand.ty) {
        Ok(ty) => ty,
        Err(message) => {
            ctx.push_incident(message, range);
            return Ok(Resolved::invalid());
        }
    };
    let constant = match (unary.operator, operand.constant) {
        (UnaryOperator::Negate, Some(ConstantValue::Integer(value))) => {
            value.checked_neg().map(ConstantValue::Integer)
        }
        (UnaryOperator::Negate, Some(ConstantValue::Float(value))) => {
            Some(ConstantValue::Float(-value))
        }
        (UnaryOperator::Not, Some(ConstantValue::Boolean(value))) => {
            Some(ConstantValue::Boolean(!value))
        }
        (UnaryOperator::BitNot, Some(ConstantValue::Integer(value))) => {
            Some(ConstantValue::Integer(!value))
        }
        _ => None,
    };
    Ok(Resolved {
        constant,
        ..Resolved::new(ty, operand.fixed)
    })
}

/// `&value` takes the address of a variable, whatever its access mode.
pub(crate) fn process_address_of(
    tree: &AstTree,
    range: SourceRange,
    pointer: &PointerExpression,
    ctx: &mut AnalysisContext<'_>,
) -> PgslResult<Resolved> {
    let operand = tree.value(pointer.operand, ctx)?.clone();
    if operand.ty.is_invalid() {
        return Ok(Resolved::invalid());
    }
    if !operand.reference {
        ctx.push_incident(
            "Can not take the address of an expression that is not a variable.",
            range,
        );
    }
    Ok(Resolved::new(Type::pointer(operand.ty), FixedState::ScopeFixed))
}

pub(crate) fn process_dereference(
    tree: &AstTree,
    range: SourceRange,
    pointer: &PointerExpression,
    ctx: &mut AnalysisContext<'_>,
) -> PgslResult<Resolved> {
    let operand = tree.value(pointer.operand, ctx)?.ty.clone();
    match operand {
        Type::Pointer(inner) => Ok(Resolved::new(*inner, FixedState::Variable)
            .assignable(true)
            .reference(true)),
        Type::Invalid => Ok(Resolved::invalid()),
        other => {
            ctx.push_incident(
                format!("Can not dereference non-pointer type \"{}\".", other),
                range,
            );
            Ok(Resolved::invalid())
        }
    }
}

/// Parentheses keep everything about their content but the link.
pub(crate) fn process_parenthesized(
    tree: &AstTree,
    parenthesized: &ParenthesizedExpression,
    ctx: &mut AnalysisContext<'_>,
) -> PgslResult<Resolved> {
    let inner = tree.value(parenthesized.inner, ctx)?.clone();
    Ok(inner.with_link(Link::None))
}

/// Enum of the declaration an identifier links to, if it names an enum.
fn enum_base<'t>(
    tree: &'t AstTree,
    base: NodeId,
    resolved: &Resolved,
) -> Option<&'t Rc<EnumType>> {
    let Link::Declaration(declaration) = resolved.link else {
        return None;
    };
    if !matches!(tree.node(declaration).kind(), NodeKind::Enum(_)) {
        return None;
    }
    if !matches!(tree.node(base).kind(), NodeKind::Identifier(_)) {
        return None;
    }
    match &tree.node(declaration).resolved()?.ty {
        Type::Enum(enumeration) => Some(enumeration),
        _ => None,
    }
}

/// Enum values, struct properties and vector swizzles.
pub(crate) fn process_member(
    tree: &AstTree,
    range: SourceRange,
    member: &MemberExpression,
    ctx: &mut AnalysisContext<'_>,
) -> PgslResult<Resolved> {
    let base = tree.value(member.base, ctx)?.clone();

    if let Some(enumeration) = enum_base(tree, member.base, &base) {
        return Ok(enum_value(enumeration, &member.property, range, ctx));
    }

    match &base.ty {
        Type::Invalid => Ok(Resolved::invalid()),
        Type::Struct(structure) => match structure.property(&member.property) {
            Some(property) => Ok(Resolved::new(property.ty.clone(), base.fixed)
                .assignable(base.assignable)
                .reference(base.reference)),
            None => {
                ctx.push_incident(
                    format!(
                        "Struct \"{}\" has no property \"{}\".",
                        structure.name, member.property
                    ),
                    range,
                );
                Ok(Resolved::invalid())
            }
        },
        Type::Vector(vector) => match swizzle(&member.property, vector.dimension) {
            Some(1) => Ok(Resolved::new((*vector.inner).clone(), base.fixed)
                .assignable(base.assignable)),
            Some(count) => match Dimension::from_count(count) {
                Some(dimension) => Ok(Resolved::new(
                    Type::vector(dimension, (*vector.inner).clone()),
                    base.fixed,
                )),
                None => Ok(Resolved::invalid()),
            },
            None => {
                ctx.push_incident(
                    format!("Invalid swizzle \"{}\" on \"{}\".", member.property, base.ty),
                    range,
                );
                Ok(Resolved::invalid())
            }
        },
        other => {
            ctx.push_incident(
                format!("Type \"{}\" has no property \"{}\".", other, member.property),
                range,
            );
            Ok(Resolved::invalid())
        }
    }
}

/// Integer enum values are abstract integers; string values keep the enum
/// type so they only fit where that enum is expected.
fn enum_value(
    enumeration: &Rc<EnumType>,
    name: &str,
    range: SourceRange,
    ctx: &mut AnalysisContext<'_>,
) -> Resolved {
    let Some(value) = enumeration.value(name) else {
        ctx.push_incident(
            format!("Enum \"{}\" has no value \"{}\".", enumeration.name, name),
            range,
        );
        return Resolved::invalid();
    };
    let resolved = match &value.value {
        EnumValueKind::Integer(number) => {
            Resolved::constant(Type::abstract_integer(), ConstantValue::Integer(*number))
        }
        EnumValueKind::String(text) => Resolved::constant(
            Type::Enum(Rc::clone(enumeration)),
            ConstantValue::String(text.clone()),
        ),
    };
    resolved.with_link(Link::EnumValue)
}

/// Component count of a swizzle, when it is valid for `dimension`.
///
/// Components come from one set, `xyzw` or `rgba`.
pub(crate) fn swizzle(property: &str, dimension: Dimension) -> Option<usize> {
    const SETS: [&str; 2] = ["xyzw", "rgba"];
    let count = property.len();
    if !(1..=4).contains(&count) {
        return None;
    }
    SETS.iter().find_map(|set| {
        let valid = property
            .chars()
            .all(|c| set.find(c).is_some_and(|index| index < dimension.count()));
        valid.then_some(count)
    })
}

pub(crate) fn process_index(
    tree: &AstTree,
    range: SourceRange,
    index: &IndexExpression,
    ctx: &mut AnalysisContext<'_>,
) -> PgslResult<Resolved> {
    let base = tree.value(index.base, ctx)?.clone();
    let position = tree.value(index.index, ctx)?.clone();

    let integer = matches!(position.ty.numeric_kind(), Some(kind) if kind.is_integer());
    if !integer && !position.ty.is_invalid() {
        ctx.push_incident(
            format!("Index must be an integer, found \"{}\".", position.ty),
            tree.node(index.index).range(),
        );
    }

    let Some(element) = base.ty.indexed() else {
        ctx.push_incident(format!("Type \"{}\" can not be indexed.", base.ty), range);
        return Ok(Resolved::invalid());
    };

    if let (Some(ConstantValue::Integer(value)), Some(count)) =
        (&position.constant, base.ty.element_count())
    {
        if *value < 0 || *value as usize >= count {
            ctx.push_incident(
                format!("Index {} is out of bounds for \"{}\".", value, base.ty),
                tree.node(index.index).range(),
            );
        }
    }

    // Vector components are not addressable.
    let reference = base.reference && !matches!(base.ty, Type::Vector(_));
    Ok(Resolved::new(element, base.fixed.combine(position.fixed))
        .assignable(base.assignable)
        .reference(reference))
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    fn literal(kind: LiteralKind, text: &str) -> LiteralExpression {
        LiteralExpression {
            kind,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_literal_types() {
        let abstract_float = process_literal(&literal(LiteralKind::Float(5.0, None), "5.0"));
        assert_eq!(abstract_float.ty, Type::abstract_float());
        assert_eq!(abstract_float.fixed, FixedState::Constant);

        let unsigned = process_literal(&literal(
            LiteralKind::Integer(3, Some(NumberSuffix::Unsigned)),
            "3u",
        ));
        assert_eq!(unsigned.ty, Type::unsigned());
        assert_eq!(unsigned.constant, Some(ConstantValue::Integer(3)));

        let float = process_literal(&literal(
            LiteralKind::Integer(2, Some(NumberSuffix::Float32)),
            "2f",
        ));
        assert_eq!(float.ty, Type::float32());
        assert_eq!(float.constant, Some(ConstantValue::Float(2.0)));
    }

    #[test]
    fn test_swizzles() {
        assert_eq!(swizzle("xyz", Dimension::Three), Some(3));
        assert_eq!(swizzle("rgba", Dimension::Four), Some(4));
        assert_eq!(swizzle("x", Dimension::Two), Some(1));
        assert_eq!(swizzle("xz", Dimension::Two), None);
        assert_eq!(swizzle("xg", Dimension::Four), None);
        assert_eq!(swizzle("xxxxx", Dimension::Four), None);
        assert_eq!(swizzle("", Dimension::Four), None);
    }
}
