//! `new T(arguments)`: value constructors and conversions.
//!
//! Without template arguments a vector, matrix or array infers them from
//! its arguments and is emitted with WGSL's inferred constructor
//! (`vec3(...)`).

use alloc::{format, string::String, vec::Vec};

use pgsl_syntax::SourceRange;

use super::NewExpression;
use crate::{
    ast::{AnalysisContext, AstTree, FixedState, NodeId, NodeKind, Resolved},
    error::PgslResult,
    transpile::Transpile,
    types::{NumericKind, Type, TypeTemplate},
};

/// Template a `new` infers its type arguments for, if any.
fn inferred_template(tree: &AstTree, new: &NewExpression) -> Option<TypeTemplate> {
    match tree.node(new.ty).kind() {
        NodeKind::Type(declaration) if declaration.arguments.is_empty() => {
            TypeTemplate::lookup(&declaration.name).filter(|template| template.is_inferable())
        }
        _ => None,
    }
}

pub(crate) fn process_new(
    tree: &AstTree,
    range: SourceRange,
    new: &NewExpression,
    ctx: &mut AnalysisContext<'_>,
) -> PgslResult<Resolved> {
    let mut arguments = Vec::with_capacity(new.arguments.len());
    let mut fixed = FixedState::Constant;
    for argument in &new.arguments {
        let resolved = tree.value(*argument, ctx)?;
        fixed = fixed.combine(resolved.fixed);
        arguments.push(resolved.ty.clone());
    }

    let ty = match inferred_template(tree, new) {
        Some(template) => match infer(template, &arguments) {
            Ok(ty) => ty,
            Err(message) => {
                ctx.push_incident(message, range);
                return Ok(Resolved::invalid());
            }
        },
        None => tree.process(new.ty, ctx)?.ty.clone(),
    };

    if let Err(message) = check_arguments(&ty, &arguments) {
        ctx.push_incident(message, range);
    }
    Ok(Resolved::new(ty, fixed))
}

/// Common scalar element of all arguments.
fn common_element(arguments: &[Type]) -> Option<Type> {
    let mut elements = arguments.iter().map(|argument| argument.element().cloned());
    let first = elements.next()??;
    elements.try_fold(first, |common, element| common.unify(&element?))
}

fn infer(template: TypeTemplate, arguments: &[Type]) -> Result<Type, String> {
    let failure = || {
        let names: Vec<String> = arguments.iter().map(|ty| format!("{}", ty)).collect();
        format!(
            "Can not infer the type arguments of constructor from arguments ({}).",
            names.join(", ")
        )
    };
    if arguments.iter().any(Type::is_invalid) {
        return Ok(Type::Invalid);
    }

    match template {
        TypeTemplate::Vector(dimension) => {
            let element = common_element(arguments).ok_or_else(failure)?;
            Ok(Type::vector(dimension, element))
        }
        TypeTemplate::Matrix(columns, rows) => {
            let element = match common_element(arguments).ok_or_else(failure)? {
                Type::Numeric(NumericKind::AbstractInteger) => Type::abstract_float(),
                element => element,
            };
            if !matches!(element.numeric_kind(), Some(kind) if kind.is_float()) {
                return Err(failure());
            }
            Ok(Type::matrix(columns, rows, element))
        }
        TypeTemplate::Array => {
            let (first, rest) = arguments.split_first().ok_or_else(failure)?;
            let element = rest
                .iter()
                .try_fold(first.clone(), |common, argument| common.unify(argument))
                .ok_or_else(failure)?;
            Ok(Type::array(element, Some(arguments.len() as u32)))
        }
        _ => Err(failure()),
    }
}

/// Number of scalar components an argument contributes to a vector or
/// matrix constructor.
fn components(argument: &Type) -> Option<usize> {
    match argument {
        Type::Boolean | Type::Numeric(_) => Some(1),
        Type::Vector(vector) => Some(vector.dimension.count()),
        _ => None,
    }
}

fn mismatch(ty: &Type, argument: &Type) -> String {
    format!(
        "Argument of type \"{}\" can not construct \"{}\".",
        argument, ty
    )
}

fn count_mismatch(ty: &Type, expected: usize, found: usize) -> String {
    format!(
        "Constructor of \"{}\" expects {} component(s), found {}.",
        ty, expected, found
    )
}

/// First argument that does not implicitly cast into `target`.
fn check_each<'a>(
    ty: &Type,
    arguments: impl IntoIterator<Item = (&'a Type, &'a Type)>,
) -> Result<(), String> {
    match arguments
        .into_iter()
        .find(|(argument, target)| !argument.is_implicit_castable_into(target))
    {
        Some((argument, _)) => Err(mismatch(ty, argument)),
        None => Ok(()),
    }
}

/// Check `arguments` against the constructor of `ty`. No arguments builds
/// the zero value.
fn check_arguments(ty: &Type, arguments: &[Type]) -> Result<(), String> {
    if ty.is_invalid() || arguments.iter().any(Type::is_invalid) {
        return Ok(());
    }
    if !ty.properties().constructible {
        return Err(format!("Type \"{}\" is not constructible.", ty));
    }
    if arguments.is_empty() {
        return Ok(());
    }

    match (ty, arguments) {
        (Type::Boolean | Type::Numeric(_), [argument]) => {
            if argument.is_explicit_castable_into(ty) {
                Ok(())
            } else {
                Err(mismatch(ty, argument))
            }
        }
        (Type::Boolean | Type::Numeric(_), _) => Err(count_mismatch(ty, 1, arguments.len())),

        // Conversion between equal shapes.
        (Type::Vector(_) | Type::Matrix(_), [argument]) if argument.shape_matches(ty) => {
            if argument.is_explicit_castable_into(ty) {
                Ok(())
            } else {
                Err(mismatch(ty, argument))
            }
        }
        (Type::Vector(vector), _) => {
            component_arguments(ty, &vector.inner, vector.dimension.count(), arguments, true)
        }
        (Type::Matrix(matrix), _) => {
            let columns = matrix.columns.count();
            if arguments.iter().all(|argument| matches!(argument, Type::Vector(_))) {
                if arguments.len() != columns {
                    return Err(count_mismatch(ty, columns, arguments.len()));
                }
                let column = Type::vector(matrix.rows, (*matrix.inner).clone());
                check_each(ty, arguments.iter().map(|argument| (argument, &column)))
            } else {
                let expected = columns * matrix.rows.count();
                component_arguments(ty, &matrix.inner, expected, arguments, false)
            }
        }
        (Type::Array(array), _) => {
            if let Some(length) = array.length {
                if arguments.len() != length as usize {
                    return Err(count_mismatch(ty, length as usize, arguments.len()));
                }
            }
            let inner: &Type = &array.inner;
            check_each(ty, arguments.iter().map(|argument| (argument, inner)))
        }
        (Type::Struct(structure), _) => {
            if arguments.len() != structure.properties.len() {
                return Err(count_mismatch(
                    ty,
                    structure.properties.len(),
                    arguments.len(),
                ));
            }
            check_each(
                ty,
                arguments
                    .iter()
                    .zip(&structure.properties)
                    .map(|(argument, property)| (argument, &property.ty)),
            )
        }
        _ => Err(format!("Type \"{}\" is not constructible.", ty)),
    }
}

/// Scalars and vectors whose components add up to `expected`. A single
/// scalar splats when `splat` is set.
fn component_arguments(
    ty: &Type,
    element: &Type,
    expected: usize,
    arguments: &[Type],
    splat: bool,
) -> Result<(), String> {
    let mut found = 0;
    for argument in arguments {
        let castable = argument
            .element()
            .is_some_and(|inner| inner.is_implicit_castable_into(element));
        match components(argument) {
            Some(count) if castable => found += count,
            _ => return Err(mismatch(ty, argument)),
        }
    }
    let splatted = splat && arguments.len() == 1 && found == 1;
    if found == expected || splatted {
        Ok(())
    } else {
        Err(count_mismatch(ty, expected, found))
    }
}

/// Inferred constructors print only their head, `vec3(...)`; all others
/// print the full type.
pub(crate) fn transpile_new(
    t: &mut Transpile<'_>,
    id: NodeId,
    new: &NewExpression,
) -> PgslResult<String> {
    let head = match inferred_template(t.tree(), new) {
        Some(_) => t.resolved(id)?.ty.constructor_head(),
        None => t.child(new.ty)?,
    };
    let arguments = t.children(&new.arguments, ",")?;
    Ok(format!("{}({})", head, arguments))
}
