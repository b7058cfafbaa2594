//! Resolution of type declarations into [`Type`]s.

use alloc::{format, string::String};

use pgsl_syntax::SourceRange;

use super::{
    AccessMode, NumericKind, TexelFormat, TextureType, Type, TypeDeclaration, TypeTemplate,
};
use crate::{
    ast::{AnalysisContext, AstTree, ConstantValue, FixedState, NodeId, NodeKind, Resolved},
    error::PgslResult,
    symbols::SymbolKind,
};

pub(crate) fn process_type(
    tree: &AstTree,
    range: SourceRange,
    declaration: &TypeDeclaration,
    ctx: &mut AnalysisContext<'_>,
) -> PgslResult<Resolved> {
    let ty = match TypeTemplate::lookup(&declaration.name) {
        Some(template) => template_type(tree, range, template, declaration, ctx)?,
        None => user_type(tree, range, declaration, ctx)?,
    };
    Ok(Resolved::new(ty, FixedState::Constant))
}

/// Struct, enum or alias declared in the document.
fn user_type(
    tree: &AstTree,
    range: SourceRange,
    declaration: &TypeDeclaration,
    ctx: &mut AnalysisContext<'_>,
) -> PgslResult<Type> {
    let symbol = ctx
        .symbols()
        .lookup(&declaration.name)
        .filter(|symbol| symbol.kind.is_type())
        .cloned();
    let Some(symbol) = symbol else {
        ctx.push_incident(format!("Type \"{}\" not defined.", declaration.name), range);
        return Ok(Type::Invalid);
    };
    if !declaration.arguments.is_empty() {
        ctx.push_incident(
            format!("Type \"{}\" takes no template arguments.", declaration.name),
            range,
        );
    }
    let resolved = tree.resolve_declaration(symbol.declaration, &symbol.name, range, ctx)?;
    Ok(resolved.map_or(Type::Invalid, |resolved| resolved.ty.clone()))
}

fn template_type(
    tree: &AstTree,
    range: SourceRange,
    template: TypeTemplate,
    declaration: &TypeDeclaration,
    ctx: &mut AnalysisContext<'_>,
) -> PgslResult<Type> {
    let arguments = &declaration.arguments;
    let (min, max) = template.arity();
    if arguments.len() < min || arguments.len() > max {
        let expected = if min == max {
            format!("{}", min)
        } else {
            format!("{} to {}", min, max)
        };
        ctx.push_incident(
            format!(
                "Type \"{}\" expects {} template argument(s), found {}.",
                declaration.name,
                expected,
                arguments.len()
            ),
            range,
        );
        return Ok(Type::Invalid);
    }

    let ty = match template {
        TypeTemplate::Boolean => Type::Boolean,
        TypeTemplate::Numeric(kind) => Type::Numeric(kind),
        TypeTemplate::Vector(dimension) => {
            let inner = type_argument(tree, arguments[0], ctx)?;
            match inner {
                Type::Boolean | Type::Numeric(_) => Type::vector(dimension, inner),
                Type::Invalid => Type::Invalid,
                other => {
                    ctx.push_incident(
                        format!("Vector element must be a scalar type, found \"{}\".", other),
                        range,
                    );
                    Type::Invalid
                }
            }
        }
        TypeTemplate::Matrix(columns, rows) => {
            let inner = type_argument(tree, arguments[0], ctx)?;
            match inner {
                Type::Numeric(kind) if kind.is_float() => Type::matrix(columns, rows, inner),
                Type::Invalid => Type::Invalid,
                other => {
                    ctx.push_incident(
                        format!("Matrix element must be a float type, found \"{}\".", other),
                        range,
                    );
                    Type::Invalid
                }
            }
        }
        TypeTemplate::Array => {
            let inner = type_argument(tree, arguments[0], ctx)?;
            let length = match arguments.get(1) {
                Some(argument) => match array_length(tree, *argument, ctx)? {
                    Some(length) => Some(length),
                    None => return Ok(Type::Invalid),
                },
                None => None,
            };
            if !inner.is_invalid() && !inner.properties().plain {
                ctx.push_incident(
                    format!("Array element must be a plain type, found \"{}\".", inner),
                    range,
                );
                return Ok(Type::Invalid);
            }
            Type::array(inner, length)
        }
        TypeTemplate::Pointer => {
            // Pointer types are spelled in the function address space.
            let inner = type_argument(tree, arguments[0], ctx)?;
            if !inner.is_invalid() && !inner.properties().fixed_footprint {
                ctx.push_incident(
                    format!("Pointer target must have a fixed footprint, found \"{}\".", inner),
                    range,
                );
                return Ok(Type::Invalid);
            }
            Type::pointer(inner)
        }
        TypeTemplate::Sampler(kind) => Type::Sampler(kind),
        TypeTemplate::SampledTexture {
            dimension,
            multisampled,
        } => match type_argument(tree, arguments[0], ctx)? {
            Type::Numeric(
                kind @ (NumericKind::Float32 | NumericKind::Integer | NumericKind::Unsigned),
            ) => Type::texture(if multisampled {
                TextureType::multisampled(kind)
            } else {
                TextureType::sampled(dimension, kind)
            }),
            Type::Invalid => Type::Invalid,
            other => {
                ctx.push_incident(
                    format!(
                        "Texture sample type must be float32, integer or unsigned, found \"{}\".",
                        other
                    ),
                    range,
                );
                Type::Invalid
            }
        },
        TypeTemplate::DepthTexture {
            dimension,
            multisampled,
        } => Type::texture(if multisampled {
            TextureType::depth_multisampled()
        } else {
            TextureType::depth(dimension)
        }),
        TypeTemplate::StorageTexture(dimension) => {
            let format = enum_argument(tree, arguments[0], "TexelFormat", ctx)?
                .and_then(|value| TexelFormat::from_wgsl(&value));
            let access = enum_argument(tree, arguments[1], "AccessMode", ctx)?
                .and_then(|value| AccessMode::from_wgsl(&value));
            match (format, access) {
                (Some(format), Some(access)) => {
                    Type::texture(TextureType::storage(dimension, format, access))
                }
                _ => Type::Invalid,
            }
        }
        TypeTemplate::ExternalTexture => Type::texture(TextureType::external()),
    };
    Ok(ty)
}

fn type_argument(
    tree: &AstTree,
    id: NodeId,
    ctx: &mut AnalysisContext<'_>,
) -> PgslResult<Type> {
    match tree.node(id).kind() {
        NodeKind::Type(_) => Ok(tree.process(id, ctx)?.ty.clone()),
        _ => {
            ctx.push_incident("Expected a type as template argument.", tree.node(id).range());
            Ok(Type::Invalid)
        }
    }
}

/// Constant positive array length. `None` after reporting an incident.
fn array_length(
    tree: &AstTree,
    id: NodeId,
    ctx: &mut AnalysisContext<'_>,
) -> PgslResult<Option<u32>> {
    let node = tree.node(id);
    let (ty, constant) = match node.kind() {
        // A bare name parses as a type; here it names a constant.
        NodeKind::Type(ty) if ty.arguments.is_empty() => {
            let symbol = ctx
                .symbols()
                .lookup(&ty.name)
                .filter(|symbol| symbol.kind == SymbolKind::Value)
                .cloned();
            let Some(symbol) = symbol else {
                ctx.push_incident(
                    format!("Array length \"{}\" is not a constant.", ty.name),
                    node.range(),
                );
                return Ok(None);
            };
            match tree.resolve_declaration(symbol.declaration, &symbol.name, node.range(), ctx)? {
                Some(resolved) => (resolved.ty.clone(), resolved.constant.clone()),
                None => return Ok(None),
            }
        }
        NodeKind::Type(_) => (Type::Void, None),
        _ => {
            let resolved = tree.value(id, ctx)?;
            (resolved.ty.clone(), resolved.constant.clone())
        }
    };
    if ty.is_invalid() {
        return Ok(None);
    }
    if let Some(ConstantValue::Integer(length)) = constant {
        match u32::try_from(length) {
            Ok(length) if length > 0 => return Ok(Some(length)),
            _ => {}
        }
    }
    ctx.push_incident("Array length must be a positive constant integer.", node.range());
    Ok(None)
}

/// String value of a built-in enum value such as `TexelFormat.Rgba8unorm`.
fn enum_argument(
    tree: &AstTree,
    id: NodeId,
    enum_name: &str,
    ctx: &mut AnalysisContext<'_>,
) -> PgslResult<Option<String>> {
    let resolved = match tree.node(id).kind() {
        NodeKind::Type(_) => None,
        _ => Some(tree.value(id, ctx)?),
    };
    match resolved {
        Some(resolved) if resolved.ty.is_invalid() => Ok(None),
        Some(Resolved {
            ty: Type::Enum(enumeration),
            constant: Some(ConstantValue::String(value)),
            ..
        }) if enumeration.name == enum_name => Ok(Some(value.clone())),
        _ => {
            ctx.push_incident(
                format!("Expected a value of enum \"{}\".", enum_name),
                tree.node(id).range(),
            );
            Ok(None)
        }
    }
}
