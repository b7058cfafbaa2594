//! Type rules of module-scope declarations.

use alloc::{collections::BTreeSet, format, rc::Rc, vec::Vec};

use pgsl_syntax::{
    cst::{EnumLiteral, GlobalKeyword, LiteralKind},
    SourceRange,
};

use super::{
    attribute::{self, check_attributes, AttributeTarget},
    AliasDeclaration, DocumentNode, EnumDeclaration, StructDeclaration, StructPropertyDeclaration,
    VariableDeclaration,
};
use crate::{
    ast::{AnalysisContext, AstTree, FixedState, NodeId, NodeKind, Resolved},
    error::PgslResult,
    symbols::SymbolKind,
    types::{EnumType, EnumValue, EnumValueKind, StructProperty, StructType, Type},
};

/// Name and symbol kind a module-scope node declares.
pub(crate) fn declared_symbol(kind: &NodeKind) -> Option<(&str, SymbolKind)> {
    match kind {
        NodeKind::Variable(variable) => Some((&variable.name, SymbolKind::Value)),
        NodeKind::Function(function) => Some((&function.name, SymbolKind::Function)),
        NodeKind::Struct(structure) => Some((&structure.name, SymbolKind::Struct)),
        NodeKind::Enum(enumeration) => Some((&enumeration.name, SymbolKind::Enum)),
        NodeKind::Alias(alias) => Some((&alias.name, SymbolKind::Alias)),
        _ => None,
    }
}

/// Register every global name, then process the declarations in order.
///
/// A declaration used before its turn was already processed on demand and
/// is skipped by the memoization.
pub(crate) fn process_document(
    tree: &AstTree,
    document: &DocumentNode,
    ctx: &mut AnalysisContext<'_>,
) -> PgslResult<Resolved> {
    ctx.symbols_mut().push_scope();

    let declarations: Vec<NodeId> = document
        .declarations
        .iter()
        .chain(&document.builtins)
        .copied()
        .collect();

    for id in &declarations {
        let node = tree.node(*id);
        let Some((name, kind)) = declared_symbol(node.kind()) else {
            continue;
        };
        if let Err(message) = ctx.symbols_mut().declare(name, kind, *id) {
            ctx.push_incident(message, node.range());
        }
    }

    for id in declarations {
        tree.process(id, ctx)?;
    }

    Ok(Resolved::void())
}

pub(crate) fn process_variable(
    tree: &AstTree,
    id: NodeId,
    range: SourceRange,
    variable: &VariableDeclaration,
    ctx: &mut AnalysisContext<'_>,
) -> PgslResult<Resolved> {
    let keyword = variable.keyword;
    check_attributes(
        tree,
        &variable.attributes,
        AttributeTarget::Variable(keyword),
        ctx,
    )?;

    let declared = tree.process(variable.ty, ctx)?.ty.clone();
    let initializer = match variable.initializer {
        Some(initializer) => Some(tree.value(initializer, ctx)?.clone()),
        None => None,
    };

    match (keyword, &initializer) {
        (GlobalKeyword::Const, None) => ctx.push_incident(
            format!("Constant \"{}\" requires an initializer.", variable.name),
            range,
        ),
        (
            GlobalKeyword::Workgroup
            | GlobalKeyword::Uniform
            | GlobalKeyword::Storage
            | GlobalKeyword::Handle,
            Some(_),
        ) => ctx.push_incident(
            format!(
                "Variables with \"{}\" keyword can not have an initializer.",
                keyword.name()
            ),
            range,
        ),
        _ => {}
    }

    if let Some(initializer) = &initializer {
        check_initializer(&variable.name, &declared, initializer, range, ctx);
        if keyword == GlobalKeyword::Const && initializer.fixed != FixedState::Constant {
            ctx.push_incident(
                format!("Initializer of constant \"{}\" must be constant.", variable.name),
                range,
            );
        }
    }

    let properties = declared.properties();
    let type_allowed = match keyword {
        GlobalKeyword::Const => properties.constructible,
        GlobalKeyword::Private | GlobalKeyword::Workgroup => properties.storable,
        GlobalKeyword::Uniform | GlobalKeyword::Storage => properties.host_shareable,
        GlobalKeyword::Handle => {
            matches!(declared, Type::Texture(_) | Type::Sampler(_) | Type::Invalid)
        }
    };
    if !type_allowed {
        ctx.push_incident(
            format!(
                "Type \"{}\" can not be used with \"{}\" keyword.",
                declared,
                keyword.name()
            ),
            range,
        );
    }

    let bound = matches!(
        keyword,
        GlobalKeyword::Uniform | GlobalKeyword::Storage | GlobalKeyword::Handle
    );
    if bound && attribute::find(&variable.attributes, "GroupBinding").is_none() {
        ctx.push_incident(
            format!(
                "Variables with \"{}\" keyword require a \"GroupBinding\" attribute.",
                keyword.name()
            ),
            range,
        );
    }

    let resolved = match keyword {
        GlobalKeyword::Const => Resolved {
            constant: initializer.and_then(|initializer| initializer.constant),
            ..Resolved::new(declared, FixedState::Constant)
        },
        GlobalKeyword::Private | GlobalKeyword::Workgroup => {
            Resolved::new(declared, FixedState::Variable)
                .assignable(true)
                .reference(true)
        }
        GlobalKeyword::Storage => {
            let access = attribute::access_mode(tree, &variable.attributes);
            if !access.is_readable() {
                ctx.push_incident("Storage variables can not be write-only.", range);
            }
            Resolved::new(declared, FixedState::Variable)
                .assignable(access.is_writable())
                .reference(true)
        }
        GlobalKeyword::Uniform => Resolved::new(declared, FixedState::Variable).reference(true),
        GlobalKeyword::Handle => Resolved::new(declared, FixedState::Variable),
    };
    log::trace!("Variable {} ({}) is {}", variable.name, id, resolved.ty);
    Ok(resolved)
}

/// Push an incident when an initializer does not cast into the declared type.
pub(crate) fn check_initializer(
    name: &str,
    declared: &Type,
    initializer: &Resolved,
    range: SourceRange,
    ctx: &mut AnalysisContext<'_>,
) {
    if !initializer.ty.is_implicit_castable_into(declared) {
        ctx.push_incident(
            format!(
                "Initializer of type \"{}\" can not be assigned to \"{}\" of type \"{}\".",
                initializer.ty, name, declared
            ),
            range,
        );
    }
}

pub(crate) fn process_struct(
    tree: &AstTree,
    id: NodeId,
    range: SourceRange,
    structure: &StructDeclaration,
    ctx: &mut AnalysisContext<'_>,
) -> PgslResult<Resolved> {
    check_attributes(tree, &structure.attributes, AttributeTarget::Struct, ctx)?;

    let mut names = BTreeSet::new();
    let mut properties = Vec::new();
    let count = structure.properties.len();
    for (index, property_id) in structure.properties.iter().enumerate() {
        let ty = tree.process(*property_id, ctx)?.ty.clone();
        let property_range = tree.node(*property_id).range();
        let NodeKind::StructProperty(property) = tree.node(*property_id).kind() else {
            continue;
        };

        if !names.insert(property.name.as_str()) {
            ctx.push_incident(
                format!(
                    "Property \"{}\" is declared more than once in struct \"{}\".",
                    property.name, structure.name
                ),
                property_range,
            );
        }
        if index + 1 < count && !ty.properties().fixed_footprint {
            ctx.push_incident(
                format!(
                    "Only the last property of struct \"{}\" can have a runtime-sized type.",
                    structure.name
                ),
                property_range,
            );
        }
        properties.push(StructProperty {
            name: property.name.clone(),
            ty,
        });
    }

    if properties.is_empty() {
        ctx.push_incident(
            format!("Struct \"{}\" must have at least one property.", structure.name),
            range,
        );
    }

    let ty = Type::Struct(Rc::new(StructType {
        name: structure.name.clone(),
        properties,
        declaration: id,
    }));
    Ok(Resolved::new(ty, FixedState::Constant))
}

pub(crate) fn process_struct_property(
    tree: &AstTree,
    property: &StructPropertyDeclaration,
    ctx: &mut AnalysisContext<'_>,
) -> PgslResult<Resolved> {
    check_attributes(
        tree,
        &property.attributes,
        AttributeTarget::StructProperty,
        ctx,
    )?;
    let ty = tree.process(property.ty, ctx)?.ty.clone();
    if !ty.properties().plain {
        ctx.push_incident(
            format!(
                "Property \"{}\" can not have type \"{}\".",
                property.name, ty
            ),
            tree.node(property.ty).range(),
        );
    }
    Ok(Resolved::new(ty, FixedState::Constant))
}

pub(crate) fn process_enum(
    enumeration: &EnumDeclaration,
    ctx: &mut AnalysisContext<'_>,
) -> PgslResult<Resolved> {
    let mut names = BTreeSet::new();
    let mut values = Vec::new();
    for value in &enumeration.values {
        if !names.insert(value.name.as_str()) {
            ctx.push_incident(
                format!(
                    "Value \"{}\" is declared more than once in enum \"{}\".",
                    value.name, enumeration.name
                ),
                value.range,
            );
            continue;
        }
        let kind = match &value.value {
            EnumLiteral::String(text) => EnumValueKind::String(text.clone()),
            EnumLiteral::Number(literal) => match literal.kind {
                LiteralKind::Integer(number, _) => EnumValueKind::Integer(number),
                _ => {
                    ctx.push_incident(
                        "Enum value must be an integer or a string.",
                        value.range,
                    );
                    continue;
                }
            },
        };
        values.push(EnumValue {
            name: value.name.clone(),
            value: kind,
        });
    }

    let ty = Type::Enum(Rc::new(EnumType {
        name: enumeration.name.clone(),
        values,
    }));
    Ok(Resolved::new(ty, FixedState::Constant))
}

pub(crate) fn process_alias(
    tree: &AstTree,
    alias: &AliasDeclaration,
    ctx: &mut AnalysisContext<'_>,
) -> PgslResult<Resolved> {
    let ty = tree.process(alias.ty, ctx)?.ty.clone();
    Ok(Resolved::new(ty, FixedState::Constant))
}
