//! Type rules of functions, parameters and calls.

use alloc::{format, vec::Vec};

use pgsl_syntax::SourceRange;

use super::{CallExpression, FunctionDeclaration, ParameterDeclaration};
use crate::{
    ast::{AnalysisContext, AstTree, FixedState, FunctionFrame, Link, NodeId, NodeKind, Resolved},
    builtins::BuiltinFunction,
    decl::attribute::{check_attributes, AttributeTarget},
    error::PgslResult,
    symbols::{Symbol, SymbolKind},
    types::Type,
};

/// Process a function declaration. Its resolved type is the return type.
pub(crate) fn process_function(
    tree: &AstTree,
    id: NodeId,
    range: SourceRange,
    function: &FunctionDeclaration,
    ctx: &mut AnalysisContext<'_>,
) -> PgslResult<Resolved> {
    check_attributes(tree, &function.attributes, AttributeTarget::Function, ctx)?;

    let return_type = match function.return_type {
        Some(ty) => tree.process(ty, ctx)?.ty.clone(),
        None => Type::Void,
    };
    if !return_type.is_void() && !return_type.properties().constructible {
        ctx.push_incident(
            format!(
                "Function \"{}\" can not return type \"{}\".",
                function.name, return_type
            ),
            range,
        );
    }

    ctx.symbols_mut().push_scope();
    for parameter in &function.parameters {
        tree.process(*parameter, ctx)?;
        let node = tree.node(*parameter);
        if let NodeKind::Parameter(declaration) = node.kind() {
            if let Err(message) =
                ctx.symbols_mut()
                    .declare(&declaration.name, SymbolKind::Value, *parameter)
            {
                ctx.push_incident(message, node.range());
            }
        }
    }

    log::trace!("Processing body of function {} ({})", function.name, id);
    let previous = ctx.enter_function(FunctionFrame::new(&function.name, return_type.clone()));
    let body = tree.process(function.body, ctx).map(|_| ());
    ctx.leave_function(previous);
    ctx.symbols_mut().pop_scope();
    body?;

    Ok(Resolved::new(return_type, FixedState::Constant))
}

pub(crate) fn process_parameter(
    tree: &AstTree,
    parameter: &ParameterDeclaration,
    ctx: &mut AnalysisContext<'_>,
) -> PgslResult<Resolved> {
    check_attributes(tree, &parameter.attributes, AttributeTarget::Parameter, ctx)?;
    let ty = tree.process(parameter.ty, ctx)?.ty.clone();
    let allowed = ty.properties().constructible
        || matches!(ty, Type::Pointer(_) | Type::Texture(_) | Type::Sampler(_));
    if !allowed {
        ctx.push_incident(
            format!("Parameter \"{}\" can not have type \"{}\".", parameter.name, ty),
            tree.node(parameter.ty).range(),
        );
    }
    Ok(Resolved::new(ty, FixedState::ScopeFixed))
}

/// Process a call of a user function or a built-in function.
///
/// User declarations shadow built-in functions of the same name.
pub(crate) fn process_call(
    tree: &AstTree,
    range: SourceRange,
    call: &CallExpression,
    ctx: &mut AnalysisContext<'_>,
) -> PgslResult<Resolved> {
    let mut arguments = Vec::with_capacity(call.arguments.len());
    let mut fixed = FixedState::Constant;
    for argument in &call.arguments {
        let resolved = tree.value(*argument, ctx)?;
        fixed = fixed.combine(resolved.fixed);
        arguments.push(resolved.ty.clone());
    }
    let mut generics = Vec::with_capacity(call.generics.len());
    for generic in &call.generics {
        generics.push(tree.process(*generic, ctx)?.ty.clone());
    }

    match ctx.symbols().lookup(&call.name).cloned() {
        Some(symbol) if symbol.kind == SymbolKind::Function => {
            user_call(tree, range, call, &symbol, &arguments, ctx)
        }
        Some(symbol) => {
            ctx.push_incident(format!("\"{}\" is not a function.", symbol.name), range);
            Ok(Resolved::invalid())
        }
        None => match ctx.library().function(&call.name) {
            Some(function) => Ok(builtin_call(function, range, &arguments, &generics, fixed, ctx)),
            None => {
                ctx.push_incident(format!("Function \"{}\" not defined.", call.name), range);
                Ok(Resolved::invalid())
            }
        },
    }
}

fn user_call(
    tree: &AstTree,
    range: SourceRange,
    call: &CallExpression,
    symbol: &Symbol,
    arguments: &[Type],
    ctx: &mut AnalysisContext<'_>,
) -> PgslResult<Resolved> {
    if !call.generics.is_empty() {
        ctx.push_incident(
            format!("Function \"{}\" takes no generic arguments.", call.name),
            range,
        );
    }

    let Some(declaration) = tree.resolve_declaration(symbol.declaration, &symbol.name, range, ctx)?
    else {
        return Ok(Resolved::invalid());
    };
    let return_type = declaration.ty.clone();
    let NodeKind::Function(function) = tree.node(symbol.declaration).kind() else {
        return Ok(Resolved::invalid());
    };

    let mut parameters = Vec::with_capacity(function.parameters.len());
    for parameter in &function.parameters {
        parameters.push(tree.process(*parameter, ctx)?.ty.clone());
    }

    if parameters.len() != arguments.len() {
        ctx.push_incident(
            format!(
                "Function \"{}\" expects {} argument(s), found {}.",
                call.name,
                parameters.len(),
                arguments.len()
            ),
            range,
        );
    } else {
        for (index, (argument, parameter)) in arguments.iter().zip(&parameters).enumerate() {
            if !argument.is_implicit_castable_into(parameter) {
                ctx.push_incident(
                    format!(
                        "Argument {} of function \"{}\" must be \"{}\", found \"{}\".",
                        index + 1,
                        call.name,
                        parameter,
                        argument
                    ),
                    tree.node(call.arguments[index]).range(),
                );
            }
        }
    }

    Ok(Resolved::new(return_type, FixedState::Variable)
        .with_link(Link::Declaration(symbol.declaration)))
}

/// Resolve a built-in overload. The result is as fixed as the arguments.
fn builtin_call(
    function: &BuiltinFunction,
    range: SourceRange,
    arguments: &[Type],
    generics: &[Type],
    fixed: FixedState,
    ctx: &mut AnalysisContext<'_>,
) -> Resolved {
    if arguments.iter().chain(generics).any(Type::is_invalid) {
        return Resolved::invalid();
    }
    match function.resolve(arguments, generics) {
        Ok(overload) => Resolved::new(overload.return_type, fixed).with_link(Link::Builtin {
            target: function.target,
        }),
        Err(failure) => {
            ctx.push_incident(failure.message, range);
            Resolved::invalid()
        }
    }
}
