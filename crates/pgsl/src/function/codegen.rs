//! WGSL output of functions and calls.

use alloc::{format, string::String, vec::Vec};

use super::{CallExpression, FunctionDeclaration, ParameterDeclaration};
use crate::{
    ast::{Link, NodeId},
    decl::codegen::io_attributes,
    error::PgslResult,
    transpile::{ShaderStage, Transpile},
};

/// Transpile a function. Entry points get their stage attribute and are
/// recorded in the run's meta.
pub(crate) fn transpile_function(
    t: &mut Transpile<'_>,
    function: &FunctionDeclaration,
) -> PgslResult<String> {
    let mut head = String::new();
    let stage = function.attributes.iter().find_map(|attribute| {
        ShaderStage::from_attribute(&attribute.name).map(|stage| (attribute, stage))
    });
    if let Some((attribute, stage)) = stage {
        t.meta_mut().add_entry_point(function.name.as_str(), stage);
        head.push_str(&format!("@{} ", stage));
        if stage == ShaderStage::Compute {
            let sizes: Vec<NodeId> = attribute.expressions().collect();
            head.push_str(&format!("@workgroup_size({}) ", t.children(&sizes, ",")?));
        }
    }

    let parameters = t.children(&function.parameters, ",")?;
    let return_type = match function.return_type {
        Some(ty) => format!("->{}", t.child(ty)?),
        None => String::new(),
    };
    let body = t.child(function.body)?;
    Ok(format!(
        "{}fn {}({}){}{}",
        head, function.name, parameters, return_type, body
    ))
}

pub(crate) fn transpile_parameter(
    t: &mut Transpile<'_>,
    parameter: &ParameterDeclaration,
) -> PgslResult<String> {
    let attributes = io_attributes(t, &parameter.attributes);
    let ty = t.child(parameter.ty)?;
    Ok(format!("{}{}:{}", attributes, parameter.name, ty))
}

/// Built-in calls use their fixed WGSL spelling.
pub(crate) fn transpile_call(
    t: &mut Transpile<'_>,
    id: NodeId,
    call: &CallExpression,
) -> PgslResult<String> {
    let name = match t.resolved(id)?.link {
        Link::Builtin { target } => target,
        _ => call.name.as_str(),
    };
    let generics = if call.generics.is_empty() {
        String::new()
    } else {
        format!("<{}>", t.children(&call.generics, ",")?)
    };
    let arguments = t.children(&call.arguments, ",")?;
    Ok(format!("{}{}({})", name, generics, arguments))
}
