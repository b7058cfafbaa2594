//! WGSL output of module-scope declarations.

use alloc::{format, string::String, vec::Vec};

use pgsl_syntax::cst::GlobalKeyword;

use super::{
    attribute, AliasDeclaration, Attribute, DocumentNode, StructDeclaration,
    StructPropertyDeclaration, VariableDeclaration,
};
use crate::{error::PgslResult, transpile::Transpile};

/// Transpile the user declarations, one per line. Built-in declarations
/// have no output.
pub(crate) fn transpile_document(
    t: &mut Transpile<'_>,
    document: &DocumentNode,
) -> PgslResult<String> {
    let mut lines = Vec::new();
    for id in &document.declarations {
        let code = t.child(*id)?;
        if !code.is_empty() {
            lines.push(code);
        }
    }
    Ok(lines.join("\n"))
}

pub(crate) fn transpile_variable(
    t: &mut Transpile<'_>,
    variable: &VariableDeclaration,
) -> PgslResult<String> {
    let ty = t.child(variable.ty)?;
    let initializer = match variable.initializer {
        Some(initializer) => format!("={}", t.child(initializer)?),
        None => String::new(),
    };

    let head = match variable.keyword {
        GlobalKeyword::Const => String::from("const "),
        GlobalKeyword::Private => String::from("var<private> "),
        GlobalKeyword::Workgroup => String::from("var<workgroup> "),
        GlobalKeyword::Uniform => format!("{}var<uniform> ", binding(t, &variable.attributes)),
        GlobalKeyword::Storage => {
            let access = attribute::access_mode(t.tree(), &variable.attributes);
            format!(
                "{}var<storage,{}> ",
                binding(t, &variable.attributes),
                access.to_wgsl()
            )
        }
        GlobalKeyword::Handle => format!("{}var ", binding(t, &variable.attributes)),
    };

    Ok(format!("{}{}:{}{};", head, variable.name, ty, initializer))
}

/// `@group(g) @binding(b) ` of a `GroupBinding` attribute.
fn binding(t: &mut Transpile<'_>, attributes: &[Attribute]) -> String {
    let names = attribute::find(attributes, "GroupBinding")
        .and_then(|attribute| Some((attribute.string(0)?, attribute.string(1)?)));
    match names {
        Some((group, binding)) => {
            let (group, binding) = t.meta_mut().binding(group, binding);
            format!("@group({}) @binding({}) ", group, binding)
        }
        None => String::new(),
    }
}

/// `@location(n) ` and `@builtin(name) ` of shader inputs and outputs.
pub(crate) fn io_attributes(t: &mut Transpile<'_>, attributes: &[Attribute]) -> String {
    let mut prefix = String::new();
    for attribute in attributes {
        match (attribute.name.as_str(), attribute.string(0)) {
            ("Location", Some(name)) => {
                let location = t.meta_mut().location(name);
                prefix.push_str(&format!("@location({}) ", location));
            }
            ("BuiltIn", Some(name)) => prefix.push_str(&format!("@builtin({}) ", name)),
            _ => {}
        }
    }
    prefix
}

pub(crate) fn transpile_struct(
    t: &mut Transpile<'_>,
    structure: &StructDeclaration,
) -> PgslResult<String> {
    let properties = t.children(&structure.properties, ",")?;
    Ok(format!("struct {}{{{}}}", structure.name, properties))
}

pub(crate) fn transpile_struct_property(
    t: &mut Transpile<'_>,
    property: &StructPropertyDeclaration,
) -> PgslResult<String> {
    let attributes = io_attributes(t, &property.attributes);
    let ty = t.child(property.ty)?;
    Ok(format!("{}{}:{}", attributes, property.name, ty))
}

pub(crate) fn transpile_alias(t: &mut Transpile<'_>, alias: &AliasDeclaration) -> PgslResult<String> {
    Ok(format!("alias {}={};", alias.name, t.child(alias.ty)?))
}
