//! Declaration attributes: `#[GroupBinding("scene", "camera")]`.

use alloc::{collections::BTreeSet, format, string::String, vec::Vec};

use pgsl_syntax::{cst::GlobalKeyword, SourceRange};

use crate::{
    ast::{AnalysisContext, AstTree, ConstantValue, NodeId, Resolved},
    error::PgslResult,
    types::{AccessMode, Type},
};

#[derive(Debug, Clone)]
pub struct Attribute {
    pub name: String,
    pub parameters: Vec<AttributeParameter>,
    pub range: SourceRange,
}

#[derive(Debug, Clone)]
pub enum AttributeParameter {
    String(String, SourceRange),
    Expression(NodeId),
}

impl Attribute {
    /// Text of the string parameter at `index`.
    pub fn string(&self, index: usize) -> Option<&str> {
        match self.parameters.get(index) {
            Some(AttributeParameter::String(text, _)) => Some(text),
            _ => None,
        }
    }

    pub fn expressions(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.parameters.iter().filter_map(|parameter| match parameter {
            AttributeParameter::Expression(id) => Some(*id),
            AttributeParameter::String(..) => None,
        })
    }
}

/// What an attribute list is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AttributeTarget {
    Variable(GlobalKeyword),
    Struct,
    StructProperty,
    Function,
    Parameter,
}

/// Stage attributes of entry point functions.
pub(crate) const STAGES: [&str; 3] = ["Vertex", "Fragment", "Compute"];

/// WGSL built-in values accepted by `BuiltIn`.
const BUILTIN_VALUES: [&str; 12] = [
    "vertex_index",
    "instance_index",
    "position",
    "front_facing",
    "frag_depth",
    "sample_index",
    "sample_mask",
    "local_invocation_id",
    "local_invocation_index",
    "global_invocation_id",
    "workgroup_id",
    "num_workgroups",
];

pub(crate) fn find<'a>(attributes: &'a [Attribute], name: &str) -> Option<&'a Attribute> {
    attributes.iter().find(|attribute| attribute.name == name)
}

/// Access mode of a storage variable; `Read` without an attribute.
pub(crate) fn access_mode(tree: &AstTree, attributes: &[Attribute]) -> AccessMode {
    find(attributes, "AccessMode")
        .and_then(|attribute| attribute.expressions().next())
        .and_then(|id| tree.node(id).resolved())
        .and_then(|resolved| match &resolved.constant {
            Some(ConstantValue::String(value)) => AccessMode::from_wgsl(value),
            _ => None,
        })
        .unwrap_or(AccessMode::Read)
}

/// Process attribute expressions and check names, placement and parameters.
pub(crate) fn check_attributes(
    tree: &AstTree,
    attributes: &[Attribute],
    target: AttributeTarget,
    ctx: &mut AnalysisContext<'_>,
) -> PgslResult<()> {
    let mut seen = BTreeSet::new();
    let mut stages = 0;

    for attribute in attributes {
        let mut values = Vec::new();
        for id in attribute.expressions() {
            values.push(tree.value(id, ctx)?.clone());
        }

        let name = attribute.name.as_str();
        if !seen.insert(name) {
            ctx.push_incident(
                format!("Attribute \"{}\" is declared more than once.", name),
                attribute.range,
            );
            continue;
        }

        let allowed = match name {
            "GroupBinding" => matches!(
                target,
                AttributeTarget::Variable(
                    GlobalKeyword::Uniform | GlobalKeyword::Storage | GlobalKeyword::Handle
                )
            ),
            "AccessMode" => target == AttributeTarget::Variable(GlobalKeyword::Storage),
            "Vertex" | "Fragment" | "Compute" => target == AttributeTarget::Function,
            "Location" | "BuiltIn" => matches!(
                target,
                AttributeTarget::StructProperty | AttributeTarget::Parameter
            ),
            _ => {
                ctx.push_incident(format!("Unknown attribute \"{}\".", name), attribute.range);
                continue;
            }
        };
        if !allowed {
            ctx.push_incident(
                format!("Attribute \"{}\" is not allowed here.", name),
                attribute.range,
            );
            continue;
        }

        if STAGES.contains(&name) {
            stages += 1;
            if stages > 1 {
                ctx.push_incident(
                    "A function can only be one kind of entry point.",
                    attribute.range,
                );
            }
        }

        if let Err(message) = check_parameters(attribute, &values) {
            ctx.push_incident(message, attribute.range);
        }
    }
    Ok(())
}

fn check_parameters(attribute: &Attribute, values: &[Resolved]) -> Result<(), String> {
    let strings = attribute
        .parameters
        .iter()
        .filter(|parameter| matches!(parameter, AttributeParameter::String(..)))
        .count();
    let count = attribute.parameters.len();
    let name = attribute.name.as_str();

    match name {
        "GroupBinding" if strings == 2 && count == 2 => Ok(()),
        "GroupBinding" => Err(format!("Attribute \"{}\" expects two string parameters.", name)),
        "Location" if strings == 1 && count == 1 => Ok(()),
        "BuiltIn" if strings == 1 && count == 1 => match attribute.string(0) {
            Some(value) if BUILTIN_VALUES.contains(&value) => Ok(()),
            value => Err(format!(
                "Unknown built-in value \"{}\".",
                value.unwrap_or_default()
            )),
        },
        "Location" | "BuiltIn" => Err(format!("Attribute \"{}\" expects one string parameter.", name)),
        "Vertex" | "Fragment" if count == 0 => Ok(()),
        "Vertex" | "Fragment" => Err(format!("Attribute \"{}\" takes no parameters.", name)),
        "AccessMode" => match values {
            [Resolved {
                ty: Type::Enum(enumeration),
                ..
            }] if count == 1 && enumeration.name == "AccessMode" => Ok(()),
            [resolved] if count == 1 && resolved.ty.is_invalid() => Ok(()),
            _ => Err(format!("Attribute \"{}\" expects an AccessMode value.", name)),
        },
        "Compute" => {
            let sizes_valid = values.iter().all(|value| {
                value.ty.is_invalid()
                    || matches!(
                        (&value.ty, &value.constant),
                        (Type::Numeric(kind), Some(ConstantValue::Integer(size)))
                            if kind.is_integer() && *size > 0
                    )
            });
            if (1..=3).contains(&count) && values.len() == count && sizes_valid {
                Ok(())
            } else {
                Err(format!(
                    "Attribute \"{}\" expects one to three positive constant integers.",
                    name
                ))
            }
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use alloc::{string::ToString, vec};

    use super::*;

    fn attribute(name: &str, strings: &[&str]) -> Attribute {
        Attribute {
            name: name.to_string(),
            parameters: strings
                .iter()
                .map(|text| AttributeParameter::String(text.to_string(), SourceRange::default()))
                .collect(),
            range: SourceRange::default(),
        }
    }

    #[test]
    fn test_group_binding_parameters() {
        assert!(check_parameters(&attribute("GroupBinding", &["scene", "camera"]), &[]).is_ok());
        assert_eq!(
            check_parameters(&attribute("GroupBinding", &["scene"]), &[]).unwrap_err(),
            "Attribute \"GroupBinding\" expects two string parameters."
        );
    }

    #[test]
    fn test_builtin_values() {
        assert!(check_parameters(&attribute("BuiltIn", &["position"]), &[]).is_ok());
        assert_eq!(
            check_parameters(&attribute("BuiltIn", &["somewhere"]), &[]).unwrap_err(),
            "Unknown built-in value \"somewhere\"."
        );
    }

    #[test]
    fn test_string_accessor() {
        let attribute = attribute("Location", &["color"]);
        assert_eq!(attribute.string(0), Some("color"));
        assert_eq!(attribute.string(1), None);
        assert_eq!(find(&vec![attribute], "Location").map(|a| a.name.as_str()), Some("Location"));
    }
}
