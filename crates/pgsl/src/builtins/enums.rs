//! Built-in enum declarations.

use alloc::{string::ToString, vec, vec::Vec};

use pgsl_syntax::{
    cst::{Declaration, EnumDeclaration, EnumLiteral, EnumValue},
    SourceRange,
};

use crate::types::{AccessMode, TexelFormat};

pub(super) fn declarations() -> Vec<Declaration> {
    vec![
        enumeration(
            "AccessMode",
            AccessMode::ALL.iter().map(|mode| (mode.name(), mode.to_wgsl())),
        ),
        enumeration(
            "TexelFormat",
            TexelFormat::ALL
                .iter()
                .map(|format| (format.name(), format.to_wgsl())),
        ),
    ]
}

/// A string valued enum without source range.
fn enumeration<'a>(
    name: &str,
    values: impl Iterator<Item = (&'a str, &'a str)>,
) -> Declaration {
    Declaration::Enum(EnumDeclaration {
        name: name.to_string(),
        values: values
            .map(|(name, value)| EnumValue {
                name: name.to_string(),
                value: EnumLiteral::String(value.to_string()),
                range: SourceRange::default(),
            })
            .collect(),
        range: SourceRange::default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_enums() {
        let declarations = declarations();
        assert_eq!(declarations.len(), 2);
        let Declaration::Enum(access) = &declarations[0] else {
            panic!("expected enum");
        };
        assert_eq!(access.name, "AccessMode");
        assert_eq!(access.values[2].name, "ReadWrite");
        assert_eq!(
            access.values[2].value,
            EnumLiteral::String("read_write".to_string())
        );
    }
}
