//! Logical built-in functions.

use alloc::{vec, vec::Vec};

use super::{BuiltinFunction, OverloadHeader};
use crate::types::{ElementClass, Type, TypeTag};

pub(super) fn functions() -> Vec<BuiltinFunction> {
    let reduction = || {
        vec![
            OverloadHeader::new().param("e", Type::Boolean).returns(Type::Boolean),
            OverloadHeader::new()
                .generic("T", &[TypeTag::vector_of(ElementClass::Boolean)])
                .param("e", "T")
                .returns(Type::Boolean),
        ]
    };

    vec![
        BuiltinFunction::new("all", reduction()),
        BuiltinFunction::new("any", reduction()),
        BuiltinFunction::new(
            "select",
            vec![
                OverloadHeader::new()
                    .generic("T", &[])
                    .param("f", "T")
                    .param("t", "T")
                    .param("cond", Type::Boolean)
                    .returns("T"),
                OverloadHeader::new()
                    .generic("T", &[TypeTag::Vector {
                        dimension: None,
                        element: None,
                    }])
                    .generic("C", &[TypeTag::vector_of(ElementClass::Boolean)])
                    .param("f", "T")
                    .param("t", "T")
                    .param("cond", "C")
                    .returns("T"),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use crate::{
        builtins::BuiltinLibrary,
        types::{Dimension, Type},
    };

    #[test]
    fn test_select_scalar_and_vector_condition() {
        let library = BuiltinLibrary::new();
        let select = library.function("select").unwrap();
        let resolved = select
            .resolve(&[Type::float32(), Type::float32(), Type::Boolean], &[])
            .unwrap();
        assert_eq!(resolved.return_type, Type::float32());

        let vector = Type::vector(Dimension::Two, Type::integer());
        let condition = Type::vector(Dimension::Two, Type::Boolean);
        let resolved = select
            .resolve(&[vector.clone(), vector.clone(), condition], &[])
            .unwrap();
        assert_eq!(resolved.return_type, vector);
    }

    #[test]
    fn test_all_requires_booleans() {
        let library = BuiltinLibrary::new();
        let all = library.function("all").unwrap();
        assert!(all.resolve(&[Type::Boolean], &[]).is_ok());
        assert!(all
            .resolve(&[Type::vector(Dimension::Four, Type::float32())], &[])
            .is_err());
    }
}
