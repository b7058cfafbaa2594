//! Bit manipulation built-in functions and `bitcast`.

use alloc::{vec, vec::Vec};

use super::{
    header::{same_type_headers, scalar_and_vector},
    BuiltinFunction, OverloadHeader,
};
use crate::types::{ElementClass, Type, TypeTag};

const INTEGER_UNARY: [&str; 6] = [
    "countLeadingZeros",
    "countOneBits",
    "countTrailingZeros",
    "firstLeadingBit",
    "firstTrailingBit",
    "reverseBits",
];

pub(super) fn functions() -> Vec<BuiltinFunction> {
    let integer = scalar_and_vector(TypeTag::INTEGER);

    let mut functions: Vec<BuiltinFunction> = INTEGER_UNARY
        .iter()
        .map(|name| BuiltinFunction::new(*name, same_type_headers(&integer, &["e"])))
        .collect();

    let extract = integer
        .iter()
        .map(|tag| {
            OverloadHeader::new()
                .generic("T", &[tag.clone()])
                .param("e", "T")
                .param("offset", Type::unsigned())
                .param("count", Type::unsigned())
                .returns("T")
        })
        .collect();
    let insert = integer
        .iter()
        .map(|tag| {
            OverloadHeader::new()
                .generic("T", &[tag.clone()])
                .param("e", "T")
                .param("newbits", "T")
                .param("offset", Type::unsigned())
                .param("count", Type::unsigned())
                .returns("T")
        })
        .collect();

    let vector = TypeTag::Vector {
        dimension: None,
        element: None,
    };
    let bitcast = vec![
        OverloadHeader::new()
            .generic("T", &[TypeTag::NUMERIC])
            .generic("S", &[TypeTag::NUMERIC])
            .param("e", "S")
            .returns("T"),
        OverloadHeader::new()
            .generic("T", &[vector.clone(), TypeTag::vector_of(ElementClass::Numeric)])
            .generic("S", &[vector])
            .param("e", "S")
            .returns("T"),
    ];

    functions.extend([
        BuiltinFunction::new("extractBits", extract),
        BuiltinFunction::new("insertBits", insert),
        BuiltinFunction::new("bitcast", bitcast),
    ]);
    functions
}

#[cfg(test)]
mod tests {
    use crate::{builtins::BuiltinLibrary, types::Type};

    #[test]
    fn test_bitcast_uses_explicit_target() {
        let library = BuiltinLibrary::new();
        let bitcast = library.function("bitcast").unwrap();
        let resolved = bitcast
            .resolve(&[Type::unsigned()], &[Type::float32()])
            .unwrap();
        assert_eq!(resolved.return_type, Type::float32());
        assert!(bitcast.resolve(&[Type::unsigned()], &[]).is_err());
    }

    #[test]
    fn test_extract_bits_keeps_argument_type() {
        let library = BuiltinLibrary::new();
        let extract = library.function("extractBits").unwrap();
        let resolved = extract
            .resolve(&[Type::integer(), Type::unsigned(), Type::abstract_integer()], &[])
            .unwrap();
        assert_eq!(resolved.return_type, Type::integer());
        assert!(extract
            .resolve(&[Type::float32(), Type::unsigned(), Type::unsigned()], &[])
            .is_err());
    }
}
