//! Numeric built-in functions.

use alloc::{vec, vec::Vec};

use super::{
    header::{same_type_headers, scalar_and_vector},
    BuiltinFunction, OverloadHeader,
};
use crate::types::{Dimension, ElementClass, NumericKind, Type, TypeTag};

/// Functions of one float argument returning the same type.
const FLOAT_UNARY: [&str; 25] = [
    "acos",
    "acosh",
    "asin",
    "asinh",
    "atan",
    "atanh",
    "ceil",
    "cos",
    "cosh",
    "degrees",
    "exp",
    "exp2",
    "floor",
    "fract",
    "inverseSqrt",
    "log",
    "log2",
    "radians",
    "round",
    "saturate",
    "sin",
    "sinh",
    "sqrt",
    "tan",
    "tanh",
];

/// Concrete float kinds, in the order their headers are listed.
const FLOAT_KINDS: [NumericKind; 2] = [NumericKind::Float32, NumericKind::Float16];

pub(super) fn functions() -> Vec<BuiltinFunction> {
    let float = scalar_and_vector(TypeTag::FLOAT);
    let numeric = scalar_and_vector(TypeTag::NUMERIC);
    let signed = vec![
        TypeTag::kind(NumericKind::Integer),
        TypeTag::FLOAT,
        TypeTag::vector_of(ElementClass::Kind(NumericKind::Integer)),
        TypeTag::vector_of(ElementClass::Float),
    ];

    let mut functions: Vec<BuiltinFunction> = FLOAT_UNARY
        .iter()
        .map(|name| BuiltinFunction::new(*name, same_type_headers(&float, &["e"])))
        .collect();

    functions.extend([
        BuiltinFunction::new("abs", same_type_headers(&numeric, &["e"])),
        BuiltinFunction::new("sign", same_type_headers(&signed, &["e"])),
        BuiltinFunction::new("atan2", same_type_headers(&float, &["y", "x"])),
        BuiltinFunction::new("pow", same_type_headers(&float, &["e1", "e2"])),
        BuiltinFunction::new("step", same_type_headers(&float, &["edge", "x"])),
        BuiltinFunction::new("max", same_type_headers(&numeric, &["e1", "e2"])),
        BuiltinFunction::new("min", same_type_headers(&numeric, &["e1", "e2"])),
        BuiltinFunction::new("clamp", same_type_headers(&numeric, &["e", "low", "high"])),
        BuiltinFunction::new("fma", same_type_headers(&float, &["e1", "e2", "e3"])),
        BuiltinFunction::new(
            "smoothstep",
            same_type_headers(&float, &["low", "high", "x"]),
        ),
        BuiltinFunction::new("mix", mix_headers(&float)),
        BuiltinFunction::new("length", vector_to_scalar(&["e"], true)),
        BuiltinFunction::new("distance", vector_to_scalar(&["e1", "e2"], true)),
        BuiltinFunction::new("dot", dot_headers()),
        BuiltinFunction::new("normalize", same_type_headers(&float[1..], &["e"])),
        BuiltinFunction::new(
            "faceForward",
            same_type_headers(&float[1..], &["e1", "e2", "e3"]),
        ),
        BuiltinFunction::new("reflect", same_type_headers(&float[1..], &["e1", "e2"])),
        BuiltinFunction::new("refract", refract_headers()),
        BuiltinFunction::new("cross", cross_headers()),
        BuiltinFunction::new("determinant", determinant_headers()),
        BuiltinFunction::new("transpose", transpose_headers()),
    ]);
    functions
}

/// `mix(a, b, t)` with a vector or scalar factor.
fn mix_headers(float: &[TypeTag]) -> Vec<OverloadHeader> {
    let mut headers = same_type_headers(float, &["e1", "e2", "e3"]);
    headers.push(
        OverloadHeader::new()
            .generic("T", &[TypeTag::vector_of(ElementClass::Float)])
            .generic("S", &[TypeTag::FLOAT])
            .param("e1", "T")
            .param("e2", "T")
            .param("e3", "S")
            .returns("T"),
    );
    headers
}

/// Scalar headers before vector headers, float32 before float16.
fn vector_to_scalar(parameters: &[&'static str], include_scalar: bool) -> Vec<OverloadHeader> {
    let mut headers = Vec::new();
    for kind in FLOAT_KINDS {
        let scalar = Type::Numeric(kind);
        let mut shapes = Vec::new();
        if include_scalar {
            shapes.push(scalar.clone());
        }
        shapes.extend(Dimension::ALL.map(|dimension| Type::vector(dimension, scalar.clone())));
        for shape in shapes {
            let header = parameters
                .iter()
                .fold(OverloadHeader::new(), |header, name| {
                    header.param(*name, shape.clone())
                })
                .returns(scalar.clone());
            headers.push(header);
        }
    }
    headers
}

fn dot_headers() -> Vec<OverloadHeader> {
    let mut headers = vector_to_scalar(&["e1", "e2"], false);
    for kind in [NumericKind::Integer, NumericKind::Unsigned] {
        for dimension in Dimension::ALL {
            let vector = Type::vector(dimension, Type::Numeric(kind));
            headers.push(
                OverloadHeader::new()
                    .param("e1", vector.clone())
                    .param("e2", vector)
                    .returns(Type::Numeric(kind)),
            );
        }
    }
    headers
}

fn refract_headers() -> Vec<OverloadHeader> {
    let mut headers = Vec::new();
    for kind in FLOAT_KINDS {
        for dimension in Dimension::ALL {
            let vector = Type::vector(dimension, Type::Numeric(kind));
            headers.push(
                OverloadHeader::new()
                    .param("e1", vector.clone())
                    .param("e2", vector.clone())
                    .param("e3", Type::Numeric(kind))
                    .returns(vector),
            );
        }
    }
    headers
}

fn cross_headers() -> Vec<OverloadHeader> {
    FLOAT_KINDS
        .iter()
        .map(|kind| {
            let vector = Type::vector(Dimension::Three, Type::Numeric(*kind));
            OverloadHeader::new()
                .param("e1", vector.clone())
                .param("e2", vector.clone())
                .returns(vector)
        })
        .collect()
}

fn determinant_headers() -> Vec<OverloadHeader> {
    let mut headers = Vec::new();
    for kind in FLOAT_KINDS {
        for dimension in Dimension::ALL {
            headers.push(
                OverloadHeader::new()
                    .param("e", Type::matrix(dimension, dimension, Type::Numeric(kind)))
                    .returns(Type::Numeric(kind)),
            );
        }
    }
    headers
}

fn transpose_headers() -> Vec<OverloadHeader> {
    let mut headers = Vec::new();
    for kind in FLOAT_KINDS {
        for columns in Dimension::ALL {
            for rows in Dimension::ALL {
                headers.push(
                    OverloadHeader::new()
                        .param("e", Type::matrix(columns, rows, Type::Numeric(kind)))
                        .returns(Type::matrix(rows, columns, Type::Numeric(kind))),
                );
            }
        }
    }
    headers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtins::{BuiltinLibrary, ParameterType};

    #[test]
    fn test_scalar_headers_come_first() {
        let library = BuiltinLibrary::new();
        let length = library.function("length").unwrap();
        assert_eq!(
            length.headers[0].parameters[0].ty,
            ParameterType::Concrete(Type::float32())
        );
        let abs = library.function("abs").unwrap();
        assert_eq!(abs.headers[0].generics[0].restrictions, [TypeTag::NUMERIC]);
    }

    #[test]
    fn test_transpose_swaps_shape() {
        let library = BuiltinLibrary::new();
        let transpose = library.function("transpose").unwrap();
        let matrix = Type::matrix(Dimension::Two, Dimension::Four, Type::float32());
        let resolved = transpose.resolve(&[matrix], &[]).unwrap();
        assert_eq!(
            resolved.return_type,
            Type::matrix(Dimension::Four, Dimension::Two, Type::float32())
        );
    }

    #[test]
    fn test_float_functions_reject_integers() {
        let library = BuiltinLibrary::new();
        let sqrt = library.function("sqrt").unwrap();
        assert!(sqrt.resolve(&[Type::integer()], &[]).is_err());
        let vector = Type::vector(Dimension::Two, Type::float16());
        assert_eq!(sqrt.resolve(&[vector.clone()], &[]).unwrap().return_type, vector);
    }

    #[test]
    fn test_mix_with_scalar_factor() {
        let library = BuiltinLibrary::new();
        let mix = library.function("mix").unwrap();
        let vector = Type::vector(Dimension::Three, Type::float32());
        let resolved = mix
            .resolve(&[vector.clone(), vector.clone(), Type::float32()], &[])
            .unwrap();
        assert_eq!(resolved.return_type, vector);
    }
}
