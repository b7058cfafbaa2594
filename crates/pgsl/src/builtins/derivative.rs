//! Fragment derivative built-in functions. Float32 only.

use alloc::vec::Vec;

use super::{header::same_type_headers, BuiltinFunction};
use crate::types::{ElementClass, NumericKind, TypeTag};

const DERIVATIVES: [&str; 9] = [
    "dpdx",
    "dpdxCoarse",
    "dpdxFine",
    "dpdy",
    "dpdyCoarse",
    "dpdyFine",
    "fwidth",
    "fwidthCoarse",
    "fwidthFine",
];

pub(super) fn functions() -> Vec<BuiltinFunction> {
    let float32 = [
        TypeTag::kind(NumericKind::Float32),
        TypeTag::vector_of(ElementClass::Kind(NumericKind::Float32)),
    ];
    DERIVATIVES
        .iter()
        .map(|name| BuiltinFunction::new(*name, same_type_headers(&float32, &["e"])))
        .collect()
}
