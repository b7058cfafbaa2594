//! Data packing built-in functions.

use alloc::vec::Vec;

use super::{BuiltinFunction, OverloadHeader};
use crate::types::{Dimension, Type};

pub(super) fn functions() -> Vec<BuiltinFunction> {
    let vec4 = || Type::vector(Dimension::Four, Type::float32());
    let vec2 = || Type::vector(Dimension::Two, Type::float32());

    let pack = |name, input: Type| {
        BuiltinFunction::new(
            name,
            [OverloadHeader::new().param("e", input).returns(Type::unsigned())].into(),
        )
    };
    let unpack = |name, output: Type| {
        BuiltinFunction::new(
            name,
            [OverloadHeader::new().param("e", Type::unsigned()).returns(output)].into(),
        )
    };

    [
        pack("pack4x8snorm", vec4()),
        pack("pack4x8unorm", vec4()),
        pack("pack2x16snorm", vec2()),
        pack("pack2x16unorm", vec2()),
        pack("pack2x16float", vec2()),
        unpack("unpack4x8snorm", vec4()),
        unpack("unpack4x8unorm", vec4()),
        unpack("unpack2x16snorm", vec2()),
        unpack("unpack2x16unorm", vec2()),
        unpack("unpack2x16float", vec2()),
    ]
    .into()
}
