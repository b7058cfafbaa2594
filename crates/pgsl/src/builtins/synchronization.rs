//! Barrier built-in functions. Each has a single header without parameters.

use alloc::{vec, vec::Vec};

use super::{BuiltinFunction, OverloadHeader};

pub(super) fn functions() -> Vec<BuiltinFunction> {
    ["storageBarrier", "workgroupBarrier", "textureBarrier"]
        .into_iter()
        .map(|name| BuiltinFunction::new(name, vec![OverloadHeader::new()]))
        .collect()
}
