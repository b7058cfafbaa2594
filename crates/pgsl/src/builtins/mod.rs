//! Built-in functions and declarations.
//!
//! Every built-in function is a list of [`OverloadHeader`]s in table order,
//! resolved first-fit by [`BuiltinFunction::resolve`]. The built-in enums
//! (`AccessMode`, `TexelFormat`) are plain declarations appended to every
//! document.

mod array;
mod bit;
mod derivative;
mod enums;
mod header;
mod logical;
mod numeric;
mod packing;
mod resolve;
mod synchronization;
mod texture;

use alloc::{collections::BTreeMap, vec::Vec};

pub use header::{GenericParameter, OverloadHeader, OverloadParameter, ParameterType};
use pgsl_syntax::cst::Declaration;
pub use resolve::{ResolveFailure, ResolvedOverload};

#[derive(Debug, Clone, PartialEq)]
pub struct BuiltinFunction {
    /// Name used in PGSL source.
    pub name: &'static str,
    /// WGSL spelling emitted for calls.
    pub target: &'static str,
    pub headers: Vec<OverloadHeader>,
}

impl BuiltinFunction {
    /// A function spelled the same in PGSL and WGSL.
    pub fn new(name: &'static str, headers: Vec<OverloadHeader>) -> Self {
        Self {
            name,
            target: name,
            headers,
        }
    }
}

/// All built-in functions, by PGSL name.
#[derive(Debug, Clone)]
pub struct BuiltinLibrary {
    functions: BTreeMap<&'static str, BuiltinFunction>,
}

impl Default for BuiltinLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl BuiltinLibrary {
    pub fn new() -> Self {
        let sections = [
            numeric::functions(),
            logical::functions(),
            bit::functions(),
            packing::functions(),
            derivative::functions(),
            array::functions(),
            texture::functions(),
            synchronization::functions(),
        ];

        let mut functions = BTreeMap::new();
        for function in sections.into_iter().flatten() {
            functions.insert(function.name, function);
        }
        Self { functions }
    }

    pub fn function(&self, name: &str) -> Option<&BuiltinFunction> {
        self.functions.get(name)
    }

    pub fn functions(&self) -> impl Iterator<Item = &BuiltinFunction> {
        self.functions.values()
    }

    /// Declarations appended after the user's declarations.
    pub fn declarations(&self) -> Vec<Declaration> {
        enums::declarations()
    }
}
