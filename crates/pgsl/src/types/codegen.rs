//! WGSL spelling of type declarations.

use alloc::string::String;

use crate::ast::Resolved;

/// Types are emitted from their resolved value, so aliases and user structs
/// print the same way as built-in names.
pub(crate) fn transpile_type(resolved: &Resolved) -> String {
    resolved.ty.to_wgsl()
}
