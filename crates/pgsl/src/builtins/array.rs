//! Array built-in functions.

use alloc::{vec, vec::Vec};

use super::{BuiltinFunction, OverloadHeader};
use crate::types::{Type, TypeTag};

pub(super) fn functions() -> Vec<BuiltinFunction> {
    vec![BuiltinFunction::new(
        "arrayLength",
        vec![OverloadHeader::new()
            .generic("P", &[TypeTag::pointer_to(TypeTag::RuntimeArray)])
            .param("p", "P")
            .returns(Type::unsigned())],
    )]
}

#[cfg(test)]
mod tests {
    use crate::{builtins::BuiltinLibrary, types::Type};

    #[test]
    fn test_array_length_needs_runtime_array_pointer() {
        let library = BuiltinLibrary::new();
        let length = library.function("arrayLength").unwrap();
        let runtime = Type::pointer(Type::array(Type::float32(), None));
        let fixed = Type::pointer(Type::array(Type::float32(), Some(4)));
        assert_eq!(
            length.resolve(&[runtime], &[]).unwrap().return_type,
            Type::unsigned()
        );
        assert!(length.resolve(&[fixed], &[]).is_err());
    }
}
