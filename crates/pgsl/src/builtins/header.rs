//! Overload headers: the declarative signature data of built-in functions.

use alloc::{vec, vec::Vec};

use crate::types::{Type, TypeTag};

/// Declared type of a parameter or return value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterType {
    Concrete(Type),
    /// Reference to a generic of the same header.
    Generic(&'static str),
}

impl From<Type> for ParameterType {
    fn from(ty: Type) -> Self {
        ParameterType::Concrete(ty)
    }
}

impl From<&'static str> for ParameterType {
    fn from(name: &'static str) -> Self {
        ParameterType::Generic(name)
    }
}

/// A generic placeholder. The bound type must carry every restriction tag;
/// no restrictions accepts anything.
#[derive(Debug, Clone, PartialEq)]
pub struct GenericParameter {
    pub name: &'static str,
    pub restrictions: Vec<TypeTag>,
}

impl GenericParameter {
    pub fn accepts(&self, ty: &Type) -> bool {
        self.restrictions.iter().all(|tag| ty.has_tag(tag))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverloadParameter {
    pub name: &'static str,
    pub ty: ParameterType,
}

/// One candidate signature of a built-in function.
#[derive(Debug, Clone, PartialEq)]
pub struct OverloadHeader {
    pub generics: Vec<GenericParameter>,
    pub parameters: Vec<OverloadParameter>,
    pub return_type: ParameterType,
}

impl Default for OverloadHeader {
    fn default() -> Self {
        Self::new()
    }
}

impl OverloadHeader {
    /// A header without parameters returning void.
    pub fn new() -> Self {
        Self {
            generics: Vec::new(),
            parameters: Vec::new(),
            return_type: ParameterType::Concrete(Type::Void),
        }
    }

    pub fn generic(mut self, name: &'static str, restrictions: &[TypeTag]) -> Self {
        self.generics.push(GenericParameter {
            name,
            restrictions: restrictions.to_vec(),
        });
        self
    }

    pub fn param(mut self, name: &'static str, ty: impl Into<ParameterType>) -> Self {
        self.parameters.push(OverloadParameter {
            name,
            ty: ty.into(),
        });
        self
    }

    pub fn returns(mut self, ty: impl Into<ParameterType>) -> Self {
        self.return_type = ty.into();
        self
    }

    pub fn generic_index(&self, name: &str) -> Option<usize> {
        self.generics.iter().position(|generic| generic.name == name)
    }

    /// Every generic name referenced by a parameter or the return type.
    pub fn generic_references(&self) -> Vec<&'static str> {
        let mut references: Vec<&'static str> = self
            .parameters
            .iter()
            .filter_map(|parameter| match parameter.ty {
                ParameterType::Generic(name) => Some(name),
                ParameterType::Concrete(_) => None,
            })
            .collect();
        if let ParameterType::Generic(name) = self.return_type {
            references.push(name);
        }
        references
    }
}

/// Headers `T [restriction]` for a scalar tag followed by a vector tag,
/// with `parameters` all of type `T`, returning `T`.
pub(super) fn same_type_headers(
    tags: &[TypeTag],
    parameters: &[&'static str],
) -> Vec<OverloadHeader> {
    tags.iter()
        .map(|tag| {
            parameters
                .iter()
                .fold(OverloadHeader::new().generic("T", &[tag.clone()]), |header, name| {
                    header.param(*name, "T")
                })
                .returns("T")
        })
        .collect()
}

/// The scalar and `Vector<_>` tags of an element class.
pub(super) fn scalar_and_vector(scalar: TypeTag) -> Vec<TypeTag> {
    match &scalar {
        TypeTag::Scalar(class) => vec![scalar.clone(), TypeTag::vector_of(*class)],
        _ => vec![scalar],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_collects_in_order() {
        let header = OverloadHeader::new()
            .generic("T", &[TypeTag::FLOAT])
            .param("x", "T")
            .param("y", Type::float32())
            .returns("T");
        assert_eq!(header.parameters.len(), 2);
        assert_eq!(header.parameters[0].name, "x");
        assert_eq!(header.generic_index("T"), Some(0));
        assert_eq!(header.generic_references(), ["T", "T"]);
    }

    #[test]
    fn test_generic_restrictions() {
        let header = OverloadHeader::new().generic("T", &[TypeTag::INTEGER]);
        assert!(header.generics[0].accepts(&Type::unsigned()));
        assert!(!header.generics[0].accepts(&Type::float32()));
        let open = OverloadHeader::new().generic("T", &[]);
        assert!(open.generics[0].accepts(&Type::Boolean));
    }

    #[test]
    fn test_same_type_headers() {
        let headers = same_type_headers(&scalar_and_vector(TypeTag::FLOAT), &["x", "y"]);
        assert_eq!(headers.len(), 2);
        assert_eq!(
            headers[1].generics[0].restrictions,
            [TypeTag::vector_of(crate::types::ElementClass::Float)]
        );
        assert_eq!(headers[1].parameters.len(), 2);
    }
}
