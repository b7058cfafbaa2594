//! WGSL type properties.

use super::{ArrayType, Type};

/// The eight WGSL type capabilities, derived from the innermost scalar
/// outward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TypeProperties {
    pub composite: bool,
    pub indexable: bool,
    pub scalar: bool,
    pub plain: bool,
    pub storable: bool,
    pub host_shareable: bool,
    pub constructible: bool,
    pub fixed_footprint: bool,
}

impl TypeProperties {
    const NONE: TypeProperties = TypeProperties {
        composite: false,
        indexable: false,
        scalar: false,
        plain: false,
        storable: false,
        host_shareable: false,
        constructible: false,
        fixed_footprint: false,
    };

    const ALL: TypeProperties = TypeProperties {
        composite: true,
        indexable: true,
        scalar: true,
        plain: true,
        storable: true,
        host_shareable: true,
        constructible: true,
        fixed_footprint: true,
    };

    fn scalar(host_shareable: bool, storable: bool) -> Self {
        TypeProperties {
            scalar: true,
            plain: true,
            storable,
            host_shareable,
            constructible: true,
            fixed_footprint: true,
            ..Self::NONE
        }
    }

    /// Properties of a vector or matrix over an element.
    fn composite_of(element: TypeProperties) -> Self {
        TypeProperties {
            composite: true,
            indexable: true,
            scalar: false,
            ..element
        }
    }
}

impl Type {
    pub fn properties(&self) -> TypeProperties {
        match self {
            Type::Boolean => TypeProperties::scalar(false, true),
            Type::Numeric(kind) if kind.is_abstract() => TypeProperties::scalar(false, false),
            Type::Numeric(_) => TypeProperties::scalar(true, true),
            Type::Vector(vector) => TypeProperties::composite_of(vector.inner.properties()),
            Type::Matrix(matrix) => TypeProperties::composite_of(matrix.inner.properties()),
            Type::Array(ArrayType { inner, length }) => {
                let inner = inner.properties();
                TypeProperties {
                    composite: true,
                    indexable: true,
                    scalar: false,
                    plain: inner.plain,
                    storable: inner.storable,
                    host_shareable: inner.host_shareable,
                    constructible: inner.constructible && length.is_some(),
                    fixed_footprint: inner.fixed_footprint && length.is_some(),
                }
            }
            Type::Struct(structure) => {
                let mut properties = TypeProperties {
                    composite: true,
                    indexable: false,
                    scalar: false,
                    plain: true,
                    storable: true,
                    host_shareable: true,
                    constructible: true,
                    fixed_footprint: true,
                };
                for property in &structure.properties {
                    let inner = property.ty.properties();
                    properties.plain &= inner.plain;
                    properties.storable &= inner.storable;
                    properties.host_shareable &= inner.host_shareable;
                    properties.constructible &= inner.constructible;
                    properties.fixed_footprint &= inner.fixed_footprint;
                }
                properties
            }
            Type::Pointer(_)
            | Type::Sampler(_)
            | Type::Texture(_)
            | Type::Enum(_)
            | Type::Void => TypeProperties::NONE,
            Type::Invalid => TypeProperties::ALL,
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::{rc::Rc, string::ToString, vec};

    use super::*;
    use crate::{
        ast::NodeId,
        types::{Dimension, SamplerKind, StructProperty, StructType},
    };

    #[test]
    fn test_scalar_properties() {
        let float = Type::float32().properties();
        assert!(float.scalar && float.plain && float.storable && float.host_shareable);
        let boolean = Type::Boolean.properties();
        assert!(boolean.storable && !boolean.host_shareable);
        let literal = Type::abstract_float().properties();
        assert!(literal.constructible && !literal.storable);
    }

    #[test]
    fn test_vector_inherits_element() {
        let properties = Type::vector(Dimension::Three, Type::float32()).properties();
        assert!(properties.composite && properties.indexable);
        assert!(!properties.scalar);
        assert!(properties.host_shareable);
    }

    #[test]
    fn test_runtime_array_is_not_constructible() {
        let sized = Type::array(Type::float32(), Some(4)).properties();
        let runtime = Type::array(Type::float32(), None).properties();
        assert!(sized.constructible && sized.fixed_footprint);
        assert!(!runtime.constructible && !runtime.fixed_footprint);
        assert!(runtime.host_shareable);
    }

    #[test]
    fn test_struct_is_intersection_of_fields() {
        let structure = Type::Struct(Rc::new(StructType {
            name: "Light".to_string(),
            properties: vec![
                StructProperty {
                    name: "on".to_string(),
                    ty: Type::Boolean,
                },
                StructProperty {
                    name: "power".to_string(),
                    ty: Type::float32(),
                },
            ],
            declaration: NodeId::new(0),
        }));
        let properties = structure.properties();
        assert!(properties.storable && properties.constructible);
        assert!(!properties.host_shareable);
    }

    #[test]
    fn test_handles_have_no_properties() {
        assert_eq!(
            Type::Sampler(SamplerKind::Filtering).properties(),
            TypeProperties::default()
        );
    }
}
