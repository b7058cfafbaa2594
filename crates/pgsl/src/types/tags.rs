//! Capability tags used to restrict generic parameters of built-in functions.
//!
//! A tag is a structured predicate over [`Type`]. [`Type::has_tag`] decides
//! membership directly; [`Type::meta_tags`] lists the full tag set and exists
//! for diagnostics and for checking that both agree.

use alloc::{boxed::Box, vec, vec::Vec};
use core::fmt;

use super::{NumericKind, TextureDimension, TextureKind, Type};

/// Class of a scalar element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementClass {
    Boolean,
    /// Any numeric kind.
    Numeric,
    /// Any float kind, abstract included.
    Float,
    /// Any integer kind, abstract included.
    Integer,
    Kind(NumericKind),
}

impl ElementClass {
    fn matches(self, ty: &Type) -> bool {
        match (self, ty) {
            (_, Type::Invalid) => true,
            (ElementClass::Boolean, Type::Boolean) => true,
            (ElementClass::Numeric, Type::Numeric(_)) => true,
            (ElementClass::Float, Type::Numeric(kind)) => kind.is_float(),
            (ElementClass::Integer, Type::Numeric(kind)) => kind.is_integer(),
            (ElementClass::Kind(expected), Type::Numeric(kind)) => expected == *kind,
            _ => false,
        }
    }

    /// Classes of a scalar, most general first.
    fn of(ty: &Type) -> Vec<ElementClass> {
        match ty {
            Type::Boolean => vec![ElementClass::Boolean],
            Type::Numeric(kind) => vec![
                ElementClass::Numeric,
                if kind.is_float() {
                    ElementClass::Float
                } else {
                    ElementClass::Integer
                },
                ElementClass::Kind(*kind),
            ],
            _ => Vec::new(),
        }
    }
}

impl fmt::Display for ElementClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementClass::Boolean => write!(f, "boolean"),
            ElementClass::Numeric => write!(f, "numeric"),
            ElementClass::Float => write!(f, "numeric-float"),
            ElementClass::Integer => write!(f, "numeric-integer"),
            ElementClass::Kind(kind) => write!(f, "{}", kind),
        }
    }
}

/// Capability tag.
///
/// `None` fields are wildcards, so `Vector { dimension: None, element: None }`
/// is the plain `Vector` tag and `Vector { Some(3), Some(Kind(float32)) }`
/// is `Vector3<float32>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Scalar(ElementClass),
    Vector {
        dimension: Option<super::Dimension>,
        element: Option<ElementClass>,
    },
    Matrix {
        shape: Option<(super::Dimension, super::Dimension)>,
        element: Option<ElementClass>,
    },
    Array,
    RuntimeArray,
    Pointer(Option<Box<TypeTag>>),
    Texture(Option<TextureDimension>),
    /// Storage texture of a dimension whose texel channels load as `channel`.
    StorageTexture {
        dimension: TextureDimension,
        channel: NumericKind,
    },
}

impl TypeTag {
    pub const NUMERIC: TypeTag = TypeTag::Scalar(ElementClass::Numeric);
    pub const FLOAT: TypeTag = TypeTag::Scalar(ElementClass::Float);
    pub const INTEGER: TypeTag = TypeTag::Scalar(ElementClass::Integer);
    pub const BOOLEAN: TypeTag = TypeTag::Scalar(ElementClass::Boolean);

    pub fn kind(kind: NumericKind) -> Self {
        TypeTag::Scalar(ElementClass::Kind(kind))
    }

    /// `Vector<class>` for any dimension.
    pub fn vector_of(element: ElementClass) -> Self {
        TypeTag::Vector {
            dimension: None,
            element: Some(element),
        }
    }

    /// `VectorN<class>`
    pub fn vector_n(dimension: super::Dimension, element: ElementClass) -> Self {
        TypeTag::Vector {
            dimension: Some(dimension),
            element: Some(element),
        }
    }

    /// `Matrix<class>` for any shape.
    pub fn matrix_of(element: ElementClass) -> Self {
        TypeTag::Matrix {
            shape: None,
            element: Some(element),
        }
    }

    pub fn pointer_to(inner: TypeTag) -> Self {
        TypeTag::Pointer(Some(Box::new(inner)))
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeTag::Scalar(class) => write!(f, "{}", class),
            TypeTag::Vector { dimension, element } => {
                write!(f, "Vector")?;
                if let Some(dimension) = dimension {
                    write!(f, "{}", dimension)?;
                }
                if let Some(element) = element {
                    write!(f, "<{}>", element)?;
                }
                Ok(())
            }
            TypeTag::Matrix { shape, element } => {
                write!(f, "Matrix")?;
                if let Some((columns, rows)) = shape {
                    write!(f, "{}{}", columns, rows)?;
                }
                if let Some(element) = element {
                    write!(f, "<{}>", element)?;
                }
                Ok(())
            }
            TypeTag::Array => write!(f, "Array"),
            TypeTag::RuntimeArray => write!(f, "RuntimeArray"),
            TypeTag::Pointer(None) => write!(f, "Pointer"),
            TypeTag::Pointer(Some(inner)) => write!(f, "Pointer<{}>", inner),
            TypeTag::Texture(None) => write!(f, "Texture"),
            TypeTag::Texture(Some(dimension)) => write!(f, "Texture{}", dimension.name()),
            TypeTag::StorageTexture { dimension, channel } => {
                write!(f, "TextureStorage{}<{}>", dimension.name(), channel)
            }
        }
    }
}

impl Type {
    /// Whether this type carries `tag`. Equivalent to
    /// `self.meta_tags().contains(tag)`; `Invalid` carries every tag.
    pub fn has_tag(&self, tag: &TypeTag) -> bool {
        match (tag, self) {
            (_, Type::Invalid) => true,
            (TypeTag::Scalar(class), ty) => class.matches(ty),
            (TypeTag::Vector { dimension, element }, Type::Vector(vector)) => {
                dimension.map_or(true, |dimension| dimension == vector.dimension)
                    && element.map_or(true, |class| class.matches(&vector.inner))
            }
            (TypeTag::Matrix { shape, element }, Type::Matrix(matrix)) => {
                shape.map_or(true, |(columns, rows)| {
                    columns == matrix.columns && rows == matrix.rows
                }) && element.map_or(true, |class| class.matches(&matrix.inner))
            }
            (TypeTag::Array, Type::Array(_)) => true,
            (TypeTag::RuntimeArray, Type::Array(array)) => array.length.is_none(),
            (TypeTag::Pointer(None), Type::Pointer(_)) => true,
            (TypeTag::Pointer(Some(inner_tag)), Type::Pointer(inner)) => inner.has_tag(inner_tag),
            (TypeTag::Texture(dimension), Type::Texture(texture)) => {
                dimension.map_or(true, |dimension| dimension == texture.dimension)
            }
            (TypeTag::StorageTexture { dimension, channel }, Type::Texture(texture)) => {
                match texture.kind {
                    TextureKind::Storage { format, .. } => {
                        *dimension == texture.dimension && format.channel() == *channel
                    }
                    _ => false,
                }
            }
            _ => false,
        }
    }

    /// Every tag this type carries.
    pub fn meta_tags(&self) -> Vec<TypeTag> {
        match self {
            Type::Boolean | Type::Numeric(_) => ElementClass::of(self)
                .into_iter()
                .map(TypeTag::Scalar)
                .collect(),
            Type::Vector(vector) => {
                let mut tags = Vec::new();
                for class in ElementClass::of(&vector.inner) {
                    tags.push(TypeTag::vector_of(class));
                    tags.push(TypeTag::vector_n(vector.dimension, class));
                }
                tags.push(TypeTag::Vector {
                    dimension: Some(vector.dimension),
                    element: None,
                });
                tags.push(TypeTag::Vector {
                    dimension: None,
                    element: None,
                });
                tags
            }
            Type::Matrix(matrix) => {
                let shape = (matrix.columns, matrix.rows);
                let mut tags = Vec::new();
                for class in ElementClass::of(&matrix.inner) {
                    tags.push(TypeTag::matrix_of(class));
                    tags.push(TypeTag::Matrix {
                        shape: Some(shape),
                        element: Some(class),
                    });
                }
                tags.push(TypeTag::Matrix {
                    shape: Some(shape),
                    element: None,
                });
                tags.push(TypeTag::Matrix {
                    shape: None,
                    element: None,
                });
                tags
            }
            Type::Array(array) => {
                let mut tags = vec![TypeTag::Array];
                if array.length.is_none() {
                    tags.push(TypeTag::RuntimeArray);
                }
                tags
            }
            Type::Pointer(inner) => {
                let mut tags = vec![TypeTag::Pointer(None)];
                tags.extend(inner.meta_tags().into_iter().map(TypeTag::pointer_to));
                tags
            }
            Type::Texture(texture) => {
                let mut tags = vec![
                    TypeTag::Texture(None),
                    TypeTag::Texture(Some(texture.dimension)),
                ];
                if let TextureKind::Storage { format, .. } = texture.kind {
                    tags.push(TypeTag::StorageTexture {
                        dimension: texture.dimension,
                        channel: format.channel(),
                    });
                }
                tags
            }
            Type::Struct(_) | Type::Sampler(_) | Type::Enum(_) | Type::Void | Type::Invalid => {
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::{format, string::String};

    use super::*;
    use crate::types::{AccessMode, Dimension, TexelFormat, TextureType};

    fn tag_names(ty: &Type) -> Vec<String> {
        ty.meta_tags().iter().map(|tag| format!("{}", tag)).collect()
    }

    #[test]
    fn test_scalar_tags() {
        assert_eq!(
            tag_names(&Type::float32()),
            ["numeric", "numeric-float", "float32"]
        );
        assert_eq!(
            tag_names(&Type::abstract_integer()),
            ["numeric", "numeric-integer", "abstract-integer"]
        );
    }

    #[test]
    fn test_vector_tags() {
        assert_eq!(
            tag_names(&Type::vector(Dimension::Three, Type::float32())),
            [
                "Vector<numeric>",
                "Vector3<numeric>",
                "Vector<numeric-float>",
                "Vector3<numeric-float>",
                "Vector<float32>",
                "Vector3<float32>",
                "Vector3",
                "Vector",
            ]
        );
    }

    #[test]
    fn test_matrix_tags() {
        let names = tag_names(&Type::matrix(Dimension::Two, Dimension::Four, Type::float16()));
        assert!(names.contains(&String::from("Matrix24<float16>")));
        assert!(names.contains(&String::from("Matrix<numeric-float>")));
        assert_eq!(names.last().map(String::as_str), Some("Matrix"));
    }

    #[test]
    fn test_has_tag_agrees_with_meta_tags() {
        let types = [
            Type::Boolean,
            Type::float32(),
            Type::unsigned(),
            Type::vector(Dimension::Two, Type::integer()),
            Type::vector(Dimension::Four, Type::Boolean),
            Type::matrix(Dimension::Three, Dimension::Three, Type::float32()),
            Type::array(Type::float32(), None),
            Type::pointer(Type::array(Type::float32(), None)),
            Type::texture(TextureType::storage(
                TextureDimension::TwoD,
                TexelFormat::R32uint,
                AccessMode::Write,
            )),
        ];
        let probes = [
            TypeTag::NUMERIC,
            TypeTag::FLOAT,
            TypeTag::INTEGER,
            TypeTag::BOOLEAN,
            TypeTag::kind(NumericKind::Unsigned),
            TypeTag::vector_of(ElementClass::Numeric),
            TypeTag::vector_of(ElementClass::Boolean),
            TypeTag::vector_n(Dimension::Two, ElementClass::Integer),
            TypeTag::matrix_of(ElementClass::Float),
            TypeTag::Array,
            TypeTag::RuntimeArray,
            TypeTag::pointer_to(TypeTag::RuntimeArray),
            TypeTag::Texture(Some(TextureDimension::TwoD)),
            TypeTag::StorageTexture {
                dimension: TextureDimension::TwoD,
                channel: NumericKind::Unsigned,
            },
        ];
        for ty in &types {
            let tags = ty.meta_tags();
            for probe in &probes {
                assert_eq!(
                    ty.has_tag(probe),
                    tags.contains(probe),
                    "{} / {}",
                    ty,
                    probe
                );
            }
        }
    }

    #[test]
    fn test_vector_is_not_scalar() {
        let vector = Type::vector(Dimension::Three, Type::float32());
        assert!(!vector.has_tag(&TypeTag::NUMERIC));
        assert!(vector.has_tag(&TypeTag::vector_of(ElementClass::Numeric)));
    }
}
