//! PGSL type system.
//!
//! [`Type`] is the resolved type of every AST node. It knows its PGSL name
//! (its `Display`), its WGSL spelling ([`Type::to_wgsl`]), the casting
//! lattice (`casting`), its capability tags (`tags`) and its WGSL type
//! properties (`properties`).

mod casting;
pub(crate) mod codegen;
mod numeric;
mod properties;
mod tags;
mod template;
mod texture;
pub(crate) mod typecheck;

use alloc::{
    boxed::Box,
    format,
    rc::Rc,
    string::{String, ToString},
    vec::Vec,
};
use core::fmt;

pub use numeric::NumericKind;
pub use properties::TypeProperties;
pub use tags::{ElementClass, TypeTag};
pub use template::TypeTemplate;
pub use texture::{
    AccessMode, SamplerKind, TexelFormat, TextureDimension, TextureKind, TextureType,
};

use crate::ast::NodeId;

/// Component count of vectors and matrices. Only 2, 3 and 4 are legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dimension {
    Two = 2,
    Three = 3,
    Four = 4,
}

impl Dimension {
    pub const ALL: [Dimension; 3] = [Dimension::Two, Dimension::Three, Dimension::Four];

    pub fn from_count(count: usize) -> Option<Self> {
        match count {
            2 => Some(Dimension::Two),
            3 => Some(Dimension::Three),
            4 => Some(Dimension::Four),
            _ => None,
        }
    }

    pub fn count(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.count())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VectorType {
    pub dimension: Dimension,
    pub inner: Box<Type>,
}

/// `columns` x `rows` matrix. PGSL names it `Matrix<columns><rows>`.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixType {
    pub columns: Dimension,
    pub rows: Dimension,
    pub inner: Box<Type>,
}

/// Fixed size array, or runtime sized when `length` is `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayType {
    pub inner: Box<Type>,
    pub length: Option<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StructProperty {
    pub name: String,
    pub ty: Type,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StructType {
    pub name: String,
    pub properties: Vec<StructProperty>,
    pub declaration: NodeId,
}

impl StructType {
    pub fn property(&self, name: &str) -> Option<&StructProperty> {
        self.properties.iter().find(|property| property.name == name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EnumValueKind {
    Integer(i64),
    String(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumValue {
    pub name: String,
    pub value: EnumValueKind,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumType {
    pub name: String,
    pub values: Vec<EnumValue>,
}

impl EnumType {
    pub fn value(&self, name: &str) -> Option<&EnumValue> {
        self.values.iter().find(|value| value.name == name)
    }
}

/// Resolved PGSL type.
///
/// Equality is structural, except that structs and enums compare by name.
#[derive(Debug, Clone)]
pub enum Type {
    Boolean,
    Numeric(NumericKind),
    Vector(VectorType),
    Matrix(MatrixType),
    Array(ArrayType),
    Struct(Rc<StructType>),
    Pointer(Box<Type>),
    Sampler(SamplerKind),
    Texture(TextureType),
    Enum(Rc<EnumType>),
    Void,
    /// Type of a node whose analysis failed. Casts to and from anything so a
    /// single mistake reports a single incident.
    Invalid,
}

impl PartialEq for Type {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for Type {}

impl Type {
    pub fn integer() -> Self {
        Type::Numeric(NumericKind::Integer)
    }

    pub fn unsigned() -> Self {
        Type::Numeric(NumericKind::Unsigned)
    }

    pub fn float16() -> Self {
        Type::Numeric(NumericKind::Float16)
    }

    pub fn float32() -> Self {
        Type::Numeric(NumericKind::Float32)
    }

    pub fn abstract_integer() -> Self {
        Type::Numeric(NumericKind::AbstractInteger)
    }

    pub fn abstract_float() -> Self {
        Type::Numeric(NumericKind::AbstractFloat)
    }

    pub fn vector(dimension: Dimension, inner: Type) -> Self {
        Type::Vector(VectorType {
            dimension,
            inner: Box::new(inner),
        })
    }

    pub fn matrix(columns: Dimension, rows: Dimension, inner: Type) -> Self {
        Type::Matrix(MatrixType {
            columns,
            rows,
            inner: Box::new(inner),
        })
    }

    pub fn array(inner: Type, length: Option<u32>) -> Self {
        Type::Array(ArrayType {
            inner: Box::new(inner),
            length,
        })
    }

    pub fn pointer(inner: Type) -> Self {
        Type::Pointer(Box::new(inner))
    }

    pub fn texture(texture: TextureType) -> Self {
        Type::Texture(texture)
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Type::Invalid)
    }

    pub fn is_void(&self) -> bool {
        matches!(self, Type::Void)
    }

    pub fn numeric_kind(&self) -> Option<NumericKind> {
        match self {
            Type::Numeric(kind) => Some(*kind),
            _ => None,
        }
    }

    /// Scalar element of a scalar, vector or matrix.
    pub fn element(&self) -> Option<&Type> {
        match self {
            Type::Boolean | Type::Numeric(_) => Some(self),
            Type::Vector(vector) => Some(&vector.inner),
            Type::Matrix(matrix) => Some(&matrix.inner),
            _ => None,
        }
    }

    /// Type produced by indexing into this type.
    pub fn indexed(&self) -> Option<Type> {
        match self {
            Type::Vector(vector) => Some((*vector.inner).clone()),
            Type::Matrix(matrix) => Some(Type::vector(matrix.rows, (*matrix.inner).clone())),
            Type::Array(array) => Some((*array.inner).clone()),
            Type::Invalid => Some(Type::Invalid),
            _ => None,
        }
    }

    /// Number of indexable elements, when statically known.
    pub fn element_count(&self) -> Option<usize> {
        match self {
            Type::Vector(vector) => Some(vector.dimension.count()),
            Type::Matrix(matrix) => Some(matrix.columns.count()),
            Type::Array(array) => array.length.map(|length| length as usize),
            _ => None,
        }
    }

    /// Same type with its scalar element replaced.
    pub fn with_element(&self, element: Type) -> Type {
        match self {
            Type::Vector(vector) => Type::vector(vector.dimension, element),
            Type::Matrix(matrix) => Type::matrix(matrix.columns, matrix.rows, element),
            _ => element,
        }
    }

    /// WGSL spelling of the type.
    pub fn to_wgsl(&self) -> String {
        match self {
            Type::Boolean => "bool".to_string(),
            Type::Numeric(kind) => kind.to_wgsl().to_string(),
            Type::Vector(vector) => {
                format!("vec{}<{}>", vector.dimension, vector.inner.to_wgsl())
            }
            Type::Matrix(matrix) => format!(
                "mat{}x{}<{}>",
                matrix.columns,
                matrix.rows,
                matrix.inner.to_wgsl()
            ),
            Type::Array(ArrayType {
                inner,
                length: Some(length),
            }) => format!("array<{},{}>", inner.to_wgsl(), length),
            Type::Array(ArrayType {
                inner,
                length: None,
            }) => format!("array<{}>", inner.to_wgsl()),
            Type::Struct(structure) => structure.name.clone(),
            Type::Pointer(inner) => format!("ptr<function,{}>", inner.to_wgsl()),
            Type::Sampler(kind) => kind.to_wgsl().to_string(),
            Type::Texture(texture) => texture.to_wgsl(),
            Type::Enum(enumeration) => enumeration.name.clone(),
            Type::Void | Type::Invalid => String::new(),
        }
    }

    /// Constructor name used by `new` without explicit type arguments:
    /// `vec3(...)`, `mat2x2(...)`, `array(...)`.
    pub fn constructor_head(&self) -> String {
        match self {
            Type::Vector(vector) => format!("vec{}", vector.dimension),
            Type::Matrix(matrix) => format!("mat{}x{}", matrix.columns, matrix.rows),
            Type::Array(_) => "array".to_string(),
            _ => self.to_wgsl(),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Boolean => write!(f, "boolean"),
            Type::Numeric(kind) => write!(f, "{}", kind),
            Type::Vector(vector) => write!(f, "Vector{}<{}>", vector.dimension, vector.inner),
            Type::Matrix(matrix) => write!(
                f,
                "Matrix{}{}<{}>",
                matrix.columns, matrix.rows, matrix.inner
            ),
            Type::Array(ArrayType {
                inner,
                length: Some(length),
            }) => write!(f, "Array<{}, {}>", inner, length),
            Type::Array(ArrayType {
                inner,
                length: None,
            }) => write!(f, "Array<{}>", inner),
            Type::Struct(structure) => write!(f, "{}", structure.name),
            Type::Pointer(inner) => write!(f, "Pointer<{}>", inner),
            Type::Sampler(kind) => write!(f, "{}", kind.name()),
            Type::Texture(texture) => write!(f, "{}", texture),
            Type::Enum(enumeration) => write!(f, "{}", enumeration.name),
            Type::Void => write!(f, "void"),
            Type::Invalid => write!(f, "unknown"),
        }
    }
}

/// AST payload of a type as written in source. Arguments are `Type` nodes
/// or expression nodes (array lengths, enum values).
#[derive(Debug, Clone)]
pub struct TypeDeclaration {
    pub name: String,
    pub arguments: Vec<NodeId>,
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use super::*;

    #[test]
    fn test_type_display() {
        assert_eq!(format!("{}", Type::float32()), "float32");
        assert_eq!(
            format!("{}", Type::vector(Dimension::Three, Type::float32())),
            "Vector3<float32>"
        );
        assert_eq!(
            format!(
                "{}",
                Type::matrix(Dimension::Two, Dimension::Four, Type::float16())
            ),
            "Matrix24<float16>"
        );
        assert_eq!(
            format!("{}", Type::array(Type::unsigned(), Some(4))),
            "Array<unsigned, 4>"
        );
        assert_eq!(format!("{}", Type::abstract_integer()), "abstract-integer");
    }

    #[test]
    fn test_type_to_wgsl() {
        assert_eq!(Type::Boolean.to_wgsl(), "bool");
        assert_eq!(
            Type::vector(Dimension::Three, Type::float32()).to_wgsl(),
            "vec3<f32>"
        );
        assert_eq!(
            Type::matrix(Dimension::Three, Dimension::Three, Type::float32()).to_wgsl(),
            "mat3x3<f32>"
        );
        assert_eq!(
            Type::array(Type::integer(), Some(8)).to_wgsl(),
            "array<i32,8>"
        );
        assert_eq!(Type::array(Type::float32(), None).to_wgsl(), "array<f32>");
        assert_eq!(
            Type::pointer(Type::float32()).to_wgsl(),
            "ptr<function,f32>"
        );
        assert_eq!(Type::Sampler(SamplerKind::Comparison).to_wgsl(), "sampler_comparison");
    }

    #[test]
    fn test_constructor_head() {
        assert_eq!(
            Type::vector(Dimension::Three, Type::float32()).constructor_head(),
            "vec3"
        );
        assert_eq!(
            Type::matrix(Dimension::Four, Dimension::Two, Type::float32()).constructor_head(),
            "mat4x2"
        );
        assert_eq!(Type::float32().constructor_head(), "f32");
    }

    #[test]
    fn test_indexed() {
        let matrix = Type::matrix(Dimension::Three, Dimension::Two, Type::float32());
        assert_eq!(
            matrix.indexed(),
            Some(Type::vector(Dimension::Two, Type::float32()))
        );
        assert_eq!(matrix.element_count(), Some(3));
        assert_eq!(Type::float32().indexed(), None);
    }
}
