//! Built-in type names and the template arguments they take.

use super::{Dimension, NumericKind, SamplerKind, TextureDimension};

/// A built-in type name, before its template arguments are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTemplate {
    Boolean,
    Numeric(NumericKind),
    Vector(Dimension),
    Matrix(Dimension, Dimension),
    Array,
    Pointer,
    Sampler(SamplerKind),
    /// `Texture2d<T>`, `TextureMultisampled2d<T>`
    SampledTexture {
        dimension: TextureDimension,
        multisampled: bool,
    },
    DepthTexture {
        dimension: TextureDimension,
        multisampled: bool,
    },
    /// `TextureStorage2d<TexelFormat.X, AccessMode.Y>`
    StorageTexture(TextureDimension),
    ExternalTexture,
}

impl TypeTemplate {
    pub fn lookup(name: &str) -> Option<Self> {
        use TextureDimension::*;

        let template = match name {
            "boolean" => TypeTemplate::Boolean,
            "integer" => TypeTemplate::Numeric(NumericKind::Integer),
            "unsigned" => TypeTemplate::Numeric(NumericKind::Unsigned),
            "float16" => TypeTemplate::Numeric(NumericKind::Float16),
            "float32" | "float" => TypeTemplate::Numeric(NumericKind::Float32),
            "Array" => TypeTemplate::Array,
            "Pointer" => TypeTemplate::Pointer,
            "Sampler" => TypeTemplate::Sampler(SamplerKind::Filtering),
            "SamplerComparison" => TypeTemplate::Sampler(SamplerKind::Comparison),
            "Texture1d" => Self::sampled(OneD),
            "Texture2d" => Self::sampled(TwoD),
            "Texture2dArray" => Self::sampled(TwoDArray),
            "Texture3d" => Self::sampled(ThreeD),
            "TextureCube" => Self::sampled(Cube),
            "TextureCubeArray" => Self::sampled(CubeArray),
            "TextureMultisampled2d" => TypeTemplate::SampledTexture {
                dimension: TwoD,
                multisampled: true,
            },
            "TextureDepth2d" => Self::depth(TwoD),
            "TextureDepth2dArray" => Self::depth(TwoDArray),
            "TextureDepthCube" => Self::depth(Cube),
            "TextureDepthCubeArray" => Self::depth(CubeArray),
            "TextureDepthMultisampled2d" => TypeTemplate::DepthTexture {
                dimension: TwoD,
                multisampled: true,
            },
            "TextureStorage1d" => TypeTemplate::StorageTexture(OneD),
            "TextureStorage2d" => TypeTemplate::StorageTexture(TwoD),
            "TextureStorage2dArray" => TypeTemplate::StorageTexture(TwoDArray),
            "TextureStorage3d" => TypeTemplate::StorageTexture(ThreeD),
            "TextureExternal" => TypeTemplate::ExternalTexture,
            _ => return Self::lookup_shaped(name),
        };
        Some(template)
    }

    /// `Vector2`..`Vector4` and `Matrix22`..`Matrix44`.
    fn lookup_shaped(name: &str) -> Option<Self> {
        let digit = |c: u8| Dimension::from_count(usize::from(c.wrapping_sub(b'0')));
        if let Some(size) = name.strip_prefix("Vector") {
            return match size.as_bytes() {
                [count] => digit(*count).map(TypeTemplate::Vector),
                _ => None,
            };
        }
        if let Some(size) = name.strip_prefix("Matrix") {
            return match size.as_bytes() {
                [columns, rows] => Some(TypeTemplate::Matrix(digit(*columns)?, digit(*rows)?)),
                _ => None,
            };
        }
        None
    }

    fn sampled(dimension: TextureDimension) -> Self {
        TypeTemplate::SampledTexture {
            dimension,
            multisampled: false,
        }
    }

    fn depth(dimension: TextureDimension) -> Self {
        TypeTemplate::DepthTexture {
            dimension,
            multisampled: false,
        }
    }

    /// Accepted number of template arguments.
    pub fn arity(self) -> (usize, usize) {
        match self {
            TypeTemplate::Vector(_)
            | TypeTemplate::Matrix(_, _)
            | TypeTemplate::Pointer
            | TypeTemplate::SampledTexture { .. } => (1, 1),
            TypeTemplate::Array => (1, 2),
            TypeTemplate::StorageTexture(_) => (2, 2),
            _ => (0, 0),
        }
    }

    /// Whether `new T(...)` may omit the template arguments and infer them.
    pub fn is_inferable(self) -> bool {
        matches!(
            self,
            TypeTemplate::Vector(_) | TypeTemplate::Matrix(_, _) | TypeTemplate::Array
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_names() {
        assert_eq!(
            TypeTemplate::lookup("float"),
            Some(TypeTemplate::Numeric(NumericKind::Float32))
        );
        assert_eq!(TypeTemplate::lookup("boolean"), Some(TypeTemplate::Boolean));
        assert_eq!(TypeTemplate::lookup("double"), None);
    }

    #[test]
    fn test_shaped_names() {
        assert_eq!(
            TypeTemplate::lookup("Vector3"),
            Some(TypeTemplate::Vector(Dimension::Three))
        );
        assert_eq!(
            TypeTemplate::lookup("Matrix24"),
            Some(TypeTemplate::Matrix(Dimension::Two, Dimension::Four))
        );
        assert_eq!(TypeTemplate::lookup("Vector5"), None);
        assert_eq!(TypeTemplate::lookup("Matrix3"), None);
        assert_eq!(TypeTemplate::lookup("Vector"), None);
    }

    #[test]
    fn test_texture_names() {
        assert_eq!(
            TypeTemplate::lookup("TextureDepthCube"),
            Some(TypeTemplate::DepthTexture {
                dimension: TextureDimension::Cube,
                multisampled: false
            })
        );
        assert_eq!(
            TypeTemplate::lookup("TextureStorage2dArray"),
            Some(TypeTemplate::StorageTexture(TextureDimension::TwoDArray))
        );
        assert_eq!(TypeTemplate::lookup("TextureStorage2dArray").map(TypeTemplate::arity), Some((2, 2)));
    }
}
