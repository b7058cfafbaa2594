//! Sampler and texture types.

use alloc::boxed::Box;
use core::fmt;

use super::{NumericKind, Type};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SamplerKind {
    Filtering,
    Comparison,
}

impl SamplerKind {
    pub fn name(self) -> &'static str {
        match self {
            SamplerKind::Filtering => "Sampler",
            SamplerKind::Comparison => "SamplerComparison",
        }
    }

    pub fn to_wgsl(self) -> &'static str {
        match self {
            SamplerKind::Filtering => "sampler",
            SamplerKind::Comparison => "sampler_comparison",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureDimension {
    OneD,
    TwoD,
    TwoDArray,
    ThreeD,
    Cube,
    CubeArray,
}

impl TextureDimension {
    pub const ALL: [TextureDimension; 6] = [
        TextureDimension::OneD,
        TextureDimension::TwoD,
        TextureDimension::TwoDArray,
        TextureDimension::ThreeD,
        TextureDimension::Cube,
        TextureDimension::CubeArray,
    ];

    /// Suffix used in PGSL type names: `Texture2dArray`.
    pub fn name(self) -> &'static str {
        match self {
            TextureDimension::OneD => "1d",
            TextureDimension::TwoD => "2d",
            TextureDimension::TwoDArray => "2dArray",
            TextureDimension::ThreeD => "3d",
            TextureDimension::Cube => "Cube",
            TextureDimension::CubeArray => "CubeArray",
        }
    }

    pub fn to_wgsl(self) -> &'static str {
        match self {
            TextureDimension::OneD => "1d",
            TextureDimension::TwoD => "2d",
            TextureDimension::TwoDArray => "2d_array",
            TextureDimension::ThreeD => "3d",
            TextureDimension::Cube => "cube",
            TextureDimension::CubeArray => "cube_array",
        }
    }

    pub fn is_arrayed(self) -> bool {
        matches!(self, TextureDimension::TwoDArray | TextureDimension::CubeArray)
    }

    /// Number of components of a texture coordinate, 1 for 1d textures.
    pub fn coordinates(self) -> usize {
        match self {
            TextureDimension::OneD => 1,
            TextureDimension::TwoD | TextureDimension::TwoDArray => 2,
            TextureDimension::ThreeD | TextureDimension::Cube | TextureDimension::CubeArray => 3,
        }
    }
}

/// Texel format of a storage texture. Values of the built-in `TexelFormat` enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TexelFormat {
    Rgba8unorm,
    Rgba8snorm,
    Rgba8uint,
    Rgba8sint,
    Rgba16uint,
    Rgba16sint,
    Rgba16float,
    R32uint,
    R32sint,
    R32float,
    Rg32uint,
    Rg32sint,
    Rg32float,
    Rgba32uint,
    Rgba32sint,
    Rgba32float,
    Bgra8unorm,
}

impl TexelFormat {
    pub const ALL: [TexelFormat; 17] = [
        TexelFormat::Rgba8unorm,
        TexelFormat::Rgba8snorm,
        TexelFormat::Rgba8uint,
        TexelFormat::Rgba8sint,
        TexelFormat::Rgba16uint,
        TexelFormat::Rgba16sint,
        TexelFormat::Rgba16float,
        TexelFormat::R32uint,
        TexelFormat::R32sint,
        TexelFormat::R32float,
        TexelFormat::Rg32uint,
        TexelFormat::Rg32sint,
        TexelFormat::Rg32float,
        TexelFormat::Rgba32uint,
        TexelFormat::Rgba32sint,
        TexelFormat::Rgba32float,
        TexelFormat::Bgra8unorm,
    ];

    /// Enum value name in PGSL (`TexelFormat.Rgba8unorm`).
    pub fn name(self) -> &'static str {
        match self {
            TexelFormat::Rgba8unorm => "Rgba8unorm",
            TexelFormat::Rgba8snorm => "Rgba8snorm",
            TexelFormat::Rgba8uint => "Rgba8uint",
            TexelFormat::Rgba8sint => "Rgba8sint",
            TexelFormat::Rgba16uint => "Rgba16uint",
            TexelFormat::Rgba16sint => "Rgba16sint",
            TexelFormat::Rgba16float => "Rgba16float",
            TexelFormat::R32uint => "R32uint",
            TexelFormat::R32sint => "R32sint",
            TexelFormat::R32float => "R32float",
            TexelFormat::Rg32uint => "Rg32uint",
            TexelFormat::Rg32sint => "Rg32sint",
            TexelFormat::Rg32float => "Rg32float",
            TexelFormat::Rgba32uint => "Rgba32uint",
            TexelFormat::Rgba32sint => "Rgba32sint",
            TexelFormat::Rgba32float => "Rgba32float",
            TexelFormat::Bgra8unorm => "Bgra8unorm",
        }
    }

    /// WGSL spelling, which is also the string value of the enum entry.
    pub fn to_wgsl(self) -> &'static str {
        match self {
            TexelFormat::Rgba8unorm => "rgba8unorm",
            TexelFormat::Rgba8snorm => "rgba8snorm",
            TexelFormat::Rgba8uint => "rgba8uint",
            TexelFormat::Rgba8sint => "rgba8sint",
            TexelFormat::Rgba16uint => "rgba16uint",
            TexelFormat::Rgba16sint => "rgba16sint",
            TexelFormat::Rgba16float => "rgba16float",
            TexelFormat::R32uint => "r32uint",
            TexelFormat::R32sint => "r32sint",
            TexelFormat::R32float => "r32float",
            TexelFormat::Rg32uint => "rg32uint",
            TexelFormat::Rg32sint => "rg32sint",
            TexelFormat::Rg32float => "rg32float",
            TexelFormat::Rgba32uint => "rgba32uint",
            TexelFormat::Rgba32sint => "rgba32sint",
            TexelFormat::Rgba32float => "rgba32float",
            TexelFormat::Bgra8unorm => "bgra8unorm",
        }
    }

    pub fn from_wgsl(text: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|format| format.to_wgsl() == text)
    }

    /// Scalar kind of one channel when loaded or stored.
    pub fn channel(self) -> NumericKind {
        let name = self.to_wgsl();
        if name.ends_with("uint") {
            NumericKind::Unsigned
        } else if name.ends_with("sint") {
            NumericKind::Integer
        } else {
            NumericKind::Float32
        }
    }
}

/// Access mode of storage buffers and storage textures. Values of the
/// built-in `AccessMode` enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessMode {
    Read,
    Write,
    ReadWrite,
}

impl AccessMode {
    pub const ALL: [AccessMode; 3] = [AccessMode::Read, AccessMode::Write, AccessMode::ReadWrite];

    pub fn name(self) -> &'static str {
        match self {
            AccessMode::Read => "Read",
            AccessMode::Write => "Write",
            AccessMode::ReadWrite => "ReadWrite",
        }
    }

    pub fn to_wgsl(self) -> &'static str {
        match self {
            AccessMode::Read => "read",
            AccessMode::Write => "write",
            AccessMode::ReadWrite => "read_write",
        }
    }

    pub fn from_wgsl(text: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.to_wgsl() == text)
    }

    pub fn is_readable(self) -> bool {
        self != AccessMode::Write
    }

    pub fn is_writable(self) -> bool {
        self != AccessMode::Read
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TextureKind {
    /// `Texture2d<float32>`; `multisampled` only with a 2d dimension.
    Sampled { sample: Box<Type>, multisampled: bool },
    Depth { multisampled: bool },
    Storage { format: TexelFormat, access: AccessMode },
    External,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextureType {
    pub dimension: TextureDimension,
    pub kind: TextureKind,
}

impl TextureType {
    pub fn sampled(dimension: TextureDimension, sample: NumericKind) -> Self {
        Self {
            dimension,
            kind: TextureKind::Sampled {
                sample: Box::new(Type::Numeric(sample)),
                multisampled: false,
            },
        }
    }

    pub fn multisampled(sample: NumericKind) -> Self {
        Self {
            dimension: TextureDimension::TwoD,
            kind: TextureKind::Sampled {
                sample: Box::new(Type::Numeric(sample)),
                multisampled: true,
            },
        }
    }

    pub fn depth(dimension: TextureDimension) -> Self {
        Self {
            dimension,
            kind: TextureKind::Depth {
                multisampled: false,
            },
        }
    }

    pub fn depth_multisampled() -> Self {
        Self {
            dimension: TextureDimension::TwoD,
            kind: TextureKind::Depth { multisampled: true },
        }
    }

    pub fn storage(dimension: TextureDimension, format: TexelFormat, access: AccessMode) -> Self {
        Self {
            dimension,
            kind: TextureKind::Storage { format, access },
        }
    }

    pub fn external() -> Self {
        Self {
            dimension: TextureDimension::TwoD,
            kind: TextureKind::External,
        }
    }

    pub fn to_wgsl(&self) -> alloc::string::String {
        use alloc::format;

        let dimension = self.dimension.to_wgsl();
        match &self.kind {
            TextureKind::Sampled {
                sample,
                multisampled: false,
            } => format!("texture_{}<{}>", dimension, sample.to_wgsl()),
            TextureKind::Sampled {
                sample,
                multisampled: true,
            } => format!("texture_multisampled_2d<{}>", sample.to_wgsl()),
            TextureKind::Depth {
                multisampled: false,
            } => format!("texture_depth_{}", dimension),
            TextureKind::Depth { multisampled: true } => "texture_depth_multisampled_2d".into(),
            TextureKind::Storage { format, access } => format!(
                "texture_storage_{}<{},{}>",
                dimension,
                format.to_wgsl(),
                access.to_wgsl()
            ),
            TextureKind::External => "texture_external".into(),
        }
    }
}

impl fmt::Display for TextureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dimension = self.dimension.name();
        match &self.kind {
            TextureKind::Sampled {
                sample,
                multisampled: false,
            } => write!(f, "Texture{}<{}>", dimension, sample),
            TextureKind::Sampled {
                sample,
                multisampled: true,
            } => write!(f, "TextureMultisampled2d<{}>", sample),
            TextureKind::Depth {
                multisampled: false,
            } => write!(f, "TextureDepth{}", dimension),
            TextureKind::Depth { multisampled: true } => write!(f, "TextureDepthMultisampled2d"),
            TextureKind::Storage { format, access } => write!(
                f,
                "TextureStorage{}<{}, {}>",
                dimension,
                format.to_wgsl(),
                access.to_wgsl()
            ),
            TextureKind::External => write!(f, "TextureExternal"),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use super::*;

    #[test]
    fn test_texture_wgsl() {
        assert_eq!(
            TextureType::sampled(TextureDimension::TwoDArray, NumericKind::Float32).to_wgsl(),
            "texture_2d_array<f32>"
        );
        assert_eq!(
            TextureType::depth(TextureDimension::Cube).to_wgsl(),
            "texture_depth_cube"
        );
        assert_eq!(
            TextureType::storage(
                TextureDimension::TwoD,
                TexelFormat::Rgba8unorm,
                AccessMode::Write
            )
            .to_wgsl(),
            "texture_storage_2d<rgba8unorm,write>"
        );
        assert_eq!(TextureType::external().to_wgsl(), "texture_external");
    }

    #[test]
    fn test_texture_display() {
        assert_eq!(
            format!("{}", TextureType::multisampled(NumericKind::Integer)),
            "TextureMultisampled2d<integer>"
        );
        assert_eq!(
            format!("{}", TextureType::depth(TextureDimension::TwoD)),
            "TextureDepth2d"
        );
    }

    #[test]
    fn test_texel_channels() {
        assert_eq!(TexelFormat::Rgba8unorm.channel(), NumericKind::Float32);
        assert_eq!(TexelFormat::R32uint.channel(), NumericKind::Unsigned);
        assert_eq!(TexelFormat::Rgba16sint.channel(), NumericKind::Integer);
        assert_eq!(TexelFormat::from_wgsl("bgra8unorm"), Some(TexelFormat::Bgra8unorm));
        assert_eq!(AccessMode::from_wgsl("read_write"), Some(AccessMode::ReadWrite));
    }
}
