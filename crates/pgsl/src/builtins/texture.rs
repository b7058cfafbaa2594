//! Texture built-in functions.
//!
//! Sampled and depth textures are listed with concrete types per
//! dimension; storage textures are matched by a tag carrying their
//! dimension and channel kind since their format varies.

use alloc::{vec, vec::Vec};

use super::{BuiltinFunction, OverloadHeader, ParameterType};
use crate::types::{
    Dimension, ElementClass, NumericKind, SamplerKind, TextureDimension, Type, TextureType,
    TypeTag,
};

use TextureDimension::{Cube, CubeArray, OneD, ThreeD, TwoD, TwoDArray};

/// Sample kinds of sampled textures and channel kinds of storage textures.
const CHANNELS: [NumericKind; 3] = [
    NumericKind::Float32,
    NumericKind::Integer,
    NumericKind::Unsigned,
];

const STORAGE_DIMENSIONS: [TextureDimension; 4] = [OneD, TwoD, TwoDArray, ThreeD];

/// A texture argument and what the function returns for it.
struct Target {
    dimension: TextureDimension,
    texture: Type,
    returns: Type,
}

pub(super) fn functions() -> Vec<BuiltinFunction> {
    vec![
        BuiltinFunction::new("textureDimensions", dimensions_headers()),
        BuiltinFunction::new("textureLoad", load_headers()),
        BuiltinFunction::new("textureStore", store_headers()),
        BuiltinFunction::new("textureSample", sample_headers()),
        BuiltinFunction::new("textureSampleLevel", sample_level_headers()),
        BuiltinFunction::new("textureSampleBias", sample_bias_headers()),
        BuiltinFunction::new("textureSampleCompare", sample_compare_headers()),
        BuiltinFunction::new("textureNumLayers", num_layers_headers()),
        BuiltinFunction::new("textureNumLevels", num_levels_headers()),
        BuiltinFunction::new("textureNumSamples", num_samples_headers()),
    ]
}

fn vec4(kind: NumericKind) -> Type {
    Type::vector(Dimension::Four, Type::Numeric(kind))
}

/// Coordinate type of a dimension over `element`.
fn coordinates(dimension: TextureDimension, element: Type) -> Type {
    match dimension.coordinates() {
        2 => Type::vector(Dimension::Two, element),
        3 => Type::vector(Dimension::Three, element),
        _ => element,
    }
}

/// Integer coordinate tag of a dimension; signed and unsigned both match.
fn integer_coordinates(dimension: TextureDimension) -> TypeTag {
    match dimension.coordinates() {
        2 => TypeTag::vector_n(Dimension::Two, ElementClass::Integer),
        3 => TypeTag::vector_n(Dimension::Three, ElementClass::Integer),
        _ => TypeTag::INTEGER,
    }
}

fn sampled(dimensions: &[TextureDimension]) -> Vec<Target> {
    dimensions
        .iter()
        .map(|dimension| Target {
            dimension: *dimension,
            texture: Type::texture(TextureType::sampled(*dimension, NumericKind::Float32)),
            returns: vec4(NumericKind::Float32),
        })
        .collect()
}

fn depth(dimensions: &[TextureDimension]) -> Vec<Target> {
    dimensions
        .iter()
        .map(|dimension| Target {
            dimension: *dimension,
            texture: Type::texture(TextureType::depth(*dimension)),
            returns: Type::float32(),
        })
        .collect()
}

/// `(t, s, coords[, array_index], extra...)` per target.
fn sampling(
    targets: Vec<Target>,
    sampler: SamplerKind,
    extra: &[(&'static str, ParameterType)],
    generics: &[(&'static str, TypeTag)],
) -> Vec<OverloadHeader> {
    targets
        .into_iter()
        .map(|target| {
            let mut header = generics
                .iter()
                .fold(OverloadHeader::new(), |header, (name, tag)| {
                    header.generic(*name, &[tag.clone()])
                });
            if target.dimension.is_arrayed() {
                header = header.generic("A", &[TypeTag::INTEGER]);
            }
            header = header
                .param("t", target.texture)
                .param("s", Type::Sampler(sampler))
                .param("coords", coordinates(target.dimension, Type::float32()));
            if target.dimension.is_arrayed() {
                header = header.param("array_index", "A");
            }
            extra
                .iter()
                .fold(header, |header, (name, ty)| header.param(*name, ty.clone()))
                .returns(target.returns)
        })
        .collect()
}

fn dimensions_headers() -> Vec<OverloadHeader> {
    let size = |dimension: TextureDimension| match dimension {
        OneD => Type::unsigned(),
        ThreeD => Type::vector(Dimension::Three, Type::unsigned()),
        _ => Type::vector(Dimension::Two, Type::unsigned()),
    };

    let mut headers: Vec<OverloadHeader> = TextureDimension::ALL
        .iter()
        .map(|dimension| {
            OverloadHeader::new()
                .generic("T", &[TypeTag::Texture(Some(*dimension))])
                .param("t", "T")
                .returns(size(*dimension))
        })
        .collect();
    headers.extend(TextureDimension::ALL.iter().map(|dimension| {
        OverloadHeader::new()
            .generic("T", &[TypeTag::Texture(Some(*dimension))])
            .generic("L", &[TypeTag::INTEGER])
            .param("t", "T")
            .param("level", "L")
            .returns(size(*dimension))
    }));
    headers
}

fn load_headers() -> Vec<OverloadHeader> {
    let mut headers = Vec::new();

    let mut sampled_targets = Vec::new();
    for kind in CHANNELS {
        for dimension in [OneD, TwoD, TwoDArray, ThreeD] {
            sampled_targets.push(Target {
                dimension,
                texture: Type::texture(TextureType::sampled(dimension, kind)),
                returns: vec4(kind),
            });
        }
    }
    sampled_targets.extend(depth(&[TwoD, TwoDArray]));

    // (t, coords[, array_index], level)
    for target in sampled_targets {
        let mut header = OverloadHeader::new()
            .generic("C", &[integer_coordinates(target.dimension)])
            .generic("L", &[TypeTag::INTEGER]);
        if target.dimension.is_arrayed() {
            header = header.generic("A", &[TypeTag::INTEGER]);
        }
        header = header.param("t", target.texture).param("coords", "C");
        if target.dimension.is_arrayed() {
            header = header.param("array_index", "A");
        }
        headers.push(header.param("level", "L").returns(target.returns));
    }

    // (t, coords, sample_index)
    let mut multisampled: Vec<(Type, Type)> = CHANNELS
        .iter()
        .map(|kind| (Type::texture(TextureType::multisampled(*kind)), vec4(*kind)))
        .collect();
    multisampled.push((
        Type::texture(TextureType::depth_multisampled()),
        Type::float32(),
    ));
    for (texture, returns) in multisampled {
        headers.push(
            OverloadHeader::new()
                .generic("C", &[integer_coordinates(TwoD)])
                .generic("S", &[TypeTag::INTEGER])
                .param("t", texture)
                .param("coords", "C")
                .param("sample_index", "S")
                .returns(returns),
        );
    }

    headers.extend(storage_headers(|header, _| header, |kind| Some(vec4(kind))));

    headers.push(
        OverloadHeader::new()
            .generic("C", &[integer_coordinates(TwoD)])
            .param("t", Type::texture(TextureType::external()))
            .param("coords", "C")
            .returns(vec4(NumericKind::Float32)),
    );
    headers
}

fn store_headers() -> Vec<OverloadHeader> {
    storage_headers(
        |header, kind| header.param("value", vec4(kind)),
        |_| None,
    )
}

/// `(t, coords[, array_index], ...)` for every storage dimension and channel.
fn storage_headers(
    finish: impl Fn(OverloadHeader, NumericKind) -> OverloadHeader,
    returns: impl Fn(NumericKind) -> Option<Type>,
) -> Vec<OverloadHeader> {
    let mut headers = Vec::new();
    for dimension in STORAGE_DIMENSIONS {
        for channel in CHANNELS {
            let mut header = OverloadHeader::new()
                .generic("T", &[TypeTag::StorageTexture { dimension, channel }])
                .generic("C", &[integer_coordinates(dimension)]);
            if dimension.is_arrayed() {
                header = header.generic("A", &[TypeTag::INTEGER]);
            }
            header = header.param("t", "T").param("coords", "C");
            if dimension.is_arrayed() {
                header = header.param("array_index", "A");
            }
            header = finish(header, channel);
            if let Some(ty) = returns(channel) {
                header = header.returns(ty);
            }
            headers.push(header);
        }
    }
    headers
}

fn sample_headers() -> Vec<OverloadHeader> {
    let mut headers = sampling(
        sampled(&[OneD, TwoD, TwoDArray, ThreeD, Cube, CubeArray]),
        SamplerKind::Filtering,
        &[],
        &[],
    );
    headers.extend(sampling(
        depth(&[TwoD, TwoDArray, Cube, CubeArray]),
        SamplerKind::Filtering,
        &[],
        &[],
    ));
    headers
}

fn sample_level_headers() -> Vec<OverloadHeader> {
    let mut headers = sampling(
        sampled(&[TwoD, TwoDArray, ThreeD, Cube, CubeArray]),
        SamplerKind::Filtering,
        &[("level", Type::float32().into())],
        &[],
    );
    headers.extend(sampling(
        depth(&[TwoD, TwoDArray, Cube, CubeArray]),
        SamplerKind::Filtering,
        &[("level", "L".into())],
        &[("L", TypeTag::INTEGER)],
    ));
    headers
}

fn sample_bias_headers() -> Vec<OverloadHeader> {
    sampling(
        sampled(&[TwoD, TwoDArray, ThreeD, Cube, CubeArray]),
        SamplerKind::Filtering,
        &[("bias", Type::float32().into())],
        &[],
    )
}

fn sample_compare_headers() -> Vec<OverloadHeader> {
    sampling(
        depth(&[TwoD, TwoDArray, Cube, CubeArray]),
        SamplerKind::Comparison,
        &[("depth_ref", Type::float32().into())],
        &[],
    )
}

fn num_layers_headers() -> Vec<OverloadHeader> {
    [TwoDArray, CubeArray]
        .iter()
        .map(|dimension| {
            OverloadHeader::new()
                .generic("T", &[TypeTag::Texture(Some(*dimension))])
                .param("t", "T")
                .returns(Type::unsigned())
        })
        .collect()
}

fn num_levels_headers() -> Vec<OverloadHeader> {
    vec![OverloadHeader::new()
        .generic("T", &[TypeTag::Texture(None)])
        .param("t", "T")
        .returns(Type::unsigned())]
}

fn num_samples_headers() -> Vec<OverloadHeader> {
    let mut textures: Vec<Type> = CHANNELS
        .iter()
        .map(|kind| Type::texture(TextureType::multisampled(*kind)))
        .collect();
    textures.push(Type::texture(TextureType::depth_multisampled()));
    textures
        .into_iter()
        .map(|texture| {
            OverloadHeader::new()
                .param("t", texture)
                .returns(Type::unsigned())
        })
        .collect()
}
