//! Run-scoped state shared by all processors of one transpile call.

use alloc::{
    string::{String, ToString},
    vec::Vec,
};
use core::fmt;

/// Shader stage of an entry point function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
    Compute,
}

impl ShaderStage {
    /// Stage of a `Vertex`, `Fragment` or `Compute` attribute name.
    pub fn from_attribute(name: &str) -> Option<Self> {
        match name {
            "Vertex" => Some(ShaderStage::Vertex),
            "Fragment" => Some(ShaderStage::Fragment),
            "Compute" => Some(ShaderStage::Compute),
            _ => None,
        }
    }

    pub fn to_wgsl(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
            ShaderStage::Compute => "compute",
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_wgsl())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPoint {
    pub name: String,
    pub stage: ShaderStage,
}

/// A named binding group and its bindings, in index order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingGroup {
    pub name: String,
    pub bindings: Vec<String>,
}

/// Binding groups, bindings, entry points and locations assigned while
/// transpiling.
///
/// Indices are handed out in order of first use. Asking again for a known
/// name returns the index it already has.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranspilationMeta {
    groups: Vec<BindingGroup>,
    entry_points: Vec<EntryPoint>,
    locations: Vec<String>,
}

impl TranspilationMeta {
    pub fn new() -> Self {
        Self::default()
    }

    /// Group and binding index of `GroupBinding(group, binding)`.
    pub fn binding(&mut self, group: &str, binding: &str) -> (u32, u32) {
        let group_index = match self.groups.iter().position(|known| known.name == group) {
            Some(index) => index,
            None => {
                self.groups.push(BindingGroup {
                    name: group.to_string(),
                    bindings: Vec::new(),
                });
                self.groups.len() - 1
            }
        };
        let bindings = &mut self.groups[group_index].bindings;
        let binding_index = index_of(bindings, binding);
        (group_index as u32, binding_index)
    }

    pub fn binding_groups(&self) -> &[BindingGroup] {
        &self.groups
    }

    /// Index of a named location. Equal names share one index across
    /// structs and parameters, so vertex outputs line up with fragment
    /// inputs.
    pub fn location(&mut self, name: &str) -> u32 {
        index_of(&mut self.locations, name)
    }

    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    pub fn add_entry_point(&mut self, name: impl Into<String>, stage: ShaderStage) {
        self.entry_points.push(EntryPoint {
            name: name.into(),
            stage,
        });
    }

    pub fn entry_points(&self) -> &[EntryPoint] {
        &self.entry_points
    }
}

fn index_of(names: &mut Vec<String>, name: &str) -> u32 {
    match names.iter().position(|known| known == name) {
        Some(index) => index as u32,
        None => {
            names.push(name.to_string());
            (names.len() - 1) as u32
        }
    }
}
