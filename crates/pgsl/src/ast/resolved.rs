//! Result of processing one node.

use alloc::string::String;

use super::NodeId;
use crate::types::Type;

/// How fixed a value is. Ordered from most to least fixed, so combining
/// operands takes the maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FixedState {
    /// Known while analysing; usable in `const` initializers.
    Constant,
    /// Fixed for one execution of its scope (`let`, parameters).
    ScopeFixed,
    /// Mutable or runtime-provided.
    Variable,
}

impl FixedState {
    pub fn combine(self, other: FixedState) -> FixedState {
        self.max(other)
    }
}

/// Value of a constant node, where one is known.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstantValue {
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

/// What a name or call resolved to.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Link {
    #[default]
    None,
    /// A user or built-in declaration node.
    Declaration(NodeId),
    /// A built-in function and its WGSL spelling.
    Builtin { target: &'static str },
    /// An enum value; transpiled as its literal value.
    EnumValue,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    pub ty: Type,
    pub fixed: FixedState,
    /// Whether the node denotes a reference that can be written.
    pub assignable: bool,
    /// Whether the node names memory whose address can be taken.
    pub reference: bool,
    pub constant: Option<ConstantValue>,
    pub link: Link,
}

impl Resolved {
    pub fn new(ty: Type, fixed: FixedState) -> Self {
        Self {
            ty,
            fixed,
            assignable: false,
            reference: false,
            constant: None,
            link: Link::None,
        }
    }

    /// Result of a node whose analysis failed. Constant so it does not
    /// trigger follow-up "not constant" incidents.
    pub fn invalid() -> Self {
        Self::new(Type::Invalid, FixedState::Constant)
    }

    /// Result of statements and other nodes without a value.
    pub fn void() -> Self {
        Self::new(Type::Void, FixedState::Variable)
    }

    pub fn constant(ty: Type, value: ConstantValue) -> Self {
        Self {
            constant: Some(value),
            ..Self::new(ty, FixedState::Constant)
        }
    }

    pub fn assignable(mut self, assignable: bool) -> Self {
        self.assignable = assignable;
        self
    }

    pub fn reference(mut self, reference: bool) -> Self {
        self.reference = reference;
        self
    }

    pub fn with_link(mut self, link: Link) -> Self {
        self.link = link;
        self
    }
}
