//! Numeric scalar kinds and their conversion lattice.

/// Kind of a numeric scalar.
///
/// The abstract kinds are the types of unsuffixed literals. They convert
/// implicitly into concrete kinds and stay abstract only when every operand
/// is abstract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NumericKind {
    /// Signed 32 bit integer.
    Integer,
    /// Unsigned 32 bit integer.
    Unsigned,
    Float16,
    Float32,
    AbstractInteger,
    AbstractFloat,
}

impl NumericKind {
    pub const ALL: [NumericKind; 6] = [
        NumericKind::Integer,
        NumericKind::Unsigned,
        NumericKind::Float16,
        NumericKind::Float32,
        NumericKind::AbstractInteger,
        NumericKind::AbstractFloat,
    ];

    /// Name in PGSL source and in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            NumericKind::Integer => "integer",
            NumericKind::Unsigned => "unsigned",
            NumericKind::Float16 => "float16",
            NumericKind::Float32 => "float32",
            NumericKind::AbstractInteger => "abstract-integer",
            NumericKind::AbstractFloat => "abstract-float",
        }
    }

    /// WGSL spelling. Abstract kinds are emitted as their default concrete kind.
    pub fn to_wgsl(self) -> &'static str {
        match self {
            NumericKind::Integer | NumericKind::AbstractInteger => "i32",
            NumericKind::Unsigned => "u32",
            NumericKind::Float16 => "f16",
            NumericKind::Float32 | NumericKind::AbstractFloat => "f32",
        }
    }

    pub fn is_float(self) -> bool {
        matches!(
            self,
            NumericKind::Float16 | NumericKind::Float32 | NumericKind::AbstractFloat
        )
    }

    pub fn is_integer(self) -> bool {
        !self.is_float()
    }

    pub fn is_abstract(self) -> bool {
        matches!(self, NumericKind::AbstractInteger | NumericKind::AbstractFloat)
    }

    pub fn is_signed(self) -> bool {
        self != NumericKind::Unsigned
    }

    pub fn is_implicit_castable_into(self, target: NumericKind) -> bool {
        if self == target {
            return true;
        }
        match self {
            NumericKind::AbstractInteger => matches!(
                target,
                NumericKind::Integer
                    | NumericKind::Unsigned
                    | NumericKind::AbstractFloat
                    | NumericKind::Float16
                    | NumericKind::Float32
            ),
            NumericKind::AbstractFloat => {
                matches!(target, NumericKind::Float16 | NumericKind::Float32)
            }
            _ => false,
        }
    }

    /// Implicit casts plus any conversion between concrete kinds.
    pub fn is_explicit_castable_into(self, target: NumericKind) -> bool {
        self.is_implicit_castable_into(target) || (!self.is_abstract() && !target.is_abstract())
    }
}

impl core::fmt::Display for NumericKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_implicit_is_reflexive() {
        for kind in NumericKind::ALL {
            assert!(kind.is_implicit_castable_into(kind), "{}", kind);
            assert!(kind.is_explicit_castable_into(kind), "{}", kind);
        }
    }

    #[test]
    fn test_abstract_float_lattice() {
        assert!(NumericKind::AbstractFloat.is_implicit_castable_into(NumericKind::Float32));
        assert!(NumericKind::AbstractFloat.is_implicit_castable_into(NumericKind::Float16));
        assert!(!NumericKind::AbstractFloat.is_implicit_castable_into(NumericKind::Integer));
        assert!(!NumericKind::Float16.is_implicit_castable_into(NumericKind::Float32));
        assert!(!NumericKind::Float32.is_implicit_castable_into(NumericKind::Float16));
    }

    #[test]
    fn test_abstract_integer_lattice() {
        for target in NumericKind::ALL {
            assert!(
                NumericKind::AbstractInteger.is_implicit_castable_into(target),
                "{}",
                target
            );
        }
        assert!(!NumericKind::Integer.is_implicit_castable_into(NumericKind::AbstractInteger));
    }

    #[test]
    fn test_explicit_between_concrete_kinds() {
        assert!(NumericKind::Float32.is_explicit_castable_into(NumericKind::Integer));
        assert!(NumericKind::Unsigned.is_explicit_castable_into(NumericKind::Float16));
        assert!(!NumericKind::Float32.is_explicit_castable_into(NumericKind::AbstractFloat));
    }

    #[test]
    fn test_wgsl_names() {
        assert_eq!(NumericKind::Float32.to_wgsl(), "f32");
        assert_eq!(NumericKind::AbstractInteger.to_wgsl(), "i32");
        assert_eq!(NumericKind::Unsigned.to_wgsl(), "u32");
    }
}
