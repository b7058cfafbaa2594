//! Type equality, castability and numeric unification.

use super::{ArrayType, MatrixType, Type, VectorType};

impl Type {
    /// Structural equality. Structs and enums compare by name.
    pub fn equals(&self, other: &Type) -> bool {
        match (self, other) {
            (Type::Boolean, Type::Boolean)
            | (Type::Void, Type::Void)
            | (Type::Invalid, Type::Invalid) => true,
            (Type::Numeric(a), Type::Numeric(b)) => a == b,
            (Type::Vector(a), Type::Vector(b)) => {
                a.dimension == b.dimension && a.inner.equals(&b.inner)
            }
            (Type::Matrix(a), Type::Matrix(b)) => {
                a.columns == b.columns && a.rows == b.rows && a.inner.equals(&b.inner)
            }
            (Type::Array(a), Type::Array(b)) => a.length == b.length && a.inner.equals(&b.inner),
            (Type::Struct(a), Type::Struct(b)) => a.name == b.name,
            (Type::Enum(a), Type::Enum(b)) => a.name == b.name,
            (Type::Pointer(a), Type::Pointer(b)) => a.equals(b),
            (Type::Sampler(a), Type::Sampler(b)) => a == b,
            (Type::Texture(a), Type::Texture(b)) => a == b,
            _ => false,
        }
    }

    /// Conversion applied without a constructor: abstract kinds into
    /// concrete ones, lifted through vectors, matrices and arrays of equal
    /// shape. Everything else converts only into an equal type.
    pub fn is_implicit_castable_into(&self, target: &Type) -> bool {
        self.is_castable_into(target, false)
    }

    /// Conversion available through `new T(value)`: implicit casts plus
    /// any conversion between concrete numeric kinds.
    pub fn is_explicit_castable_into(&self, target: &Type) -> bool {
        self.is_castable_into(target, true)
    }

    fn is_castable_into(&self, target: &Type, explicit: bool) -> bool {
        match (self, target) {
            (Type::Invalid, _) | (_, Type::Invalid) => true,
            (Type::Numeric(from), Type::Numeric(to)) => {
                if explicit {
                    from.is_explicit_castable_into(*to)
                } else {
                    from.is_implicit_castable_into(*to)
                }
            }
            (
                Type::Vector(VectorType {
                    dimension: from_dimension,
                    inner: from,
                }),
                Type::Vector(VectorType {
                    dimension: to_dimension,
                    inner: to,
                }),
            ) => from_dimension == to_dimension && from.is_castable_into(to, explicit),
            (
                Type::Matrix(MatrixType {
                    columns: from_columns,
                    rows: from_rows,
                    inner: from,
                }),
                Type::Matrix(MatrixType {
                    columns: to_columns,
                    rows: to_rows,
                    inner: to,
                }),
            ) => {
                from_columns == to_columns
                    && from_rows == to_rows
                    && from.is_castable_into(to, explicit)
            }
            (
                Type::Array(ArrayType {
                    inner: from,
                    length: from_length,
                }),
                Type::Array(ArrayType {
                    inner: to,
                    length: to_length,
                }),
            ) => from_length == to_length && from.is_castable_into(to, explicit),
            _ => self.equals(target),
        }
    }

    /// Common type of two operands: the one the other implicitly casts into.
    ///
    /// A concrete operand wins over an abstract one, and two abstract
    /// operands stay abstract. `None` when neither converts into the other.
    pub fn unify(&self, other: &Type) -> Option<Type> {
        if self.is_invalid() {
            return Some(other.clone());
        }
        if self.is_implicit_castable_into(other) {
            Some(other.clone())
        } else if other.is_implicit_castable_into(self) {
            Some(self.clone())
        } else {
            None
        }
    }

    /// Same kind of composite with the same component counts, ignoring the
    /// element type.
    pub fn shape_matches(&self, other: &Type) -> bool {
        match (self, other) {
            (Type::Vector(a), Type::Vector(b)) => a.dimension == b.dimension,
            (Type::Matrix(a), Type::Matrix(b)) => a.columns == b.columns && a.rows == b.rows,
            (Type::Boolean | Type::Numeric(_), Type::Boolean | Type::Numeric(_)) => true,
            _ => false,
        }
    }
}
