//! Result types of unary and binary operators.
//!
//! These are pure functions over [`Type`]. An `Err` carries the incident
//! message; the caller attaches the range.

use alloc::{format, string::String};

use pgsl_syntax::cst::{BinaryOperator, OperatorClass, UnaryOperator};

use crate::types::{Dimension, NumericKind, Type};

/// Dimensions of an operand.
#[derive(Debug, Clone, Copy)]
enum Shape {
    Scalar,
    Vector(Dimension),
    Matrix(Dimension, Dimension),
    Other,
}

fn shape(ty: &Type) -> Shape {
    match ty {
        Type::Boolean | Type::Numeric(_) => Shape::Scalar,
        Type::Vector(vector) => Shape::Vector(vector.dimension),
        Type::Matrix(matrix) => Shape::Matrix(matrix.columns, matrix.rows),
        _ => Shape::Other,
    }
}

fn not_applicable(operator: BinaryOperator, left: &Type, right: &Type) -> String {
    format!(
        "Operator \"{}\" can not be applied to \"{}\" and \"{}\".",
        operator.token(),
        left,
        right
    )
}

fn dimension_mismatch(class: OperatorClass, left: &str, right: &str) -> String {
    format!(
        "Left and right side of {} expression must be the same type. Dimensions {} and {} don't match.",
        class.name(),
        left,
        right
    )
}

fn type_mismatch(class: OperatorClass, left: &Type, right: &Type) -> String {
    format!(
        "Left and right side of {} expression must be the same type. Types \"{}\" and \"{}\" don't match.",
        class.name(),
        left,
        right
    )
}

/// Common element of two scalars that satisfy `accepts`.
fn unify_elements(
    operator: BinaryOperator,
    left: &Type,
    right: &Type,
    accepts: impl Fn(&Type) -> bool,
) -> Result<Type, String> {
    let (Some(left_element), Some(right_element)) = (left.element(), right.element()) else {
        return Err(not_applicable(operator, left, right));
    };
    if !accepts(left_element) || !accepts(right_element) {
        return Err(not_applicable(operator, left, right));
    }
    left_element
        .unify(right_element)
        .ok_or_else(|| type_mismatch(operator.class(), left, right))
}

/// Result of applying `operator` to two operands of equal shape, or a
/// vector and a scalar when `splat` is set.
fn component_wise(
    operator: BinaryOperator,
    left: &Type,
    right: &Type,
    splat: bool,
    accepts: impl Fn(&Type) -> bool,
) -> Result<Type, String> {
    let class = operator.class();
    match (shape(left), shape(right)) {
        (Shape::Scalar, Shape::Scalar) => unify_elements(operator, left, right, accepts),
        (Shape::Vector(left_dimension), Shape::Vector(right_dimension)) => {
            if left_dimension != right_dimension {
                return Err(dimension_mismatch(
                    class,
                    &format!("{}", left_dimension),
                    &format!("{}", right_dimension),
                ));
            }
            let element = unify_elements(operator, left, right, accepts)?;
            Ok(Type::vector(left_dimension, element))
        }
        (Shape::Vector(dimension), Shape::Scalar)
        | (Shape::Scalar, Shape::Vector(dimension))
            if splat =>
        {
            let element = unify_elements(operator, left, right, accepts)?;
            Ok(Type::vector(dimension, element))
        }
        (Shape::Vector(dimension), Shape::Scalar)
        | (Shape::Scalar, Shape::Vector(dimension)) => Err(dimension_mismatch(
            class,
            &format!("{}", dimension),
            "1",
        )),
        _ => Err(not_applicable(operator, left, right)),
    }
}

fn is_numeric(ty: &Type) -> bool {
    matches!(ty, Type::Numeric(_))
}

fn is_integer(ty: &Type) -> bool {
    matches!(ty.numeric_kind(), Some(kind) if kind.is_integer())
}

fn is_float(ty: &Type) -> bool {
    matches!(ty.numeric_kind(), Some(kind) if kind.is_float())
}

/// Matrix arithmetic: `+` and `-` of equal shapes, and the linear algebra
/// products `*`.
fn matrix_arithmetic(operator: BinaryOperator, left: &Type, right: &Type) -> Result<Type, String> {
    let class = operator.class();
    let accepts = |ty: &Type| is_float(ty) || ty.numeric_kind() == Some(NumericKind::AbstractInteger);
    let element = || unify_elements(operator, left, right, accepts);
    match (operator, shape(left), shape(right)) {
        (
            BinaryOperator::Add | BinaryOperator::Subtract,
            Shape::Matrix(left_columns, left_rows),
            Shape::Matrix(right_columns, right_rows),
        ) => {
            if (left_columns, left_rows) != (right_columns, right_rows) {
                return Err(dimension_mismatch(
                    class,
                    &format!("{}{}", left_columns, left_rows),
                    &format!("{}{}", right_columns, right_rows),
                ));
            }
            Ok(Type::matrix(left_columns, left_rows, element()?))
        }
        (
            BinaryOperator::Multiply,
            Shape::Matrix(left_columns, left_rows),
            Shape::Matrix(right_columns, right_rows),
        ) => {
            if left_columns != right_rows {
                return Err(format!(
                    "Left matrix column count {} doesn't match right matrix row count {}.",
                    left_columns, right_rows
                ));
            }
            Ok(Type::matrix(right_columns, left_rows, element()?))
        }
        (BinaryOperator::Multiply, Shape::Matrix(columns, rows), Shape::Vector(dimension)) => {
            if columns != dimension {
                return Err(dimension_mismatch(
                    class,
                    &format!("{}{}", columns, rows),
                    &format!("{}", dimension),
                ));
            }
            Ok(Type::vector(rows, element()?))
        }
        (BinaryOperator::Multiply, Shape::Vector(dimension), Shape::Matrix(columns, rows)) => {
            if rows != dimension {
                return Err(dimension_mismatch(
                    class,
                    &format!("{}", dimension),
                    &format!("{}{}", columns, rows),
                ));
            }
            Ok(Type::vector(columns, element()?))
        }
        (BinaryOperator::Multiply, Shape::Matrix(columns, rows), Shape::Scalar)
        | (BinaryOperator::Multiply, Shape::Scalar, Shape::Matrix(columns, rows)) => {
            Ok(Type::matrix(columns, rows, element()?))
        }
        _ => Err(not_applicable(operator, left, right)),
    }
}

/// Result type of `left operator right`.
pub(crate) fn binary_result(
    operator: BinaryOperator,
    left: &Type,
    right: &Type,
) -> Result<Type, String> {
    if left.is_invalid() || right.is_invalid() {
        return Ok(Type::Invalid);
    }

    match operator.class() {
        OperatorClass::Arithmetic => {
            if matches!(left, Type::Matrix(_)) || matches!(right, Type::Matrix(_)) {
                matrix_arithmetic(operator, left, right)
            } else {
                component_wise(operator, left, right, true, is_numeric)
            }
        }
        OperatorClass::Comparison => {
            let equality = matches!(operator, BinaryOperator::Equal | BinaryOperator::NotEqual);
            let accepts = |ty: &Type| is_numeric(ty) || (equality && *ty == Type::Boolean);
            let compared = component_wise(operator, left, right, false, accepts)?;
            Ok(compared.with_element(Type::Boolean))
        }
        OperatorClass::Logical => match (left, right) {
            (Type::Boolean, Type::Boolean) => Ok(Type::Boolean),
            _ => Err(format!(
                "Operator \"{}\" requires boolean operands, found \"{}\" and \"{}\".",
                operator.token(),
                left,
                right
            )),
        },
        OperatorClass::Bitwise => {
            let logical = !matches!(operator, BinaryOperator::BitXor);
            let accepts = |ty: &Type| is_integer(ty) || (logical && *ty == Type::Boolean);
            component_wise(operator, left, right, false, accepts)
        }
        OperatorClass::Shift => {
            let (Some(left_element), Some(right_element)) = (left.element(), right.element())
            else {
                return Err(not_applicable(operator, left, right));
            };
            if !is_integer(left_element) || !left.shape_matches(right) {
                return Err(not_applicable(operator, left, right));
            }
            let unsigned = matches!(
                right_element.numeric_kind(),
                Some(NumericKind::Unsigned | NumericKind::AbstractInteger)
            );
            if !unsigned {
                return Err(format!(
                    "Right side of shift expression must be unsigned, found \"{}\".",
                    right
                ));
            }
            Ok(left.clone())
        }
    }
}

/// Result type of `operator operand`.
pub(crate) fn unary_result(operator: UnaryOperator, operand: &Type) -> Result<Type, String> {
    if operand.is_invalid() {
        return Ok(Type::Invalid);
    }
    let element = match operand {
        Type::Boolean | Type::Numeric(_) | Type::Vector(_) => operand.element(),
        Type::Matrix(_) if operator == UnaryOperator::Negate => operand.element(),
        _ => None,
    };
    let accepted = element.is_some_and(|element| match operator {
        UnaryOperator::Negate => {
            matches!(element.numeric_kind(), Some(kind) if kind.is_signed() || kind.is_abstract())
        }
        UnaryOperator::Not => *element == Type::Boolean,
        UnaryOperator::BitNot => is_integer(element),
    });
    if accepted {
        Ok(operand.clone())
    } else {
        Err(format!(
            "Operator \"{}\" can not be applied to \"{}\".",
            operator.token(),
            operand
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vector(count: usize, element: Type) -> Type {
        match Dimension::from_count(count) {
            Some(dimension) => Type::vector(dimension, element),
            None => panic!("bad dimension {}", count),
        }
    }

    fn matrix(columns: usize, rows: usize) -> Type {
        match (Dimension::from_count(columns), Dimension::from_count(rows)) {
            (Some(columns), Some(rows)) => Type::matrix(columns, rows, Type::float32()),
            _ => panic!("bad matrix {}x{}", columns, rows),
        }
    }

    #[test]
    fn test_vector_dimension_mismatch() {
        let error = binary_result(
            BinaryOperator::Add,
            &vector(2, Type::float32()),
            &vector(3, Type::float32()),
        )
        .unwrap_err();
        assert!(error.contains("must be the same type"), "{}", error);
        assert!(error.contains("Dimensions 2 and 3 don't match"), "{}", error);
    }

    #[test]
    fn test_matrix_dimension_mismatch() {
        let error = binary_result(BinaryOperator::Add, &matrix(2, 2), &matrix(3, 3)).unwrap_err();
        assert!(error.contains("Dimensions 22 and 33 don't match"), "{}", error);
    }

    #[test]
    fn test_matrix_products() {
        assert_eq!(
            binary_result(BinaryOperator::Multiply, &matrix(3, 3), &matrix(3, 3)),
            Ok(matrix(3, 3))
        );
        assert_eq!(
            binary_result(BinaryOperator::Multiply, &matrix(4, 2), &matrix(3, 4)),
            Ok(matrix(3, 2))
        );
        assert_eq!(
            binary_result(
                BinaryOperator::Multiply,
                &matrix(4, 3),
                &vector(4, Type::float32())
            ),
            Ok(vector(3, Type::float32()))
        );
        assert_eq!(
            binary_result(BinaryOperator::Multiply, &Type::abstract_float(), &matrix(2, 2)),
            Ok(matrix(2, 2))
        );
        assert!(binary_result(BinaryOperator::Divide, &matrix(2, 2), &matrix(2, 2)).is_err());
    }

    #[test]
    fn test_scalar_unification() {
        assert_eq!(
            binary_result(BinaryOperator::Add, &Type::float32(), &Type::abstract_integer()),
            Ok(Type::float32())
        );
        assert_eq!(
            binary_result(
                BinaryOperator::Multiply,
                &vector(3, Type::float32()),
                &Type::abstract_float()
            ),
            Ok(vector(3, Type::float32()))
        );
        let error =
            binary_result(BinaryOperator::Add, &Type::float32(), &Type::integer()).unwrap_err();
        assert!(error.contains("Types \"float32\" and \"integer\""), "{}", error);
    }

    #[test]
    fn test_comparison_produces_booleans() {
        assert_eq!(
            binary_result(BinaryOperator::Less, &Type::float32(), &Type::abstract_float()),
            Ok(Type::Boolean)
        );
        assert_eq!(
            binary_result(
                BinaryOperator::Equal,
                &vector(2, Type::integer()),
                &vector(2, Type::integer())
            ),
            Ok(vector(2, Type::Boolean))
        );
        assert!(binary_result(BinaryOperator::Less, &Type::Boolean, &Type::Boolean).is_err());
    }

    #[test]
    fn test_logical_and_bitwise() {
        assert_eq!(
            binary_result(BinaryOperator::And, &Type::Boolean, &Type::Boolean),
            Ok(Type::Boolean)
        );
        assert!(binary_result(BinaryOperator::Or, &Type::integer(), &Type::Boolean).is_err());
        assert_eq!(
            binary_result(BinaryOperator::BitAnd, &Type::Boolean, &Type::Boolean),
            Ok(Type::Boolean)
        );
        assert_eq!(
            binary_result(BinaryOperator::BitXor, &Type::unsigned(), &Type::abstract_integer()),
            Ok(Type::unsigned())
        );
        assert!(binary_result(BinaryOperator::BitOr, &Type::float32(), &Type::float32()).is_err());
    }

    #[test]
    fn test_shift_requires_unsigned_right_side() {
        assert_eq!(
            binary_result(BinaryOperator::ShiftLeft, &Type::integer(), &Type::unsigned()),
            Ok(Type::integer())
        );
        let error = binary_result(BinaryOperator::ShiftRight, &Type::integer(), &Type::integer())
            .unwrap_err();
        assert!(error.contains("must be unsigned"), "{}", error);
    }

    #[test]
    fn test_unary_operators() {
        assert_eq!(unary_result(UnaryOperator::Negate, &Type::float32()), Ok(Type::float32()));
        assert!(unary_result(UnaryOperator::Negate, &Type::unsigned()).is_err());
        assert_eq!(unary_result(UnaryOperator::Not, &Type::Boolean), Ok(Type::Boolean));
        assert!(unary_result(UnaryOperator::Not, &Type::integer()).is_err());
        assert_eq!(
            unary_result(UnaryOperator::BitNot, &vector(4, Type::unsigned())),
            Ok(vector(4, Type::unsigned()))
        );
    }

    #[test]
    fn test_invalid_operands_stay_quiet() {
        assert_eq!(
            binary_result(BinaryOperator::Add, &Type::Invalid, &Type::Boolean),
            Ok(Type::Invalid)
        );
        assert_eq!(unary_result(UnaryOperator::Not, &Type::Invalid), Ok(Type::Invalid));
    }
}
