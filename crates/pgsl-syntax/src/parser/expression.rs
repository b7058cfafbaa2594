//! Expression parser, one method per precedence level.

use alloc::{boxed::Box, string::ToString, vec::Vec};

use nom::{
    branch::alt,
    combinator::cut,
    error::{Error, ErrorKind},
    multi::{separated_list0, separated_list1},
    sequence::delimited,
    IResult,
};

use super::{
    primitives::{identifier, number},
    whitespace::{blank, keyword, symbol},
    Source,
};
use crate::cst::{
    BinaryExpression, BinaryOperator, CallExpression, Expression, IdentifierExpression,
    IndexExpression, LiteralExpression, LiteralKind, MemberExpression, NewExpression,
    ParenthesizedExpression, PointerExpression, TypeDeclaration, UnaryExpression, UnaryOperator,
};

/// Operator token, the operator it produces, and characters that must not
/// follow the token (so `+` does not eat `+=`).
type OperatorTable = [(&'static str, BinaryOperator, &'static str)];

const LOGICAL_OR: &OperatorTable = &[("||", BinaryOperator::Or, "")];
const LOGICAL_AND: &OperatorTable = &[("&&", BinaryOperator::And, "")];
const BIT_OR: &OperatorTable = &[("|", BinaryOperator::BitOr, "|=")];
const BIT_XOR: &OperatorTable = &[("^", BinaryOperator::BitXor, "=")];
const BIT_AND: &OperatorTable = &[("&", BinaryOperator::BitAnd, "&=")];
const EQUALITY: &OperatorTable = &[
    ("==", BinaryOperator::Equal, ""),
    ("!=", BinaryOperator::NotEqual, ""),
];
const RELATIONAL: &OperatorTable = &[
    ("<=", BinaryOperator::LessEqual, ""),
    (">=", BinaryOperator::GreaterEqual, ""),
    ("<", BinaryOperator::Less, "<="),
    (">", BinaryOperator::Greater, ">="),
];
const SHIFT: &OperatorTable = &[
    ("<<", BinaryOperator::ShiftLeft, "="),
    (">>", BinaryOperator::ShiftRight, "="),
];
const ADDITIVE: &OperatorTable = &[
    ("+", BinaryOperator::Add, "+="),
    ("-", BinaryOperator::Subtract, "-="),
];
const MULTIPLICATIVE: &OperatorTable = &[
    ("*", BinaryOperator::Multiply, "="),
    ("/", BinaryOperator::Divide, "="),
    ("%", BinaryOperator::Remainder, "="),
];

type Level<'a> = fn(&Source<'a>, &'a str) -> IResult<&'a str, Expression>;

fn binary_operator<'a>(input: &'a str, table: &OperatorTable) -> IResult<&'a str, BinaryOperator> {
    let (input, _) = blank(input)?;
    for (token, operator, forbidden) in table {
        if let Some(rest) = input.strip_prefix(token) {
            let blocked = rest.chars().next().is_some_and(|c| forbidden.contains(c));
            if !blocked {
                return Ok((rest, *operator));
            }
        }
    }
    Err(nom::Err::Error(Error::new(input, ErrorKind::Tag)))
}

impl<'a> Source<'a> {
    pub(crate) fn expression(&self, input: &'a str) -> IResult<&'a str, Expression> {
        self.logical_or(input)
    }

    /// Left-associative fold of `next (operator next)*`.
    fn binary_level(
        &self,
        input: &'a str,
        table: &OperatorTable,
        next: Level<'a>,
    ) -> IResult<&'a str, Expression> {
        let (mut input, mut left) = next(self, input)?;
        loop {
            match binary_operator(input, table) {
                Ok((rest, operator)) => {
                    let (rest, right) = next(self, rest)?;
                    let range = left.range().join(right.range());
                    left = Expression::Binary(BinaryExpression {
                        left: Box::new(left),
                        operator,
                        right: Box::new(right),
                        range,
                    });
                    input = rest;
                }
                Err(nom::Err::Error(_)) => return Ok((input, left)),
                Err(e) => return Err(e),
            }
        }
    }

    fn logical_or(&self, input: &'a str) -> IResult<&'a str, Expression> {
        self.binary_level(input, LOGICAL_OR, Self::logical_and)
    }

    fn logical_and(&self, input: &'a str) -> IResult<&'a str, Expression> {
        self.binary_level(input, LOGICAL_AND, Self::bit_or)
    }

    fn bit_or(&self, input: &'a str) -> IResult<&'a str, Expression> {
        self.binary_level(input, BIT_OR, Self::bit_xor)
    }

    fn bit_xor(&self, input: &'a str) -> IResult<&'a str, Expression> {
        self.binary_level(input, BIT_XOR, Self::bit_and)
    }

    fn bit_and(&self, input: &'a str) -> IResult<&'a str, Expression> {
        self.binary_level(input, BIT_AND, Self::equality)
    }

    fn equality(&self, input: &'a str) -> IResult<&'a str, Expression> {
        self.binary_level(input, EQUALITY, Self::relational)
    }

    fn relational(&self, input: &'a str) -> IResult<&'a str, Expression> {
        self.binary_level(input, RELATIONAL, Self::shift)
    }

    fn shift(&self, input: &'a str) -> IResult<&'a str, Expression> {
        self.binary_level(input, SHIFT, Self::additive)
    }

    fn additive(&self, input: &'a str) -> IResult<&'a str, Expression> {
        self.binary_level(input, ADDITIVE, Self::multiplicative)
    }

    fn multiplicative(&self, input: &'a str) -> IResult<&'a str, Expression> {
        self.binary_level(input, MULTIPLICATIVE, Self::unary)
    }

    /// Prefix operators: `-x`, `!x`, `~x`, `*pointer`, `&value`.
    pub(crate) fn unary(&self, input: &'a str) -> IResult<&'a str, Expression> {
        let (input, _) = blank(input)?;
        let start = input;
        let prefix = input.chars().next();
        let operator = match prefix {
            Some('-') => Some(UnaryOperator::Negate),
            Some('!') => Some(UnaryOperator::Not),
            Some('~') => Some(UnaryOperator::BitNot),
            _ => None,
        };

        if let Some(operator) = operator {
            let (input, operand) = self.unary(&input[1..])?;
            return Ok((
                input,
                Expression::Unary(UnaryExpression {
                    operator,
                    operand: Box::new(operand),
                    range: self.range(start, input),
                }),
            ));
        }

        if matches!(prefix, Some('*') | Some('&')) {
            let (input, operand) = self.unary(&input[1..])?;
            let pointer = PointerExpression {
                operand: Box::new(operand),
                range: self.range(start, input),
            };
            let expression = if prefix == Some('*') {
                Expression::Dereference(pointer)
            } else {
                Expression::AddressOf(pointer)
            };
            return Ok((input, expression));
        }

        self.postfix(input)
    }

    /// Member and index access chains: `lights[2].color.xyz`.
    fn postfix(&self, input: &'a str) -> IResult<&'a str, Expression> {
        let (mut input, mut expression) = self.primary(input)?;
        loop {
            if let Ok((rest, _)) = symbol(".")(input) {
                let (rest, property) = cut(identifier)(rest)?;
                let range = expression.range().join(self.range(rest, rest));
                expression = Expression::Member(MemberExpression {
                    base: Box::new(expression),
                    property: property.to_string(),
                    range,
                });
                input = rest;
            } else if let Ok((rest, _)) = symbol("[")(input) {
                let (rest, index) = cut(|i: &'a str| self.expression(i))(rest)?;
                let (rest, _) = cut(symbol("]"))(rest)?;
                let range = expression.range().join(self.range(rest, rest));
                expression = Expression::Index(IndexExpression {
                    base: Box::new(expression),
                    index: Box::new(index),
                    range,
                });
                input = rest;
            } else {
                return Ok((input, expression));
            }
        }
    }

    fn primary(&self, input: &'a str) -> IResult<&'a str, Expression> {
        let (input, _) = blank(input)?;
        alt((
            |i: &'a str| self.literal(i),
            |i: &'a str| self.new_expression(i),
            |i: &'a str| self.parenthesized(i),
            |i: &'a str| self.generic_call(i),
            |i: &'a str| self.call(i),
            |i: &'a str| self.identifier_expression(i),
        ))(input)
    }

    fn literal(&self, input: &'a str) -> IResult<&'a str, Expression> {
        let start = input;
        let (input, (kind, text)) = alt((
            |i: &'a str| keyword("true")(i).map(|(i, text)| (i, (LiteralKind::Boolean(true), text))),
            |i: &'a str| keyword("false")(i).map(|(i, text)| (i, (LiteralKind::Boolean(false), text))),
            number,
        ))(input)?;
        Ok((
            input,
            Expression::Literal(LiteralExpression {
                kind,
                text: text.to_string(),
                range: self.range(start, input),
            }),
        ))
    }

    /// `new Vector3(1.0, 2.0, 3.0)` or `new Array<float, 2>(a, b)`.
    fn new_expression(&self, input: &'a str) -> IResult<&'a str, Expression> {
        let start = input;
        let (input, _) = keyword("new")(input)?;
        let (input, ty) = cut(|i: &'a str| self.type_declaration(i))(input)?;
        let (input, arguments) = cut(|i: &'a str| self.arguments(i))(input)?;
        Ok((
            input,
            Expression::New(NewExpression {
                ty,
                arguments,
                range: self.range(start, input),
            }),
        ))
    }

    fn parenthesized(&self, input: &'a str) -> IResult<&'a str, Expression> {
        let start = input;
        let (input, inner) = delimited(
            symbol("("),
            |i: &'a str| self.expression(i),
            cut(symbol(")")),
        )(input)?;
        Ok((
            input,
            Expression::Parenthesized(ParenthesizedExpression {
                inner: Box::new(inner),
                range: self.range(start, input),
            }),
        ))
    }

    /// `bitcast<float>(value)`
    fn generic_call(&self, input: &'a str) -> IResult<&'a str, Expression> {
        let start = input;
        let (input, name) = identifier(input)?;
        let (input, generics) = delimited(
            symbol("<"),
            separated_list1(symbol(","), |i: &'a str| self.type_declaration(i)),
            symbol(">"),
        )(input)?;
        let (input, arguments) = self.arguments(input)?;
        Ok((input, self.call_expression(start, input, name, generics, arguments)))
    }

    fn call(&self, input: &'a str) -> IResult<&'a str, Expression> {
        let start = input;
        let (input, name) = identifier(input)?;
        let (input, arguments) = self.arguments(input)?;
        Ok((input, self.call_expression(start, input, name, Vec::new(), arguments)))
    }

    fn call_expression(
        &self,
        start: &'a str,
        end: &'a str,
        name: &str,
        generics: Vec<TypeDeclaration>,
        arguments: Vec<Expression>,
    ) -> Expression {
        Expression::Call(CallExpression {
            name: name.to_string(),
            generics,
            arguments,
            range: self.range(start, end),
        })
    }

    fn arguments(&self, input: &'a str) -> IResult<&'a str, Vec<Expression>> {
        delimited(
            symbol("("),
            separated_list0(symbol(","), |i: &'a str| self.expression(i)),
            cut(symbol(")")),
        )(input)
    }

    fn identifier_expression(&self, input: &'a str) -> IResult<&'a str, Expression> {
        let start = input;
        let (input, name) = identifier(input)?;
        Ok((
            input,
            Expression::Identifier(IdentifierExpression {
                name: name.to_string(),
                range: self.range(start, input),
            }),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SourceRange;

    fn parse(source: &str) -> Expression {
        let (rest, expression) = Source::new(source).expression(source).unwrap();
        assert_eq!(rest.trim(), "", "unparsed input");
        expression
    }

    #[test]
    fn test_precedence() {
        match parse("a + b * c") {
            Expression::Binary(add) => {
                assert_eq!(add.operator, BinaryOperator::Add);
                assert!(matches!(
                    *add.right,
                    Expression::Binary(BinaryExpression {
                        operator: BinaryOperator::Multiply,
                        ..
                    })
                ));
            }
            other => panic!("expected binary, got {:?}", other),
        }
    }

    #[test]
    fn test_left_associative() {
        match parse("a - b - c") {
            Expression::Binary(outer) => {
                assert!(matches!(*outer.left, Expression::Binary(_)));
                assert!(matches!(*outer.right, Expression::Identifier(_)));
            }
            other => panic!("expected binary, got {:?}", other),
        }
    }

    #[test]
    fn test_binary_range() {
        let expression = parse("  matrixOne * matrixTwo ");
        assert_eq!(expression.range(), SourceRange::new(2, 23));
    }

    #[test]
    fn test_comparison_and_logic() {
        match parse("a < b && c >= d") {
            Expression::Binary(and) => {
                assert_eq!(and.operator, BinaryOperator::And);
                assert!(matches!(
                    *and.left,
                    Expression::Binary(BinaryExpression {
                        operator: BinaryOperator::Less,
                        ..
                    })
                ));
            }
            other => panic!("expected binary, got {:?}", other),
        }
    }

    #[test]
    fn test_shift_is_not_relational() {
        assert!(matches!(
            parse("a << 2u"),
            Expression::Binary(BinaryExpression {
                operator: BinaryOperator::ShiftLeft,
                ..
            })
        ));
    }

    #[test]
    fn test_new_expression() {
        match parse("new Vector3(1.0, 2.0, 3.0)") {
            Expression::New(new) => {
                assert_eq!(new.ty.name, "Vector3");
                assert!(new.ty.arguments.is_empty());
                assert_eq!(new.arguments.len(), 3);
            }
            other => panic!("expected new, got {:?}", other),
        }
    }

    #[test]
    fn test_generic_call() {
        match parse("bitcast<float>(bits)") {
            Expression::Call(call) => {
                assert_eq!(call.name, "bitcast");
                assert_eq!(call.generics.len(), 1);
                assert_eq!(call.arguments.len(), 1);
            }
            other => panic!("expected call, got {:?}", other),
        }
    }

    #[test]
    fn test_postfix_chain() {
        match parse("lights[2].color.xyz") {
            Expression::Member(swizzle) => {
                assert_eq!(swizzle.property, "xyz");
                assert!(matches!(*swizzle.base, Expression::Member(_)));
            }
            other => panic!("expected member, got {:?}", other),
        }
    }

    #[test]
    fn test_unary_and_pointers() {
        assert!(matches!(parse("-x"), Expression::Unary(_)));
        assert!(matches!(parse("*ptr"), Expression::Dereference(_)));
        assert!(matches!(parse("&value"), Expression::AddressOf(_)));
        assert!(matches!(parse("!(a == b)"), Expression::Unary(_)));
    }

    #[test]
    fn test_literal_text_is_kept() {
        match parse("5.0") {
            Expression::Literal(literal) => assert_eq!(literal.text, "5.0"),
            other => panic!("expected literal, got {:?}", other),
        }
    }
}
