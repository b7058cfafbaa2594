//! Type declarations and attribute lists.

use alloc::{string::ToString, vec::Vec};

use nom::{
    branch::alt,
    combinator::{cut, map, opt},
    multi::{many0, separated_list0, separated_list1},
    sequence::{delimited, preceded, terminated},
    IResult,
};

use super::{
    primitives::{identifier, string_literal},
    whitespace::{blank, symbol},
    Source,
};
use crate::{
    cst::{Attribute, AttributeParameter, TypeArgument, TypeDeclaration},
    SourceRange,
};

impl<'a> Source<'a> {
    /// `Name` or `Name<Argument, ...>`
    pub(crate) fn type_declaration(&self, input: &'a str) -> IResult<&'a str, TypeDeclaration> {
        let (input, _) = blank(input)?;
        let start = input;
        let (input, name) = identifier(input)?;
        let (input, arguments) = opt(delimited(
            symbol("<"),
            separated_list1(symbol(","), |i: &'a str| self.type_argument(i)),
            cut(symbol(">")),
        ))(input)?;
        Ok((
            input,
            TypeDeclaration {
                name: name.to_string(),
                arguments: arguments.unwrap_or_default(),
                range: self.range(start, input),
            },
        ))
    }

    /// A type argument is a type when it is followed by `,` or `>`, and an
    /// expression (array length, enum value) otherwise.
    fn type_argument(&self, input: &'a str) -> IResult<&'a str, TypeArgument> {
        alt((
            map(
                terminated(
                    |i: &'a str| self.type_declaration(i),
                    nom::combinator::peek(alt((symbol(","), symbol(">")))),
                ),
                TypeArgument::Type,
            ),
            map(|i: &'a str| self.unary(i), TypeArgument::Expression),
        ))(input)
    }

    /// Zero or more `#[Name(parameters)]` attributes.
    pub(crate) fn attributes(&self, input: &'a str) -> IResult<&'a str, Vec<Attribute>> {
        many0(|i: &'a str| self.attribute(i))(input)
    }

    fn attribute(&self, input: &'a str) -> IResult<&'a str, Attribute> {
        let (input, _) = blank(input)?;
        let start = input;
        let (input, _) = symbol("#[")(input)?;
        let (input, name) = cut(identifier)(input)?;
        let (input, parameters) = opt(delimited(
            symbol("("),
            separated_list0(symbol(","), |i: &'a str| self.attribute_parameter(i)),
            cut(symbol(")")),
        ))(input)?;
        let (input, _) = cut(symbol("]"))(input)?;
        Ok((
            input,
            Attribute {
                name: name.to_string(),
                parameters: parameters.unwrap_or_default(),
                range: self.range(start, input),
            },
        ))
    }

    fn attribute_parameter(&self, input: &'a str) -> IResult<&'a str, AttributeParameter> {
        let (input, _) = blank(input)?;
        let start = input;
        alt((
            |i: &'a str| {
                let (i, text) = string_literal(i)?;
                let range: SourceRange = self.range(start, i);
                Ok((i, AttributeParameter::String(text, range)))
            },
            map(
                preceded(blank, |i: &'a str| self.expression(i)),
                AttributeParameter::Expression,
            ),
        ))(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cst::Expression;

    #[test]
    fn test_type_declaration_plain() {
        let source = "float32;";
        let (rest, ty) = Source::new(source).type_declaration(source).unwrap();
        assert_eq!(rest, ";");
        assert_eq!(ty.name, "float32");
        assert!(ty.arguments.is_empty());
        assert_eq!(ty.range, SourceRange::new(0, 7));
    }

    #[test]
    fn test_type_declaration_nested() {
        let source = "Array<Vector3<float>, 4>";
        let (rest, ty) = Source::new(source).type_declaration(source).unwrap();
        assert_eq!(rest, "");
        assert_eq!(ty.name, "Array");
        assert_eq!(ty.arguments.len(), 2);
        match &ty.arguments[0] {
            TypeArgument::Type(inner) => {
                assert_eq!(inner.name, "Vector3");
                assert_eq!(inner.arguments.len(), 1);
            }
            other => panic!("expected type argument, got {:?}", other),
        }
        assert!(matches!(
            ty.arguments[1],
            TypeArgument::Expression(Expression::Literal(_))
        ));
    }

    #[test]
    fn test_type_declaration_enum_arguments() {
        let source = "TextureStorage2d<TexelFormat.Rgba8unorm, AccessMode.Write>";
        let (_, ty) = Source::new(source).type_declaration(source).unwrap();
        assert_eq!(ty.arguments.len(), 2);
        assert!(matches!(
            ty.arguments[0],
            TypeArgument::Expression(Expression::Member(_))
        ));
    }

    #[test]
    fn test_attributes() {
        let source = r#"#[GroupBinding("objects", "light")] #[AccessMode(AccessMode.ReadWrite)] storage"#;
        let (rest, attributes) = Source::new(source).attributes(source).unwrap();
        assert_eq!(rest, " storage");
        assert_eq!(attributes.len(), 2);
        assert_eq!(attributes[0].name, "GroupBinding");
        assert!(matches!(
            &attributes[0].parameters[0],
            AttributeParameter::String(text, _) if text == "objects"
        ));
        assert!(matches!(
            attributes[1].parameters[0],
            AttributeParameter::Expression(Expression::Member(_))
        ));
    }

    #[test]
    fn test_attribute_without_parameters() {
        let source = "#[Vertex] function";
        let (_, attributes) = Source::new(source).attributes(source).unwrap();
        assert_eq!(attributes[0].name, "Vertex");
        assert!(attributes[0].parameters.is_empty());
    }
}
