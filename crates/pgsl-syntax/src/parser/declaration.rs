//! Module-scope declaration parser.

use alloc::{string::ToString, vec::Vec};

use nom::{
    branch::alt,
    combinator::{cut, map, opt},
    error::{Error, ErrorKind},
    multi::separated_list0,
    sequence::{delimited, preceded, terminated},
    IResult,
};

use super::{
    primitives::{identifier, number, string_literal, word},
    whitespace::{blank, keyword, symbol},
    Source,
};
use crate::cst::{
    AliasDeclaration, Attribute, Declaration, EnumDeclaration, EnumLiteral, EnumValue,
    FunctionDeclaration, GlobalKeyword, LiteralExpression, ParameterDeclaration,
    StructDeclaration, StructProperty, VariableDeclaration,
};

impl<'a> Source<'a> {
    pub(crate) fn declaration(&self, input: &'a str) -> IResult<&'a str, Declaration> {
        let (input, _) = blank(input)?;
        let start = input;
        let (input, attributes) = self.attributes(input)?;
        let (input, _) = blank(input)?;
        let (input, declaration) = alt((
            |i: &'a str| self.function_declaration(i),
            |i: &'a str| self.struct_declaration(i),
            |i: &'a str| self.enum_declaration(i),
            |i: &'a str| self.alias_declaration(i),
            |i: &'a str| self.variable_declaration(i),
        ))(input)?;
        Ok((input, self.attach(start, input, attributes, declaration)))
    }

    /// Store leading attributes on the declaration and widen its range over them.
    fn attach(
        &self,
        start: &'a str,
        end: &'a str,
        attributes: Vec<Attribute>,
        declaration: Declaration,
    ) -> Declaration {
        let range = self.range(start, end);
        match declaration {
            Declaration::Variable(mut declaration) => {
                declaration.attributes = attributes;
                declaration.range = range;
                Declaration::Variable(declaration)
            }
            Declaration::Function(mut declaration) => {
                declaration.attributes = attributes;
                declaration.range = range;
                Declaration::Function(declaration)
            }
            Declaration::Struct(mut declaration) => {
                declaration.attributes = attributes;
                declaration.range = range;
                Declaration::Struct(declaration)
            }
            other => other,
        }
    }

    /// `const|private|workgroup|uniform|storage|handle name: Type (= value)?;`
    fn variable_declaration(&self, input: &'a str) -> IResult<&'a str, Declaration> {
        let start = input;
        let (input, name) = preceded(blank, word)(input)?;
        let keyword = match GlobalKeyword::from_name(name) {
            Some(keyword) => keyword,
            None => return Err(nom::Err::Error(Error::new(start, ErrorKind::Tag))),
        };
        let (input, name) = cut(identifier)(input)?;
        let (input, _) = cut(symbol(":"))(input)?;
        let (input, ty) = cut(|i: &'a str| self.type_declaration(i))(input)?;
        let (input, initializer) = opt(preceded(
            symbol("="),
            cut(|i: &'a str| self.expression(i)),
        ))(input)?;
        let (input, _) = cut(symbol(";"))(input)?;
        Ok((
            input,
            Declaration::Variable(VariableDeclaration {
                attributes: Vec::new(),
                keyword,
                name: name.to_string(),
                ty,
                initializer,
                range: self.range(start, input),
            }),
        ))
    }

    /// `function name(parameters): ReturnType { body }`
    fn function_declaration(&self, input: &'a str) -> IResult<&'a str, Declaration> {
        let start = input;
        let (input, _) = keyword("function")(input)?;
        let (input, name) = cut(identifier)(input)?;
        let (input, parameters) = cut(delimited(
            symbol("("),
            separated_list0(symbol(","), |i: &'a str| self.parameter(i)),
            symbol(")"),
        ))(input)?;
        let (input, return_type) = opt(preceded(
            symbol(":"),
            cut(|i: &'a str| self.type_declaration(i)),
        ))(input)?;
        let (input, body) = cut(|i: &'a str| self.block(i))(input)?;
        Ok((
            input,
            Declaration::Function(FunctionDeclaration {
                attributes: Vec::new(),
                name: name.to_string(),
                parameters,
                return_type,
                body,
                range: self.range(start, input),
            }),
        ))
    }

    fn parameter(&self, input: &'a str) -> IResult<&'a str, ParameterDeclaration> {
        let (input, _) = blank(input)?;
        let start = input;
        let (input, attributes) = self.attributes(input)?;
        let (input, name) = identifier(input)?;
        let (input, _) = cut(symbol(":"))(input)?;
        let (input, ty) = cut(|i: &'a str| self.type_declaration(i))(input)?;
        Ok((
            input,
            ParameterDeclaration {
                attributes,
                name: name.to_string(),
                ty,
                range: self.range(start, input),
            },
        ))
    }

    /// `struct Name { property: Type, ... }` with an optional trailing comma.
    fn struct_declaration(&self, input: &'a str) -> IResult<&'a str, Declaration> {
        let start = input;
        let (input, _) = keyword("struct")(input)?;
        let (input, name) = cut(identifier)(input)?;
        let (input, properties) = cut(delimited(
            symbol("{"),
            terminated(
                separated_list0(symbol(","), |i: &'a str| self.struct_property(i)),
                opt(symbol(",")),
            ),
            symbol("}"),
        ))(input)?;
        let (input, _) = opt(symbol(";"))(input)?;
        Ok((
            input,
            Declaration::Struct(StructDeclaration {
                attributes: Vec::new(),
                name: name.to_string(),
                properties,
                range: self.range(start, input),
            }),
        ))
    }

    fn struct_property(&self, input: &'a str) -> IResult<&'a str, StructProperty> {
        let (input, _) = blank(input)?;
        let start = input;
        let (input, attributes) = self.attributes(input)?;
        let (input, name) = identifier(input)?;
        let (input, _) = cut(symbol(":"))(input)?;
        let (input, ty) = cut(|i: &'a str| self.type_declaration(i))(input)?;
        Ok((
            input,
            StructProperty {
                attributes,
                name: name.to_string(),
                ty,
                range: self.range(start, input),
            },
        ))
    }

    /// `enum Name { A = 1, B = "text" }`
    fn enum_declaration(&self, input: &'a str) -> IResult<&'a str, Declaration> {
        let start = input;
        let (input, _) = keyword("enum")(input)?;
        let (input, name) = cut(identifier)(input)?;
        let (input, values) = cut(delimited(
            symbol("{"),
            terminated(
                separated_list0(symbol(","), |i: &'a str| self.enum_value(i)),
                opt(symbol(",")),
            ),
            symbol("}"),
        ))(input)?;
        let (input, _) = opt(symbol(";"))(input)?;
        Ok((
            input,
            Declaration::Enum(EnumDeclaration {
                name: name.to_string(),
                values,
                range: self.range(start, input),
            }),
        ))
    }

    fn enum_value(&self, input: &'a str) -> IResult<&'a str, EnumValue> {
        let (input, _) = blank(input)?;
        let start = input;
        let (input, name) = identifier(input)?;
        let (input, _) = cut(symbol("="))(input)?;
        let (input, _) = blank(input)?;
        let literal_start = input;
        let (input, value) = cut(alt((
            map(string_literal, EnumLiteral::String),
            map(number, |(kind, text)| {
                EnumLiteral::Number(LiteralExpression {
                    kind,
                    text: text.to_string(),
                    range: Default::default(),
                })
            }),
        )))(input)?;
        let value = match value {
            EnumLiteral::Number(mut literal) => {
                literal.range = self.range(literal_start, input);
                EnumLiteral::Number(literal)
            }
            other => other,
        };
        Ok((
            input,
            EnumValue {
                name: name.to_string(),
                value,
                range: self.range(start, input),
            },
        ))
    }

    /// `alias Name = Type;`
    fn alias_declaration(&self, input: &'a str) -> IResult<&'a str, Declaration> {
        let start = input;
        let (input, _) = keyword("alias")(input)?;
        let (input, name) = cut(identifier)(input)?;
        let (input, _) = cut(symbol("="))(input)?;
        let (input, ty) = cut(|i: &'a str| self.type_declaration(i))(input)?;
        let (input, _) = cut(symbol(";"))(input)?;
        Ok((
            input,
            Declaration::Alias(AliasDeclaration {
                name: name.to_string(),
                ty,
                range: self.range(start, input),
            }),
        ))
    }
}
