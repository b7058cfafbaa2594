//! Primitive parsers for identifiers, keywords and literals.

use alloc::string::{String, ToString};

use nom::{
    branch::alt,
    bytes::complete::{tag_no_case, take_while, take_while1},
    character::complete::{char, digit1, one_of, satisfy},
    combinator::{not, opt, recognize, verify},
    error::{Error, ErrorKind},
    sequence::{delimited, pair, preceded, terminated, tuple},
    IResult,
};

use super::whitespace::blank;
use crate::cst::{LiteralKind, NumberSuffix};

const KEYWORDS: &[&str] = &[
    "alias", "break", "case", "const", "continue", "default", "discard", "do", "else", "enum",
    "false", "for", "function", "handle", "if", "let", "new", "private", "return", "storage",
    "struct", "switch", "true", "uniform", "var", "while", "workgroup",
];

pub(crate) fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

pub(crate) fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(&word)
}

/// A bare word, reserved keywords included.
pub(crate) fn word(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        satisfy(|c| c.is_ascii_alphabetic() || c == '_'),
        take_while(is_identifier_char),
    ))(input)
}

/// Identifier that is not a reserved keyword. Skips leading blank space.
pub(crate) fn identifier(input: &str) -> IResult<&str, &str> {
    preceded(blank, verify(word, |word: &str| !is_keyword(word)))(input)
}

/// Double quoted string without escapes.
pub(crate) fn string_literal(input: &str) -> IResult<&str, String> {
    let (input, text) = preceded(
        blank,
        delimited(char('"'), take_while(|c| c != '"' && c != '\n'), char('"')),
    )(input)?;
    Ok((input, text.to_string()))
}

/// Number literal with an optional `i`, `u`, `f` or `h` suffix.
///
/// Returns the decoded literal and its exact source text.
pub(crate) fn number(input: &str) -> IResult<&str, (LiteralKind, &str)> {
    let (rest, text) = terminated(
        alt((
            recognize(tuple((
                tag_no_case("0x"),
                take_while1(|c: char| c.is_ascii_hexdigit()),
                opt(one_of("iu")),
            ))),
            recognize(tuple((
                digit1,
                opt(pair(char('.'), digit1)),
                opt(tuple((one_of("eE"), opt(one_of("+-")), digit1))),
                opt(one_of("iufh")),
            ))),
        )),
        not(satisfy(is_identifier_char)),
    )(input)?;

    match decode_number(text) {
        Some(kind) => Ok((rest, (kind, text))),
        None => Err(nom::Err::Error(Error::new(input, ErrorKind::Digit))),
    }
}

fn decode_number(text: &str) -> Option<LiteralKind> {
    let (body, suffix) = match text.chars().last().and_then(NumberSuffix::from_char) {
        Some(suffix) if !is_hex(text) || matches!(suffix, NumberSuffix::Integer | NumberSuffix::Unsigned) => {
            (&text[..text.len() - 1], Some(suffix))
        }
        _ => (text, None),
    };

    if is_hex(body) {
        let value = i64::from_str_radix(&body[2..], 16).ok()?;
        return Some(LiteralKind::Integer(value, suffix));
    }

    let is_float = body.contains(['.', 'e', 'E']);
    match suffix {
        Some(NumberSuffix::Integer) | Some(NumberSuffix::Unsigned) if is_float => None,
        Some(NumberSuffix::Float32) | Some(NumberSuffix::Float16) => {
            Some(LiteralKind::Float(body.parse::<f64>().ok()?, suffix))
        }
        _ if is_float => Some(LiteralKind::Float(body.parse::<f64>().ok()?, suffix)),
        _ => Some(LiteralKind::Integer(body.parse::<i64>().ok()?, suffix)),
    }
}

fn is_hex(text: &str) -> bool {
    text.starts_with("0x") || text.starts_with("0X")
}
