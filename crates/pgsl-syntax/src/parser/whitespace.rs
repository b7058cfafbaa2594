//! Whitespace, comments and token helpers.

use nom::{
    branch::alt,
    bytes::complete::{tag, take_until, take_while},
    character::complete::{multispace1, satisfy},
    combinator::{map, not, recognize},
    multi::many0,
    sequence::{pair, preceded, terminated, tuple},
    IResult,
};

use super::primitives::is_identifier_char;

/// Whitespace, `// line` and `/* block */` comments.
pub(crate) fn blank_space(input: &str) -> IResult<&str, &str> {
    recognize(many0(alt((
        map(multispace1, |_| ()),
        map(pair(tag("//"), take_while(|c| c != '\n')), |_| ()),
        map(tuple((tag("/*"), take_until("*/"), tag("*/"))), |_| ()),
    ))))(input)
}

pub(crate) fn blank(input: &str) -> IResult<&str, ()> {
    map(blank_space, |_| ())(input)
}

/// Punctuation token preceded by optional blank space.
pub(crate) fn symbol<'a>(token: &'static str) -> impl FnMut(&'a str) -> IResult<&'a str, &'a str> {
    preceded(blank, tag(token))
}

/// Keyword that is not the prefix of a longer identifier.
pub(crate) fn keyword<'a>(word: &'static str) -> impl FnMut(&'a str) -> IResult<&'a str, &'a str> {
    preceded(
        blank,
        terminated(tag(word), not(satisfy(is_identifier_char))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_space() {
        assert_eq!(blank_space("   "), Ok(("", "   ")));
        assert_eq!(blank_space("\n\t  x"), Ok(("x", "\n\t  ")));
        assert_eq!(blank_space(""), Ok(("", "")));
    }

    #[test]
    fn test_blank_skips_comments() {
        assert_eq!(blank("// note\n  a"), Ok(("a", ())));
        assert_eq!(blank("/* a\n b */ c"), Ok(("c", ())));
        assert_eq!(blank(" // one\n/* two */ // three\nd"), Ok(("d", ())));
    }

    #[test]
    fn test_keyword_boundary() {
        assert!(keyword("let")(" let x").is_ok());
        assert!(keyword("let")("letter").is_err());
    }
}
