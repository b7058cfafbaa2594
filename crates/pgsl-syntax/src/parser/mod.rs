//! Source parser producing the CST.
//!
//! Leaf parsers (`whitespace`, `primitives`) are plain `nom` functions. Node
//! parsers are methods on [`Source`] so they can turn the remaining input
//! into absolute byte ranges. Every node parser skips its own leading blank
//! space, which keeps node ranges free of surrounding whitespace.

mod declaration;
mod error;
mod expression;
mod primitives;
mod statement;
mod types;
mod whitespace;

use alloc::format;

use error::parse_error;
pub use error::{ParseError, ParseResult};
use nom::{multi::many0, IResult};
use whitespace::blank;

use crate::{cst::Document, SourceRange};

/// Parse a complete document from preprocessed source text.
pub fn parse_document(input: &str) -> ParseResult<Document> {
    let source = Source::new(input);
    match source.document(input) {
        Ok((remaining, document)) => {
            if remaining.trim().is_empty() {
                Ok(document)
            } else {
                let remaining = remaining.trim_start();
                Err(parse_error(
                    input,
                    remaining,
                    &format!("Unexpected input \"{}\"", snippet(remaining)),
                ))
            }
        }
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
            let remaining = e.input.trim_start();
            Err(parse_error(
                input,
                remaining,
                &format!("Unexpected input \"{}\"", snippet(remaining)),
            ))
        }
        Err(nom::Err::Incomplete(_)) => Err(parse_error(input, "", "Unexpected end of input")),
    }
}

fn snippet(remaining: &str) -> &str {
    let line = remaining.lines().next().unwrap_or("");
    match line.char_indices().nth(24) {
        Some((index, _)) => &line[..index],
        None => line,
    }
}

/// The text being parsed, used to compute absolute node ranges.
#[derive(Clone, Copy)]
pub(crate) struct Source<'a> {
    text: &'a str,
}

impl<'a> Source<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self { text }
    }

    pub(crate) fn offset(&self, input: &'a str) -> usize {
        self.text.len() - input.len()
    }

    /// Range from the start of `start` to the start of `end`.
    pub(crate) fn range(&self, start: &'a str, end: &'a str) -> SourceRange {
        SourceRange::new(self.offset(start), self.offset(end))
    }

    fn document(&self, input: &'a str) -> IResult<&'a str, Document> {
        let (input, _) = blank(input)?;
        let start = input;
        let (input, declarations) = many0(|i: &'a str| self.declaration(i))(input)?;
        let range = self.range(start, input);
        let (input, _) = blank(input)?;
        Ok((
            input,
            Document {
                declarations,
                range,
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cst::Declaration;

    #[test]
    fn test_parse_document_empty() {
        let document = parse_document("  // nothing here\n").unwrap();
        assert!(document.declarations.is_empty());
    }

    #[test]
    fn test_parse_document_declarations() {
        let document = parse_document(
            r#"
            const a: float = 5.0;
            struct Light { color: Vector3<float>, power: float }
            function main(): float { return a; }
            "#,
        )
        .unwrap();
        assert_eq!(document.declarations.len(), 3);
        assert!(matches!(document.declarations[0], Declaration::Variable(_)));
        assert!(matches!(document.declarations[1], Declaration::Struct(_)));
        assert!(matches!(document.declarations[2], Declaration::Function(_)));
    }

    #[test]
    fn test_parse_error_position() {
        let source = "const a: float = 5.0;\nfunction main() { let x: float = ; }";
        let error = parse_document(source).unwrap_err();
        assert_eq!(error.position, source.find("; }").unwrap());
    }

    #[test]
    fn test_parse_error_trailing_input() {
        let source = "const a: float = 5.0; ???";
        let error = parse_document(source).unwrap_err();
        assert_eq!(error.position, source.find("???").unwrap());
        assert!(error.message.contains("???"));
    }
}
