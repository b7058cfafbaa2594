//! The `PgslParser` entry point: preprocess, parse, analyse, transpile.

use alloc::string::String;

use pgsl_syntax::{parse_document, Preprocessor};

use crate::{
    ast::AstTree,
    builtins::BuiltinLibrary,
    document::{AstDocument, TranspilationResult},
    error::PgslResult,
};

/// Parser configuration: importable sources, meta values and the built-in
/// library.
///
/// ```ignore
/// let parser = PgslParser::new()
///     .with_import("common", "const scale: float = 2.0;")
///     .with_meta("QUALITY", "2");
/// let result = parser.transpile("#IMPORT \"common\"\nconst a: float = scale;")?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct PgslParser {
    preprocessor: Preprocessor,
    library: BuiltinLibrary,
}

impl PgslParser {
    pub fn new() -> Self {
        Self {
            preprocessor: Preprocessor::new(),
            library: BuiltinLibrary::new(),
        }
    }

    /// Register source text for `#IMPORT "name"`.
    pub fn with_import(mut self, name: impl Into<String>, source: impl Into<String>) -> Self {
        self.preprocessor.add_import(name, source);
        self
    }

    /// Define a meta value for `#META` and `#IFDEF`.
    pub fn with_meta(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.preprocessor.add_meta(name, value);
        self
    }

    pub fn library(&self) -> &BuiltinLibrary {
        &self.library
    }

    /// Preprocess, parse and analyse `source`.
    ///
    /// # Errors
    ///
    /// Unknown imports, malformed directives and syntax errors are errors.
    /// Problems in the program itself are incidents of the document.
    pub fn parse(&self, source: &str) -> PgslResult<AstDocument> {
        let source = self.preprocessor.process(source)?;
        let document = parse_document(&source)?;
        log::debug!("Parsed {} declaration(s)", document.declarations.len());
        let tree = AstTree::build(document, self.library.declarations());
        AstDocument::analyse(tree, &self.library, source)
    }

    /// Parse and transpile `source` to WGSL.
    pub fn transpile(&self, source: &str) -> PgslResult<TranspilationResult> {
        self.parse(source)?.transpile()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transpile_constant() {
        let result = PgslParser::new()
            .transpile("const a: float = 5.0;")
            .unwrap();
        assert!(result.incidents.is_empty(), "{:?}", result.incidents);
        assert_eq!(result.code, "const a:f32=5.0;");
        assert_eq!(result.source_map, None);
    }

    #[test]
    fn test_unknown_import_is_an_error() {
        let result = PgslParser::new().parse("#IMPORT \"missing\"\n");
        assert!(result.is_err());
    }
}
