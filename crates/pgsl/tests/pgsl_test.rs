//! PgslTest helper for integration tests.
//!
//! Runs the full pipeline (preprocess, parse, analyse, transpile) and offers
//! assertions over the emitted WGSL and the collected incidents.

#![allow(dead_code)]

use filecheck::{CheckerBuilder, NO_VARIABLES};
use pgsl::{Incident, PgslParser, PgslResult, TranspilationResult};

pub struct PgslTest {
    result: TranspilationResult,
}

impl PgslTest {
    pub fn new(source: &str) -> PgslResult<Self> {
        Self::with_parser(&PgslParser::new(), source)
    }

    pub fn with_parser(parser: &PgslParser, source: &str) -> PgslResult<Self> {
        Ok(Self {
            result: parser.transpile(source)?,
        })
    }

    pub fn code(&self) -> &str {
        &self.result.code
    }

    pub fn incidents(&self) -> &[Incident] {
        &self.result.incidents
    }

    pub fn result(&self) -> &TranspilationResult {
        &self.result
    }

    /// Assert the source compiled cleanly to exactly `expected`.
    pub fn assert_code(&self, expected: &str) {
        self.assert_clean();
        assert_eq!(
            self.result.code, expected,
            "WGSL mismatch:\n\nExpected:\n{}\n\nActual:\n{}\n",
            expected, self.result.code
        );
    }

    /// Assert the source compiled cleanly and the output contains `fragment`.
    pub fn assert_contains(&self, fragment: &str) {
        self.assert_clean();
        assert!(
            self.result.code.contains(fragment),
            "Expected WGSL to contain:\n{}\n\nActual:\n{}\n",
            fragment,
            self.result.code
        );
    }

    /// Assert some incident message contains `fragment` and that no code was
    /// generated.
    pub fn assert_incident(&self, fragment: &str) {
        assert!(
            self.result
                .incidents
                .iter()
                .any(|incident| incident.message.contains(fragment)),
            "Expected an incident containing {:?}, found {:?}",
            fragment,
            self.messages()
        );
        assert!(self.result.code.is_empty());
    }

    /// Match the output against `check:`/`nextln:`/`not:` directives.
    /// Declarations are joined by newlines, so each one is a line.
    pub fn assert_filecheck(&self, directives: &str) {
        self.assert_clean();
        let mut builder = CheckerBuilder::new();
        for line in directives.lines().map(str::trim).filter(|line| !line.is_empty()) {
            builder
                .directive(line)
                .unwrap_or_else(|e| panic!("Bad filecheck directive '{}': {}", line, e));
        }
        let checker = builder.finish();
        let matched = checker
            .check(&self.result.code, NO_VARIABLES)
            .unwrap_or_else(|e| panic!("Filecheck error: {}", e));
        if !matched {
            let (_, explain) = checker
                .explain(&self.result.code, NO_VARIABLES)
                .unwrap_or_else(|e| panic!("Filecheck explain error: {}", e));
            panic!("Filecheck failed:\n{}", explain);
        }
    }

    pub fn assert_clean(&self) {
        assert!(
            self.result.incidents.is_empty(),
            "Unexpected incidents: {:?}",
            self.messages()
        );
    }

    fn messages(&self) -> Vec<&str> {
        self.result
            .incidents
            .iter()
            .map(|incident| incident.message.as_str())
            .collect()
    }
}
