//! Textual preprocessor.
//!
//! Directives are whole lines starting with `#` followed by an upper-case
//! word:
//!
//! * `#IMPORT "name"` is replaced by the preprocessed source registered
//!   under `name`. Every import is included at most once per run, so
//!   transitive duplicates and import cycles are skipped.
//! * `#IFDEF NAME` / `#IFNDEF NAME` ... `#ENDIF` keep or drop the enclosed
//!   lines depending on whether the meta value `NAME` is defined.
//! * `#META NAME` anywhere in a line is replaced by the meta value text.
//!
//! Dropped lines are replaced by empty lines so line numbers stay stable
//! within one file.

use alloc::{
    collections::{BTreeMap, BTreeSet},
    string::{String, ToString},
    vec::Vec,
};

/// Preprocessor failure. These are structural errors, not incidents.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PreprocessError {
    #[error("Import \"{0}\" not found.")]
    UnknownImport(String),
    #[error("Meta value \"{0}\" is not defined.")]
    UndefinedMeta(String),
    #[error("#ENDIF without matching #IFDEF on line {line}.")]
    UnbalancedEndif { line: usize },
    #[error("Missing #ENDIF for condition opened in \"{source_name}\".")]
    UnterminatedCondition { source_name: String },
    #[error("Malformed directive \"{directive}\" on line {line}.")]
    MalformedDirective { directive: String, line: usize },
}

/// Import sources and meta values used while preprocessing.
#[derive(Debug, Clone, Default)]
pub struct Preprocessor {
    imports: BTreeMap<String, String>,
    meta: BTreeMap<String, String>,
}

impl Preprocessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register source text importable with `#IMPORT "name"`.
    pub fn add_import(&mut self, name: impl Into<String>, source: impl Into<String>) {
        self.imports.insert(name.into(), source.into());
    }

    /// Define a meta value for `#META` and `#IFDEF`.
    pub fn add_meta(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.meta.insert(name.into(), value.into());
    }

    pub fn meta(&self, name: &str) -> Option<&str> {
        self.meta.get(name).map(String::as_str)
    }

    /// Preprocess a root document.
    pub fn process(&self, source: &str) -> Result<String, PreprocessError> {
        let mut used = BTreeSet::new();
        let mut output = String::new();
        self.process_into(source, "<root>", &mut used, &mut output)?;
        Ok(output)
    }

    fn process_into(
        &self,
        source: &str,
        source_name: &str,
        used: &mut BTreeSet<String>,
        output: &mut String,
    ) -> Result<(), PreprocessError> {
        // One entry per open #IFDEF/#IFNDEF: whether its lines are kept.
        let mut conditions: Vec<bool> = Vec::new();

        for (index, line) in source.lines().enumerate() {
            let line_number = index + 1;
            let active = conditions.iter().all(|kept| *kept);
            let trimmed = line.trim();

            match Directive::parse(trimmed, line_number)? {
                Some(Directive::IfDef(name)) => {
                    conditions.push(self.meta.contains_key(name));
                    output.push('\n');
                }
                Some(Directive::IfNotDef(name)) => {
                    conditions.push(!self.meta.contains_key(name));
                    output.push('\n');
                }
                Some(Directive::EndIf) => {
                    if conditions.pop().is_none() {
                        return Err(PreprocessError::UnbalancedEndif { line: line_number });
                    }
                    output.push('\n');
                }
                Some(Directive::Import(name)) if active => {
                    if !used.insert(name.to_string()) {
                        log::debug!("Skipping already included import \"{}\"", name);
                        output.push('\n');
                        continue;
                    }
                    let imported = self
                        .imports
                        .get(name)
                        .ok_or_else(|| PreprocessError::UnknownImport(name.to_string()))?;
                    log::debug!("Including import \"{}\" into \"{}\"", name, source_name);
                    self.process_into(imported, name, used, output)?;
                }
                Some(Directive::Import(_)) => output.push('\n'),
                None if active => {
                    output.push_str(&self.substitute_meta(line, line_number)?);
                    output.push('\n');
                }
                None => output.push('\n'),
            }
        }

        if !conditions.is_empty() {
            return Err(PreprocessError::UnterminatedCondition {
                source_name: source_name.to_string(),
            });
        }
        Ok(())
    }

    /// Replace every `#META NAME` occurrence with the meta value.
    fn substitute_meta(&self, line: &str, line_number: usize) -> Result<String, PreprocessError> {
        const MARKER: &str = "#META";

        let mut result = String::with_capacity(line.len());
        let mut rest = line;
        while let Some(position) = rest.find(MARKER) {
            result.push_str(&rest[..position]);
            let after = rest[position + MARKER.len()..].trim_start();
            let name_length = after
                .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
                .unwrap_or(after.len());
            let name = &after[..name_length];
            if name.is_empty() {
                return Err(PreprocessError::MalformedDirective {
                    directive: line.trim().to_string(),
                    line: line_number,
                });
            }
            let value = self
                .meta
                .get(name)
                .ok_or_else(|| PreprocessError::UndefinedMeta(name.to_string()))?;
            result.push_str(value);
            rest = &after[name_length..];
        }
        result.push_str(rest);
        Ok(result)
    }
}

enum Directive<'a> {
    Import(&'a str),
    IfDef(&'a str),
    IfNotDef(&'a str),
    EndIf,
}

impl<'a> Directive<'a> {
    /// Recognize a directive line. `#[Attribute]` and inline `#META` are not
    /// line directives.
    fn parse(line: &'a str, line_number: usize) -> Result<Option<Self>, PreprocessError> {
        let malformed = || PreprocessError::MalformedDirective {
            directive: line.to_string(),
            line: line_number,
        };

        let Some(body) = line.strip_prefix('#') else {
            return Ok(None);
        };
        let (word, argument) = match body.split_once(char::is_whitespace) {
            Some((word, argument)) => (word, argument.trim()),
            None => (body, ""),
        };

        match word {
            "IMPORT" => {
                let name = argument
                    .strip_prefix('"')
                    .and_then(|name| name.strip_suffix('"'))
                    .filter(|name| !name.is_empty())
                    .ok_or_else(malformed)?;
                Ok(Some(Directive::Import(name)))
            }
            "IFDEF" if !argument.is_empty() => Ok(Some(Directive::IfDef(argument))),
            "IFNDEF" if !argument.is_empty() => Ok(Some(Directive::IfNotDef(argument))),
            "IFDEF" | "IFNDEF" => Err(malformed()),
            "ENDIF" => Ok(Some(Directive::EndIf)),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<&str> {
        text.lines().map(str::trim).filter(|line| !line.is_empty()).collect()
    }

    #[test]
    fn test_plain_source_is_unchanged() {
        let preprocessor = Preprocessor::new();
        let output = preprocessor.process("const a: float = 1.0;").unwrap();
        assert_eq!(lines(&output), ["const a: float = 1.0;"]);
    }

    #[test]
    fn test_nested_imports_are_inlined_deepest_first() {
        let mut preprocessor = Preprocessor::new();
        preprocessor.add_import("outer", "#IMPORT \"inner\"\nconst outer: float = inner;");
        preprocessor.add_import("inner", "const inner: float = 1.0;");
        let output = preprocessor
            .process("#IMPORT \"outer\"\n#IMPORT \"inner\"\nconst root: float = outer;")
            .unwrap();
        assert_eq!(
            lines(&output),
            [
                "const inner: float = 1.0;",
                "const outer: float = inner;",
                "const root: float = outer;",
            ]
        );
    }

    #[test]
    fn test_import_cycle_terminates() {
        let mut preprocessor = Preprocessor::new();
        preprocessor.add_import("a", "#IMPORT \"b\"\nconst a: float = 1.0;");
        preprocessor.add_import("b", "#IMPORT \"a\"\nconst b: float = 2.0;");
        let output = preprocessor.process("#IMPORT \"a\"").unwrap();
        assert_eq!(lines(&output), ["const b: float = 2.0;", "const a: float = 1.0;"]);
    }

    #[test]
    fn test_unknown_import() {
        let preprocessor = Preprocessor::new();
        assert_eq!(
            preprocessor.process("#IMPORT \"missing\""),
            Err(PreprocessError::UnknownImport("missing".to_string()))
        );
    }

    #[test]
    fn test_conditions() {
        let mut preprocessor = Preprocessor::new();
        preprocessor.add_meta("SHADOWS", "1");
        let output = preprocessor
            .process("#IFDEF SHADOWS\nconst a: float = 1.0;\n#ENDIF\n#IFNDEF SHADOWS\nconst b: float = 2.0;\n#ENDIF")
            .unwrap();
        assert_eq!(lines(&output), ["const a: float = 1.0;"]);
    }

    #[test]
    fn test_unbalanced_conditions() {
        let preprocessor = Preprocessor::new();
        assert_eq!(
            preprocessor.process("#ENDIF"),
            Err(PreprocessError::UnbalancedEndif { line: 1 })
        );
        assert!(matches!(
            preprocessor.process("#IFDEF A\nconst a: float = 1.0;"),
            Err(PreprocessError::UnterminatedCondition { .. })
        ));
    }

    #[test]
    fn test_meta_substitution() {
        let mut preprocessor = Preprocessor::new();
        preprocessor.add_meta("LIGHT_COUNT", "4");
        let output = preprocessor
            .process("const lights: integer = #META LIGHT_COUNT;")
            .unwrap();
        assert_eq!(lines(&output), ["const lights: integer = 4;"]);
        assert_eq!(
            preprocessor.process("const x: integer = #META MISSING;"),
            Err(PreprocessError::UndefinedMeta("MISSING".to_string()))
        );
    }

    #[test]
    fn test_attributes_are_not_directives() {
        let preprocessor = Preprocessor::new();
        let output = preprocessor.process("#[Vertex()]").unwrap();
        assert_eq!(lines(&output), ["#[Vertex()]"]);
    }
}
