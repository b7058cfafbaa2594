//! Incidents collected while building the AST.

use alloc::{string::String, vec::Vec};
use core::fmt;

use pgsl_syntax::SourceRange;

/// A problem in the user's program, attached to the range it was found at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Incident {
    pub message: String,
    pub range: SourceRange,
}

impl fmt::Display for Incident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.range)
    }
}

/// Append-only incident sink shared by one AST construction.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticsContext {
    incidents: Vec<Incident>,
}

impl DiagnosticsContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>, range: SourceRange) {
        let incident = Incident {
            message: message.into(),
            range,
        };
        log::trace!("Incident: {}", incident);
        self.incidents.push(incident);
    }

    pub fn incidents(&self) -> &[Incident] {
        &self.incidents
    }

    pub fn len(&self) -> usize {
        self.incidents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.incidents.is_empty()
    }

    pub fn into_incidents(self) -> Vec<Incident> {
        self.incidents
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use super::*;

    #[test]
    fn test_push_keeps_order() {
        let mut diagnostics = DiagnosticsContext::new();
        diagnostics.push("first", SourceRange::new(0, 1));
        diagnostics.push("second", SourceRange::new(4, 9));
        assert_eq!(diagnostics.len(), 2);
        assert_eq!(diagnostics.incidents()[1].message, "second");
        assert_eq!(format!("{}", diagnostics.incidents()[1]), "second (4..9)");
    }
}
