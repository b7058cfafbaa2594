//! Error types for PGSL compilation.
//!
//! Problems in the user's program are incidents (see
//! [`crate::diagnostics`]), not errors. `PgslError` is reserved for input
//! that never reaches analysis and for broken processing invariants.

use pgsl_syntax::{ParseError, PreprocessError};

use crate::ast::NodeId;

/// Result type for PGSL compilation operations.
pub type PgslResult<T> = Result<T, PgslError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PgslError {
    #[error(transparent)]
    Syntax(#[from] ParseError),
    #[error(transparent)]
    Preprocess(#[from] PreprocessError),
    /// A node was asked to process itself while it was already processing.
    #[error("Node {node} re-entered its own processing")]
    ProcessingCycle { node: NodeId },
    /// A node was transpiled before it finished processing.
    #[error("Node {node} was transpiled before it was processed")]
    Unprocessed { node: NodeId },
}
