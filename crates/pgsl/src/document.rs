//! A processed document and its transpilation.

use alloc::{string::String, vec::Vec};

use crate::{
    ast::{AnalysisContext, AstTree, NodeId},
    builtins::BuiltinLibrary,
    diagnostics::Incident,
    error::PgslResult,
    transpile::{Transpile, TranspilationMeta},
};

/// Output of [`AstDocument::transpile`].
#[derive(Debug, Clone, PartialEq)]
pub struct TranspilationResult {
    /// WGSL code. Empty when the document has incidents.
    pub code: String,
    /// Source maps are not produced.
    pub source_map: Option<()>,
    pub meta: TranspilationMeta,
    pub incidents: Vec<Incident>,
}

/// A fully processed AST with the incidents found while building it.
#[derive(Debug)]
pub struct AstDocument {
    tree: AstTree,
    incidents: Vec<Incident>,
    source: String,
}

impl AstDocument {
    /// Process every node of `tree`. Problems in the program become
    /// incidents; only broken invariants are errors.
    pub fn analyse(tree: AstTree, library: &BuiltinLibrary, source: String) -> PgslResult<Self> {
        log::debug!("Building AST with {} nodes", tree.len());
        let mut ctx = AnalysisContext::new(library);
        tree.process(tree.root(), &mut ctx)?;
        let incidents = ctx.into_diagnostics().into_incidents();
        log::debug!("AST built with {} incident(s)", incidents.len());
        Ok(Self {
            tree,
            incidents,
            source,
        })
    }

    /// User declarations, in source order.
    pub fn content(&self) -> &[NodeId] {
        self.tree
            .document()
            .map(|document| document.declarations.as_slice())
            .unwrap_or_default()
    }

    pub fn builtins(&self) -> &[NodeId] {
        self.tree
            .document()
            .map(|document| document.builtins.as_slice())
            .unwrap_or_default()
    }

    pub fn incidents(&self) -> &[Incident] {
        &self.incidents
    }

    pub fn tree(&self) -> &AstTree {
        &self.tree
    }

    /// Preprocessed source the incident ranges point into.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Transpile to WGSL. Skipped, with empty code, when there are
    /// incidents.
    pub fn transpile(&self) -> PgslResult<TranspilationResult> {
        if !self.incidents.is_empty() {
            log::debug!(
                "Skipping transpilation, {} incident(s)",
                self.incidents.len()
            );
            return Ok(TranspilationResult {
                code: String::new(),
                source_map: None,
                meta: TranspilationMeta::new(),
                incidents: self.incidents.clone(),
            });
        }

        let mut transpile = Transpile::new(&self.tree);
        let code = transpile.child(self.tree.root())?;
        let meta = transpile.into_meta();
        log::debug!(
            "Transpiled {} declaration(s), {} entry point(s)",
            self.content().len(),
            meta.entry_points().len()
        );
        Ok(TranspilationResult {
            code,
            source_map: None,
            meta,
            incidents: Vec::new(),
        })
    }
}
