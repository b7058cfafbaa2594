//! State threaded through one AST construction.

use alloc::string::String;

use pgsl_syntax::SourceRange;

use crate::{
    builtins::BuiltinLibrary,
    diagnostics::DiagnosticsContext,
    symbols::SymbolTable,
    types::Type,
};

/// The function whose body is being analysed.
#[derive(Debug, Clone)]
pub struct FunctionFrame {
    pub name: String,
    pub return_type: Type,
    pub loop_depth: u32,
    pub switch_depth: u32,
}

impl FunctionFrame {
    pub fn new(name: impl Into<String>, return_type: Type) -> Self {
        Self {
            name: name.into(),
            return_type,
            loop_depth: 0,
            switch_depth: 0,
        }
    }
}

pub struct AnalysisContext<'l> {
    library: &'l BuiltinLibrary,
    diagnostics: DiagnosticsContext,
    symbols: SymbolTable,
    frame: Option<FunctionFrame>,
}

impl<'l> AnalysisContext<'l> {
    pub fn new(library: &'l BuiltinLibrary) -> Self {
        Self {
            library,
            diagnostics: DiagnosticsContext::new(),
            symbols: SymbolTable::new(),
            frame: None,
        }
    }

    pub fn library(&self) -> &'l BuiltinLibrary {
        self.library
    }

    pub fn push_incident(&mut self, message: impl Into<String>, range: SourceRange) {
        self.diagnostics.push(message, range);
    }

    pub fn diagnostics(&self) -> &DiagnosticsContext {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> DiagnosticsContext {
        self.diagnostics
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn symbols_mut(&mut self) -> &mut SymbolTable {
        &mut self.symbols
    }

    pub fn frame(&self) -> Option<&FunctionFrame> {
        self.frame.as_ref()
    }

    pub fn frame_mut(&mut self) -> Option<&mut FunctionFrame> {
        self.frame.as_mut()
    }

    /// Enter a function body. Returns the frame that was active before.
    pub fn enter_function(&mut self, frame: FunctionFrame) -> Option<FunctionFrame> {
        self.frame.replace(frame)
    }

    pub fn leave_function(&mut self, previous: Option<FunctionFrame>) {
        self.frame = previous;
    }

    /// Run `f` with only the module scope visible and no function frame.
    /// Used to process a global declaration on demand from inside a body.
    pub fn isolated<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        let scopes = self.symbols.take_local_scopes();
        let frame = self.frame.take();
        let result = f(self);
        self.symbols.restore_local_scopes(scopes);
        self.frame = frame;
        result
    }
}
