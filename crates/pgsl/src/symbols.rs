//! Symbol table for PGSL analysis.
//!
//! Tracks which declaration node every visible name refers to. The first
//! scope is the module scope; function bodies and blocks push nested scopes.

use alloc::{
    collections::BTreeMap,
    format,
    string::{String, ToString},
    vec::Vec,
};

use crate::ast::NodeId;

/// What kind of declaration a name refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    /// Global variable, local variable or parameter.
    Value,
    Function,
    Struct,
    Enum,
    Alias,
}

impl SymbolKind {
    pub fn is_type(self) -> bool {
        matches!(self, SymbolKind::Struct | SymbolKind::Enum | SymbolKind::Alias)
    }
}

/// A declared name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub name: String,
    pub kind: SymbolKind,
    /// Node that declares the name.
    pub declaration: NodeId,
}

#[derive(Debug, Clone, Default)]
struct Scope {
    symbols: BTreeMap<String, Symbol>,
}

impl Scope {
    /// Returns `Err` if the name is already declared.
    fn declare(&mut self, symbol: Symbol) -> Result<(), String> {
        if self.symbols.contains_key(&symbol.name) {
            return Err(format!("'{}' already declared in this scope", symbol.name));
        }
        self.symbols.insert(symbol.name.clone(), symbol);
        Ok(())
    }

    fn lookup(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }
}

/// Nested scopes saved by [`SymbolTable::take_local_scopes`].
#[derive(Debug, Default)]
pub struct LocalScopes(Vec<Scope>);

#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    scopes: Vec<Scope>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_scope(&mut self) {
        self.scopes.push(Scope::default());
    }

    pub fn pop_scope(&mut self) {
        self.scopes.pop();
    }

    /// Declare a name in the innermost scope.
    ///
    /// Returns `Err` if the name is already declared in that scope.
    pub fn declare(
        &mut self,
        name: impl Into<String>,
        kind: SymbolKind,
        declaration: NodeId,
    ) -> Result<(), String> {
        let symbol = Symbol {
            name: name.into(),
            kind,
            declaration,
        };
        match self.scopes.last_mut() {
            Some(scope) => scope.declare(symbol),
            None => Err("No active scope".to_string()),
        }
    }

    /// Look up a name, searching from the innermost scope outward.
    pub fn lookup(&self, name: &str) -> Option<&Symbol> {
        self.scopes.iter().rev().find_map(|scope| scope.lookup(name))
    }

    pub fn scope_depth(&self) -> usize {
        self.scopes.len()
    }

    /// Remove every scope but the module scope.
    pub fn take_local_scopes(&mut self) -> LocalScopes {
        let split = self.scopes.len().min(1);
        LocalScopes(self.scopes.split_off(split))
    }

    /// Put back scopes removed by [`Self::take_local_scopes`].
    pub fn restore_local_scopes(&mut self, scopes: LocalScopes) {
        self.scopes.truncate(1);
        self.scopes.extend(scopes.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(index: usize) -> NodeId {
        NodeId::new(index)
    }

    #[test]
    fn test_symbol_table_scoping() {
        let mut table = SymbolTable::new();

        table.push_scope();
        table.declare("x", SymbolKind::Value, id(1)).unwrap();

        table.push_scope();
        table.declare("y", SymbolKind::Value, id(2)).unwrap();

        assert!(table.lookup("x").is_some());
        assert!(table.lookup("y").is_some());

        table.pop_scope();

        assert!(table.lookup("y").is_none());
        assert!(table.lookup("x").is_some());
    }

    #[test]
    fn test_symbol_table_shadowing() {
        let mut table = SymbolTable::new();

        table.push_scope();
        table.declare("x", SymbolKind::Value, id(1)).unwrap();
        table.push_scope();
        table.declare("x", SymbolKind::Value, id(2)).unwrap();

        assert_eq!(table.lookup("x").unwrap().declaration, id(2));
        table.pop_scope();
        assert_eq!(table.lookup("x").unwrap().declaration, id(1));
    }

    #[test]
    fn test_symbol_table_duplicate_declaration() {
        let mut table = SymbolTable::new();

        table.push_scope();
        table.declare("Light", SymbolKind::Struct, id(1)).unwrap();

        let error = table.declare("Light", SymbolKind::Function, id(2)).unwrap_err();
        assert_eq!(error, "'Light' already declared in this scope");
    }

    #[test]
    fn test_symbol_table_no_scope() {
        let mut table = SymbolTable::new();
        assert!(table.declare("x", SymbolKind::Value, id(0)).is_err());
    }

    #[test]
    fn test_local_scopes_are_hidden_and_restored() {
        let mut table = SymbolTable::new();
        table.push_scope();
        table.declare("global", SymbolKind::Value, id(1)).unwrap();
        table.push_scope();
        table.declare("local", SymbolKind::Value, id(2)).unwrap();

        let saved = table.take_local_scopes();
        assert_eq!(table.scope_depth(), 1);
        assert!(table.lookup("local").is_none());
        assert!(table.lookup("global").is_some());

        table.restore_local_scopes(saved);
        assert_eq!(table.scope_depth(), 2);
        assert!(table.lookup("local").is_some());
    }
}
