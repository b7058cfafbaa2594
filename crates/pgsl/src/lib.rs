//! PGSL front end and WGSL transpiler.
//!
//! This crate takes the concrete syntax tree produced by [`syntax`] and
//! turns it into a typed AST: every node is processed once, bottom-up,
//! resolving its [`Type`](types::Type) and reporting problems in the
//! program as incidents. A document without incidents is transpiled to
//! WGSL.
//!
//! [`PgslParser`] is the entry point that runs the whole pipeline.

#![no_std]

extern crate alloc;

pub mod ast;
pub mod builtins;
pub mod control;
pub mod decl;
pub mod diagnostics;
mod document;
mod error;
pub mod expr;
pub mod function;
mod parser;
pub mod stmt;
pub mod symbols;
pub mod transpile;
pub mod types;

pub use pgsl_syntax as syntax;

pub use diagnostics::{DiagnosticsContext, Incident};
pub use document::{AstDocument, TranspilationResult};
pub use error::{PgslError, PgslResult};
pub use parser::PgslParser;
pub use transpile::{EntryPoint, ShaderStage, TranspilationMeta};
