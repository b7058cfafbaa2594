//! PGSL syntax front end.
//!
//! This crate turns PGSL source text into a concrete syntax tree (CST). It
//! contains the textual preprocessor (`#IMPORT`, `#IFDEF`, `#META`), a `nom`
//! based source parser and the CST data model the `pgsl` core consumes.

#![no_std]

extern crate alloc;

pub mod cst;
mod parser;
mod preprocessor;
mod range;

pub use parser::{parse_document, ParseError, ParseResult};
pub use preprocessor::{PreprocessError, Preprocessor};
pub use range::{LineColumn, SourceRange};
