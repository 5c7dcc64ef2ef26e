//! Core utilities and types for the typeshim generator.
//!
//! This crate provides the pieces shared by the generator and the CLI:
//! output files, the indentation model and the TypeScript formatter used
//! before the generated module is persisted.

mod code_builder;
mod file;
mod format;
mod indent;

pub use code_builder::CodeBuilder;
pub use file::OutputFile;
pub use format::{FormatStyle, LineEnding, format_typescript};
pub use indent::Indent;
