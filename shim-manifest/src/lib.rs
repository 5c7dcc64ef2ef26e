//! Parsing and validation of `typeshim.toml`.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;
mod manifest;
mod validate;

pub use error::{Error, Result};
pub use file::ShimToml;
pub use manifest::{
    DEFAULT_MODULE, DEFAULT_NAMESPACE, Manifest, OutputConfig, SourceConfig, TypesConfig,
};
pub use validate::ParseContext;
