use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for declaration loading.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading declaration sources.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read declaration file '{path}'")]
    #[diagnostic(
        code(typeshim::source::io),
        help("check the paths listed under [source] files")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse '{path}': syntax error at {line}:{column}")]
    #[diagnostic(code(typeshim::source::parse))]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
    },

    #[error("failed to load the TypeScript grammar")]
    #[diagnostic(code(typeshim::source::language))]
    Language(#[from] tree_sitter::LanguageError),
}
