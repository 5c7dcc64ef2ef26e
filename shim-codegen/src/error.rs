use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    /// A declaration file is missing or unparsable.
    #[error(transparent)]
    #[diagnostic(transparent)]
    SourceLoad(#[from] typeshim_declarations::Error),

    /// The configured template file cannot be read.
    #[error("failed to read template '{path}'")]
    #[diagnostic(
        code(typeshim::template::read),
        help("check output.template in typeshim.toml or omit it to use the built-in template")
    )]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to render template '{name}'")]
    #[diagnostic(code(typeshim::template::render))]
    TemplateRender {
        name: String,
        #[source]
        source: minijinja::Error,
    },

    #[error("failed to write '{path}'")]
    #[diagnostic(
        code(typeshim::write),
        help("parent directories are not created; make sure the output directory exists")
    )]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The internal type vocabulary could not be compiled into a pattern.
    #[error("failed to compile the internal type vocabulary")]
    #[diagnostic(code(typeshim::vocabulary))]
    Vocabulary(#[from] regex::Error),
}
