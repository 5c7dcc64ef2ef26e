use std::{
    collections::HashSet,
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Deserialize;

use crate::{Error, Result, validate::ParseContext};

/// Module the generated wrappers import from when none is configured.
pub const DEFAULT_MODULE: &str = "@sinclair/typebox";
/// Namespace internal types are qualified with when none is configured.
pub const DEFAULT_NAMESPACE: &str = "TypeBox";

/// Root manifest for typeshim.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    pub source: SourceConfig,
    pub output: OutputConfig,
    #[serde(default)]
    pub types: TypesConfig,
}

/// Declaration files to scan and the builder classes to mirror.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceConfig {
    /// Root declaration files, in scan order
    pub files: Vec<PathBuf>,
    /// Builder class allow-list
    pub builders: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Generated module path
    pub path: PathBuf,
    /// Template file; the built-in template is used when omitted
    #[serde(default)]
    pub template: Option<PathBuf>,
    #[serde(default = "default_module")]
    pub module: String,
    #[serde(default = "default_namespace")]
    pub namespace: String,
}

/// Extra internal type names, added to the built-in vocabulary.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypesConfig {
    #[serde(default)]
    pub internal: Vec<String>,
}

fn default_module() -> String {
    DEFAULT_MODULE.to_string()
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "typeshim.toml")
    }
}

impl Manifest {
    /// Parse a typeshim.toml from a string with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let manifest: Self =
            toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;
        manifest.validate(content, filename)?;
        Ok(manifest)
    }

    /// Resolve relative paths against `base`.
    pub fn resolve_paths(mut self, base: &Path) -> Self {
        let resolve = |path: PathBuf| {
            if path.is_relative() {
                base.join(path)
            } else {
                path
            }
        };
        self.source.files = self.source.files.into_iter().map(resolve).collect();
        self.output.path = resolve(self.output.path);
        self.output.template = self.output.template.map(resolve);
        self
    }

    fn validate(&self, src: &str, filename: &str) -> Result<()> {
        let ctx = ParseContext::new(src, filename);

        if self.source.files.is_empty() {
            return Err(ctx.validation_error(
                "source.files must list at least one declaration file",
                "files",
            ));
        }

        if self.source.builders.is_empty() {
            return Err(ctx.validation_error(
                "source.builders must name at least one builder class",
                "builders",
            ));
        }

        let mut seen = HashSet::new();
        for name in &self.source.builders {
            ctx.validate_identifier(name, "builder name")?;
            if !seen.insert(name.as_str()) {
                return Err(ctx.validation_error_at(
                    format!("builder '{}' is listed more than once", name),
                    ctx.find_last_span(name),
                ));
            }
        }

        ctx.validate_binding(&self.output.namespace, "namespace")?;

        if self.output.module.trim().is_empty() {
            return Err(ctx.validation_error("output.module cannot be empty", "module"));
        }

        for name in &self.types.internal {
            ctx.validate_identifier(name, "internal type")?;
        }

        Ok(())
    }
}
