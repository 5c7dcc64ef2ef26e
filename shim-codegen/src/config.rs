//! Generator configuration.

use std::path::PathBuf;

use typeshim_manifest::{DEFAULT_MODULE, DEFAULT_NAMESPACE, Manifest};

/// Everything the generator needs besides the output path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Root declaration files, in scan order.
    pub files: Vec<PathBuf>,
    /// Builder class allow-list.
    pub builders: Vec<String>,
    /// Template file; `None` selects the built-in template.
    pub template: Option<PathBuf>,
    /// Module the wrappers import from.
    pub module: String,
    /// Namespace internal types are qualified with.
    pub namespace: String,
    /// Extra internal type names.
    pub internal_types: Vec<String>,
}

impl GeneratorConfig {
    pub fn new<F, B>(files: F, builders: B) -> Self
    where
        F: IntoIterator,
        F::Item: Into<PathBuf>,
        B: IntoIterator,
        B::Item: Into<String>,
    {
        Self {
            files: files.into_iter().map(Into::into).collect(),
            builders: builders.into_iter().map(Into::into).collect(),
            template: None,
            module: DEFAULT_MODULE.to_string(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            internal_types: Vec::new(),
        }
    }

    pub fn with_template(mut self, template: impl Into<PathBuf>) -> Self {
        self.template = Some(template.into());
        self
    }

    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = module.into();
        self
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn with_internal_types<I>(mut self, names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.internal_types.extend(names.into_iter().map(Into::into));
        self
    }
}

impl From<&Manifest> for GeneratorConfig {
    fn from(manifest: &Manifest) -> Self {
        Self {
            files: manifest.source.files.clone(),
            builders: manifest.source.builders.clone(),
            template: manifest.output.template.clone(),
            module: manifest.output.module.clone(),
            namespace: manifest.output.namespace.clone(),
            internal_types: manifest.types.internal.clone(),
        }
    }
}
