use std::path::{Path, PathBuf};

use crate::{Error, Manifest, Result};

/// Represents a typeshim.toml file with both raw content and parsed manifest.
#[derive(Debug)]
pub struct ShimToml {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl ShimToml {
    /// Open and parse a typeshim.toml file.
    ///
    /// Relative paths inside the manifest are resolved against the
    /// directory containing it.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        let manifest = Manifest::from_str_with_filename(&content, &filename)?.resolve_paths(base);

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Take the parsed manifest.
    pub fn into_manifest(self) -> Manifest {
        self.manifest
    }
}
