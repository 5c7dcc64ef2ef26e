use std::path::{Path, PathBuf};

/// A generated file waiting to be persisted.
///
/// Writing always overwrites an existing file. The parent directory must
/// already exist; it is never created on the caller's behalf.
#[derive(Debug, Clone)]
pub struct OutputFile {
    path: PathBuf,
    content: String,
}

impl OutputFile {
    /// Create a new file with the given path and content.
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the file, replacing any previous content.
    pub fn write(&self) -> std::io::Result<()> {
        std::fs::write(&self.path, &self.content)?;
        tracing::debug!(
            path = %self.path.display(),
            bytes = self.content.len(),
            "wrote output file"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_creates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("builders.ts");

        OutputFile::new(&path, "hello").write().unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn test_write_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("builders.ts");

        fs::write(&path, "original").unwrap();
        OutputFile::new(&path, "updated").write().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "updated");
    }

    #[test]
    fn test_write_does_not_create_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing").join("builders.ts");

        let err = OutputFile::new(&path, "nested").write().unwrap_err();

        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
        assert!(!path.exists());
    }

    #[test]
    fn test_file_exists() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("builders.ts");

        let file = OutputFile::new(&path, "content");
        assert!(!file.exists());

        fs::write(&path, "content").unwrap();
        assert!(file.exists());
    }
}
