use std::path::{Path, PathBuf};

use tree_sitter::{Node, Parser, Tree};

use crate::{Error, Result};

/// One parsed declaration file.
#[derive(Debug, Clone)]
pub struct Source {
    path: PathBuf,
    text: String,
    tree: Tree,
}

impl Source {
    /// Read and parse a declaration file from disk.
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let text = std::fs::read_to_string(&path).map_err(|source| Error::Io {
            path: path.clone(),
            source,
        })?;
        Self::parse(path, text)
    }

    /// Parse declaration text that is identified by `path`.
    ///
    /// Text with syntax errors is rejected: a partially parsed file would
    /// silently hide members from the generated module.
    pub fn parse(path: impl Into<PathBuf>, text: impl Into<String>) -> Result<Self> {
        let path = path.into();
        let text = text.into();

        let mut parser = Parser::new();
        parser.set_language(&tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into())?;

        let tree = parser.parse(&text, None).ok_or_else(|| Error::Parse {
            path: path.clone(),
            line: 1,
            column: 1,
        })?;

        if let Some(node) = first_error(tree.root_node()) {
            let position = node.start_position();
            return Err(Error::Parse {
                path,
                line: position.row + 1,
                column: position.column + 1,
            });
        }

        tracing::debug!(path = %path.display(), bytes = text.len(), "parsed declaration source");
        Ok(Self { path, text, tree })
    }

    /// Path the source was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Full text of the source.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Root node of the syntax tree.
    pub fn root_node(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Text covered by `node`.
    pub fn node_text(&self, node: Node<'_>) -> &str {
        node.utf8_text(self.text.as_bytes()).unwrap_or_default()
    }
}

/// The loaded set of root declaration sources.
///
/// Immutable after loading; every later query runs against the same trees.
/// Only the configured files are loaded, imports are not followed.
#[derive(Debug, Clone)]
pub struct Program {
    sources: Vec<Source>,
}

impl Program {
    /// Load every root path, in order.
    ///
    /// Fails on the first missing or unparsable file; no partial program is
    /// ever returned. A path listed twice is loaded once.
    pub fn load<I, P>(paths: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut unique: Vec<PathBuf> = Vec::new();
        for path in paths {
            let path = path.as_ref().to_path_buf();
            if !unique.contains(&path) {
                unique.push(path);
            }
        }

        let sources = unique.iter().map(Source::read).collect::<Result<Vec<_>>>()?;
        tracing::info!(sources = sources.len(), "loaded declaration program");

        Ok(Self { sources })
    }

    /// Build a program from already parsed sources.
    pub fn from_sources(sources: Vec<Source>) -> Self {
        Self { sources }
    }

    /// Loaded sources, in configured order.
    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    /// Check whether `path` was loaded into the program.
    pub fn contains(&self, path: &Path) -> bool {
        self.sources.iter().any(|s| s.path == path)
    }
}

fn first_error(root: Node<'_>) -> Option<Node<'_>> {
    if !root.has_error() {
        return None;
    }
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if node.is_error() || node.is_missing() {
            return Some(node);
        }
        let mut cursor = node.walk();
        let children: Vec<_> = node.children(&mut cursor).collect();
        stack.extend(children.into_iter().rev().filter(|c| c.has_error()));
    }
    Some(root)
}
