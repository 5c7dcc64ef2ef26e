//! Formatting style discovery.
//!
//! The style of the consuming project is read from its prettier
//! configuration so that the generated module matches hand-written code.

use std::path::Path;

use serde::Deserialize;

use crate::Indent;

const CONFIG_FILES: &[&str] = &[".prettierrc", ".prettierrc.json"];

/// Line terminator written between lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    Crlf,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::Crlf => "\r\n",
        }
    }
}

/// Formatting options applied to the generated module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormatStyle {
    pub indent: Indent,
    pub line_ending: LineEnding,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PrettierConfig {
    tab_width: Option<u8>,
    use_tabs: Option<bool>,
    end_of_line: Option<String>,
}

impl From<PrettierConfig> for FormatStyle {
    fn from(config: PrettierConfig) -> Self {
        let indent = if config.use_tabs.unwrap_or(false) {
            Indent::Tab
        } else {
            Indent::Spaces(config.tab_width.unwrap_or(2))
        };
        let line_ending = match config.end_of_line.as_deref() {
            Some("crlf") => LineEnding::Crlf,
            _ => LineEnding::Lf,
        };
        Self {
            indent,
            line_ending,
        }
    }
}

impl FormatStyle {
    /// Find the formatting style for files written under `dir`.
    ///
    /// Walks from `dir` to the filesystem root and uses the first prettier
    /// configuration found, falling back to the defaults.
    pub fn discover(dir: &Path) -> Self {
        for candidate in dir.ancestors() {
            if let Some(config) = read_config(candidate) {
                return config.into();
            }
        }
        tracing::debug!(dir = %dir.display(), "no prettier configuration found, using defaults");
        Self::default()
    }

    /// Find the formatting style for the file at `path`.
    ///
    /// A bare file name is looked up from the current directory.
    pub fn for_output(path: &Path) -> Self {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => Self::discover(parent),
            _ => Self::discover(Path::new(".")),
        }
    }
}

fn read_config(dir: &Path) -> Option<PrettierConfig> {
    for name in CONFIG_FILES {
        let path = dir.join(name);
        if !path.is_file() {
            continue;
        }
        let parsed = std::fs::read_to_string(&path)
            .map_err(|e| e.to_string())
            .and_then(|content| {
                serde_json::from_str::<PrettierConfig>(&content).map_err(|e| e.to_string())
            });
        match parsed {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "using prettier configuration");
                return Some(config);
            }
            Err(reason) => {
                tracing::warn!(path = %path.display(), %reason, "ignoring prettier configuration");
            }
        }
    }

    let package_json = dir.join("package.json");
    if package_json.is_file() {
        let value = std::fs::read_to_string(&package_json)
            .ok()
            .and_then(|content| serde_json::from_str::<serde_json::Value>(&content).ok())?;
        let prettier = value.get("prettier")?.clone();
        return serde_json::from_value(prettier).ok();
    }

    None
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_for_output_uses_parent_directory() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".prettierrc"), r#"{ "useTabs": true }"#).unwrap();

        let style = FormatStyle::for_output(&temp.path().join("builders.ts"));

        assert_eq!(style.indent, Indent::Tab);
        assert_eq!(
            FormatStyle::for_output(Path::new("builders.ts")),
            FormatStyle::discover(Path::new("."))
        );
    }

    #[test]
    fn test_defaults_without_config() {
        let temp = TempDir::new().unwrap();
        let style = FormatStyle::from(PrettierConfig::default());
        assert_eq!(style, FormatStyle::default());
        assert_eq!(read_config(temp.path()).map(FormatStyle::from), None);
    }

    #[test]
    fn test_discover_prettierrc_in_parent() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(".prettierrc"),
            r#"{ "tabWidth": 4, "endOfLine": "crlf" }"#,
        )
        .unwrap();
        let nested = temp.path().join("src").join("type");
        fs::create_dir_all(&nested).unwrap();

        let style = FormatStyle::discover(&nested);

        assert_eq!(style.indent, Indent::Spaces(4));
        assert_eq!(style.line_ending, LineEnding::Crlf);
    }

    #[test]
    fn test_discover_use_tabs() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(".prettierrc.json"),
            r#"{ "useTabs": true, "tabWidth": 8 }"#,
        )
        .unwrap();

        assert_eq!(FormatStyle::discover(temp.path()).indent, Indent::Tab);
    }

    #[test]
    fn test_discover_package_json_key() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("package.json"),
            r#"{ "name": "app", "prettier": { "tabWidth": 3 } }"#,
        )
        .unwrap();

        assert_eq!(
            read_config(temp.path()).map(FormatStyle::from),
            Some(FormatStyle {
                indent: Indent::Spaces(3),
                line_ending: LineEnding::Lf,
            })
        );
    }

    #[test]
    fn test_non_json_config_is_ignored() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".prettierrc"), "tabWidth: 4\n").unwrap();

        assert!(read_config(temp.path()).is_none());
    }

    #[test]
    fn test_package_json_without_prettier_key() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("package.json"), r#"{ "name": "app" }"#).unwrap();

        assert!(read_config(temp.path()).is_none());
    }
}
