//! Validation utilities for TypeScript identifiers

use miette::SourceSpan;

use crate::{Error, Result};

/// Validation context that carries source information.
///
/// ```ignore
/// let ctx = ParseContext::new(src, "typeshim.toml");
/// ctx.validate_identifier("JsonTypeBuilder", "builder name")?;
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ParseContext<'a> {
    src: &'a str,
    filename: &'a str,
}

impl<'a> ParseContext<'a> {
    pub fn new(src: &'a str, filename: &'a str) -> Self {
        Self { src, filename }
    }

    pub fn src(&self) -> &'a str {
        self.src
    }

    pub fn filename(&self) -> &'a str {
        self.filename
    }

    /// Find the span of the first occurrence of a string value.
    pub fn find_span(&self, value: &str) -> Option<SourceSpan> {
        find_value_span(self.src, value, false)
    }

    /// Find the span of the last occurrence of a string value.
    pub fn find_last_span(&self, value: &str) -> Option<SourceSpan> {
        find_value_span(self.src, value, true)
    }

    /// Create a validation error pointing at `key` when it can be found.
    pub fn validation_error(&self, message: impl Into<String>, key: &str) -> Box<Error> {
        let span = self
            .src
            .find(key)
            .map(|pos| SourceSpan::from((pos, key.len())));
        Error::validation(message, self.src, self.filename, span)
    }

    /// Create a validation error with an explicit span.
    pub fn validation_error_at(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Error::validation(message, self.src, self.filename, span)
    }

    /// Validate that `name` can be written as a bare TypeScript identifier.
    pub fn validate_identifier(&self, name: &str, kind: &str) -> Result<()> {
        match identifier_error(name) {
            Some(reason) => Err(Error::invalid_identifier(
                name,
                kind,
                reason,
                self.src,
                self.filename,
                self.find_span(name),
            )),
            None => Ok(()),
        }
    }

    /// Like [`validate_identifier`](Self::validate_identifier), also
    /// rejecting reserved words.
    pub fn validate_binding(&self, name: &str, kind: &str) -> Result<()> {
        if is_reserved_word(name) {
            return Err(Error::invalid_identifier(
                name,
                kind,
                "name is a TypeScript reserved word",
                self.src,
                self.filename,
                self.find_span(name),
            ));
        }
        self.validate_identifier(name, kind)
    }
}

/// Words that cannot name a namespace import.
pub(crate) const RESERVED_WORDS: &[&str] = &[
    // JavaScript
    "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete", "do",
    "else", "enum", "export", "extends", "false", "finally", "for", "function", "if", "import",
    "in", "instanceof", "let", "new", "null", "return", "super", "switch", "this", "throw", "true",
    "try", "typeof", "var", "void", "while", "with", "yield",
    // TypeScript
    "any", "as", "async", "await", "boolean", "constructor", "declare", "implements",
    "interface", "module", "namespace", "never", "number", "object", "package", "private",
    "protected", "public", "readonly", "require", "static", "string", "symbol", "type",
    "undefined", "unknown",
];

pub(crate) fn is_reserved_word(name: &str) -> bool {
    RESERVED_WORDS.contains(&name)
}

/// Returns None if valid, Some(reason) if invalid
pub(crate) fn identifier_error(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        None => return Some("name cannot be empty"),
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        Some(_) => return Some("name must start with a letter, '_' or '$'"),
    }

    if chars.any(|c| !(c.is_ascii_alphanumeric() || c == '_' || c == '$')) {
        return Some("name must contain only letters, digits, '_' and '$'");
    }

    None
}

/// Find a quoted TOML string value; the span excludes the quotes.
fn find_value_span(src: &str, value: &str, last: bool) -> Option<SourceSpan> {
    let quoted = format!("\"{}\"", value);
    let pos = if last {
        src.rfind(&quoted)
    } else {
        src.find(&quoted)
    }?;
    Some(SourceSpan::from((pos + 1, value.len())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        assert!(identifier_error("Types").is_none());
        assert!(identifier_error("JsonTypeBuilder").is_none());
        assert!(identifier_error("_internal").is_none());
        assert!(identifier_error("$schema").is_none());
        assert!(identifier_error("T1").is_none());
    }

    #[test]
    fn test_invalid_identifiers() {
        assert!(identifier_error("").is_some());
        assert!(identifier_error("1Types").is_some());
        assert!(identifier_error("json-builder").is_some());
        assert!(identifier_error("Type.Builder").is_some());
        assert!(identifier_error("two words").is_some());
    }

    #[test]
    fn test_reserved_words() {
        assert!(is_reserved_word("class"));
        assert!(is_reserved_word("namespace"));
        assert!(is_reserved_word("await"));
        assert!(!is_reserved_word("Types"));
    }

    #[test]
    fn test_find_span_skips_quotes() {
        let ctx = ParseContext::new("builders = [\"A\", \"Json\"]", "typeshim.toml");
        let span = ctx.find_span("Json").unwrap();
        assert_eq!(span.offset(), 18);
        assert_eq!(span.len(), 4);
    }

    #[test]
    fn test_find_last_span() {
        let src = "builders = [\"A\", \"A\"]";
        let ctx = ParseContext::new(src, "typeshim.toml");
        assert_eq!(ctx.find_span("A").unwrap().offset(), 13);
        assert_eq!(ctx.find_last_span("A").unwrap().offset(), 18);
    }

    #[test]
    fn test_validate_binding_rejects_reserved() {
        let ctx = ParseContext::new("namespace = \"class\"", "typeshim.toml");
        let err = ctx.validate_binding("class", "namespace").unwrap_err();
        assert!(err.to_string().contains("invalid namespace 'class'"));
        assert!(ctx.validate_identifier("class", "builder name").is_ok());
    }
}
