use std::sync::LazyLock;

use indexmap::IndexSet;
use regex::Regex;

use crate::Result;

/// Internal type names that are always qualified.
pub const BASE_TYPES: &[&str] = &[
    "TSchema",
    "TProperties",
    "TKind",
    "TLiteralValue",
    "TEnumRecord",
    "TEnumKey",
    "TRecordKey",
    "TTemplateLiteralKind",
    "SchemaOptions",
    "Static",
    "StaticDecode",
    "StaticEncode",
    "Evaluate",
    "Kind",
    "Hint",
    "OptionalKind",
    "ReadonlyKind",
    "TransformKind",
];

/// A word followed by `Options` and a space, e.g. `ObjectOptions `.
static OPTIONS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+Options ").expect("invalid options regex"));

/// Append-only construction of the internal type vocabulary.
///
/// Tokens keep insertion order and are never removed; inserting a token
/// that is already present is a no-op.
#[derive(Debug, Clone, Default)]
pub struct InternalTypesBuilder {
    tokens: IndexSet<String>,
}

impl InternalTypesBuilder {
    /// An empty vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// A vocabulary seeded with [`BASE_TYPES`].
    pub fn with_base() -> Self {
        let mut builder = Self::new();
        builder.extend(BASE_TYPES.iter().copied());
        builder
    }

    /// Add a token. Returns `false` if it was already present.
    pub fn insert(&mut self, token: impl Into<String>) -> bool {
        let token = token.into();
        if token.is_empty() {
            return false;
        }
        self.tokens.insert(token)
    }

    /// Add several tokens, returning how many were new.
    pub fn extend<I>(&mut self, tokens: I) -> usize
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        tokens
            .into_iter()
            .map(|t| self.insert(t))
            .filter(|added| *added)
            .count()
    }

    /// Register every `<Word>Options ` token found in `text`.
    ///
    /// Returns the number of distinct tokens found, new or not.
    pub fn scan_options(&mut self, text: &str) -> usize {
        let found: IndexSet<&str> = OPTIONS_PATTERN
            .find_iter(text)
            .map(|m| m.as_str().trim())
            .collect();
        for token in &found {
            if self.insert(*token) {
                tracing::trace!(token, "registered options type");
            }
        }
        found.len()
    }

    /// Register the `T`-prefixed type of a method, e.g. `TObject` for `Object`.
    pub fn derive_from_method(&mut self, method: &str) -> bool {
        self.insert(format!("T{}", method))
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Freeze the vocabulary.
    pub fn build(self) -> Result<InternalTypes> {
        InternalTypes::new(self.tokens)
    }
}

/// The frozen internal type vocabulary.
#[derive(Debug, Clone)]
pub struct InternalTypes {
    tokens: IndexSet<String>,
    pattern: Option<Regex>,
}

impl InternalTypes {
    fn new(tokens: IndexSet<String>) -> Result<Self> {
        let pattern = if tokens.is_empty() {
            None
        } else {
            // Longest first, so no token shadows a longer one sharing its prefix.
            let mut alternatives: Vec<&str> = tokens.iter().map(String::as_str).collect();
            alternatives.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
            let alternation = alternatives
                .iter()
                .map(|t| regex::escape(t))
                .collect::<Vec<_>>()
                .join("|");
            // No `\b` anchors: `$` is an identifier character but not a regex word
            // character. The patcher checks identifier boundaries itself.
            Some(Regex::new(&format!("(?:{})", alternation))?)
        };
        Ok(Self { tokens, pattern })
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    /// Tokens in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub(crate) fn pattern(&self) -> Option<&Regex> {
        self.pattern.as_ref()
    }
}
