use regex::Captures;

use super::InternalTypes;

/// Rewrites internal type tokens into `<namespace>.<Token>` references.
#[derive(Debug, Clone, Copy)]
pub struct TypePatcher<'a> {
    types: &'a InternalTypes,
    namespace: &'a str,
}

impl<'a> TypePatcher<'a> {
    pub fn new(types: &'a InternalTypes, namespace: &'a str) -> Self {
        Self { types, namespace }
    }

    /// Qualify every whole-token occurrence of an internal type in `input`.
    ///
    /// Tokens that are part of a longer identifier or already follow a `.`
    /// are left alone. The result is trimmed.
    pub fn patch(&self, input: &str) -> String {
        let Some(pattern) = self.types.pattern() else {
            return input.trim().to_string();
        };

        let patched = pattern.replace_all(input, |caps: &Captures<'_>| {
            let Some(m) = caps.get(0) else {
                return String::new();
            };
            let before = input[..m.start()].chars().next_back();
            let after = input[m.end()..].chars().next();
            let attached = before.is_some_and(|c| c == '.' || is_identifier_char(c))
                || after.is_some_and(is_identifier_char);
            if attached || !self.types.contains(m.as_str()) {
                m.as_str().to_string()
            } else {
                format!("{}.{}", self.namespace, m.as_str())
            }
        });

        patched.trim().to_string()
    }
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}
