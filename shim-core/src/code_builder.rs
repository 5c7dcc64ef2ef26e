//! Code builder utility for generating properly indented code.

use crate::Indent;

/// Fluent API for building code with proper indentation.
///
/// # Example
///
/// ```
/// use typeshim_core::CodeBuilder;
///
/// let code = CodeBuilder::typescript()
///     .line("function foo() {")
///     .indent()
///     .line("return 1")
///     .dedent()
///     .line("}")
///     .build();
///
/// assert_eq!(code, "function foo() {\n  return 1\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 2-space indentation.
    pub fn typescript() -> Self {
        Self::new(Indent::TYPESCRIPT)
    }

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    /// Add a blank line.
    pub fn blank(mut self) -> Self {
        self.push_blank();
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a multi-line JSDoc block, one ` * ` line per entry.
    pub fn jsdoc_block<'a>(self, lines: impl IntoIterator<Item = &'a str>) -> Self {
        let builder = self.line("/**");
        let builder = lines
            .into_iter()
            .fold(builder, |b, text| b.line(&format!(" * {}", text)));
        builder.line(" */")
    }

    /// Add a line of code with current indentation (mutable).
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        let prefix = self.indent.repeat(self.indent_level);
        self.buffer.push_str(&prefix);
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (mutable).
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Jump directly to an indentation level (mutable).
    pub fn set_indent_level(&mut self, level: usize) -> &mut Self {
        self.indent_level = level;
        self
    }

    /// Get the current indentation level.
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Check whether nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::typescript()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let code = CodeBuilder::typescript().line("const x = 1").build();
        assert_eq!(code, "const x = 1\n");
    }

    #[test]
    fn test_indentation() {
        let code = CodeBuilder::new(Indent::Spaces(4))
            .line("function main() {")
            .indent()
            .line("run()")
            .dedent()
            .line("}")
            .build();

        assert_eq!(code, "function main() {\n    run()\n}\n");
    }

    #[test]
    fn test_blank_line() {
        let code = CodeBuilder::typescript()
            .line("import * as Types from 'x'")
            .blank()
            .line("export {}")
            .build();

        assert_eq!(code, "import * as Types from 'x'\n\nexport {}\n");
    }

    #[test]
    fn test_jsdoc_block() {
        let code = CodeBuilder::typescript()
            .jsdoc_block(["Creates a schema for a `Number` type."])
            .build();

        assert_eq!(
            code,
            "/**\n * Creates a schema for a `Number` type.\n */\n"
        );
    }

    #[test]
    fn test_set_indent_level() {
        let mut builder = CodeBuilder::new(Indent::Tab);
        builder.set_indent_level(2).push_line("x");
        assert_eq!(builder.current_indent(), 2);
        assert_eq!(builder.build(), "\t\tx\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let code = CodeBuilder::typescript().dedent().line("x").build();
        assert_eq!(code, "x\n");
    }
}
