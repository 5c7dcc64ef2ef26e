//! Deterministic formatting for generated TypeScript.
//!
//! Lines are re-indented by bracket depth, so the formatter is only suited
//! to code shaped like the generated modules: one statement per line,
//! brackets balanced per block.

mod style;

pub use style::{FormatStyle, LineEnding};

use crate::CodeBuilder;

/// Format a TypeScript module according to `style`.
///
/// - every line is re-indented by its bracket depth
/// - JSDoc continuation lines get a single leading space
/// - trailing whitespace is stripped
/// - runs of blank lines collapse to one, and blank lines directly after an
///   opening bracket or before a closing one are dropped
/// - the output ends with exactly one line ending
pub fn format_typescript(source: &str, style: &FormatStyle) -> String {
    let mut scanner = Scanner::default();
    let mut builder = CodeBuilder::new(style.indent);
    let mut pending_blank = false;
    let mut after_open = true;

    for raw in source.lines() {
        if scanner.in_template {
            builder.set_indent_level(0).push_line(raw.trim_end());
            scanner.advance(raw);
            continue;
        }

        let line = raw.trim();
        if line.is_empty() {
            pending_blank = true;
            continue;
        }

        if scanner.in_block_comment {
            let text = if line.starts_with('*') {
                format!(" {}", line)
            } else {
                line.to_string()
            };
            let level = scanner.depth();
            scanner.advance(line);
            builder.set_indent_level(level).push_line(&text);
            pending_blank = false;
            after_open = false;
            continue;
        }

        let closes_first = line.starts_with(['}', ')', ']']);
        if pending_blank && !after_open && !closes_first {
            builder.push_blank();
        }
        pending_blank = false;

        let level = scanner.advance(line);
        builder.set_indent_level(level).push_line(line);
        after_open = line.ends_with(['{', '(', '[']);
    }

    let formatted = builder.build();
    match style.line_ending {
        LineEnding::Lf => formatted,
        LineEnding::Crlf => formatted.replace('\n', "\r\n"),
    }
}

/// Tracks bracket nesting across lines, skipping strings and comments.
///
/// Brackets opened on the same line share one indent level, so `f({`
/// indents its body once and `})` closes it once.
#[derive(Debug, Default)]
struct Scanner {
    open: Vec<usize>,
    in_block_comment: bool,
    in_template: bool,
}

impl Scanner {
    fn depth(&self) -> usize {
        self.open.len()
    }

    /// Consume one line and return the level it should be printed at.
    fn advance(&mut self, line: &str) -> usize {
        let mut line_entry = false;
        let mut rest = line;
        if !self.in_block_comment && !self.in_template {
            rest = line.trim_start_matches(['}', ')', ']']);
            for _ in 0..(line.len() - rest.len()) {
                self.close(&mut line_entry);
            }
        }
        let level = self.depth();

        let mut quote: Option<char> = None;
        let mut chars = rest.chars().peekable();
        while let Some(c) = chars.next() {
            if self.in_block_comment {
                if c == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    self.in_block_comment = false;
                }
                continue;
            }
            if self.in_template {
                match c {
                    '\\' => {
                        chars.next();
                    }
                    '`' => self.in_template = false,
                    _ => {}
                }
                continue;
            }
            if let Some(q) = quote {
                if c == '\\' {
                    chars.next();
                } else if c == q {
                    quote = None;
                }
                continue;
            }
            match c {
                '/' if chars.peek() == Some(&'/') => break,
                '/' if chars.peek() == Some(&'*') => {
                    chars.next();
                    self.in_block_comment = true;
                }
                '\'' | '"' => quote = Some(c),
                '`' => self.in_template = true,
                '{' | '(' | '[' => self.open_bracket(&mut line_entry),
                '}' | ')' | ']' => self.close(&mut line_entry),
                _ => {}
            }
        }

        level
    }

    fn open_bracket(&mut self, line_entry: &mut bool) {
        match self.open.last_mut() {
            Some(count) if *line_entry => *count += 1,
            _ => {
                self.open.push(1);
                *line_entry = true;
            }
        }
    }

    fn close(&mut self, line_entry: &mut bool) {
        if let Some(count) = self.open.last_mut() {
            *count -= 1;
            if *count == 0 {
                self.open.pop();
                *line_entry = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Indent;

    fn format(source: &str) -> String {
        format_typescript(source, &FormatStyle::default())
    }

    #[test]
    fn test_reindents_by_depth() {
        let source = "export function Number(options) {\nreturn Type.Number(options)\n        }\n";
        assert_eq!(
            format(source),
            "export function Number(options) {\n  return Type.Number(options)\n}\n"
        );
    }

    #[test]
    fn test_jsdoc_alignment() {
        let source = "    /**\n* Creates a schema for a `Number` type.\n      */\nexport function Number() {}\n";
        assert_eq!(
            format(source),
            "/**\n * Creates a schema for a `Number` type.\n */\nexport function Number() {}\n"
        );
    }

    #[test]
    fn test_collapses_blank_lines() {
        let source = "\n\nconst a = 1\n\n\n\nconst b = 2\n\n\n";
        assert_eq!(format(source), "const a = 1\n\nconst b = 2\n");
    }

    #[test]
    fn test_drops_blank_lines_inside_brackets() {
        let source = "function f() {\n\n  run()\n\n}\n";
        assert_eq!(format(source), "function f() {\n  run()\n}\n");
    }

    #[test]
    fn test_ignores_brackets_in_strings_and_comments() {
        let source = "const a = '{'\nconst b = \"(\" // [\nconst c = 1 /* { */\nconst d = 2\n";
        assert_eq!(
            format(source),
            "const a = '{'\nconst b = \"(\" // [\nconst c = 1 /* { */\nconst d = 2\n"
        );
    }

    #[test]
    fn test_nested_brackets() {
        let source = "f({\na: [\n1,\n],\n})\n";
        assert_eq!(format(source), "f({\n  a: [\n    1,\n  ],\n})\n");
    }

    #[test]
    fn test_template_literal_lines_untouched() {
        let source = "const s = `\n    keep {\n`\nconst t = 1\n";
        assert_eq!(format(source), "const s = `\n    keep {\n`\nconst t = 1\n");
    }

    #[test]
    fn test_trailing_whitespace_stripped() {
        assert_eq!(format("const a = 1   \n"), "const a = 1\n");
    }

    #[test]
    fn test_custom_style() {
        let style = FormatStyle {
            indent: Indent::Spaces(4),
            line_ending: LineEnding::Crlf,
        };
        assert_eq!(
            format_typescript("if (x) {\ny()\n}", &style),
            "if (x) {\r\n    y()\r\n}\r\n"
        );
    }

    #[test]
    fn test_empty_source() {
        assert_eq!(format("\n\n"), "");
    }

    #[test]
    fn test_deterministic() {
        let source = "export function A() {\nreturn 1\n}\n\n\nexport function B() {\nreturn 2\n}\n";
        let once = format(source);
        assert_eq!(format(&once), once);
    }
}
