//! List command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

#[derive(Debug)]
pub struct ListReport {
    pub builders: Vec<BuilderInfo>,
    pub methods: Vec<MethodInfo>,
    pub warnings: Vec<String>,
}

#[derive(Debug)]
pub struct BuilderInfo {
    pub name: String,
    pub source: PathBuf,
    /// Number of method members, overloads included.
    pub methods: usize,
}

#[derive(Debug)]
pub struct MethodInfo {
    pub name: String,
    /// Merged parameter list.
    pub parameters: String,
    pub overloads: usize,
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        if self.builders.is_empty() {
            out.preformatted("No builder classes found");
            return;
        }

        out.section(&format!("Builder classes ({})", self.builders.len()));
        for builder in &self.builders {
            out.list_item(&format!(
                "{} ({}, {} methods)",
                builder.name,
                builder.source.display(),
                builder.methods
            ));
        }

        out.newline();
        out.section(&format!("Methods ({})", self.methods.len()));
        for method in &self.methods {
            let overloads = match method.overloads {
                1 => String::new(),
                n => format!(" [{} overloads]", n),
            };
            out.list_item(&format!("{}({}){}", method.name, method.parameters, overloads));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    #[test]
    fn test_render_list() {
        let report = ListReport {
            builders: vec![BuilderInfo {
                name: "JsonTypeBuilder".into(),
                source: PathBuf::from("json.d.ts"),
                methods: 3,
            }],
            methods: vec![
                MethodInfo {
                    name: "Number".into(),
                    parameters: "options".into(),
                    overloads: 1,
                },
                MethodInfo {
                    name: "Object".into(),
                    parameters: "properties, options".into(),
                    overloads: 2,
                },
            ],
            warnings: Vec::new(),
        };
        let mut out = RecordingOutput::default();

        report.render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "Builder classes (1):",
                "  - JsonTypeBuilder (json.d.ts, 3 methods)",
                "",
                "Methods (2):",
                "  - Number(options)",
                "  - Object(properties, options) [2 overloads]",
            ]
        );
    }

    #[test]
    fn test_render_empty() {
        let report = ListReport {
            builders: Vec::new(),
            methods: Vec::new(),
            warnings: vec!["warning: no builder classes found".into()],
        };
        let mut out = RecordingOutput::default();

        report.render(&mut out);

        assert_eq!(
            out.lines,
            vec!["warning: no builder classes found", "No builder classes found"]
        );
    }
}
