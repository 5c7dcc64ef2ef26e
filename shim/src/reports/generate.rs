//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from a generate run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Path of the generated module.
    pub output: PathBuf,
    pub builder_count: usize,
    pub method_count: usize,
    /// Rendered pipeline warnings.
    pub warnings: Vec<String>,
    pub result: GenerationResult,
}

#[derive(Debug)]
pub enum GenerationResult {
    /// The module was written to `output`.
    Written,
    /// Dry-run preview of the formatted module.
    Preview { content: String },
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        out.key_value("Builder classes", &self.builder_count.to_string());
        out.key_value("Methods", &self.method_count.to_string());

        match &self.result {
            GenerationResult::Written => {
                out.newline();
                out.key_value("Generated", &self.output.display().to_string());
            }
            GenerationResult::Preview { content } => {
                out.newline();
                out.divider(&self.output.display().to_string());
                out.preformatted(content);
                out.divider("Summary");
                out.preformatted(&format!(
                    "{} methods would be written to {}",
                    self.method_count,
                    self.output.display()
                ));
            }
        }
    }
}
