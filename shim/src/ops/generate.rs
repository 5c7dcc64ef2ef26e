//! Generate operation - renders and writes the wrapper module.

use std::path::PathBuf;

use eyre::{Context, Result};
use typeshim_codegen::{Generator, GeneratorConfig};
use typeshim_core::FormatStyle;
use typeshim_manifest::Manifest;

use crate::reports::{GenerateReport, GenerationResult};

/// Command line overrides for the generate operation.
#[derive(Debug, Default)]
pub struct GenerateOptions {
    /// Output file, replacing `output.path`.
    pub output: Option<PathBuf>,
    /// Template file, replacing `output.template`.
    pub template: Option<PathBuf>,
    /// Render without writing.
    pub dry_run: bool,
}

/// Execute the generate operation.
pub fn generate(manifest: &Manifest, opts: GenerateOptions) -> Result<GenerateReport> {
    let mut config = GeneratorConfig::from(manifest);
    if let Some(template) = opts.template {
        config = config.with_template(template);
    }
    let output = opts.output.unwrap_or_else(|| manifest.output.path.clone());

    let generator = Generator::new(config).wrap_err("Failed to load declaration sources")?;
    tracing::info!(
        builders = generator.builders().len(),
        methods = generator.methods().len(),
        "generator ready"
    );

    let result = if opts.dry_run {
        let content = generator
            .output(&FormatStyle::for_output(&output))
            .wrap_err("Failed to render module")?;
        GenerationResult::Preview { content }
    } else {
        generator
            .write_to_file(&output)
            .wrap_err_with(|| format!("Failed to write {}", output.display()))?;
        GenerationResult::Written
    };

    Ok(GenerateReport {
        output,
        builder_count: generator.builders().len(),
        method_count: generator.methods().len(),
        warnings: generator.warnings().map(|d| d.to_string()).collect(),
        result,
    })
}
