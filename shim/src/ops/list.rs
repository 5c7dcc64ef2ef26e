//! List operation - reports builders and methods without writing.

use eyre::{Context, Result};
use typeshim_codegen::{Generator, GeneratorConfig};
use typeshim_manifest::Manifest;

use crate::reports::{BuilderInfo, ListReport, MethodInfo};

pub fn list(manifest: &Manifest) -> Result<ListReport> {
    let generator = Generator::new(GeneratorConfig::from(manifest))
        .wrap_err("Failed to load declaration sources")?;

    let builders = generator
        .builders()
        .iter()
        .map(|b| BuilderInfo {
            name: b.name.clone(),
            source: b.source.clone(),
            methods: b.methods().count(),
        })
        .collect();

    let methods = generator
        .methods()
        .iter()
        .map(|m| MethodInfo {
            name: m.name().to_string(),
            parameters: m.parameter_list(),
            overloads: m.overloads().len(),
        })
        .collect();

    Ok(ListReport {
        builders,
        methods,
        warnings: generator.warnings().map(|d| d.to_string()).collect(),
    })
}
