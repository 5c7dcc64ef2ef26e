//! Generator facade.

use std::path::Path;

use typeshim_core::{FormatStyle, OutputFile, format_typescript};
use typeshim_declarations::{BuilderClass, Program};

use crate::{
    Error, GeneratorConfig, InternalTypes, LogicalMethod, Result, TemplateData, TypePatcher,
    pipeline::{Diagnostic, GenerationContext, Pipeline},
    render::{load_template, render_module},
};

/// Generates the builder wrapper module.
///
/// Construction loads the declaration sources and runs the pipeline; the
/// discovered builders and methods are fixed from then on.
///
/// ```ignore
/// let generator = Generator::new(GeneratorConfig::from(&manifest))?;
/// println!("{} methods", generator.methods().len());
/// generator.write_to_file("src/builders.ts")?;
/// ```
#[derive(Debug)]
pub struct Generator {
    config: GeneratorConfig,
    program: Program,
    builders: Vec<BuilderClass>,
    methods: Vec<LogicalMethod>,
    internal_types: InternalTypes,
    diagnostics: Vec<Diagnostic>,
}

impl Generator {
    /// Load the configured sources and run the pipeline.
    ///
    /// Fails with [`Error::SourceLoad`] if a source is missing or unparsable.
    pub fn new(config: GeneratorConfig) -> eyre::Result<Self> {
        let program = Program::load(&config.files).map_err(Error::from)?;
        Self::from_program(config, program)
    }

    /// Run the pipeline over an already loaded program.
    pub fn from_program(config: GeneratorConfig, program: Program) -> eyre::Result<Self> {
        let ctx = Pipeline::new().run(GenerationContext::new(config, program))?;
        Self::from_context(ctx)
    }

    /// Build a generator from a context the pipeline has run on.
    pub fn from_context(mut ctx: GenerationContext) -> eyre::Result<Self> {
        Ok(Self {
            builders: ctx.take_builders()?,
            methods: ctx.take_methods()?,
            internal_types: ctx.take_internal_types()?,
            config: ctx.config,
            program: ctx.program,
            diagnostics: ctx.diagnostics,
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    /// Builder classes, in discovery order.
    pub fn builders(&self) -> &[BuilderClass] {
        &self.builders
    }

    /// Logical methods, sorted by name.
    pub fn methods(&self) -> &[LogicalMethod] {
        &self.methods
    }

    pub fn internal_types(&self) -> &InternalTypes {
        &self.internal_types
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity.is_warning())
    }

    pub fn patcher(&self) -> TypePatcher<'_> {
        TypePatcher::new(&self.internal_types, &self.config.namespace)
    }

    /// Per-method template data, in method order.
    pub fn template_data(&self) -> Vec<TemplateData> {
        let patcher = self.patcher();
        self.methods
            .iter()
            .map(|method| TemplateData::new(method, &patcher))
            .collect()
    }

    /// Render the module template without formatting.
    pub fn render(&self) -> Result<String> {
        let template = load_template(self.config.template.as_deref())?;
        render_module(
            &template,
            &self.template_data(),
            &self.config.namespace,
            &self.config.module,
        )
    }

    /// Render and format the module.
    pub fn output(&self, style: &FormatStyle) -> Result<String> {
        Ok(format_typescript(&self.render()?, style))
    }

    /// Render, format and write the module to `path`, replacing any
    /// existing file.
    ///
    /// The formatting style is discovered with [`FormatStyle::for_output`].
    /// Parent directories are not created.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = self.output(&FormatStyle::for_output(path))?;

        OutputFile::new(path, content)
            .write()
            .map_err(|source| Error::Write {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::info!(path = %path.display(), methods = self.methods.len(), "wrote module");
        Ok(())
    }
}
