//! Generation context passed through pipeline phases.

use eyre::{Result, eyre};
use typeshim_declarations::{BuilderClass, Program};

use super::diagnostic::{Diagnostic, Severity};
use crate::{GeneratorConfig, InternalTypes, LogicalMethod};

/// State of one generation run, filled in phase by phase.
#[derive(Debug)]
pub struct GenerationContext {
    pub config: GeneratorConfig,
    /// The loaded declaration sources.
    pub program: Program,
    /// Builder classes (populated by DiscoverPhase).
    pub builders: Option<Vec<BuilderClass>>,
    /// Logical methods sorted by name (populated by CollectPhase).
    pub methods: Option<Vec<LogicalMethod>>,
    /// Frozen internal type vocabulary (populated by VocabularyPhase).
    pub internal_types: Option<InternalTypes>,
    pub diagnostics: Vec<Diagnostic>,
}

impl GenerationContext {
    pub fn new(config: GeneratorConfig, program: Program) -> Self {
        Self {
            config,
            program,
            builders: None,
            methods: None,
            internal_types: None,
            diagnostics: Vec::new(),
        }
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn add_warning(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(phase, message));
    }

    pub fn add_info(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::info(phase, message));
    }

    /// Add a diagnostic with a location.
    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }

    /// Take the builder classes out of the context.
    pub fn take_builders(&mut self) -> Result<Vec<BuilderClass>> {
        self.builders
            .take()
            .ok_or_else(|| eyre!("builder classes not set - did DiscoverPhase run?"))
    }

    /// Take the logical methods out of the context.
    pub fn take_methods(&mut self) -> Result<Vec<LogicalMethod>> {
        self.methods
            .take()
            .ok_or_else(|| eyre!("methods not set - did CollectPhase run?"))
    }

    /// Take the internal type vocabulary out of the context.
    pub fn take_internal_types(&mut self) -> Result<InternalTypes> {
        self.internal_types
            .take()
            .ok_or_else(|| eyre!("internal types not set - did VocabularyPhase run?"))
    }
}
