//! Pipeline orchestrator.

use eyre::Result;

use super::{
    GenerationContext, Phase,
    phases::{CollectPhase, DiscoverPhase, VocabularyPhase},
};

/// The generation pipeline orchestrator.
///
/// Runs the built-in phases (discover, collect, vocabulary) followed by any
/// added phases.
///
/// ```ignore
/// let ctx = Pipeline::new().phase(MyPhase).run(ctx)?;
/// ```
pub struct Pipeline {
    phases: Vec<Box<dyn Phase>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self { phases: Vec::new() }
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Run every phase in order.
    ///
    /// # Errors
    ///
    /// Returns an error if any phase fails fatally.
    pub fn run(&self, mut ctx: GenerationContext) -> Result<GenerationContext> {
        let builtin_phases: Vec<Box<dyn Phase>> = vec![
            Box::new(DiscoverPhase),
            Box::new(CollectPhase),
            Box::new(VocabularyPhase),
        ];

        for phase in builtin_phases.iter().chain(self.phases.iter()) {
            tracing::debug!(phase = phase.name(), "running phase");
            phase.run(&mut ctx)?;
        }

        Ok(ctx)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
