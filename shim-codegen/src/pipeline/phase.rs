//! Pipeline phase trait.

use eyre::Result;

use super::GenerationContext;

/// Information about a pipeline phase.
#[derive(Debug, Clone)]
pub struct PhaseInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// A phase in the generation pipeline.
///
/// Phases run in order and read and extend the shared context. Non-fatal
/// issues are recorded as diagnostics instead of returned as errors.
pub trait Phase: Send + Sync {
    /// The name of this phase (used in diagnostics).
    fn name(&self) -> &'static str;

    /// A human-readable description of what this phase does.
    fn description(&self) -> &'static str;

    /// Run this phase on the generation context.
    fn run(&self, ctx: &mut GenerationContext) -> Result<()>;

    fn info(&self) -> PhaseInfo {
        PhaseInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}
