//! Discover phase - selects the builder classes.

use eyre::Result;
use typeshim_declarations::builder_classes;

use crate::pipeline::{Diagnostic, GenerationContext, Phase};

/// Phase that selects the allow-listed classes declared at the top level
/// of the root sources.
pub struct DiscoverPhase;

impl Phase for DiscoverPhase {
    fn name(&self) -> &'static str {
        "discover"
    }

    fn description(&self) -> &'static str {
        "Select builder classes from the declaration sources"
    }

    fn run(&self, ctx: &mut GenerationContext) -> Result<()> {
        let builders = builder_classes(&ctx.program, &ctx.config.builders);

        let missing: Vec<String> = ctx
            .config
            .builders
            .iter()
            .filter(|name| !builders.iter().any(|b| &b.name == *name))
            .cloned()
            .collect();
        for name in missing {
            tracing::warn!(builder = %name, "builder class not found");
            ctx.add_diagnostic(
                Diagnostic::warning(self.name(), "builder class not found in any source").at(name),
            );
        }

        if builders.is_empty() {
            ctx.add_warning(
                self.name(),
                "no builder classes found, the generated module will be empty",
            );
        }

        ctx.builders = Some(builders);
        Ok(())
    }
}
