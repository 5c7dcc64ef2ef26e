//! Collect phase - groups builder methods into logical methods.

use eyre::{Result, eyre};

use crate::{
    collect_methods,
    pipeline::{Diagnostic, GenerationContext, Phase},
};

pub struct CollectPhase;

impl Phase for CollectPhase {
    fn name(&self) -> &'static str {
        "collect"
    }

    fn description(&self) -> &'static str {
        "Merge builder method overloads into logical methods"
    }

    fn run(&self, ctx: &mut GenerationContext) -> Result<()> {
        let builders = ctx
            .builders
            .as_ref()
            .ok_or_else(|| eyre!("builder classes not set - CollectPhase must run after DiscoverPhase"))?;

        let collection = collect_methods(builders);
        for name in collection.skipped {
            ctx.add_diagnostic(
                Diagnostic::warning(self.name(), "method has no usable declarations").at(name),
            );
        }

        ctx.methods = Some(collection.methods);
        Ok(())
    }
}
