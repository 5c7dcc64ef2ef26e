//! Vocabulary phase - builds the internal type vocabulary.

use eyre::{Result, eyre};

use crate::{
    InternalTypesBuilder,
    pipeline::{Diagnostic, GenerationContext, Phase},
};

/// Phase that builds the one immutable internal type vocabulary.
///
/// Seeds, configured extras, `Options` types found in the root sources and
/// the `T`-prefixed type of every method are registered, then frozen. It
/// must run after `CollectPhase`.
pub struct VocabularyPhase;

impl Phase for VocabularyPhase {
    fn name(&self) -> &'static str {
        "vocabulary"
    }

    fn description(&self) -> &'static str {
        "Build the internal type vocabulary"
    }

    fn run(&self, ctx: &mut GenerationContext) -> Result<()> {
        let methods = ctx
            .methods
            .as_ref()
            .ok_or_else(|| eyre!("methods not set - VocabularyPhase must run after CollectPhase"))?;

        let mut builder = InternalTypesBuilder::with_base();
        builder.extend(ctx.config.internal_types.iter().cloned());

        let options_found: usize = ctx
            .program
            .sources()
            .iter()
            .map(|source| builder.scan_options(source.text()))
            .sum();

        let namespace = ctx.config.namespace.as_str();
        let mut shadowed = Vec::new();
        for method in methods {
            builder.derive_from_method(method.name());
            if method
                .overloads()
                .iter()
                .any(|o| o.declares_type_parameter(namespace))
            {
                shadowed.push(method.name().to_string());
            }
        }

        tracing::info!(
            tokens = builder.len(),
            options = options_found,
            "built internal type vocabulary"
        );
        let types = builder.build()?;

        for name in shadowed {
            tracing::warn!(method = %name, "type parameter shadows the namespace");
            let message = format!(
                "a type parameter named '{}' shadows the namespace; qualified types in this method will not resolve",
                ctx.config.namespace
            );
            ctx.add_diagnostic(Diagnostic::warning(self.name(), message).at(name));
        }
        if options_found == 0 {
            ctx.add_info(self.name(), "no Options types found in the declaration sources");
        }
        ctx.internal_types = Some(types);
        Ok(())
    }
}
