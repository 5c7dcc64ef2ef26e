//! Generation pipeline.
//!
//! The [`Pipeline`] runs the discovery phases over a loaded program and
//! leaves everything the generator renders in a [`GenerationContext`]:
//!
//! - [`phases::DiscoverPhase`] selects the builder classes
//! - [`phases::CollectPhase`] groups their methods into logical methods
//! - [`phases::VocabularyPhase`] builds the internal type vocabulary
//!
//! Soft conditions (no builder found, no `Options` type found) are
//! recorded as [`Diagnostic`]s; only fatal problems abort the run.
//!
//! ```ignore
//! let ctx = Pipeline::new().run(GenerationContext::new(config, program))?;
//! for diag in ctx.warnings() {
//!     eprintln!("{diag}");
//! }
//! let generator = Generator::from_context(ctx)?;
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod runner;

pub use context::GenerationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::{Phase, PhaseInfo};
pub use runner::Pipeline;
