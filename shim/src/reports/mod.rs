//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod generate;
mod list;
mod output;

pub use generate::{GenerateReport, GenerationResult};
pub use list::{BuilderInfo, ListReport, MethodInfo};
pub use output::{Output, Report, TerminalOutput};
