//! Core operations.
//!
//! The work behind each command, separated from argument parsing and
//! output rendering.

pub mod generate;
pub mod list;

pub use generate::{GenerateOptions, generate};
pub use list::list;
