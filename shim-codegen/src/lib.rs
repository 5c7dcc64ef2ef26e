//! Builder method collection and wrapper module generation.
//!
//! - [`collect_methods`] merges method overloads into [`LogicalMethod`]s
//! - [`types`] holds the internal type vocabulary and the [`TypePatcher`]
//! - [`pipeline`] runs discovery, collection and vocabulary building
//! - [`Generator`] renders, formats and writes the module

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod collector;
mod config;
mod error;
mod generator;
mod method;
pub mod pipeline;
mod render;
pub mod types;

pub use collector::{Collection, collect_methods};
pub use config::GeneratorConfig;
pub use error::{Error, Result};
pub use generator::Generator;
pub use method::{LogicalMethod, MergedParameter};
pub use render::{DEFAULT_TEMPLATE, TemplateData, load_template, render_module};
pub use types::{InternalTypes, InternalTypesBuilder, TypePatcher};
