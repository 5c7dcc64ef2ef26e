use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use typeshim_manifest::ShimToml;

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to typeshim.toml
    #[arg(short, long, default_value = "typeshim.toml")]
    pub config: PathBuf,

    /// Output file (overrides output.path)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Template file (overrides output.template)
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Print the generated module instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let shim_toml = ShimToml::open(&self.config).unwrap_or_exit();

        let report = ops::generate(
            shim_toml.manifest(),
            GenerateOptions {
                output: self.output.clone(),
                template: self.template.clone(),
                dry_run: self.dry_run,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
