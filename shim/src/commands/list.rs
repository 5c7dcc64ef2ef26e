use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use typeshim_manifest::ShimToml;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ListCommand {
    /// Path to typeshim.toml
    #[arg(short, long, default_value = "typeshim.toml")]
    pub config: PathBuf,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let shim_toml = ShimToml::open(&self.config).unwrap_or_exit();
        let report = ops::list(shim_toml.manifest())?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
