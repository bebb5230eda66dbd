// Path: crates/cli/src/commands/config.rs

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct ConfigCmdArgs {
    #[clap(subcommand)]
    pub command: ConfigSubCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubCommands {
    /// Write a letters.toml with the default settings.
    New {
        #[clap(long, default_value = "letters.toml")]
        out: PathBuf,
        /// Overwrite an existing file.
        #[clap(long)]
        force: bool,
    },
}

pub fn run(args: ConfigCmdArgs) -> Result<()> {
    match args.command {
        ConfigSubCommands::New { out, force } => {
            if out.exists() && !force {
                bail!("{} already exists; pass --force to overwrite", out.display());
            }
            letters_cli::write_default_config(&out)?;
            println!("Wrote {}", out.display());
        }
    }
    Ok(())
}
