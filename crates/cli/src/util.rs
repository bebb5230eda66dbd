// Path: crates/cli/src/util.rs

use clap::Args;
use letters_cli::Settings;
use letters_types::app::SchemaVersion;
use letters_types::codec::OverflowPolicy;
use std::path::PathBuf;

/// Flags shared by every command that assembles a record.
#[derive(Args, Debug)]
pub struct AssemblyArgs {
    /// Path to the record JSON.
    #[clap(long)]
    pub record: PathBuf,
    /// Payload layout to assemble under (v1, v2 or v3). Overrides the config file.
    #[clap(long)]
    pub schema: Option<SchemaVersion>,
    /// Emit oversized integers uncut instead of failing. Overrides the config file.
    #[clap(long)]
    pub passthrough: bool,
    /// Path to a letters.toml config file.
    #[clap(long)]
    pub config: Option<PathBuf>,
}

impl AssemblyArgs {
    pub fn settings(&self) -> anyhow::Result<Settings> {
        let config = letters_cli::load_config(self.config.as_deref())?;
        let policy = self.passthrough.then_some(OverflowPolicy::Passthrough);
        Ok(Settings::resolve(config, self.schema, policy))
    }
}

/// Prints a labelled value with the labels aligned.
pub fn print_field(label: &str, value: &str) {
    println!("{:<20}{}", format!("{label}:"), value);
}
