// Path: crates/cli/src/commands/sign.rs

use crate::util::{print_field, AssemblyArgs};
use anyhow::Result;
use clap::Parser;

#[derive(Parser, Debug)]
pub struct SignArgs {
    #[clap(flatten)]
    pub assembly: AssemblyArgs,
    /// The 32-byte Ed25519 seed, hex encoded.
    #[clap(long)]
    pub seed: String,
    /// Print the result as JSON.
    #[clap(long)]
    pub json: bool,
}

pub fn run(args: SignArgs) -> Result<()> {
    let settings = args.assembly.settings()?;
    let record = letters_cli::load_record(&args.assembly.record)?;
    let report = letters_cli::sign_with_seed(&record, &settings, &args.seed)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_field("Public Key", &report.public_key);
        print_field("Account ID", &report.account_id);
        print_field("Payload", &report.payload);
        print_field("Signature", &report.signature);
    }
    Ok(())
}
