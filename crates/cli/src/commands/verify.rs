// Path: crates/cli/src/commands/verify.rs

use crate::util::AssemblyArgs;
use anyhow::Result;
use clap::Parser;

#[derive(Parser, Debug)]
pub struct VerifyArgs {
    #[clap(flatten)]
    pub assembly: AssemblyArgs,
    /// The signer's Ed25519 public key, hex encoded.
    #[clap(long)]
    pub public_key: String,
    /// The 64-byte signature, hex encoded.
    #[clap(long)]
    pub signature: String,
}

pub fn run(args: VerifyArgs) -> Result<()> {
    let settings = args.assembly.settings()?;
    let record = letters_cli::load_record(&args.assembly.record)?;
    letters_cli::verify_with_key(&record, &settings, &args.public_key, &args.signature)?;
    println!("OK");
    Ok(())
}
