// Path: crates/cli/src/commands/cid.rs

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use letters_crypto::cid::{build_identifier, extract_digest};
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct CidArgs {
    #[clap(subcommand)]
    pub command: CidCommands,
}

#[derive(Subcommand, Debug)]
pub enum CidCommands {
    /// Print the raw SHA-256 digest inside an identifier.
    Digest { cid: String },
    /// Build the identifier for a 32-byte hex digest.
    Build { digest: String },
    /// Print the identifier a content store assigns to a file.
    Compute { file: PathBuf },
}

pub async fn run(args: CidArgs) -> Result<()> {
    match args.command {
        CidCommands::Digest { cid } => {
            let digest = extract_digest(&cid)
                .with_context(|| format!("Cannot read digest from {cid:?}"))?;
            println!("{}", hex::encode(digest));
        }
        CidCommands::Build { digest } => {
            let bytes = letters_cli::workflow::decode_hex(&digest)?;
            println!("{}", build_identifier(&bytes)?);
        }
        CidCommands::Compute { file } => {
            println!("{}", letters_cli::identifier_for_file(&file).await?);
        }
    }
    Ok(())
}
