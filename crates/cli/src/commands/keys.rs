// Path: crates/cli/src/commands/keys.rs

use crate::util::print_field;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use letters_api::crypto::{SerializableKey, SigningKeyPair};
use letters_crypto::sign::eddsa::{Ed25519KeyPair, Ed25519PublicKey};

#[derive(Parser, Debug)]
pub struct KeysArgs {
    #[clap(subcommand)]
    pub command: KeysCommands,
}

#[derive(Subcommand, Debug)]
pub enum KeysCommands {
    /// Generate a new Ed25519 keypair.
    Generate,
    /// Inspect a public key (hex) to derive its Account ID.
    Inspect { hex_key: String },
}

pub fn run(args: KeysArgs) -> Result<()> {
    match args.command {
        KeysCommands::Generate => {
            let kp = Ed25519KeyPair::generate().context("Key generation failed")?;
            let public = kp.public_key();
            println!("--- New Ed25519 Identity ---");
            print_field("Private Key (Seed)", &hex::encode(kp.private_key().to_bytes()));
            print_field("Public Key", &hex::encode(public.to_bytes()));
            print_field("Account ID", &public.account_id().to_hex());
        }
        KeysCommands::Inspect { hex_key } => {
            let bytes = letters_cli::workflow::decode_hex(&hex_key)?;
            let public = Ed25519PublicKey::from_bytes(&bytes).context("Invalid public key")?;
            print_field("Account ID", &public.account_id().to_hex());
        }
    }
    Ok(())
}
