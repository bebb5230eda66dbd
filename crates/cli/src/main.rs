// Path: crates/cli/src/main.rs
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::unimplemented,
        clippy::todo,
        clippy::indexing_slicing
    )
)]

//! # Letters CLI
//!
//! Assembles the exact bytes a referee or worker signs, signs and verifies them,
//! and converts between content identifiers and on-chain digests.

use anyhow::Result;
use clap::{Parser, Subcommand};
use letters_telemetry::{init_tracing, ScopeTimer};

// Import command modules
mod commands;
mod util;

use commands::*;

#[derive(Parser, Debug)]
#[clap(
    name = "letters",
    version,
    about = "Payload, signing and content identifier tools for recommendation letters.",
    long_about = "Builds the canonical byte payloads that referees and workers sign, signs them with Ed25519, and converts letter-text identifiers to and from the digests stored on-chain."
)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    // --- Payloads ---
    /// Assemble the signable payload of a record.
    Payload(payload::PayloadArgs),

    /// Sign the payload of a record with an Ed25519 seed.
    Sign(sign::SignArgs),

    /// Verify an Ed25519 signature over the payload of a record.
    Verify(verify::VerifyArgs),

    // --- Tools ---
    /// Convert between content identifiers and SHA-256 digests.
    Cid(cid::CidArgs),

    /// Manage Ed25519 signing keys.
    Keys(keys::KeysArgs),

    /// Generate configuration files.
    Config(config::ConfigCmdArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing()?;

    match cli.command {
        Commands::Payload(args) => {
            let _timer = ScopeTimer::new("payload");
            payload::run(args)
        }
        Commands::Sign(args) => {
            let _timer = ScopeTimer::new("sign");
            sign::run(args)
        }
        Commands::Verify(args) => {
            let _timer = ScopeTimer::new("verify");
            verify::run(args)
        }
        Commands::Cid(args) => {
            let _timer = ScopeTimer::new("cid");
            cid::run(args).await
        }
        Commands::Keys(args) => keys::run(args),
        Commands::Config(args) => config::run(args),
    }
}
