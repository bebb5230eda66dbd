// Path: crates/cli/src/commands/payload.rs

use crate::util::AssemblyArgs;
use anyhow::Result;
use clap::Parser;

#[derive(Parser, Debug)]
pub struct PayloadArgs {
    #[clap(flatten)]
    pub assembly: AssemblyArgs,
    /// Also print each field's byte range.
    #[clap(long)]
    pub explain: bool,
}

pub fn run(args: PayloadArgs) -> Result<()> {
    let settings = args.assembly.settings()?;
    let record = letters_cli::load_record(&args.assembly.record)?;
    let payload = letters_cli::assemble(&record, &settings)?;
    tracing::debug!(
        kind = record.kind(),
        schema = %settings.schema,
        len = payload.bytes.len(),
        "assembled payload"
    );

    if args.explain {
        print!("{}", letters_cli::explain(&payload));
    }
    println!("{}", hex::encode(&payload.bytes));
    Ok(())
}
