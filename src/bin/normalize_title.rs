//! Normalize fancy Unicode text to plain ASCII.
//!
//! ```text
//! echo "𝘽𝙤𝙤𝙠𝙞𝙣𝙜.𝙘𝙤𝙢" | normalize-title
//! normalize-title --clipboard --extract-title
//! ```

use clap::Parser;

use pastewash::cli::{self, Command, NormalizeArgs};

#[derive(Parser, Debug)]
#[command(name = "normalize-title", version, about = "Normalize fancy Unicode to plain text")]
struct Args {
    #[command(flatten)]
    normalize: NormalizeArgs,
}

fn main() -> anyhow::Result<()> {
    cli::init_tracing();
    let args = Args::parse();
    cli::run(Command::Normalize(args.normalize))
}
