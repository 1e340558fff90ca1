//! Remove AI invisible characters from text.
//!
//! ```text
//! echo "text with invisible chars" | clean-paste
//! clean-paste --clipboard --count
//! ```

use clap::Parser;

use pastewash::cli::{self, CleanArgs, Command};

#[derive(Parser, Debug)]
#[command(name = "clean-paste", version, about = "Remove AI invisible characters from text")]
struct Args {
    #[command(flatten)]
    clean: CleanArgs,
}

fn main() -> anyhow::Result<()> {
    cli::init_tracing();
    let args = Args::parse();
    cli::run(Command::Clean(args.clean))
}
