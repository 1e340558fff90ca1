use clap::Parser;

use pastewash::cli::{self, Cli};

fn main() -> anyhow::Result<()> {
    cli::init_tracing();
    let cli = Cli::parse();
    cli::run(cli.command)
}
