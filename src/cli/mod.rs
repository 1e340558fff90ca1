//! Command-line surface for both tools.
//!
//! `pastewash clean` and `pastewash normalize` share these definitions with
//! the standalone `clean-paste` and `normalize-title` binaries.

mod clean;
mod normalize;

pub use clean::{CleanArgs, CountReport, run_clean};
pub use normalize::{NormalizeArgs, run_normalize};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::io::{Clipboard, Stdio, TextChannel};

#[derive(Parser, Debug)]
#[command(name = "pastewash", version, about = "Clean up text pasted out of AI tools")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Remove invisible characters and normalize to NFC
    Clean(CleanArgs),

    /// Convert fancy Unicode letters (bold, italic, monospace...) to plain text
    Normalize(NormalizeArgs),
}

/// Install the stderr log subscriber. `RUST_LOG` overrides the `warn` default.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Open the clipboard or standard streams.
pub fn open_channel(clipboard: bool) -> anyhow::Result<Box<dyn TextChannel>> {
    if clipboard {
        Ok(Box::new(Clipboard::open()?))
    } else {
        Ok(Box::new(Stdio))
    }
}

/// Run a parsed command against the real process environment.
pub fn run(command: Command) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();

    match command {
        Command::Clean(args) => {
            let config = if args.count {
                Config::from_env_or_default()
            } else {
                Config::default()
            };
            let mut channel = open_channel(args.clipboard)?;
            run_clean(
                &args,
                &config,
                channel.as_mut(),
                &mut stdout.lock(),
                &mut stderr.lock(),
            )
        }
        Command::Normalize(args) => {
            let mut channel = open_channel(args.clipboard)?;
            run_normalize(&args, channel.as_mut(), &mut stdout.lock())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_clean_flags() {
        let cli = Cli::try_parse_from(["pastewash", "clean", "-c", "--count"]).unwrap();
        match cli.command {
            Command::Clean(args) => {
                assert!(args.clipboard);
                assert!(args.count);
                assert!(!args.show_removed);
            }
            other => panic!("expected clean, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_normalize_flags() {
        let cli = Cli::try_parse_from(["pastewash", "normalize", "-t"]).unwrap();
        match cli.command {
            Command::Normalize(args) => {
                assert!(args.extract_title);
                assert!(!args.clipboard);
            }
            other => panic!("expected normalize, got {:?}", other),
        }
    }

    #[test]
    fn test_requires_subcommand() {
        assert!(Cli::try_parse_from(["pastewash"]).is_err());
    }
}
