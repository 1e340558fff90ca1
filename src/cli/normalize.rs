//! `normalize` command: turn styled Unicode letters back into ASCII.

use std::io::Write;

use clap::{ArgAction, Args};
use clap::builder::BoolishValueParser;

use crate::io::TextChannel;
use crate::normalize::{normalize_text, normalize_title};

#[derive(Args, Debug, Clone, Default)]
pub struct NormalizeArgs {
    /// Read from and write to the system clipboard
    #[arg(
        short,
        long,
        env = "PASTEWASH_CLIPBOARD",
        action = ArgAction::SetTrue,
        value_parser = BoolishValueParser::new(),
    )]
    pub clipboard: bool,

    /// Extract and normalize just the title from a post
    #[arg(
        short = 't',
        long,
        env = "PASTEWASH_EXTRACT_TITLE",
        action = ArgAction::SetTrue,
        value_parser = BoolishValueParser::new(),
    )]
    pub extract_title: bool,
}

/// Run the normalizer over `channel`, writing status lines to `out`.
pub fn run_normalize(
    args: &NormalizeArgs,
    channel: &mut dyn TextChannel,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let text = channel.read_text()?;

    let normalized = if args.extract_title {
        normalize_title(&text)
    } else {
        normalize_text(&text)
    };

    tracing::debug!(
        channel = channel.name(),
        extract_title = args.extract_title,
        chars = normalized.chars().count(),
        "Writing normalized text"
    );
    channel.write_text(&normalized)?;

    if args.clipboard {
        writeln!(out, "Normalized text copied to clipboard")?;
        writeln!(out, "Result: {}", normalized)?;
    }

    Ok(())
}
