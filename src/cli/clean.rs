//! `clean` command: strip invisible characters from pasted text.

use std::io::Write;

use clap::{ArgAction, Args};
use clap::builder::BoolishValueParser;

use crate::clean::{clean_with_report, summarize};
use crate::config::{Config, DEFAULT_CHAR_LIMIT};
use crate::io::TextChannel;

#[derive(Args, Debug, Clone, Default)]
pub struct CleanArgs {
    /// Read from and write to the system clipboard
    #[arg(
        short,
        long,
        env = "PASTEWASH_CLIPBOARD",
        action = ArgAction::SetTrue,
        value_parser = BoolishValueParser::new(),
    )]
    pub clipboard: bool,

    /// Show the character count and warn when over the limit
    #[arg(
        long,
        env = "PASTEWASH_COUNT",
        action = ArgAction::SetTrue,
        value_parser = BoolishValueParser::new(),
    )]
    pub count: bool,

    /// List the hidden characters that were removed
    #[arg(
        long,
        env = "PASTEWASH_SHOW_REMOVED",
        action = ArgAction::SetTrue,
        value_parser = BoolishValueParser::new(),
    )]
    pub show_removed: bool,
}

/// Character count of cleaned output against the configured limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountReport {
    pub count: usize,
    pub limit: usize,
}

impl CountReport {
    pub fn new(text: &str, limit: usize) -> Self {
        Self {
            count: text.chars().count(),
            limit,
        }
    }

    /// How far the count is over the limit, if it is.
    pub fn excess(&self) -> Option<usize> {
        self.count.checked_sub(self.limit).filter(|over| *over > 0)
    }

    fn write_to(&self, err: &mut dyn Write) -> std::io::Result<()> {
        writeln!(err, "\n---\nCharacter count: {}", self.count)?;
        if let Some(over) = self.excess() {
            if self.limit == DEFAULT_CHAR_LIMIT {
                writeln!(
                    err,
                    "WARNING: Exceeds LinkedIn's {} character limit by {}",
                    self.limit, over
                )?;
            } else {
                writeln!(
                    err,
                    "WARNING: Exceeds the {} character limit by {}",
                    self.limit, over
                )?;
            }
        }
        Ok(())
    }
}

/// Run the cleaner over `channel`.
///
/// Status lines go to `out`, the count report and removal summary to `err`.
pub fn run_clean(
    args: &CleanArgs,
    config: &Config,
    channel: &mut dyn TextChannel,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> anyhow::Result<()> {
    let text = channel.read_text()?;
    let cleaned = clean_with_report(&text);

    tracing::debug!(
        channel = channel.name(),
        removed = cleaned.removed.len(),
        "Writing cleaned text"
    );
    channel.write_text(&cleaned.content)?;

    if args.clipboard {
        writeln!(
            out,
            "Cleaned text copied to clipboard ({} characters)",
            cleaned.content.chars().count()
        )?;
    }

    if args.show_removed {
        let summary = summarize(&cleaned.removed);
        if summary.is_empty() {
            writeln!(err, "No hidden characters found")?;
        }
        for (entry, count) in summary {
            writeln!(
                err,
                "Removed {} x {} {}",
                count,
                entry.code_point(),
                entry.name
            )?;
        }
    }

    if args.count {
        CountReport::new(&cleaned.content, config.char_limit).write_to(err)?;
    }

    Ok(())
}
