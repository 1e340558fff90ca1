//! Invisible character cleaner.
//!
//! Removes zero-width, bidi-control and other invisible code points that AI
//! tools embed in generated text, then recomposes the result to NFC.

mod charset;
mod scanner;

pub use charset::{INVISIBLE_CHARS, InvisibleChar, is_invisible, lookup};
pub use scanner::{HiddenCharacter, InvisibleScanner, summarize};

use std::sync::LazyLock;

use unicode_normalization::UnicodeNormalization;

static SCANNER: LazyLock<InvisibleScanner> = LazyLock::new(InvisibleScanner::new);

/// Result of cleaning text with a report of what was removed.
#[derive(Debug, Clone)]
pub struct CleanedOutput {
    /// The cleaned, NFC-normalized content.
    pub content: String,
    /// Every invisible character found in the input.
    pub removed: Vec<HiddenCharacter>,
    /// Whether cleaning changed the text at all (removal or recomposition).
    pub was_modified: bool,
}

/// Remove every invisible character from `text` and normalize to NFC.
pub fn clean(text: &str) -> String {
    text.chars().filter(|c| !is_invisible(*c)).nfc().collect()
}

/// Like [`clean`], but also reports the invisible characters that were found.
pub fn clean_with_report(text: &str) -> CleanedOutput {
    let removed = SCANNER.scan(text);
    let content = clean(text);
    let was_modified = content != text;

    tracing::debug!(
        removed = removed.len(),
        input_chars = text.chars().count(),
        output_chars = content.chars().count(),
        "Cleaned text"
    );

    CleanedOutput {
        content,
        removed,
        was_modified,
    }
}
