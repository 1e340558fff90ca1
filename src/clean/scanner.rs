//! Scanner that locates invisible characters without modifying the text.

use std::ops::Range;

use aho_corasick::AhoCorasick;

use crate::clean::charset::{INVISIBLE_CHARS, InvisibleChar};

/// One occurrence of an invisible character in scanned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HiddenCharacter {
    /// The table entry that matched.
    pub entry: &'static InvisibleChar,
    /// Byte range of the occurrence in the scanned text.
    pub location: Range<usize>,
}

/// Multi-pattern matcher over the invisible character table.
pub struct InvisibleScanner {
    matcher: AhoCorasick,
}

impl InvisibleScanner {
    /// Create a scanner covering every entry in [`INVISIBLE_CHARS`].
    pub fn new() -> Self {
        let patterns: Vec<String> = INVISIBLE_CHARS.iter().map(|e| e.ch.to_string()).collect();
        let matcher = AhoCorasick::new(&patterns).expect("Failed to build invisible char matcher");
        Self { matcher }
    }

    /// Find every invisible character in `text`, in order of appearance.
    pub fn scan(&self, text: &str) -> Vec<HiddenCharacter> {
        self.matcher
            .find_iter(text)
            .map(|mat| HiddenCharacter {
                entry: &INVISIBLE_CHARS[mat.pattern().as_usize()],
                location: mat.start()..mat.end(),
            })
            .collect()
    }
}

impl Default for InvisibleScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Count occurrences per character, in table order, skipping absent ones.
pub fn summarize(found: &[HiddenCharacter]) -> Vec<(&'static InvisibleChar, usize)> {
    INVISIBLE_CHARS
        .iter()
        .filter_map(|entry| {
            let count = found.iter().filter(|h| h.entry.ch == entry.ch).count();
            (count > 0).then_some((entry, count))
        })
        .collect()
}
