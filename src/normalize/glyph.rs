//! Mapping of styled mathematical alphanumerics back to plain ASCII.

use unicode_normalization::UnicodeNormalization;

/// A contiguous run of styled code points that maps linearly onto an ASCII run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphRange {
    /// First code point of the run (inclusive).
    pub start: u32,
    /// End of the run (exclusive).
    pub end: u32,
    /// ASCII character that `start` maps to.
    pub base: char,
    /// Style name of the run, e.g. `"sans-serif bold"`.
    pub style: &'static str,
}

impl GlyphRange {
    const fn new(start: u32, end: u32, base: char, style: &'static str) -> Self {
        Self {
            start,
            end,
            base,
            style,
        }
    }

    /// Whether `code` falls inside this run.
    pub fn contains(&self, code: u32) -> bool {
        (self.start..self.end).contains(&code)
    }

    /// Map a code point inside this run to its ASCII equivalent.
    pub fn map(&self, code: u32) -> Option<char> {
        if !self.contains(code) {
            return None;
        }
        char::from_u32(self.base as u32 + (code - self.start))
    }
}

/// Styled alphanumeric runs from the Mathematical Alphanumeric Symbols block.
///
/// Runs are disjoint; lookup takes the first match.
pub static GLYPH_RANGES: &[GlyphRange] = &[
    GlyphRange::new(0x1D400, 0x1D41A, 'A', "bold"),
    GlyphRange::new(0x1D41A, 0x1D434, 'a', "bold"),
    GlyphRange::new(0x1D434, 0x1D44E, 'A', "italic"),
    GlyphRange::new(0x1D44E, 0x1D468, 'a', "italic"),
    GlyphRange::new(0x1D468, 0x1D482, 'A', "bold italic"),
    GlyphRange::new(0x1D482, 0x1D49C, 'a', "bold italic"),
    // Sans-serif bold italic is what ChatGPT reaches for most often.
    GlyphRange::new(0x1D63C, 0x1D656, 'A', "sans-serif bold italic"),
    GlyphRange::new(0x1D656, 0x1D670, 'a', "sans-serif bold italic"),
    GlyphRange::new(0x1D5D4, 0x1D5EE, 'A', "sans-serif bold"),
    GlyphRange::new(0x1D5EE, 0x1D608, 'a', "sans-serif bold"),
    GlyphRange::new(0x1D608, 0x1D622, 'A', "sans-serif italic"),
    GlyphRange::new(0x1D622, 0x1D63C, 'a', "sans-serif italic"),
    GlyphRange::new(0x1D670, 0x1D68A, 'A', "monospace"),
    GlyphRange::new(0x1D68A, 0x1D6A4, 'a', "monospace"),
    GlyphRange::new(0x1D7CE, 0x1D7D8, '0', "bold"),
    GlyphRange::new(0x1D7D8, 0x1D7E2, '0', "double-struck"),
    GlyphRange::new(0x1D7EC, 0x1D7F6, '0', "sans-serif bold"),
    GlyphRange::new(0x1D7F6, 0x1D800, '0', "monospace"),
];

fn find_range(c: char) -> Option<&'static GlyphRange> {
    let code = c as u32;
    GLYPH_RANGES.iter().find(|range| range.contains(code))
}

/// Style name of the run containing `c`, if it is a known styled glyph.
pub fn glyph_style(c: char) -> Option<&'static str> {
    find_range(c).map(|range| range.style)
}

/// Convert one character to plain ASCII where possible.
///
/// Known styled glyphs map through [`GLYPH_RANGES`]. Anything else goes
/// through NFKD with non-ASCII code points dropped; if nothing is left the
/// character is returned unchanged, so emoji and CJK pass through.
pub fn normalize_char(c: char) -> String {
    let mut out = String::new();
    push_normalized(&mut out, c);
    out
}

/// Convert every character of `text` with [`normalize_char`].
pub fn normalize_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        push_normalized(&mut out, c);
    }
    out
}

fn push_normalized(out: &mut String, c: char) {
    if c.is_ascii() {
        out.push(c);
        return;
    }

    if let Some(mapped) = find_range(c).and_then(|range| range.map(c as u32)) {
        out.push(mapped);
        return;
    }

    let before = out.len();
    out.extend(std::iter::once(c).nfkd().filter(char::is_ascii));
    if out.len() == before {
        out.push(c);
    }
}
