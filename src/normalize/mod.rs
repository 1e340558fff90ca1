//! Fancy glyph normalizer.
//!
//! Turns styled Unicode letterforms (mathematical bold, italic, sans-serif,
//! monospace, double-struck digits) back into plain ASCII, and picks a title
//! line out of a multi-line post.

mod glyph;
mod title;

pub use glyph::{GLYPH_RANGES, GlyphRange, glyph_style, normalize_char, normalize_text};
pub use title::extract_title;

/// Extract the title line of `text` and normalize it to plain ASCII.
pub fn normalize_title(text: &str) -> String {
    normalize_text(&extract_title(text))
}
