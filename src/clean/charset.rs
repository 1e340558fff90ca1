//! The fixed set of invisible code points stripped by the cleaner.

/// An invisible or direction-control character with its display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvisibleChar {
    /// The code point itself.
    pub ch: char,
    /// Human-readable Unicode name.
    pub name: &'static str,
}

impl InvisibleChar {
    const fn new(ch: char, name: &'static str) -> Self {
        Self { ch, name }
    }

    /// `U+XXXX` notation for the code point.
    pub fn code_point(&self) -> String {
        format!("U+{:04X}", self.ch as u32)
    }
}

/// Characters AI tools leave in their output: zero-width marks, bidi
/// controls, invisible math operators and blank glyphs.
pub static INVISIBLE_CHARS: [InvisibleChar; 19] = [
    InvisibleChar::new('\u{200B}', "ZERO WIDTH SPACE"),
    InvisibleChar::new('\u{200C}', "ZERO WIDTH NON-JOINER"),
    InvisibleChar::new('\u{200D}', "ZERO WIDTH JOINER"),
    InvisibleChar::new('\u{2060}', "WORD JOINER"),
    InvisibleChar::new('\u{FEFF}', "ZERO WIDTH NO-BREAK SPACE (BOM)"),
    InvisibleChar::new('\u{00AD}', "SOFT HYPHEN"),
    InvisibleChar::new('\u{200E}', "LEFT-TO-RIGHT MARK"),
    InvisibleChar::new('\u{200F}', "RIGHT-TO-LEFT MARK"),
    InvisibleChar::new('\u{202A}', "LEFT-TO-RIGHT EMBEDDING"),
    InvisibleChar::new('\u{202B}', "RIGHT-TO-LEFT EMBEDDING"),
    InvisibleChar::new('\u{202C}', "POP DIRECTIONAL FORMATTING"),
    InvisibleChar::new('\u{202D}', "LEFT-TO-RIGHT OVERRIDE"),
    InvisibleChar::new('\u{202E}', "RIGHT-TO-LEFT OVERRIDE"),
    InvisibleChar::new('\u{2061}', "FUNCTION APPLICATION"),
    InvisibleChar::new('\u{2062}', "INVISIBLE TIMES"),
    InvisibleChar::new('\u{2063}', "INVISIBLE SEPARATOR"),
    InvisibleChar::new('\u{2064}', "INVISIBLE PLUS"),
    InvisibleChar::new('\u{180E}', "MONGOLIAN VOWEL SEPARATOR"),
    InvisibleChar::new('\u{2800}', "BRAILLE PATTERN BLANK"),
];

/// Look up the table entry for `c`, if it is one of the invisible characters.
pub fn lookup(c: char) -> Option<&'static InvisibleChar> {
    INVISIBLE_CHARS.iter().find(|entry| entry.ch == c)
}

/// Whether `c` is one of the invisible characters.
pub fn is_invisible(c: char) -> bool {
    lookup(c).is_some()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_table_entries_are_distinct() {
        let unique: HashSet<char> = INVISIBLE_CHARS.iter().map(|e| e.ch).collect();
        assert_eq!(unique.len(), INVISIBLE_CHARS.len());
    }

    #[test]
    fn test_visible_chars_are_not_flagged() {
        for c in ['a', ' ', '\n', '-', '\u{00A0}', 'é', '🎉'] {
            assert!(!is_invisible(c), "{:?} flagged as invisible", c);
        }
    }

    #[test]
    fn test_code_point_notation() {
        let bom = lookup('\u{FEFF}').unwrap();
        assert_eq!(bom.code_point(), "U+FEFF");
        assert_eq!(lookup('\u{00AD}').unwrap().code_point(), "U+00AD");
    }
}
