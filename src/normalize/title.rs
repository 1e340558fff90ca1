//! Heuristic title extraction from social media post text.

/// A title line must be longer than this many characters.
const MIN_TITLE_CHARS: usize = 10;

/// Characters kept from the post when no line qualifies as a title.
const FALLBACK_TITLE_CHARS: usize = 100;

/// Pick the first substantive line of a post as its title.
///
/// Lines are trimmed and skipped if empty, starting with `#`, or no longer
/// than ten characters (emoji banners, hashtag rows). If nothing qualifies,
/// the first hundred characters of the trimmed text are returned.
pub fn extract_title(text: &str) -> String {
    let trimmed = text.trim();

    trimmed
        .split('\n')
        .map(str::trim)
        .find(|line| is_title_line(line))
        .map(str::to_string)
        .unwrap_or_else(|| trimmed.chars().take(FALLBACK_TITLE_CHARS).collect())
}

fn is_title_line(line: &str) -> bool {
    !line.is_empty() && !line.starts_with('#') && line.chars().count() > MIN_TITLE_CHARS
}
