use crate::reference::ParsedReference;
use regex::{Captures, Regex};
use std::sync::LazyLock;

// Book prefix is a run of 1-5 CJK ideographs; every pattern is anchored at
// both ends. Tried in this order: range, single verse, chapter.
static RE_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([\u{4e00}-\u{9fa5}]{1,5})([0-9]+):([0-9]+)-([0-9]+)$").unwrap()
});
static RE_SINGLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([\u{4e00}-\u{9fa5}]{1,5})([0-9]+):([0-9]+)$").unwrap());
static RE_CHAPTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([\u{4e00}-\u{9fa5}]{1,5})([0-9]+)$").unwrap());

fn number(caps: &Captures, i: usize) -> Option<u32> {
    caps[i].parse().ok()
}

/// Match a normalized query against the reference shapes.
///
/// Returns `None` when no shape applies; the caller then treats the whole
/// string as book-name search text. A number too large for `u32` counts as
/// no match.
pub fn classify(normalized: &str) -> Option<ParsedReference> {
    if let Some(caps) = RE_RANGE.captures(normalized) {
        return Some(ParsedReference::Range {
            book_prefix: caps[1].to_string(),
            chapter: number(&caps, 2)?,
            verse_start: number(&caps, 3)?,
            verse_end: number(&caps, 4)?,
        });
    }

    if let Some(caps) = RE_SINGLE.captures(normalized) {
        return Some(ParsedReference::SingleVerse {
            book_prefix: caps[1].to_string(),
            chapter: number(&caps, 2)?,
            verse: number(&caps, 3)?,
        });
    }

    if let Some(caps) = RE_CHAPTER.captures(normalized) {
        return Some(ParsedReference::Chapter {
            book_prefix: caps[1].to_string(),
            chapter: number(&caps, 2)?,
        });
    }

    None
}
