use crate::books::{canonical_overlap, CHINESE_BY_LENGTH, LATIN_BY_LENGTH};

fn halfwidth_punct(c: char) -> char {
    match c {
        '\u{FF1A}' => ':',
        '\u{FF0D}' | '\u{2014}' => '-',
        c => c,
    }
}

fn halfwidth_digit(c: char) -> char {
    match c {
        '\u{FF10}'..='\u{FF19}' => char::from(b'0' + (c as u32 - 0xFF10) as u8),
        c => c,
    }
}

/// Replace a leading abbreviation from `table` with its book name.
/// Only the first matching key is applied, and only at the start. A key is
/// skipped when the text already shares a longer prefix with a full book
/// name, so "詩篇23" stays put and "約伯3" is not read as "約" + "伯3".
fn expand_prefix(text: String, table: &[(&'static str, &'static str)]) -> String {
    let overlap = canonical_overlap(&text);
    for (key, name) in table {
        if let Some(rest) = text.strip_prefix(key) {
            if key.chars().count() < overlap {
                return text;
            }
            return format!("{}{}", name, rest);
        }
    }
    text
}

/// Rewrite a raw reference into canonical form: half-width punctuation,
/// ASCII digits, and a leading abbreviation expanded to the full book name.
pub fn normalize(raw: &str) -> String {
    let text: String = raw.chars().map(halfwidth_punct).collect();
    let text: String = text.chars().map(halfwidth_digit).collect();
    let text = expand_prefix(text, &CHINESE_BY_LENGTH);
    expand_prefix(text, &LATIN_BY_LENGTH)
}
