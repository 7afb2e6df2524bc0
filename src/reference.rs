use serde::Serialize;

/// Reference shape recognized in a normalized query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedReference {
    BookOnly {
        book_prefix: String,
    },
    Chapter {
        book_prefix: String,
        chapter: u32,
    },
    SingleVerse {
        book_prefix: String,
        chapter: u32,
        verse: u32,
    },
    Range {
        book_prefix: String,
        chapter: u32,
        verse_start: u32,
        verse_end: u32,
    },
}

impl ParsedReference {
    pub fn book_prefix(&self) -> &str {
        match self {
            ParsedReference::BookOnly { book_prefix }
            | ParsedReference::Chapter { book_prefix, .. }
            | ParsedReference::SingleVerse { book_prefix, .. }
            | ParsedReference::Range { book_prefix, .. } => book_prefix,
        }
    }
}

/// Verse constraint applied when counting catalog rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerseFilter {
    Any,
    Exact(u32),
    Between(u32, u32),
}

impl VerseFilter {
    pub fn accepts(&self, verse: u32) -> bool {
        match *self {
            VerseFilter::Any => true,
            VerseFilter::Exact(v) => verse == v,
            VerseFilter::Between(start, end) => start <= verse && verse <= end,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SearchResult {
    Book {
        book: String,
    },
    Chapter {
        book: String,
        chapter: u32,
    },
    Single {
        book: String,
        chapter: u32,
        verse: u32,
    },
    Range {
        book: String,
        chapter: u32,
        verse_start: u32,
        verse_end: u32,
    },
}

impl SearchResult {
    pub fn book(&self) -> &str {
        match self {
            SearchResult::Book { book }
            | SearchResult::Chapter { book, .. }
            | SearchResult::Single { book, .. }
            | SearchResult::Range { book, .. } => book,
        }
    }
}
