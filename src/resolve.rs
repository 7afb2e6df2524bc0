use crate::catalog::{CatalogError, VerseRepository};
use crate::reference::{ParsedReference, SearchResult, VerseFilter};
use tracing::debug;

/// Turn a parsed reference into catalog matches.
///
/// Shaped references try every book whose name or code contains the prefix,
/// longest name first, and keep those with at least one matching row.
/// `BookOnly` is a plain substring match on book names. Store failures
/// propagate; an unmatched query is `Ok(vec![])`.
pub fn resolve<R: VerseRepository + ?Sized>(
    parsed: &ParsedReference,
    repo: &R,
) -> Result<Vec<SearchResult>, CatalogError> {
    let (prefix, chapter, filter) = match parsed {
        ParsedReference::BookOnly { book_prefix } => return books_by_name(book_prefix, repo),
        ParsedReference::Chapter {
            book_prefix,
            chapter,
        } => (book_prefix, *chapter, VerseFilter::Any),
        ParsedReference::SingleVerse {
            book_prefix,
            chapter,
            verse,
        } => (book_prefix, *chapter, VerseFilter::Exact(*verse)),
        ParsedReference::Range {
            book_prefix,
            chapter,
            verse_start,
            verse_end,
        } => (
            book_prefix,
            *chapter,
            VerseFilter::Between(*verse_start, *verse_end),
        ),
    };

    let mut results = Vec::new();
    for book in repo.books_containing(prefix)? {
        let count = repo.count_rows(&book, chapter, filter)?;
        debug!(book = %book, chapter, ?filter, count, "candidate");
        if count > 0 {
            results.push(to_result(book, chapter, filter));
        }
    }
    Ok(results)
}

fn to_result(book: String, chapter: u32, filter: VerseFilter) -> SearchResult {
    match filter {
        VerseFilter::Any => SearchResult::Chapter { book, chapter },
        VerseFilter::Exact(verse) => SearchResult::Single {
            book,
            chapter,
            verse,
        },
        VerseFilter::Between(verse_start, verse_end) => SearchResult::Range {
            book,
            chapter,
            verse_start,
            verse_end,
        },
    }
}

fn books_by_name<R: VerseRepository + ?Sized>(
    text: &str,
    repo: &R,
) -> Result<Vec<SearchResult>, CatalogError> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(repo
        .book_names()?
        .into_iter()
        .filter(|name| name.contains(text))
        .map(|book| SearchResult::Book { book })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{MemoryCatalog, VerseRow};

    fn row(code: &str, name: &str, chapter: u32, verse: u32) -> VerseRow {
        VerseRow {
            book: code.to_string(),
            book_name: name.to_string(),
            chapter,
            verse,
            text: String::new(),
        }
    }

    fn catalog() -> MemoryCatalog {
        MemoryCatalog::from_rows(vec![
            row("伯", "約伯記", 3, 1),
            row("約", "約翰福音", 3, 16),
            row("約一", "約翰一書", 3, 1),
            row("約一", "約翰一書", 3, 2),
            row("創", "創世記", 1, 1),
            row("代下", "歷代志下", 12, 3),
        ])
    }

    fn chapter(prefix: &str, chapter: u32) -> ParsedReference {
        ParsedReference::Chapter {
            book_prefix: prefix.to_string(),
            chapter,
        }
    }

    struct FailingRepo;

    impl VerseRepository for FailingRepo {
        fn book_names(&self) -> Result<Vec<String>, CatalogError> {
            Err(CatalogError::Unavailable("down".to_string()))
        }
        fn chapters(&self, _: &str) -> Result<Vec<u32>, CatalogError> {
            Err(CatalogError::Unavailable("down".to_string()))
        }
        fn verses(&self, _: &str, _: u32) -> Result<Vec<u32>, CatalogError> {
            Err(CatalogError::Unavailable("down".to_string()))
        }
        fn verse_text(&self, _: &str, _: u32, _: u32) -> Result<Option<String>, CatalogError> {
            Err(CatalogError::Unavailable("down".to_string()))
        }
        fn books_containing(&self, _: &str) -> Result<Vec<String>, CatalogError> {
            Ok(vec!["創世記".to_string()])
        }
        fn count_rows(&self, _: &str, _: u32, _: VerseFilter) -> Result<usize, CatalogError> {
            Err(CatalogError::Unavailable("down".to_string()))
        }
    }

    #[test]
    fn test_ranked_longest_first_with_nonzero_counts() {
        let results = resolve(&chapter("約", 3), &catalog()).unwrap();
        let books: Vec<&str> = results.iter().map(|r| r.book()).collect();
        assert_eq!(books, vec!["約翰福音", "約翰一書", "約伯記"]);
    }

    #[test]
    fn test_zero_count_excluded() {
        let parsed = ParsedReference::SingleVerse {
            book_prefix: "約".to_string(),
            chapter: 3,
            verse: 2,
        };
        let results = resolve(&parsed, &catalog()).unwrap();
        assert_eq!(
            results,
            vec![SearchResult::Single {
                book: "約翰一書".to_string(),
                chapter: 3,
                verse: 2,
            }]
        );
    }

    #[test]
    fn test_range() {
        let parsed = ParsedReference::Range {
            book_prefix: "約翰".to_string(),
            chapter: 3,
            verse_start: 2,
            verse_end: 20,
        };
        let results = resolve(&parsed, &catalog()).unwrap();
        assert_eq!(
            results,
            vec![
                SearchResult::Range {
                    book: "約翰福音".to_string(),
                    chapter: 3,
                    verse_start: 2,
                    verse_end: 20,
                },
                SearchResult::Range {
                    book: "約翰一書".to_string(),
                    chapter: 3,
                    verse_start: 2,
                    verse_end: 20,
                },
            ]
        );
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let parsed = ParsedReference::Range {
            book_prefix: "約".to_string(),
            chapter: 3,
            verse_start: 20,
            verse_end: 1,
        };
        assert!(resolve(&parsed, &catalog()).unwrap().is_empty());
    }

    #[test]
    fn test_chapter_zero_is_empty() {
        assert!(resolve(&chapter("創", 0), &catalog()).unwrap().is_empty());
    }

    #[test]
    fn test_prefix_matches_short_code() {
        let results = resolve(&chapter("代下", 12), &catalog()).unwrap();
        assert_eq!(
            results,
            vec![SearchResult::Chapter {
                book: "歷代志下".to_string(),
                chapter: 12,
            }]
        );
    }

    #[test]
    fn test_book_only_substring() {
        let parsed = ParsedReference::BookOnly {
            book_prefix: "約翰".to_string(),
        };
        let results = resolve(&parsed, &catalog()).unwrap();
        assert_eq!(
            results,
            vec![
                SearchResult::Book {
                    book: "約翰福音".to_string()
                },
                SearchResult::Book {
                    book: "約翰一書".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_book_only_empty_text() {
        let parsed = ParsedReference::BookOnly {
            book_prefix: String::new(),
        };
        assert!(resolve(&parsed, &catalog()).unwrap().is_empty());
    }

    #[test]
    fn test_store_failure_propagates() {
        let err = resolve(&chapter("創", 1), &FailingRepo).err().unwrap();
        assert!(matches!(err, CatalogError::Unavailable(_)));

        let parsed = ParsedReference::BookOnly {
            book_prefix: "創".to_string(),
        };
        assert!(resolve(&parsed, &FailingRepo).is_err());
    }
}
