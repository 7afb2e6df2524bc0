pub mod books;
pub mod catalog;
pub mod classify;
pub mod config;
pub mod normalize;
pub mod reference;
pub mod resolve;

use catalog::{CatalogError, VerseRepository};
use reference::{ParsedReference, SearchResult};
use tracing::debug;

/// Normalize and classify a raw query. Unrecognized shapes become
/// `BookOnly` carrying the whole normalized string.
pub fn parse_reference(raw: &str) -> (String, ParsedReference) {
    // Stage 1
    let normalized = normalize::normalize(raw);

    // Stage 2
    let parsed = classify::classify(&normalized).unwrap_or_else(|| ParsedReference::BookOnly {
        book_prefix: normalized.clone(),
    });
    debug!(raw, normalized = %normalized, ?parsed, "parsed");
    (normalized, parsed)
}

/// End-to-end search: normalize, classify, resolve.
pub fn search_reference<R: VerseRepository + ?Sized>(
    raw: &str,
    repo: &R,
) -> Result<Vec<SearchResult>, CatalogError> {
    let (_, parsed) = parse_reference(raw);

    // Stage 3
    let results = resolve::resolve(&parsed, repo)?;
    debug!(count = results.len(), "search done");
    Ok(results)
}

/// Catalog book names in canonical order, unknown names last.
pub fn list_books<R: VerseRepository + ?Sized>(repo: &R) -> Result<Vec<String>, CatalogError> {
    let mut names = repo.book_names()?;
    books::sort_canonical(&mut names);
    Ok(names)
}
