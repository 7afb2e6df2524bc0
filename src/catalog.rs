//! Read-only verse catalog.
//!
//! `VerseRepository` is the seam between the resolver and whatever stores
//! the verses. Every lookup returns `Result` so a failing store is never
//! mistaken for "no rows". `MemoryCatalog` is the bundled implementation,
//! loaded from a JSON array of rows.

use crate::reference::VerseFilter;
use indexmap::IndexMap;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("cannot read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("catalog unavailable: {0}")]
    Unavailable(String),
}

/// One stored verse. `book` is the short code (e.g. "代下"), `book_name`
/// the full name.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct VerseRow {
    pub book: String,
    pub book_name: String,
    pub chapter: u32,
    pub verse: u32,
    pub text: String,
}

pub trait VerseRepository {
    /// Distinct book names, in storage order.
    fn book_names(&self) -> Result<Vec<String>, CatalogError>;

    fn chapters(&self, book_name: &str) -> Result<Vec<u32>, CatalogError>;

    fn verses(&self, book_name: &str, chapter: u32) -> Result<Vec<u32>, CatalogError>;

    fn verse_text(
        &self,
        book_name: &str,
        chapter: u32,
        verse: u32,
    ) -> Result<Option<String>, CatalogError>;

    /// Distinct book names whose name or short code contains `fragment`,
    /// longest name first.
    fn books_containing(&self, fragment: &str) -> Result<Vec<String>, CatalogError>;

    fn count_rows(
        &self,
        book_name: &str,
        chapter: u32,
        filter: VerseFilter,
    ) -> Result<usize, CatalogError>;
}

struct Book {
    code: String,
    chapters: IndexMap<u32, IndexMap<u32, String>>,
}

/// In-memory catalog keyed by book name, then chapter, then verse.
pub struct MemoryCatalog {
    books: IndexMap<String, Book>,
}

impl MemoryCatalog {
    pub fn from_rows(rows: Vec<VerseRow>) -> Self {
        let mut books: IndexMap<String, Book> = IndexMap::new();
        for row in rows {
            let book = books.entry(row.book_name).or_insert_with(|| Book {
                code: row.book,
                chapters: IndexMap::new(),
            });
            book.chapters
                .entry(row.chapter)
                .or_default()
                .insert(row.verse, row.text);
        }
        for book in books.values_mut() {
            book.chapters.sort_keys();
            for verses in book.chapters.values_mut() {
                verses.sort_keys();
            }
        }
        MemoryCatalog { books }
    }

    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        let rows: Vec<VerseRow> = serde_json::from_str(text)?;
        Ok(Self::from_rows(rows))
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let text = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&text)?;
        debug!(path = %path.display(), books = catalog.books.len(), "catalog loaded");
        Ok(catalog)
    }

    fn book(&self, book_name: &str) -> Option<&Book> {
        self.books.get(book_name.trim())
    }
}

impl VerseRepository for MemoryCatalog {
    fn book_names(&self) -> Result<Vec<String>, CatalogError> {
        Ok(self.books.keys().cloned().collect())
    }

    fn chapters(&self, book_name: &str) -> Result<Vec<u32>, CatalogError> {
        Ok(self
            .book(book_name)
            .map(|b| b.chapters.keys().copied().collect())
            .unwrap_or_default())
    }

    fn verses(&self, book_name: &str, chapter: u32) -> Result<Vec<u32>, CatalogError> {
        Ok(self
            .book(book_name)
            .and_then(|b| b.chapters.get(&chapter))
            .map(|v| v.keys().copied().collect())
            .unwrap_or_default())
    }

    fn verse_text(
        &self,
        book_name: &str,
        chapter: u32,
        verse: u32,
    ) -> Result<Option<String>, CatalogError> {
        Ok(self
            .book(book_name)
            .and_then(|b| b.chapters.get(&chapter))
            .and_then(|v| v.get(&verse))
            .cloned())
    }

    fn books_containing(&self, fragment: &str) -> Result<Vec<String>, CatalogError> {
        let mut names: Vec<String> = self
            .books
            .iter()
            .filter(|(name, book)| name.contains(fragment) || book.code.contains(fragment))
            .map(|(name, _)| name.clone())
            .collect();
        names.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));
        Ok(names)
    }

    fn count_rows(
        &self,
        book_name: &str,
        chapter: u32,
        filter: VerseFilter,
    ) -> Result<usize, CatalogError> {
        Ok(self
            .books
            .get(book_name)
            .and_then(|b| b.chapters.get(&chapter))
            .map(|verses| verses.keys().filter(|v| filter.accepts(**v)).count())
            .unwrap_or(0))
    }
}
