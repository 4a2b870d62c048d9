//! Catalog persistence over a single JSON backing file

use crate::error::{CatalogError, Result};
use crate::types::{Book, Year};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Default backing file, relative to the working directory
pub const DEFAULT_BACKING_FILE: &str = "library.json";

/// Where a catalog lives on disk
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Path of the JSON backing file
    pub backing_file: PathBuf,
}

impl CatalogConfig {
    /// Create a config pointing at the given backing file
    pub fn new(backing_file: impl Into<PathBuf>) -> Self {
        Self {
            backing_file: backing_file.into(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BACKING_FILE)
    }
}

/// The catalog: an ordered list of book records mirrored to a backing file
///
/// The file is read once at open and rewritten in full after every mutation,
/// so once a mutating call returns `Ok` the file matches memory exactly. A
/// mutation whose save fails is rolled back in memory before the error is
/// returned.
pub struct CatalogStore {
    config: CatalogConfig,
    books: Vec<Book>,
}

impl CatalogStore {
    /// Open the catalog at the configured path, loading any existing records
    ///
    /// A missing backing file yields an empty catalog. A file that exists
    /// but does not parse as a book list is a [`CatalogError::Format`]; the
    /// store never overwrites data it could not read.
    pub fn open(config: CatalogConfig) -> Result<Self> {
        let books = match fs::read_to_string(&config.backing_file) {
            Ok(contents) => serde_json::from_str(&contents)?,
            Err(e) if e.kind() == ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { config, books })
    }

    /// Path of the backing file this store reads and writes
    pub fn backing_file(&self) -> &Path {
        &self.config.backing_file
    }

    /// All books in insertion order
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Number of books in the catalog
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Whether the catalog holds no books
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Add a new book and persist the catalog
    ///
    /// The id is one greater than the highest id currently present (1 for an
    /// empty catalog) and the status starts out as
    /// [`STATUS_AVAILABLE`](crate::STATUS_AVAILABLE). Returns the assigned
    /// id.
    pub fn add(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        year: impl Into<Year>,
    ) -> Result<u64> {
        let id = self.books.iter().map(|b| b.id).max().unwrap_or(0) + 1;
        self.books.push(Book::new(id, title, author, year));
        if let Err(e) = self.save() {
            self.books.pop();
            return Err(e);
        }
        Ok(id)
    }

    /// Remove the book with the given id and persist the catalog
    ///
    /// Returns the removed record, or [`CatalogError::NotFound`] leaving the
    /// catalog untouched.
    pub fn remove(&mut self, id: u64) -> Result<Book> {
        let index = self
            .books
            .iter()
            .position(|b| b.id == id)
            .ok_or(CatalogError::NotFound(id))?;
        let book = self.books.remove(index);
        if let Err(e) = self.save() {
            self.books.insert(index, book);
            return Err(e);
        }
        Ok(book)
    }

    /// Books whose title, author, or year contains `query` verbatim
    ///
    /// Matching is case-sensitive; no matches is an empty result, not an
    /// error.
    pub fn search(&self, query: &str) -> Vec<&Book> {
        self.books.iter().filter(|b| b.matches(query)).collect()
    }

    /// Overwrite the status of the book with the given id and persist
    ///
    /// The new status is stored verbatim. Callers that want the canonical
    /// labels should pass [`STATUS_AVAILABLE`](crate::STATUS_AVAILABLE) or
    /// [`STATUS_CHECKED_OUT`](crate::STATUS_CHECKED_OUT).
    pub fn update_status(&mut self, id: u64, new_status: impl Into<String>) -> Result<()> {
        let index = self
            .books
            .iter()
            .position(|b| b.id == id)
            .ok_or(CatalogError::NotFound(id))?;
        let previous = std::mem::replace(&mut self.books[index].status, new_status.into());
        if let Err(e) = self.save() {
            self.books[index].status = previous;
            return Err(e);
        }
        Ok(())
    }

    /// Rewrite the backing file from the in-memory list
    fn save(&self) -> Result<()> {
        let mut contents = serde_json::to_string_pretty(&self.books)?;
        contents.push('\n');
        fs::write(&self.config.backing_file, contents)?;
        Ok(())
    }
}
