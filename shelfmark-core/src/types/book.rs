//! The book record type - the sole entity in a catalog

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical status for a book that is on the shelf
pub const STATUS_AVAILABLE: &str = "available";

/// Canonical status for a book that has been lent out
pub const STATUS_CHECKED_OUT: &str = "checked-out";

/// A single catalog record
///
/// Ids are assigned by the store and are unique within a catalog. The status
/// field is free text at this layer; [`STATUS_AVAILABLE`] and
/// [`STATUS_CHECKED_OUT`] are the expected values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Book {
    /// Store-assigned identifier, unique within the catalog
    pub id: u64,

    /// Book title
    pub title: String,

    /// Author name
    pub author: String,

    /// Publication year, kept exactly as supplied
    pub year: Year,

    /// Availability status
    pub status: String,
}

impl Book {
    /// Create a new record with the default "available" status
    pub fn new(
        id: u64,
        title: impl Into<String>,
        author: impl Into<String>,
        year: impl Into<Year>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            year: year.into(),
            status: STATUS_AVAILABLE.to_string(),
        }
    }

    /// Whether `query` appears verbatim in the title, the author, or the
    /// year rendered as text. Matching is case-sensitive.
    pub fn matches(&self, query: &str) -> bool {
        self.title.contains(query)
            || self.author.contains(query)
            || self.year.to_string().contains(query)
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Title: {}, Author: {}, Year: {}, Status: {}",
            self.id, self.title, self.author, self.year, self.status
        )
    }
}

/// Publication year as supplied by the user
///
/// The backing file may hold years as JSON numbers or as strings; both forms
/// are accepted and serialize back unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Year {
    Number(i64),
    Text(String),
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Year::Number(n) => write!(f, "{}", n),
            Year::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Year {
    fn from(year: i64) -> Self {
        Year::Number(year)
    }
}

impl From<&str> for Year {
    fn from(year: &str) -> Self {
        Year::Text(year.to_string())
    }
}

impl From<String> for Year {
    fn from(year: String) -> Self {
        Year::Text(year)
    }
}
