use serde::{Deserialize, Serialize};
use std::fmt;

/// A single book record held by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Unique key within a catalog.
    pub id: i32,
    pub title: String,
    pub author: String,
    /// Whether the book is currently lent out.
    pub issued: bool,
    /// Borrower name. Empty when the book is not issued.
    pub issued_to: String,
}

impl Book {
    pub fn new(id: i32, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            issued: false,
            issued_to: String::new(),
        }
    }

    /// Human readable availability label
    pub fn status(&self) -> &'static str {
        if self.issued {
            "Issued"
        } else {
            "Available"
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Book ID: {}, Title: {}, Author: {}, Status: {}",
            self.id,
            self.title,
            self.author,
            self.status()
        )
    }
}

/// Ordering used when listing the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Ascending numeric id (default)
    #[default]
    Id,
    /// Ascending lexicographic title
    Title,
}
