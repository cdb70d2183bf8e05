//! Core library for libcat
//!
//! This crate implements the **Functional Core** of the libcat application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The libcat project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`libcat_core`** (this crate): the catalog, its book model, and the sort and
//!   search routines. No I/O.
//! - **`libcat`**: the interactive menu, rendering, and argument parsing (the Imperative Shell)
//!
//! Every catalog operation reports its outcome through [`CatalogError`] instead of
//! printing. A failed operation leaves the catalog untouched.
//!
//! # Module Organization
//!
//! - [`catalog`]: the [`Catalog`](catalog::Catalog) store, the [`Book`](catalog::Book)
//!   record, and the pivot-partition sort and bisection search it is built on
//! - [`error`]: the catalog error type
//!
//! # Example Usage
//!
//! ```rust
//! use libcat_core::catalog::{Catalog, SortKey};
//! use libcat_core::CatalogError;
//!
//! let mut catalog = Catalog::new();
//! catalog.add_book(2, "Dune", "Frank Herbert").unwrap();
//! catalog.add_book(1, "Emma", "Jane Austen").unwrap();
//!
//! assert_eq!(
//!     catalog.add_book(1, "Persuasion", "Jane Austen"),
//!     Err(CatalogError::DuplicateId(1))
//! );
//!
//! catalog.issue_book(1, "Stu").unwrap();
//! assert!(catalog.return_book(2).is_err());
//! catalog.return_book(1).unwrap();
//!
//! let titles: Vec<&str> = catalog
//!     .list_all(SortKey::Title)
//!     .iter()
//!     .map(|book| book.title.as_str())
//!     .collect();
//! assert_eq!(titles, vec!["Dune", "Emma"]);
//! ```

pub mod catalog;
pub mod error;

pub use error::CatalogError;
