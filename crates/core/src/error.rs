/// Error type for catalog operations.
///
/// Each variant maps to exactly one user-facing status line. None of them are
/// fatal: the operation that produced them did not touch the catalog.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Book with ID {0} already exists")]
    DuplicateId(i32),

    #[error("Book {0} not found")]
    NotFound(i32),

    #[error("Book {0} is already issued")]
    AlreadyIssued(i32),

    /// The book is not issued, or it is not the most recently issued one still out.
    #[error("Book {0} is not issued or was not the last issued book")]
    NotReturnable(i32),
}

impl CatalogError {
    /// Id of the book the failed operation referred to
    pub fn id(&self) -> i32 {
        match self {
            CatalogError::DuplicateId(id)
            | CatalogError::NotFound(id)
            | CatalogError::AlreadyIssued(id)
            | CatalogError::NotReturnable(id) => *id,
        }
    }
}
