use super::search::{bisect_by_id, find_by_title};
use super::sort::quick_sort_by;
use super::types::{Book, SortKey};
use crate::error::CatalogError;

/// In-memory book catalog.
///
/// Records are kept ordered by id at all times, so lookups by id can always
/// bisect. Issued books are tracked on a stack of ids: only the most recently
/// issued book that is still out can be returned.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    books: Vec<Book>,
    issued: Vec<i32>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Every record, ordered by id.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Ids on the issued stack, most recently issued first.
    ///
    /// An entry outlives a delete of its book until that book's turn to be returned.
    pub fn outstanding(&self) -> impl Iterator<Item = i32> + '_ {
        self.issued.iter().rev().copied()
    }

    /// Add a new, available book.
    pub fn add_book(
        &mut self,
        id: i32,
        title: impl Into<String>,
        author: impl Into<String>,
    ) -> Result<&Book, CatalogError> {
        let index = match bisect_by_id(&self.books, id) {
            Ok(_) => return Err(CatalogError::DuplicateId(id)),
            Err(index) => index,
        };

        self.books.insert(index, Book::new(id, title, author));
        log::debug!("added book {id} at position {index}");

        Ok(&self.books[index])
    }

    pub fn lookup_by_id(&self, id: i32) -> Option<&Book> {
        log::trace!("looking up book {id}");
        bisect_by_id(&self.books, id)
            .ok()
            .map(|index| &self.books[index])
    }

    /// Every book titled exactly `title`, in id order. Empty means not found.
    pub fn search_by_title(&self, title: &str) -> Vec<&Book> {
        log::trace!("searching for title {title:?}");
        find_by_title(&self.books, title)
    }

    /// Lend a book to `student_name` and push it on the issued stack.
    pub fn issue_book(
        &mut self,
        id: i32,
        student_name: impl Into<String>,
    ) -> Result<&Book, CatalogError> {
        let book = self.lookup_mut(id).ok_or(CatalogError::NotFound(id))?;

        if book.issued {
            return Err(CatalogError::AlreadyIssued(id));
        }

        book.issued = true;
        book.issued_to = student_name.into();
        log::debug!("issued book {id} to {:?}", book.issued_to);

        self.issued.push(id);
        self.lookup_by_id(id).ok_or(CatalogError::NotFound(id))
    }

    /// Return the most recently issued book.
    ///
    /// Fails with [`CatalogError::NotReturnable`] when nothing is out or when
    /// `id` is not on top of the issued stack, and with
    /// [`CatalogError::NotFound`] when the top id was deleted since it was
    /// issued. A failed return leaves the stack as it was.
    pub fn return_book(&mut self, id: i32) -> Result<&Book, CatalogError> {
        if self.issued.last() != Some(&id) {
            return Err(CatalogError::NotReturnable(id));
        }

        let book = self.lookup_mut(id).ok_or(CatalogError::NotFound(id))?;
        // Same id re-added after a delete: the stack entry is not this record.
        if !book.issued {
            return Err(CatalogError::NotReturnable(id));
        }

        book.issued = false;
        book.issued_to.clear();

        self.issued.pop();
        log::debug!("returned book {id}, {} still out", self.issued.len());

        self.lookup_by_id(id).ok_or(CatalogError::NotFound(id))
    }

    /// Every record in the requested order.
    ///
    /// Ordering by title runs the pivot-partition sort over a borrowed view, so
    /// books sharing a title may appear in any relative order. Storage order is
    /// never touched.
    pub fn list_all(&self, key: SortKey) -> Vec<&Book> {
        let mut view: Vec<&Book> = self.books.iter().collect();

        if key == SortKey::Title {
            quick_sort_by(&mut view, |a, b| a.title.cmp(&b.title));
        }

        view
    }

    /// Remove a book, keeping the relative order of the rest.
    ///
    /// The issued stack is left alone; returning a deleted book that is still on
    /// top reports [`CatalogError::NotFound`].
    pub fn delete_book(&mut self, id: i32) -> Result<Book, CatalogError> {
        let index = bisect_by_id(&self.books, id).map_err(|_| CatalogError::NotFound(id))?;
        let book = self.books.remove(index);

        log::debug!("deleted book {id} (was issued: {})", book.issued);

        Ok(book)
    }

    fn lookup_mut(&mut self, id: i32) -> Option<&mut Book> {
        match bisect_by_id(&self.books, id) {
            Ok(index) => Some(&mut self.books[index]),
            Err(_) => None,
        }
    }
}
