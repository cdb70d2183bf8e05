use super::types::Book;
use std::cmp::Ordering;

/// Bisect `books`, which must be ordered ascending by id.
///
/// Returns `Ok(index)` of the record with `id`, or `Err(index)` with the
/// position where a record with that id would have to be inserted to keep the
/// slice ordered.
pub fn bisect_by_id(books: &[Book], id: i32) -> Result<usize, usize> {
    let mut low = 0;
    let mut high = books.len();

    while low < high {
        let mid = low + (high - low) / 2;
        match books[mid].id.cmp(&id) {
            Ordering::Equal => return Ok(mid),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }

    Err(low)
}

/// Linear scan for every record whose title matches exactly, in slice order.
pub fn find_by_title<'a>(books: &'a [Book], title: &str) -> Vec<&'a Book> {
    books.iter().filter(|book| book.title == title).collect()
}
