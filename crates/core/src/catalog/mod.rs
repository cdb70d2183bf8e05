pub mod search;
pub mod sort;
pub mod store;
pub mod types;

pub use search::{bisect_by_id, find_by_title};
pub use sort::quick_sort_by;
pub use store::Catalog;
pub use types::{Book, SortKey};
