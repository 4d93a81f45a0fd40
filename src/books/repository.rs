pub mod sqlite_book_repository;

use crate::books::domain::model::{BookEntity, BookPatch, NewBook};
use crate::core::repository::Repository;

// The seam the catalog service depends on; the store-specific
// implementation lives one level below.
pub(crate) trait BookRepository: Repository<BookEntity, NewBook, BookPatch> {}
