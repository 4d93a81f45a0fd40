pub mod service;

use async_trait::async_trait;
use crate::books::domain::model::{BookPatch, NewBook};
use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;

// Lookup-style operations return None for an absent book; turning that into
// a not-found failure is the command layer's concern.
#[async_trait]
pub(crate) trait CatalogService: Sync + Send {
    async fn list_books(&self, skip: usize, limit: usize) -> LibraryResult<Vec<BookDto>>;
    async fn add_book(&self, draft: &NewBook) -> LibraryResult<BookDto>;
    async fn find_book_by_id(&self, id: i64) -> LibraryResult<Option<BookDto>>;
    async fn update_book(&self, id: i64, patch: &BookPatch) -> LibraryResult<Option<BookDto>>;
    async fn remove_book(&self, id: i64) -> LibraryResult<Option<BookDto>>;
}
