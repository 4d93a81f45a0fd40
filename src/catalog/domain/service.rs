use async_trait::async_trait;
use crate::books::domain::model::{BookPatch, NewBook};
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::{Configuration, Identifiable};
use crate::core::library::LibraryResult;

pub(crate) struct CatalogServiceImpl {
    book_repository: Box<dyn BookRepository>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(_config: &Configuration, book_repository: Box<dyn BookRepository>) -> Self {
        Self {
            book_repository,
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn list_books(&self, skip: usize, limit: usize) -> LibraryResult<Vec<BookDto>> {
        let books = self.book_repository.list(skip, limit).await?;
        Ok(books.iter().map(BookDto::from).collect())
    }

    async fn add_book(&self, draft: &NewBook) -> LibraryResult<BookDto> {
        let book = self.book_repository.create(draft).await?;
        tracing::info!(book_id = book.id(), "book added to catalog");
        Ok(BookDto::from(&book))
    }

    async fn find_book_by_id(&self, id: i64) -> LibraryResult<Option<BookDto>> {
        let book = self.book_repository.get(id).await?;
        Ok(book.as_ref().map(BookDto::from))
    }

    async fn update_book(&self, id: i64, patch: &BookPatch) -> LibraryResult<Option<BookDto>> {
        let book = self.book_repository.update(id, patch).await?;
        if let Some(book) = &book {
            tracing::info!(book_id = book.id(), "book updated in catalog");
        }
        Ok(book.as_ref().map(BookDto::from))
    }

    async fn remove_book(&self, id: i64) -> LibraryResult<Option<BookDto>> {
        let book = self.book_repository.delete(id).await?;
        if let Some(book) = &book {
            tracing::info!(book_id = book.id(), "book removed from catalog");
        }
        Ok(book.as_ref().map(BookDto::from))
    }
}
