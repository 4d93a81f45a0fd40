use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct GetBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl GetBookCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GetBookCommandRequest {
    pub(crate) book_id: i64,
}

impl GetBookCommandRequest {
    pub fn new(book_id: i64) -> Self {
        Self {
            book_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct GetBookCommandResponse {
    pub book: BookDto,
}

impl GetBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<GetBookCommandRequest, GetBookCommandResponse> for GetBookCommand {
    async fn execute(&self, req: GetBookCommandRequest) -> Result<GetBookCommandResponse, CommandError> {
        self.catalog_service.find_book_by_id(req.book_id)
            .await.map_err(CommandError::from)?
            .map(GetBookCommandResponse::new)
            .ok_or_else(|| CommandError::not_found("Book not found"))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    #[tokio::test]
    async fn test_should_run_get_book() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let config = Configuration::new(dir.path().join("books.db").to_str().expect("utf8 path"));

        let svc = factory::create_catalog_service(&config, RepositoryStore::Sqlite)
            .expect("should create service");
        let req = AddBookCommandRequest::new("Dune", "Frank Herbert", "978-0441172719",
                                             NaiveDate::from_ymd_opt(1965, 8, 1).expect("valid date"));
        let res = AddBookCommand::new(svc).execute(req).await.expect("should add book");

        let svc = factory::create_catalog_service(&config, RepositoryStore::Sqlite)
            .expect("should create service");
        let loaded = GetBookCommand::new(svc).execute(GetBookCommandRequest::new(res.book.id))
            .await.expect("should get book");
        assert_eq!(res.book, loaded.book);
    }

    #[tokio::test]
    async fn test_should_fail_getting_missing_book() {
        let svc = factory::create_catalog_service(&Configuration::new("test"), RepositoryStore::SqliteInMemory)
            .expect("should create service");
        let err = GetBookCommand::new(svc).execute(GetBookCommandRequest::new(404))
            .await.expect_err("should fail on missing book");
        assert!(matches!(err, CommandError::NotFound { message } if message == "Book not found"));
    }
}
