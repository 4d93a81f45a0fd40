use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

const DEFAULT_SKIP: i64 = 0;
const DEFAULT_LIMIT: i64 = 10;

pub(crate) struct ListBooksCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl ListBooksCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// Doubles as the query-string shape for GET /books.
#[derive(Debug, Deserialize)]
pub(crate) struct ListBooksCommandRequest {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

impl ListBooksCommandRequest {
    pub fn new(skip: Option<i64>, limit: Option<i64>) -> Self {
        Self {
            skip,
            limit,
        }
    }

    // Negative values are rejected rather than clamped.
    pub fn pagination(&self) -> Result<(usize, usize), CommandError> {
        let skip = self.skip.unwrap_or(DEFAULT_SKIP);
        let limit = self.limit.unwrap_or(DEFAULT_LIMIT);
        if skip < 0 || limit < 0 {
            return Err(CommandError::validation(
                format!("skip and limit must be non-negative, got skip={} limit={}", skip, limit).as_str(),
                None));
        }
        Ok((skip as usize, limit as usize))
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ListBooksCommandResponse {
    pub books: Vec<BookDto>,
}

impl ListBooksCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand {
    async fn execute(&self, req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, CommandError> {
        let (skip, limit) = req.pagination()?;
        self.catalog_service.list_books(skip, limit)
            .await.map_err(CommandError::from).map(ListBooksCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use crate::books::domain::model::NewBook;
    use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    #[tokio::test]
    async fn test_should_run_list_books() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let config = Configuration::new(dir.path().join("books.db").to_str().expect("utf8 path"));

        let svc = factory::create_catalog_service(&config, RepositoryStore::Sqlite)
            .expect("should create service");
        for i in 0..12 {
            let draft = NewBook::new(format!("title_{}", i).as_str(), "author", "isbn",
                                     NaiveDate::from_ymd_opt(2001, 1, 1).expect("valid date"));
            let _ = svc.add_book(&draft).await.expect("should add book");
        }

        let cmd = ListBooksCommand::new(svc);
        let res = cmd.execute(ListBooksCommandRequest::new(None, None))
            .await.expect("should list books");
        assert_eq!(10, res.books.len());

        let svc = factory::create_catalog_service(&config, RepositoryStore::Sqlite)
            .expect("should create service");
        let res = ListBooksCommand::new(svc).execute(ListBooksCommandRequest::new(Some(10), Some(10)))
            .await.expect("should list books");
        assert_eq!(2, res.books.len());
        assert_eq!("title_10", res.books[0].title.as_str());
    }

    #[tokio::test]
    async fn test_should_reject_negative_pagination() {
        let svc = factory::create_catalog_service(&Configuration::new("test"), RepositoryStore::SqliteInMemory)
            .expect("should create service");
        let cmd = ListBooksCommand::new(svc);

        let err = cmd.execute(ListBooksCommandRequest::new(Some(-1), None))
            .await.expect_err("should reject negative skip");
        assert!(matches!(err, CommandError::Validation { message: _, reason_code: _ }));
    }
}
