use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::NewBook;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct AddBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl AddBookCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// The POST /books body: every creatable field required, nothing else accepted.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct AddBookCommandRequest {
    pub title: String,
    pub author: String,
    pub isbn: String,
    #[serde(with = "crate::utils::date::serializer")]
    pub published_at: NaiveDate,
}

impl AddBookCommandRequest {
    pub fn new(title: &str, author: &str, isbn: &str, published_at: NaiveDate) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            published_at,
        }
    }

    pub fn build_draft(&self) -> NewBook {
        NewBook::new(self.title.as_str(), self.author.as_str(), self.isbn.as_str(), self.published_at)
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct AddBookCommandResponse {
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        self.catalog_service.add_book(&req.build_draft())
            .await.map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}
