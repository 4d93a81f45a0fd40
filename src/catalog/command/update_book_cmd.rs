use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookPatch;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct UpdateBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl UpdateBookCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// The PUT /books/:id body: every field optional, nothing else accepted.
// The id comes from the path only; the controller fills it in after parsing.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct UpdateBookCommandRequest {
    #[serde(skip)]
    pub book_id: i64,
    pub title: Option<String>,
    pub author: Option<String>,
    pub isbn: Option<String>,
    #[serde(default, with = "crate::utils::date::option")]
    pub published_at: Option<NaiveDate>,
}

impl UpdateBookCommandRequest {
    pub fn new(book_id: i64, patch: &BookPatch) -> Self {
        Self {
            book_id,
            title: patch.title.clone(),
            author: patch.author.clone(),
            isbn: patch.isbn.clone(),
            published_at: patch.published_at,
        }
    }

    pub fn build_patch(&self) -> BookPatch {
        BookPatch {
            title: self.title.clone(),
            author: self.author.clone(),
            isbn: self.isbn.clone(),
            published_at: self.published_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct UpdateBookCommandResponse {
    pub book: BookDto,
}

impl UpdateBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand {
    async fn execute(&self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        self.catalog_service.update_book(req.book_id, &req.build_patch())
            .await.map_err(CommandError::from)?
            .map(UpdateBookCommandResponse::new)
            .ok_or_else(|| CommandError::not_found("Book not found"))
    }
}
