use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::core::domain::Identifiable;
use crate::utils::date::serializer;

// BookDto is the wire shape of a book: the full entity including its id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookDto {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub isbn: String,
    #[serde(with = "serializer")]
    pub published_at: NaiveDate,
}

impl Identifiable for BookDto {
    fn id(&self) -> i64 {
        self.id
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            id: other.id,
            title: other.title.to_string(),
            author: other.author.to_string(),
            isbn: other.isbn.to_string(),
            published_at: other.published_at,
        }
    }
}
