use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::utils::date::serializer;

// BookEntity is one row of the books table. The id is assigned by the store
// at insert time and never changes afterwards.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct BookEntity {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub isbn: String,
    #[serde(with = "serializer")]
    pub published_at: NaiveDate,
}

impl Identifiable for BookEntity {
    fn id(&self) -> i64 {
        self.id
    }
}

// NewBook carries every creatable field; the store supplies the id.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct NewBook {
    pub title: String,
    pub author: String,
    pub isbn: String,
    #[serde(with = "serializer")]
    pub published_at: NaiveDate,
}

impl NewBook {
    pub fn new(title: &str, author: &str, isbn: &str, published_at: NaiveDate) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            published_at,
        }
    }
}

// BookPatch applies only the supplied fields; None leaves a field unchanged.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub(crate) struct BookPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub isbn: Option<String>,
    #[serde(default, with = "crate::utils::date::option")]
    pub published_at: Option<NaiveDate>,
}

impl BookPatch {
    pub fn title(title: &str) -> Self {
        BookPatch {
            title: Some(title.to_string()),
            ..BookPatch::default()
        }
    }
}
