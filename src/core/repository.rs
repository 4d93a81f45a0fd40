use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::library::LibraryResult;

// Generic persistence contract: Draft is the creatable shape (no id yet),
// Patch is the partial-update shape. Absent rows surface as Ok(None).
#[async_trait]
pub trait Repository<Entity, Draft, Patch>: Sync + Send {
    // insert a new row and return the created entity with its assigned id
    async fn create(&self, draft: &Draft) -> LibraryResult<Entity>;

    // get an entity by id
    async fn get(&self, id: i64) -> LibraryResult<Option<Entity>>;

    // apply the supplied fields to an existing entity
    async fn update(&self, id: i64, patch: &Patch) -> LibraryResult<Option<Entity>>;

    // remove an entity, returning it as it existed before removal
    async fn delete(&self, id: i64) -> LibraryResult<Option<Entity>>;

    // page through entities in insertion order
    async fn list(&self, skip: usize, limit: usize) -> LibraryResult<Vec<Entity>>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub(crate) enum RepositoryStore {
    Sqlite,
    SqliteInMemory,
}
