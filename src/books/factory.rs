use crate::books::repository::BookRepository;
use crate::books::repository::sqlite_book_repository::SqliteBookRepository;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::core::repository::RepositoryStore;
use crate::utils::sqlite::{create_books_table, open_connection, open_in_memory};

pub(crate) fn create_book_repository(config: &Configuration, store: RepositoryStore) -> LibraryResult<Box<dyn BookRepository>> {
    let conn = match store {
        RepositoryStore::Sqlite => open_connection(config.database_path.as_str())?,
        RepositoryStore::SqliteInMemory => open_in_memory()?,
    };
    create_books_table(&conn)?;
    Ok(Box::new(SqliteBookRepository::new(conn)))
}
