use std::cmp;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};

use crate::books::domain::model::{BookEntity, BookPatch, NewBook};
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;
use crate::utils::date::DATE_FMT;

const BOOK_SELECT_SQL: &str = "SELECT id, title, author, isbn, published_at FROM books";

// Pages larger than this are clamped regardless of the requested limit.
const MAX_PAGE_SIZE: usize = 500;

#[derive(Debug)]
pub struct SqliteBookRepository {
    conn: Mutex<Connection>,
}

impl SqliteBookRepository {
    pub(crate) fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    fn lock(&self) -> LibraryResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_|
            LibraryError::runtime("book repository connection lock poisoned", None))
    }

    fn select_book(conn: &Connection, id: i64) -> LibraryResult<Option<BookEntity>> {
        let mut stmt = conn.prepare(format!("{} WHERE id = ?1", BOOK_SELECT_SQL).as_str())?;
        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_book_row(row)?));
        }
        Ok(None)
    }
}

#[async_trait]
impl Repository<BookEntity, NewBook, BookPatch> for SqliteBookRepository {
    async fn create(&self, draft: &NewBook) -> LibraryResult<BookEntity> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO books (title, author, isbn, published_at) VALUES (?1, ?2, ?3, ?4)",
            params![
                draft.title.as_str(),
                draft.author.as_str(),
                draft.isbn.as_str(),
                draft.published_at.format(DATE_FMT).to_string(),
            ],
        )?;
        Ok(BookEntity {
            id: conn.last_insert_rowid(),
            title: draft.title.to_string(),
            author: draft.author.to_string(),
            isbn: draft.isbn.to_string(),
            published_at: draft.published_at,
        })
    }

    async fn get(&self, id: i64) -> LibraryResult<Option<BookEntity>> {
        let conn = self.lock()?;
        Self::select_book(&conn, id)
    }

    async fn update(&self, id: i64, patch: &BookPatch) -> LibraryResult<Option<BookEntity>> {
        let conn = self.lock()?;
        let changed = conn.execute(
            "UPDATE books
             SET
                title = COALESCE(?1, title),
                author = COALESCE(?2, author),
                isbn = COALESCE(?3, isbn),
                published_at = COALESCE(?4, published_at)
             WHERE id = ?5",
            params![
                patch.title.as_deref(),
                patch.author.as_deref(),
                patch.isbn.as_deref(),
                patch.published_at.map(|d| d.format(DATE_FMT).to_string()),
                id,
            ],
        )?;
        if changed == 0 {
            return Ok(None);
        }
        Self::select_book(&conn, id)
    }

    async fn delete(&self, id: i64) -> LibraryResult<Option<BookEntity>> {
        let conn = self.lock()?;
        let existing = match Self::select_book(&conn, id)? {
            Some(entity) => entity,
            None => return Ok(None),
        };
        conn.execute("DELETE FROM books WHERE id = ?1", params![id])?;
        Ok(Some(existing))
    }

    async fn list(&self, skip: usize, limit: usize) -> LibraryResult<Vec<BookEntity>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            format!("{} ORDER BY id ASC LIMIT ?1 OFFSET ?2", BOOK_SELECT_SQL).as_str())?;
        let mut rows = stmt.query(params![
            cmp::min(limit, MAX_PAGE_SIZE) as i64,
            skip as i64,
        ])?;
        let mut books = Vec::new();
        while let Some(row) = rows.next()? {
            books.push(parse_book_row(row)?);
        }
        Ok(books)
    }
}

impl BookRepository for SqliteBookRepository {}

fn parse_book_row(row: &Row<'_>) -> LibraryResult<BookEntity> {
    let published_at_text: String = row.get("published_at")?;
    let published_at = NaiveDate::parse_from_str(&published_at_text, DATE_FMT).map_err(|_| {
        LibraryError::serialization(
            format!("invalid date `{}` in books.published_at", published_at_text).as_str())
    })?;
    Ok(BookEntity {
        id: row.get("id")?,
        title: row.get("title")?,
        author: row.get("author")?,
        isbn: row.get("isbn")?,
        published_at,
    })
}
