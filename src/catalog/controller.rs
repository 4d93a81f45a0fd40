use axum::{
    extract::{Path, Query, State},
    http::HeaderValue,
    response::Json,
    routing::get,
    Router,
};
use serde_json::Value;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use crate::books::dto::BookDto;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest};
use crate::catalog::domain::CatalogService;
use crate::catalog::factory;
use crate::core::command::Command;
use crate::core::controller::{json_to_server_error, AppState, ServerError};
use crate::core::domain::Configuration;

pub(crate) fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);
    Router::new()
        .route("/books", get(list_books).post(add_book))
        .route("/books/:id",
               get(find_book_by_id).put(update_book).delete(remove_book))
        .layer(cors)
        .with_state(state)
}

// Wildcards cannot be combined with credentials, so "all methods/headers"
// is expressed by mirroring whatever the preflight asks for.
fn cors_layer(config: &Configuration) -> CorsLayer {
    let origins: Vec<HeaderValue> = config.cors_origins.iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

// Each request gets its own service and thereby its own store connection,
// released when the service drops on any exit path.
fn build_service(state: &AppState) -> Result<Box<dyn CatalogService>, ServerError> {
    factory::create_catalog_service(&state.config, state.store).map_err(ServerError::from)
}

pub(crate) async fn list_books(
    State(state): State<AppState>,
    Query(req): Query<ListBooksCommandRequest>) -> Result<Json<Vec<BookDto>>, ServerError> {
    let svc = build_service(&state)?;
    let res = ListBooksCommand::new(svc).execute(req).await?;
    Ok(Json(res.books))
}

pub(crate) async fn add_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<BookDto>, ServerError> {
    let req: AddBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let svc = build_service(&state)?;
    let res = AddBookCommand::new(svc).execute(req).await?;
    Ok(Json(res.book))
}

pub(crate) async fn find_book_by_id(
    State(state): State<AppState>,
    Path(book_id): Path<i64>) -> Result<Json<BookDto>, ServerError> {
    let req = GetBookCommandRequest { book_id };
    let svc = build_service(&state)?;
    let res = GetBookCommand::new(svc).execute(req).await?;
    Ok(Json(res.book))
}

pub(crate) async fn update_book(
    State(state): State<AppState>,
    Path(book_id): Path<i64>,
    json: Json<Value>) -> Result<Json<BookDto>, ServerError> {
    let mut req: UpdateBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    req.book_id = book_id;
    let svc = build_service(&state)?;
    let res = UpdateBookCommand::new(svc).execute(req).await?;
    Ok(Json(res.book))
}

pub(crate) async fn remove_book(
    State(state): State<AppState>,
    Path(book_id): Path<i64>) -> Result<Json<BookDto>, ServerError> {
    let req = RemoveBookCommandRequest { book_id };
    let svc = build_service(&state)?;
    let res = RemoveBookCommand::new(svc).execute(req).await?;
    Ok(Json(res.book))
}

#[cfg(test)]
mod tests {
    use axum::extract::{Path, Query, State};
    use axum::http::StatusCode;
    use axum::response::Json;
    use serde_json::json;
    use crate::catalog::command::list_books_cmd::ListBooksCommandRequest;
    use crate::catalog::controller::{add_book, build_router, find_book_by_id, list_books, remove_book, update_book};
    use crate::core::controller::AppState;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    fn build_state(dir: &tempfile::TempDir) -> AppState {
        let config = Configuration::new(dir.path().join("books.db").to_str().expect("utf8 path"));
        AppState::new(config, RepositoryStore::Sqlite)
    }

    #[tokio::test]
    async fn test_should_build_router() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let _router = build_router(build_state(&dir));
    }

    #[tokio::test]
    async fn test_should_crud_books_over_handlers() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let state = build_state(&dir);

        let created = add_book(State(state.clone()), Json(json!({
            "title": "A",
            "author": "Frank Herbert",
            "isbn": "978-0441172719",
            "published_at": "1965-08-01",
        }))).await.expect("should add book");
        assert_eq!(1, created.0.id);
        assert_eq!("A", created.0.title.as_str());

        let loaded = find_book_by_id(State(state.clone()), Path(created.0.id))
            .await.expect("should get book");
        assert_eq!(created.0, loaded.0);

        let updated = update_book(State(state.clone()), Path(created.0.id), Json(json!({
            "title": "B",
        }))).await.expect("should update book");
        assert_eq!("B", updated.0.title.as_str());
        assert_eq!(created.0.author, updated.0.author);

        let removed = remove_book(State(state.clone()), Path(created.0.id))
            .await.expect("should remove book");
        assert_eq!(updated.0, removed.0);

        let err = find_book_by_id(State(state.clone()), Path(created.0.id))
            .await.expect_err("should fail on removed book");
        assert_eq!(StatusCode::NOT_FOUND, err.status());
    }

    #[tokio::test]
    async fn test_should_list_books_with_pagination() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let state = build_state(&dir);

        for i in 0..12 {
            let _ = add_book(State(state.clone()), Json(json!({
                "title": format!("title_{}", i),
                "author": "author",
                "isbn": "isbn",
                "published_at": "2001-01-01",
            }))).await.expect("should add book");
        }

        let books = list_books(State(state.clone()), Query(ListBooksCommandRequest::new(None, None)))
            .await.expect("should list books");
        assert_eq!(10, books.0.len());

        let books = list_books(State(state.clone()), Query(ListBooksCommandRequest::new(Some(10), Some(10))))
            .await.expect("should list books");
        assert_eq!(2, books.0.len());

        let err = list_books(State(state.clone()), Query(ListBooksCommandRequest::new(None, Some(-5))))
            .await.expect_err("should reject negative limit");
        assert_eq!(StatusCode::BAD_REQUEST, err.status());
    }

    #[tokio::test]
    async fn test_should_reject_malformed_bodies() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let state = build_state(&dir);

        let err = add_book(State(state.clone()), Json(json!({
            "title": "A",
        }))).await.expect_err("should reject missing fields");
        assert_eq!(StatusCode::BAD_REQUEST, err.status());

        let err = update_book(State(state.clone()), Path(1), Json(json!({
            "rating": 5,
        }))).await.expect_err("should reject unknown fields");
        assert_eq!(StatusCode::BAD_REQUEST, err.status());
    }
}
