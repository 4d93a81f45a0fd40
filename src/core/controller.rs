use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::core::library::LibraryError;
use crate::core::repository::RepositoryStore;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub(crate) struct AppState {
    pub(crate) config: Configuration,
    pub(crate) store: RepositoryStore,
}

impl AppState {
    pub fn new(config: Configuration, store: RepositoryStore) -> AppState {
        AppState {
            config,
            store,
        }
    }
}

// All failures surface as `{"detail": "..."}` JSON bodies.
#[derive(Debug, Serialize)]
pub(crate) struct ErrorDetail {
    pub detail: String,
}

#[derive(Debug)]
pub(crate) struct ServerError {
    status: StatusCode,
    detail: String,
}

impl ServerError {
    pub fn new(status: StatusCode, detail: &str) -> ServerError {
        ServerError { status, detail: detail.to_string() }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorDetail { detail: self.detail })).into_response()
    }
}

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    ServerError::new(StatusCode::BAD_REQUEST, format!("{}", err).as_str())
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::Database { message, .. } => {
                ServerError::new(StatusCode::INTERNAL_SERVER_ERROR, message.as_str())
            }
            CommandError::DuplicateKey { message } => {
                ServerError::new(StatusCode::CONFLICT, message.as_str())
            }
            CommandError::NotFound { message } => {
                ServerError::new(StatusCode::NOT_FOUND, message.as_str())
            }
            CommandError::Runtime { message, .. } => {
                ServerError::new(StatusCode::INTERNAL_SERVER_ERROR, message.as_str())
            }
            CommandError::Serialization { message } => {
                ServerError::new(StatusCode::BAD_REQUEST, message.as_str())
            }
            CommandError::Validation { message, .. } => {
                ServerError::new(StatusCode::BAD_REQUEST, message.as_str())
            }
            CommandError::Other { message, .. } => {
                ServerError::new(StatusCode::INTERNAL_SERVER_ERROR, message.as_str())
            }
        }
    }
}

impl From<LibraryError> for ServerError {
    fn from(err: LibraryError) -> Self {
        ServerError::from(CommandError::from(err))
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use crate::core::command::CommandError;
    use crate::core::controller::ServerError;
    use crate::core::library::LibraryError;

    #[tokio::test]
    async fn test_should_map_not_found_to_404() {
        let err = ServerError::from(CommandError::not_found("Book not found"));
        assert_eq!(StatusCode::NOT_FOUND, err.status());
        assert_eq!("Book not found", err.detail.as_str());
    }

    #[tokio::test]
    async fn test_should_map_validation_to_400() {
        let err = ServerError::from(CommandError::validation("skip must be non-negative", None));
        assert_eq!(StatusCode::BAD_REQUEST, err.status());
    }

    #[tokio::test]
    async fn test_should_map_database_to_500() {
        let err = ServerError::from(LibraryError::database("disk error", None, false));
        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, err.status());
    }

    #[tokio::test]
    async fn test_should_map_serialization_to_400() {
        let err = ServerError::from(LibraryError::serialization("bad payload"));
        assert_eq!(StatusCode::BAD_REQUEST, err.status());
    }
}
