include!("../../lib.rs");
use std::error::Error;
use std::net::SocketAddr;
use crate::catalog::controller::build_router;
use crate::core::controller::AppState;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::utils::sqlite::{create_books_table, open_connection, setup_tracing};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_tracing();

    let config = Configuration::from_env();

    // the books table exists before the first request is accepted
    let conn = open_connection(config.database_path.as_str())?;
    create_books_table(&conn)?;
    drop(conn);

    let state = AppState::new(config, RepositoryStore::Sqlite);
    let addr: SocketAddr = state.config.socket_addr().parse()?;
    let app = build_router(state);

    tracing::info!("books service listening on {}", addr);
    axum::Server::bind(&addr).serve(app.into_make_service()).await?;
    Ok(())
}
