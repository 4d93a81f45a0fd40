use std::env;
use serde::{Deserialize, Serialize};

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable : Sync + Send {
    fn id(&self) -> i64;
}

// Configuration abstracts config options for the books service
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub(crate) struct Configuration {
    pub database_path: String,
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
}

impl Configuration {
    pub fn new(database_path: &str) -> Self {
        Configuration {
            database_path: database_path.to_string(),
            host: "0.0.0.0".to_string(),
            port: 8000,
            cors_origins: vec![
                "http://localhost:3000".to_string(),
                "http://localhost:3001".to_string(),
            ],
        }
    }

    pub fn from_env() -> Self {
        let database_path = env::var("BOOKS_DATABASE_PATH")
            .unwrap_or_else(|_| "books.db".to_string());
        let mut config = Configuration::new(database_path.as_str());
        if let Ok(host) = env::var("BOOKS_HTTP_HOST") {
            config.host = host;
        }
        if let Ok(port) = env::var("BOOKS_HTTP_PORT") {
            if let Ok(port) = port.parse() {
                config.port = port;
            }
        }
        config
    }

    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
