use axum::http::HeaderValue;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub front_url: String,
    pub server_port: u16,
    pub storage_type: StorageType,
    pub items_json_path: String,
    pub database_url: Option<String>,
    pub db_schema_path: Option<String>,
    pub image_dir: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub enum StorageType {
    Json,
    Sqlite,
}

impl std::str::FromStr for StorageType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(StorageType::Json),
            "sqlite" => Ok(StorageType::Sqlite),
            _ => Err(anyhow::anyhow!("Invalid storage type: {}", s)),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        Ok(Config {
            front_url: env::var("FRONT_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "9000".to_string())
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid SERVER_PORT: {}", e))?,
            storage_type: env::var("STORAGE_TYPE")
                .unwrap_or_else(|_| "json".to_string())
                .parse()?,
            items_json_path: env::var("ITEMS_JSON_PATH")
                .unwrap_or_else(|_| "items.json".to_string()),
            database_url: env::var("DATABASE_URL").ok(),
            db_schema_path: env::var("DB_SCHEMA_PATH").ok(),
            image_dir: env::var("IMAGE_DIR").unwrap_or_else(|_| "images".to_string()),
        })
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.storage_type == StorageType::Sqlite && self.database_url.is_none() {
            return Err(anyhow::anyhow!(
                "DATABASE_URL must be set for sqlite storage"
            ));
        }
        self.cors_origin()?;
        Ok(())
    }

    /// The single origin allowed by the CORS layer
    pub fn cors_origin(&self) -> Result<HeaderValue, anyhow::Error> {
        self.front_url
            .parse::<HeaderValue>()
            .map_err(|e| anyhow::anyhow!("Invalid FRONT_URL {}: {}", self.front_url, e))
    }
}
