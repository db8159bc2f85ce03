use super::backend::{ItemStore, StoreError};
use crate::models::{Category, Item, NewItem};
use anyhow::Context;
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Schema applied when no external schema file is configured
pub const DEFAULT_SCHEMA: &str = include_str!("../../db/items.sql");

/// Extended result code for a PRIMARY KEY violation
const SQLITE_CONSTRAINT_PRIMARYKEY: &str = "1555";

const SELECT_ITEMS: &str = r#"
    SELECT i.id, i.name, c.name AS category, i.image_name
    FROM items i
    JOIN categories c ON i.category_id = c.id
"#;

/// Items in an `items` table whose category is a foreign key into `categories`.
/// The categories table is populated outside this service.
pub struct SqliteItemStore {
    pool: SqlitePool,
}

impl SqliteItemStore {
    pub async fn connect(database_url: &str, schema_path: Option<&str>) -> anyhow::Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .with_context(|| format!("Invalid DATABASE_URL: {}", database_url))?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .with_context(|| format!("Failed to open database {}", database_url))?;

        let store = SqliteItemStore::from_pool(pool);
        store.init_schema(schema_path).await?;
        Ok(store)
    }

    pub fn from_pool(pool: SqlitePool) -> Self {
        SqliteItemStore { pool }
    }

    /// Create the tables if they are absent, from `schema_path` or the bundled schema
    pub async fn init_schema(&self, schema_path: Option<&str>) -> anyhow::Result<()> {
        let schema = match schema_path {
            Some(path) => tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read schema file {}", path))?,
            None => DEFAULT_SCHEMA.to_string(),
        };

        sqlx::raw_sql(&schema)
            .execute(&self.pool)
            .await
            .context("Failed to create tables")?;

        tracing::info!("Database schema ready");
        Ok(())
    }

    /// Map the submitted category text to a category id.
    ///
    /// A category name wins; otherwise the text may be the id of an existing row.
    async fn resolve_category(&self, category: &str) -> Result<Category, StoreError> {
        let by_name = sqlx::query_as::<_, Category>("SELECT id, name FROM categories WHERE name = ?")
            .bind(category)
            .fetch_optional(&self.pool)
            .await?;
        if let Some(found) = by_name {
            return Ok(found);
        }

        if let Ok(id) = category.trim().parse::<i64>() {
            let by_id = sqlx::query_as::<_, Category>("SELECT id, name FROM categories WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
            if let Some(found) = by_id {
                return Ok(found);
            }
        }

        Err(StoreError::UnknownCategory(category.to_string()))
    }
}

/// A caller-supplied id that is already taken surfaces as `DuplicateId`
fn insert_error(err: sqlx::Error, id: Option<i64>) -> StoreError {
    if let (sqlx::Error::Database(db_err), Some(id)) = (&err, id) {
        if db_err.code().as_deref() == Some(SQLITE_CONSTRAINT_PRIMARYKEY) {
            return StoreError::DuplicateId(id);
        }
    }
    StoreError::Database(err)
}

#[async_trait]
impl ItemStore for SqliteItemStore {
    async fn add_item(&self, item: NewItem) -> Result<Item, StoreError> {
        let category = self.resolve_category(&item.category).await?;

        let result = sqlx::query(
            "INSERT INTO items (id, name, category_id, image_name) VALUES (?, ?, ?, ?)",
        )
        .bind(item.id)
        .bind(&item.name)
        .bind(category.id)
        .bind(&item.image_name)
        .execute(&self.pool)
        .await
        .map_err(|e| insert_error(e, item.id))?;

        let id = result.last_insert_rowid();
        tracing::debug!(
            "Inserted item {} with category {} ({})",
            id,
            category.name,
            category.id
        );

        Ok(Item {
            id: Some(id),
            name: item.name,
            category: category.name,
            image_name: item.image_name,
        })
    }

    async fn list_items(&self) -> Result<Vec<Item>, StoreError> {
        let items = sqlx::query_as::<_, Item>(&format!("{} ORDER BY i.id", SELECT_ITEMS))
            .fetch_all(&self.pool)
            .await?;
        Ok(items)
    }

    async fn get_item(&self, id: i64) -> Result<Option<Item>, StoreError> {
        let item = sqlx::query_as::<_, Item>(&format!("{} WHERE i.id = ?", SELECT_ITEMS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(item)
    }

    async fn search_items(&self, keyword: &str) -> Result<Vec<Item>, StoreError> {
        // instr() is case-sensitive where LIKE is not
        let items = sqlx::query_as::<_, Item>(&format!(
            "{} WHERE instr(i.name, ?) > 0 ORDER BY i.id",
            SELECT_ITEMS
        ))
        .bind(keyword)
        .fetch_all(&self.pool)
        .await?;
        Ok(items)
    }
}
