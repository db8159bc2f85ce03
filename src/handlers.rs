use crate::error::{AppError, AppResult};
use crate::items::ItemStore;
use crate::models::{Item, ItemsResponse, MessageResponse, NewItem, SearchQuery};
use crate::storage::ImageBackend;
use axum::{
    body::{Body, Bytes},
    extract::{multipart::Field, Multipart, Path, Query, State},
    http::header,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;

/// Maximum request body size for uploads (10 MB)
pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub items: Arc<dyn ItemStore>,
    pub images: Arc<dyn ImageBackend>,
}

/// GET / - Liveness greeting
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new("Hello, world!"))
}

/// POST /items - Add an item from multipart fields `id`, `name`, `category` and `image`
///
/// The image is written before the record is inserted. If the image cannot be
/// stored the request fails and no record is created.
pub async fn add_item(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<MessageResponse>> {
    let mut id: Option<i64> = None;
    let mut name = String::new();
    let mut category = String::new();
    let mut image: Option<Bytes> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart data: {}", e)))?
    {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "id" => {
                let raw = field_text(field).await?;
                tracing::info!("Receive id: {}", raw);
                let raw = raw.trim();
                if !raw.is_empty() {
                    id = Some(raw.parse::<i64>().map_err(|e| {
                        AppError::BadRequest(format!("Invalid id {}: {}", raw, e))
                    })?);
                }
            }
            "name" => {
                name = field_text(field).await?;
                tracing::info!("Receive item: {}", name);
            }
            "category" => {
                category = field_text(field).await?;
                tracing::info!("Receive category: {}", category);
            }
            "image" => {
                let data = field.bytes().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read image file: {}", e))
                })?;
                tracing::info!("Receive image: {} bytes", data.len());
                image = Some(data);
            }
            _ => {}
        }
    }

    let image = image.ok_or_else(|| {
        tracing::error!("Failed to receive image file");
        AppError::BadRequest("image file is required".to_string())
    })?;

    let image_name = state.images.store_image(&image).await.map_err(|e| {
        tracing::error!("Failed to save image file: {:#}", e);
        AppError::Internal(e)
    })?;

    let item = state
        .items
        .add_item(NewItem {
            id,
            name,
            category,
            image_name,
        })
        .await?;

    Ok(Json(MessageResponse::new(format!(
        "item received: {}",
        item.name
    ))))
}

/// GET /items - List every item
pub async fn get_items(State(state): State<AppState>) -> AppResult<Json<ItemsResponse>> {
    let items = state.items.list_items().await?;
    Ok(Json(ItemsResponse { items }))
}

/// GET /items/{id} - Get a single item
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Item>> {
    // an id that is not a number cannot be present
    let item = match id.parse::<i64>() {
        Ok(id) => state.items.get_item(id).await?,
        Err(_) => None,
    };

    item.map(Json).ok_or_else(|| {
        tracing::debug!("Item {} not found", id);
        AppError::NotFound("Item not found".to_string())
    })
}

/// GET /search?keyword= - Items whose name contains the keyword
pub async fn search_items(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<ItemsResponse>> {
    let items = state.items.search_items(&query.keyword).await?;
    Ok(Json(ItemsResponse { items }))
}

/// GET /image/{imageFilename} - Serve a stored image, or the default image if absent
pub async fn get_image(
    State(state): State<AppState>,
    Path(file_name): Path<String>,
) -> AppResult<Response<Body>> {
    let image = state.images.fetch_image(&file_name).await?;
    tracing::debug!("Serving image {} for {}", image.file_name, file_name);
    Ok(([(header::CONTENT_TYPE, "image/jpeg")], image.bytes).into_response())
}

async fn field_text(field: Field<'_>) -> AppResult<String> {
    let name = field.name().unwrap_or("").to_string();
    field
        .text()
        .await
        .map_err(|e| AppError::BadRequest(format!("Failed to read {}: {}", name, e)))
}
