//! API request handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use super::routes::AppState;
use crate::error::Error;
use crate::types::{parse_item_id, Item, NewItem};

// Response types

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Human-readable status message
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WelcomeResponse {
    /// Welcome message
    pub message: String,
    /// Path of the interactive API docs
    pub docs: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ListResponse {
    /// All items in creation order
    pub items: Vec<Item>,
    /// Number of items
    pub count: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ItemResponse {
    pub item: Item,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedResponse {
    /// Confirmation message
    pub message: String,
    /// The stored item, including its assigned id
    pub item: Item,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, error: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
        }),
    )
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::ItemNotFound(_) => api_error(StatusCode::NOT_FOUND, "Item not found"),
            Error::InvalidItemId(_) => api_error(StatusCode::BAD_REQUEST, "Invalid item ID"),
            Error::InvalidPayload(_) => api_error(StatusCode::BAD_REQUEST, err.to_string()),
            other => {
                tracing::error!("Unexpected error: {}", other);
                api_error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}

// Handlers

/// Welcome message
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Welcome message", body = WelcomeResponse)
    ),
    tag = "meta"
)]
pub async fn root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to Simple Backend API v1.1".into(),
        docs: "/docs".into(),
    })
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".into(),
        message: "Service is running".into(),
    })
}

/// List all items
#[utoipa::path(
    get,
    path = "/items",
    responses(
        (status = 200, description = "All items", body = ListResponse)
    ),
    tag = "items"
)]
pub async fn list_items(State(state): State<AppState>) -> Json<ListResponse> {
    let items = state.store.list().await;
    tracing::debug!("Listing {} items", items.len());

    Json(ListResponse {
        count: items.len(),
        items,
    })
}

/// Get a single item by ID
#[utoipa::path(
    get,
    path = "/items/{id}",
    params(
        ("id" = u64, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item found", body = ItemResponse),
        (status = 400, description = "Invalid item ID", body = ErrorResponse),
        (status = 404, description = "Item not found", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ItemResponse>, ApiError> {
    let id = parse_item_id(&id).inspect_err(|e| {
        if let Error::InvalidItemId(_) = e {
            tracing::warn!("Rejected item ID {:?}", id);
        }
    })?;

    let item = state
        .store
        .get(id)
        .await
        .ok_or_else(|| Error::ItemNotFound(id.to_string()))?;

    Ok(Json(ItemResponse { item }))
}

/// Create a new item
#[utoipa::path(
    post,
    path = "/items",
    request_body = NewItem,
    responses(
        (status = 200, description = "Item created", body = CreatedResponse),
        (status = 400, description = "Invalid request body", body = ErrorResponse),
        (status = 500, description = "Item IDs exhausted", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn create_item(
    State(state): State<AppState>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let Json(value) = payload.map_err(|rejection| {
        tracing::warn!("Rejected request body: {}", rejection.body_text());
        Error::InvalidPayload(rejection.body_text())
    })?;

    let new = NewItem::try_from(value).inspect_err(|e| {
        tracing::warn!("Rejected item payload: {}", e);
    })?;

    let item = state.store.append(new).await?;
    tracing::info!("Created item {} ({:?})", item.id, item.name);

    Ok(Json(CreatedResponse {
        message: "Item created successfully".into(),
        item,
    }))
}

/// Fallback for unmatched routes
pub async fn not_found() -> ApiError {
    api_error(StatusCode::NOT_FOUND, "Not found")
}
