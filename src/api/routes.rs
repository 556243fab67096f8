//! API route definitions

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{
    self, CreatedResponse, ErrorResponse, HealthResponse, ItemResponse, ListResponse,
    WelcomeResponse,
};
use crate::store::ItemStore;
use crate::types::{Item, NewItem};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Simple Backend API",
        version = "1.1.0",
        description = "In-memory item catalogue"
    ),
    tags(
        (name = "items", description = "Item management"),
        (name = "health", description = "Health checks"),
        (name = "meta", description = "Service information")
    ),
    paths(
        handlers::root,
        handlers::health,
        handlers::list_items,
        handlers::get_item,
        handlers::create_item,
    ),
    components(schemas(
        Item,
        NewItem,
        ListResponse,
        ItemResponse,
        CreatedResponse,
        HealthResponse,
        WelcomeResponse,
        ErrorResponse,
    ))
)]
pub struct ApiDoc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ItemStore>,
}

impl AppState {
    pub fn new(store: ItemStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    let openapi = ApiDoc::openapi();

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))

        // Items
        .route("/items", get(handlers::list_items).post(handlers::create_item))
        .route("/items/{id}", get(handlers::get_item))

        // OpenAPI spec and Swagger UI
        .merge(SwaggerUi::new("/docs").url("/openapi.json", openapi))

        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
