//! HTTP API layer

mod routes;
mod handlers;

pub use handlers::{
    CreatedResponse, ErrorResponse, HealthResponse, ItemResponse, ListResponse, WelcomeResponse,
};
pub use routes::{create_router, ApiDoc, AppState};
