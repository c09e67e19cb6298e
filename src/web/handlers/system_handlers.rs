// src/web/handlers/system_handlers.rs
use crate::core::ConfigManager;
use crate::web::types::TextResponse;

use rocket::serde::json::Json;
use rocket::State;
use tracing::info;

pub async fn health_handler(config: &State<ConfigManager>) -> Json<TextResponse> {
    info!("Health check ({})", config.environment);
    Json(TextResponse::success(
        format!("OK ({})", config.environment),
        None,
    ))
}
