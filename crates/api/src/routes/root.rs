//! Welcome endpoint.

use axum::Json;
use serde::Serialize;

pub const WELCOME_MESSAGE: &str = "Welcome to AI Finance Copilot API!";

#[derive(Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
}

/// GET / — returns the fixed welcome message.
pub async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: WELCOME_MESSAGE,
    })
}
