//! HTTP request handlers

pub mod health;
pub mod inventory;
pub mod enrich;
pub mod export;

use actix_web::HttpResponse;
use serde::Serialize;
use utoipa::ToSchema;

/// Error response
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: ApiError,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        ErrorResponse {
            success: false,
            error: ApiError {
                code: code.to_string(),
                message: message.into(),
            },
        }
    }
}

fn bad_request(code: &str, message: impl Into<String>) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse::new(code, message))
}
