//! Catalog API Client
//!
//! Frontend bindings to the catalog REST backend, organized by concern.

mod error;
mod image;
mod item;

use reqwest::{Response, StatusCode};

// Re-export all public items
pub use error::*;
pub use image::*;
pub use item::*;

fn http_client() -> reqwest::Client {
    reqwest::Client::new()
}

/// Map a non-2xx response to `ApiError::Status`.
fn check_status(response: Response) -> Result<Response, ApiError> {
    ensure_success(response.status())?;
    Ok(response)
}

fn ensure_success(status: StatusCode) -> Result<(), ApiError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(ApiError::Status(status.as_u16()))
    }
}
