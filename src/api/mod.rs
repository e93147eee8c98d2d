//! Backend API Client
//!
//! Thin HTTP bindings to the game backend, organized by domain.
//! No retry, no caching: one call, one request.

mod usuarios;
mod temas;
mod imagens;

use gloo_net::http::{Request, Response};
use serde::Serialize;

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{ImageRecord, NewUser, ThemeBundle};

pub use usuarios::*;
pub use temas::*;
pub use imagens::*;

/// Operations pages need from the backend
#[allow(async_fn_in_trait)]
pub trait Backend {
    async fn create_user(&self, user: &NewUser) -> ApiResult<()>;
    async fn create_theme(&self, bundle: &ThemeBundle) -> ApiResult<()>;
    async fn list_images_by_theme(&self, theme_id: u32) -> ApiResult<Vec<ImageRecord>>;
    async fn delete_image(&self, image_id: u32) -> ApiResult<()>;
}

/// Backend reached over HTTP from the browser
#[derive(Debug, Clone, Default)]
pub struct HttpBackend {
    config: ApiConfig,
}

impl HttpBackend {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

impl Backend for HttpBackend {
    async fn create_user(&self, user: &NewUser) -> ApiResult<()> {
        usuarios::create_user(&self.config, user).await
    }

    async fn create_theme(&self, bundle: &ThemeBundle) -> ApiResult<()> {
        temas::create_theme(&self.config, bundle).await
    }

    async fn list_images_by_theme(&self, theme_id: u32) -> ApiResult<Vec<ImageRecord>> {
        imagens::list_images_by_theme(&self.config, theme_id).await
    }

    async fn delete_image(&self, image_id: u32) -> ApiResult<()> {
        imagens::delete_image(&self.config, image_id).await
    }
}

// ========================
// Request Helpers
// ========================

async fn post_json<B: Serialize>(url: &str, body: &B) -> ApiResult<Response> {
    let request = Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    let response = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
    ensure_ok(response)
}

async fn post_empty(url: &str) -> ApiResult<Response> {
    let response = Request::post(url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    ensure_ok(response)
}

async fn get(url: &str) -> ApiResult<Response> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    ensure_ok(response)
}

fn ensure_ok(response: Response) -> ApiResult<Response> {
    if response.ok() {
        Ok(response)
    } else {
        Err(ApiError::Status(response.status()))
    }
}
