//! Image Endpoints

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::ImageRecord;
use super::{get, post_empty};

pub async fn list_images_by_theme(config: &ApiConfig, theme_id: u32) -> ApiResult<Vec<ImageRecord>> {
    let response = get(&config.endpoint(&format!("imagens/getallbytema/{}", theme_id))).await?;
    response
        .json::<Vec<ImageRecord>>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// The backend only exposes deletion as a POST
pub async fn delete_image(config: &ApiConfig, image_id: u32) -> ApiResult<()> {
    post_empty(&config.endpoint(&format!("imagens/delete/{}", image_id))).await?;
    Ok(())
}
