//! Theme Endpoints

use crate::config::ApiConfig;
use crate::error::ApiResult;
use crate::models::ThemeBundle;
use super::post_json;

/// Create a theme together with its icon, image and piece
pub async fn create_theme(config: &ApiConfig, bundle: &ThemeBundle) -> ApiResult<()> {
    post_json(&config.endpoint("temas/create"), bundle).await?;
    Ok(())
}
