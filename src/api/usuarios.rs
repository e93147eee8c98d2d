//! User Endpoints

use crate::config::ApiConfig;
use crate::error::ApiResult;
use crate::models::NewUser;
use super::post_json;

pub async fn create_user(config: &ApiConfig, user: &NewUser) -> ApiResult<()> {
    post_json(&config.endpoint("usuarios/create"), user).await?;
    Ok(())
}
