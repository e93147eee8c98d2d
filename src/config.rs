//! Frontend Configuration
//!
//! Backend location, fixed business constants and route table.

/// Backend root used when `DOTBOARD_API_URL` is not set at build time
const DEFAULT_API_URL: &str = "http://localhost:3333";

/// Coins granted to every new account
pub const STARTING_BALANCE: u32 = 100;

/// How long success/error banners stay on screen
pub const TOAST_DURATION_MS: u32 = 9000;

/// Longest accepted user name, in characters
pub const USER_NAME_MAX_LEN: usize = 100;

/// Connection settings for the game backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Config baked in at build time
    pub fn from_build_env() -> Self {
        Self::new(option_env!("DOTBOARD_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    /// Absolute URL for an API path, with or without a leading slash
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

/// Application routes
pub mod routes {
    pub const CADASTRO: &str = "/pages/cadastro";
    pub const LOGIN: &str = "/pages/login";
    pub const THEME_LIST: &str = "/pages/temas/lista";

    pub fn image_create(theme_id: u32) -> String {
        format!("/pages/images/criar/{}", theme_id)
    }

    pub fn image_edit(image_id: u32) -> String {
        format!("/pages/images/editar/{}", image_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_with_single_slash() {
        let config = ApiConfig::new("http://api.example/");
        assert_eq!(config.endpoint("usuarios/create"), "http://api.example/usuarios/create");
        assert_eq!(config.endpoint("/usuarios/create"), "http://api.example/usuarios/create");
    }

    #[test]
    fn test_base_url_strips_trailing_slashes() {
        let config = ApiConfig::new("http://api.example//");
        assert_eq!(config.endpoint("temas"), "http://api.example/temas");
    }

    #[test]
    fn test_image_routes() {
        assert_eq!(routes::image_create(7), "/pages/images/criar/7");
        assert_eq!(routes::image_edit(3), "/pages/images/editar/3");
    }
}
