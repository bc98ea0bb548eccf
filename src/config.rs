use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url_development: String,
    pub api_base_url_production: String,
    pub environment: String,
    pub enable_logging: bool,
    pub ui_config: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    pub default_page_size: u32,
    pub toast_dismiss_ms: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            toast_dismiss_ms: 5_000,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url_development: "http://localhost:8000/api".to_string(),
            api_base_url_production: "https://api.linguadesk.example.com/api".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            ui_config: UiConfig::default(),
        }
    }
}

impl AppConfig {
    /// Configuration baked in at compile time; build.rs forwards values from
    /// a local .env file.
    pub fn from_env() -> Self {
        Self {
            api_base_url_development: option_env!("API_BASE_URL_DEVELOPMENT")
                .unwrap_or("http://localhost:8000/api")
                .to_string(),
            api_base_url_production: option_env!("API_BASE_URL_PRODUCTION")
                .unwrap_or("https://api.linguadesk.example.com/api")
                .to_string(),
            environment: option_env!("ENVIRONMENT").unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true")
                .parse()
                .unwrap_or(true),
            ui_config: UiConfig {
                default_page_size: option_env!("DEFAULT_PAGE_SIZE")
                    .unwrap_or("10")
                    .parse()
                    .unwrap_or(10),
                toast_dismiss_ms: option_env!("TOAST_DISMISS_MS")
                    .unwrap_or("5000")
                    .parse()
                    .unwrap_or(5_000),
            },
        }
    }

    /// Backend base URL for the current environment.
    pub fn api_base_url(&self) -> &str {
        match self.environment.as_str() {
            "production" => &self.api_base_url_production,
            _ => &self.api_base_url_development,
        }
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn development_environment_selects_development_url() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url(), "http://localhost:8000/api");
    }

    #[test]
    fn production_environment_selects_production_url() {
        let config = AppConfig {
            environment: "production".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.api_base_url(), "https://api.linguadesk.example.com/api");
    }
}
