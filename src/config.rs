use serde::{Deserialize, Serialize};

/// Host que se usa como valor de relleno cuando el SSO no está configurado
const SSO_FALLBACK_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url: String,
    pub environment: String,
    pub enable_logging: bool,
    pub auth: AuthConfig,
    pub ui: UIConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    pub poll_interval_ms: u32,
    pub access_token_key: String,
    pub refresh_token_key: String,
    pub sso_server_url: String,
    pub login_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UIConfig {
    pub notice_timeout_ms: u32,
    pub default_language: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: "http://localhost:8080".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            auth: AuthConfig::default(),
            ui: UIConfig::default(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 5_000,
            access_token_key: "accessToken".to_string(),
            refresh_token_key: "refreshToken".to_string(),
            sso_server_url: String::new(),
            login_path: "/login".to_string(),
        }
    }
}

impl Default for UIConfig {
    fn default() -> Self {
        Self {
            notice_timeout_ms: 3_000,
            default_language: "zh".to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            backend_url: option_env!("BACKEND_URL")
                .map(|s| s.to_string())
                .unwrap_or(defaults.backend_url),
            environment: option_env!("ENVIRONMENT")
                .map(|s| s.to_string())
                .unwrap_or(defaults.environment),
            enable_logging: option_env!("ENABLE_LOGGING")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.enable_logging),
            auth: AuthConfig {
                poll_interval_ms: option_env!("AUTH_POLL_INTERVAL_MS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(defaults.auth.poll_interval_ms),
                access_token_key: option_env!("ACCESS_TOKEN_KEY")
                    .map(|s| s.to_string())
                    .unwrap_or(defaults.auth.access_token_key),
                refresh_token_key: option_env!("REFRESH_TOKEN_KEY")
                    .map(|s| s.to_string())
                    .unwrap_or(defaults.auth.refresh_token_key),
                sso_server_url: option_env!("SSO_SERVER_URL")
                    .map(|s| s.to_string())
                    .unwrap_or(defaults.auth.sso_server_url),
                login_path: option_env!("LOGIN_PATH")
                    .map(|s| s.to_string())
                    .unwrap_or(defaults.auth.login_path),
            },
            ui: UIConfig {
                notice_timeout_ms: option_env!("NOTICE_TIMEOUT_MS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(defaults.ui.notice_timeout_ms),
                default_language: option_env!("DEFAULT_LANGUAGE")
                    .map(|s| s.to_string())
                    .unwrap_or(defaults.ui.default_language),
            },
        }
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

impl AuthConfig {
    /// El SSO sólo cuenta como activo con una URL real (ni vacía ni el host de relleno)
    pub fn is_sso_enabled(&self) -> bool {
        let url = self.sso_server_url.trim();
        !url.is_empty() && url != SSO_FALLBACK_URL
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
