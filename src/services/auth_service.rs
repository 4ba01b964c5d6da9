// ============================================================================
// AUTH SERVICE - Redirecciones de login y logout
// ============================================================================
// El protocolo SSO queda fuera: aquí sólo se decide a dónde ir.
// ============================================================================

use crate::config::{AuthConfig, CONFIG};
use crate::services::navigation::{current_origin, current_pathname, current_search, navigate};
use crate::utils::{save_raw_to_session, SESSION_KEY_POST_LOGIN_REDIRECT};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginTarget {
    /// Página de login local (entornos sin proveedor de identidad)
    Local { path: String },
    /// Proveedor SSO; `return_to` se recuerda para volver tras el login
    Sso { url: String, return_to: String },
}

pub fn login_target(auth: &AuthConfig, pathname: &str, search: &str) -> LoginTarget {
    if !auth.is_sso_enabled() {
        return LoginTarget::Local {
            path: auth.login_path.clone(),
        };
    }
    LoginTarget::Sso {
        url: format!("{}/login", auth.sso_server_url.trim_end_matches('/')),
        return_to: format!("{}{}", pathname, search),
    }
}

pub fn logout_target(auth: &AuthConfig, origin: &str) -> String {
    if auth.is_sso_enabled() {
        format!(
            "{}/logout?redirect_uri={}",
            auth.sso_server_url.trim_end_matches('/'),
            String::from(js_sys::encode_uri_component(origin))
        )
    } else {
        auth.login_path.clone()
    }
}

/// Redirección de login: no devuelve nada, navega fuera de la app
pub fn handle_login_redirect() {
    match login_target(&CONFIG.auth, &current_pathname(), &current_search()) {
        LoginTarget::Local { path } => {
            log::info!("🔐 SSO no configurado, login local");
            navigate(&path);
        }
        LoginTarget::Sso { url, return_to } => {
            if let Err(e) = save_raw_to_session(SESSION_KEY_POST_LOGIN_REDIRECT, &return_to) {
                log::warn!("⚠️ {}", e);
            }
            navigate(&url);
        }
    }
}

/// Salida hacia el proveedor tras limpiar el estado local
pub fn handle_logout_redirect() {
    navigate(&logout_target(&CONFIG.auth, &current_origin()));
}
