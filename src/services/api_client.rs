// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// Lista y borrado de sesiones recientes. Sin lógica de negocio.
// ============================================================================

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::config::CONFIG;
use crate::error::{ApiError, ApiResult};
use crate::models::{ApiEnvelope, DeleteSessionRequest, Session};
use crate::utils::storage::read_access_token;

/// Contrato de los colaboradores de sesiones
#[allow(async_fn_in_trait)]
pub trait SessionApi {
    /// Lista ordenada de sesiones recientes
    async fn fetch_sessions(&self) -> ApiResult<Vec<Session>>;

    /// Borra una sesión por id numérico
    async fn delete_session(&self, session_id: i64) -> ApiResult<()>;
}

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(&CONFIG.backend_url)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn bearer() -> Option<String> {
        read_access_token().map(|token| format!("Bearer {}", token))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionApi for ApiClient {
    async fn fetch_sessions(&self) -> ApiResult<Vec<Session>> {
        let url = self.url("/chat-list/all-chat-list");
        log::info!("📋 Obteniendo sesiones recientes: {}", url);

        let mut request = Request::post(&url);
        if let Some(auth) = Self::bearer() {
            request = request.header("Authorization", &auth);
        }
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let sessions: Option<Vec<Session>> = unwrap_envelope(response).await?;
        Ok(sessions.unwrap_or_default())
    }

    async fn delete_session(&self, session_id: i64) -> ApiResult<()> {
        let url = self.url("/chat-list/v1/del-chat-list");
        log::info!("🗑️ Borrando sesión #{}", session_id);

        let mut request = Request::post(&url);
        if let Some(auth) = Self::bearer() {
            request = request.header("Authorization", &auth);
        }
        let response = request
            .json(&DeleteSessionRequest { chat_list_id: session_id })
            .map_err(|e| ApiError::Parse(format!("Serialization error: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let _: Option<serde_json::Value> = unwrap_envelope(response).await?;
        Ok(())
    }
}

/// Comprueba estado HTTP y código de negocio, y devuelve `data`
async fn unwrap_envelope<T: DeserializeOwned>(response: Response) -> ApiResult<Option<T>> {
    if !response.ok() {
        let status = response.status();
        let text = response
            .text()
            .await
            .unwrap_or_else(|_| response.status_text());
        return Err(ApiError::Http { status, text });
    }

    let envelope = response
        .json::<ApiEnvelope<T>>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))?;

    check_envelope(envelope)
}

fn check_envelope<T>(envelope: ApiEnvelope<T>) -> ApiResult<Option<T>> {
    if envelope.is_success() {
        Ok(envelope.data)
    } else {
        Err(ApiError::Rejected {
            code: envelope.code,
            message: envelope.message.unwrap_or_default(),
        })
    }
}
