// ============================================================================
// ERRORES - Errores de los colaboradores HTTP
// ============================================================================

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {text}")]
    Http { status: u16, text: String },

    #[error("Parse error: {0}")]
    Parse(String),

    /// El backend respondió pero con un código de negocio distinto de éxito
    #[error("Rejected by backend (code {code}): {message}")]
    Rejected { code: i64, message: String },
}

pub type ApiResult<T> = Result<T, ApiError>;
