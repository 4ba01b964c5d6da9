use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// ============================================================================
// SESIÓN RECIENTE - Un hilo de conversación con un agente
// ============================================================================

/// Entrada de la lista de sesiones recientes tal como la devuelve el backend.
///
/// `id` identifica la sesión para borrarla; `bot_id` identifica el agente y
/// es la clave para navegar y para deduplicar en pantalla.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: i64,
    pub bot_id: i64,
    #[serde(default)]
    pub bot_name: String,
    #[serde(default)]
    pub bot_avatar: Option<String>,
}

impl Session {
    pub fn new(id: i64, bot_id: i64, bot_name: &str) -> Self {
        Self {
            id,
            bot_id,
            bot_name: bot_name.to_string(),
            bot_avatar: None,
        }
    }

    pub fn with_avatar(mut self, avatar: &str) -> Self {
        self.bot_avatar = Some(avatar.to_string());
        self
    }

    /// Ruta de la pantalla de chat del agente
    pub fn chat_path(&self) -> String {
        format!("/chat/{}", self.bot_id)
    }
}

/// Quita duplicados por `bot_id` conservando la primera aparición y el orden del servidor
pub fn dedup_by_bot(sessions: Vec<Session>) -> Vec<Session> {
    let mut seen = HashSet::new();
    sessions
        .into_iter()
        .filter(|s| seen.insert(s.bot_id))
        .collect()
}

/// Cuerpo de la petición de borrado
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteSessionRequest {
    pub chat_list_id: i64,
}

/// Sobre común de las respuestas del backend de la consola
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub code: i64,
    #[serde(default)]
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    pub fn is_success(&self) -> bool {
        self.code == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_deserializes_from_camel_case() {
        let json = r#"{"id": 12, "botId": 7, "botName": "Planner", "botAvatar": "https://cdn/a.png"}"#;
        let session: Session = serde_json::from_str(json).unwrap();
        assert_eq!(session, Session::new(12, 7, "Planner").with_avatar("https://cdn/a.png"));
    }

    #[test]
    fn missing_name_and_avatar_default() {
        let session: Session = serde_json::from_str(r#"{"id": 1, "botId": 2}"#).unwrap();
        assert_eq!(session.bot_name, "");
        assert_eq!(session.bot_avatar, None);
    }

    #[test]
    fn dedup_keeps_first_occurrence_per_bot() {
        let sessions = vec![
            Session::new(1, 10, "a"),
            Session::new(2, 20, "b"),
            Session::new(3, 10, "a-again"),
        ];
        let deduped = dedup_by_bot(sessions);
        assert_eq!(deduped.iter().map(|s| s.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn envelope_success_is_code_zero() {
        let env: ApiEnvelope<Vec<Session>> =
            serde_json::from_str(r#"{"code": 0, "data": []}"#).unwrap();
        assert!(env.is_success());
        assert_eq!(env.data, Some(vec![]));
    }

    #[test]
    fn envelope_without_data_is_none() {
        let env: ApiEnvelope<serde_json::Value> =
            serde_json::from_str(r#"{"code": 0, "message": "ok"}"#).unwrap();
        assert!(env.is_success());
        assert_eq!(env.data, None);
    }
}
