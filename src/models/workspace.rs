use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WorkspaceType {
    #[default]
    Personal,
    Team,
}

/// Instantánea del espacio de trabajo activo.
///
/// La posee un store externo; el sidebar sólo la lee.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceContext {
    #[serde(rename = "type", default)]
    pub kind: WorkspaceType,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    /// Sin espacio de equipo configurado
    #[serde(default)]
    pub is_empty: bool,
}

impl WorkspaceContext {
    pub fn personal(id: Option<&str>, name: &str) -> Self {
        Self {
            kind: WorkspaceType::Personal,
            id: id.map(|s| s.to_string()),
            name: name.to_string(),
            is_empty: false,
        }
    }

    pub fn team(id: &str, name: &str) -> Self {
        Self {
            kind: WorkspaceType::Team,
            id: Some(id.to_string()),
            name: name.to_string(),
            is_empty: false,
        }
    }

    pub fn empty() -> Self {
        Self {
            is_empty: true,
            ..Self::default()
        }
    }

    /// Tiene un id no vacío
    pub fn has_id(&self) -> bool {
        self.id.as_deref().map_or(false, |id| !id.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_store_snapshot() {
        let json = r#"{"type": "team", "id": "42", "name": "Ops", "isEmpty": false}"#;
        let ctx: WorkspaceContext = serde_json::from_str(json).unwrap();
        assert_eq!(ctx, WorkspaceContext::team("42", "Ops"));
    }

    #[test]
    fn blank_id_does_not_count() {
        assert!(!WorkspaceContext::personal(Some("  "), "me").has_id());
        assert!(WorkspaceContext::personal(Some("u1"), "me").has_id());
        assert!(!WorkspaceContext::personal(None, "me").has_id());
    }
}
