use serde::{Deserialize, Serialize};

/// Datos de perfil que pinta la zona inferior del sidebar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UserProfile {
    #[serde(default)]
    pub uid: Option<String>,
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub avatar: Option<String>,
}
