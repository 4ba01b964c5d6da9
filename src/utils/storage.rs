use gloo_storage::{SessionStorage, Storage as _};
use serde::{de::DeserializeOwned, Serialize};
use web_sys::{window, Storage};

use crate::config::CONFIG;
use crate::state::CredentialStore;

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

pub fn save_to_storage<T: Serialize>(key: &str, value: &T) -> Result<(), String> {
    let storage = get_local_storage().ok_or("localStorage no disponible")?;
    let json = serde_json::to_string(value)
        .map_err(|e| format!("Error serializando datos: {}", e))?;
    storage
        .set_item(key, &json)
        .map_err(|_| "Error guardando en localStorage".to_string())?;
    Ok(())
}

pub fn load_from_storage<T: DeserializeOwned>(key: &str) -> Option<T> {
    let storage = get_local_storage()?;
    let json = storage.get_item(key).ok()??;
    serde_json::from_str(&json).ok()
}

/// Valor crudo, sin JSON (los tokens se guardan como texto plano)
pub fn load_raw_from_storage(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}

pub fn save_raw_to_storage(key: &str, value: &str) -> Result<(), String> {
    let storage = get_local_storage().ok_or("localStorage no disponible")?;
    storage
        .set_item(key, value)
        .map_err(|_| "Error guardando en localStorage".to_string())
}

pub fn remove_from_storage(key: &str) -> Result<(), String> {
    let storage = get_local_storage().ok_or("localStorage no disponible")?;
    storage
        .remove_item(key)
        .map_err(|_| "Error eliminando de localStorage".to_string())?;
    Ok(())
}

pub fn read_access_token() -> Option<String> {
    load_raw_from_storage(&CONFIG.auth.access_token_key)
}

/// Texto plano en sessionStorage (sólo vive en esta pestaña)
pub fn save_raw_to_session(key: &str, value: &str) -> Result<(), String> {
    SessionStorage::raw()
        .set_item(key, value)
        .map_err(|_| "Error guardando en sessionStorage".to_string())
}

pub fn load_raw_from_session(key: &str) -> Option<String> {
    SessionStorage::raw().get_item(key).ok()?
}

/// Credenciales en localStorage
#[derive(Debug, Clone, Default)]
pub struct LocalStorageCredentials;

impl CredentialStore for LocalStorageCredentials {
    fn read_token(&self) -> Option<String> {
        read_access_token()
    }

    fn clear(&self) {
        for key in [&CONFIG.auth.access_token_key, &CONFIG.auth.refresh_token_key] {
            if let Err(e) = remove_from_storage(key) {
                log::warn!("⚠️ No se pudo borrar {}: {}", key, e);
            }
        }
    }
}
