// ============================================================================
// NAVIGATION - Acceso mínimo a location/history
// ============================================================================

use wasm_bindgen::JsValue;
use web_sys::{window, Url};

pub fn current_pathname() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

pub fn current_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

pub fn current_origin() -> String {
    window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Navegación completa (sale del árbol de yew)
pub fn navigate(path: &str) {
    log::info!("🧭 Navegando a {}", path);
    if let Some(win) = window() {
        if let Err(e) = win.location().set_href(path) {
            log::error!("❌ Error navegando a {}: {:?}", path, e);
        }
    }
}

/// Añade/reemplaza un parámetro en la URL actual sin recargar
pub fn set_query_param(key: &str, value: &str) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("window no disponible"))?;
    let url = Url::new(&win.location().href()?)?;
    url.search_params().set(key, value);
    win.history()?
        .push_state_with_url(&JsValue::NULL, "", Some(&url.href()))
}
