// ============================================================================
// AGENT CONSOLE SIDEBAR - Navegación lateral de la consola de agentes
// ============================================================================
// Capas:
// - Models: estructuras compartidas con el backend
// - State: núcleos de estado sin navegador (testeables en nativo)
// - Services: API, credenciales, bus de eventos, navegación
// - ViewModels: composición de menú y flujo de sesiones
// - Hooks/Components: capa yew
// ============================================================================

pub mod components;
pub mod config;
pub mod context;
pub mod error;
pub mod hooks;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;

use wasm_bindgen::prelude::*;

pub use components::{App, Sidebar, SidebarProps};
pub use config::CONFIG;
pub use error::{ApiError, ApiResult};

/// Panic hook + logger + render de la app sobre `<body>`
pub fn run() {
    console_error_panic_hook::set_once();

    let level = if CONFIG.is_logging_enabled() {
        log::Level::Debug
    } else {
        log::Level::Warn
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("🚀 Agent console sidebar ({})", CONFIG.environment);

    yew::Renderer::<App>::new().render();
}

/// Para la página anfitriona: cualquier pantalla que cree, borre o renombre
/// sesiones lo llama y el sidebar refresca su lista.
#[wasm_bindgen(js_name = notifySessionListChanged)]
pub fn notify_session_list_changed() {
    services::notify_session_list_changed();
}
