// ============================================================================
// STATE MODULE - Núcleos de estado sin dependencias del navegador
// ============================================================================

pub mod reactivity;
pub mod auth_state;
pub mod session_cache;
pub mod delete_flow;
pub mod sidebar_state;

pub use reactivity::*;
pub use auth_state::*;
pub use session_cache::*;
pub use delete_flow::*;
pub use sidebar_state::*;
