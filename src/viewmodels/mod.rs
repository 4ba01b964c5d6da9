pub mod menu_viewmodel;
pub mod session_viewmodel;
pub mod sidebar_viewmodel;

pub use menu_viewmodel::{active_key_for_path, compose, MenuComposer};
pub use session_viewmodel::{DeleteOutcome, SessionViewModel};
pub use sidebar_viewmodel::{sidebar_view, SidebarView};
