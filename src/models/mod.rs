pub mod session;
pub mod workspace;
pub mod menu;
pub mod user;

pub use session::{dedup_by_bot, ApiEnvelope, DeleteSessionRequest, Session};
pub use workspace::{WorkspaceContext, WorkspaceType};
pub use menu::{static_menu, MenuGroup, MenuNode, MY_AGENTS_KEY, STATIC_MENU};
pub use user::UserProfile;
