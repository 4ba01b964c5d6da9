pub mod app;
pub mod bottom_login;
pub mod create_button;
pub mod delete_modal;
pub mod menu_list;
pub mod notice;
pub mod personal_center;
pub mod popover;
pub mod recent_list;
pub mod sidebar;
pub mod workspace_picker;

pub use app::App;
pub use bottom_login::BottomLogin;
pub use create_button::CreateButton;
pub use delete_modal::DeleteModal;
pub use menu_list::MenuList;
pub use notice::NoticeToast;
pub use personal_center::PersonalCenter;
pub use popover::Popover;
pub use recent_list::RecentList;
pub use sidebar::{Sidebar, SidebarProps};
pub use workspace_picker::WorkspacePicker;
