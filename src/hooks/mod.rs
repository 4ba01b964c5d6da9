pub mod use_auth_signal;
pub mod use_menu;
pub mod use_notice;
pub mod use_session_list;

pub use use_auth_signal::{use_auth_signal, UseAuthSignalHandle};
pub use use_menu::use_menu;
pub use use_notice::{use_notice, Notice, NoticeKind, UseNoticeHandle};
pub use use_session_list::{use_session_list, UseSessionListHandle};
