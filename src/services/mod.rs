pub mod api_client;
pub mod auth_service;
pub mod credential_watcher;
pub mod event_bus;
pub mod navigation;

pub use api_client::{ApiClient, SessionApi};
pub use auth_service::*;
pub use credential_watcher::CredentialWatcher;
pub use event_bus::{notify_session_list_changed, EventBus, Subscription, Topic};
