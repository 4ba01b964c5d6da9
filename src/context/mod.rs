pub mod language;
pub mod workspace;

pub use language::{Language, LanguageContext, LanguageProvider};
pub use workspace::{WorkspaceProvider, WorkspaceStore};
