use yew::prelude::*;

use super::Sidebar;
use crate::context::{LanguageProvider, WorkspaceProvider};
use crate::models::UserProfile;
use crate::utils::load_from_storage;

const STORAGE_KEY_USER: &str = "userInfo";

#[function_component(App)]
pub fn app() -> Html {
    // Perfil cacheado por el host tras el login; puede no existir
    let user = use_memo((), |_| load_from_storage::<UserProfile>(STORAGE_KEY_USER));

    html! {
        <LanguageProvider>
            <WorkspaceProvider>
                <div class="app-layout">
                    <Sidebar user={(*user).clone()} />
                    <main class="app-main" id="app-main"></main>
                </div>
            </WorkspaceProvider>
        </LanguageProvider>
    }
}
