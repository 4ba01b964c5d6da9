use yew::prelude::*;

use crate::services::navigation::set_query_param;
use crate::utils::{load_raw_from_session, t, SESSION_KEY_BD_VID};

#[derive(Properties, PartialEq)]
pub struct CreateButtonProps {
    pub is_collapsed: bool,
    pub is_authenticated: bool,
    pub language: String,
    pub on_create: Callback<()>,
    pub on_not_login: Callback<()>,
    #[prop_or_default]
    pub on_analytics: Option<Callback<()>>,
}

#[function_component(CreateButton)]
pub fn create_button(props: &CreateButtonProps) -> Html {
    let onclick = {
        let is_authenticated = props.is_authenticated;
        let on_create = props.on_create.clone();
        let on_not_login = props.on_not_login.clone();
        let on_analytics = props.on_analytics.clone();
        Callback::from(move |_e: MouseEvent| {
            // El evento de estadística se registra siempre
            if let Some(cb) = &on_analytics {
                cb.emit(());
            }

            if !is_authenticated {
                on_not_login.emit(());
                return;
            }

            if let Some(bd_vid) = load_raw_from_session(SESSION_KEY_BD_VID) {
                if let Err(e) = set_query_param(SESSION_KEY_BD_VID, &bd_vid) {
                    log::warn!("⚠️ No se pudo añadir bd_vid a la URL: {:?}", e);
                }
            }

            on_create.emit(());
        })
    };

    html! {
        <div class="create-button-wrapper">
            <button class={classes!("create-button", props.is_collapsed.then_some("collapsed"))} {onclick}>
                <span class="create-icon">{"+"}</span>
                if !props.is_collapsed {
                    <span class="create-label">{ t("create", &props.language) }</span>
                }
            </button>
        </div>
    }
}
