use yew::prelude::*;

use super::Popover;
use crate::models::UserProfile;
use crate::utils::t;

const DEFAULT_AVATAR: &str = "/assets/sidebar/avatar.png";

#[derive(Properties, PartialEq)]
pub struct BottomLoginProps {
    pub is_collapsed: bool,
    pub is_authenticated: bool,
    pub user: Option<UserProfile>,
    pub account_panel_open: bool,
    pub language: String,
    /// Sin sesión: redirección de login. Con sesión: abrir/cerrar el panel.
    pub on_click: Callback<()>,
    pub on_close_panel: Callback<()>,
    pub on_personal_center: Callback<()>,
    /// Cambia al otro idioma
    pub on_switch_language: Callback<()>,
    pub on_logout: Callback<()>,
}

#[function_component(BottomLogin)]
pub fn bottom_login(props: &BottomLoginProps) -> Html {
    let lang = props.language.clone();
    let onclick = {
        let cb = props.on_click.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            cb.emit(());
        })
    };

    if !props.is_authenticated {
        return html! {
            <div class="bottom-login">
                <button class="login-btn" {onclick}>{ t("login", &lang) }</button>
            </div>
        };
    }

    let user = props.user.clone().unwrap_or_default();
    let avatar = user.avatar.clone().unwrap_or_else(|| DEFAULT_AVATAR.to_string());

    let personal_center_click = {
        let cb = props.on_personal_center.clone();
        Callback::from(move |_e: MouseEvent| cb.emit(()))
    };
    let language_click = {
        let cb = props.on_switch_language.clone();
        Callback::from(move |_e: MouseEvent| cb.emit(()))
    };
    let other_language = if lang == "en" { "zh" } else { "en" };
    let logout_click = {
        let cb = props.on_logout.clone();
        Callback::from(move |_e: MouseEvent| cb.emit(()))
    };

    html! {
        <div class="bottom-login">
            <div class="account" {onclick}>
                <img class="account-avatar" src={avatar} alt="" />
                if !props.is_collapsed {
                    <span class="account-name" title={user.nickname.clone()}>{ &user.nickname }</span>
                    <span class={classes!("account-arrow", props.account_panel_open.then_some("up"))}>{"▾"}</span>
                }
            </div>
            <Popover
                open={props.account_panel_open}
                on_dismiss={props.on_close_panel.clone()}
                class={classes!("account-panel")}
            >
                <div class="account-panel-item" onclick={personal_center_click}>
                    { t("personal_center", &lang) }
                </div>
                <div class="account-panel-item language" onclick={language_click}>
                    <span>{ t("language", &lang) }</span>
                    <span class="language-target">{ t("language_name", other_language) }</span>
                </div>
                <div class="account-panel-item logout" onclick={logout_click}>
                    { t("logout", &lang) }
                </div>
            </Popover>
        </div>
    }
}
