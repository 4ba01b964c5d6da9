use std::rc::Rc;
use yew::prelude::*;

use super::Popover;
use crate::models::{Session, UserProfile};
use crate::utils::t;

#[derive(Properties, PartialEq)]
pub struct PersonalCenterProps {
    pub open: bool,
    pub user: Option<UserProfile>,
    pub sessions: Rc<Vec<Session>>,
    pub language: String,
    pub on_close: Callback<()>,
    pub on_delete: Callback<i64>,
}

/// Centro personal: perfil y gestión de las conversaciones recientes
#[function_component(PersonalCenter)]
pub fn personal_center(props: &PersonalCenterProps) -> Html {
    let nickname = props.user.as_ref().map(|u| u.nickname.clone()).unwrap_or_default();

    let rows = props.sessions.iter().map(|session| {
        let delete = {
            let cb = props.on_delete.clone();
            let id = session.id;
            Callback::from(move |_e: MouseEvent| cb.emit(id))
        };
        html! {
            <div key={session.id} class="personal-center-row">
                <span>{ &session.bot_name }</span>
                <button class="btn btn-link" onclick={delete}>{"✕"}</button>
            </div>
        }
    });

    html! {
        <Popover open={props.open} on_dismiss={props.on_close.clone()} class={classes!("personal-center")}>
            <h3>{ t("personal_center", &props.language) }</h3>
            <div class="personal-center-user">{ nickname }</div>
            <div class="personal-center-title">{ t("recently_used", &props.language) }</div>
            { for rows }
        </Popover>
    }
}
