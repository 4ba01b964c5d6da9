use std::rc::Rc;
use yew::prelude::*;

use crate::models::Session;
use crate::utils::t;

#[derive(Properties, PartialEq)]
pub struct RecentListProps {
    pub is_collapsed: bool,
    pub show_recent: bool,
    pub sessions: Rc<Vec<Session>>,
    pub language: String,
    pub on_toggle: Callback<()>,
    pub on_navigate: Callback<Session>,
    pub on_delete: Callback<i64>,
}

#[function_component(RecentList)]
pub fn recent_list(props: &RecentListProps) -> Html {
    if props.is_collapsed {
        return html! {};
    }

    let toggle_click = {
        let cb = props.on_toggle.clone();
        Callback::from(move |_e: MouseEvent| cb.emit(()))
    };
    let arrow_class = if props.show_recent { "recent-arrow" } else { "recent-arrow rotated" };

    let rows = if props.show_recent {
        props
            .sessions
            .iter()
            .map(|session| {
                let navigate = {
                    let cb = props.on_navigate.clone();
                    let session = session.clone();
                    Callback::from(move |_e: MouseEvent| cb.emit(session.clone()))
                };
                let delete = {
                    let cb = props.on_delete.clone();
                    let id = session.id;
                    Callback::from(move |e: MouseEvent| {
                        // No debe navegar al pulsar la X
                        e.stop_propagation();
                        cb.emit(id);
                    })
                };
                let avatar = session.bot_avatar.clone().unwrap_or_default();

                html! {
                    <div key={session.bot_id} class="recent-item" onclick={navigate}>
                        <img class="recent-avatar" src={avatar} alt="" />
                        <span class="recent-name">{ &session.bot_name }</span>
                        <span class="recent-remove" onclick={delete}>{"✕"}</span>
                    </div>
                }
            })
            .collect::<Html>()
    } else {
        html! {}
    };

    html! {
        <div class="recent-list">
            <div class="recent-header" onclick={toggle_click}>
                <span class="recent-title">{ t("recently_used", &props.language) }</span>
                <span class={arrow_class}>{"▴"}</span>
            </div>
            <div class={if props.show_recent { "recent-body open" } else { "recent-body" }}>
                { rows }
            </div>
        </div>
    }
}
