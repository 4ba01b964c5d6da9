use std::rc::Rc;
use yew::prelude::*;

use crate::models::{MenuGroup, MenuNode};
use crate::utils::t;

#[derive(Properties, PartialEq)]
pub struct MenuListProps {
    pub menu: Rc<Vec<MenuGroup>>,
    pub is_collapsed: bool,
    pub active_key: Option<String>,
    pub language: String,
    pub on_select: Callback<MenuNode>,
}

#[function_component(MenuList)]
pub fn menu_list(props: &MenuListProps) -> Html {
    let hover_key = use_state(|| None::<&'static str>);

    let groups = props.menu.iter().enumerate().map(|(index, group)| {
        let tabs = group.tabs.iter().map(|tab| {
            let highlighted = props.active_key.as_deref() == Some(tab.key) || *hover_key == Some(tab.key);
            let onclick = {
                let cb = props.on_select.clone();
                let tab = tab.clone();
                Callback::from(move |_e: MouseEvent| cb.emit(tab.clone()))
            };
            let onmouseenter = {
                let hover_key = hover_key.clone();
                let key = tab.key;
                Callback::from(move |_e: MouseEvent| hover_key.set(Some(key)))
            };
            let onmouseleave = {
                let hover_key = hover_key.clone();
                Callback::from(move |_e: MouseEvent| hover_key.set(None))
            };
            let label = t(tab.sub_title, &props.language);
            // Los grupos de gestión van sangrados con el sidebar abierto
            let indented = index > 0 && !props.is_collapsed;

            html! {
                <div
                    key={tab.key}
                    class={classes!("menu-tab", highlighted.then_some("active"), indented.then_some("indented"))}
                    {onclick}
                    {onmouseenter}
                    {onmouseleave}
                >
                    <img class="menu-icon" src={if highlighted { tab.active_icon } else { tab.icon }} alt="" />
                    if props.is_collapsed {
                        if *hover_key == Some(tab.key) {
                            <div class="menu-tooltip">{ label }</div>
                        }
                    } else {
                        <span class="menu-label">{ label }</span>
                    }
                </div>
            }
        });

        html! {
            <div key={group.title} class="menu-group">
                { for tabs }
            </div>
        }
    });

    html! {
        <div class="menu-list">
            { for groups }
        </div>
    }
}
