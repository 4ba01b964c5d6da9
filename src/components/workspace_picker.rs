use yew::prelude::*;

use super::Popover;
use crate::context::WorkspaceStore;
use crate::models::{WorkspaceContext, WorkspaceType};
use crate::utils::t;

#[derive(Properties, PartialEq)]
pub struct WorkspacePickerProps {
    pub is_collapsed: bool,
    pub open: bool,
    pub language: String,
    pub on_toggle: Callback<()>,
    pub on_close: Callback<()>,
}

fn workspace_label(workspace: &WorkspaceContext, lang: &str) -> String {
    match workspace.kind {
        WorkspaceType::Personal if workspace.name.is_empty() => t("personal_workspace", lang),
        _ => workspace.name.clone(),
    }
}

/// Cabecera del espacio actual con su selector desplegable
#[function_component(WorkspacePicker)]
pub fn workspace_picker(props: &WorkspacePickerProps) -> Html {
    let Some(store) = use_context::<WorkspaceStore>() else {
        return html! {};
    };
    // Sin espacio de equipo no hay nada que elegir
    if store.current.is_empty {
        return html! {};
    }

    let toggle_click = {
        let cb = props.on_toggle.clone();
        Callback::from(move |_e: MouseEvent| cb.emit(()))
    };

    let options = store.available.iter().map(|workspace| {
        let selected = *workspace == store.current;
        let onclick = {
            let select = store.select.clone();
            let close = props.on_close.clone();
            let workspace = workspace.clone();
            Callback::from(move |_e: MouseEvent| {
                select.emit(workspace.clone());
                close.emit(());
            })
        };
        html! {
            <div class={classes!("workspace-option", selected.then_some("selected"))} {onclick}>
                { workspace_label(workspace, &props.language) }
            </div>
        }
    });

    html! {
        <div class="workspace-picker">
            <div class="workspace-current" onclick={toggle_click}>
                <span class="workspace-icon">{"🏢"}</span>
                if !props.is_collapsed {
                    <span class="workspace-name">{ workspace_label(&store.current, &props.language) }</span>
                }
            </div>
            <Popover open={props.open} on_dismiss={props.on_close.clone()} class={classes!("workspace-popover")}>
                <div class="workspace-title">{ t("workspace", &props.language) }</div>
                { for options }
            </Popover>
        </div>
    }
}
