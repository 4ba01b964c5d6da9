use yew::prelude::*;

use crate::state::PendingDeletion;
use crate::utils::t;

#[derive(Properties, PartialEq)]
pub struct DeleteModalProps {
    pub pending: PendingDeletion,
    pub language: String,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

/// Diálogo de confirmación. No se cierra con click fuera: sólo con los botones.
#[function_component(DeleteModal)]
pub fn delete_modal(props: &DeleteModalProps) -> Html {
    if !props.pending.is_open() {
        return html! {};
    }

    let lang = props.language.clone();
    let busy = props.pending.is_deleting();

    let confirm_click = {
        let cb = props.on_confirm.clone();
        Callback::from(move |_e: MouseEvent| cb.emit(()))
    };
    let cancel_click = {
        let cb = props.on_cancel.clone();
        Callback::from(move |_e: MouseEvent| cb.emit(()))
    };

    html! {
        <div class="modal-mask">
            <div class="modal delete-modal">
                <div class="delete-modal-body">
                    <span class="warning-icon">{"⚠️"}</span>
                    <span>{ t("confirm_remove", &lang) }</span>
                </div>
                <div class="delete-modal-footer">
                    <button class="btn" onclick={cancel_click} disabled={busy}>
                        { t("cancel", &lang) }
                    </button>
                    <button class="btn btn-primary" onclick={confirm_click} disabled={busy}>
                        { t("confirm", &lang) }
                    </button>
                </div>
            </div>
        </div>
    }
}
