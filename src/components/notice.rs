use yew::prelude::*;

use crate::hooks::{Notice, NoticeKind};
use crate::utils::t;

#[derive(Properties, PartialEq)]
pub struct NoticeToastProps {
    pub notice: Option<Notice>,
    pub language: String,
    pub on_dismiss: Callback<()>,
}

#[function_component(NoticeToast)]
pub fn notice_toast(props: &NoticeToastProps) -> Html {
    let Some(notice) = &props.notice else {
        return html! {};
    };

    let class = match notice.kind {
        NoticeKind::Success => "notice notice-success",
        NoticeKind::Error => "notice notice-error",
    };
    let onclick = {
        let cb = props.on_dismiss.clone();
        Callback::from(move |_e: MouseEvent| cb.emit(()))
    };

    html! {
        <div class={class} role="status" {onclick}>
            { t(notice.message, &props.language) }
        </div>
    }
}
