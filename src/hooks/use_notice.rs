use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::CONFIG;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Aviso no bloqueante; `message` es una clave de traducción
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: &'static str,
}

impl Notice {
    pub fn success(message: &'static str) -> Self {
        Self { kind: NoticeKind::Success, message }
    }

    pub fn error(message: &'static str) -> Self {
        Self { kind: NoticeKind::Error, message }
    }
}

pub struct UseNoticeHandle {
    pub notice: Option<Notice>,
    pub show: Callback<Notice>,
    pub dismiss: Callback<()>,
}

#[hook]
pub fn use_notice() -> UseNoticeHandle {
    let notice = use_state(|| None::<Notice>);
    let timeout = use_mut_ref(|| None::<Timeout>);

    let dismiss = {
        let notice = notice.clone();
        let timeout = timeout.clone();
        Callback::from(move |_| {
            *timeout.borrow_mut() = None;
            notice.set(None);
        })
    };

    let show = {
        let notice = notice.clone();
        let timeout = timeout.clone();
        Callback::from(move |next: Notice| {
            notice.set(Some(next));
            let notice = notice.clone();
            // Reemplazar el Timeout anterior lo cancela
            *timeout.borrow_mut() = Some(Timeout::new(CONFIG.ui.notice_timeout_ms, move || {
                notice.set(None);
            }));
        })
    };

    // Al desmontar no debe quedar ningún Timeout vivo
    {
        let timeout = timeout.clone();
        use_effect_with((), move |_| {
            move || {
                timeout.borrow_mut().take();
            }
        });
    }

    UseNoticeHandle {
        notice: (*notice).clone(),
        show,
        dismiss,
    }
}
