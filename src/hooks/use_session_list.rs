use std::rc::Rc;
use yew::prelude::*;

use crate::hooks::use_notice::Notice;
use crate::models::Session;
use crate::services::{ApiClient, EventBus};
use crate::state::PendingDeletion;
use crate::viewmodels::{DeleteOutcome, SessionViewModel};

pub struct UseSessionListHandle {
    pub sessions: Rc<Vec<Session>>,
    pub pending: PendingDeletion,
    pub request_delete: Callback<i64>,
    pub cancel_delete: Callback<()>,
    pub confirm_delete: Callback<()>,
}

/// Caché de sesiones recientes.
///
/// Al montar: primer refresco e invalidación por `Topic::SessionListChange`
/// en el bus global (los borrados correctos también publican ahí).
/// El resultado de cada borrado se comunica por `on_notice`.
#[hook]
pub fn use_session_list(on_notice: Callback<Notice>) -> UseSessionListHandle {
    let vm: Rc<SessionViewModel<ApiClient>> =
        use_memo((), |_| SessionViewModel::new(ApiClient::new(), EventBus::global()));
    let sessions = use_state(|| Rc::new(vm.sessions().get()));
    let pending = use_state(|| vm.pending().get());

    {
        let vm = vm.clone();
        let sessions = sessions.clone();
        let pending = pending.clone();
        use_effect_with((), move |_| {
            let sessions_sub = vm
                .sessions()
                .subscribe(move |list| sessions.set(Rc::new(list.clone())));
            let pending_sub = vm.pending().subscribe(move |p| pending.set(*p));

            let invalidation =
                vm.invalidate_on(&EventBus::global(), |task| wasm_bindgen_futures::spawn_local(task));

            let first = (*vm).clone();
            wasm_bindgen_futures::spawn_local(async move {
                first.refresh().await;
            });

            move || {
                drop(invalidation);
                vm.sessions().unsubscribe(sessions_sub);
                vm.pending().unsubscribe(pending_sub);
            }
        });
    }

    let request_delete = {
        let vm = vm.clone();
        Callback::from(move |session_id: i64| {
            vm.request_delete(session_id);
        })
    };

    let cancel_delete = {
        let vm = vm.clone();
        Callback::from(move |_| {
            vm.cancel_delete();
        })
    };

    let confirm_delete = {
        let vm = vm.clone();
        Callback::from(move |_| {
            let vm = (*vm).clone();
            let on_notice = on_notice.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match vm.confirm_delete().await {
                    Some(DeleteOutcome::Deleted { .. }) => on_notice.emit(Notice::success("delete_success")),
                    Some(DeleteOutcome::Failed { .. }) => on_notice.emit(Notice::error("delete_failed")),
                    None => {}
                }
            });
        })
    };

    UseSessionListHandle {
        sessions: (*sessions).clone(),
        pending: *pending,
        request_delete,
        cancel_delete,
        confirm_delete,
    }
}
