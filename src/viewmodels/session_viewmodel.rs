// ============================================================================
// SESSION VIEWMODEL - Caché de sesiones + flujo de borrado
// ============================================================================
// Orquesta las llamadas al API sobre los núcleos de estado y publica los
// cambios en valores reactivos que los hooks copian al estado de yew.
// ============================================================================

use std::cell::RefCell;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use crate::error::ApiError;
use crate::models::Session;
use crate::services::{EventBus, SessionApi, Subscription, Topic};
use crate::state::{PendingDeletion, ReactiveState, RefreshOutcome, SessionCache};

/// Tarea local (sin `Send`) que el llamador lanza en su ejecutor
pub type LocalTask = Pin<Box<dyn Future<Output = ()>>>;

#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    Deleted { session_id: i64 },
    /// La sesión puede seguir existiendo en el servidor; la caché no se toca
    Failed { session_id: i64, error: ApiError },
}

pub struct SessionViewModel<A: SessionApi> {
    api: Rc<A>,
    cache: Rc<RefCell<SessionCache>>,
    sessions: ReactiveState<Vec<Session>>,
    pending: ReactiveState<PendingDeletion>,
    bus: EventBus,
}

impl<A: SessionApi> Clone for SessionViewModel<A> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            cache: self.cache.clone(),
            sessions: self.sessions.clone(),
            pending: self.pending.clone(),
            bus: self.bus.clone(),
        }
    }
}

impl<A: SessionApi> SessionViewModel<A> {
    /// `bus` recibe el aviso de cambio tras cada borrado correcto
    pub fn new(api: A, bus: EventBus) -> Self {
        Self {
            api: Rc::new(api),
            cache: Rc::new(RefCell::new(SessionCache::new())),
            sessions: ReactiveState::new(Vec::new()),
            pending: ReactiveState::new(PendingDeletion::new()),
            bus,
        }
    }

    /// Lista publicada (siempre igual al contenido de la caché)
    pub fn sessions(&self) -> &ReactiveState<Vec<Session>> {
        &self.sessions
    }

    pub fn pending(&self) -> &ReactiveState<PendingDeletion> {
        &self.pending
    }

    fn publish_sessions(&self) {
        let sessions = self.cache.borrow().sessions().to_vec();
        self.sessions.set(sessions);
    }

    fn update_pending<R>(&self, f: impl FnOnce(&mut PendingDeletion) -> R) -> R {
        let mut pending = self.pending.get();
        let result = f(&mut pending);
        self.pending.set(pending);
        result
    }

    /// Refresca la lista completa. Los fallos se registran y se tragan aquí.
    pub async fn refresh(&self) -> RefreshOutcome {
        let ticket = self.cache.borrow_mut().begin_refresh();
        log::info!("🔄 [SESSIONS] Refresco #{} emitido", ticket.seq());

        let result = self.api.fetch_sessions().await;

        let outcome = self.cache.borrow_mut().complete_refresh(ticket, result);
        if let RefreshOutcome::Applied { .. } = outcome {
            self.publish_sessions();
        }
        outcome
    }

    /// Refresca cada vez que se publica `Topic::SessionListChange` en `bus`.
    ///
    /// `spawn` lanza el refresco en el ejecutor del llamador. La suscripción
    /// dura lo que viva el guard devuelto.
    #[must_use = "dropping the subscription stops the invalidation"]
    pub fn invalidate_on<F>(&self, bus: &EventBus, spawn: F) -> Subscription
    where
        A: 'static,
        F: Fn(LocalTask) + 'static,
    {
        let vm = self.clone();
        bus.subscribe(Topic::SessionListChange, move || {
            log::info!("📣 [SESSIONS] Invalidación recibida");
            let vm = vm.clone();
            spawn(Box::pin(async move {
                vm.refresh().await;
            }));
        })
    }

    /// Primer paso del borrado: guarda el objetivo y abre la confirmación
    pub fn request_delete(&self, session_id: i64) -> bool {
        self.update_pending(|p| p.request(session_id))
    }

    pub fn cancel_delete(&self) -> bool {
        self.update_pending(PendingDeletion::cancel)
    }

    /// Segundo paso: borra el id guardado. `None` si no había nada que confirmar.
    pub async fn confirm_delete(&self) -> Option<DeleteOutcome> {
        let session_id = self.update_pending(PendingDeletion::confirm)?;

        match self.api.delete_session(session_id).await {
            Ok(()) => {
                log::info!("✅ [DELETE] Sesión #{} borrada", session_id);
                self.update_pending(PendingDeletion::finish);
                self.cache.borrow_mut().remove(session_id);
                self.publish_sessions();
                // El refresco corre aparte: el resultado no espera al servidor
                self.bus.publish(Topic::SessionListChange);
                Some(DeleteOutcome::Deleted { session_id })
            }
            Err(error) => {
                log::error!("❌ [DELETE] Error borrando sesión #{}: {}", session_id, error);
                self.update_pending(PendingDeletion::finish);
                Some(DeleteOutcome::Failed { session_id, error })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiResult;
    use crate::state::DeletionStage;
    use futures::channel::oneshot;
    use futures::executor::{block_on, LocalPool};
    use futures::task::LocalSpawnExt;
    use std::collections::VecDeque;

    type FetchReply = ApiResult<Vec<Session>>;

    /// API de pruebas: cada fetch espera la respuesta que el test le envíe
    #[derive(Default)]
    struct ScriptedApi {
        fetches: RefCell<VecDeque<oneshot::Receiver<FetchReply>>>,
        immediate: RefCell<Option<Vec<Session>>>,
        delete_error: RefCell<Option<ApiError>>,
        deleted: RefCell<Vec<i64>>,
    }

    impl ScriptedApi {
        fn returning(sessions: Vec<Session>) -> Self {
            let api = Self::default();
            *api.immediate.borrow_mut() = Some(sessions);
            api
        }

        fn push_fetch(&self) -> oneshot::Sender<FetchReply> {
            let (tx, rx) = oneshot::channel();
            self.fetches.borrow_mut().push_back(rx);
            tx
        }
    }

    impl SessionApi for ScriptedApi {
        async fn fetch_sessions(&self) -> ApiResult<Vec<Session>> {
            let scripted = self.fetches.borrow_mut().pop_front();
            match scripted {
                Some(rx) => rx
                    .await
                    .unwrap_or_else(|_| Err(ApiError::Network("dropped".into()))),
                None => Ok(self.immediate.borrow().clone().unwrap_or_default()),
            }
        }

        async fn delete_session(&self, session_id: i64) -> ApiResult<()> {
            self.deleted.borrow_mut().push(session_id);
            match self.delete_error.borrow().clone() {
                Some(error) => Err(error),
                None => {
                    if let Some(list) = self.immediate.borrow_mut().as_mut() {
                        list.retain(|s| s.id != session_id);
                    }
                    Ok(())
                }
            }
        }
    }

    fn sessions(ids: &[i64]) -> Vec<Session> {
        ids.iter().map(|id| Session::new(*id, *id + 1000, "bot")).collect()
    }

    fn vm_with(api: ScriptedApi) -> SessionViewModel<ScriptedApi> {
        SessionViewModel::new(api, EventBus::new())
    }

    fn ids(vm: &SessionViewModel<ScriptedApi>) -> Vec<i64> {
        vm.sessions().get().iter().map(|s| s.id).collect()
    }

    #[test]
    fn refresh_publishes_list() {
        let vm = vm_with(ScriptedApi::returning(sessions(&[1, 2])));
        let outcome = block_on(vm.refresh());
        assert_eq!(outcome, RefreshOutcome::Applied { count: 2 });
        assert_eq!(ids(&vm), vec![1, 2]);
    }

    #[test]
    fn responses_out_of_order_keep_latest_issued() {
        let vm = vm_with(ScriptedApi::default());
        let first = vm.api.push_fetch();
        let second = vm.api.push_fetch();

        let mut pool = LocalPool::new();
        let spawner = pool.spawner();
        for _ in 0..2 {
            let vm = vm.clone();
            spawner
                .spawn_local(async move {
                    vm.refresh().await;
                })
                .unwrap();
        }
        pool.run_until_stalled();

        // La segunda llega antes que la primera
        second.send(Ok(sessions(&[20, 21]))).unwrap();
        pool.run_until_stalled();
        first.send(Ok(sessions(&[10]))).unwrap();
        pool.run_until_stalled();

        assert_eq!(ids(&vm), vec![20, 21]);
    }

    #[test]
    fn failed_refresh_keeps_previous_list() {
        let vm = vm_with(ScriptedApi::default());
        let tx = vm.api.push_fetch();
        tx.send(Ok(sessions(&[1]))).unwrap();
        block_on(vm.refresh());

        let tx = vm.api.push_fetch();
        tx.send(Err(ApiError::Http { status: 502, text: "bad gateway".into() })).unwrap();
        let outcome = block_on(vm.refresh());

        assert!(matches!(outcome, RefreshOutcome::Failed(_)));
        assert_eq!(ids(&vm), vec![1]);
    }

    #[test]
    fn delete_success_removes_exactly_that_session() {
        let vm = vm_with(ScriptedApi::returning(sessions(&[1, 2, 3])));
        block_on(vm.refresh());

        assert!(vm.request_delete(2));
        let outcome = block_on(vm.confirm_delete());

        assert_eq!(outcome, Some(DeleteOutcome::Deleted { session_id: 2 }));
        assert_eq!(ids(&vm), vec![1, 3]);
        assert_eq!(*vm.api.deleted.borrow(), vec![2]);
        assert_eq!(vm.pending().get().stage(), DeletionStage::Idle);
    }

    #[test]
    fn delete_outcome_does_not_wait_for_follow_up_refresh() {
        let bus = EventBus::new();
        let vm = SessionViewModel::new(ScriptedApi::returning(sessions(&[1, 2])), bus.clone());
        block_on(vm.refresh());

        let mut pool = LocalPool::new();
        let spawner = pool.spawner();
        let _invalidation = vm.invalidate_on(&bus, move |task| {
            spawner.spawn_local(task).unwrap();
        });

        // El refresco posterior al borrado queda colgado
        let follow_up = vm.api.push_fetch();
        vm.request_delete(1);

        let outcome = block_on(vm.confirm_delete());
        assert_eq!(outcome, Some(DeleteOutcome::Deleted { session_id: 1 }));
        assert_eq!(ids(&vm), vec![2]);
        assert!(!vm.pending().get().is_open());

        pool.run_until_stalled();
        assert!(vm.cache.borrow().has_pending());

        follow_up.send(Ok(sessions(&[2, 5]))).unwrap();
        pool.run_until_stalled();
        assert_eq!(ids(&vm), vec![2, 5]);
    }

    #[test]
    fn published_change_triggers_refresh() {
        let bus = EventBus::new();
        let vm = SessionViewModel::new(ScriptedApi::returning(sessions(&[1])), bus.clone());

        let mut pool = LocalPool::new();
        let spawner = pool.spawner();
        let invalidation = vm.invalidate_on(&bus, move |task| {
            spawner.spawn_local(task).unwrap();
        });

        assert_eq!(bus.publish(Topic::SessionListChange), 1);
        pool.run_until_stalled();
        assert_eq!(ids(&vm), vec![1]);

        // Sin guard no hay más refrescos
        drop(invalidation);
        *vm.api.immediate.borrow_mut() = Some(sessions(&[1, 2]));
        assert_eq!(bus.publish(Topic::SessionListChange), 0);
        pool.run_until_stalled();
        assert_eq!(ids(&vm), vec![1]);
    }

    #[test]
    fn successful_delete_publishes_change() {
        let bus = EventBus::new();
        let vm = SessionViewModel::new(ScriptedApi::returning(sessions(&[1, 2])), bus.clone());
        let hits = Rc::new(std::cell::Cell::new(0));
        let h = hits.clone();
        let _sub = bus.subscribe(Topic::SessionListChange, move || h.set(h.get() + 1));

        vm.request_delete(2);
        block_on(vm.confirm_delete());
        assert_eq!(hits.get(), 1);

        *vm.api.delete_error.borrow_mut() = Some(ApiError::Network("offline".into()));
        vm.request_delete(1);
        block_on(vm.confirm_delete());
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn delete_failure_leaves_cache_unchanged() {
        let api = ScriptedApi::returning(sessions(&[1, 2, 3]));
        *api.delete_error.borrow_mut() = Some(ApiError::Rejected { code: 500, message: "boom".into() });
        let vm = vm_with(api);
        block_on(vm.refresh());
        let before = vm.sessions().get();

        vm.request_delete(2);
        let outcome = block_on(vm.confirm_delete());

        assert!(matches!(outcome, Some(DeleteOutcome::Failed { session_id: 2, .. })));
        assert_eq!(vm.sessions().get(), before);
        assert_eq!(vm.pending().get(), PendingDeletion::default());
    }

    #[test]
    fn confirm_without_request_is_noop() {
        let vm = vm_with(ScriptedApi::returning(sessions(&[1])));
        assert_eq!(block_on(vm.confirm_delete()), None);
        assert!(vm.api.deleted.borrow().is_empty());
    }

    #[test]
    fn rapid_requests_confirm_only_the_second() {
        let vm = vm_with(ScriptedApi::returning(sessions(&[1, 2, 3])));
        block_on(vm.refresh());

        vm.request_delete(1);
        vm.request_delete(3);
        assert_eq!(vm.pending().get().session_id(), Some(3));

        block_on(vm.confirm_delete());
        assert_eq!(*vm.api.deleted.borrow(), vec![3]);
        assert_eq!(ids(&vm), vec![1, 2]);
    }

    #[test]
    fn cancel_clears_selection_without_api_call() {
        let vm = vm_with(ScriptedApi::returning(sessions(&[1])));
        vm.request_delete(1);
        assert!(vm.cancel_delete());
        assert_eq!(block_on(vm.confirm_delete()), None);
        assert!(vm.api.deleted.borrow().is_empty());
    }
}
