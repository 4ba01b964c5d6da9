// ============================================================================
// SESSION CACHE - Lista de sesiones recientes
// ============================================================================
// Cada refresco recibe un número de secuencia. Sólo se aplica la respuesta
// del último refresco emitido; las anteriores se descartan aunque lleguen
// después. Un fallo conserva la lista anterior.
// ============================================================================

use crate::error::ApiError;
use crate::models::{dedup_by_bot, Session};

/// Comprobante de un refresco emitido
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTicket(u64);

impl RefreshTicket {
    pub fn seq(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RefreshOutcome {
    /// Lista reemplazada
    Applied { count: usize },
    /// Respuesta de un refresco ya superado, ignorada
    Stale,
    /// Error de red o backend; se mantiene la lista anterior
    Failed(ApiError),
}

#[derive(Debug, Default, Clone)]
pub struct SessionCache {
    sessions: Vec<Session>,
    issued: u64,
    applied: u64,
}

impl SessionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Secuencia del último refresco aplicado (0 = ninguno)
    pub fn applied_seq(&self) -> u64 {
        self.applied
    }

    pub fn has_pending(&self) -> bool {
        self.applied < self.issued
    }

    /// Emite un nuevo refresco; invalida cualquier otro en vuelo
    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.issued += 1;
        RefreshTicket(self.issued)
    }

    pub fn is_current(&self, ticket: RefreshTicket) -> bool {
        ticket.0 == self.issued
    }

    /// Aplica el resultado de un refresco si sigue siendo el último emitido
    pub fn complete_refresh(
        &mut self,
        ticket: RefreshTicket,
        result: Result<Vec<Session>, ApiError>,
    ) -> RefreshOutcome {
        if !self.is_current(ticket) {
            log::info!(
                "⏭️ [SESSIONS] Respuesta #{} descartada (última emitida #{})",
                ticket.0,
                self.issued
            );
            return RefreshOutcome::Stale;
        }

        match result {
            Ok(sessions) => {
                self.sessions = dedup_by_bot(sessions);
                self.applied = ticket.0;
                log::info!("✅ [SESSIONS] Lista actualizada: {} sesiones", self.sessions.len());
                RefreshOutcome::Applied { count: self.sessions.len() }
            }
            Err(e) => {
                log::error!("❌ [SESSIONS] Error refrescando lista (se conserva la anterior): {}", e);
                RefreshOutcome::Failed(e)
            }
        }
    }

    /// Quita una sesión ya borrada en el servidor.
    ///
    /// Los refrescos en vuelo se emitieron antes del borrado y podrían
    /// devolverla, así que también quedan invalidados.
    pub fn remove(&mut self, session_id: i64) -> bool {
        let before = self.sessions.len();
        self.sessions.retain(|s| s.id != session_id);
        self.issued += 1;
        self.applied = self.issued;
        before != self.sessions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(ids: &[i64]) -> Vec<Session> {
        ids.iter().map(|id| Session::new(*id, *id * 100, "bot")).collect()
    }

    fn ids(cache: &SessionCache) -> Vec<i64> {
        cache.sessions().iter().map(|s| s.id).collect()
    }

    #[test]
    fn refresh_replaces_whole_list() {
        let mut cache = SessionCache::new();
        let t = cache.begin_refresh();
        cache.complete_refresh(t, Ok(list(&[1, 2, 3])));
        let t = cache.begin_refresh();
        assert_eq!(cache.complete_refresh(t, Ok(list(&[4]))), RefreshOutcome::Applied { count: 1 });
        assert_eq!(ids(&cache), vec![4]);
    }

    #[test]
    fn out_of_order_responses_keep_newest() {
        let mut cache = SessionCache::new();
        let older = cache.begin_refresh();
        let newer = cache.begin_refresh();

        assert_eq!(
            cache.complete_refresh(newer, Ok(list(&[2]))),
            RefreshOutcome::Applied { count: 1 }
        );
        assert_eq!(cache.complete_refresh(older, Ok(list(&[1]))), RefreshOutcome::Stale);
        assert_eq!(ids(&cache), vec![2]);
        assert_eq!(cache.applied_seq(), newer.seq());
    }

    #[test]
    fn older_response_arriving_first_is_discarded() {
        let mut cache = SessionCache::new();
        let older = cache.begin_refresh();
        let newer = cache.begin_refresh();

        assert_eq!(cache.complete_refresh(older, Ok(list(&[1]))), RefreshOutcome::Stale);
        assert!(cache.is_empty());
        assert!(cache.has_pending());

        cache.complete_refresh(newer, Ok(list(&[2, 3])));
        assert_eq!(ids(&cache), vec![2, 3]);
        assert!(!cache.has_pending());
    }

    #[test]
    fn failure_keeps_previous_list() {
        let mut cache = SessionCache::new();
        let t = cache.begin_refresh();
        cache.complete_refresh(t, Ok(list(&[1, 2])));

        let t = cache.begin_refresh();
        let outcome = cache.complete_refresh(t, Err(ApiError::Network("offline".into())));
        assert!(matches!(outcome, RefreshOutcome::Failed(_)));
        assert_eq!(ids(&cache), vec![1, 2]);
    }

    #[test]
    fn duplicates_by_bot_are_dropped() {
        let mut cache = SessionCache::new();
        let t = cache.begin_refresh();
        cache.complete_refresh(
            t,
            Ok(vec![Session::new(1, 9, "a"), Session::new(2, 9, "a"), Session::new(3, 8, "b")]),
        );
        assert_eq!(ids(&cache), vec![1, 3]);
    }

    #[test]
    fn remove_takes_exactly_one_and_invalidates_in_flight() {
        let mut cache = SessionCache::new();
        let t = cache.begin_refresh();
        cache.complete_refresh(t, Ok(list(&[1, 2, 3])));

        let in_flight = cache.begin_refresh();
        assert!(cache.remove(2));
        assert_eq!(ids(&cache), vec![1, 3]);

        // La respuesta emitida antes del borrado todavía traía la sesión 2
        assert_eq!(cache.complete_refresh(in_flight, Ok(list(&[1, 2, 3]))), RefreshOutcome::Stale);
        assert_eq!(ids(&cache), vec![1, 3]);
    }

    #[test]
    fn removing_unknown_id_changes_nothing_visible() {
        let mut cache = SessionCache::new();
        let t = cache.begin_refresh();
        cache.complete_refresh(t, Ok(list(&[1])));
        assert!(!cache.remove(99));
        assert_eq!(ids(&cache), vec![1]);
    }
}
