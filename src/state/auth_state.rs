// ============================================================================
// AUTH STATE - Señal derivada "¿hay sesión iniciada?"
// ============================================================================
// La señal nunca se escribe directamente: siempre se recalcula a partir del
// almacenamiento de credenciales. Montaje, evento `storage` y sondeo
// periódico llaman todos a `observe()`.
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use super::reactivity::{ReactiveState, SubscriberId};

/// Acceso a las credenciales persistidas
pub trait CredentialStore {
    /// Token de acceso crudo, tal cual está guardado
    fn read_token(&self) -> Option<String>;

    /// Borra token de acceso y de refresco
    fn clear(&self);
}

impl<S: CredentialStore + ?Sized> CredentialStore for Rc<S> {
    fn read_token(&self) -> Option<String> {
        (**self).read_token()
    }

    fn clear(&self) {
        (**self).clear()
    }
}

/// Un token cuenta si no está vacío ni es un valor serializado por error
pub fn is_usable_token(raw: Option<&str>) -> bool {
    match raw.map(str::trim) {
        None | Some("") => false,
        Some("undefined") | Some("null") => false,
        Some(token) => !token.chars().any(char::is_whitespace),
    }
}

/// Monitor del estado de autenticación
pub struct AuthMonitor<S: CredentialStore> {
    store: S,
    signal: ReactiveState<bool>,
    active: Cell<bool>,
}

impl<S: CredentialStore> AuthMonitor<S> {
    /// Crea el monitor y hace la observación inicial
    pub fn new(store: S) -> Self {
        let initial = is_usable_token(store.read_token().as_deref());
        log::info!("🔐 [AUTH] Estado inicial: {}", if initial { "autenticado" } else { "sin sesión" });
        Self {
            store,
            signal: ReactiveState::new(initial),
            active: Cell::new(true),
        }
    }

    /// Recalcula la señal a partir del almacenamiento.
    ///
    /// Idempotente. Tras `teardown` no escribe nada y devuelve el último valor.
    pub fn observe(&self) -> bool {
        if !self.active.get() {
            return self.signal.get();
        }
        let authenticated = is_usable_token(self.store.read_token().as_deref());
        if self.signal.set(authenticated) {
            log::info!("🔄 [AUTH] Señal cambiada: {}", authenticated);
        }
        authenticated
    }

    pub fn is_authenticated(&self) -> bool {
        self.signal.get()
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriberId
    where
        F: Fn(&bool) + 'static,
    {
        self.signal.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriberId) {
        self.signal.unsubscribe(id);
    }

    /// Cierre de sesión local: borra credenciales y recalcula.
    /// Llamarlo varias veces deja el mismo estado.
    pub fn logout(&self) -> bool {
        self.store.clear();
        self.observe()
    }

    /// Desactiva el monitor; las observaciones posteriores no escriben
    pub fn teardown(&self) {
        if self.active.replace(false) {
            self.signal.clear_subscribers();
            log::info!("🔌 [AUTH] Monitor desmontado");
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Almacén en memoria que simula localStorage
    #[derive(Default)]
    pub(crate) struct MemoryCredentials {
        pub token: RefCell<Option<String>>,
        pub clears: Cell<u32>,
    }

    impl MemoryCredentials {
        pub fn with_token(token: &str) -> Rc<Self> {
            let store = Rc::new(Self::default());
            store.set(Some(token));
            store
        }

        pub fn set(&self, token: Option<&str>) {
            *self.token.borrow_mut() = token.map(|t| t.to_string());
        }
    }

    impl CredentialStore for MemoryCredentials {
        fn read_token(&self) -> Option<String> {
            self.token.borrow().clone()
        }

        fn clear(&self) {
            self.clears.set(self.clears.get() + 1);
            *self.token.borrow_mut() = None;
        }
    }

    #[test]
    fn usable_token_rules() {
        assert!(is_usable_token(Some("eyJhbGciOi.abc.def")));
        assert!(!is_usable_token(None));
        assert!(!is_usable_token(Some("")));
        assert!(!is_usable_token(Some("   ")));
        assert!(!is_usable_token(Some("undefined")));
        assert!(!is_usable_token(Some("null")));
        assert!(!is_usable_token(Some("two words")));
    }

    #[test]
    fn initial_observation_reflects_storage() {
        let monitor = AuthMonitor::new(MemoryCredentials::with_token("abc"));
        assert!(monitor.is_authenticated());

        let monitor = AuthMonitor::new(Rc::new(MemoryCredentials::default()));
        assert!(!monitor.is_authenticated());
    }

    #[test]
    fn external_mutation_visible_after_one_observation() {
        let store = Rc::new(MemoryCredentials::default());
        let monitor = AuthMonitor::new(store.clone());
        assert!(!monitor.is_authenticated());

        // Otra pestaña guarda el token
        store.set(Some("token-from-other-tab"));
        assert!(monitor.observe());
        assert!(monitor.is_authenticated());

        store.set(None);
        assert!(!monitor.observe());
    }

    #[test]
    fn observe_is_idempotent_and_notifies_once() {
        let store = MemoryCredentials::with_token("abc");
        let monitor = AuthMonitor::new(store.clone());
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        monitor.subscribe(move |_| h.set(h.get() + 1));

        monitor.observe();
        monitor.observe();
        assert_eq!(hits.get(), 0);

        store.set(None);
        monitor.observe();
        monitor.observe();
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn malformed_token_is_logged_out_not_error() {
        let monitor = AuthMonitor::new(MemoryCredentials::with_token("undefined"));
        assert!(!monitor.observe());
    }

    #[test]
    fn no_writes_after_teardown() {
        let store = Rc::new(MemoryCredentials::default());
        let monitor = AuthMonitor::new(store.clone());
        monitor.teardown();

        store.set(Some("late"));
        assert!(!monitor.observe());
        assert!(!monitor.is_authenticated());
        assert!(!monitor.is_active());
    }

    #[test]
    fn logout_is_idempotent() {
        let store = MemoryCredentials::with_token("abc");
        let monitor = AuthMonitor::new(store.clone());

        assert!(!monitor.logout());
        assert!(!monitor.logout());
        assert!(!monitor.is_authenticated());
        assert_eq!(store.clears.get(), 2);
        assert_eq!(store.read_token(), None);
    }
}
