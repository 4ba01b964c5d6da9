// ============================================================================
// EVENT BUS - Canal publicar/suscribir tipado
// ============================================================================
// Cualquier punto de la app que cree, borre o renombre sesiones publica
// `Topic::SessionListChange` sin conocer a quién escucha. Sin payload, sin
// garantías de entrega: sólo "refresca ahora".
// ============================================================================

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::{Rc, Weak};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    SessionListChange,
}

type Handler = Rc<dyn Fn()>;

#[derive(Default)]
struct Registry {
    handlers: RefCell<HashMap<Topic, Vec<(u64, Handler)>>>,
    next_id: Cell<u64>,
}

/// Bus de eventos. Los clones comparten registro.
#[derive(Clone, Default)]
pub struct EventBus {
    registry: Rc<Registry>,
}

thread_local! {
    static GLOBAL_BUS: EventBus = EventBus::new();
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bus compartido por toda la aplicación
    pub fn global() -> Self {
        GLOBAL_BUS.with(|bus| bus.clone())
    }

    /// Suscribe un handler. La suscripción dura lo que viva el guard devuelto.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe<F>(&self, topic: Topic, handler: F) -> Subscription
    where
        F: Fn() + 'static,
    {
        let id = self.registry.next_id.get();
        self.registry.next_id.set(id + 1);
        self.registry
            .handlers
            .borrow_mut()
            .entry(topic)
            .or_default()
            .push((id, Rc::new(handler)));
        log::debug!("📡 [BUS] Suscripción #{} a {:?}", id, topic);

        Subscription {
            registry: Rc::downgrade(&self.registry),
            topic,
            id,
        }
    }

    /// Publica un tema; devuelve cuántos handlers se ejecutaron
    pub fn publish(&self, topic: Topic) -> usize {
        // Copia previa: un handler puede suscribir o darse de baja
        let handlers: Vec<Handler> = self
            .registry
            .handlers
            .borrow()
            .get(&topic)
            .map(|list| list.iter().map(|(_, h)| h.clone()).collect())
            .unwrap_or_default();

        log::debug!("📣 [BUS] {:?} -> {} suscriptores", topic, handlers.len());
        for handler in &handlers {
            handler();
        }
        handlers.len()
    }

    pub fn subscriber_count(&self, topic: Topic) -> usize {
        self.registry
            .handlers
            .borrow()
            .get(&topic)
            .map_or(0, Vec::len)
    }
}

/// Guard de suscripción: al soltarlo se da de baja
pub struct Subscription {
    registry: Weak<Registry>,
    topic: Topic,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            if let Some(list) = registry.handlers.borrow_mut().get_mut(&self.topic) {
                list.retain(|(id, _)| *id != self.id);
            }
            log::debug!("📴 [BUS] Baja #{} de {:?}", self.id, self.topic);
        }
    }
}

/// Atajo para los puntos de mutación de sesiones
pub fn notify_session_list_changed() {
    EventBus::global().publish(Topic::SessionListChange);
}
