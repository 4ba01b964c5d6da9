// ============================================================================
// REACTIVITY - Valor observable con suscriptores
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

type Callback<T> = Rc<dyn Fn(&T)>;

/// Identificador devuelto por `subscribe`, sirve para darse de baja
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriberId(u64);

/// Estado reactivo: guarda un valor y avisa a los suscriptores cuando cambia.
///
/// Los clones comparten valor y suscriptores.
pub struct ReactiveState<T> {
    value: Rc<RefCell<T>>,
    subscribers: Rc<RefCell<Vec<(SubscriberId, Callback<T>)>>>,
    next_id: Rc<Cell<u64>>,
}

impl<T: Clone + PartialEq> ReactiveState<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            subscribers: Rc::new(RefCell::new(Vec::new())),
            next_id: Rc::new(Cell::new(0)),
        }
    }

    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    /// Establece el valor. Sólo notifica si es distinto del actual.
    /// Devuelve `true` si hubo cambio.
    pub fn set(&self, new_value: T) -> bool {
        {
            let mut value = self.value.borrow_mut();
            if *value == new_value {
                return false;
            }
            *value = new_value;
        }
        self.notify();
        true
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriberId
    where
        F: Fn(&T) + 'static,
    {
        let id = SubscriberId(self.next_id.get());
        self.next_id.set(self.next_id.get() + 1);
        self.subscribers.borrow_mut().push((id, Rc::new(callback)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriberId) {
        self.subscribers.borrow_mut().retain(|(sid, _)| *sid != id);
    }

    pub fn clear_subscribers(&self) {
        self.subscribers.borrow_mut().clear();
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    fn notify(&self) {
        // Copia de la lista: un callback puede suscribir o darse de baja
        let callbacks: Vec<Callback<T>> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, cb)| cb.clone())
            .collect();
        let value = self.get();
        for callback in callbacks {
            callback(&value);
        }
    }
}

impl<T> Clone for ReactiveState<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            subscribers: self.subscribers.clone(),
            next_id: self.next_id.clone(),
        }
    }
}
