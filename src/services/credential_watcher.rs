// ============================================================================
// CREDENTIAL WATCHER - Conecta el AuthMonitor con el navegador
// ============================================================================
// Dos productores de la misma señal: el evento `storage` (cambios desde otras
// pestañas) y un Interval de respaldo (cambios en esta misma pestaña, que no
// disparan `storage`). Ambos pertenecen a este watcher: al soltarlo se
// desmonta el monitor y se sueltan todas las fuentes.
// ============================================================================

use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, StorageEvent};

use crate::state::{AuthMonitor, CredentialStore};
use crate::utils::STORAGE_EVENT;

/// Disparador de re-observación. Al soltarlo deja de disparar.
pub trait TriggerSource {
    fn name(&self) -> &'static str;
}

/// Listener del evento `storage` de `window`
pub struct StorageListener {
    closure: Option<Closure<dyn FnMut(StorageEvent)>>,
}

impl StorageListener {
    pub fn attach(on_trigger: Rc<dyn Fn()>) -> Self {
        let closure = Closure::wrap(Box::new(move |_event: StorageEvent| {
            on_trigger();
        }) as Box<dyn FnMut(StorageEvent)>);

        let Some(win) = window() else {
            return Self { closure: None };
        };
        if win
            .add_event_listener_with_callback(STORAGE_EVENT, closure.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("⚠️ [AUTH] No se pudo registrar el listener de storage");
            return Self { closure: None };
        }
        Self { closure: Some(closure) }
    }
}

impl TriggerSource for StorageListener {
    fn name(&self) -> &'static str {
        "storage"
    }
}

impl Drop for StorageListener {
    fn drop(&mut self) {
        if let (Some(closure), Some(win)) = (self.closure.take(), window()) {
            let _ = win
                .remove_event_listener_with_callback(STORAGE_EVENT, closure.as_ref().unchecked_ref());
        }
    }
}

/// Sondeo periódico; soltar el Interval lo cancela
pub struct PollTimer {
    _interval: Interval,
}

impl PollTimer {
    pub fn attach(on_trigger: Rc<dyn Fn()>, interval_ms: u32) -> Self {
        Self {
            _interval: Interval::new(interval_ms, move || on_trigger()),
        }
    }
}

impl TriggerSource for PollTimer {
    fn name(&self) -> &'static str {
        "poll"
    }
}

pub struct CredentialWatcher<S: CredentialStore + 'static> {
    monitor: Rc<AuthMonitor<S>>,
    sources: Vec<Box<dyn TriggerSource>>,
}

impl<S: CredentialStore + 'static> CredentialWatcher<S> {
    /// Listener de `storage` + sondeo cada `poll_interval_ms`
    pub fn start(monitor: Rc<AuthMonitor<S>>, poll_interval_ms: u32) -> Self {
        let watcher = Self::with_sources(monitor, |on_trigger| {
            vec![
                Box::new(StorageListener::attach(on_trigger.clone())) as Box<dyn TriggerSource>,
                Box::new(PollTimer::attach(on_trigger, poll_interval_ms)),
            ]
        });
        log::info!("✅ [AUTH] Watcher iniciado (sondeo cada {} ms)", poll_interval_ms);
        watcher
    }

    /// `attach` recibe el disparador compartido y devuelve las fuentes que lo usan.
    /// El monitor ya hizo su observación inicial.
    pub fn with_sources<F>(monitor: Rc<AuthMonitor<S>>, attach: F) -> Self
    where
        F: FnOnce(Rc<dyn Fn()>) -> Vec<Box<dyn TriggerSource>>,
    {
        let on_trigger: Rc<dyn Fn()> = {
            let monitor = monitor.clone();
            Rc::new(move || {
                monitor.observe();
            })
        };
        Self {
            monitor,
            sources: attach(on_trigger),
        }
    }
}

impl<S: CredentialStore + 'static> Drop for CredentialWatcher<S> {
    fn drop(&mut self) {
        // Primero se desmonta: cualquier disparo rezagado ya no escribe
        self.monitor.teardown();
        for source in self.sources.drain(..) {
            log::debug!("🔌 [AUTH] Fuente {} soltada", source.name());
        }
        log::info!("🔌 [AUTH] Watcher detenido");
    }
}
