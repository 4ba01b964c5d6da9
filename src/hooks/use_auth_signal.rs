use std::rc::Rc;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::services::CredentialWatcher;
use crate::state::AuthMonitor;
use crate::utils::LocalStorageCredentials;

pub struct UseAuthSignalHandle {
    pub is_authenticated: bool,
    /// Borra las credenciales locales y recalcula la señal
    pub clear_credentials: Callback<()>,
}

/// Señal de autenticación con su watcher (storage + sondeo).
/// El watcher vive lo que el componente; al desmontar se cancelan ambos.
#[hook]
pub fn use_auth_signal() -> UseAuthSignalHandle {
    let monitor: Rc<AuthMonitor<LocalStorageCredentials>> =
        use_memo((), |_| AuthMonitor::new(LocalStorageCredentials));
    let is_authenticated = use_state(|| monitor.is_authenticated());

    {
        let monitor = monitor.clone();
        let is_authenticated = is_authenticated.clone();
        use_effect_with((), move |_| {
            monitor.subscribe(move |value| is_authenticated.set(*value));
            // Puede haber cambiado entre el render y el montaje
            monitor.observe();

            let watcher = CredentialWatcher::start(monitor, CONFIG.auth.poll_interval_ms);
            move || drop(watcher)
        });
    }

    let clear_credentials = {
        let monitor = monitor.clone();
        Callback::from(move |_| {
            monitor.logout();
        })
    };

    UseAuthSignalHandle {
        is_authenticated: *is_authenticated,
        clear_credentials,
    }
}
