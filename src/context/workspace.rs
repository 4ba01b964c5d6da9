use std::rc::Rc;
use yew::prelude::*;

use crate::models::WorkspaceContext;
use crate::utils::{load_from_storage, save_to_storage, STORAGE_KEY_WORKSPACE, STORAGE_KEY_WORKSPACE_LIST};

/// Store de espacios de trabajo expuesto como contexto de yew.
///
/// El sidebar sólo lee `current`; `select` pertenece al selector de espacios.
#[derive(Clone)]
pub struct WorkspaceStore {
    pub current: WorkspaceContext,
    pub available: Rc<Vec<WorkspaceContext>>,
    pub select: Callback<WorkspaceContext>,
}

impl PartialEq for WorkspaceStore {
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current && self.available == other.available
    }
}

#[derive(Properties, PartialEq)]
pub struct WorkspaceProviderProps {
    #[prop_or_default]
    pub children: Children,
}

/// Carga la instantánea persistida; sin nada guardado se asume espacio personal
fn load_current() -> WorkspaceContext {
    load_from_storage::<WorkspaceContext>(STORAGE_KEY_WORKSPACE)
        .unwrap_or_else(|| WorkspaceContext::personal(None, ""))
}

#[function_component(WorkspaceProvider)]
pub fn workspace_provider(props: &WorkspaceProviderProps) -> Html {
    let current = use_state(load_current);
    let available = use_memo((), |_| {
        load_from_storage::<Vec<WorkspaceContext>>(STORAGE_KEY_WORKSPACE_LIST).unwrap_or_default()
    });

    let select = {
        let current = current.clone();
        Callback::from(move |workspace: WorkspaceContext| {
            log::info!("🏢 Espacio seleccionado: {:?} {}", workspace.kind, workspace.name);
            if let Err(e) = save_to_storage(STORAGE_KEY_WORKSPACE, &workspace) {
                log::warn!("⚠️ {}", e);
            }
            current.set(workspace);
        })
    };

    let store = WorkspaceStore {
        current: (*current).clone(),
        available,
        select,
    };

    html! {
        <ContextProvider<WorkspaceStore> context={store}>
            { for props.children.iter() }
        </ContextProvider<WorkspaceStore>>
    }
}
