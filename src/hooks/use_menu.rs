use std::rc::Rc;
use yew::prelude::*;

use crate::models::{MenuGroup, WorkspaceContext, STATIC_MENU};
use crate::viewmodels::MenuComposer;

/// Menú compuesto para el espacio actual; sólo se recompone si cambia
/// (tipo, id, nombre, vacío).
#[hook]
pub fn use_menu(workspace: &WorkspaceContext) -> Rc<Vec<MenuGroup>> {
    let composer = use_mut_ref(|| MenuComposer::new(STATIC_MENU.clone()));
    let mut composer = composer.borrow_mut();
    composer.menu(workspace)
}
