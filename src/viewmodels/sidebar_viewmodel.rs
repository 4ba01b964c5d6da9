// ============================================================================
// SIDEBAR VIEWMODEL - Lo que el sidebar entrega a sus hijos
// ============================================================================

use std::rc::Rc;

use crate::models::{MenuGroup, Session};
use crate::state::SidebarState;

/// Vista derivada para un ciclo de render
#[derive(Debug, Clone, PartialEq)]
pub struct SidebarView {
    pub is_collapsed: bool,
    pub is_authenticated: bool,
    pub menu: Rc<Vec<MenuGroup>>,
    /// Vacía cuando la sección de recientes no se pinta
    pub recent: Rc<Vec<Session>>,
}

pub fn sidebar_view(
    state: &SidebarState,
    is_authenticated: bool,
    menu: Rc<Vec<MenuGroup>>,
    sessions: &Rc<Vec<Session>>,
) -> SidebarView {
    SidebarView {
        is_collapsed: state.collapsed,
        is_authenticated,
        menu,
        recent: if state.recent_visible() {
            sessions.clone()
        } else {
            Rc::new(Vec::new())
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{static_menu, WorkspaceContext};
    use crate::state::SidebarAction;
    use crate::viewmodels::MenuComposer;

    #[test]
    fn empty_workspace_without_sessions() {
        let mut composer = MenuComposer::new(static_menu());
        let mut state = SidebarState::default();
        let no_sessions = Rc::new(Vec::new());

        let view = sidebar_view(&state, false, composer.menu(&WorkspaceContext::empty()), &no_sessions);
        assert_eq!(view.menu.len(), 1);
        assert_eq!(view.menu[0].title, "discovery");
        assert!(view.recent.is_empty());
        assert!(!view.is_collapsed);

        // El plegado sigue funcionando por su cuenta
        state.apply(SidebarAction::ToggleCollapse);
        let view = sidebar_view(&state, false, composer.menu(&WorkspaceContext::empty()), &no_sessions);
        assert!(view.is_collapsed);
        assert_eq!(view.menu.len(), 1);
        assert_eq!(composer.compositions(), 1);
    }

    #[test]
    fn collapsed_sidebar_hides_recent_sessions() {
        let sessions = Rc::new(vec![Session::new(1, 10, "a")]);
        let mut state = SidebarState::default();
        let menu = Rc::new(static_menu());

        let view = sidebar_view(&state, true, menu.clone(), &sessions);
        assert!(Rc::ptr_eq(&view.recent, &sessions));

        state.apply(SidebarAction::ToggleCollapse);
        let view = sidebar_view(&state, true, menu, &sessions);
        assert!(view.recent.is_empty());
    }
}
