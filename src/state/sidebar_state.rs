// ============================================================================
// SIDEBAR STATE - Estado local de UI del sidebar
// ============================================================================
// Plegado, panel de cuenta, selector de espacio, centro personal y sección
// "recientes". Nada de esto toca la caché ni la autenticación.
// ============================================================================

use std::rc::Rc;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarState {
    pub collapsed: bool,
    pub account_panel_open: bool,
    pub workspace_picker_open: bool,
    pub personal_center_open: bool,
    pub show_recent: bool,
    pub active_menu_key: Option<String>,
}

impl Default for SidebarState {
    fn default() -> Self {
        Self {
            collapsed: false,
            account_panel_open: false,
            workspace_picker_open: false,
            personal_center_open: false,
            show_recent: true,
            active_menu_key: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarAction {
    ToggleCollapse,
    /// El panel sólo se abre con sesión iniciada
    ToggleAccountPanel { authenticated: bool },
    CloseAccountPanel,
    ToggleWorkspacePicker,
    CloseWorkspacePicker,
    OpenPersonalCenter,
    ClosePersonalCenter,
    ToggleRecent,
    SetActiveMenu(String),
    /// Tras cerrar sesión no queda ningún panel de cuenta abierto
    LoggedOut,
}

impl SidebarState {
    pub fn apply(&mut self, action: SidebarAction) {
        match action {
            SidebarAction::ToggleCollapse => self.collapsed = !self.collapsed,
            SidebarAction::ToggleAccountPanel { authenticated } => {
                self.account_panel_open = authenticated && !self.account_panel_open;
            }
            SidebarAction::CloseAccountPanel => self.account_panel_open = false,
            SidebarAction::ToggleWorkspacePicker => {
                self.workspace_picker_open = !self.workspace_picker_open;
            }
            SidebarAction::CloseWorkspacePicker => self.workspace_picker_open = false,
            SidebarAction::OpenPersonalCenter => {
                self.personal_center_open = true;
                self.account_panel_open = false;
            }
            SidebarAction::ClosePersonalCenter => self.personal_center_open = false,
            SidebarAction::ToggleRecent => self.show_recent = !self.show_recent,
            SidebarAction::SetActiveMenu(key) => self.active_menu_key = Some(key),
            SidebarAction::LoggedOut => {
                self.account_panel_open = false;
                self.personal_center_open = false;
            }
        }
    }

    /// La lista de recientes no se pinta con el sidebar plegado
    pub fn recent_visible(&self) -> bool {
        !self.collapsed && self.show_recent
    }
}

impl Reducible for SidebarState {
    type Action = SidebarAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapse_toggles_only_collapse() {
        let mut state = SidebarState::default();
        state.account_panel_open = true;
        state.apply(SidebarAction::ToggleCollapse);
        assert!(state.collapsed);
        assert!(state.account_panel_open);
        state.apply(SidebarAction::ToggleCollapse);
        assert!(!state.collapsed);
    }

    #[test]
    fn account_panel_needs_authentication() {
        let mut state = SidebarState::default();
        state.apply(SidebarAction::ToggleAccountPanel { authenticated: false });
        assert!(!state.account_panel_open);

        state.apply(SidebarAction::ToggleAccountPanel { authenticated: true });
        assert!(state.account_panel_open);
        state.apply(SidebarAction::ToggleAccountPanel { authenticated: true });
        assert!(!state.account_panel_open);
    }

    #[test]
    fn personal_center_closes_account_panel() {
        let mut state = SidebarState::default();
        state.apply(SidebarAction::ToggleAccountPanel { authenticated: true });
        state.apply(SidebarAction::OpenPersonalCenter);
        assert!(state.personal_center_open);
        assert!(!state.account_panel_open);
    }

    #[test]
    fn logged_out_closes_account_surfaces() {
        let mut state = SidebarState::default();
        state.apply(SidebarAction::ToggleAccountPanel { authenticated: true });
        state.apply(SidebarAction::LoggedOut);
        state.apply(SidebarAction::LoggedOut);
        assert!(!state.account_panel_open);
        assert!(!state.personal_center_open);
    }

    #[test]
    fn recent_hidden_while_collapsed() {
        let mut state = SidebarState::default();
        assert!(state.recent_visible());
        state.apply(SidebarAction::ToggleCollapse);
        assert!(!state.recent_visible());
        state.apply(SidebarAction::ToggleCollapse);
        state.apply(SidebarAction::ToggleRecent);
        assert!(!state.recent_visible());
    }

    #[test]
    fn reducer_keeps_rc_when_nothing_changes() {
        let state = Rc::new(SidebarState::default());
        let next = state.clone().reduce(SidebarAction::CloseAccountPanel);
        assert!(Rc::ptr_eq(&state, &next));
    }
}
