// ============================================================================
// MENU VIEWMODEL - Composición del menú según el espacio de trabajo
// ============================================================================

use std::rc::Rc;

use crate::models::{MenuGroup, WorkspaceContext, WorkspaceType, MY_AGENTS_KEY};
use crate::utils::APP_PATH_PREFIX;

/// Subtítulo de "mis agentes" en modo gestión
pub const MY_AGENTS_MANAGEMENT: &str = "my_agents_management";
/// Subtítulo por defecto de "mis agentes"
pub const MY_AGENTS_DEFAULT: &str = "my_agents";

/// Composición pura: plantilla + contexto -> grupos a pintar.
///
/// Sin espacio de equipo sólo queda el primer grupo (descubrimiento).
/// La plantilla no se modifica; se devuelve una copia decorada.
pub fn compose(static_menu: &[MenuGroup], workspace: &WorkspaceContext) -> Vec<MenuGroup> {
    if workspace.is_empty {
        return static_menu.iter().take(1).cloned().collect();
    }

    let management = match workspace.kind {
        WorkspaceType::Team => true,
        WorkspaceType::Personal => workspace.has_id(),
    };
    let sub_title = if management { MY_AGENTS_MANAGEMENT } else { MY_AGENTS_DEFAULT };

    static_menu
        .iter()
        .map(|group| MenuGroup {
            title: group.title,
            tabs: group
                .tabs
                .iter()
                .map(|tab| {
                    let mut tab = tab.clone();
                    if tab.key == MY_AGENTS_KEY {
                        tab.sub_title = sub_title;
                    }
                    tab
                })
                .collect(),
        })
        .collect()
}

/// Clave de memoización: sólo estos campos afectan a la composición
type ComposeKey = (WorkspaceType, Option<String>, String, bool);

fn compose_key(workspace: &WorkspaceContext) -> ComposeKey {
    (
        workspace.kind,
        workspace.id.clone(),
        workspace.name.clone(),
        workspace.is_empty,
    )
}

/// Compositor memoizado: recompone sólo si cambia la clave
pub struct MenuComposer {
    template: Rc<Vec<MenuGroup>>,
    last: Option<(ComposeKey, Rc<Vec<MenuGroup>>)>,
    compositions: usize,
}

impl MenuComposer {
    pub fn new(template: Vec<MenuGroup>) -> Self {
        Self {
            template: Rc::new(template),
            last: None,
            compositions: 0,
        }
    }

    pub fn menu(&mut self, workspace: &WorkspaceContext) -> Rc<Vec<MenuGroup>> {
        let key = compose_key(workspace);
        if let Some((last_key, menu)) = &self.last {
            if *last_key == key {
                return menu.clone();
            }
        }

        let menu = Rc::new(compose(&self.template, workspace));
        self.compositions += 1;
        log::debug!("🧩 [MENU] Recompuesto ({:?}, vacío: {})", workspace.kind, workspace.is_empty);
        self.last = Some((key, menu.clone()));
        menu
    }

    /// Número de composiciones reales hechas
    pub fn compositions(&self) -> usize {
        self.compositions
    }
}

/// Pestaña activa a partir de la ruta actual.
///
/// Se recorre el menú en orden y cada coincidencia pisa a la anterior:
/// gana la última pestaña cuya clave aparezca en la ruta.
pub fn active_key_for_path(menu: &[MenuGroup], pathname: &str) -> Option<&'static str> {
    let path = pathname.replacen(APP_PATH_PREFIX, "", 1);
    menu.iter()
        .flat_map(|group| group.tabs.iter())
        .filter(|tab| path.contains(tab.key))
        .last()
        .map(|tab| tab.key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::static_menu;

    fn my_agents_subtitle(menu: &[MenuGroup]) -> Option<&'static str> {
        menu.iter()
            .find_map(|g| g.find(MY_AGENTS_KEY))
            .map(|tab| tab.sub_title)
    }

    #[test]
    fn empty_workspace_yields_first_group_only() {
        let template = static_menu();
        let contexts = [
            WorkspaceContext::empty(),
            WorkspaceContext { is_empty: true, ..WorkspaceContext::team("t1", "Ops") },
            WorkspaceContext { is_empty: true, ..WorkspaceContext::personal(Some("u1"), "me") },
        ];
        for ctx in contexts {
            let menu = compose(&template, &ctx);
            assert_eq!(menu, vec![template[0].clone()]);
        }
    }

    #[test]
    fn team_workspace_uses_management_subtitle() {
        let menu = compose(&static_menu(), &WorkspaceContext::team("t1", "Ops"));
        assert_eq!(menu.len(), static_menu().len());
        assert_eq!(my_agents_subtitle(&menu), Some(MY_AGENTS_MANAGEMENT));
    }

    #[test]
    fn personal_without_id_uses_default_subtitle() {
        let menu = compose(&static_menu(), &WorkspaceContext::personal(None, "me"));
        assert_eq!(my_agents_subtitle(&menu), Some(MY_AGENTS_DEFAULT));
    }

    #[test]
    fn personal_with_id_uses_management_subtitle() {
        let menu = compose(&static_menu(), &WorkspaceContext::personal(Some("u1"), "me"));
        assert_eq!(my_agents_subtitle(&menu), Some(MY_AGENTS_MANAGEMENT));
    }

    #[test]
    fn template_is_not_mutated() {
        let template = static_menu();
        let _ = compose(&template, &WorkspaceContext::team("t1", "Ops"));
        assert_eq!(template, static_menu());
        assert_eq!(my_agents_subtitle(&template), Some(MY_AGENTS_DEFAULT));
    }

    #[test]
    fn other_tabs_keep_their_subtitles() {
        let template = static_menu();
        let menu = compose(&template, &WorkspaceContext::team("t1", "Ops"));
        for (group, original) in menu.iter().zip(template.iter()) {
            for (tab, orig) in group.tabs.iter().zip(original.tabs.iter()) {
                if tab.key != MY_AGENTS_KEY {
                    assert_eq!(tab, orig);
                }
            }
        }
    }

    #[test]
    fn composer_memoizes_on_key() {
        let mut composer = MenuComposer::new(static_menu());
        let ctx = WorkspaceContext::team("t1", "Ops");

        let first = composer.menu(&ctx);
        let second = composer.menu(&ctx.clone());
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(composer.compositions(), 1);

        composer.menu(&WorkspaceContext::team("t1", "Ops renamed"));
        assert_eq!(composer.compositions(), 2);

        composer.menu(&WorkspaceContext::empty());
        assert_eq!(composer.compositions(), 3);
    }

    #[test]
    fn active_key_ignores_app_prefix() {
        let menu = static_menu();
        assert_eq!(active_key_for_path(&menu, "/application-development/space/agent"), Some("agent"));
        assert_eq!(active_key_for_path(&menu, "/store/plugin/detail"), Some("plugin"));
        assert_eq!(active_key_for_path(&menu, "/nowhere"), None);
    }

    #[test]
    fn active_key_prefers_last_matching_tab() {
        let menu = static_menu();
        // "plugin" va antes que "agent" en el menú; ambas aparecen en la ruta
        assert_eq!(active_key_for_path(&menu, "/store/plugin/agent-detail"), Some("agent"));
        assert_eq!(active_key_for_path(&menu, "/home/resource"), Some("resource"));
    }
}
