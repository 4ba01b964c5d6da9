// ============================================================================
// MENÚ DE NAVEGACIÓN - Plantilla estática del sidebar
// ============================================================================

/// Clave de la entrada "mis agentes", la única que decora el compositor
pub const MY_AGENTS_KEY: &str = "agent";

/// Una entrada del menú. Los textos son claves de traducción.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuNode {
    pub key: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub active_icon: &'static str,
    pub path: &'static str,
    pub sub_title: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuGroup {
    pub title: &'static str,
    pub tabs: Vec<MenuNode>,
}

impl MenuGroup {
    pub fn find(&self, key: &str) -> Option<&MenuNode> {
        self.tabs.iter().find(|tab| tab.key == key)
    }
}

/// Grupos de primer nivel: descubrimiento primero, gestión personal después
pub fn static_menu() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            title: "discovery",
            tabs: vec![
                MenuNode {
                    key: "home",
                    label: "agent_square",
                    icon: "/assets/sidebar/home.svg",
                    active_icon: "/assets/sidebar/home-active.svg",
                    path: "/home",
                    sub_title: "agent_square",
                },
                MenuNode {
                    key: "plugin",
                    label: "plugin_square",
                    icon: "/assets/sidebar/plugin.svg",
                    active_icon: "/assets/sidebar/plugin-active.svg",
                    path: "/store/plugin",
                    sub_title: "plugin_square",
                },
            ],
        },
        MenuGroup {
            title: "personal",
            tabs: vec![
                MenuNode {
                    key: MY_AGENTS_KEY,
                    label: "my_agents",
                    icon: "/assets/sidebar/agent.svg",
                    active_icon: "/assets/sidebar/agent-active.svg",
                    path: "/space/agent",
                    sub_title: "my_agents",
                },
                MenuNode {
                    key: "release",
                    label: "release_management",
                    icon: "/assets/sidebar/release.svg",
                    active_icon: "/assets/sidebar/release-active.svg",
                    path: "/management/release",
                    sub_title: "release_management",
                },
                MenuNode {
                    key: "resource",
                    label: "resource_management",
                    icon: "/assets/sidebar/resource.svg",
                    active_icon: "/assets/sidebar/resource-active.svg",
                    path: "/resource/knowledge",
                    sub_title: "resource_management",
                },
            ],
        },
    ]
}

lazy_static::lazy_static! {
    /// Plantilla inmutable compartida por todas las composiciones
    pub static ref STATIC_MENU: Vec<MenuGroup> = static_menu();
}
