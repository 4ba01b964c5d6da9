// ============================================================================
// MÓDULO DE INTERNACIONALIZACIÓN - Textos del sidebar
// ============================================================================

use std::collections::HashMap;

/// Obtener diccionario de traducciones para un idioma
fn get_translations(lang: &str) -> HashMap<&'static str, &'static str> {
    let mut translations = HashMap::new();

    match lang.to_lowercase().as_str() {
        "en" => {
            // Menu
            translations.insert("agent_square", "Agent Square");
            translations.insert("plugin_square", "Plugin Square");
            translations.insert("my_agents", "My Agents");
            translations.insert("my_agents_management", "Agent Management");
            translations.insert("release_management", "Release Management");
            translations.insert("resource_management", "Resources");

            // Sidebar
            translations.insert("create", "Create");
            translations.insert("recently_used", "Recently used");
            translations.insert("confirm_remove", "Remove this conversation from the list?");
            translations.insert("confirm", "Confirm");
            translations.insert("cancel", "Cancel");
            translations.insert("delete_success", "Removed");
            translations.insert("delete_failed", "Remove failed, please retry");
            translations.insert("personal_center", "Personal center");
            translations.insert("logout", "Log out");
            translations.insert("login", "Log in");
            translations.insert("workspace", "Workspace");
            translations.insert("personal_workspace", "Personal workspace");
            translations.insert("language", "Language");
            translations.insert("language_name", "English");
        }
        _ => {
            // 菜单
            translations.insert("agent_square", "智能体广场");
            translations.insert("plugin_square", "插件广场");
            translations.insert("my_agents", "我的智能体");
            translations.insert("my_agents_management", "智能体管理");
            translations.insert("release_management", "发布管理");
            translations.insert("resource_management", "资源管理");

            // 侧边栏
            translations.insert("create", "创建");
            translations.insert("recently_used", "最近使用");
            translations.insert("confirm_remove", "确认从列表中移除该对话？");
            translations.insert("confirm", "确定");
            translations.insert("cancel", "取消");
            translations.insert("delete_success", "移除成功");
            translations.insert("delete_failed", "移除失败，请重试");
            translations.insert("personal_center", "个人中心");
            translations.insert("logout", "退出登录");
            translations.insert("login", "点击登录");
            translations.insert("workspace", "空间");
            translations.insert("personal_workspace", "个人空间");
            translations.insert("language", "语言");
            translations.insert("language_name", "简体中文");
        }
    }

    translations
}

/// Función de traducción
///
/// Devuelve la clave si no hay traducción.
pub fn t(key: &str, lang: &str) -> String {
    get_translations(lang)
        .get(key)
        .map(|s| s.to_string())
        .unwrap_or_else(|| key.to_string())
}
