// ============================================================================
// SIDEBAR - Controlador del panel lateral
// ============================================================================
// Junta señal de auth, caché de sesiones y menú compuesto, y reparte las
// acciones (crear, navegar, borrar, logout) a sus manejadores.
// ============================================================================

use yew::prelude::*;

use super::{
    BottomLogin, CreateButton, DeleteModal, MenuList, NoticeToast, PersonalCenter, RecentList,
    WorkspacePicker,
};
use crate::config::CONFIG;
use crate::context::{Language, LanguageContext, WorkspaceStore};
use crate::hooks::{use_auth_signal, use_menu, use_notice, use_session_list};
use crate::models::{MenuNode, Session, UserProfile};
use crate::services::navigation::{current_pathname, navigate};
use crate::services::{handle_login_redirect, handle_logout_redirect};
use crate::state::{SidebarAction, SidebarState};
use crate::viewmodels::{active_key_for_path, sidebar_view};

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub user: Option<UserProfile>,
    #[prop_or_default]
    pub on_create: Option<Callback<()>>,
    #[prop_or_default]
    pub on_create_analytics: Option<Callback<()>>,
    /// Por defecto, redirección de login
    #[prop_or_default]
    pub on_not_login: Option<Callback<()>>,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let state = use_reducer(SidebarState::default);
    let auth = use_auth_signal();
    let notice = use_notice();
    let sessions = use_session_list(notice.show.clone());
    let workspace = use_context::<WorkspaceStore>()
        .map(|store| store.current)
        .unwrap_or_default();
    let menu = use_menu(&workspace);
    // Sin proveedor: idioma de configuración, sin conmutador efectivo
    let language = use_context::<LanguageContext>().unwrap_or_else(|| LanguageContext {
        language: Language::from_code(&CONFIG.ui.default_language),
        set_language: Callback::noop(),
    });

    // Pestaña activa según la ruta al montar
    {
        let dispatcher = state.dispatcher();
        let menu = menu.clone();
        use_effect_with((), move |_| {
            if let Some(key) = active_key_for_path(&menu, &current_pathname()) {
                dispatcher.dispatch(SidebarAction::SetActiveMenu(key.to_string()));
            }
            || ()
        });
    }

    // Sesión cerrada desde fuera (otra pestaña, token caducado): nada de paneles de cuenta
    {
        let dispatcher = state.dispatcher();
        use_effect_with(auth.is_authenticated, move |authenticated| {
            if !*authenticated {
                dispatcher.dispatch(SidebarAction::LoggedOut);
            }
            || ()
        });
    }

    let view = sidebar_view(&state, auth.is_authenticated, menu, &sessions.sessions);
    let lang = language.code();

    let toggle_collapse = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_e: MouseEvent| dispatcher.dispatch(SidebarAction::ToggleCollapse))
    };

    let on_create = props.on_create.clone().unwrap_or_else(|| {
        Callback::from(|_| log::info!("➕ Crear: sin manejador configurado"))
    });
    let on_not_login = props
        .on_not_login
        .clone()
        .unwrap_or_else(|| Callback::from(|_| handle_login_redirect()));

    let on_select_menu = {
        let dispatcher = state.dispatcher();
        Callback::from(move |tab: MenuNode| {
            dispatcher.dispatch(SidebarAction::SetActiveMenu(tab.key.to_string()));
            navigate(tab.path);
        })
    };

    let on_toggle_recent = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(SidebarAction::ToggleRecent))
    };

    let on_navigate_session = Callback::from(|session: Session| navigate(&session.chat_path()));

    let on_toggle_picker = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(SidebarAction::ToggleWorkspacePicker))
    };
    let on_close_picker = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(SidebarAction::CloseWorkspacePicker))
    };

    let on_bottom_click = {
        let dispatcher = state.dispatcher();
        let authenticated = auth.is_authenticated;
        Callback::from(move |_: ()| {
            if authenticated {
                dispatcher.dispatch(SidebarAction::ToggleAccountPanel { authenticated });
            } else {
                handle_login_redirect();
            }
        })
    };
    let on_close_panel = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(SidebarAction::CloseAccountPanel))
    };
    let on_personal_center = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(SidebarAction::OpenPersonalCenter))
    };
    let on_close_personal_center = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(SidebarAction::ClosePersonalCenter))
    };

    let on_switch_language = {
        let current = language.language;
        let set_language = language.set_language.clone();
        Callback::from(move |_: ()| set_language.emit(current.toggled()))
    };

    // Logout: una sola acción idempotente
    let on_logout = {
        let dispatcher = state.dispatcher();
        let clear_credentials = auth.clear_credentials.clone();
        Callback::from(move |_: ()| {
            log::info!("👋 Logout");
            clear_credentials.emit(());
            dispatcher.dispatch(SidebarAction::LoggedOut);
            handle_logout_redirect();
        })
    };

    let class = classes!(
        "sidebar",
        view.is_collapsed.then_some("collapsed"),
        props.class.clone()
    );

    html! {
        <aside {class}>
            <div class="collapse-toggle" onclick={toggle_collapse}>
                <span class={classes!("collapse-icon", view.is_collapsed.then_some("flipped"))}>{"‹"}</span>
            </div>

            <div class="sidebar-main">
                <div class="sidebar-logo">
                    if !view.is_collapsed {
                        <span class="logo-text">{"Agent Console"}</span>
                    }
                </div>

                <CreateButton
                    is_collapsed={view.is_collapsed}
                    is_authenticated={view.is_authenticated}
                    language={lang.clone()}
                    {on_create}
                    {on_not_login}
                    on_analytics={props.on_create_analytics.clone()}
                />

                <WorkspacePicker
                    is_collapsed={view.is_collapsed}
                    open={state.workspace_picker_open}
                    language={lang.clone()}
                    on_toggle={on_toggle_picker}
                    on_close={on_close_picker}
                />

                <MenuList
                    menu={view.menu.clone()}
                    is_collapsed={view.is_collapsed}
                    active_key={state.active_menu_key.clone()}
                    language={lang.clone()}
                    on_select={on_select_menu}
                />

                <RecentList
                    is_collapsed={view.is_collapsed}
                    show_recent={state.show_recent}
                    sessions={view.recent.clone()}
                    language={lang.clone()}
                    on_toggle={on_toggle_recent}
                    on_navigate={on_navigate_session}
                    on_delete={sessions.request_delete.clone()}
                />

                <BottomLogin
                    is_collapsed={view.is_collapsed}
                    is_authenticated={view.is_authenticated}
                    user={props.user.clone()}
                    account_panel_open={state.account_panel_open}
                    language={lang.clone()}
                    on_click={on_bottom_click}
                    {on_close_panel}
                    {on_personal_center}
                    {on_switch_language}
                    {on_logout}
                />
            </div>

            <PersonalCenter
                open={state.personal_center_open && view.is_authenticated}
                user={props.user.clone()}
                sessions={sessions.sessions.clone()}
                language={lang.clone()}
                on_close={on_close_personal_center}
                on_delete={sessions.request_delete.clone()}
            />

            <DeleteModal
                pending={sessions.pending}
                language={lang.clone()}
                on_confirm={sessions.confirm_delete.clone()}
                on_cancel={sessions.cancel_delete.clone()}
            />

            <NoticeToast
                notice={notice.notice.clone()}
                language={lang}
                on_dismiss={notice.dismiss.clone()}
            />
        </aside>
    }
}
