/// Clave del evento `storage` que el navegador emite en las demás pestañas
pub const STORAGE_EVENT: &str = "storage";

/// Instantánea del espacio de trabajo persistida por el store de espacios
pub const STORAGE_KEY_WORKSPACE: &str = "workspace_context";

/// Ruta a la que volver tras el login SSO (sessionStorage)
pub const SESSION_KEY_POST_LOGIN_REDIRECT: &str = "postLoginRedirect";

/// Marcador de campaña que se arrastra a la URL al crear
pub const SESSION_KEY_BD_VID: &str = "bd_vid";

/// Prefijo de la app que se ignora al calcular la pestaña activa
pub const APP_PATH_PREFIX: &str = "/application-development";

/// Espacios disponibles para el selector, los escribe el store de espacios
pub const STORAGE_KEY_WORKSPACE_LIST: &str = "workspace_list";

/// Idioma elegido en el panel de cuenta
pub const STORAGE_KEY_LANGUAGE: &str = "language";
