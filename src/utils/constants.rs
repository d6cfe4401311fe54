// ============================================================================
// CONSTANTES - Claves de localStorage y valores por defecto
// ============================================================================

/// Preferencia de tema oscuro ("true" / "false")
pub const DARK_MODE_KEY: &str = "isDarkMode";

/// Preferencia de idioma francés ("true" / "false")
pub const FRENCH_KEY: &str = "isFrench";

/// Timestamp (ms desde epoch) del último envío del formulario de contacto
pub const LAST_EMAIL_TIME_KEY: &str = "lastEmailTime";

/// Número de proyectos mostrados por defecto en la galería
pub const DEFAULT_PROJECT_PAGE_SIZE: i64 = 6;

/// Id del elemento raíz donde se monta la aplicación
pub const ROOT_ELEMENT_ID: &str = "app";

/// Contenedor del reproductor de música, fuera de #app
pub const MUSIC_ROOT_ID: &str = "music-root";
