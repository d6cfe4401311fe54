// ============================================================================
// VIEWS - Funciones que construyen DOM a partir del estado (sin lógica)
// ============================================================================

pub mod app;
pub mod links;
pub mod header;
pub mod menu;
pub mod main_section;
pub mod about;
pub mod projects;
pub mod resume;
pub mod timeline;
pub mod contact;
pub mod loading_screen;
pub mod music_player;

pub use app::{render_app, render_section};
pub use links::render_nav_link;
pub use header::render_header;
pub use menu::render_menu;
pub use main_section::render_main_section;
pub use about::{render_about, render_carousel};
pub use projects::{close_project_detail, render_project_detail, render_project_grid, render_projects};
pub use resume::render_resume;
pub use timeline::render_timeline;
pub use contact::{render_contact, render_contact_form};
pub use loading_screen::{loading_width, render_loading_screen};
pub use music_player::{render_music_player, update_music_toggle};
