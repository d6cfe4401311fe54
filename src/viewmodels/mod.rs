// ============================================================================
// VIEWMODELS - Lógica de presentación sin DOM
// ============================================================================

pub mod projects_viewmodel;
pub mod contact_viewmodel;
pub mod loading_viewmodel;
pub mod music_viewmodel;
pub mod carousel_viewmodel;
pub mod timeline_viewmodel;

pub use projects_viewmodel::ProjectsViewModel;
pub use contact_viewmodel::{ContactError, ContactViewModel};
pub use loading_viewmodel::LoadingProgress;
pub use music_viewmodel::{MusicPlayer, PlayerAction, Playlist};
pub use carousel_viewmodel::Carousel;
pub use timeline_viewmodel::Side;
