// ============================================================================
// CONTENT - Datos estáticos del portfolio (definidos en compilación)
// ============================================================================

pub mod projects;
pub mod timeline;
pub mod media;

pub use projects::projects;
pub use timeline::timeline;
pub use media::{about_images, music_tracks, RESUME_IMAGE, RESUME_PDF};
