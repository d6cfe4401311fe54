// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod reactivity;
pub mod router;
pub mod preferences;
pub mod timers;
pub mod app_state;

pub use reactivity::*;
pub use router::*;
pub use preferences::*;
pub use timers::*;
pub use app_state::*;
