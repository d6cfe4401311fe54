// ============================================================================
// VIEW ROUTER - Sección activa + overlay del menú de navegación
// ============================================================================

use crate::models::SectionId;
use crate::state::reactivity::ReactiveState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RouteState {
    pub section: SectionId,
    pub menu_open: bool,
}

/// Router de vistas: un único valor activo, reemplazado en cada navegación.
/// Sin historial: "volver" es otra navegación hacia una sección concreta.
pub struct ViewRouter {
    state: ReactiveState<RouteState>,
}

impl ViewRouter {
    pub fn new() -> Self {
        Self {
            state: ReactiveState::new(RouteState::default()),
        }
    }

    /// Activar `target` y cerrar el menú si estaba abierto
    pub fn navigate(&self, target: SectionId) {
        let previous = self.current_section();
        log::info!("🧭 [ROUTER] {} → {}", previous.slug(), target.slug());
        self.state.update(|route| {
            route.section = target;
            route.menu_open = false;
        });
    }

    pub fn current_section(&self) -> SectionId {
        self.state.with(|route| route.section)
    }

    pub fn is_menu_open(&self) -> bool {
        self.state.with(|route| route.menu_open)
    }

    pub fn toggle_menu(&self) {
        self.state.update(|route| route.menu_open = !route.menu_open);
        log::debug!("☰ [ROUTER] Menú {}", if self.is_menu_open() { "abierto" } else { "cerrado" });
    }

    pub fn close_menu(&self) {
        if self.is_menu_open() {
            self.state.update(|route| route.menu_open = false);
        }
    }

    pub fn route(&self) -> RouteState {
        self.state.get()
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.state.subscribe(callback);
    }
}

impl Default for ViewRouter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn any_section() -> impl Strategy<Value = SectionId> {
        prop::sample::select(SectionId::ALL.to_vec())
    }

    #[test]
    fn starts_on_main_with_menu_closed() {
        let router = ViewRouter::new();
        assert_eq!(router.current_section(), SectionId::Main);
        assert!(!router.is_menu_open());
    }

    #[test]
    fn navigate_closes_the_menu() {
        let router = ViewRouter::new();
        router.toggle_menu();
        assert!(router.is_menu_open());
        router.navigate(SectionId::Contact);
        assert_eq!(router.current_section(), SectionId::Contact);
        assert!(!router.is_menu_open());
    }

    #[test]
    fn navigate_to_current_section_still_notifies() {
        let router = ViewRouter::new();
        let hits = Rc::new(Cell::new(0));
        {
            let hits = hits.clone();
            router.subscribe(move || hits.set(hits.get() + 1));
        }
        router.navigate(SectionId::Main);
        router.navigate(SectionId::About);
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn close_menu_is_silent_when_already_closed() {
        let router = ViewRouter::new();
        let hits = Rc::new(Cell::new(0));
        {
            let hits = hits.clone();
            router.subscribe(move || hits.set(hits.get() + 1));
        }
        router.close_menu();
        assert_eq!(hits.get(), 0);
    }

    proptest! {
        #[test]
        fn last_navigation_wins(targets in prop::collection::vec(any_section(), 1..32)) {
            let router = ViewRouter::new();
            for target in &targets {
                router.navigate(*target);
            }
            prop_assert_eq!(router.current_section(), *targets.last().unwrap());
            prop_assert!(!router.is_menu_open());
        }
    }
}
