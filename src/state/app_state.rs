// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::config::AppConfig;
use crate::content;
use crate::models::SectionId;
use crate::services::{Clock, Cooldown, MailRelay};
use crate::state::preferences::PreferenceStore;
use crate::state::router::ViewRouter;
use crate::state::timers::{Scheduler, TimerSlot};
use crate::utils::storage::KeyValueStorage;
use crate::viewmodels::{Carousel, ContactViewModel, LoadingProgress, MusicPlayer, ProjectsViewModel};

/// Tipo de actualización del DOM
#[derive(Clone, Copy, Debug)]
pub enum UpdateType {
    /// Actualización incremental (solo elementos específicos)
    Incremental(IncrementalUpdate),
    /// Re-render completo (navegación, tema, idioma)
    FullRender,
}

/// Tipo de actualización incremental específica
#[derive(Clone, Copy, Debug)]
pub enum IncrementalUpdate {
    /// Rejilla de proyectos (búsqueda/orden) sin perder el foco del input
    ProjectGrid,
    /// Modal de detalle de proyecto
    ProjectDetail,
    /// Estado del envío del formulario
    ContactStatus,
    /// Texto de la cuenta atrás del cooldown
    Countdown,
    /// Barra de la pantalla de carga
    LoadingBar,
    /// Botón del reproductor
    MusicPlayer,
    /// Imagen actual del carrusel
    Carousel,
}

type Callback = Rc<dyn Fn()>;

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState {
    pub config: Rc<AppConfig>,
    pub router: Rc<ViewRouter>,
    pub preferences: Rc<PreferenceStore>,

    // Viewmodels de cada sección
    pub projects: Rc<RefCell<ProjectsViewModel>>,
    pub contact: Rc<ContactViewModel>,
    pub carousel: Rc<RefCell<Carousel>>,
    pub music: Rc<RefCell<MusicPlayer>>,

    // Pantalla de carga
    pub loading: Rc<RefCell<LoadingProgress>>,
    pub is_loading: Rc<RefCell<bool>>,
    loading_ticker: Rc<TimerSlot>,
    loading_dismiss: Rc<TimerSlot>,

    // Reactivity: callbacks para notificar cambios
    pub change_subscribers: Rc<RefCell<Vec<Callback>>>,
}

impl AppState {
    /// Crear estado con sus dependencias (storage, relay y reloj inyectables)
    pub fn new(
        config: AppConfig,
        storage: Rc<dyn KeyValueStorage>,
        relay: Rc<dyn MailRelay>,
        clock: Clock,
        scheduler: Rc<dyn Scheduler>,
    ) -> Self {
        let cooldown = Cooldown::from_minutes(config.contact.cooldown_minutes);
        let page_size = config.projects.page_size;

        let state = Self {
            router: Rc::new(ViewRouter::new()),
            preferences: Rc::new(PreferenceStore::load(storage.clone())),
            projects: Rc::new(RefCell::new(ProjectsViewModel::new(content::projects(), page_size))),
            contact: Rc::new(ContactViewModel::new(relay, storage, cooldown, clock, scheduler.clone())),
            carousel: Rc::new(RefCell::new(Carousel::new(content::about_images().iter().copied()))),
            music: Rc::new(RefCell::new(MusicPlayer::new(content::music_tracks()))),
            loading: Rc::new(RefCell::new(LoadingProgress::new())),
            is_loading: Rc::new(RefCell::new(true)),
            loading_ticker: TimerSlot::new(scheduler.clone()),
            loading_dismiss: TimerSlot::new(scheduler),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
            config: Rc::new(config),
        };

        // Router y preferencias disparan re-render completo
        let subscribers = state.change_subscribers.clone();
        state.router.subscribe(move || notify_all(&subscribers));
        let subscribers = state.change_subscribers.clone();
        state.preferences.subscribe(move || notify_all(&subscribers));

        state
    }

    /// Navegar a una sección. Al salir de Contact se cancelan sus timers.
    pub fn navigate(&self, target: SectionId) {
        let current = self.router.current_section();
        if current == SectionId::Contact && target != SectionId::Contact {
            self.contact.teardown();
        }
        if current == SectionId::Projects {
            self.projects.borrow_mut().close_detail();
        }
        self.router.navigate(target);
    }

    pub fn is_loading(&self) -> bool {
        *self.is_loading.borrow()
    }

    /// Un paso de la pantalla de carga. Devuelve `true` solo en el paso que
    /// completa el progreso.
    pub fn on_loading_tick(&self, increment: f64) -> bool {
        let mut progress = self.loading.borrow_mut();
        if progress.is_complete() {
            return false;
        }
        progress.advance(increment)
    }

    /// Ocultar la pantalla de carga y mostrar la sección actual
    pub fn finish_loading(&self) {
        if !self.is_loading() {
            return;
        }
        log::info!("✅ [LOADING] Carga completada");
        *self.is_loading.borrow_mut() = false;
        self.loading_ticker.cancel();
        self.notify_subscribers();
    }

    /// Arrancar los timers de la pantalla de carga
    pub fn start_loading(&self) {
        let tick_ms = self.config.loading.tick_ms;
        let max_increment = self.config.loading.max_increment;
        let dismiss_delay_ms = self.config.loading.dismiss_delay_ms;
        log::info!("⏳ [LOADING] Iniciando pantalla de carga");

        let state = self.clone();
        self.loading_ticker.set_interval(tick_ms, move || {
            let increment = js_sys::Math::random() * max_increment;
            let completed = state.on_loading_tick(increment);
            crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::LoadingBar));
            if !completed {
                return;
            }
            state.loading_ticker.cancel_deferred();

            let finisher = state.clone();
            state.loading_dismiss.set_timeout(dismiss_delay_ms, move || {
                finisher.finish_loading();
                finisher.loading_dismiss.cancel_deferred();
            });
        });
    }

    /// Suscribirse a cambios de estado crítico
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Notificar a todos los subscribers (re-render completo)
    pub fn notify_subscribers(&self) {
        notify_all(&self.change_subscribers);
    }
}

fn notify_all(subscribers: &RefCell<Vec<Callback>>) {
    let callbacks: Vec<Callback> = subscribers.borrow().clone();
    for callback in callbacks {
        callback();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContactMessage, SubmissionStatus};
    use crate::services::MailError;
    use crate::state::timers::manual::ManualScheduler;
    use crate::utils::constants::LAST_EMAIL_TIME_KEY;
    use crate::utils::storage::MemoryStorage;
    use async_trait::async_trait;
    use std::cell::Cell;

    struct NullRelay;

    #[async_trait(?Send)]
    impl MailRelay for NullRelay {
        async fn send(&self, _message: &ContactMessage) -> Result<(), MailError> {
            Ok(())
        }
    }

    fn state_with(storage: MemoryStorage) -> AppState {
        state_on(storage, ManualScheduler::new())
    }

    fn state_on(storage: MemoryStorage, scheduler: Rc<ManualScheduler>) -> AppState {
        AppState::new(
            AppConfig::default(),
            Rc::new(storage),
            Rc::new(NullRelay),
            Rc::new(|| 1_700_000_000_000.0),
            scheduler,
        )
    }

    fn counter(state: &AppState) -> Rc<Cell<u32>> {
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        state.subscribe_to_changes(move || h.set(h.get() + 1));
        hits
    }

    #[test]
    fn starts_loading_on_main() {
        let state = state_with(MemoryStorage::new());
        assert!(state.is_loading());
        assert_eq!(state.router.current_section(), SectionId::Main);
        assert_eq!(state.projects.borrow().display_count(), 6);
    }

    #[test]
    fn navigation_and_preferences_notify_subscribers() {
        let state = state_with(MemoryStorage::new());
        let hits = counter(&state);
        state.navigate(SectionId::About);
        state.preferences.toggle_dark_mode();
        state.preferences.toggle_language();
        assert_eq!(hits.get(), 3);
    }

    #[test]
    fn navigate_closes_the_menu() {
        let state = state_with(MemoryStorage::new());
        state.router.toggle_menu();
        state.navigate(SectionId::Timeline);
        assert!(!state.router.is_menu_open());
        assert_eq!(state.router.current_section(), SectionId::Timeline);
    }

    #[test]
    fn leaving_contact_resets_its_status() {
        let state = state_with(
            MemoryStorage::new().with_item(LAST_EMAIL_TIME_KEY, "1700000000000"),
        );
        state.navigate(SectionId::Contact);
        let result = futures::executor::block_on(
            state.contact.submit(ContactMessage::new("Ada", "a@b.c", "Hi"), state.preferences.language()),
        );
        assert!(result.is_err());
        assert_ne!(state.contact.status(), SubmissionStatus::Idle);
        state.navigate(SectionId::Main);
        assert_eq!(state.contact.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn leaving_contact_cancels_the_countdown() {
        let scheduler = ManualScheduler::new();
        let state = state_on(
            MemoryStorage::new().with_item(LAST_EMAIL_TIME_KEY, "1700000000000"),
            scheduler.clone(),
        );
        state.navigate(SectionId::Contact);
        state.contact.start_countdown(|| {});
        assert!(state.contact.is_counting_down());

        state.navigate(SectionId::Main);
        assert!(!state.contact.is_counting_down());
        assert_eq!(scheduler.live_count(), 0);
    }

    #[test]
    fn leaving_projects_closes_the_detail() {
        let state = state_with(MemoryStorage::new());
        state.navigate(SectionId::Projects);
        state.projects.borrow_mut().select(1);
        assert!(state.projects.borrow().selected_project().is_some());
        state.navigate(SectionId::Main);
        assert!(state.projects.borrow().selected_project().is_none());
    }

    #[test]
    fn loading_tick_reports_completion_once() {
        let state = state_with(MemoryStorage::new());
        assert!(!state.on_loading_tick(60.0));
        assert!(state.on_loading_tick(60.0));
        assert!(!state.on_loading_tick(60.0));
        assert_eq!(state.loading.borrow().rounded(), 100);
    }

    #[test]
    fn finish_loading_hides_the_screen_and_notifies_once() {
        let state = state_with(MemoryStorage::new());
        let hits = counter(&state);
        state.finish_loading();
        state.finish_loading();
        assert!(!state.is_loading());
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn persisted_preferences_are_loaded() {
        let state = state_with(MemoryStorage::new().with_item("isFrench", "true"));
        assert!(state.preferences.is_french());
        assert!(!state.preferences.is_dark_mode());
    }
}
