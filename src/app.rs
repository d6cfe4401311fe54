// ============================================================================
// APP - Aplicación principal
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use gloo_timers::callback::Timeout;
use crate::config::AppConfig;
use crate::dom::{
    append_child, body, create_element, document_element, get_element_by_id, set_attribute,
    set_inner_html, toggle_class, update_carousel, update_contact_form, update_countdown,
    update_loading_bar, update_project_detail, update_project_grid,
};
use crate::services::{browser_clock, EmailJsRelay};
use crate::state::app_state::{AppState, IncrementalUpdate, UpdateType};
use crate::state::timers::BrowserScheduler;
use crate::utils::constants::{MUSIC_ROOT_ID, ROOT_ELEMENT_ID};
use crate::utils::storage::LocalStorage;
use crate::views::{render_app, render_music_player, update_music_toggle};

/// Aplicación principal
pub struct App {
    state: AppState,
    root: Element,
}

impl App {
    /// Crear nueva aplicación
    pub fn new(config: AppConfig) -> Result<Self, JsValue> {
        let root = get_element_by_id(ROOT_ELEMENT_ID)
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let relay = Rc::new(EmailJsRelay::new(config.mail.clone()));
        let state = AppState::new(
            config,
            Rc::new(LocalStorage),
            relay,
            browser_clock(),
            Rc::new(BrowserScheduler),
        );

        // Suscribirse a cambios de estado; varios cambios seguidos = un solo render
        let render_scheduled = Rc::new(Cell::new(false));
        state.subscribe_to_changes(move || {
            if render_scheduled.replace(true) {
                return;
            }
            let render_scheduled = render_scheduled.clone();
            Timeout::new(0, move || {
                render_scheduled.set(false);
                crate::rerender_app();
            })
            .forget();
        });

        // El estado del envío solo repinta el formulario
        state.contact.subscribe(|| {
            crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::ContactStatus));
        });

        mount_music_player(&state)?;
        state.start_loading();

        Ok(Self { state, root })
    }

    /// Renderizar aplicación
    pub fn render(&mut self) -> Result<(), JsValue> {
        log::debug!("🎬 [APP] render() - sección {}", self.state.router.current_section().slug());

        apply_preferences(&self.state)?;

        // Limpiar contenido anterior
        set_inner_html(&self.root, "");
        let app_view = render_app(&self.state)?;
        append_child(&self.root, &app_view)?;

        // Etiquetas del reproductor en el idioma actual
        update_music_toggle(&self.state)?;
        Ok(())
    }

    /// Obtener referencia al estado
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Actualización incremental del DOM (solo elementos específicos)
    pub fn update_incremental(&self, update_type: IncrementalUpdate) -> Result<(), JsValue> {
        match update_type {
            IncrementalUpdate::ProjectGrid => update_project_grid(&self.state),
            IncrementalUpdate::ProjectDetail => update_project_detail(&self.state),
            IncrementalUpdate::ContactStatus => update_contact_form(&self.state),
            IncrementalUpdate::Countdown => update_countdown(&self.state),
            IncrementalUpdate::LoadingBar => update_loading_bar(&self.state),
            IncrementalUpdate::MusicPlayer => update_music_toggle(&self.state),
            IncrementalUpdate::Carousel => update_carousel(&self.state),
        }
    }
}

/// Tema oscuro como clase `dark` en <html> y atributo `lang`
fn apply_preferences(state: &AppState) -> Result<(), JsValue> {
    if let Some(html) = document_element() {
        toggle_class(&html, "dark", state.preferences.is_dark_mode())?;
        set_attribute(&html, "lang", state.preferences.language().code())?;
    }
    Ok(())
}

/// El reproductor vive fuera de #app para no cortar la música al navegar
fn mount_music_player(state: &AppState) -> Result<(), JsValue> {
    let container = match get_element_by_id(MUSIC_ROOT_ID) {
        Some(container) => container,
        None => {
            let container = create_element("div")?;
            set_attribute(&container, "id", MUSIC_ROOT_ID)?;
            let body = body().ok_or_else(|| JsValue::from_str("No <body> element"))?;
            body.append_child(&container)?;
            container
        }
    };
    set_inner_html(&container, "");
    let player = render_music_player(state)?;
    append_child(&container, &player)?;
    update_music_toggle(state)
}
