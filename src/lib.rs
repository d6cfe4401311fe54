// ============================================================================
// EOWIN PORTFOLIO - FRONTEND MVVM (RUST PURO + WASM)
// ============================================================================
// Arquitectura MVVM:
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Estado + Lógica UI (proyectos, contacto, música, carrusel...)
// - Services: SOLO cooldown y comunicación con el relay de correo
// - State: Router, preferencias y timers con Rc<RefCell>
// - Models / Content: Datos estáticos del portfolio
// ============================================================================

pub mod config;
pub mod content;
pub mod models;
pub mod services;
pub mod viewmodels;
pub mod state;
pub mod dom;
pub mod views;
pub mod utils;
mod app;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use crate::app::App;
use crate::config::AppConfig;
use crate::dom::on_keydown;
use crate::state::app_state::UpdateType;

// Variable estática global para mantener la instancia de App
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    let config = AppConfig::from_env();

    // Inicializar logging
    wasm_logger::init(wasm_logger::Config::new(config.log_level()));
    log::info!("🚀 [MAIN] Eowin portfolio - Rust + WASM");

    // Crear y renderizar app
    let mut app = App::new(config)?;
    app.render()?;

    // Guardar app en variable global
    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    // Escape cierra el detalle de proyecto o el menú.
    // Listener global: se registra UNA sola vez aquí.
    if let Some(win) = web_sys::window() {
        on_keydown(&win, |e| {
            if e.key() == "Escape" {
                close_overlays();
            }
        })?;
    }

    Ok(())
}

fn close_overlays() {
    let state = APP.with(|app_cell| app_cell.borrow().as_ref().map(|app| app.state().clone()));
    let Some(state) = state else {
        return;
    };
    let detail_open = state.projects.borrow().selected_project().is_some();
    if detail_open {
        views::close_project_detail(&state.projects);
    } else {
        state.router.close_menu();
    }
}

/// Función pública para re-renderizar la app (re-render completo)
pub fn rerender_app() {
    rerender_app_with_type(UpdateType::FullRender);
}

/// Función pública para actualizar la app con tipo específico
pub fn rerender_app_with_type(update_type: UpdateType) {
    APP.with(|app_cell| match update_type {
        UpdateType::Incremental(inc_type) => {
            log::debug!("🔄 [UPDATE] Actualización incremental: {:?}", inc_type);
            let result = match app_cell.try_borrow() {
                Ok(app) => match app.as_ref() {
                    Some(app) => app.update_incremental(inc_type),
                    None => {
                        log::warn!("⚠️ [UPDATE] App no está inicializada");
                        Ok(())
                    }
                },
                Err(_) => {
                    log::warn!("⚠️ [UPDATE] App ocupada, se omite {:?}", inc_type);
                    Ok(())
                }
            };
            if let Err(e) = result {
                log::error!("❌ [UPDATE] Error en actualización incremental: {:?}", e);
            }
        }
        UpdateType::FullRender => {
            log::debug!("🔄 [RERENDER] Re-render completo");
            match app_cell.try_borrow_mut() {
                Ok(mut app) => match app.as_mut() {
                    Some(app) => {
                        if let Err(e) = app.render() {
                            log::error!("❌ [RERENDER] Error re-renderizando: {:?}", e);
                        }
                    }
                    None => log::warn!("⚠️ [RERENDER] App no está inicializada"),
                },
                Err(_) => log::warn!("⚠️ [RERENDER] App ocupada, re-render omitido"),
            }
        }
    });
}
