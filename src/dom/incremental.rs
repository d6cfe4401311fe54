// ============================================================================
// INCREMENTAL DOM UPDATES - Actualización incremental del DOM
// ============================================================================
// Solo actualiza los contenedores que cambiaron, sin re-renderizar #app.
// Si el contenedor no está montado (otra sección visible) no hay nada que hacer.
// ============================================================================

use wasm_bindgen::prelude::*;
use crate::dom::{get_element_by_id, replace_children, set_attribute, set_flag_attribute, set_text_content};
use crate::state::app_state::AppState;
use crate::views::{
    loading_width, render_carousel, render_contact_form, render_project_detail, render_project_grid,
};

/// Re-renderizar solo la rejilla de proyectos (el input conserva el foco)
pub fn update_project_grid(state: &AppState) -> Result<(), JsValue> {
    if let Some(container) = get_element_by_id("project-grid") {
        replace_children(&container, &render_project_grid(state)?)?;
    }
    Ok(())
}

/// Mostrar/ocultar el modal de detalle
pub fn update_project_detail(state: &AppState) -> Result<(), JsValue> {
    if let Some(container) = get_element_by_id("project-detail") {
        replace_children(&container, &render_project_detail(state)?)?;
    }
    Ok(())
}

/// Formulario de contacto completo (cambio de estado del envío)
pub fn update_contact_form(state: &AppState) -> Result<(), JsValue> {
    if let Some(container) = get_element_by_id("contact-form-container") {
        replace_children(&container, &render_contact_form(state)?)?;
    }
    Ok(())
}

/// Texto de la cuenta atrás y botón de envío
pub fn update_countdown(state: &AppState) -> Result<(), JsValue> {
    let lang = state.preferences.language();
    let message = state.contact.cooldown_message(lang);

    if let Some(notice) = get_element_by_id("contact-countdown") {
        set_text_content(&notice, message.as_deref().unwrap_or_default());
        set_flag_attribute(&notice, "hidden", message.is_none())?;
    }
    if let Some(submit) = get_element_by_id("contact-submit") {
        let disabled = message.is_some() || state.contact.status().is_sending();
        set_flag_attribute(&submit, "disabled", disabled)?;
    }
    Ok(())
}

/// Barra y porcentaje de la pantalla de carga
pub fn update_loading_bar(state: &AppState) -> Result<(), JsValue> {
    let percent = state.loading.borrow().rounded();
    if let Some(bar) = get_element_by_id("loading-bar") {
        set_attribute(&bar, "style", &loading_width(percent))?;
        if let Some(track) = bar.parent_element() {
            set_attribute(&track, "aria-valuenow", &percent.to_string())?;
        }
    }
    if let Some(label) = get_element_by_id("loading-percent") {
        set_text_content(&label, &format!("{}%", percent));
    }
    Ok(())
}

/// Imagen actual del carrusel
pub fn update_carousel(state: &AppState) -> Result<(), JsValue> {
    if let Some(container) = get_element_by_id("about-carousel") {
        replace_children(&container, &render_carousel(state)?)?;
    }
    Ok(())
}
