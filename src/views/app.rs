// ============================================================================
// APP VIEW - Layout principal y despacho de secciones
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::ElementBuilder;
use crate::models::SectionId;
use crate::state::app_state::AppState;
use crate::views::{
    render_about, render_contact, render_header, render_loading_screen, render_main_section,
    render_menu, render_projects, render_resume, render_timeline,
};

/// Renderizar aplicación completa
pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    if state.is_loading() {
        return render_loading_screen(state);
    }

    let route = state.router.route();
    let container = ElementBuilder::new("div")?
        .class("app-container")
        .attr("data-section", route.section.slug())?
        .child(render_header(state)?)?
        .build();

    if route.menu_open {
        let menu = render_menu(state)?;
        container.append_child(&menu)?;
    }

    let main = ElementBuilder::new("main")?
        .class("section-container")
        .child(render_section(state, route.section)?)?
        .build();
    container.append_child(&main)?;

    Ok(container)
}

/// Vista de cada sección
pub fn render_section(state: &AppState, section: SectionId) -> Result<Element, JsValue> {
    match section {
        SectionId::Main => render_main_section(state),
        SectionId::About => render_about(state),
        SectionId::Projects => render_projects(state),
        SectionId::Resume => render_resume(state),
        SectionId::Contact => render_contact(state),
        SectionId::Timeline => render_timeline(state),
    }
}
