// ============================================================================
// LINKS - Botones de navegación entre secciones
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{on_click, ElementBuilder};
use crate::models::SectionId;
use crate::state::app_state::AppState;

/// Botón que navega a `target` con el texto ya traducido
pub fn render_nav_link(
    state: &AppState,
    target: SectionId,
    label: &str,
    class: &str,
) -> Result<Element, JsValue> {
    let button = ElementBuilder::new("button")?
        .class(class)
        .attr("type", "button")?
        .attr("data-target", target.slug())?
        .text(label)
        .build();

    let state = state.clone();
    on_click(&button, move |_e| {
        state.navigate(target);
    })?;

    Ok(button)
}
