// ============================================================================
// LOADING SCREEN VIEW - Barra de progreso inicial
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::ElementBuilder;
use crate::state::app_state::AppState;

pub fn render_loading_screen(state: &AppState) -> Result<Element, JsValue> {
    let percent = state.loading.borrow().rounded();

    let bar = ElementBuilder::new("div")?
        .id("loading-bar")?
        .class("loading-bar")
        .attr("style", &loading_width(percent))?
        .build();

    let track = ElementBuilder::new("div")?
        .class("loading-track")
        .attr("role", "progressbar")?
        .attr("aria-valuemin", "0")?
        .attr("aria-valuemax", "100")?
        .attr("aria-valuenow", &percent.to_string())?
        .child(bar)?
        .build();

    Ok(ElementBuilder::new("div")?
        .id("loading-screen")?
        .class("loading-screen")
        .child(ElementBuilder::new("p")?.class("loading-logo").text("Eowin").build())?
        .child(track)?
        .child(
            ElementBuilder::new("span")?
                .id("loading-percent")?
                .class("loading-percent")
                .text(&format!("{}%", percent))
                .build(),
        )?
        .build())
}

pub fn loading_width(percent: u32) -> String {
    format!("width: {}%", percent)
}
