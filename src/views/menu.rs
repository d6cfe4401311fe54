// ============================================================================
// MENU VIEW - Overlay de navegación
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{on_click, ElementBuilder};
use crate::models::SectionId;
use crate::state::app_state::AppState;
use crate::utils::i18n::t;
use crate::views::render_nav_link;

pub fn render_menu(state: &AppState) -> Result<Element, JsValue> {
    let lang = state.preferences.language();
    let current = state.router.current_section();

    let list = ElementBuilder::new("ul")?.class("menu-links").build();
    for section in SectionId::ALL {
        let class = if section == current { "menu-link active" } else { "menu-link" };
        let link = render_nav_link(state, section, &t(section.link_key(), lang), class)?;
        let item = ElementBuilder::new("li")?.child(link)?.build();
        list.append_child(&item)?;
    }

    let nav = ElementBuilder::new("nav")?
        .class("menu-panel")
        .child(list)?
        .build();
    // Click dentro del panel no cierra el overlay
    on_click(&nav, |e| e.stop_propagation())?;

    let overlay = ElementBuilder::new("div")?
        .id("menu-overlay")?
        .class("menu-overlay active")
        .child(nav)?
        .build();
    {
        let router = state.router.clone();
        on_click(&overlay, move |_e| router.close_menu())?;
    }

    Ok(overlay)
}
