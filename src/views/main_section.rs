// ============================================================================
// MAIN SECTION VIEW - Presentación y accesos a las demás secciones
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::ElementBuilder;
use crate::models::SectionId;
use crate::state::app_state::AppState;
use crate::utils::i18n::t;
use crate::views::render_nav_link;

pub fn render_main_section(state: &AppState) -> Result<Element, JsValue> {
    let lang = state.preferences.language();

    let intro = ElementBuilder::new("div")?
        .class("main-intro")
        .child(ElementBuilder::new("p")?.class("greeting").text(&t("greeting", lang)).build())?
        .child(ElementBuilder::new("h1")?.class("name").text(&t("name", lang)).build())?
        .child(
            ElementBuilder::new("p")?
                .class("nickname")
                .text(&format!("{} {}", t("nickname", lang), t("nicknameValue", lang)))
                .build(),
        )?
        .child(ElementBuilder::new("p")?.class("description").text(&t("description", lang)).build())?
        .build();

    let links = ElementBuilder::new("div")?
        .class("main-links")
        .children([
            render_nav_link(state, SectionId::Projects, &t("projects", lang), "main-link")?,
            render_nav_link(state, SectionId::About, &t("about", lang), "main-link")?,
            render_nav_link(state, SectionId::Timeline, &t("timeline", lang), "main-link")?,
            render_nav_link(state, SectionId::Contact, &t("contact", lang), "main-link")?,
        ])?
        .build();

    Ok(ElementBuilder::new("section")?
        .id("main")?
        .class("section main-section")
        .child(intro)?
        .child(links)?
        .build())
}
