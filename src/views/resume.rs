// ============================================================================
// RESUME VIEW - CV en imagen + descarga
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::content::{RESUME_IMAGE, RESUME_PDF};
use crate::dom::ElementBuilder;
use crate::models::SectionId;
use crate::state::app_state::AppState;
use crate::utils::i18n::t;
use crate::views::render_nav_link;

pub fn render_resume(state: &AppState) -> Result<Element, JsValue> {
    let lang = state.preferences.language();

    let image = ElementBuilder::new("img")?
        .class("resume-image")
        .attr("src", RESUME_IMAGE)?
        .attr("alt", &t("resumeTitle", lang))?
        .build();

    let download = ElementBuilder::new("a")?
        .class("btn-download")
        .attr("href", RESUME_PDF)?
        .attr("download", "")?
        .text(&t("downloadButton", lang))
        .build();

    Ok(ElementBuilder::new("section")?
        .id("resume")?
        .class("section resume-section")
        .child(render_nav_link(state, SectionId::About, &t("backToAbout", lang), "btn-back")?)?
        .child(ElementBuilder::new("h2")?.text(&t("resumeTitle", lang)).build())?
        .child(ElementBuilder::new("p")?.class("section-description").text(&t("resumeDescription", lang)).build())?
        .child(image)?
        .child(download)?
        .build())
}
