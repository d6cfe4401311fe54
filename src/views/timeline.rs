// ============================================================================
// TIMELINE VIEW - Parcours (formación y trabajo)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::content;
use crate::dom::ElementBuilder;
use crate::models::{SectionId, TimelineEntry};
use crate::state::app_state::AppState;
use crate::utils::i18n::{t, Language};
use crate::viewmodels::timeline_viewmodel::{layout, Side};
use crate::views::render_nav_link;

pub fn render_timeline(state: &AppState) -> Result<Element, JsValue> {
    let lang = state.preferences.language();
    let entries = content::timeline(lang);

    let list = ElementBuilder::new("ol")?.class("timeline").build();
    for (side, entry) in layout(&entries) {
        let item = render_entry(side, entry, lang)?;
        list.append_child(&item)?;
    }

    Ok(ElementBuilder::new("section")?
        .id("timeline")?
        .class("section timeline-section")
        .child(render_nav_link(state, SectionId::Main, &t("homeLink", lang), "btn-back")?)?
        .child(ElementBuilder::new("h2")?.text(&t("timelineTitle", lang)).build())?
        .child(list)?
        .build())
}

fn render_entry(side: Side, entry: &TimelineEntry, lang: Language) -> Result<Element, JsValue> {
    let category = entry.category.map(|c| c.key()).unwrap_or_default();

    let card = ElementBuilder::new("div")?
        .class("timeline-card")
        .child(ElementBuilder::new("span")?.class("timeline-period").text(&entry.period).build())?
        .child(ElementBuilder::new("h3")?.text(&entry.title).build())?
        .child(ElementBuilder::new("p")?.class("timeline-place").text(&entry.place).build())?
        .child(ElementBuilder::new("p")?.class("timeline-description").text(&entry.description).build())?
        .child(
            ElementBuilder::new("span")?
                .class(&format!("timeline-badge {}", category))
                .text(&t(category, lang))
                .build(),
        )?
        .build();

    Ok(ElementBuilder::new("li")?
        .class(side.class())
        .attr("data-category", category)?
        .child(card)?
        .build())
}
