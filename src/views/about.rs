// ============================================================================
// ABOUT VIEW - Biografía + carrusel de fotos
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{on_click, ElementBuilder};
use crate::models::SectionId;
use crate::state::app_state::{AppState, IncrementalUpdate, UpdateType};
use crate::utils::i18n::t;
use crate::views::render_nav_link;

pub fn render_about(state: &AppState) -> Result<Element, JsValue> {
    let lang = state.preferences.language();

    let text = ElementBuilder::new("div")?
        .class("about-text")
        .child(ElementBuilder::new("h2")?.text(&t("aboutTitle", lang)).build())?
        .child(ElementBuilder::new("p")?.class("section-description").text(&t("aboutDescription", lang)).build())?
        .child(render_nav_link(state, SectionId::Resume, &t("resumeButton", lang), "btn-resume")?)?
        .build();

    let carousel = ElementBuilder::new("div")?
        .id("about-carousel")?
        .class("carousel")
        .child(render_carousel(state)?)?
        .build();

    Ok(ElementBuilder::new("section")?
        .id("about")?
        .class("section about-section")
        .child(render_nav_link(state, SectionId::Main, &t("homeLink", lang), "btn-back")?)?
        .child(text)?
        .child(carousel)?
        .build())
}

/// Contenido del carrusel (imagen actual + flechas + puntos)
pub fn render_carousel(state: &AppState) -> Result<Element, JsValue> {
    let lang = state.preferences.language();
    let carousel = state.carousel.borrow();

    let inner = ElementBuilder::new("div")?.class("carousel-inner").build();

    if let Some(src) = carousel.current() {
        let image = ElementBuilder::new("img")?
            .class("carousel-image")
            .attr("src", src)?
            .attr("alt", &t("aboutTitle", lang))?
            .build();
        inner.append_child(&image)?;
    }

    let prev_btn = carousel_button(state, "carousel-prev", "‹", &t("previousImage", lang), false)?;
    let next_btn = carousel_button(state, "carousel-next", "›", &t("nextImage", lang), true)?;

    let dots = ElementBuilder::new("div")?.class("carousel-dots").build();
    for i in 0..carousel.len() {
        let dot = ElementBuilder::new("span")?
            .class(if i == carousel.index() { "carousel-dot active" } else { "carousel-dot" })
            .build();
        dots.append_child(&dot)?;
    }

    inner.append_child(&prev_btn)?;
    inner.append_child(&next_btn)?;
    inner.append_child(&dots)?;
    Ok(inner)
}

fn carousel_button(
    state: &AppState,
    class: &str,
    symbol: &str,
    label: &str,
    forward: bool,
) -> Result<Element, JsValue> {
    let button = ElementBuilder::new("button")?
        .class(class)
        .attr("type", "button")?
        .attr("aria-label", label)?
        .text(symbol)
        .build();

    let carousel = state.carousel.clone();
    on_click(&button, move |_e| {
        {
            let mut carousel = carousel.borrow_mut();
            if forward {
                carousel.next();
            } else {
                carousel.previous();
            }
        }
        crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::Carousel));
    })?;

    Ok(button)
}
