// ============================================================================
// HEADER VIEW - Logo, idioma, tema y botón de menú
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{on_click, ElementBuilder};
use crate::models::SectionId;
use crate::state::app_state::AppState;
use crate::utils::i18n::t;
use crate::views::render_nav_link;

pub fn render_header(state: &AppState) -> Result<Element, JsValue> {
    let lang = state.preferences.language();
    let dark_mode = state.preferences.is_dark_mode();
    let menu_open = state.router.is_menu_open();

    let logo = render_nav_link(state, SectionId::Main, "Eowin", "header-logo")?;

    let lang_btn = ElementBuilder::new("button")?
        .class("btn-toggle btn-language")
        .attr("type", "button")?
        .attr("aria-label", &t("toggleLanguage", lang))?
        .text(&t("language", lang))
        .build();
    {
        let preferences = state.preferences.clone();
        on_click(&lang_btn, move |_e| preferences.toggle_language())?;
    }

    let theme_btn = ElementBuilder::new("button")?
        .class("btn-toggle btn-theme")
        .attr("type", "button")?
        .attr("aria-label", &t("toggleDarkMode", lang))?
        .attr("aria-pressed", if dark_mode { "true" } else { "false" })?
        .text(if dark_mode { "☀️" } else { "🌙" })
        .build();
    {
        let preferences = state.preferences.clone();
        on_click(&theme_btn, move |_e| preferences.toggle_dark_mode())?;
    }

    let menu_btn = ElementBuilder::new("button")?
        .class(if menu_open { "btn-menu open" } else { "btn-menu" })
        .id("menu-toggle")?
        .attr("type", "button")?
        .attr("aria-label", &t("toggleMenu", lang))?
        .attr("aria-expanded", if menu_open { "true" } else { "false" })?
        .text(if menu_open { "✕" } else { "☰" })
        .build();
    {
        let router = state.router.clone();
        on_click(&menu_btn, move |_e| router.toggle_menu())?;
    }

    let actions = ElementBuilder::new("div")?
        .class("header-actions")
        .children([lang_btn, theme_btn, menu_btn])?
        .build();

    Ok(ElementBuilder::new("header")?
        .class("app-header")
        .child(logo)?
        .child(actions)?
        .build())
}
