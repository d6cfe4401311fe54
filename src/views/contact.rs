// ============================================================================
// CONTACT VIEW - Formulario de contacto con cooldown
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{event_target_value, on_input, on_submit, ElementBuilder};
use crate::models::{ContactMessage, SectionId, SubmissionStatus};
use crate::state::app_state::{AppState, IncrementalUpdate, UpdateType};
use crate::utils::i18n::{t, Language};
use crate::views::render_nav_link;

pub fn render_contact(state: &AppState) -> Result<Element, JsValue> {
    let lang = state.preferences.language();

    let form_container = ElementBuilder::new("div")?
        .id("contact-form-container")?
        .child(render_contact_form(state)?)?
        .build();

    Ok(ElementBuilder::new("section")?
        .id("contact")?
        .class("section contact-section")
        .child(render_nav_link(state, SectionId::Main, &t("homeLink", lang), "btn-back")?)?
        .child(ElementBuilder::new("h2")?.text(&t("contactTitle", lang)).build())?
        .child(ElementBuilder::new("p")?.class("section-description").text(&t("contactDescription", lang)).build())?
        .child(form_container)?
        .build())
}

/// Formulario + aviso de cooldown + estado del envío
pub fn render_contact_form(state: &AppState) -> Result<Element, JsValue> {
    let lang = state.preferences.language();
    let contact = &state.contact;
    let draft = contact.draft();
    let status = contact.status();
    let cooldown = contact.cooldown_message(lang);

    // La cuenta atrás vive mientras la sección está montada
    contact.start_countdown(|| {
        crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::Countdown));
    });

    let notice = ElementBuilder::new("p")?
        .id("contact-countdown")?
        .class("cooldown-notice")
        .flag("hidden", cooldown.is_none())?
        .text(cooldown.as_deref().unwrap_or_default())
        .build();

    let name = render_field(state, "contact-name", "input", &t("nameLabel", lang), &draft.name, |d, v| d.name = v)?;
    let email = render_field(state, "contact-email", "input", &t("emailLabel", lang), &draft.email, |d, v| d.email = v)?;
    let message = render_field(state, "contact-message", "textarea", &t("messageLabel", lang), &draft.message, |d, v| d.message = v)?;

    let sending = status.is_sending();
    let submit = ElementBuilder::new("button")?
        .id("contact-submit")?
        .class("btn-send")
        .attr("type", "submit")?
        .flag("disabled", sending || cooldown.is_some())?
        .text(&if sending { t("sending", lang) } else { t("sendButton", lang) })
        .build();

    let form = ElementBuilder::new("form")?
        .class("contact-form")
        .attr("novalidate", "")?
        .children([name, email, message, submit])?
        .build();
    {
        let contact = state.contact.clone();
        let preferences = state.preferences.clone();
        on_submit(&form, move |_e| {
            let contact = contact.clone();
            let lang = preferences.language();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = contact.submit(contact.draft(), lang).await {
                    log::warn!("⚠️ [CONTACT] Envío rechazado: {}", e);
                }
            });
        })?;
    }

    Ok(ElementBuilder::new("div")?
        .class("contact-form-wrapper")
        .child(notice)?
        .child(form)?
        .child(render_status(&status, lang)?)?
        .build())
}

fn render_field(
    state: &AppState,
    id: &str,
    tag: &str,
    label: &str,
    value: &str,
    apply: fn(&mut ContactMessage, String),
) -> Result<Element, JsValue> {
    let control = ElementBuilder::new(tag)?
        .id(id)?
        .attr("name", id)?
        .attr("required", "")?
        .build();
    if tag == "textarea" {
        control.set_text_content(Some(value));
        control.set_attribute("rows", "5")?;
    } else {
        control.set_attribute("type", if id == "contact-email" { "email" } else { "text" })?;
        control.set_attribute("value", value)?;
    }

    let contact = state.contact.clone();
    on_input(&control, move |e| {
        let value = event_target_value(&e);
        contact.update_draft(|draft| apply(draft, value));
    })?;

    Ok(ElementBuilder::new("label")?
        .class("form-field")
        .child(ElementBuilder::new("span")?.text(label).build())?
        .child(control)?
        .build())
}

fn render_status(status: &SubmissionStatus, lang: Language) -> Result<Element, JsValue> {
    let (class, text) = match status {
        SubmissionStatus::Idle => ("form-status", String::new()),
        SubmissionStatus::Sending => ("form-status sending", t("sending", lang)),
        SubmissionStatus::Sent => ("form-status success", t("messageSent", lang)),
        SubmissionStatus::Failed(message) => ("form-status error", message.clone()),
    };
    Ok(ElementBuilder::new("p")?
        .id("contact-status")?
        .class(class)
        .attr("role", "status")?
        .text(&text)
        .build())
}
