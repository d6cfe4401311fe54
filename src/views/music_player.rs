// ============================================================================
// MUSIC PLAYER VIEW - Reproductor flotante (montado fuera de #app)
// ============================================================================
// Se monta una sola vez para que el <audio> sobreviva a los re-renders de
// las secciones; después solo se actualiza el botón.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Element, Event, HtmlAudioElement};
use crate::dom::{get_element_by_id, on_click, on_event, set_attribute, set_flag_attribute, set_text_content, ElementBuilder};
use crate::state::app_state::{AppState, IncrementalUpdate, UpdateType};
use crate::utils::i18n::t;
use crate::viewmodels::PlayerAction;

pub const AUDIO_ID: &str = "music-audio";
pub const TOGGLE_ID: &str = "music-toggle";

pub fn render_music_player(state: &AppState) -> Result<Element, JsValue> {
    let src = state.music.borrow().current().map(|track| track.src).unwrap_or_default();

    let audio = ElementBuilder::new("audio")?
        .id(AUDIO_ID)?
        .attr("src", src)?
        .attr("preload", "auto")?
        .build();

    let toggle = ElementBuilder::new("button")?
        .id(TOGGLE_ID)?
        .class("music-toggle")
        .attr("type", "button")?
        .build();

    {
        let music = state.music.clone();
        on_event(&audio, "canplaythrough", move |_e: Event| {
            music.borrow_mut().on_can_play();
            crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::MusicPlayer));
        })?;
    }
    {
        let state = state.clone();
        on_event(&audio, "ended", move |_e: Event| {
            let action = state.music.borrow_mut().on_ended();
            apply_action(&state, action);
        })?;
    }
    {
        let state = state.clone();
        on_click(&toggle, move |_e| {
            let action = state.music.borrow_mut().toggle();
            apply_action(&state, action);
        })?;
    }

    let player = ElementBuilder::new("div")?
        .class("music-player")
        .child(audio)?
        .child(toggle)?
        .build();
    Ok(player)
}

/// Sincronizar el botón con el estado (texto, etiqueta, disabled)
pub fn update_music_toggle(state: &AppState) -> Result<(), JsValue> {
    let Some(toggle) = get_element_by_id(TOGGLE_ID) else {
        return Ok(());
    };
    let lang = state.preferences.language();
    let player = state.music.borrow();
    let label = if player.is_playing() { t("pauseMusic", lang) } else { t("playMusic", lang) };
    let title = player.current().map(|track| track.title).unwrap_or_default();

    set_text_content(&toggle, if player.is_playing() { "⏸" } else { "♪" });
    set_attribute(&toggle, "aria-label", &label)?;
    set_attribute(&toggle, "title", &format!("{} · {}", label, title))?;
    set_flag_attribute(&toggle, "disabled", !player.is_ready())?;
    Ok(())
}

fn audio_element() -> Option<HtmlAudioElement> {
    get_element_by_id(AUDIO_ID)?.dyn_into::<HtmlAudioElement>().ok()
}

fn apply_action(state: &AppState, action: PlayerAction) {
    let Some(audio) = audio_element() else {
        log::warn!("⚠️ [MUSIC] Elemento <audio> no encontrado");
        return;
    };

    match action {
        PlayerAction::Play(track) => {
            if !audio.src().ends_with(track.src) {
                audio.set_src(track.src);
            }
            match audio.play() {
                Ok(promise) => {
                    let state = state.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        if let Err(e) = JsFuture::from(promise).await {
                            log::warn!("⚠️ [MUSIC] play() rechazado: {:?}", e);
                            state.music.borrow_mut().on_play_rejected();
                            crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::MusicPlayer));
                        }
                    });
                }
                Err(e) => {
                    log::warn!("⚠️ [MUSIC] play() falló: {:?}", e);
                    state.music.borrow_mut().on_play_rejected();
                }
            }
        }
        PlayerAction::PauseAndLoad(track) => {
            if let Err(e) = audio.pause() {
                log::warn!("⚠️ [MUSIC] pause() falló: {:?}", e);
            }
            audio.set_src(track.src);
        }
        PlayerAction::Nothing => {}
    }

    crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::MusicPlayer));
}
