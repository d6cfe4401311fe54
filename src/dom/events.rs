// ============================================================================
// EVENT HANDLING - Sistema de eventos
// ============================================================================
// GESTIÓN DE MEMORY LEAKS:
// - Listeners en elementos del DOM: al destruir el elemento (set_inner_html("")) el
//   navegador limpia sus listeners, así que closure.forget() es seguro.
// - Listeners globales (window/document): registrar UNA sola vez al arrancar.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, InputEvent, KeyboardEvent, MouseEvent};

/// Listener genérico sobre cualquier EventTarget
pub fn on_event<E, F>(target: &EventTarget, event_type: &str, handler: F) -> Result<(), JsValue>
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let mut handler = handler;
    let closure = Closure::wrap(Box::new(move |event: Event| {
        if let Ok(event) = event.dyn_into::<E>() {
            handler(event);
        }
    }) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    // Nota: closure.forget() es necesario para mantener el closure vivo en Rust WASM
    closure.forget();
    Ok(())
}

/// Helper para crear click handler simple
pub fn on_click<F>(element: &EventTarget, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    on_event(element, "click", handler)
}

/// Helper para crear input handler simple
pub fn on_input<F>(element: &EventTarget, handler: F) -> Result<(), JsValue>
where
    F: FnMut(InputEvent) + 'static,
{
    on_event(element, "input", handler)
}

/// Cambio de valor en <select>
pub fn on_change<F>(element: &EventTarget, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    on_event(element, "change", handler)
}

/// Submit de formulario; el envío nativo se cancela siempre
pub fn on_submit<F>(form: &EventTarget, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let mut handler = handler;
    on_event(form, "submit", move |event: Event| {
        event.prevent_default();
        handler(event);
    })
}

/// Tecla pulsada (Escape cierra modales y menú)
pub fn on_keydown<F>(target: &EventTarget, handler: F) -> Result<(), JsValue>
where
    F: FnMut(KeyboardEvent) + 'static,
{
    on_event(target, "keydown", handler)
}
