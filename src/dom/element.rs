// ============================================================================
// ELEMENT HELPERS - Funciones básicas para manipular DOM
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, Window};

/// Obtener window global
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Obtener document
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Elemento raíz `<html>` (tema y atributo `lang`)
pub fn document_element() -> Option<Element> {
    document()?.document_element()
}

pub fn body() -> Option<HtmlElement> {
    document()?.body()
}

/// Obtener elemento por ID
pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Crear elemento
pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))
        .and_then(|doc| doc.create_element(tag))
}

/// Agregar o quitar una clase según `enabled`
pub fn toggle_class(element: &Element, class: &str, enabled: bool) -> Result<(), JsValue> {
    element.class_list().toggle_with_force(class, enabled).map(|_| ())
}

/// Establecer text content
pub fn set_text_content(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

/// Establecer inner HTML
pub fn set_inner_html(element: &Element, html: &str) {
    element.set_inner_html(html);
}

/// Agregar hijo
pub fn append_child(parent: &Element, child: &Element) -> Result<(), JsValue> {
    parent.append_child(child).map(|_| ())
}

/// Vaciar `parent` y dejar solo `child`
pub fn replace_children(parent: &Element, child: &Element) -> Result<(), JsValue> {
    set_inner_html(parent, "");
    append_child(parent, child)
}

/// Establecer atributo
pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<(), JsValue> {
    element.set_attribute(name, value)
}

/// Atributo booleano (`disabled`, `hidden`...)
pub fn set_flag_attribute(element: &Element, name: &str, enabled: bool) -> Result<(), JsValue> {
    if enabled {
        element.set_attribute(name, "")
    } else {
        element.remove_attribute(name)
    }
}

/// Valor actual de un <input>, <textarea> o <select>
pub fn input_value(element: &Element) -> String {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(textarea) = element.dyn_ref::<HtmlTextAreaElement>() {
        textarea.value()
    } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}

/// Valor del control que disparó el evento
pub fn event_target_value(event: &web_sys::Event) -> String {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .map(|element| input_value(&element))
        .unwrap_or_default()
}

/// Query selector (buscar elemento por selector CSS)
pub fn query_selector(selector: &str) -> Result<Option<Element>, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))?
        .query_selector(selector)
}
