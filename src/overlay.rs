use wasm_bindgen::JsCast;
use web_sys as web;

// Page chrome: visibility of the static shell elements, addressed by id.

pub const START_BUTTON: &str = "start-button";
pub const STATUS_LINE: &str = "status-line";
pub const PANEL: &str = "control-panel";
pub const LOGO: &str = "logo-overlay";

#[inline]
pub fn show(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().remove_1("hidden");
    }
}

#[inline]
pub fn hide(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().add_1("hidden");
    }
}

#[inline]
pub fn is_hidden(document: &web::Document, id: &str) -> bool {
    document
        .get_element_by_id(id)
        .map(|el| el.class_list().contains("hidden"))
        .unwrap_or(false)
}

#[inline]
pub fn toggle(document: &web::Document, id: &str) {
    if is_hidden(document, id) {
        show(document, id);
    } else {
        hide(document, id);
    }
}

pub fn set_page_background(document: &web::Document, color: &str) {
    if let Some(body) = document.body() {
        _ = body.style().set_property("background-color", color);
    }
}

/// Size the logo overlay to track the orb.
pub fn resize_logo(document: &web::Document, px: f64) {
    if let Some(el) = document.get_element_by_id(LOGO) {
        if let Ok(el) = el.dyn_into::<web::HtmlElement>() {
            let style = el.style();
            _ = style.set_property("width", &format!("{px}px"));
            _ = style.set_property("height", &format!("{px}px"));
        }
    }
}
