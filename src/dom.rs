use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Typed element lookup; logs and fails when the id is missing or the
/// element has another type.
pub fn get<T: JsCast>(document: &web::Document, id: &str) -> Result<T, ()> {
    let el = match document.get_element_by_id(id) {
        Some(el) => el,
        None => {
            log::error!("missing #{id}");
            return Err(());
        }
    };
    el.dyn_into::<T>().map_err(|_| {
        log::error!("#{id} has an unexpected element type");
    })
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Wire an `input` handler to a slider or field; the handler receives the
/// control's current value.
pub fn add_input_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut(String) + 'static,
) {
    let Ok(input) = get::<web::HtmlInputElement>(document, element_id) else {
        return;
    };
    let source = input.clone();
    let closure = Closure::wrap(Box::new(move || handler(source.value())) as Box<dyn FnMut()>);
    _ = input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn set_text(document: &web::Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

/// Add or remove a class, for active-state highlighting.
pub fn set_class(document: &web::Document, id: &str, class: &str, on: bool) {
    if let Some(el) = document.get_element_by_id(id) {
        let cl = el.class_list();
        if on {
            _ = cl.add_1(class);
        } else {
            _ = cl.remove_1(class);
        }
    }
}

/// Push a value back into a range input, for preset resyncs.
pub fn set_slider_value(document: &web::Document, id: &str, value: u32) {
    if let Ok(input) = get::<web::HtmlInputElement>(document, id) {
        input.set_value(&value.to_string());
    }
}
