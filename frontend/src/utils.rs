use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, File, HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, Storage, Window};

fn get_window() -> Option<Window> {
    web_sys::window()
}

fn get_document() -> Option<Document> {
    get_window().and_then(|w| w.document())
}

pub fn get_storage() -> Option<Storage> {
    get_window().and_then(|w| w.local_storage().ok()).and_then(|s| s)
}

pub fn document_element() -> Option<HtmlElement> {
    get_document()
        .and_then(|d| d.document_element())
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

fn get_value_from_input(element: JsValue) -> String {
    if let Some(element) = element.dyn_ref::<HtmlInputElement>() {
        element.value()
    } else if let Some(element) = element.dyn_ref::<HtmlTextAreaElement>() {
        element.value()
    } else if let Some(element) = element.dyn_ref::<HtmlSelectElement>() {
        element.value()
    } else {
        "".to_string()
    }
}

fn set_value_to_input(element: JsValue, value: &str) {
    if let Some(element) = element.dyn_ref::<HtmlInputElement>() {
        element.set_value(value);
    } else if let Some(element) = element.dyn_ref::<HtmlTextAreaElement>() {
        element.set_value(value);
    } else if let Some(element) = element.dyn_ref::<HtmlSelectElement>() {
        element.set_value(value);
    }
}

pub fn set_title(text: &str) {
    if let Some(d) = get_document() {
        d.set_title(text);
    }
}

pub fn query_selector(selectors: &str) -> Option<Element> {
    get_document().and_then(|d| d.query_selector(selectors).ok()).and_then(|e| e)
}

pub fn get_input_value(name: &str) -> String {
    query_selector(&format!("[name={name}]"))
        .map(|element| get_value_from_input(JsValue::from(element)))
        .unwrap_or_default()
}

pub fn set_input_value(name: &str, value: &str) {
    if let Some(element) = query_selector(&format!("[name={name}]")) {
        set_value_to_input(JsValue::from(element), value);
    }
}

/// First file chosen in `<input type=file name=...>`.
pub fn get_input_file(name: &str) -> Option<File> {
    query_selector(&format!("[name={name}]"))
        .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
        .and_then(|input| input.files())
        .and_then(|files| files.get(0))
}

pub fn location_href() -> String {
    get_window().and_then(|w| w.location().href().ok()).unwrap_or_default()
}

pub fn location_pathname(url: &str) -> String {
    web_sys::Url::new(url).map(|url| url.pathname()).unwrap_or_else(|_| "/".to_string())
}

pub fn open_window(url: &str) {
    if let Some(w) = get_window() {
        if let Err(err) = w.open_with_url_and_target(url, "_blank") {
            log::error!("open_window: {:?}", err);
        }
    }
}

pub fn encode_component(text: &str) -> String {
    js_sys::encode_uri_component(text).into()
}
