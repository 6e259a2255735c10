use web_sys::{HtmlDocument, Storage, Window};

#[cfg(target_arch = "wasm32")]
pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "No window object".to_string())
}

// Host builds (SSR rendering and unit tests) have no browser globals.
#[cfg(not(target_arch = "wasm32"))]
pub fn window() -> Result<Window, String> {
    Err("No window object".to_string())
}

pub fn session_storage() -> Result<Storage, String> {
    window()?
        .session_storage()
        .map_err(|_| "No sessionStorage".to_string())?
        .ok_or_else(|| "No sessionStorage".to_string())
}

pub fn html_document() -> Result<HtmlDocument, String> {
    use wasm_bindgen::JsCast;

    window()?
        .document()
        .ok_or_else(|| "No document".to_string())?
        .dyn_into::<HtmlDocument>()
        .map_err(|_| "Document is not an HTML document".to_string())
}

pub fn redirect(path: &str) {
    if let Ok(win) = window() {
        let _ = win.location().set_href(path);
    }
}

pub fn current_path() -> Option<String> {
    window().ok()?.location().pathname().ok()
}
