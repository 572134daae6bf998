//! Theme switching via the `dark` class on the document root.

const DARK_CLASS: &str = "dark";

pub fn apply_theme(dark: bool) {
    let Some(root) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.document_element())
    else {
        return;
    };

    if let Err(e) = root.class_list().toggle_with_force(DARK_CLASS, dark) {
        log::warn!("[THEME] Failed to toggle {}: {:?}", DARK_CLASS, e);
    }
}
