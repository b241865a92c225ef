use wasm_bindgen::JsValue;

/// Switches the page between light and dark styling.
pub fn apply_theme(dark: bool) -> Result<(), JsValue> {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .ok_or_else(|| JsValue::from_str("document element is not available"))?;

    root.class_list().toggle_with_force("dark", dark)?;
    root.set_attribute("data-theme", if dark { "dark" } else { "light" })?;
    log::debug!("Dark mode: {}", dark);
    Ok(())
}
