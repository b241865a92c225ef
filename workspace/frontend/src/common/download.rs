use dashboard::export::CsvExport;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Offers `export` to the user as a `text/csv` file download.
pub fn download_csv(export: &CsvExport) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document is not available"))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(&export.content));
    let options = BlobPropertyBag::new();
    options.set_type("text/csv");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;

    let url = Url::create_object_url_with_blob(&blob)?;
    let anchor = document
        .create_element("a")?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(JsValue::from)?;
    anchor.set_href(&url);
    anchor.set_download(&export.file_name);
    anchor.click();
    Url::revoke_object_url(&url)?;

    log::info!("Downloaded {} ({} bytes)", export.file_name, export.content.len());
    Ok(())
}
