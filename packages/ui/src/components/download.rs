//! Hands exported CSV bytes to the user.

use api::CsvFile;

/// Triggers a browser download. Native builds write to the download dir.
pub fn save_csv(file: &CsvFile) -> Result<(), String> {
    tracing::info!("saving {} ({} bytes)", file.filename, file.content.len());
    save_impl(file)
}

#[cfg(target_arch = "wasm32")]
fn save_impl(file: &CsvFile) -> Result<(), String> {
    use wasm_bindgen::JsCast;

    let js_err = |e: wasm_bindgen::JsValue| format!("{e:?}");

    let bytes = js_sys::Uint8Array::from(file.content.as_slice());
    let parts = js_sys::Array::of1(&bytes);
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/csv;charset=utf-8");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(js_err)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_err)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "no document".to_string())?;
    let anchor = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "not an anchor".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(&file.filename);
    anchor.click();
    web_sys::Url::revoke_object_url(&url).map_err(js_err)?;
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn save_impl(file: &CsvFile) -> Result<(), String> {
    let dir = dirs::download_dir().unwrap_or_else(std::env::temp_dir);
    let path = dir.join(&file.filename);
    std::fs::write(&path, &file.content).map_err(|e| e.to_string())?;
    tracing::info!("wrote {}", path.display());
    Ok(())
}
