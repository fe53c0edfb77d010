use wasm_bindgen_futures::JsFuture;
use web_sys::File;

/// Reads a user-selected file as UTF-8 text.
pub async fn read_file_to_string(file: &File) -> Result<String, String> {
    let text = JsFuture::from(file.text())
        .await
        .map_err(|e| format!("Error reading {}: {:?}", file.name(), e))?;
    text.as_string()
        .ok_or_else(|| format!("{} did not produce text content", file.name()))
}
