//! File-input helpers for the upload panels.
//!
//! Browser-only: reading a `File` needs the JS `arrayBuffer()` promise.

use finansrisk::Upload;

use crate::state::upload::UploadKind;

/// Read the first chosen file into an upload of `kind`.
///
/// # Errors
///
/// Returns a displayable message when no file is chosen or the browser
/// fails to read it.
pub async fn read_selected(input: &web_sys::HtmlInputElement, kind: UploadKind) -> Result<Upload, String> {
    let file = first_file(input).ok_or_else(|| "No file selected.".to_owned())?;
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("could not read {}: {e:?}", file.name()))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(kind.build(file.name(), bytes))
}

/// Clear the input so the same file can be chosen again.
pub fn reset(input: &web_sys::HtmlInputElement) {
    input.set_value("");
}

fn first_file(input: &web_sys::HtmlInputElement) -> Option<web_sys::File> {
    input.files().and_then(|files| files.get(0))
}
