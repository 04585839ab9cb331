//! Image Upload Encoding
//!
//! Reads the file chosen in the add form into a data URI for the create call.

use base64::Engine;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::models::ImageUpload;

const FALLBACK_MIME: &str = "application/octet-stream";

/// `data:<mime>;base64,<payload>`
pub fn encode_data_uri(mime: &str, bytes: &[u8]) -> String {
    let mime = if mime.is_empty() { FALLBACK_MIME } else { mime };
    format!(
        "data:{};base64,{}",
        mime,
        base64::engine::general_purpose::STANDARD.encode(bytes)
    )
}

/// Read a selected file into an upload payload.
pub async fn read_image(file: &web_sys::File) -> Result<ImageUpload, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("Failed to read {}: {:?}", file.name(), e))?;
    let buffer = buffer
        .dyn_into::<js_sys::ArrayBuffer>()
        .map_err(|_| format!("Failed to read {}: not an ArrayBuffer", file.name()))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();

    Ok(ImageUpload {
        filename: file.name(),
        data_uri: encode_data_uri(&file.type_(), &bytes),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_data_uri() {
        assert_eq!(encode_data_uri("image/png", b"hello"), "data:image/png;base64,aGVsbG8=");
        assert_eq!(encode_data_uri("", &[]), "data:application/octet-stream;base64,");
    }
}
