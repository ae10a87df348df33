use percent_encoding::utf8_percent_encode;
use reqwest::multipart::{Form, Part};

use super::{
    client::ApiClient,
    types::{ApiError, UploadResponse},
};
use crate::utils::navigation::PATH_SEGMENT;

pub const PLACEHOLDER_IMAGE: &str = "/images/placeholder.svg";
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

fn is_absolute(name: &str) -> bool {
    name.starts_with("http://")
        || name.starts_with("https://")
        || name.starts_with("//")
        || name.starts_with("data:")
}

pub fn image_url(files_base: &str, name: &str) -> String {
    let name = name.trim();
    if name.is_empty() {
        return PLACEHOLDER_IMAGE.to_string();
    }
    if is_absolute(name) {
        return name.to_string();
    }
    let name = name.trim_start_matches('/');
    let name = name.strip_prefix("Files/").unwrap_or(name);
    format!(
        "{}/Files/{}",
        files_base.trim_end_matches('/'),
        utf8_percent_encode(name, PATH_SEGMENT)
    )
}

/// `image_url` against the configured files host.
pub fn image_src(name: Option<&str>) -> String {
    image_url(&crate::config::current().files_base_url, name.unwrap_or_default())
}

pub fn is_supported_image(mime: &str) -> bool {
    matches!(
        mime,
        "image/jpeg" | "image/png" | "image/webp" | "image/gif" | "image/svg+xml"
    )
}

impl ApiClient {
    pub async fn upload_image(
        &self,
        file_name: &str,
        mime: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadResponse, ApiError> {
        if bytes.is_empty() {
            return Err(ApiError::validation("The selected file is empty."));
        }
        if bytes.len() > MAX_UPLOAD_BYTES {
            return Err(ApiError::validation("Images must be 5 MB or smaller."));
        }
        if !is_supported_image(mime) {
            return Err(ApiError::validation("Only JPEG, PNG, WebP, GIF or SVG images can be uploaded."));
        }
        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime)
            .map_err(|e| ApiError::validation(format!("Invalid file type: {}", e)))?;
        let form = Form::new().part("file", part);

        let url = self.url("/Files/upload").await;
        let response = self.send(self.http_client().post(url).multipart(form)).await?;
        self.map_json_response(response).await
    }
}

#[cfg(target_arch = "wasm32")]
pub async fn read_file_bytes(file: &web_sys::File) -> Result<Vec<u8>, ApiError> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| ApiError::validation("Could not read the selected file."))?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}
