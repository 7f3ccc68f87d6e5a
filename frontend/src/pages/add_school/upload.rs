//! Requests to the backend's upload settings and to the image host.

use common::model::upload::{UploadSettings, UploadedImage};
use common::upload::check_image_file;
use gloo_net::http::Request;
use web_sys::FormData;

pub async fn load_settings() -> Result<UploadSettings, String> {
    let response = Request::get("/api/uploads/settings")
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(format!("Upload settings unavailable ({})", response.status()));
    }
    response
        .json::<UploadSettings>()
        .await
        .map_err(|e| e.to_string())
}

/// Checks a picked file against the host limits before anything is sent.
pub fn check_file(file: &web_sys::File) -> Result<(), String> {
    check_image_file(&file.name(), file.size() as u64)
}

/// Unsigned multipart upload; resolves to the hosted `secure_url`.
pub async fn upload_image(settings: UploadSettings, file: web_sys::File) -> Result<String, String> {
    let url = settings
        .upload_url()
        .ok_or_else(|| "Image uploads are not configured".to_string())?;
    let preset = settings.upload_preset.unwrap_or_default();

    let form = FormData::new().map_err(|e| format!("{:?}", e))?;
    form.append_with_blob("file", &file)
        .map_err(|e| format!("{:?}", e))?;
    form.append_with_str("upload_preset", &preset)
        .map_err(|e| format!("{:?}", e))?;
    form.append_with_str("folder", &settings.folder)
        .map_err(|e| format!("{:?}", e))?;

    let response = Request::post(&url)
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.ok() {
        let detail = response.text().await.unwrap_or_default();
        return Err(format!("Upload rejected ({}): {}", response.status(), detail));
    }

    response
        .json::<UploadedImage>()
        .await
        .map(|uploaded| uploaded.secure_url)
        .map_err(|e| e.to_string())
}
