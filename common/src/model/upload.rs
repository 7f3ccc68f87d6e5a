use serde::{Deserialize, Serialize};

/// Public image-host parameters handed to the browser by
/// `GET /api/uploads/settings`.
///
/// `cloud_name` and `upload_preset` are `None` when the server was started
/// without Cloudinary configuration; the add page then refuses to upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadSettings {
    pub cloud_name: Option<String>,
    pub upload_preset: Option<String>,
    pub folder: String,
    pub max_file_size: u64,
    pub allowed_formats: Vec<String>,
}

impl UploadSettings {
    /// Unsigned upload endpoint, if the host is configured.
    pub fn upload_url(&self) -> Option<String> {
        match (&self.cloud_name, &self.upload_preset) {
            (Some(cloud), Some(_)) if !cloud.is_empty() => Some(format!(
                "https://api.cloudinary.com/v1_1/{}/image/upload",
                cloud
            )),
            _ => None,
        }
    }
}

/// The part of the image host's upload response the add page keeps.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UploadedImage {
    pub secure_url: String,
}
