//! Limits the add page enforces before sending a picture to the image host.

/// Folder the hosted images are stored under.
pub const UPLOAD_FOLDER: &str = "schools";

/// 5 MB.
pub const MAX_FILE_SIZE: u64 = 5_000_000;

pub const ALLOWED_FORMATS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "webp"];

/// Checks a picked file by name and size before it is uploaded.
pub fn check_image_file(file_name: &str, size: u64) -> Result<(), String> {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    if !ALLOWED_FORMATS.contains(&extension.as_str()) {
        return Err(format!(
            "Unsupported image format. Allowed: {}",
            ALLOWED_FORMATS.join(", ")
        ));
    }
    if size > MAX_FILE_SIZE {
        return Err("Image is larger than 5MB".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_known_formats_in_any_case() {
        assert!(check_image_file("front.JPG", 1024).is_ok());
        assert!(check_image_file("campus.webp", MAX_FILE_SIZE).is_ok());
    }

    #[test]
    fn rejects_other_formats_and_missing_extension() {
        assert!(check_image_file("brochure.pdf", 10).is_err());
        assert!(check_image_file("photo", 10).is_err());
    }

    #[test]
    fn rejects_files_over_the_limit() {
        let err = check_image_file("big.png", MAX_FILE_SIZE + 1).unwrap_err();
        assert!(err.contains("5MB"));
    }
}
