//! Helpers for displaying hosted school images.
//!
//! Gallery cards show a 400x250 filled crop. Images stored in the `schools`
//! folder on Cloudinary are re-addressed by public id with the crop as the
//! delivery transformation; any other URL is shown as stored.

use regex::Regex;
use std::sync::LazyLock;

/// Transformation applied to card thumbnails.
pub const CARD_TRANSFORMATION: &str = "c_fill,w_400,h_250";

const UPLOAD_SEGMENT: &str = "/image/upload/";

static PUBLIC_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/schools/(.+)$").expect("valid public id pattern"));

fn folder_public_id(url: &str) -> Option<String> {
    let rest = PUBLIC_ID_RE.captures(url)?.get(1)?.as_str();
    let stem = rest.split('.').next().unwrap_or_default();
    Some(format!("schools/{stem}"))
}

/// Cloudinary public id (`schools/<name>`) of an uploaded image, or the URL
/// itself when it does not point into the `schools` folder.
pub fn public_id(url: &str) -> String {
    folder_public_id(url).unwrap_or_else(|| url.to_string())
}

/// URL to use for a gallery card image.
pub fn card_image_url(url: &str) -> String {
    if !url.contains("res.cloudinary.com") {
        return url.to_string();
    }
    match (url.split_once(UPLOAD_SEGMENT), folder_public_id(url)) {
        (Some((head, _)), Some(id)) => {
            format!("{head}{UPLOAD_SEGMENT}{CARD_TRANSFORMATION}/{id}")
        }
        _ => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOSTED: &str =
        "https://res.cloudinary.com/demo/image/upload/v1712345678/schools/westview_front.jpg";

    #[test]
    fn public_id_strips_extension() {
        assert_eq!(public_id(HOSTED), "schools/westview_front");
    }

    #[test]
    fn public_id_falls_back_to_url() {
        let url = "https://images.example.com/a.png";
        assert_eq!(public_id(url), url);
    }

    #[test]
    fn card_url_addresses_public_id_with_crop() {
        let card = card_image_url(HOSTED);
        assert_eq!(
            card,
            "https://res.cloudinary.com/demo/image/upload/c_fill,w_400,h_250/schools/westview_front"
        );
        assert!(card.ends_with(&public_id(HOSTED)));
        assert_eq!(card_image_url(&card), card);
    }

    #[test]
    fn cloudinary_urls_outside_the_folder_pass_through() {
        let url = "https://res.cloudinary.com/demo/image/upload/v1/banners/top.jpg";
        assert_eq!(card_image_url(url), url);
    }

    #[test]
    fn non_cloudinary_urls_pass_through() {
        let url = "https://cdn.example.com/image/upload/a.png";
        assert_eq!(card_image_url(url), url);
    }
}
