pub mod schools;
pub mod uploads;

use crate::error::json_error_handler;
use actix_web::web;

/// JSON extractor settings for all API routes.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(64 * 1024)
        .error_handler(json_error_handler)
}
