//! Image-host parameters for the browser.
//!
//! Images never pass through this server: the add page uploads them straight to
//! Cloudinary with an unsigned preset. This scope only tells the page where to
//! send them and what the page should accept.

mod settings;

use actix_web::web;

const API_PATH: &str = "/api/uploads";

/// Configures and returns the Actix `Scope` for upload-related routes.
pub fn configure_routes() -> actix_web::Scope {
    web::scope(API_PATH).route("/settings", web::get().to(settings::process))
}
