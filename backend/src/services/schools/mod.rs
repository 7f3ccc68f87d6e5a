//! # School Service Module
//!
//! Routes under `/api/schools`. Both handlers are thin: they check the input,
//! hand the single-table work to `crate::db::Database` on the blocking pool,
//! and shape the JSON response.
//!
//! ## Sub-modules:
//! - `add`: registers a new school.
//! - `get`: lists schools with optional search and state filters.

/// Builds a test service with the school routes over the given `Database`.
#[cfg(test)]
macro_rules! school_test_app {
    ($db:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(crate::services::json_config())
                .app_data(actix_web::web::Data::new($db))
                .service(crate::services::schools::configure_routes()),
        )
        .await
    };
}

mod add;
mod get;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

/// The base path for all school-related API endpoints.
const API_PATH: &str = "/api/schools";

/// Configures and returns the Actix `Scope` for the school routes.
///
/// # Registered Routes:
///
/// *   **`POST /add`**:
///     - **Handler**: `add::process`
///     - **Description**: Expects a JSON `NewSchool` with `name`, `address`, `city`,
///       `state`, `contact`, `email_id` and `image` (an already hosted URL). Responds
///       `201 {message, school}`, `400 {message}` when a field is missing, or
///       `500 {message}` when the insert fails.
///
/// *   **`GET /get`**:
///     - **Handler**: `get::process`
///     - **Description**: Optional `search` (case-insensitive, over name, city and
///       address) and `state` (exact, `All` means any) query parameters. Responds
///       `200` with the matching `SchoolSummary` list sorted by name.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/add", post().to(add::process))
        .route("/get", get().to(get::process))
}
