//! # School Listing Service
//!
//! Backend logic for `GET /api/schools/get`.
//!
//! ## Workflow
//!
//! 1.  **HTTP Request**: `process` receives the optional `search` and `state`
//!     query parameters as a `ListSchoolsQuery`.
//!
//! 2.  **Filter**: the query becomes a `common::filter::SchoolFilter`. An empty
//!     `search` is ignored; an empty `state` or the sentinel `All` means no state
//!     restriction.
//!
//! 3.  **Database Query**: `Database::list_schools` runs a single `SELECT` with
//!     the search applied to name, city and address (case-insensitively) and the
//!     state compared exactly, ordered by name.
//!
//! 4.  **HTTP Response**: the matching rows are returned as a JSON array of
//!     `SchoolSummary`. No match is an empty array, not an error.

use crate::db::Database;
use crate::error::{Operation, ServiceError};
use actix_web::{web, HttpResponse};
use common::filter::SchoolFilter;
use common::requests::ListSchoolsQuery;

/// Actix web handler for `GET /api/schools/get`.
///
/// # Returns
/// - `200 OK` with the matching schools sorted by name.
/// - `500 Internal Server Error` with `{message}` if the query fails.
pub async fn process(
    query: web::Query<ListSchoolsQuery>,
    db: web::Data<Database>,
) -> Result<HttpResponse, ServiceError> {
    let filter = SchoolFilter::from(query.into_inner());
    let db = db.get_ref().clone();

    let schools = web::block(move || db.list_schools(&filter))
        .await
        .map_err(ServiceError::blocking(Operation::Fetch))?
        .map_err(ServiceError::storage(Operation::Fetch))?;

    Ok(HttpResponse::Ok().json(schools))
}
