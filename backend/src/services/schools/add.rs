//! # School Registration Service
//!
//! Backend logic for `POST /api/schools/add`.
//!
//! The body is a `NewSchool`. All seven fields must be present and non-empty;
//! the image is expected to be a URL the browser already obtained from the
//! image host, and is stored as given. Field formats (contact digits, email
//! shape) are checked by the add form only.

use crate::db::Database;
use crate::error::{Operation, ServiceError};
use actix_web::{web, HttpResponse};
use common::model::school::{CreateSchoolResponse, NewSchool};
use log::info;

const SUCCESS_MESSAGE: &str = "School registered successfully!";

/// Actix web handler for `POST /api/schools/add`.
///
/// # Returns
/// - `201 Created` with `{message, school}` on success.
/// - `400 Bad Request` with `{message}` if any field is missing.
/// - `500 Internal Server Error` with `{message}` if the insert fails.
pub async fn process(
    payload: web::Json<NewSchool>,
    db: web::Data<Database>,
) -> Result<HttpResponse, ServiceError> {
    let draft = payload
        .into_inner()
        .into_draft()
        .map_err(ServiceError::MissingFields)?;

    let db = db.get_ref().clone();
    let school = web::block(move || db.insert_school(draft))
        .await
        .map_err(ServiceError::blocking(Operation::Register))?
        .map_err(ServiceError::storage(Operation::Register))?;

    info!("Registered school {} ({})", school.id, school.name);

    Ok(HttpResponse::Created().json(CreateSchoolResponse {
        message: SUCCESS_MESSAGE.to_string(),
        school,
    }))
}

#[cfg(test)]
mod tests {
    use crate::db::temp_database;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use common::model::school::{CreateSchoolResponse, ErrorMessage};
    use serde_json::{json, Value};

    fn valid_body() -> Value {
        json!({
            "name": "Springfield Elementary",
            "address": "19 Plympton Street",
            "city": "Springfield",
            "state": "Oregon",
            "contact": "5551234567",
            "email_id": "office@springfield.edu",
            "image": "https://res.cloudinary.com/demo/image/upload/schools/springfield.jpg"
        })
    }

    #[actix_web::test]
    async fn creates_school_and_echoes_fields() {
        let (_dir, db) = temp_database();
        let app = school_test_app!(db.clone());

        let req = test::TestRequest::post()
            .uri("/api/schools/add")
            .set_json(valid_body())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: CreateSchoolResponse = test::read_body_json(resp).await;
        assert_eq!(body.message, "School registered successfully!");
        assert!(body.school.id > 0);
        assert_eq!(body.school.name, "Springfield Elementary");
        assert_eq!(body.school.address, "19 Plympton Street");
        assert_eq!(body.school.city, "Springfield");
        assert_eq!(body.school.state, "Oregon");
        assert_eq!(body.school.contact, "5551234567");
        assert_eq!(body.school.email_id, "office@springfield.edu");
        assert_eq!(
            body.school.image,
            "https://res.cloudinary.com/demo/image/upload/schools/springfield.jpg"
        );
        assert_eq!(db.count_schools().unwrap(), 1);
    }

    #[actix_web::test]
    async fn response_uses_created_at_key() {
        let (_dir, db) = temp_database();
        let app = school_test_app!(db);

        let req = test::TestRequest::post()
            .uri("/api/schools/add")
            .set_json(valid_body())
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert!(body["school"]["createdAt"].is_string());
        assert!(body["school"]["id"].is_i64());
    }

    #[actix_web::test]
    async fn each_missing_field_is_rejected_without_insert() {
        let (_dir, db) = temp_database();
        let app = school_test_app!(db.clone());

        for field in ["name", "address", "city", "state", "contact", "email_id", "image"] {
            let mut body = valid_body();
            body.as_object_mut().unwrap().remove(field);

            let req = test::TestRequest::post()
                .uri("/api/schools/add")
                .set_json(&body)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "missing {field}");

            let message: ErrorMessage = test::read_body_json(resp).await;
            assert_eq!(message.message, "All fields are required");
        }
        assert_eq!(db.count_schools().unwrap(), 0);
    }

    #[actix_web::test]
    async fn empty_string_counts_as_missing() {
        let (_dir, db) = temp_database();
        let app = school_test_app!(db.clone());

        let mut body = valid_body();
        body["email_id"] = json!("");
        let req = test::TestRequest::post()
            .uri("/api/schools/add")
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(db.count_schools().unwrap(), 0);
    }

    #[actix_web::test]
    async fn malformed_json_is_a_client_error() {
        let (_dir, db) = temp_database();
        let app = school_test_app!(db);

        let req = test::TestRequest::post()
            .uri("/api/schools/add")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"name\": ")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let message: ErrorMessage = test::read_body_json(resp).await;
        assert!(message.message.starts_with("Invalid request body"));
    }

    #[actix_web::test]
    async fn format_rules_are_not_enforced_server_side() {
        let (_dir, db) = temp_database();
        let app = school_test_app!(db);

        let mut body = valid_body();
        body["contact"] = json!("123");
        let req = test::TestRequest::post()
            .uri("/api/schools/add")
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    #[actix_web::test]
    async fn storage_failure_is_a_generic_server_error() {
        let dir = tempfile::tempdir().unwrap();
        // Schema never created, so the insert fails.
        let db = crate::db::Database::new(dir.path().join("empty.sqlite"));
        let app = school_test_app!(db);

        let req = test::TestRequest::post()
            .uri("/api/schools/add")
            .set_json(valid_body())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let message: ErrorMessage = test::read_body_json(resp).await;
        assert_eq!(message.message, "Failed to register school");
    }
}
