mod config;
mod db;
mod error;
mod services;

use crate::config::Settings;
use crate::db::Database;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use common::model::school::ErrorMessage;
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{info, warn};
use mime_guess::from_path;
use std::io;
use std::thread;
use std::time::Duration;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    if path.starts_with("api/") {
        return HttpResponse::NotFound().json(ErrorMessage::new("Not found"));
    }
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        // Client-side routes such as /schools/add resolve to the app shell.
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let settings =
        Settings::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let url = settings.url();

    let database = Database::new(settings.database_path.clone());
    database.init().map_err(io::Error::other)?;
    match database.count_schools() {
        Ok(count) => info!("Using database {} ({} schools)", database.path().display(), count),
        Err(e) => warn!("Could not count schools in {}: {}", database.path().display(), e),
    }

    if settings.cloudinary.upload_preset.is_none() || settings.cloudinary.cloud_name.is_none() {
        warn!("Cloudinary is not configured; image uploads from the add page are disabled");
    }

    if settings.open_browser {
        let url_clone = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            let _ = webbrowser::open(&url_clone);
        });
    }

    info!("Server running at {}", url);

    let cloudinary = web::Data::new(settings.cloudinary.clone());
    let database = web::Data::new(database);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(services::json_config())
            .app_data(database.clone())
            .app_data(cloudinary.clone())
            .service(services::schools::configure_routes())
            .service(services::uploads::configure_routes())
            .default_service(web::route().to(serve_embedded))
    })
        .bind((settings.host.as_str(), settings.port))?
        .run()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test;

    #[actix_web::test]
    async fn unknown_api_paths_are_json_not_found() {
        let app = test::init_service(App::new().default_service(web::route().to(serve_embedded))).await;

        let req = test::TestRequest::get().uri("/api/schools/remove").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let message: ErrorMessage = test::read_body_json(resp).await;
        assert_eq!(message.message, "Not found");
    }
}
