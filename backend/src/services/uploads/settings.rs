use crate::config::CloudinarySettings;
use actix_web::{web, HttpResponse, Responder};
use common::model::upload::UploadSettings;
use common::upload::{ALLOWED_FORMATS, MAX_FILE_SIZE, UPLOAD_FOLDER};

pub async fn process(cloudinary: web::Data<CloudinarySettings>) -> impl Responder {
    HttpResponse::Ok().json(upload_settings(&cloudinary))
}

fn upload_settings(cloudinary: &CloudinarySettings) -> UploadSettings {
    UploadSettings {
        cloud_name: cloudinary.cloud_name.clone(),
        upload_preset: cloudinary.upload_preset.clone(),
        folder: UPLOAD_FOLDER.to_string(),
        max_file_size: MAX_FILE_SIZE,
        allowed_formats: ALLOWED_FORMATS.iter().map(|f| f.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn reports_configured_preset_and_fixed_limits() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(CloudinarySettings {
                    cloud_name: Some("demo".into()),
                    upload_preset: Some("schools_unsigned".into()),
                }))
                .service(super::super::configure_routes()),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/uploads/settings")
            .to_request();
        let settings: UploadSettings = test::call_and_read_body_json(&app, req).await;
        assert_eq!(settings.folder, "schools");
        assert_eq!(settings.max_file_size, 5_000_000);
        assert_eq!(settings.allowed_formats.len(), 5);
        assert_eq!(
            settings.upload_url().as_deref(),
            Some("https://api.cloudinary.com/v1_1/demo/image/upload")
        );
    }

    #[actix_web::test]
    async fn unconfigured_host_has_no_upload_url() {
        let settings = upload_settings(&CloudinarySettings::default());
        assert_eq!(settings.upload_url(), None);
    }
}
