//! Update function for the add-school page.
//!
//! Receives the page state, the `Context`, and a `Msg`; mutates the state and
//! returns whether the view should re-render. Network work is spawned and its
//! outcome comes back as another message.

use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::school::{ErrorMessage, NewSchool};

use crate::helpers::navigate;

use super::messages::Msg;
use super::state::{AddSchoolPage, Status};
use super::upload::{check_file, load_settings, upload_image};

/// Delay between the success banner and the return to the listing.
const REDIRECT_DELAY_MS: u32 = 2_000;

pub fn update(page: &mut AddSchoolPage, ctx: &Context<AddSchoolPage>, msg: Msg) -> bool {
    match msg {
        Msg::LoadUploadSettings => {
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::UploadSettingsLoaded(load_settings().await));
            });
            false
        }
        Msg::UploadSettingsLoaded(result) => {
            if let Err(err) = &result {
                gloo_console::error!("Error loading upload settings:", err.clone());
            }
            page.upload_settings = Some(result);
            true
        }
        Msg::Input(field, value) => {
            page.form.set(field, value);
            page.touched.insert(field);
            page.errors = page.form.validate();
            true
        }
        Msg::OpenFilePicker => {
            if let Some(input) = page.file_input_ref.cast::<web_sys::HtmlInputElement>() {
                input.click();
            }
            false
        }
        Msg::FileSelected(file) => {
            let settings = match page.upload_target() {
                Ok(settings) => settings,
                Err(reason) => {
                    page.status = Some(Status::error(reason));
                    return true;
                }
            };
            if let Err(reason) = check_file(&file) {
                page.status = Some(Status::error(reason));
                return true;
            }

            page.uploading = true;
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::ImageUploaded(upload_image(settings, file).await));
            });
            true
        }
        Msg::ImageUploaded(Ok(url)) => {
            page.uploading = false;
            page.image_url = url;
            page.status = Some(Status::success("Image uploaded successfully!"));
            true
        }
        Msg::ImageUploaded(Err(err)) => {
            gloo_console::error!("Upload Error:", err);
            page.uploading = false;
            page.status = Some(Status::error("Failed to upload image. Please try again."));
            true
        }
        Msg::Submit => {
            page.submit_attempted = true;
            page.errors = page.form.validate();
            if !page.errors.is_empty() {
                return true;
            }
            if page.image_url.is_empty() {
                page.status = Some(Status::error("Please upload an image"));
                return true;
            }
            if page.is_loading {
                return false;
            }

            page.is_loading = true;
            page.status = None;
            let body = page.form.to_new_school(&page.image_url);
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::Submitted(create_school(&body).await));
            });
            true
        }
        Msg::Submitted(Ok(())) => {
            page.is_loading = false;
            page.status = Some(Status::success("School registered successfully!"));
            page.reset();
            let link = ctx.link().clone();
            spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                link.send_message(Msg::ReturnToListing);
            });
            true
        }
        Msg::Submitted(Err(message)) => {
            page.is_loading = false;
            page.status = Some(Status::error(message));
            true
        }
        Msg::ReturnToListing => {
            navigate("/");
            false
        }
    }
}

/// POSTs the registration; a non-success response yields the server's message.
async fn create_school(body: &NewSchool) -> Result<(), String> {
    let response = Request::post("/api/schools/add")
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if response.ok() {
        return Ok(());
    }
    match response.json::<ErrorMessage>().await {
        Ok(error) => Err(error.message),
        Err(_) => Err(format!("Failed to register school ({})", response.status())),
    }
}
