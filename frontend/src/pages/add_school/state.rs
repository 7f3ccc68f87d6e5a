use std::collections::BTreeSet;

use common::model::upload::UploadSettings;
use common::validation::{can_submit, FormErrors, FormField, SchoolForm};
use yew::NodeRef;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

/// Banner shown above the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Status {
    pub kind: StatusKind,
    pub message: String,
}

impl Status {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            message: message.into(),
        }
    }
}

pub struct AddSchoolPage {
    pub form: SchoolForm,
    /// Result of the last validation pass over `form`.
    pub errors: FormErrors,
    /// Fields the user has edited since the last reset.
    pub touched: BTreeSet<FormField>,
    /// Set by the first submit attempt; reveals every error.
    pub submit_attempted: bool,

    /// Hosted URL of the uploaded picture, empty until an upload succeeds.
    pub image_url: String,
    pub uploading: bool,
    /// `None` until the settings request finishes.
    pub upload_settings: Option<Result<UploadSettings, String>>,
    pub file_input_ref: NodeRef,

    /// A create request is in flight.
    pub is_loading: bool,
    pub status: Option<Status>,
}

impl Default for AddSchoolPage {
    fn default() -> Self {
        Self::new()
    }
}

impl AddSchoolPage {
    pub fn new() -> Self {
        let form = SchoolForm::default();
        Self {
            errors: form.validate(),
            form,
            touched: BTreeSet::new(),
            submit_attempted: false,
            image_url: String::new(),
            uploading: false,
            upload_settings: None,
            file_input_ref: NodeRef::default(),
            is_loading: false,
            status: None,
        }
    }

    /// Error to display for `field`, if it should be visible yet.
    pub fn visible_error(&self, field: FormField) -> Option<&str> {
        if self.submit_attempted || self.touched.contains(&field) {
            self.errors.get(&field).map(String::as_str)
        } else {
            None
        }
    }

    /// Settings to upload a picked file with, or the message to show instead.
    pub fn upload_target(&self) -> Result<UploadSettings, &'static str> {
        match &self.upload_settings {
            None => Err("Upload settings are still loading. Please try again."),
            Some(Err(_)) => Err("Could not load upload settings. Please reload the page."),
            Some(Ok(settings)) if settings.upload_url().is_none() => {
                Err("Image uploads are not configured.")
            }
            Some(Ok(settings)) => Ok(settings.clone()),
        }
    }

    pub fn submit_enabled(&self) -> bool {
        can_submit(self.is_loading, &self.image_url)
    }

    /// Clears the form after a successful registration.
    pub fn reset(&mut self) {
        self.form = SchoolForm::default();
        self.errors = self.form.validate();
        self.touched.clear();
        self.submit_attempted = false;
        self.image_url.clear();
    }
}
