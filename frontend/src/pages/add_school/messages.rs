use common::model::upload::UploadSettings;
use common::validation::FormField;

pub enum Msg {
    LoadUploadSettings,
    UploadSettingsLoaded(Result<UploadSettings, String>),
    Input(FormField, String),
    OpenFilePicker,
    FileSelected(web_sys::File),
    ImageUploaded(Result<String, String>),
    Submit,
    Submitted(Result<(), String>),
    /// Fired by the post-success timer.
    ReturnToListing,
}
