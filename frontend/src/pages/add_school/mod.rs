//! Add-school page: a registration form validated in the browser, an image
//! upload straight to the image host, and a POST to `/api/schools/add`.
//!
//! Flow
//! - On creation, fetch the image-host parameters from `/api/uploads/settings`.
//! - Every input re-runs the form schema (`common::validation`); a field's error
//!   is shown once that field was edited or a submit was attempted.
//! - Submit stays disabled until an image has been uploaded; an invalid form is
//!   stopped before any request is made.
//! - On success the form resets and the page returns to the listing after two
//!   seconds.

use yew::prelude::*;

mod messages;
mod state;
mod update;
mod upload;
mod view;

pub use messages::Msg;
pub use state::AddSchoolPage;

impl Component for AddSchoolPage {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::LoadUploadSettings);
        AddSchoolPage::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
