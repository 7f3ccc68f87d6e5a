//! Listing page: root module wiring the Yew `Component` implementation with
//! submodules for state, update logic, and view rendering.
//!
//! All records are fetched once when the page is created; search and state
//! filtering then happen in memory, recomputed whenever the search term, the
//! selected state, or the fetched list changes.

use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::HomePage;

impl Component for HomePage {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Fetch);
        HomePage::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
