use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::school::SchoolSummary;

use super::messages::Msg;
use super::state::HomePage;

const LOAD_ERROR: &str = "Failed to load schools. Please try again.";

pub fn update(page: &mut HomePage, ctx: &Context<HomePage>, msg: Msg) -> bool {
    match msg {
        Msg::Fetch => {
            page.loading = true;
            page.error = None;
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::Fetched(fetch_schools().await));
            });
            true
        }
        Msg::Fetched(Ok(schools)) => {
            page.loading = false;
            page.schools = schools;
            page.refresh();
            true
        }
        Msg::Fetched(Err(err)) => {
            gloo_console::error!("Error fetching schools:", err);
            page.loading = false;
            page.error = Some(LOAD_ERROR.to_string());
            true
        }
        Msg::SetSearch(term) => {
            if page.search_term == term {
                return false;
            }
            page.search_term = term;
            page.refresh();
            true
        }
        Msg::ClearSearch => {
            page.search_term.clear();
            page.refresh();
            true
        }
        Msg::SelectState(state) => {
            page.selected_state = state;
            page.refresh();
            true
        }
    }
}

async fn fetch_schools() -> Result<Vec<SchoolSummary>, String> {
    let response = Request::get("/api/schools/get")
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.ok() {
        return Err(format!("Failed to fetch schools ({})", response.status()));
    }

    response
        .json::<Vec<SchoolSummary>>()
        .await
        .map_err(|e| e.to_string())
}
