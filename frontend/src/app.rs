use crate::components::header::Header;
use crate::helpers::current_path;
use crate::pages::add_school::AddSchoolPage;
use crate::pages::home::HomePage;
use yew::{html, Component, Context, Html};

/// Client-side routes. Unknown paths show the listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    AddSchool,
}

impl Route {
    pub const ADD_SCHOOL_PATH: &'static str = "/schools/add";

    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            Self::ADD_SCHOOL_PATH => Route::AddSchool,
            _ => Route::Home,
        }
    }
}

pub struct App {
    route: Route,
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            route: Route::from_path(&current_path()),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="app">
                <Header show_add_button={self.route != Route::AddSchool} />
                {
                    match self.route {
                        Route::Home => html! { <HomePage /> },
                        Route::AddSchool => html! { <AddSchoolPage /> },
                    }
                }
            </div>
        }
    }
}
