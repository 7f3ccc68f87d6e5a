use crate::app::Route;
use yew::{html, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    /// Hidden on the add page itself.
    #[prop_or(true)]
    pub show_add_button: bool,
}

pub struct Header;

impl Component for Header {
    type Message = ();
    type Properties = HeaderProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Header
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <header class="site-header">
                <div class="site-header__inner">
                    <a class="site-header__brand" href="/">
                        <div class="site-header__logo">{"🏫"}</div>
                        <div>
                            <h1>{"Educational Schools Directory"}</h1>
                            <p>{"Discover and connect with quality educational institutions"}</p>
                        </div>
                    </a>
                    {
                        if ctx.props().show_add_button {
                            html! {
                                <a class="btn btn--green" href={Route::ADD_SCHOOL_PATH}>
                                    {"+ Add School"}
                                </a>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </header>
        }
    }
}
