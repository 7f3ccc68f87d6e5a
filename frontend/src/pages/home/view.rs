use num_format::{Locale, ToFormattedString};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use common::filter::ALL_STATES;

use crate::app::Route;
use crate::components::school_card::SchoolCard;

use super::messages::Msg;
use super::state::HomePage;

pub fn view(page: &HomePage, ctx: &Context<HomePage>) -> Html {
    let link = ctx.link();

    if page.loading {
        return html! {
            <div class="page page--centered">
                <div class="spinner"></div>
                <p class="muted">{"Loading Schools..."}</p>
            </div>
        };
    }

    if let Some(error) = &page.error {
        return html! {
            <div class="page page--centered">
                <p class="error-text">{ error.clone() }</p>
                <button class="btn" onclick={link.callback(|_| Msg::Fetch)}>{"Retry"}</button>
            </div>
        };
    }

    html! {
        <main class="page">
            { build_toolbar(page, link) }
            <div class="school-grid">
                { for page.filtered.iter().map(|school| html! {
                    <SchoolCard key={school.id} school={school.clone()} />
                }) }
            </div>
            { build_empty_state(page) }
        </main>
    }
}

/// Search box, state dropdown and the results counter.
fn build_toolbar(page: &HomePage, link: &Scope<HomePage>) -> Html {
    let oninput = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::SetSearch(input.value())
    });
    let onchange = link.callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::SelectState(select.value())
    });

    html! {
        <section class="toolbar">
            <div class="toolbar__row">
                <div class="search">
                    <span class="search__icon">{"🔍"}</span>
                    <input
                        type="text"
                        placeholder="Search School..."
                        value={page.search_term.clone()}
                        {oninput}
                    />
                    {
                        if page.search_term.is_empty() {
                            html! {}
                        } else {
                            html! {
                                <button
                                    class="search__clear"
                                    title="Clear search"
                                    onclick={link.callback(|_| Msg::ClearSearch)}
                                >
                                    {"✕"}
                                </button>
                            }
                        }
                    }
                </div>
                <select class="state-select" {onchange}>
                    <option value={ALL_STATES} selected={page.selected_state == ALL_STATES}>
                        {"All States"}
                    </option>
                    { for page.states.iter().map(|state| html! {
                        <option
                            key={state.clone()}
                            value={state.clone()}
                            selected={&page.selected_state == state}
                        >
                            { state.clone() }
                        </option>
                    }) }
                </select>
            </div>
            <p class="toolbar__count">
                { format!("{} Schools found", page.filtered.len().to_formatted_string(&Locale::en)) }
            </p>
        </section>
    }
}

fn build_empty_state(page: &HomePage) -> Html {
    if !page.filtered.is_empty() {
        return html! {};
    }

    let nothing_registered = page.schools.is_empty();
    html! {
        <div class="empty-state">
            <div class="empty-state__icon">{"🏫"}</div>
            <h3>{"No Schools found"}</h3>
            <p class="muted">
                {
                    if nothing_registered {
                        "No Schools have been added yet."
                    } else {
                        "Try adjusting your search or filters."
                    }
                }
            </p>
            {
                if nothing_registered {
                    html! {
                        <a class="btn" href={Route::ADD_SCHOOL_PATH}>{"+ Add First School"}</a>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
