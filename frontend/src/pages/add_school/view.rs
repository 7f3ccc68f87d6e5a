use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use common::validation::FormField;

use super::messages::Msg;
use super::state::{AddSchoolPage, StatusKind};

pub fn view(page: &AddSchoolPage, ctx: &Context<AddSchoolPage>) -> Html {
    let link = ctx.link();
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <main class="page page--form">
            { build_status(page) }
            <form class="card" {onsubmit} novalidate={true}>
                <div class="form-layout">
                    <div class="form-fields">
                        <div class="form-grid">
                            { text_field(page, link, FormField::Name, "School Name", "text", "Enter School name", "span-2") }
                            { text_field(page, link, FormField::City, "City", "text", "City", "") }
                            { text_field(page, link, FormField::State, "State", "text", "State", "") }
                            { text_field(page, link, FormField::Contact, "Contact", "tel", "10-digit number", "") }
                            { text_field(page, link, FormField::EmailId, "Email", "email", "email@School.edu", "") }
                        </div>
                        { address_field(page, link) }
                    </div>
                    { build_upload_panel(page, link) }
                </div>
                <div class="form-actions">
                    <button
                        type="submit"
                        class={classes!("btn", (!page.submit_enabled()).then_some("btn--disabled"))}
                        disabled={!page.submit_enabled()}
                    >
                        { if page.is_loading { "Registering..." } else { "Register School" } }
                    </button>
                </div>
            </form>
        </main>
    }
}

fn build_status(page: &AddSchoolPage) -> Html {
    match &page.status {
        Some(status) => {
            let (class, icon) = match status.kind {
                StatusKind::Success => ("status status--success", "✔"),
                StatusKind::Error => ("status status--error", "⚠"),
            };
            html! {
                <div class={class}>
                    <span class="status__icon">{ icon }</span>
                    <span>{ status.message.clone() }</span>
                </div>
            }
        }
        None => html! {},
    }
}

fn field_error(page: &AddSchoolPage, field: FormField) -> Html {
    match page.visible_error(field) {
        Some(message) => html! { <p class="field-error">{ message.to_string() }</p> },
        None => html! {},
    }
}

fn text_field(
    page: &AddSchoolPage,
    link: &Scope<AddSchoolPage>,
    field: FormField,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    extra_class: &'static str,
) -> Html {
    let oninput = link.callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::Input(field, input.value())
    });
    let invalid = page.visible_error(field).is_some();

    html! {
        <div class={classes!("field", extra_class)}>
            <label>{ label }</label>
            <input
                id={field.key()}
                name={field.key()}
                type={input_type}
                placeholder={placeholder}
                class={classes!("input", invalid.then_some("input--invalid"))}
                value={page.form.get(field).to_string()}
                {oninput}
            />
            { field_error(page, field) }
        </div>
    }
}

fn address_field(page: &AddSchoolPage, link: &Scope<AddSchoolPage>) -> Html {
    let field = FormField::Address;
    let oninput = link.callback(move |e: InputEvent| {
        let input: HtmlTextAreaElement = e.target_unchecked_into();
        Msg::Input(field, input.value())
    });
    let invalid = page.visible_error(field).is_some();

    html! {
        <div class="field">
            <label>{"Address"}</label>
            <textarea
                id={field.key()}
                name={field.key()}
                rows="3"
                placeholder="Complete address"
                class={classes!("input", "input--textarea", invalid.then_some("input--invalid"))}
                value={page.form.get(field).to_string()}
                {oninput}
            />
            { field_error(page, field) }
        </div>
    }
}

/// Picture picker with the preview of the uploaded image.
fn build_upload_panel(page: &AddSchoolPage, link: &Scope<AddSchoolPage>) -> Html {
    let onchange = link.batch_callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let file = input.files().and_then(|files| files.get(0));
        // Allow picking the same file again after a failure.
        input.set_value("");
        file.map(Msg::FileSelected)
    });

    html! {
        <div class="upload-panel">
            <h3>{"📷 School Photo"}</h3>
            <input
                ref={page.file_input_ref.clone()}
                type="file"
                accept=".jpg,.jpeg,.png,.gif,.webp"
                style="display: none;"
                {onchange}
            />
            <button
                type="button"
                class="upload-drop"
                disabled={page.uploading}
                onclick={link.callback(|_| Msg::OpenFilePicker)}
            >
                <span class="upload-drop__icon">{"☁"}</span>
                <p>{ if page.uploading { "Uploading..." } else { "Click to Upload" } }</p>
                <p class="muted small">{"JPG, PNG, WebP (max 5MB)"}</p>
            </button>
            {
                if page.image_url.is_empty() {
                    html! {}
                } else {
                    html! {
                        <div class="upload-preview">
                            <img src={page.image_url.clone()} alt="Uploaded" />
                            <span class="upload-preview__badge">{"✔ Uploaded"}</span>
                        </div>
                    }
                }
            }
        </div>
    }
}
