//! View rendering for the submission form component.
//!
//! The surface is a heading, the two status banners, the form itself (name,
//! phone, file input with preview, submit control), and the listing of
//! previously submitted records. Styling hooks are plain class names; layout
//! is left to an external stylesheet.

use web_sys::{Event, HtmlInputElement, InputEvent, SubmitEvent};
use yew::html::Scope;
use yew::prelude::*;

use common::model::record::UploadedRecord;

use super::messages::Msg;
use super::state::UploadForm;

/// Main view function: banners, form, and listing.
pub fn view(component: &UploadForm, ctx: &Context<UploadForm>) -> Html {
    let link = ctx.link();
    html! {
        <div class="upload-form-root">
            <h2>{"User Information Form"}</h2>
            { build_banners(component) }
            { build_form(component, link) }
            { build_listing(&component.records) }
        </div>
    }
}

/// Global banners: one for a successful submission, one for a failed
/// persistence call.
fn build_banners(component: &UploadForm) -> Html {
    html! {
        <>
            {
                if component.submit_success {
                    html! { <div class="banner success">{"Form submitted successfully!"}</div> }
                } else {
                    html! {}
                }
            }
            {
                match &component.errors.submit {
                    Some(message) => html! { <div class="banner error">{message.clone()}</div> },
                    None => html! {},
                }
            }
        </>
    }
}

fn build_form(component: &UploadForm, link: &Scope<UploadForm>) -> Html {
    html! {
        <form onsubmit={link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        })}>
            <div class="form-group">
                <label for="name">{"Name:"}</label>
                <input
                    type="text"
                    id="name"
                    name="name"
                    value={component.name.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::EditName(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                />
                { field_error(&component.errors.name) }
            </div>

            <div class="form-group">
                <label for="phone">{"Phone Number:"}</label>
                <input
                    type="tel"
                    id="phone"
                    name="phone"
                    value={component.phone.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::EditPhone(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                />
                { field_error(&component.errors.phone) }
            </div>

            <div class="form-group">
                <label for="image">{"Upload Image (Max 2MB):"}</label>
                <input
                    type="file"
                    id="image"
                    name="image"
                    accept="image/*"
                    ref={component.file_input_ref.clone()}
                    onchange={link.callback(|e: Event| {
                        let input = e.target_unchecked_into::<HtmlInputElement>();
                        Msg::FileSelected(input.files().and_then(|files| files.get(0)))
                    })}
                />
                { field_error(&component.errors.image) }
                { build_preview(component) }
            </div>

            <button type="submit" disabled={component.is_submitting}>
                { if component.is_submitting { "Submitting..." } else { "Submit" } }
            </button>
        </form>
    }
}

/// Inline error text for one field slot.
fn field_error(slot: &Option<String>) -> Html {
    match slot {
        Some(message) => html! { <span class="error-text">{message.clone()}</span> },
        None => html! {},
    }
}

/// Thumbnail of the current pick, backed by a revocable object URL.
fn build_preview(component: &UploadForm) -> Html {
    match &component.preview_url {
        Some(url) => html! {
            <div class="image-preview">
                <img src={url.clone()} alt="Preview" />
            </div>
        },
        None => html! {},
    }
}

/// The listing of persisted records: name, phone, and a link to the image by
/// its original filename when a URL is present.
fn build_listing(records: &[UploadedRecord]) -> Html {
    html! {
        <div class="uploaded-list">
            <h2>{"Uploaded Information"}</h2>
            {
                records.iter().map(|record| html! {
                    <div class="uploaded-item" key={record.id.clone()}>
                        <h3>{ record.fields.name.clone() }</h3>
                        <p>{ format!("Phone: {}", record.fields.phone) }</p>
                        {
                            if record.fields.image_url.is_empty() {
                                html! {}
                            } else {
                                html! {
                                    <a
                                        href={record.fields.image_url.clone()}
                                        target="_blank"
                                        rel="noopener noreferrer"
                                    >
                                        { record.fields.image_name.clone() }
                                    </a>
                                }
                            }
                        }
                    </div>
                }).collect::<Html>()
            }
        </div>
    }
}
