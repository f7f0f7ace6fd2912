//! Update function for the submission form component.
//!
//! This module contains a single `update` function following an Elm-style
//! architecture: it receives the current `UploadForm` state, the `Context`,
//! and a `Msg`, mutates the state accordingly, and returns a `bool`
//! indicating whether the view should re-render. The state transitions for
//! asynchronous results live in side-effect-free `apply_*` functions so the
//! discard/retention rules can be exercised without a browser; `update`
//! keeps the dispatching, logging, and task spawning.
//!
//! Key behaviors
//! - Optimistic clearing: editing a field hides its error until the next
//!   full validation.
//! - Image sub-flow: local size/type checks, object-URL preview, then an
//!   async upload whose response is applied only if its generation still
//!   matches the latest pick.
//! - Final submit: full validation, then a create call against the record
//!   store; on success the form resets and the listing is re-fetched.
//! - Listing: each fetch bumps a generation counter and replaces the whole
//!   list atomically; stale responses are dropped.
//! - Remote failures are surfaced as inline text or banners and logged to
//!   the console; every failure leaves the form editable and retryable.

use web_sys::{File, Url};
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::record::UploadedRecord;

use crate::api::{self, ApiError};

use super::messages::Msg;
use super::state::{ImageMeta, ImageState, UploadForm};
use super::validation;

/// How long the success banner stays up before dismissing itself.
const SUCCESS_BANNER_MS: u32 = 4000;

/// Central update function for the component.
///
/// Contract
/// - Mutates `component` based on `msg`.
/// - May dispatch further messages via `ctx.link()` (async callbacks).
/// - Returns `true` to re-render the view, `false` when nothing visible
///   changed (stale responses, console-only failures).
pub fn update(component: &mut UploadForm, ctx: &Context<UploadForm>, msg: Msg) -> bool {
    match msg {
        Msg::EditName(value) => apply_edit_name(component, value),
        Msg::EditPhone(value) => apply_edit_phone(component, value),
        Msg::FileSelected(file) => handle_file_selected(component, ctx, file),
        Msg::UploadFinished { generation, result } => {
            if let Err(err) = &result {
                gloo_console::error!(format!("image upload failed: {err}"));
            }
            apply_upload_result(component, generation, result)
        }
        Msg::Submit => handle_submit(component, ctx),
        Msg::PersistFinished(result) => {
            if let Err(err) = &result {
                gloo_console::error!(format!("record persistence failed: {err}"));
            }
            if apply_persist_result(component, result) {
                fetch_records(component, ctx);

                let link = ctx.link().clone();
                spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(SUCCESS_BANNER_MS).await;
                    link.send_message(Msg::ClearSuccessBanner);
                });
            }
            true
        }
        Msg::RecordsFetched { generation, result } => {
            if let Err(err) = &result {
                gloo_console::error!(format!("listing fetch failed: {err}"));
            }
            apply_records_result(component, generation, result)
        }
        Msg::ClearSuccessBanner => {
            component.submit_success = false;
            true
        }
    }
}

/// Image sub-flow entry point, triggered by the file input's change event.
/// Runs the local checks synchronously and, when they pass, spawns the
/// upload. The rest of the form stays editable while it is in flight.
fn handle_file_selected(
    component: &mut UploadForm,
    ctx: &Context<UploadForm>,
    file: Option<File>,
) -> bool {
    component.revoke_preview();
    // Every pick event supersedes whatever upload may still be in flight,
    // even when it carries no file or fails the local checks.
    component.upload_gen += 1;

    let Some(file) = file else {
        component.image = ImageState::NotSelected;
        component.errors.image = Some("Please upload an image".to_string());
        return true;
    };

    let meta = ImageMeta::from_file(&file);
    if let Some(message) = validation::check_file(&meta) {
        // Local checks failed: report, keep the slot empty, no network call.
        component.image = ImageState::NotSelected;
        component.errors.image = Some(message);
        return true;
    }

    component.errors.image = None;
    component.preview_url = Url::create_object_url_with_blob(&file).ok();
    component.image = ImageState::Uploading(meta);

    let generation = component.upload_gen;
    let config = ctx.props().config.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        let result = api::upload_image(&config, &file).await;
        link.send_message(Msg::UploadFinished { generation, result });
    });
    true
}

/// Final submit: validate everything, then persist the record.
fn handle_submit(component: &mut UploadForm, ctx: &Context<UploadForm>) -> bool {
    let errors = validation::validate(&component.name, &component.phone, &component.image);
    let clear = errors.is_clear();
    // Replacing the whole set also drops a stale submit error from a
    // previous attempt.
    component.errors = errors;
    if !clear {
        return true;
    }

    component.is_submitting = true;
    component.submit_success = false;

    let fields = component.record_fields(js_sys::Date::now() as u64);
    let config = ctx.props().config.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        let result = api::create_record(&config, &fields).await;
        link.send_message(Msg::PersistFinished(result));
    });
    true
}

/// Issues a listing fetch under a fresh generation. Used on first render and
/// after every successful submission.
pub(super) fn fetch_records(component: &mut UploadForm, ctx: &Context<UploadForm>) {
    component.list_gen += 1;
    let generation = component.list_gen;
    let config = ctx.props().config.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        let result = api::list_records(&config).await;
        link.send_message(Msg::RecordsFetched { generation, result });
    });
}

fn apply_edit_name(component: &mut UploadForm, value: String) -> bool {
    component.name = value;
    // Optimistic clearing: the error returns only via full validation.
    component.errors.name = None;
    true
}

fn apply_edit_phone(component: &mut UploadForm, value: String) -> bool {
    component.phone = value;
    component.errors.phone = None;
    true
}

/// Applies an upload outcome to the image slot. A response whose generation
/// no longer matches the latest pick is discarded without touching state.
fn apply_upload_result(
    component: &mut UploadForm,
    generation: u32,
    result: Result<String, ApiError>,
) -> bool {
    if generation != component.upload_gen {
        // A newer pick supersedes this response.
        return false;
    }
    match result {
        Ok(url) => {
            let meta = match &component.image {
                ImageState::Uploading(meta) => Some(meta.clone()),
                _ => return false,
            };
            component.image = ImageState::Uploaded { meta, url };
            component.errors.image = None;
        }
        Err(_) => {
            if let ImageState::Uploading(meta) = &component.image {
                // Keep the selection and preview so the user is not forced
                // to re-pick.
                component.image = ImageState::Failed(meta.clone());
            }
            component.errors.image =
                Some("Failed to upload image. Please try again.".to_string());
        }
    }
    true
}

/// Applies a persistence outcome. Returns `true` when the record was created
/// and the caller should refresh the listing; on failure every field stays
/// intact so the user can retry without redoing input.
fn apply_persist_result(component: &mut UploadForm, result: Result<String, ApiError>) -> bool {
    component.is_submitting = false;
    match result {
        Ok(_id) => {
            component.submit_success = true;
            component.reset();
            true
        }
        Err(_) => {
            component.errors.submit =
                Some("Failed to submit form. Please try again.".to_string());
            false
        }
    }
}

/// Applies a listing outcome: replaces the whole list atomically when the
/// response is current, keeps the previous listing otherwise or on error.
fn apply_records_result(
    component: &mut UploadForm,
    generation: u32,
    result: Result<Vec<UploadedRecord>, ApiError>,
) -> bool {
    if generation != component.list_gen {
        return false;
    }
    match result {
        Ok(records) => {
            component.records = records;
            true
        }
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::record::RecordFields;

    fn jpeg_meta() -> ImageMeta {
        ImageMeta {
            file_name: "photo.jpg".to_string(),
            byte_size: 1024 * 1024,
            media_type: "image/jpeg".to_string(),
        }
    }

    fn record(id: &str) -> UploadedRecord {
        UploadedRecord {
            id: id.to_string(),
            fields: RecordFields {
                name: "Alice".to_string(),
                phone: "1234567890".to_string(),
                image_url: "https://x/y.jpg".to_string(),
                image_name: "photo.jpg".to_string(),
                created_at: 1,
            },
        }
    }

    fn uploading_form(generation: u32) -> UploadForm {
        let mut form = UploadForm::new();
        form.image = ImageState::Uploading(jpeg_meta());
        form.upload_gen = generation;
        form
    }

    fn transport_error() -> ApiError {
        ApiError::Transport("connection reset".to_string())
    }

    #[test]
    fn editing_a_field_clears_only_its_own_error() {
        let mut form = UploadForm::new();
        form.errors.name = Some("Name is required".to_string());
        form.errors.phone = Some("Phone number is required".to_string());

        apply_edit_name(&mut form, "Alice".to_string());

        assert!(form.errors.name.is_none());
        assert_eq!(
            form.errors.phone.as_deref(),
            Some("Phone number is required")
        );
    }

    #[test]
    fn current_upload_response_establishes_the_remote_url() {
        let mut form = uploading_form(1);
        let rerender = apply_upload_result(&mut form, 1, Ok("https://x/y.jpg".to_string()));
        assert!(rerender);
        assert_eq!(form.image.remote_url(), Some("https://x/y.jpg"));
        assert!(form.errors.image.is_none());
    }

    #[test]
    fn stale_upload_response_is_discarded_silently() {
        // A second pick bumped the generation while the first upload was in
        // flight; its late response must not overwrite the newer slot.
        let mut form = uploading_form(2);
        let rerender = apply_upload_result(&mut form, 1, Ok("https://stale/old.jpg".to_string()));
        assert!(!rerender);
        assert_eq!(form.image, ImageState::Uploading(jpeg_meta()));
        assert!(form.errors.image.is_none());

        let rerender = apply_upload_result(&mut form, 1, Err(transport_error()));
        assert!(!rerender);
        assert_eq!(form.image, ImageState::Uploading(jpeg_meta()));
        assert!(form.errors.image.is_none());
    }

    #[test]
    fn failed_upload_keeps_the_selection_but_clears_the_remote_url() {
        let mut form = uploading_form(1);
        apply_upload_result(&mut form, 1, Err(transport_error()));
        assert_eq!(form.image, ImageState::Failed(jpeg_meta()));
        assert!(form.image.remote_url().is_none());
        assert_eq!(
            form.errors.image.as_deref(),
            Some("Failed to upload image. Please try again.")
        );
    }

    #[test]
    fn failed_persist_retains_every_field_for_retry() {
        let mut form = UploadForm::new();
        form.name = "Alice".to_string();
        form.phone = "1234567890".to_string();
        form.image = ImageState::Uploaded {
            meta: Some(jpeg_meta()),
            url: "https://x/y.jpg".to_string(),
        };
        form.is_submitting = true;

        let refresh = apply_persist_result(&mut form, Err(transport_error()));

        assert!(!refresh);
        assert!(!form.is_submitting);
        assert!(!form.submit_success);
        assert_eq!(form.name, "Alice");
        assert_eq!(form.phone, "1234567890");
        assert_eq!(form.image.remote_url(), Some("https://x/y.jpg"));
        assert_eq!(
            form.errors.submit.as_deref(),
            Some("Failed to submit form. Please try again.")
        );
    }

    #[test]
    fn successful_persist_resets_the_form_and_requests_a_refresh() {
        let mut form = UploadForm::new();
        form.name = "Alice".to_string();
        form.phone = "1234567890".to_string();
        form.image = ImageState::Uploaded {
            meta: Some(jpeg_meta()),
            url: "https://x/y.jpg".to_string(),
        };
        form.is_submitting = true;

        let refresh = apply_persist_result(&mut form, Ok("doc-1".to_string()));

        assert!(refresh);
        assert!(!form.is_submitting);
        assert!(form.submit_success);
        assert!(form.name.is_empty());
        assert!(form.phone.is_empty());
        assert_eq!(form.image, ImageState::NotSelected);
        assert!(form.errors.submit.is_none());
    }

    #[test]
    fn current_listing_response_replaces_the_list_atomically() {
        let mut form = UploadForm::new();
        form.records = vec![record("old")];
        form.list_gen = 2;

        let rerender = apply_records_result(&mut form, 2, Ok(vec![record("a"), record("b")]));

        assert!(rerender);
        let ids: Vec<&str> = form.records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn stale_listing_response_is_discarded_silently() {
        let mut form = UploadForm::new();
        form.records = vec![record("current")];
        form.list_gen = 2;

        let rerender = apply_records_result(&mut form, 1, Ok(vec![record("stale")]));

        assert!(!rerender);
        assert_eq!(form.records[0].id, "current");
    }

    #[test]
    fn listing_fetch_error_keeps_the_previous_list() {
        let mut form = UploadForm::new();
        form.records = vec![record("kept")];
        form.list_gen = 1;

        let rerender = apply_records_result(&mut form, 1, Err(transport_error()));

        assert!(!rerender);
        assert_eq!(form.records[0].id, "kept");
    }
}
