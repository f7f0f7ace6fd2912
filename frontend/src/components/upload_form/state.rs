//! Component state for the submission form.
//!
//! Holds the transient form fields, the tagged image provenance, the
//! per-field errors, the listing, and the request-generation counters used
//! to discard stale asynchronous responses.

use web_sys::{File, HtmlInputElement, Url};
use yew::prelude::*;

use common::model::record::{RecordFields, UploadedRecord, NO_IMAGE_NAME};

use super::validation::ValidationErrors;

/// Size and media type of a picked file, captured when the user picks it so
/// validation and payload building never have to touch the browser handle.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageMeta {
    pub file_name: String,
    pub byte_size: u64,
    pub media_type: String,
}

impl ImageMeta {
    pub fn from_file(file: &File) -> Self {
        Self {
            file_name: file.name(),
            byte_size: file.size() as u64,
            media_type: file.type_(),
        }
    }
}

/// Provenance of the image slot, tracked as an explicit tag instead of being
/// inferred from a pair of optional fields.
#[derive(Clone, Debug, PartialEq)]
pub enum ImageState {
    /// Nothing picked yet, or the last pick failed the local checks.
    NotSelected,
    /// A pick passed the local size/type checks and its upload is in flight.
    Uploading(ImageMeta),
    /// The media host confirmed the upload and returned a durable URL.
    /// `meta` is `None` when no file handle is retained for the URL, which
    /// is what triggers the stored-name sentinel at persist time.
    Uploaded { meta: Option<ImageMeta>, url: String },
    /// The upload failed. The selection is kept so the user can see what
    /// they picked, but no durable URL exists until they pick again.
    Failed(ImageMeta),
}

impl ImageState {
    /// Durable URL, present only after a confirmed upload.
    pub fn remote_url(&self) -> Option<&str> {
        match self {
            ImageState::Uploaded { url, .. } => Some(url),
            _ => None,
        }
    }

    /// Metadata of the locally picked file, if one is held.
    pub fn meta(&self) -> Option<&ImageMeta> {
        match self {
            ImageState::NotSelected => None,
            ImageState::Uploading(meta) | ImageState::Failed(meta) => Some(meta),
            ImageState::Uploaded { meta, .. } => meta.as_ref(),
        }
    }
}

/// State container for the submission form component.
///
/// Fields are `pub` because they are accessed by the `view` and `update`
/// modules.
pub struct UploadForm {
    pub name: String,
    pub phone: String,

    /// Where the image slot currently stands in its upload lifecycle.
    pub image: ImageState,

    /// Revocable object URL backing the on-screen thumbnail of the current
    /// pick. Released when superseded and when the component is destroyed.
    pub preview_url: Option<String>,

    pub errors: ValidationErrors,
    pub is_submitting: bool,
    pub submit_success: bool,

    /// The listing of persisted records, replaced atomically on each fetch.
    pub records: Vec<UploadedRecord>,

    /// Generation counter for the upload slot. A response is applied only if
    /// its generation matches the latest issued request.
    pub upload_gen: u32,

    /// Generation counter for the listing slot.
    pub list_gen: u32,

    /// Guard against running the first-render fetch more than once.
    pub loaded: bool,

    /// Reference to the file input, cleared when the form resets.
    pub file_input_ref: NodeRef,
}

impl UploadForm {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            phone: String::new(),
            image: ImageState::NotSelected,
            preview_url: None,
            errors: ValidationErrors::default(),
            is_submitting: false,
            submit_success: false,
            records: Vec::new(),
            upload_gen: 0,
            list_gen: 0,
            loaded: false,
            file_input_ref: NodeRef::default(),
        }
    }

    /// Builds the field payload for a create call. The stored image name
    /// falls back to a sentinel when no file handle is retained.
    pub fn record_fields(&self, created_at: u64) -> RecordFields {
        RecordFields {
            name: self.name.clone(),
            phone: self.phone.clone(),
            image_url: self.image.remote_url().unwrap_or_default().to_string(),
            image_name: self
                .image
                .meta()
                .map(|meta| meta.file_name.clone())
                .unwrap_or_else(|| NO_IMAGE_NAME.to_string()),
            created_at,
        }
    }

    /// Releases the current preview object URL, if any. Object URLs survive
    /// the component unless revoked explicitly.
    pub fn revoke_preview(&mut self) {
        if let Some(url) = self.preview_url.take() {
            let _ = Url::revoke_object_url(&url);
        }
    }

    /// Returns the form to its initial empty state after a successful
    /// submit. Also blanks the file input element so the browser does not
    /// keep showing the old pick.
    pub fn reset(&mut self) {
        self.name.clear();
        self.phone.clear();
        self.image = ImageState::NotSelected;
        self.revoke_preview();
        self.errors = ValidationErrors::default();
        if let Some(input) = self.file_input_ref.cast::<HtmlInputElement>() {
            input.set_value("");
        }
    }
}
