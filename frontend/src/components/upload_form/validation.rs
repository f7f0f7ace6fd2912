//! Pure validation rules for the submission form.
//!
//! `validate` maps the current field values to a set of per-field messages
//! without side effects; it runs in full at submit time. `check_file` is the
//! local size/type subset that runs at file-selection time, before any
//! upload is issued. Neither function ever writes the `submit` slot — that
//! one belongs exclusively to a failed persistence call.

use regex::Regex;

use super::state::{ImageMeta, ImageState};

/// Maximum accepted image size in bytes (2 MiB).
pub const MAX_IMAGE_BYTES: u64 = 2 * 1024 * 1024;

/// Media types the form accepts.
pub const ACCEPTED_MEDIA_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/gif"];

/// Per-field error messages. An empty slot means the field is valid.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidationErrors {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub image: Option<String>,
    /// Written only by a failed persistence call, never by field checks.
    pub submit: Option<String>,
}

impl ValidationErrors {
    /// True when no field-level error is present.
    pub fn is_clear(&self) -> bool {
        self.name.is_none() && self.phone.is_none() && self.image.is_none()
    }
}

/// Runs every field rule and reports all violations at once.
pub fn validate(name: &str, phone: &str, image: &ImageState) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if name.trim().is_empty() {
        errors.name = Some("Name is required".to_string());
    }

    let phone = phone.trim();
    if phone.is_empty() {
        errors.phone = Some("Phone number is required".to_string());
    } else if !Regex::new(r"^\d{10,15}$").unwrap().is_match(phone) {
        errors.phone = Some("Please enter a valid phone number".to_string());
    }

    errors.image = image_error(image);
    errors
}

/// Image rule: a durable remote URL must exist; when a local pick is held
/// its size and media type must also pass. The missing-URL check dominates
/// within the single image slot.
fn image_error(image: &ImageState) -> Option<String> {
    if image.remote_url().is_none() {
        return Some("Please upload an image".to_string());
    }
    image.meta().and_then(check_file)
}

/// Local size/type checks run at file-selection time, before any upload.
pub fn check_file(meta: &ImageMeta) -> Option<String> {
    if meta.byte_size > MAX_IMAGE_BYTES {
        return Some("Image size should be less than 2MB".to_string());
    }
    if !ACCEPTED_MEDIA_TYPES.contains(&meta.media_type.as_str()) {
        return Some("Please upload a JPEG, PNG, or GIF image".to_string());
    }
    None
}
