//! HTTP clients for the two remote collaborators.
//!
//! `upload_image` posts a multipart form to the media host and returns the
//! durable retrieval URL. `create_record` and `list_records` talk to the
//! record collection of the document store. Every call is a single attempt:
//! there is no retry, no timeout, no cancellation — a superseded response is
//! discarded by the caller via generation counters, never aborted here.

use gloo_net::http::Request;
use serde::Deserialize;
use thiserror::Error;
use web_sys::{File, FormData};

use common::config::RemoteConfig;
use common::model::record::{RecordFields, UploadedRecord};

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (network failure, bad payload).
    #[error("transport error: {0}")]
    Transport(String),
    /// The remote answered with a non-success status.
    #[error("unexpected status {0}")]
    Status(u16),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

#[derive(Deserialize)]
struct UploadResponse {
    url: String,
}

#[derive(Deserialize)]
struct CreateResponse {
    id: String,
}

/// Uploads the picked file to the media host and returns the durable URL.
pub async fn upload_image(config: &RemoteConfig, file: &File) -> Result<String, ApiError> {
    let form = FormData::new().map_err(|_| assembly_error())?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|_| assembly_error())?;
    form.append_with_str("upload_preset", &config.upload_preset)
        .map_err(|_| assembly_error())?;
    form.append_with_str("cloud_name", &config.cloud_name)
        .map_err(|_| assembly_error())?;

    let response = Request::post(&config.media_upload_url)
        .body(form)?
        .send()
        .await?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    let parsed: UploadResponse = response.json().await?;
    Ok(parsed.url)
}

/// Creates one record in the collection and returns the assigned id.
pub async fn create_record(config: &RemoteConfig, fields: &RecordFields) -> Result<String, ApiError> {
    let response = Request::post(&config.collection_url())
        .json(fields)?
        .send()
        .await?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    let parsed: CreateResponse = response.json().await?;
    Ok(parsed.id)
}

/// Fetches every record in the collection, oldest first.
pub async fn list_records(config: &RemoteConfig) -> Result<Vec<UploadedRecord>, ApiError> {
    let response = Request::get(&config.collection_url()).send().await?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    let mut records: Vec<UploadedRecord> = response.json().await?;
    sort_by_creation(&mut records);
    Ok(records)
}

/// Orders records by their client-assigned creation timestamp so the listing
/// does not depend on whatever order the store happens to return.
pub fn sort_by_creation(records: &mut [UploadedRecord]) {
    records.sort_by_key(|record| record.fields.created_at);
}

fn assembly_error() -> ApiError {
    ApiError::Transport("multipart form assembly failed".to_string())
}
