//! Defines the properties for the `UploadForm` component.

use yew::prelude::*;

use common::config::RemoteConfig;

/// Properties for the `UploadForm` component.
///
/// The parent injects the remote-service configuration here at mount time,
/// so both collaborators (media host and document store) can be redirected
/// to stub endpoints without touching component code.
#[derive(Properties, PartialEq, Clone)]
pub struct UploadFormProps {
    pub config: RemoteConfig,
}
