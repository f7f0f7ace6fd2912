use serde::{Deserialize, Serialize};

/// Connection settings for the two remote collaborators: the media host that
/// stores image blobs and the document store that keeps submitted records.
///
/// Built once at startup and handed down through component properties, so an
/// alternate deployment (or a test harness) can point the form at different
/// endpoints without touching component code.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct RemoteConfig {
    /// HTTPS endpoint accepting multipart image uploads.
    pub media_upload_url: String,
    /// Unsigned upload preset sent along with every media upload.
    pub upload_preset: String,
    /// Account identifier of the media host.
    pub cloud_name: String,
    /// Base URL of the document store REST API.
    pub store_base_url: String,
    /// Name of the collection that holds submitted records.
    pub collection: String,
}

impl RemoteConfig {
    /// URL of the record collection: GET lists, POST creates.
    pub fn collection_url(&self) -> String {
        format!(
            "{}/{}",
            self.store_base_url.trim_end_matches('/'),
            self.collection
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_url_joins_base_and_collection() {
        let config = RemoteConfig {
            media_upload_url: "https://media.example/upload".to_string(),
            upload_preset: "preset".to_string(),
            cloud_name: "cloud".to_string(),
            store_base_url: "https://store.example/".to_string(),
            collection: "imageupload".to_string(),
        };
        assert_eq!(config.collection_url(), "https://store.example/imageupload");
    }
}
