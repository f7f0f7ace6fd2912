use serde::{Deserialize, Serialize};

/// Image name stored when no local file handle is retained for a submission.
pub const NO_IMAGE_NAME: &str = "N/A";

/// Field payload written to the record store for one submission.
///
/// The capitalized wire names are the document schema the store already
/// holds; they must not change. `CreatedAt` is assigned by the client at
/// submit time and gives the listing a stable chronological order instead of
/// relying on whatever order the store returns.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct RecordFields {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Phone")]
    pub phone: String,
    #[serde(rename = "ImageUrl")]
    pub image_url: String,
    #[serde(rename = "ImageName")]
    pub image_name: String,
    /// Epoch milliseconds at submit time. Defaults to 0 when reading records
    /// written before the field existed.
    #[serde(rename = "CreatedAt", default)]
    pub created_at: u64,
}

/// A persisted record together with the opaque identifier the store assigned
/// to it. Records are append/read only from this client's perspective.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct UploadedRecord {
    pub id: String,
    #[serde(flatten)]
    pub fields: RecordFields,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_fields_serialize_with_store_schema_names() {
        let fields = RecordFields {
            name: "Alice".to_string(),
            phone: "1234567890".to_string(),
            image_url: "https://x/y.jpg".to_string(),
            image_name: "photo.jpg".to_string(),
            created_at: 42,
        };
        let value = serde_json::to_value(&fields).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "Name": "Alice",
                "Phone": "1234567890",
                "ImageUrl": "https://x/y.jpg",
                "ImageName": "photo.jpg",
                "CreatedAt": 42,
            })
        );
    }

    #[test]
    fn uploaded_record_deserializes_flattened_document() {
        let record: UploadedRecord = serde_json::from_str(
            r#"{
                "id": "doc-1",
                "Name": "Alice",
                "Phone": "1234567890",
                "ImageUrl": "https://x/y.jpg",
                "ImageName": "photo.jpg",
                "CreatedAt": 42
            }"#,
        )
        .unwrap();
        assert_eq!(record.id, "doc-1");
        assert_eq!(record.fields.name, "Alice");
        assert_eq!(record.fields.created_at, 42);
    }

    #[test]
    fn missing_created_at_defaults_to_zero() {
        let record: UploadedRecord = serde_json::from_str(
            r#"{
                "id": "doc-2",
                "Name": "Bob",
                "Phone": "0987654321",
                "ImageUrl": "",
                "ImageName": "N/A"
            }"#,
        )
        .unwrap();
        assert_eq!(record.fields.created_at, 0);
    }
}
