use web_sys::File;

use common::model::record::UploadedRecord;

use crate::api::ApiError;

pub enum Msg {
    EditName(String),
    EditPhone(String),
    FileSelected(Option<File>),
    UploadFinished {
        generation: u32,
        result: Result<String, ApiError>,
    },
    Submit,
    PersistFinished(Result<String, ApiError>),
    RecordsFetched {
        generation: u32,
        result: Result<Vec<UploadedRecord>, ApiError>,
    },
    ClearSuccessBanner,
}
