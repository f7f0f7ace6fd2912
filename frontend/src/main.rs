use common::config::RemoteConfig;

use crate::app::{App, AppProps};

mod api;
mod app;
mod components;

fn main() {
    let config = RemoteConfig {
        media_upload_url: "https://api.cloudinary.com/v1_1/dupatuebb/image/upload".to_string(),
        upload_preset: "upload-img".to_string(),
        cloud_name: "dupatuebb".to_string(),
        store_base_url: "https://imageupload-43e23-default-rtdb.firebaseio.com".to_string(),
        collection: "imageupload".to_string(),
    };
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
