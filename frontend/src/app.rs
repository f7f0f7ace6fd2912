use yew::{html, Component, Context, Html, Properties};

use common::config::RemoteConfig;

use crate::components::upload_form::UploadForm;

#[derive(Properties, PartialEq, Clone)]
pub struct AppProps {
    /// Remote-service configuration, supplied once at startup.
    pub config: RemoteConfig,
}

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = AppProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div>
                <UploadForm config={ctx.props().config.clone()} />
            </div>
        }
    }
}
