//! Submission form: root module wiring the Yew `Component` implementation
//! with submodules for state, validation, update logic, and view rendering.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `UploadFormProps`, `UploadForm`).
//! - Provide the `Component` implementation that delegates to
//!   `update::update` and `view::view`.
//! - On first render, fetch the persisted records once so the listing is
//!   populated before any submission happens.
//! - Release the preview object URL when the component is torn down.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod validation;
mod view;

pub use messages::Msg;
pub use props::UploadFormProps;
pub use state::{ImageMeta, ImageState, UploadForm};
pub use validation::ValidationErrors;

impl Component for UploadForm {
    type Message = Msg;
    type Properties = UploadFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        UploadForm::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            update::fetch_records(self, ctx);
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.revoke_preview();
    }
}
