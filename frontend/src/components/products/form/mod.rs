//! Product form: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, and helpers.
//!
//! Responsibilities
//! - Re-export the public types (`Msg`, `ProductFormProps`,
//!   `ProductFormComponent`).
//! - Provide the `Component` implementation delegating to `update::update`
//!   and `view::view`.
//! - On first render, load an existing product (if `product_id` is given)
//!   or start from a fresh one, notifying the user via toasts (Spanish).
//! - On teardown, release every outstanding image preview handle, even
//!   when the user leaves mid-edit.

use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::product::Product;

use crate::components::helpers::{set_app_dirty_flag, show_toast};

pub mod dialogs;
mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::ProductFormProps;
pub use state::ProductFormComponent;

impl Component for ProductFormComponent {
    type Message = Msg;
    type Properties = ProductFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ProductFormComponent::new()
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

            if let Some(product_id) = &ctx.props().product_id {
                let link = ctx.link().clone();
                let product_id = product_id.clone();
                spawn_local(async move {
                    let response = Request::get(&format!("/api/products/{}", product_id))
                        .send()
                        .await;

                    match response {
                        Ok(resp) if resp.status() == 200 => {
                            if let Ok(product) = resp.json::<Product>().await {
                                link.send_message(Msg::SetProduct(Some(product)));
                                show_toast("Producto cargado correctamente.");
                            } else {
                                start_blank(link);
                            }
                        }
                        _ => start_blank(link),
                    }
                });
            } else {
                ctx.link().send_message(Msg::SetProduct(None));
            }
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        // Teardown mid-edit still pairs every preview with its revoke; an
        // in-flight upload is left to finish on its own.
        self.pending_images.release_all();
        set_app_dirty_flag(false);
    }
}

fn start_blank(link: yew::html::Scope<ProductFormComponent>) {
    link.send_message(Msg::SetProduct(None));
    show_toast("Error cargando el producto. Se creó uno nuevo.");
}
