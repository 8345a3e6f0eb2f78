//! Blog form: root module wiring the Yew `Component` implementation with
//! submodules for state, update logic, view rendering, and helpers.

use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::blog::Blog;

use crate::components::helpers::{set_app_dirty_flag, show_toast};

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::BlogFormProps;
pub use state::BlogFormComponent;

impl Component for BlogFormComponent {
    type Message = Msg;
    type Properties = BlogFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        BlogFormComponent::new()
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

            if let Some(blog_id) = &ctx.props().blog_id {
                let link = ctx.link().clone();
                let blog_id = blog_id.clone();
                spawn_local(async move {
                    let response = Request::get(&format!("/api/blogs/{}", blog_id)).send().await;

                    match response {
                        Ok(resp) if resp.status() == 200 => {
                            if let Ok(blog) = resp.json::<Blog>().await {
                                link.send_message(Msg::SetBlog(Some(blog)));
                                show_toast("Blog cargado correctamente.");
                            } else {
                                start_blank(link);
                            }
                        }
                        _ => start_blank(link),
                    }
                });
            } else {
                ctx.link().send_message(Msg::SetBlog(None));
            }
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        // Teardown mid-edit still pairs every preview with its revoke.
        self.pending_cover.release_all();
        set_app_dirty_flag(false);
    }
}

fn start_blank(link: yew::html::Scope<BlogFormComponent>) {
    link.send_message(Msg::SetBlog(None));
    show_toast("Error cargando el blog. Se creó uno nuevo.");
}
