use yew::{classes, html, Component, Context, Html};

use crate::components::blogs::form::BlogFormComponent;
use crate::components::products::form::ProductFormComponent;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Products,
    Blogs,
}

pub enum Msg {
    ShowSection(Section),
}

pub struct App {
    section: Section,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            section: Section::Products,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ShowSection(section) => {
                if self.section == section {
                    false
                } else {
                    self.section = section;
                    true
                }
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="admin-root">
                <nav class="section-bar">
                    <button
                        class={classes!("tab-btn", if self.section == Section::Products { "active" } else { "" })}
                        onclick={link.callback(|_| Msg::ShowSection(Section::Products))}
                    >
                        {"Productos"}
                    </button>
                    <button
                        class={classes!("tab-btn", if self.section == Section::Blogs { "active" } else { "" })}
                        onclick={link.callback(|_| Msg::ShowSection(Section::Blogs))}
                    >
                        {"Blogs"}
                    </button>
                </nav>
                {
                    match self.section {
                        Section::Products => html! { <ProductFormComponent /> },
                        Section::Blogs => html! { <BlogFormComponent /> },
                    }
                }
            </div>
        }
    }
}
