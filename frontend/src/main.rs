use crate::app::App;

mod app;
mod components;
mod form_engine;
mod tops_sheet;

fn main() {
    yew::Renderer::<App>::new().render();
}
