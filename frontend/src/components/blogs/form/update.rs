//! Update function for the blog form. Same architecture as the product
//! form: state in, message in, mutation, re-render flag out. The dirty
//! signal and the navigation guard flag are refreshed synchronously on
//! every working-copy mutation.

use gloo_console::error;
use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::blog::{Blog, BlogSubsection};

use crate::components::helpers::{parse_tags, set_app_dirty_flag, show_toast};
use crate::form_engine::browser::{ApiStorageUploader, BrowserFile};
use crate::tops_sheet::yw_material_top_sheet::{close_top_sheet, open_top_sheet};

use super::helpers::{blog_snapshot, empty_blog, new_subsection};
use super::messages::Msg;
use super::state::BlogFormComponent;

/// Central update function for the component.
pub fn update(component: &mut BlogFormComponent, ctx: &Context<BlogFormComponent>, msg: Msg) -> bool {
    match msg {
        Msg::SetTab(tab) => {
            component.active_tab = tab;
            true
        }
        Msg::UpdateTitle(value) => {
            component.blog.title = value;
            refresh_guard(component);
            true
        }
        Msg::UpdateContent(value) => {
            component.blog.content = value;
            refresh_guard(component);
            true
        }
        Msg::UpdateTags(value) => {
            component.blog.tags = parse_tags(&value);
            refresh_guard(component);
            true
        }
        Msg::TogglePublished(value) => {
            component.blog.published = Some(value);
            refresh_guard(component);
            true
        }

        Msg::AddSubsection => {
            let subsection = new_subsection();
            let id = subsection.id.clone();
            component.blog.subsections.push(subsection);
            component
                .subsections_view
                .on_item_added(&id, component.blog.subsections.len());
            refresh_guard(component);
            true
        }
        Msg::ToggleSubsection(id) => {
            component.subsections_view.toggle_expand(&id);
            true
        }
        Msg::GoToSubsectionPage(page) => {
            let len = component.blog.subsections.len();
            component.subsections_view.go_to_page(page, len);
            true
        }
        Msg::MoveSubsectionUp(id) => move_subsection(component, &id, -1),
        Msg::MoveSubsectionDown(id) => move_subsection(component, &id, 1),
        Msg::UpdateSubsectionHeading(id, value) => {
            if let Some(subsection) = subsection_mut(component, &id) {
                subsection.heading = value;
            }
            refresh_guard(component);
            true
        }
        Msg::UpdateSubsectionBody(id, value) => {
            if let Some(subsection) = subsection_mut(component, &id) {
                subsection.body = if value.trim().is_empty() { None } else { Some(value) };
            }
            refresh_guard(component);
            true
        }
        Msg::RequestRemoveSubsection(id) => {
            component.remove_candidate = Some(id);
            open_top_sheet(component.remove_dialog_ref.clone());
            true
        }
        Msg::ConfirmRemoveSubsection => {
            if let Some(id) = component.remove_candidate.take() {
                if let Some(pos) = component
                    .blog
                    .subsections
                    .iter()
                    .position(|subsection| subsection.id == id)
                {
                    component.blog.subsections.remove(pos);
                    component
                        .subsections_view
                        .on_item_removed(&id, component.blog.subsections.len());
                }
            }
            close_top_sheet(component.remove_dialog_ref.clone());
            refresh_guard(component);
            true
        }
        Msg::CancelRemoveSubsection => {
            component.remove_candidate = None;
            close_top_sheet(component.remove_dialog_ref.clone());
            true
        }

        Msg::OpenCoverFileDialog => {
            if let Some(input) = component.cover_input_ref.cast::<web_sys::HtmlInputElement>() {
                input.click();
            }
            false
        }
        Msg::CoverSelected(file) => {
            if let Err(reason) = component.pending_cover.register_primary(BrowserFile::new(file)) {
                show_toast(&format!("Imagen de portada: {}", reason));
            }
            refresh_guard(component);
            true
        }
        Msg::RemovePendingCover(id) => {
            component.pending_cover.remove(&id);
            refresh_guard(component);
            true
        }
        Msg::ClearCoverImageUrl => {
            component.blog.cover_image_url = None;
            refresh_guard(component);
            true
        }

        Msg::Save => {
            if component.submitting {
                // A save is already in flight; this one is ignored.
                return false;
            }
            if component.blog.title.trim().is_empty() {
                show_toast("El título del blog es obligatorio.");
                return true;
            }
            // Jump to and expand the first subsection that fails validation.
            if let Some(invalid) = component
                .blog
                .subsections
                .iter()
                .find(|subsection| subsection.heading.trim().is_empty())
            {
                let id = invalid.id.clone();
                component
                    .subsections_view
                    .expand(&id, &component.blog.subsections);
                show_toast("Cada subsección necesita un encabezado.");
                return true;
            }
            component.submitting = true;

            let pending = component.pending_cover.clone();
            let mut blog = component.blog.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let folder = format!("blogs/{}", blog.id);
                match pending.upload_all(&ApiStorageUploader, &folder).await {
                    Ok(uploaded) => {
                        if let Some(url) = uploaded.primary_url {
                            blog.cover_image_url = Some(url);
                        }
                        match Request::post("/api/blogs/save").json(&blog) {
                            Ok(request) => match request.send().await {
                                Ok(response) if response.status() == 200 => {
                                    let saved = response.json::<Blog>().await.unwrap_or(blog);
                                    link.send_message(Msg::SaveSucceeded(saved));
                                }
                                Ok(response) => {
                                    let detail = response.text().await.unwrap_or_default();
                                    link.send_message(Msg::SaveFailed(detail));
                                }
                                Err(err) => link.send_message(Msg::SaveFailed(err.to_string())),
                            },
                            Err(err) => link.send_message(Msg::SaveFailed(err.to_string())),
                        }
                    }
                    Err(err) => link.send_message(Msg::SaveFailed(err.to_string())),
                }
            });
            true
        }
        Msg::SaveSucceeded(saved) => {
            component.submitting = false;
            component.blog = saved.clone();
            component.saved_blog = saved;
            component.pending_cover.release_all();
            component.tracker.rebaseline(&blog_snapshot(&component.blog));
            refresh_guard(component);
            show_toast("Blog guardado correctamente.");
            true
        }
        Msg::SaveFailed(message) => {
            component.submitting = false;
            error!("No se pudo guardar el blog:", message.clone());
            show_toast(&format!("Error al guardar el blog: {}", message));
            true
        }
        Msg::SetBlog(loaded) => {
            let blog = loaded.unwrap_or_else(empty_blog);
            component.blog = blog.clone();
            component.saved_blog = blog;
            component.pending_cover.release_all();
            component.subsections_view.collapse();
            component
                .subsections_view
                .go_to_page(1, component.blog.subsections.len());
            component.tracker.rebaseline(&blog_snapshot(&component.blog));
            refresh_guard(component);
            true
        }
        Msg::Cancel => {
            component.blog = component.saved_blog.clone();
            component.pending_cover.release_all();
            component.subsections_view.collapse();
            component
                .subsections_view
                .go_to_page(1, component.blog.subsections.len());
            refresh_guard(component);
            show_toast("Cambios descartados.");
            true
        }
    }
}

/// Republishes the navigation guard flag after a mutation.
fn refresh_guard(component: &BlogFormComponent) {
    set_app_dirty_flag(component.has_unsaved_work());
}

fn subsection_mut<'a>(
    component: &'a mut BlogFormComponent,
    id: &str,
) -> Option<&'a mut BlogSubsection> {
    component
        .blog
        .subsections
        .iter_mut()
        .find(|subsection| subsection.id == id)
}

fn move_subsection(component: &mut BlogFormComponent, id: &str, delta: isize) -> bool {
    let subsections = &mut component.blog.subsections;
    let Some(pos) = subsections.iter().position(|subsection| subsection.id == id) else {
        return false;
    };
    let target = pos as isize + delta;
    if target < 0 || target as usize >= subsections.len() {
        return false;
    }
    subsections.swap(pos, target as usize);
    component
        .subsections_view
        .ensure_expanded_visible(&component.blog.subsections);
    refresh_guard(component);
    true
}
