//! View rendering for the blog form.
//!
//! The content area is split across two tabs: "Editor" (a plain textarea
//! over the markdown source) and "Previsualización" (the rendered post).
//! The editor tab carries a red dot while there is unsaved work. Cover
//! image and paginated subsections render around the tabbed area.

use yew::html::Scope;
use yew::prelude::*;

use common::model::blog::BlogSubsection;

use crate::tops_sheet::yw_material_top_sheet::ConfirmSheet;

use super::helpers::compute_preview_html;
use super::messages::Msg;
use super::state::BlogFormComponent;

/// Main view function: metadata fields, cover slot, tabbed content area,
/// subsections, and dialogs.
pub fn view(component: &BlogFormComponent, ctx: &Context<BlogFormComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="blog-form">
            { build_save_bar(component, link) }
            { build_metadata_section(component, link) }
            { build_cover_section(component, link) }
            { build_tab_bar(component, link) }
            {
                if component.active_tab == "editor" {
                    build_editor_tab(component, link)
                } else {
                    build_preview_tab(component)
                }
            }
            { build_subsections_section(component, link) }
            { build_cover_input(component, link) }
            { build_remove_dialog(component, link) }
        </div>
    }
}

fn build_save_bar(component: &BlogFormComponent, link: &Scope<BlogFormComponent>) -> Html {
    if !component.has_unsaved_work() {
        return html! { <div class="save-bar"></div> };
    }
    let save_label = if component.submitting { "Guardando..." } else { "Guardar" };
    html! {
        <div class="save-bar">
            { icon_button("save", save_label, link.callback(|_| Msg::Save), component.submitting) }
            { icon_button("undo", "Descartar", link.callback(|_| Msg::Cancel), component.submitting) }
        </div>
    }
}

fn build_metadata_section(component: &BlogFormComponent, link: &Scope<BlogFormComponent>) -> Html {
    html! {
        <fieldset class="form-section">
            <legend>{"Datos del blog"}</legend>
            <label>{"Título"}
                <input
                    type="text"
                    value={component.blog.title.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                        Msg::UpdateTitle(input.value())
                    })}
                />
            </label>
            <label>{"Etiquetas (separadas por comas)"}
                <input
                    type="text"
                    value={component.blog.tags.join(", ")}
                    onchange={link.callback(|e: Event| {
                        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                        Msg::UpdateTags(input.value())
                    })}
                />
            </label>
            <label class="checkbox">
                <input
                    type="checkbox"
                    checked={component.blog.published.unwrap_or(false)}
                    onchange={link.callback(|e: Event| {
                        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                        Msg::TogglePublished(input.checked())
                    })}
                />
                {"Publicado"}
            </label>
        </fieldset>
    }
}

fn build_cover_section(component: &BlogFormComponent, link: &Scope<BlogFormComponent>) -> Html {
    let body = if let Some(resource) = component.pending_cover.primary() {
        let id = resource.id.clone();
        html! {
            <div class="image-preview">
                <img src={resource.preview_url.clone()} style="max-width:240px;max-height:160px;" />
                <span class="badge pending">{"Sin subir"}</span>
                <button onclick={link.callback(|_| Msg::OpenCoverFileDialog)}>{"Reemplazar"}</button>
                <button onclick={link.callback(move |_| Msg::RemovePendingCover(id.clone()))}>
                    {"Quitar"}
                </button>
            </div>
        }
    } else if let Some(url) = component.blog.cover_image_url.clone() {
        html! {
            <div class="image-preview">
                <img src={url} style="max-width:240px;max-height:160px;" />
                <button onclick={link.callback(|_| Msg::OpenCoverFileDialog)}>{"Reemplazar"}</button>
                <button onclick={link.callback(|_| Msg::ClearCoverImageUrl)}>{"Quitar"}</button>
            </div>
        }
    } else {
        icon_button(
            "add_photo_alternate",
            "Añadir portada",
            link.callback(|_| Msg::OpenCoverFileDialog),
            false,
        )
    };

    html! {
        <fieldset class="form-section">
            <legend>{"Portada"}</legend>
            { body }
        </fieldset>
    }
}

/// Tab bar for switching between Editor and Preview. Shows a red dot while
/// there is unsaved work.
fn build_tab_bar(component: &BlogFormComponent, link: &Scope<BlogFormComponent>) -> Html {
    let unsaved = component.has_unsaved_work();

    html! {
        <div class="tab-bar">
            <button
                class={classes!("tab-btn", if component.active_tab == "editor" { "active" } else { "" })}
                onclick={link.callback(|_| Msg::SetTab("editor".to_string()))}
                style="position: relative;"
            >
                {"Editor"}
                {
                    if unsaved {
                        html! {
                            <span
                                title="Cambios sin guardar"
                                style="
                                        position: absolute;
                                        top: 4px;
                                        right: 6px;
                                        width: 8px;
                                        height: 8px;
                                        background: #e53935;
                                        border-radius: 50%;
                                        display: inline-block;
                                        vertical-align: middle;
                                    "
                            />
                        }
                    } else {
                        html! {}
                    }
                }
            </button>
            <button
                class={classes!("tab-btn", if component.active_tab == "preview" { "active" } else { "" })}
                onclick={link.callback(|_| Msg::SetTab("preview".to_string()))}
            >
                {"Previsualización"}
            </button>
        </div>
    }
}

fn build_editor_tab(component: &BlogFormComponent, link: &Scope<BlogFormComponent>) -> Html {
    html! {
        <textarea
            class="blog-content-editor"
            value={component.blog.content.clone()}
            spellcheck="false"
            rows={16}
            style="width: 100%; resize: vertical;"
            oninput={link.callback(|e: InputEvent| {
                let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
                Msg::UpdateContent(input.value())
            })}
        />
    }
}

fn build_preview_tab(component: &BlogFormComponent) -> Html {
    let preview_html = compute_preview_html(&component.blog.content);
    html! {
        <div class="markdown-preview">{ Html::from_html_unchecked(preview_html) }</div>
    }
}

fn build_subsections_section(
    component: &BlogFormComponent,
    link: &Scope<BlogFormComponent>,
) -> Html {
    let subsections = &component.blog.subsections;
    let page = component.subsections_view.page_slice(subsections);

    html! {
        <fieldset class="form-section">
            <legend>{"Subsecciones"}</legend>
            {
                page.iter().map(|subsection| build_subsection_row(component, link, subsection)).collect::<Html>()
            }
            { build_subsection_pagination(component, link) }
            { icon_button("add", "Añadir subsección", link.callback(|_| Msg::AddSubsection), false) }
        </fieldset>
    }
}

fn build_subsection_row(
    component: &BlogFormComponent,
    link: &Scope<BlogFormComponent>,
    subsection: &BlogSubsection,
) -> Html {
    let id = subsection.id.clone();
    let expanded = component.subsections_view.is_expanded(&subsection.id);
    let toggle = {
        let id = id.clone();
        link.callback(move |_| Msg::ToggleSubsection(id.clone()))
    };
    let move_up = {
        let id = id.clone();
        link.callback(move |_| Msg::MoveSubsectionUp(id.clone()))
    };
    let move_down = {
        let id = id.clone();
        link.callback(move |_| Msg::MoveSubsectionDown(id.clone()))
    };
    let request_remove = {
        let id = id.clone();
        link.callback(move |_| Msg::RequestRemoveSubsection(id.clone()))
    };

    let heading = if subsection.heading.trim().is_empty() {
        "(sin encabezado)".to_string()
    } else {
        subsection.heading.clone()
    };

    html! {
        <div class={classes!("subsection-row", if expanded { "expanded" } else { "" })} key={subsection.id.clone()}>
            <div class="subsection-summary" onclick={toggle}>
                <i class="material-icons">{ if expanded { "expand_less" } else { "expand_more" } }</i>
                <span class="subsection-heading">{ heading }</span>
                <span class="subsection-actions">
                    <button class="icon-btn small" onclick={move_up}>
                        <i class="material-icons">{"arrow_upward"}</i>
                    </button>
                    <button class="icon-btn small" onclick={move_down}>
                        <i class="material-icons">{"arrow_downward"}</i>
                    </button>
                    <button class="icon-btn small" onclick={request_remove}>
                        <i class="material-icons">{"delete"}</i>
                    </button>
                </span>
            </div>
            { if expanded { build_subsection_editor(link, subsection) } else { html! {} } }
        </div>
    }
}

fn build_subsection_editor(link: &Scope<BlogFormComponent>, subsection: &BlogSubsection) -> Html {
    let on_heading = {
        let id = subsection.id.clone();
        link.callback(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            Msg::UpdateSubsectionHeading(id.clone(), input.value())
        })
    };
    let on_body = {
        let id = subsection.id.clone();
        link.callback(move |e: InputEvent| {
            let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            Msg::UpdateSubsectionBody(id.clone(), input.value())
        })
    };

    html! {
        <div class="subsection-editor">
            <label>{"Encabezado"}
                <input type="text" value={subsection.heading.clone()} oninput={on_heading} />
            </label>
            <label>{"Contenido"}
                <textarea
                    value={subsection.body.clone().unwrap_or_default()}
                    rows={6}
                    oninput={on_body}
                />
            </label>
        </div>
    }
}

fn build_subsection_pagination(
    component: &BlogFormComponent,
    link: &Scope<BlogFormComponent>,
) -> Html {
    let len = component.blog.subsections.len();
    let total = component.subsections_view.total_pages(len);
    if total <= 1 {
        return html! {};
    }
    let current = component.subsections_view.current_page();

    html! {
        <div class="pagination">
            <button
                disabled={current == 1}
                onclick={link.callback(move |_| Msg::GoToSubsectionPage(current - 1))}
            >
                {"Anterior"}
            </button>
            <span>{ format!("Página {} de {}", current, total) }</span>
            <button
                disabled={current == total}
                onclick={link.callback(move |_| Msg::GoToSubsectionPage(current + 1))}
            >
                {"Siguiente"}
            </button>
        </div>
    }
}

fn build_cover_input(component: &BlogFormComponent, link: &Scope<BlogFormComponent>) -> Html {
    html! {
        <input
            ref={component.cover_input_ref.clone()}
            type="file"
            accept="image/*"
            style="display:none;"
            onchange={link.batch_callback(|e: Event| {
                let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                let picked = input.files().and_then(|files| files.item(0));
                input.set_value("");
                picked.map(Msg::CoverSelected)
            })}
        />
    }
}

fn build_remove_dialog(component: &BlogFormComponent, link: &Scope<BlogFormComponent>) -> Html {
    html! {
        <ConfirmSheet
            node_ref={component.remove_dialog_ref.clone()}
            title="Eliminar subsección"
            message="La subsección se descartará. ¿Continuar?"
            on_confirm={link.callback(|_| Msg::ConfirmRemoveSubsection)}
            on_cancel={link.callback(|_| Msg::CancelRemoveSubsection)}
        />
    }
}

/// Renders a button with a Material icon and a label.
fn icon_button(
    icon_name: &str,
    label: &str,
    on_click: Callback<MouseEvent>,
    disabled: bool,
) -> Html {
    html! {
        <button class="icon-btn" onclick={on_click} disabled={disabled}>
            <i class="material-icons">{icon_name}</i>
            <span class="icon-label">{label}</span>
        </button>
    }
}
