//! View rendering for the product form.
//!
//! The screen is split into three sections: general fields, images, and
//! the paginated variant list. Images selected by the user render through
//! their preview handles (marked "Sin subir") until a save uploads them;
//! the save/discard bar only appears while there is unsaved work.

use yew::html::Scope;
use yew::prelude::*;

use common::model::product::ProductVariant;

use crate::form_engine::pending_resources::PendingResource;
use crate::form_engine::browser::BrowserFile;
use crate::tops_sheet::yw_material_top_sheet::ConfirmSheet;

use super::dialogs::image::image_zoom_dialog;
use super::helpers::format_price_cents;
use super::messages::Msg;
use super::state::ProductFormComponent;

/// Main view function: sections, hidden file inputs, and dialogs.
pub fn view(component: &ProductFormComponent, ctx: &Context<ProductFormComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="product-form">
            { build_save_bar(component, link) }
            { build_general_section(component, link) }
            { build_images_section(component, link) }
            { build_variants_section(component, link) }
            { build_file_inputs(component, link) }
            { build_remove_dialog(component, link) }
            { image_zoom_dialog(component, link) }
        </div>
    }
}

/// Save/discard bar, visible only while there is unsaved work (dirty
/// working copy or images awaiting upload). Shows the unsaved-changes dot.
fn build_save_bar(component: &ProductFormComponent, link: &Scope<ProductFormComponent>) -> Html {
    if !component.has_unsaved_work() {
        return html! { <div class="save-bar"></div> };
    }
    let save_label = if component.submitting { "Guardando..." } else { "Guardar" };
    html! {
        <div class="save-bar">
            <span
                title="Cambios sin guardar"
                style="width:8px;height:8px;background:#e53935;border-radius:50%;display:inline-block;vertical-align:middle;margin-right:8px;"
            />
            { icon_button("save", save_label, link.callback(|_| Msg::Save), component.submitting) }
            { icon_button("undo", "Descartar", link.callback(|_| Msg::Cancel), component.submitting) }
        </div>
    }
}

fn build_general_section(
    component: &ProductFormComponent,
    link: &Scope<ProductFormComponent>,
) -> Html {
    html! {
        <fieldset class="form-section">
            <legend>{"Datos generales"}</legend>
            <label>{"Nombre"}
                <input
                    type="text"
                    value={component.product.name.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                        Msg::UpdateName(input.value())
                    })}
                />
            </label>
            <label>{"Descripción"}
                <textarea
                    value={component.product.description.clone().unwrap_or_default()}
                    rows={4}
                    oninput={link.callback(|e: InputEvent| {
                        let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
                        Msg::UpdateDescription(input.value())
                    })}
                />
            </label>
            <label>{"Etiquetas (separadas por comas)"}
                <input
                    type="text"
                    value={component.product.tags.join(", ")}
                    onchange={link.callback(|e: Event| {
                        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                        Msg::UpdateTags(input.value())
                    })}
                />
            </label>
            <label class="checkbox">
                <input
                    type="checkbox"
                    checked={component.product.published.unwrap_or(false)}
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

fn build_images_section(
    component: &ProductFormComponent,
    link: &Scope<ProductFormComponent>,
) -> Html {
    html! {
        <fieldset class="form-section">
            <legend>{"Imágenes"}</legend>
            { build_primary_slot(component, link) }
            { build_additional_slots(component, link) }
        </fieldset>
    }
}

fn build_primary_slot(
    component: &ProductFormComponent,
    link: &Scope<ProductFormComponent>,
) -> Html {
    let body = if let Some(resource) = component.pending_images.primary() {
        pending_preview(
            &resource,
            link,
            link.callback(|_| Msg::OpenPrimaryFileDialog),
        )
    } else if let Some(url) = component.product.primary_image_url.clone() {
        stored_preview(
            url,
            link,
            link.callback(|_| Msg::OpenPrimaryFileDialog),
            link.callback(|_| Msg::ClearPrimaryImageUrl),
        )
    } else {
        icon_button(
            "add_photo_alternate",
            "Añadir imagen principal",
            link.callback(|_| Msg::OpenPrimaryFileDialog),
            false,
        )
    };
    html! {
        <div class="image-slot primary">
            <h4>{"Imagen principal"}</h4>
            { body }
        </div>
    }
}

fn build_additional_slots(
    component: &ProductFormComponent,
    link: &Scope<ProductFormComponent>,
) -> Html {
    let pending = component.pending_images.additional();
    let capacity_left = component.pending_images.remaining_additional_capacity();

    html! {
        <div class="image-slot additional">
            <h4>{"Imágenes adicionales"}</h4>
            <div style="display:flex;flex-wrap:wrap;gap:12px;">
                {
                    component.product.additional_image_urls.iter().enumerate().map(|(index, url)| {
                        let zoom = url.clone();
                        html! {
                            <div class="image-preview" key={format!("stored-{}", index)}>
                                <img
                                    src={url.clone()}
                                    style="max-width:120px;max-height:120px;cursor:zoom-in;"
                                    onclick={link.callback(move |_| Msg::OpenImageZoom(zoom.clone()))}
                                />
                                <button onclick={link.callback(move |_| Msg::RemoveAdditionalImageUrl(index))}>
                                    {"Quitar"}
                                </button>
                            </div>
                        }
                    }).collect::<Html>()
                }
                {
                    pending.iter().map(|resource| {
                        let zoom = resource.preview_url.clone();
                        let id = resource.id.clone();
                        html! {
                            <div class="image-preview" key={resource.id.clone()}>
                                <img
                                    src={resource.preview_url.clone()}
                                    style="max-width:120px;max-height:120px;cursor:zoom-in;"
                                    onclick={link.callback(move |_| Msg::OpenImageZoom(zoom.clone()))}
                                />
                                <span class="badge pending">{"Sin subir"}</span>
                                <button onclick={link.callback(move |_| Msg::RemovePendingResource(id.clone()))}>
                                    {"Quitar"}
                                </button>
                            </div>
                        }
                    }).collect::<Html>()
                }
            </div>
            {
                if capacity_left > 0 {
                    html! {
                        <>
                            { icon_button("add_photo_alternate", "Añadir imágenes", link.callback(|_| Msg::OpenAdditionalFileDialog), false) }
                            <span class="hint">{ format!("Quedan {} espacios", capacity_left) }</span>
                        </>
                    }
                } else {
                    html! { <span class="hint">{"No quedan espacios adicionales"}</span> }
                }
            }
        </div>
    }
}

/// Preview card for a not-yet-uploaded image.
fn pending_preview(
    resource: &PendingResource<BrowserFile>,
    link: &Scope<ProductFormComponent>,
    on_replace: Callback<MouseEvent>,
) -> Html {
    let zoom = resource.preview_url.clone();
    let id = resource.id.clone();
    html! {
        <div class="image-preview">
            <img
                src={resource.preview_url.clone()}
                style="max-width:160px;max-height:160px;cursor:zoom-in;"
                onclick={link.callback(move |_| Msg::OpenImageZoom(zoom.clone()))}
            />
            <span class="badge pending">{"Sin subir"}</span>
            <button onclick={on_replace}>{"Reemplazar"}</button>
            <button onclick={link.callback(move |_| Msg::RemovePendingResource(id.clone()))}>
                {"Quitar"}
            </button>
        </div>
    }
}

/// Preview card for an already stored image URL.
fn stored_preview(
    url: String,
    link: &Scope<ProductFormComponent>,
    on_replace: Callback<MouseEvent>,
    on_clear: Callback<MouseEvent>,
) -> Html {
    let zoom = url.clone();
    html! {
        <div class="image-preview">
            <img
                src={url}
                style="max-width:160px;max-height:160px;cursor:zoom-in;"
                onclick={link.callback(move |_| Msg::OpenImageZoom(zoom.clone()))}
            />
            <button onclick={on_replace}>{"Reemplazar"}</button>
            <button onclick={on_clear}>{"Quitar"}</button>
        </div>
    }
}

fn build_variants_section(
    component: &ProductFormComponent,
    link: &Scope<ProductFormComponent>,
) -> Html {
    let variants = &component.product.variants;
    let page = component.variants_view.page_slice(variants);

    html! {
        <fieldset class="form-section">
            <legend>{"Variantes"}</legend>
            {
                page.iter().map(|variant| build_variant_row(component, link, variant)).collect::<Html>()
            }
            { build_variant_pagination(component, link) }
            { icon_button("add", "Añadir variante", link.callback(|_| Msg::AddVariant), false) }
        </fieldset>
    }
}

fn build_variant_row(
    component: &ProductFormComponent,
    link: &Scope<ProductFormComponent>,
    variant: &ProductVariant,
) -> Html {
    let id = variant.id.clone();
    let expanded = component.variants_view.is_expanded(&variant.id);
    let toggle = {
        let id = id.clone();
        link.callback(move |_| Msg::ToggleVariant(id.clone()))
    };
    let move_up = {
        let id = id.clone();
        link.callback(move |_| Msg::MoveVariantUp(id.clone()))
    };
    let move_down = {
        let id = id.clone();
        link.callback(move |_| Msg::MoveVariantDown(id.clone()))
    };
    let request_remove = {
        let id = id.clone();
        link.callback(move |_| Msg::RequestRemoveVariant(id.clone()))
    };

    let title = if variant.title.trim().is_empty() {
        "(sin título)".to_string()
    } else {
        variant.title.clone()
    };
    let summary = match (variant.sku.as_deref(), variant.price_cents) {
        (Some(sku), Some(price)) => format!("{} · {}", sku, format_price_cents(price)),
        (Some(sku), None) => sku.to_string(),
        (None, Some(price)) => format_price_cents(price),
        (None, None) => String::new(),
    };

    html! {
        <div class={classes!("variant-row", if expanded { "expanded" } else { "" })} key={variant.id.clone()}>
            <div class="variant-summary" onclick={toggle}>
                <i class="material-icons">{ if expanded { "expand_less" } else { "expand_more" } }</i>
                <span class="variant-title">{ title }</span>
                <span class="variant-detail">{ summary }</span>
                <span class="variant-actions">
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
            { if expanded { build_variant_editor(component, link, variant) } else { html! {} } }
        </div>
    }
}

fn build_variant_editor(
    component: &ProductFormComponent,
    link: &Scope<ProductFormComponent>,
    variant: &ProductVariant,
) -> Html {
    let on_title = {
        let id = variant.id.clone();
        link.callback(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            Msg::UpdateVariantTitle(id.clone(), input.value())
        })
    };
    let on_sku = {
        let id = variant.id.clone();
        link.callback(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            Msg::UpdateVariantSku(id.clone(), input.value())
        })
    };
    let on_price = {
        let id = variant.id.clone();
        link.callback(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            Msg::UpdateVariantPrice(id.clone(), input.value())
        })
    };
    let price_value = variant
        .price_cents
        .map(|cents| format!("{},{:02}", cents / 100, (cents % 100).abs()))
        .unwrap_or_default();

    html! {
        <div class="variant-editor">
            <label>{"Título"}
                <input type="text" value={variant.title.clone()} oninput={on_title} />
            </label>
            <label>{"SKU"}
                <input type="text" value={variant.sku.clone().unwrap_or_default()} oninput={on_sku} />
            </label>
            <label>{"Precio"}
                <input type="text" inputmode="decimal" value={price_value} onchange={on_price} />
            </label>
            { build_variant_image_slot(component, link, variant) }
        </div>
    }
}

fn build_variant_image_slot(
    component: &ProductFormComponent,
    link: &Scope<ProductFormComponent>,
    variant: &ProductVariant,
) -> Html {
    let open_dialog = {
        let id = variant.id.clone();
        link.callback(move |_| Msg::OpenVariantFileDialog(id.clone()))
    };

    let body = if let Some(resource) = component.pending_images.named(&variant.id) {
        pending_preview(&resource, link, open_dialog)
    } else if let Some(url) = variant.image_url.clone() {
        let clear = {
            let id = variant.id.clone();
            link.callback(move |_| Msg::ClearVariantImageUrl(id.clone()))
        };
        stored_preview(url, link, open_dialog, clear)
    } else {
        icon_button("add_photo_alternate", "Añadir imagen", open_dialog, false)
    };

    html! {
        <div class="image-slot variant">
            <h4>{"Imagen de la variante"}</h4>
            { body }
        </div>
    }
}

fn build_variant_pagination(
    component: &ProductFormComponent,
    link: &Scope<ProductFormComponent>,
) -> Html {
    let len = component.product.variants.len();
    let total = component.variants_view.total_pages(len);
    if total <= 1 {
        return html! {};
    }
    let current = component.variants_view.current_page();

    html! {
        <div class="pagination">
            <button
                disabled={current == 1}
                onclick={link.callback(move |_| Msg::GoToVariantPage(current - 1))}
            >
                {"Anterior"}
            </button>
            <span>{ format!("Página {} de {}", current, total) }</span>
            <button
                disabled={current == total}
                onclick={link.callback(move |_| Msg::GoToVariantPage(current + 1))}
            >
                {"Siguiente"}
            </button>
        </div>
    }
}

/// The hidden file inputs backing the "add image" buttons. Input values
/// are cleared after reading so the same file can be picked again later.
fn build_file_inputs(
    component: &ProductFormComponent,
    link: &Scope<ProductFormComponent>,
) -> Html {
    html! {
        <>
            <input
                ref={component.primary_input_ref.clone()}
                type="file"
                accept="image/*"
                style="display:none;"
                onchange={link.batch_callback(|e: Event| {
                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                    let picked = input.files().and_then(|files| files.item(0));
                    input.set_value("");
                    picked.map(Msg::PrimarySelected)
                })}
            />
            <input
                ref={component.additional_input_ref.clone()}
                type="file"
                accept="image/*"
                multiple=true
                style="display:none;"
                onchange={link.batch_callback(|e: Event| {
                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                    let mut picked = Vec::new();
                    if let Some(files) = input.files() {
                        for index in 0..files.length() {
                            if let Some(file) = files.item(index) {
                                picked.push(file);
                            }
                        }
                    }
                    input.set_value("");
                    (!picked.is_empty()).then(|| Msg::AdditionalSelected(picked))
                })}
            />
            <input
                ref={component.variant_input_ref.clone()}
                type="file"
                accept="image/*"
                style="display:none;"
                onchange={link.batch_callback(|e: Event| {
                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                    let picked = input.files().and_then(|files| files.item(0));
                    input.set_value("");
                    picked.map(Msg::VariantImageSelected)
                })}
            />
        </>
    }
}

fn build_remove_dialog(
    component: &ProductFormComponent,
    link: &Scope<ProductFormComponent>,
) -> Html {
    html! {
        <ConfirmSheet
            node_ref={component.remove_dialog_ref.clone()}
            title="Eliminar variante"
            message="La variante y su imagen pendiente se descartarán. ¿Continuar?"
            on_confirm={link.callback(|_| Msg::ConfirmRemoveVariant)}
            on_cancel={link.callback(|_| Msg::CancelRemoveVariant)}
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
