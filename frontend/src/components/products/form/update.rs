//! Update function for the product form, following the same Elm-style
//! architecture as the rest of the app: it receives the current state, the
//! `Context`, and a `Msg`, mutates the state, and returns whether the view
//! must re-render.
//!
//! Key behaviors
//! - Every working-copy mutation re-evaluates the dirty signal
//!   synchronously and republishes the navigation guard flag.
//! - Image selection registers pending resources; nothing is uploaded
//!   until `Msg::Save`.
//! - `Msg::Save` runs the deferred uploads strictly before the save POST,
//!   guarded against concurrent submissions.
//! - Variant list mutations are mirrored into the pagination controller so
//!   the expanded item stays visible.

use gloo_console::error;
use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::product::{Product, ProductVariant};

use crate::components::helpers::{parse_tags, set_app_dirty_flag, show_toast};
use crate::form_engine::browser::{ApiStorageUploader, BrowserFile};
use crate::form_engine::pending_resources::ResourceFile;
use crate::tops_sheet::yw_material_top_sheet::{close_top_sheet, open_top_sheet};

use super::helpers::{
    empty_product, merge_uploaded_urls, new_variant, parse_price_cents, product_snapshot,
};
use super::messages::Msg;
use super::state::ProductFormComponent;

/// Central update function for the component.
pub fn update(
    component: &mut ProductFormComponent,
    ctx: &Context<ProductFormComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::UpdateName(value) => {
            component.product.name = value;
            refresh_guard(component);
            true
        }
        Msg::UpdateDescription(value) => {
            component.product.description = Some(value);
            refresh_guard(component);
            true
        }
        Msg::UpdateTags(value) => {
            component.product.tags = parse_tags(&value);
            refresh_guard(component);
            true
        }
        Msg::TogglePublished(value) => {
            component.product.published = Some(value);
            refresh_guard(component);
            true
        }

        Msg::AddVariant => {
            let variant = new_variant();
            let id = variant.id.clone();
            component.product.variants.push(variant);
            component
                .variants_view
                .on_item_added(&id, component.product.variants.len());
            refresh_guard(component);
            true
        }
        Msg::ToggleVariant(id) => {
            component.variants_view.toggle_expand(&id);
            true
        }
        Msg::GoToVariantPage(page) => {
            let len = component.product.variants.len();
            component.variants_view.go_to_page(page, len);
            true
        }
        Msg::MoveVariantUp(id) => move_variant(component, &id, -1),
        Msg::MoveVariantDown(id) => move_variant(component, &id, 1),
        Msg::UpdateVariantTitle(id, value) => {
            if let Some(variant) = variant_mut(component, &id) {
                variant.title = value;
            }
            refresh_guard(component);
            true
        }
        Msg::UpdateVariantSku(id, value) => {
            if let Some(variant) = variant_mut(component, &id) {
                variant.sku = if value.trim().is_empty() { None } else { Some(value) };
            }
            refresh_guard(component);
            true
        }
        Msg::UpdateVariantPrice(id, value) => {
            if let Some(variant) = variant_mut(component, &id) {
                variant.price_cents = parse_price_cents(&value);
            }
            refresh_guard(component);
            true
        }
        Msg::RequestRemoveVariant(id) => {
            component.remove_candidate = Some(id);
            open_top_sheet(component.remove_dialog_ref.clone());
            true
        }
        Msg::ConfirmRemoveVariant => {
            if let Some(id) = component.remove_candidate.take() {
                if let Some(pos) = component
                    .product
                    .variants
                    .iter()
                    .position(|variant| variant.id == id)
                {
                    component.product.variants.remove(pos);
                    // The variant's pending image slot dies with it.
                    if let Some(slot) = component.pending_images.named(&id) {
                        component.pending_images.remove(&slot.id);
                    }
                    component
                        .variants_view
                        .on_item_removed(&id, component.product.variants.len());
                }
            }
            close_top_sheet(component.remove_dialog_ref.clone());
            refresh_guard(component);
            true
        }
        Msg::CancelRemoveVariant => {
            component.remove_candidate = None;
            close_top_sheet(component.remove_dialog_ref.clone());
            true
        }

        Msg::OpenPrimaryFileDialog => {
            if let Some(input) = component.primary_input_ref.cast::<web_sys::HtmlInputElement>() {
                input.click();
            }
            false
        }
        Msg::PrimarySelected(file) => {
            if let Err(reason) = component
                .pending_images
                .register_primary(BrowserFile::new(file))
            {
                show_toast(&format!("Imagen principal: {}", reason));
            }
            refresh_guard(component);
            true
        }
        Msg::OpenAdditionalFileDialog => {
            if let Some(input) = component
                .additional_input_ref
                .cast::<web_sys::HtmlInputElement>()
            {
                input.click();
            }
            false
        }
        Msg::AdditionalSelected(files) => {
            let registration = component
                .pending_images
                .register_additional(files.into_iter().map(BrowserFile::new).collect());
            for (file, reason) in &registration.rejected {
                show_toast(&format!("\"{}\": {}", file.name(), reason));
            }
            refresh_guard(component);
            true
        }
        Msg::OpenVariantFileDialog(id) => {
            component.variant_image_target = Some(id);
            if let Some(input) = component.variant_input_ref.cast::<web_sys::HtmlInputElement>() {
                input.click();
            }
            false
        }
        Msg::VariantImageSelected(file) => {
            if let Some(id) = component.variant_image_target.take() {
                if let Err(reason) = component
                    .pending_images
                    .register_named(&id, BrowserFile::new(file))
                {
                    show_toast(&format!("Imagen de variante: {}", reason));
                }
            }
            refresh_guard(component);
            true
        }
        Msg::RemovePendingResource(id) => {
            component.pending_images.remove(&id);
            refresh_guard(component);
            true
        }
        Msg::ClearPrimaryImageUrl => {
            component.product.primary_image_url = None;
            refresh_guard(component);
            true
        }
        Msg::RemoveAdditionalImageUrl(index) => {
            if index < component.product.additional_image_urls.len() {
                component.product.additional_image_urls.remove(index);
            }
            refresh_guard(component);
            true
        }
        Msg::ClearVariantImageUrl(id) => {
            if let Some(variant) = variant_mut(component, &id) {
                variant.image_url = None;
            }
            refresh_guard(component);
            true
        }
        Msg::OpenImageZoom(url) => {
            component.zoom_url = Some(url);
            open_top_sheet(component.zoom_dialog_ref.clone());
            true
        }
        Msg::CloseImageZoom => {
            component.zoom_url = None;
            close_top_sheet(component.zoom_dialog_ref.clone());
            true
        }

        Msg::Save => {
            if component.submitting {
                // A save is already in flight; this one is ignored.
                return false;
            }
            if component.product.name.trim().is_empty() {
                show_toast("El nombre del producto es obligatorio.");
                return true;
            }
            // Jump to and expand the first variant that fails validation.
            if let Some(invalid) = component
                .product
                .variants
                .iter()
                .find(|variant| variant.title.trim().is_empty())
            {
                let id = invalid.id.clone();
                component
                    .variants_view
                    .expand(&id, &component.product.variants);
                show_toast("Cada variante necesita un título.");
                return true;
            }
            component.submitting = true;

            let pending = component.pending_images.clone();
            let mut product = component.product.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let folder = format!("products/{}", product.id);
                // Uploads finish (or fail fast) strictly before the save
                // request is issued.
                match pending.upload_all(&ApiStorageUploader, &folder).await {
                    Ok(uploaded) => {
                        merge_uploaded_urls(&mut product, &uploaded);
                        match Request::post("/api/products/save").json(&product) {
                            Ok(request) => match request.send().await {
                                Ok(response) if response.status() == 200 => {
                                    let saved =
                                        response.json::<Product>().await.unwrap_or(product);
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
            component.product = saved.clone();
            component.saved_product = saved;
            component.pending_images.release_all();
            component.tracker.rebaseline(&product_snapshot(&component.product));
            refresh_guard(component);
            show_toast("Producto guardado correctamente.");
            true
        }
        Msg::SaveFailed(message) => {
            component.submitting = false;
            error!("No se pudo guardar el producto:", message.clone());
            show_toast(&format!("Error al guardar el producto: {}", message));
            true
        }
        Msg::SetProduct(loaded) => {
            let product = loaded.unwrap_or_else(empty_product);
            component.product = product.clone();
            component.saved_product = product;
            component.pending_images.release_all();
            component.variants_view.collapse();
            component
                .variants_view
                .go_to_page(1, component.product.variants.len());
            component.tracker.rebaseline(&product_snapshot(&component.product));
            refresh_guard(component);
            true
        }
        Msg::Cancel => {
            component.product = component.saved_product.clone();
            component.pending_images.release_all();
            component.variants_view.collapse();
            component
                .variants_view
                .go_to_page(1, component.product.variants.len());
            refresh_guard(component);
            show_toast("Cambios descartados.");
            true
        }
    }
}

/// Republishes the navigation guard flag after a working-copy or pending
/// set mutation.
fn refresh_guard(component: &ProductFormComponent) {
    set_app_dirty_flag(component.has_unsaved_work());
}

fn variant_mut<'a>(
    component: &'a mut ProductFormComponent,
    id: &str,
) -> Option<&'a mut ProductVariant> {
    component
        .product
        .variants
        .iter_mut()
        .find(|variant| variant.id == id)
}

fn move_variant(component: &mut ProductFormComponent, id: &str, delta: isize) -> bool {
    let variants = &mut component.product.variants;
    let Some(pos) = variants.iter().position(|variant| variant.id == id) else {
        return false;
    };
    let target = pos as isize + delta;
    if target < 0 || target as usize >= variants.len() {
        return false;
    }
    variants.swap(pos, target as usize);
    component
        .variants_view
        .ensure_expanded_visible(&component.product.variants);
    refresh_guard(component);
    true
}
