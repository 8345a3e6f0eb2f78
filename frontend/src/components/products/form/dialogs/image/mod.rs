use yew::html::Scope;
use yew::prelude::*;

use crate::components::products::form::{Msg, ProductFormComponent};
use crate::tops_sheet::yw_material_top_sheet::YwMaterialTopSheet;

/// Full screen zoom view for a product image, either a stored URL or the
/// preview handle of a pending one.
pub fn image_zoom_dialog(
    component: &ProductFormComponent,
    link: &Scope<ProductFormComponent>,
) -> Html {
    html! {
        <YwMaterialTopSheet node_ref={component.zoom_dialog_ref.clone()}>
            <div style="position:fixed;top:0;left:0;width:100vw;height:100vh;background:rgba(0,0,0,0.85);z-index:9999;display:flex;flex-direction:column;align-items:center;justify-content:center;">
                <button
                    onclick={link.callback(|_| Msg::CloseImageZoom)}
                    style="position:absolute;top:24px;right:32px;z-index:10000;padding:0.5rem 1rem;font-size:1.5rem;background:#fff;border:none;border-radius:4px;cursor:pointer;"
                >
                    { "✕" }
                </button>
                {
                    if let Some(url) = &component.zoom_url {
                        html! { <img src={url.clone()} style="max-width:80vw;max-height:80vh;" /> }
                    } else {
                        html! { <span style="color:#fff;">{"No hay imagen seleccionada"}</span> }
                    }
                }
            </div>
        </YwMaterialTopSheet>
    }
}
