use uuid::Uuid;
use web_sys::js_sys;
use yew::{html, AttrValue, Callback, Component, Context, Html, MouseEvent, NodeRef, Properties};

/// Material style top sheet: a full screen overlay container that becomes
/// visible when the `show` class is added to its root node. Content is
/// arbitrary; the confirmation variant used by the destructive actions of
/// the forms lives below as [`ConfirmSheet`].
pub struct YwMaterialTopSheet {
    pub id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub node_ref: NodeRef,
}

impl Component for YwMaterialTopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("id-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <>
                <div class="top-sheet" id={self.id.clone()} ref={ctx.props().node_ref.clone()}>
                        { ctx.props().children.clone() }
                </div>
            </>
        }
    }
}

pub fn open_top_sheet(top_sheet_ref: NodeRef) {
    if let Some(top_sheet) = top_sheet_ref.cast::<web_sys::HtmlElement>() {
        let class_name = "show";
        let func = js_sys::Function::new_no_args(&format!(
            "document.querySelector('#{}').classList.add('{}')",
            top_sheet.id(),
            class_name
        ));
        web_sys::window().unwrap().set_timeout_with_callback_and_timeout_and_arguments_0(&func, 50).unwrap();
    }
}

pub fn close_top_sheet(top_sheet_ref: NodeRef) {
    if let Some(top_sheet) = top_sheet_ref.cast::<web_sys::HtmlElement>() {
        let class_name = "show";
        let func = js_sys::Function::new_no_args(&format!(
            "document.querySelector('#{}').classList.remove('{}')",
            top_sheet.id(),
            class_name
        ));
        web_sys::window().unwrap().set_timeout_with_callback_and_timeout_and_arguments_0(&func, 50).unwrap();
    }
}

#[derive(Properties, PartialEq)]
pub struct ConfirmSheetProps {
    pub node_ref: NodeRef,
    pub title: AttrValue,
    pub message: AttrValue,
    #[prop_or(AttrValue::Static("Eliminar"))]
    pub confirm_label: AttrValue,
    pub on_confirm: Callback<MouseEvent>,
    pub on_cancel: Callback<MouseEvent>,
}

/// Confirmation top sheet for destructive actions. Collection items are
/// only removed after the user confirms here.
#[yew::function_component(ConfirmSheet)]
pub fn confirm_sheet(props: &ConfirmSheetProps) -> Html {
    html! {
        <YwMaterialTopSheet node_ref={props.node_ref.clone()}>
            <div style="position:fixed;top:0;left:0;width:100vw;height:100vh;background:rgba(0,0,0,0.6);z-index:9999;display:flex;align-items:center;justify-content:center;">
                <div style="background:#fff;border-radius:8px;padding:24px;max-width:420px;box-shadow:0 4px 24px rgba(0,0,0,0.3);">
                    <h3 style="margin-top:0;">{ props.title.clone() }</h3>
                    <p>{ props.message.clone() }</p>
                    <div style="display:flex;justify-content:flex-end;gap:8px;">
                        <button
                            style="padding:0.5rem 1rem;background:#eee;border:none;border-radius:4px;cursor:pointer;"
                            onclick={props.on_cancel.clone()}
                        >
                            { "Cancelar" }
                        </button>
                        <button
                            style="padding:0.5rem 1rem;background:#d32f2f;color:#fff;border:none;border-radius:4px;cursor:pointer;"
                            onclick={props.on_confirm.clone()}
                        >
                            { props.confirm_label.clone() }
                        </button>
                    </div>
                </div>
            </div>
        </YwMaterialTopSheet>
    }
}
