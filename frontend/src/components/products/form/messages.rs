use common::model::product::Product;

pub enum Msg {
    UpdateName(String),
    UpdateDescription(String),
    UpdateTags(String),
    TogglePublished(bool),

    AddVariant,
    ToggleVariant(String),
    GoToVariantPage(usize),
    MoveVariantUp(String),
    MoveVariantDown(String),
    UpdateVariantTitle(String, String),
    UpdateVariantSku(String, String),
    UpdateVariantPrice(String, String),
    RequestRemoveVariant(String),
    ConfirmRemoveVariant,
    CancelRemoveVariant,

    OpenPrimaryFileDialog,
    PrimarySelected(web_sys::File),
    OpenAdditionalFileDialog,
    AdditionalSelected(Vec<web_sys::File>),
    OpenVariantFileDialog(String),
    VariantImageSelected(web_sys::File),
    RemovePendingResource(String),
    ClearPrimaryImageUrl,
    RemoveAdditionalImageUrl(usize),
    ClearVariantImageUrl(String),
    OpenImageZoom(String),
    CloseImageZoom,

    Save,
    SaveSucceeded(Product),
    SaveFailed(String),
    SetProduct(Option<Product>),
    Cancel,
}
