use common::model::blog::Blog;

pub enum Msg {
    SetTab(String),
    UpdateTitle(String),
    UpdateContent(String),
    UpdateTags(String),
    TogglePublished(bool),

    AddSubsection,
    ToggleSubsection(String),
    GoToSubsectionPage(usize),
    MoveSubsectionUp(String),
    MoveSubsectionDown(String),
    UpdateSubsectionHeading(String, String),
    UpdateSubsectionBody(String, String),
    RequestRemoveSubsection(String),
    ConfirmRemoveSubsection,
    CancelRemoveSubsection,

    OpenCoverFileDialog,
    CoverSelected(web_sys::File),
    RemovePendingCover(String),
    ClearCoverImageUrl,

    Save,
    SaveSucceeded(Blog),
    SaveFailed(String),
    SetBlog(Option<Blog>),
    Cancel,
}
