use yew::prelude::*;

/// Properties for the `BlogFormComponent`. With `Some(id)` the post is
/// loaded from the backend on first render; with `None` the form starts on
/// a new empty post.
#[derive(Properties, PartialEq, Clone)]
pub struct BlogFormProps {
    #[prop_or_default]
    pub blog_id: Option<String>,
}
